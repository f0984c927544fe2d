use floatlabel_core::{AttributeSet, Color, FieldError, Gravity};
use serde::{Deserialize, Serialize};

pub const ATTR_GRAVITY: &str = "gravity";
pub const ATTR_FOCUSED_COLOR: &str = "textColorHintFocused";
pub const ATTR_UNFOCUSED_COLOR: &str = "textColorHintUnFocused";

/// Style of a float-label field, fixed at construction.
///
/// Every field has a default, so an empty attribute set (or none at all)
/// yields `Start` / black / dark gray without raising an error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub gravity: Gravity,
    #[serde(rename = "textColorHintFocused")]
    pub focused_color: Color,
    #[serde(rename = "textColorHintUnFocused")]
    pub unfocused_color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            gravity: Gravity::Start,
            focused_color: Color::BLACK,
            unfocused_color: Color::DARK_GRAY,
        }
    }
}

impl FieldConfig {
    pub fn from_attributes(attrs: Option<&AttributeSet>) -> Self {
        let defaults = Self::default();
        let Some(attrs) = attrs else {
            return defaults;
        };
        Self {
            gravity: attrs.gravity(ATTR_GRAVITY).unwrap_or(defaults.gravity),
            focused_color: attrs
                .color(ATTR_FOCUSED_COLOR)
                .unwrap_or(defaults.focused_color),
            unfocused_color: attrs
                .color(ATTR_UNFOCUSED_COLOR)
                .unwrap_or(defaults.unfocused_color),
        }
    }

    /// Style given as JSON, e.g. `{"gravity":"center","textColorHintFocused":"#FF0061A4"}`.
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }
    pub fn focused_color(mut self, color: Color) -> Self {
        self.focused_color = color;
        self
    }
    pub fn unfocused_color(mut self, color: Color) -> Self {
        self.unfocused_color = color;
        self
    }
}
