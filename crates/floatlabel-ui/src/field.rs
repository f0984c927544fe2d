//! # FloatLabelField
//!
//! A vertical container holding a floating label above an editable text
//! child. The label mirrors the editable's hint, appears (sliding up) once
//! the field has content and disappears (sliding down) when it is emptied.
//! Its color cross-fades between the configured unfocused and focused colors
//! whenever the editable child gains or loses focus.
//!
//! All editing and focus changes should go through the field so the label
//! stays in sync. Code that edits the child directly through
//! [`FloatLabelField::editable_field_mut`] must call
//! [`FloatLabelField::notify_text_changed`] afterwards.
//!
//! Animations advance on [`FloatLabelField::frame`], using the current
//! thread's animation clock.

use std::rc::Rc;

use floatlabel_core::{
    AttributeSet, Color, Context, FieldError, Parcel, Persist, Role, Semantics, Signal, View,
    ViewId, ViewKind,
};
use serde::{Deserialize, Serialize};

use crate::anim::LabelAnimation;
use crate::config::FieldConfig;
use crate::focus::FocusColorController;
use crate::label::{FloatingLabel, LABEL_SCALE};
use crate::textfield::EditableText;
use crate::visibility::{LabelVisibility, LabelVisibilityController};

pub type AnimationListener = Rc<dyn Fn(LabelAnimation)>;

/// The hosting container's own view state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ViewId,
    pub enabled: bool,
}

impl Persist for Container {
    const KIND: &'static str = "floatlabel.Container";
    type Saved = Container;

    fn save(&self) -> Container {
        *self
    }
    fn restore(&mut self, saved: Container) {
        *self = saved;
    }
}

/// Everything a field saves, in restore order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub superstate: Parcel,
    pub editable: Parcel,
    pub label: Parcel,
}

struct Children {
    editable: EditableText,
    label: FloatingLabel,
    visibility: LabelVisibilityController,
    focus: FocusColorController,
}

pub struct FloatLabelField {
    config: FieldConfig,
    container: Container,
    children: Option<Children>,
    animation_listeners: Vec<AnimationListener>,
}

impl FloatLabelField {
    pub const KIND: &'static str = "floatlabel.FloatLabelField";

    pub fn new(config: FieldConfig) -> Self {
        Self::build(&Context::default(), config, None)
    }

    /// Builds a field from layout attributes. Without a host context the
    /// field is inert: it has no children, ignores edits and cannot save or
    /// restore state.
    pub fn inflate(ctx: Option<&Context>, attrs: Option<&AttributeSet>) -> Self {
        let config = FieldConfig::from_attributes(attrs);
        match ctx {
            Some(ctx) => Self::build(ctx, config, attrs),
            None => {
                log::warn!("FloatLabelField inflated without a context; field is inert");
                Self {
                    config,
                    container: Container {
                        id: 0,
                        enabled: true,
                    },
                    children: None,
                    animation_listeners: Vec::new(),
                }
            }
        }
    }

    fn build(ctx: &Context, config: FieldConfig, attrs: Option<&AttributeSet>) -> Self {
        let editable = EditableText::from_attributes(ctx, attrs);

        let label_size = ctx.sp_to_px(ctx.px_to_sp(editable.text_size()) / LABEL_SCALE);
        let mut label = FloatingLabel::new(label_size, config.gravity, config.unfocused_color);
        label.set_text(editable.hint());
        label.set_padding_left(editable.padding_left());

        let visibility = LabelVisibilityController::new(editable.len());
        label.set_visible(visibility.visibility().is_shown());

        Self {
            config,
            container: Container {
                id: 0,
                enabled: true,
            },
            children: Some(Children {
                editable,
                label,
                visibility,
                focus: FocusColorController::new(config.focused_color, config.unfocused_color),
            }),
            animation_listeners: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: ViewId) -> Self {
        self.container.id = id;
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn id(&self) -> ViewId {
        self.container.id
    }

    pub fn is_inert(&self) -> bool {
        self.children.is_none()
    }

    pub fn is_enabled(&self) -> bool {
        self.container.enabled
    }

    /// A disabled field drops focus and refuses to take it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.container.enabled = enabled;
        if !enabled {
            self.set_focused(false);
        }
    }

    /// The editable content, or `""` when there is none.
    pub fn get_text(&self) -> String {
        self.children
            .as_ref()
            .and_then(|c| c.editable.content())
            .unwrap_or_default()
            .to_string()
    }

    pub fn set_text(&mut self, text: &str) {
        self.edit(|e| e.set_text(text));
    }

    pub fn insert_text(&mut self, text: &str) {
        self.edit(|e| e.insert_text(text));
    }

    pub fn delete_backward(&mut self) {
        self.edit(EditableText::delete_backward);
    }

    pub fn delete_forward(&mut self) {
        self.edit(EditableText::delete_forward);
    }

    pub fn clear(&mut self) {
        self.edit(|e| e.set_content(None));
    }

    pub fn hint(&self) -> &str {
        self.children.as_ref().map_or("", |c| c.editable.hint())
    }

    /// Sets the editable's placeholder and the label text together.
    pub fn set_hint(&mut self, text: &str) {
        if let Some(c) = self.children.as_mut() {
            c.editable.set_hint(text);
            c.label.set_text(text);
        }
    }

    pub fn editable_field(&self) -> Option<&EditableText> {
        self.children.as_ref().map(|c| &c.editable)
    }

    /// Direct access to the editable child. Edits made here are not seen
    /// by the label until [`Self::notify_text_changed`] is called.
    pub fn editable_field_mut(&mut self) -> Option<&mut EditableText> {
        self.children.as_mut().map(|c| &mut c.editable)
    }

    pub fn label(&self) -> Option<&FloatingLabel> {
        self.children.as_ref().map(|c| &c.label)
    }

    pub fn label_visibility(&self) -> LabelVisibility {
        self.children
            .as_ref()
            .map_or(LabelVisibility::Hidden, |c| c.visibility.visibility())
    }

    pub fn label_color(&self) -> Option<Color> {
        self.label().map(FloatingLabel::color)
    }

    /// Subscribable label color; `None` for an inert field.
    pub fn label_color_signal(&self) -> Option<Signal<Color>> {
        self.label().map(FloatingLabel::color_signal)
    }

    /// Called with every label slide the field starts.
    pub fn on_label_animation(&mut self, f: impl Fn(LabelAnimation) + 'static) {
        self.animation_listeners.push(Rc::new(f));
    }

    fn edit(&mut self, f: impl FnOnce(&mut EditableText)) {
        if let Some(c) = self.children.as_mut() {
            f(&mut c.editable);
            self.notify_text_changed();
        }
    }

    /// Text-change event: re-evaluates label visibility against the
    /// editable's current length.
    pub fn notify_text_changed(&mut self) {
        let Some(c) = self.children.as_mut() else {
            return;
        };
        let Some(anim) = c.visibility.on_text_changed(c.editable.len()) else {
            return;
        };
        c.label.set_visible(c.visibility.visibility().is_shown());
        c.label.start_animation(anim);
        log::debug!(
            "label {:?}: playing {}",
            c.visibility.visibility(),
            anim.resource_name()
        );
        for listener in &self.animation_listeners {
            listener(anim);
        }
    }

    pub fn is_focused(&self) -> bool {
        self.editable_field().is_some_and(EditableText::is_focused)
    }

    /// Focus-change event for the editable child. Repeating the current
    /// focus state does nothing.
    pub fn set_focused(&mut self, has_focus: bool) {
        let enabled = self.container.enabled;
        let Some(c) = self.children.as_mut() else {
            return;
        };
        if has_focus && !enabled {
            return;
        }
        if c.editable.set_focused(has_focus) {
            c.focus.on_focus_changed(has_focus);
            c.label.set_color(c.focus.color());
        }
    }

    pub fn focus(&mut self) {
        self.set_focused(true);
    }

    pub fn blur(&mut self) {
        self.set_focused(false);
    }

    /// Advances label slides and color transitions by the frame clock.
    /// Returns `true` while anything is still animating.
    pub fn frame(&mut self) -> bool {
        let Some(c) = self.children.as_mut() else {
            return false;
        };
        let sliding = c.label.frame();
        if let Some(color) = c.focus.tick() {
            log::trace!("label color {}", color.to_argb_hex());
            c.label.set_color(color);
        }
        sliding || c.focus.active().is_some()
    }

    /// Applies a focus-transition progress fraction delivered by an external
    /// animation engine instead of the frame clock.
    pub fn seek_focus_transition(&mut self, fraction: f32) {
        if let Some(c) = self.children.as_mut()
            && let Some(color) = c.focus.seek(fraction)
        {
            c.label.set_color(color);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.children.as_ref().is_some_and(|c| {
            c.label.current_animation().is_some() || c.focus.active().is_some()
        })
    }

    /// Column with the label above the editable child.
    pub fn render(&self) -> View {
        let id = self.container.id;
        let children = self.children.as_ref().map_or_else(Vec::new, |c| {
            vec![
                c.label.render(id.wrapping_add(1)),
                c.editable.render(id.wrapping_add(2)),
            ]
        });
        View::new(id, ViewKind::Column)
            .background(Color::TRANSPARENT)
            .semantics(Semantics::new(Role::Container))
            .with_children(children)
    }

    /// Captures the container's own state followed by each child's.
    pub fn save_state(&self) -> Result<Parcel, FieldError> {
        let c = self.children.as_ref().ok_or(FieldError::MissingContext)?;
        let state = PersistedState {
            superstate: self.container.save_parcel()?,
            editable: c.editable.save_parcel()?,
            label: c.label.save_parcel()?,
        };
        Parcel::pack(Self::KIND, &state)
    }

    /// Restores a parcel produced by [`Self::save_state`]: container first,
    /// then the editable, then the label. The whole parcel is decoded before
    /// anything is applied, so a mismatch leaves the field untouched.
    ///
    /// Focus is not part of the saved state. The label settles on the rest
    /// color for whatever focus the editable has after the restore.
    pub fn restore_state(&mut self, parcel: &Parcel) -> Result<(), FieldError> {
        if self.children.is_none() {
            return Err(FieldError::MissingContext);
        }
        let state: PersistedState = parcel.unpack(Self::KIND)?;
        let container = Container::read_parcel(&state.superstate)?;
        let editable = EditableText::read_parcel(&state.editable)?;
        let label = FloatingLabel::read_parcel(&state.label)?;

        self.container.restore(container);
        let Some(c) = self.children.as_mut() else {
            return Err(FieldError::MissingContext);
        };
        c.editable.restore(editable);
        if !container.enabled && c.editable.set_focused(false) {
            log::debug!("restored a disabled container; dropping focus");
        }
        c.label.restore(label);

        let expected = LabelVisibility::for_len(c.editable.len());
        if c.label.is_visible() != expected.is_shown() {
            log::warn!("restored label visibility disagrees with text; using {expected:?}");
            c.label.set_visible(expected.is_shown());
        }
        c.visibility.reset(expected);
        let rest = c.focus.rest_color(c.editable.is_focused());
        c.focus.settle(rest);
        c.label.set_color(rest);
        Ok(())
    }
}
