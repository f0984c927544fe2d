use std::fmt;

use crate::{Color, Gravity, Semantics};

pub type ViewId = u64;

/// What a render node draws. The host engine owns layout and painting;
/// these nodes only describe the widget's current state.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Column,
    Text {
        text: String,
        color: Color,
        font_size: f32,
        gravity: Gravity,
    },
    TextField {
        text: String,
        hint: String,
        focused: bool,
        font_size: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub visible: bool,
    pub alpha: f32,
    pub translate_y: f32,
    pub padding_left: f32,
    pub background: Color,
    pub semantics: Option<Semantics>,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            visible: true,
            alpha: 1.0,
            translate_y: 0.0,
            padding_left: 0.0,
            background: Color::TRANSPARENT,
            semantics: None,
            children: vec![],
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
    pub fn translate_y(mut self, dy: f32) -> Self {
        self.translate_y = dy;
        self
    }
    pub fn padding_left(mut self, px: f32) -> Self {
        self.padding_left = px;
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:width$}", "", width = depth * 2)?;
        match &self.kind {
            ViewKind::Column => write!(f, "Column bg={}", self.background.to_argb_hex())?,
            ViewKind::Text {
                text,
                color,
                font_size,
                gravity,
            } => write!(
                f,
                "Text {text:?} color={} size={font_size:.1} gravity={gravity:?}",
                color.to_argb_hex()
            )?,
            ViewKind::TextField {
                text,
                hint,
                focused,
                font_size,
            } => write!(
                f,
                "TextField text={text:?} hint={hint:?} focused={focused} size={font_size:.1}"
            )?,
        }
        if self.padding_left != 0.0 {
            write!(f, " pad={:.1}", self.padding_left)?;
        }
        if self.alpha != 1.0 || self.translate_y != 0.0 {
            write!(f, " alpha={:.2} dy={:.1}", self.alpha, self.translate_y)?;
        }
        if !self.visible {
            write!(f, " [hidden]")?;
        }
        for child in &self.children {
            writeln!(f)?;
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented one-node-per-line dump of the tree.
impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
