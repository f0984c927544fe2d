use floatlabel_core::{
    Color, Gravity, Persist, Role, Semantics, Signal, View, ViewId, ViewKind, signal,
};
use serde::{Deserialize, Serialize};

use crate::anim::{LabelAnimation, SlideAnimation};

/// Label text is this much smaller than the editable text.
pub const LABEL_SCALE: f32 = 1.3;
const LINE_HEIGHT: f32 = 1.2;

/// The floating label child.
pub struct FloatingLabel {
    text: String,
    color: Signal<Color>,
    visible: bool,
    gravity: Gravity,
    text_size: f32,
    padding_left: f32,
    slide: Option<SlideAnimation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelState {
    pub text: String,
    pub visible: bool,
}

impl FloatingLabel {
    pub fn new(text_size: f32, gravity: Gravity, color: Color) -> Self {
        Self {
            text: String::new(),
            color: signal(color),
            visible: false,
            gravity,
            text_size,
            padding_left: 0.0,
            slide: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn color(&self) -> Color {
        self.color.get()
    }

    /// Shared handle; subscribers see every color the label is given.
    pub fn color_signal(&self) -> Signal<Color> {
        self.color.clone()
    }

    pub fn set_color(&mut self, color: Color) {
        self.color.set(color);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn set_padding_left(&mut self, px: f32) {
        self.padding_left = px;
    }

    /// Plays a slide, replacing any slide still running.
    pub fn start_animation(&mut self, anim: LabelAnimation) {
        self.slide = Some(SlideAnimation::start(anim));
    }

    pub fn current_animation(&self) -> Option<LabelAnimation> {
        self.slide.as_ref().map(SlideAnimation::kind)
    }

    /// Advances the running slide. Returns `true` while one is still running.
    pub fn frame(&mut self) -> bool {
        let Some(slide) = self.slide.as_mut() else {
            return false;
        };
        if slide.update() {
            return true;
        }
        self.slide = None;
        false
    }

    pub fn render(&self, id: ViewId) -> View {
        let (alpha, dy) = self
            .slide
            .as_ref()
            .map_or((1.0, 0.0), |s| s.offset(self.text_size * LINE_HEIGHT));
        View::new(
            id,
            ViewKind::Text {
                text: self.text.clone(),
                color: self.color(),
                font_size: self.text_size,
                gravity: self.gravity,
            },
        )
        // a dismissal keeps drawing until its slide ends
        .visible(self.visible || self.slide.is_some())
        .alpha(alpha)
        .translate_y(dy)
        .padding_left(self.padding_left)
        .semantics(Semantics::new(Role::Text).label(self.text.clone()))
    }
}

impl Persist for FloatingLabel {
    const KIND: &'static str = "floatlabel.FloatingLabel";
    type Saved = LabelState;

    fn save(&self) -> LabelState {
        LabelState {
            text: self.text.clone(),
            visible: self.visible,
        }
    }

    fn restore(&mut self, saved: LabelState) {
        self.text = saved.text;
        self.visible = saved.visible;
        self.slide = None;
    }
}
