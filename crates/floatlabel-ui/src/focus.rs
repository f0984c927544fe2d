use floatlabel_core::Color;

use crate::anim::ColorTransition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusDirection {
    /// unfocused → focused color
    Gain,
    /// focused → unfocused color
    Lose,
}

/// Cross-fades the label color when the editable child gains or loses focus.
///
/// Each direction's transition is built on first use and reused afterwards.
/// Only one transition drives the color at a time: starting one replaces
/// whichever was in flight.
pub struct FocusColorController {
    focused: Color,
    unfocused: Color,
    gain: Option<ColorTransition>,
    lose: Option<ColorTransition>,
    active: Option<FocusDirection>,
    color: Color,
}

impl FocusColorController {
    pub fn new(focused: Color, unfocused: Color) -> Self {
        Self {
            focused,
            unfocused,
            gain: None,
            lose: None,
            active: None,
            color: unfocused,
        }
    }

    /// The label's current display color.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn active(&self) -> Option<FocusDirection> {
        self.active
    }

    /// Number of direction transitions built so far (at most two).
    pub fn transitions_built(&self) -> usize {
        self.gain.is_some() as usize + self.lose.is_some() as usize
    }

    pub fn on_focus_changed(&mut self, has_focus: bool) {
        let dir = if has_focus {
            FocusDirection::Gain
        } else {
            FocusDirection::Lose
        };
        if let Some(prev) = self.active {
            log::trace!("focus transition {prev:?} superseded by {dir:?}");
        }
        let transition = self.transition(dir);
        transition.start();
        let color = transition.color();
        self.active = Some(dir);
        self.color = color;
        log::debug!("label color transition {dir:?} started");
    }

    /// Advances the running transition with the frame clock. Returns the new
    /// color when it changed this frame.
    pub fn tick(&mut self) -> Option<Color> {
        let dir = self.active?;
        let transition = self.transition(dir);
        let running = transition.update();
        let color = transition.color();
        if !running {
            self.active = None;
        }
        self.apply(color)
    }

    /// Applies a progress fraction delivered by an external animation engine.
    pub fn seek(&mut self, fraction: f32) -> Option<Color> {
        let dir = self.active?;
        let transition = self.transition(dir);
        transition.seek(fraction);
        let color = transition.color();
        if !transition.is_running() {
            self.active = None;
        }
        self.apply(color)
    }

    /// Jumps to a resting color without animating (state restore).
    pub fn settle(&mut self, color: Color) {
        self.active = None;
        self.color = color;
    }

    /// Resting color for the given focus state.
    pub fn rest_color(&self, has_focus: bool) -> Color {
        if has_focus { self.focused } else { self.unfocused }
    }

    fn apply(&mut self, color: Color) -> Option<Color> {
        if color == self.color {
            return None;
        }
        self.color = color;
        Some(color)
    }

    fn transition(&mut self, dir: FocusDirection) -> &mut ColorTransition {
        let (focused, unfocused) = (self.focused, self.unfocused);
        match dir {
            FocusDirection::Gain => self
                .gain
                .get_or_insert_with(|| ColorTransition::new(unfocused, focused)),
            FocusDirection::Lose => self
                .lose
                .get_or_insert_with(|| ColorTransition::new(focused, unfocused)),
        }
    }
}
