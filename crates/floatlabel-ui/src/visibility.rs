use crate::anim::LabelAnimation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelVisibility {
    #[default]
    Hidden,
    Shown,
}

impl LabelVisibility {
    pub fn for_len(len: usize) -> Self {
        if len > 0 {
            LabelVisibility::Shown
        } else {
            LabelVisibility::Hidden
        }
    }

    pub fn is_shown(self) -> bool {
        self == LabelVisibility::Shown
    }
}

/// Shows the label once the field has content and hides it when emptied.
///
/// Only edges trigger an animation; repeated edits that keep the field
/// non-empty (or empty) leave the label alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelVisibilityController {
    visibility: LabelVisibility,
}

impl LabelVisibilityController {
    /// Starts in the state the initial text implies, with nothing to animate.
    pub fn new(initial_len: usize) -> Self {
        Self {
            visibility: LabelVisibility::for_len(initial_len),
        }
    }

    pub fn visibility(&self) -> LabelVisibility {
        self.visibility
    }

    /// Returns the animation to play when this change crosses an edge.
    pub fn on_text_changed(&mut self, new_len: usize) -> Option<LabelAnimation> {
        match (new_len > 0, self.visibility) {
            (true, LabelVisibility::Hidden) => {
                self.visibility = LabelVisibility::Shown;
                Some(LabelAnimation::SlideFromBottom)
            }
            (false, LabelVisibility::Shown) => {
                self.visibility = LabelVisibility::Hidden;
                Some(LabelAnimation::SlideToBottom)
            }
            _ => None,
        }
    }

    /// Overwrites the state without animating (state restore).
    pub fn reset(&mut self, visibility: LabelVisibility) {
        self.visibility = visibility;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_trigger_once() {
        let mut c = LabelVisibilityController::new(0);
        assert_eq!(c.visibility(), LabelVisibility::Hidden);

        assert_eq!(c.on_text_changed(1), Some(LabelAnimation::SlideFromBottom));
        assert_eq!(c.on_text_changed(2), None);
        assert_eq!(c.on_text_changed(5), None);
        assert_eq!(c.visibility(), LabelVisibility::Shown);

        assert_eq!(c.on_text_changed(0), Some(LabelAnimation::SlideToBottom));
        assert_eq!(c.on_text_changed(0), None);
        assert_eq!(c.visibility(), LabelVisibility::Hidden);
    }

    #[test]
    fn test_initial_state_from_text() {
        let c = LabelVisibilityController::new(3);
        assert!(c.visibility().is_shown());
    }

    #[test]
    fn test_visibility_tracks_length_over_any_sequence() {
        let lens = [0usize, 4, 4, 0, 1, 0, 0, 7, 2, 0];
        let mut c = LabelVisibilityController::new(0);
        let mut prev = c.visibility();
        let mut triggers = 0;
        let mut edges = 0;
        for len in lens {
            if c.on_text_changed(len).is_some() {
                triggers += 1;
            }
            assert_eq!(c.visibility(), LabelVisibility::for_len(len));
            if c.visibility() != prev {
                edges += 1;
            }
            prev = c.visibility();
        }
        assert_eq!(triggers, edges);
        assert_eq!(triggers, 6);
    }
}
