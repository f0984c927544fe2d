use std::time::Duration;

use floatlabel_core::{AnimatedValue, AnimationSpec, Color, Easing};

/// Length of a focus color cross-fade.
pub const FOCUS_TRANSITION: Duration = Duration::from_millis(700);

/// The two named label animations the visibility controller triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnimation {
    /// Reveal: label slides up into place while fading in.
    SlideFromBottom,
    /// Dismissal: label slides down out of place while fading out.
    SlideToBottom,
}

impl LabelAnimation {
    /// Resource name the host animation engine knows this animation by.
    pub fn resource_name(self) -> &'static str {
        match self {
            LabelAnimation::SlideFromBottom => "floatlabel_slide_from_bottom",
            LabelAnimation::SlideToBottom => "floatlabel_slide_to_bottom",
        }
    }
}

/// One in-flight label slide.
pub struct SlideAnimation {
    kind: LabelAnimation,
    progress: AnimatedValue<f32>,
}

impl SlideAnimation {
    pub fn start(kind: LabelAnimation) -> Self {
        let mut progress = AnimatedValue::new(0.0, AnimationSpec::default());
        progress.animate_between(0.0, 1.0);
        Self { kind, progress }
    }

    pub fn kind(&self) -> LabelAnimation {
        self.kind
    }

    /// Advances with the frame clock; `false` once finished.
    pub fn update(&mut self) -> bool {
        self.progress.update()
    }

    pub fn is_running(&self) -> bool {
        self.progress.is_animating()
    }

    /// `(alpha, translate_y)` for a label of the given height.
    pub fn offset(&self, height: f32) -> (f32, f32) {
        let p = *self.progress.get();
        match self.kind {
            LabelAnimation::SlideFromBottom => (p, (1.0 - p) * height),
            LabelAnimation::SlideToBottom => (1.0 - p, p * height),
        }
    }
}

/// A color cross-fade between two fixed endpoints.
///
/// Restarting always begins again at `from`, so a transition that is cut
/// short and replayed never drifts from its endpoints.
pub struct ColorTransition {
    from: Color,
    to: Color,
    value: AnimatedValue<Color>,
}

impl ColorTransition {
    pub fn new(from: Color, to: Color) -> Self {
        Self {
            from,
            to,
            value: AnimatedValue::new(from, AnimationSpec::tween(FOCUS_TRANSITION, Easing::EaseInOut)),
        }
    }

    pub fn start(&mut self) {
        self.value.animate_between(self.from, self.to);
    }

    /// Advances with the frame clock; `false` once settled on `to`.
    pub fn update(&mut self) -> bool {
        self.value.update()
    }

    /// Applies an externally driven progress fraction.
    pub fn seek(&mut self, fraction: f32) {
        self.value.seek(fraction);
    }

    pub fn color(&self) -> Color {
        *self.value.get()
    }

    pub fn duration(&self) -> Duration {
        self.value.spec().duration
    }

    pub fn is_running(&self) -> bool {
        self.value.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatlabel_core::{TestClock, reset_clock};

    #[test]
    fn test_color_transition_runs_700ms() {
        let clock = TestClock::install();
        let mut t = ColorTransition::new(Color::DARK_GRAY, Color::BLACK);
        assert_eq!(t.duration(), Duration::from_millis(700));
        assert!(!t.is_running());

        t.start();
        assert_eq!(t.color(), Color::DARK_GRAY);
        clock.advance(Duration::from_millis(350));
        assert!(t.update());
        let mid = t.color();
        assert!(mid.0 < 0xAA && mid.0 > 0);

        clock.advance(Duration::from_millis(350));
        assert!(!t.update());
        assert_eq!(t.color(), Color::BLACK);
        reset_clock();
    }

    #[test]
    fn test_restart_begins_at_from() {
        let clock = TestClock::install();
        let mut t = ColorTransition::new(Color::WHITE, Color::BLACK);
        t.start();
        clock.advance(Duration::from_millis(500));
        t.update();
        assert_ne!(t.color(), Color::WHITE);

        t.start();
        assert_eq!(t.color(), Color::WHITE);
        reset_clock();
    }

    #[test]
    fn test_slide_offsets() {
        let clock = TestClock::install();
        let mut reveal = SlideAnimation::start(LabelAnimation::SlideFromBottom);
        assert_eq!(reveal.offset(10.0), (0.0, 10.0));
        clock.advance(Duration::from_millis(300));
        assert!(!reveal.update());
        assert_eq!(reveal.offset(10.0), (1.0, 0.0));

        let dismiss = SlideAnimation::start(LabelAnimation::SlideToBottom);
        assert_eq!(dismiss.offset(10.0), (1.0, 0.0));
        assert_eq!(dismiss.kind().resource_name(), "floatlabel_slide_to_bottom");
        reset_clock();
    }
}
