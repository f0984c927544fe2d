//! Host context handed to widgets at construction.
//!
//! Carries the display parameters the host resolves for a subtree:
//!
//! - `Density`: dp→px scale factor.
//! - `TextScale`: user text scaling.

/// Screen density; `scale` is px per dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// User font scale applied on top of density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextScale(pub f32);

impl Default for TextScale {
    fn default() -> Self {
        Self(1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Context {
    pub density: Density,
    pub text_scale: TextScale,
}

impl Context {
    pub fn new(density: Density, text_scale: TextScale) -> Self {
        Self {
            density,
            text_scale,
        }
    }

    /// px per sp.
    pub fn scaled_density(&self) -> f32 {
        self.density.scale * self.text_scale.0
    }

    pub fn sp_to_px(&self, sp: f32) -> f32 {
        sp * self.scaled_density()
    }

    pub fn px_to_sp(&self, px: f32) -> f32 {
        px / self.scaled_density()
    }
}
