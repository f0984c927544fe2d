//! # Float-label core
//!
//! Toolkit-independent building blocks for the float-label text field:
//!
//! - `Color` and its ARGB interpolation.
//! - `AnimatedValue` driven by a per-thread `Clock`.
//! - `Signal<T>`: observable value with synchronous subscribers.
//! - `AttributeSet`: raw layout attributes with typed, non-failing accessors.
//! - `Parcel` / `Persist`: kind-tagged saved state for the host's persistence
//!   container.
//! - `View`: render snapshot nodes handed to the host engine.
//!
//! ## Animation clock
//!
//! Animations read time from the clock installed for the current thread, or the
//! system time when none is installed. Tests install a `TestClock` and step it:
//!
//! ```rust
//! use floatlabel_core::*;
//! use std::time::Duration;
//!
//! let clock = TestClock::install();
//! let mut a = AnimatedValue::new(
//!     0.0f32,
//!     AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
//! );
//! a.set_target(1.0);
//! clock.advance(Duration::from_millis(50));
//! a.update();
//! assert!((*a.get() - 0.5).abs() < 0.01);
//! ```
//!
//! ## Attributes
//!
//! ```rust
//! use floatlabel_core::*;
//!
//! let attrs = AttributeSet::parse(r##"<Field app:gravity="center" app:textColorHintFocused="#FF0000FF" />"##);
//! assert_eq!(attrs.gravity("gravity"), Some(Gravity::Center));
//! assert_eq!(attrs.color("textColorHintFocused"), Some(Color::from_rgb(0, 0, 255)));
//! ```

pub mod animation;
pub mod attributes;
pub mod color;
pub mod context;
pub mod error;
pub mod gravity;
pub mod parcel;
pub mod semantics;
pub mod signal;
pub mod tests;
pub mod view;

pub use animation::*;
pub use attributes::*;
pub use color::*;
pub use context::*;
pub use error::*;
pub use gravity::*;
pub use parcel::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;
