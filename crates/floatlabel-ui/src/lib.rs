//! Float-label text field.
//!
//! ```rust
//! use floatlabel_ui::*;
//!
//! let mut field = FloatLabelField::new(FieldConfig::default());
//! field.set_hint("Email");
//! assert_eq!(field.label_visibility(), LabelVisibility::Hidden);
//!
//! field.insert_text("a");
//! assert_eq!(field.label_visibility(), LabelVisibility::Shown);
//! assert_eq!(field.label().map(|l| l.text()), Some("Email"));
//! ```

pub mod anim;
pub mod config;
pub mod field;
pub mod focus;
pub mod label;
pub mod textfield;
pub mod visibility;

pub use anim::{ColorTransition, FOCUS_TRANSITION, LabelAnimation, SlideAnimation};
pub use config::FieldConfig;
pub use field::{AnimationListener, Container, FloatLabelField, PersistedState};
pub use focus::{FocusColorController, FocusDirection};
pub use label::{FloatingLabel, LabelState};
pub use textfield::{EditableState, EditableText};
pub use visibility::{LabelVisibility, LabelVisibilityController};
