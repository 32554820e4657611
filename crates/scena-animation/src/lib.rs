//! scena-animation: keyframe descriptors and deep state interpolation
//! (engine-agnostic).
//!
//! Two pieces:
//! - a closed [`Value`] tree (`Scalar | Text | List | Record`) plus a recursive
//!   blend, [`lerp_value`], that interpolates any two same-shaped trees;
//! - [`Animation`]/[`AnimationStage`] descriptors with stage selection and
//!   sampling helpers for consumers that own a time cursor.
//!
//! No clock or ticker lives here: every entry point is a pure function over
//! its arguments, and the consumer drives time.

pub mod data;
pub mod error;
pub mod lerp;
pub mod loader;
pub mod value;

pub use data::{Animation, AnimationStage, AnimationStageSet};
pub use error::AnimationError;
pub use lerp::{lerp_f32, lerp_value, Lerp};
pub use loader::parse_animation_json;
pub use value::{Value, ValueKind};
