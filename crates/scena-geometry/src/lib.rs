//! scena-geometry: point spaces and world/viewport pixel mapping (engine-agnostic)
//!
//! Three distinct point spaces form a one-directional pipeline:
//! `WorldPropPoint -> WorldPoint -> ViewportPoint`. Each space is a separate
//! nominal type so the compiler rejects space confusion; the only way across
//! a space boundary is one of the conversion functions in [`space`].

pub mod error;
pub mod point;
pub mod space;

pub use error::GeometryError;
pub use point::{ViewportPoint, WorldPoint, WorldPropPoint};
pub use space::{to_world_absolute, viewport_scaling, world_to_viewport, Viewport, World};
