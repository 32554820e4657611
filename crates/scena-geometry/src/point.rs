//! Point types, one per coordinate space.
//!
//! All three share the same runtime shape but are deliberately distinct
//! nominal types: a function taking a [`WorldPoint`] will not accept a
//! [`ViewportPoint`] without an explicit conversion. No `From` impls exist
//! between them; crossing spaces goes through the functions in [`crate::space`].

use serde::{Deserialize, Serialize};

/// A point normalized to `[0,1]` relative to a `World` rectangle's extents.
///
/// Values outside `[0,1]` are allowed and extrapolate outside the rectangle.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorldPropPoint {
    pub x: f32,
    pub y: f32,
}

/// A point in absolute world units, independent of screen resolution or zoom.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

/// A point in device pixels on the visible window.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewportPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPropPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl WorldPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl ViewportPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
