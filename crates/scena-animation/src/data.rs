//! Animation descriptors: timed keyframe stages and named stage sets.
//!
//! All types here are immutable value descriptors. The consumer owns the
//! time cursor and drives sampling; nothing in this module keeps state.

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;
use crate::lerp::Lerp;

/// A keyframe value valid over `[sp, ep]` in the animation's own time units.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationStage<S> {
    pub state: S,
    /// Start position on the timeline.
    pub sp: f32,
    /// End position on the timeline.
    pub ep: f32,
}

/// A named logical group of stages and its duration (e.g. "intro", "loop",
/// "outro"). Association with stages is by name/ordering convention owned by
/// the consumer; no structural back-reference is stored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationStageSet {
    pub name: String,
    pub length: f32,
}

/// An ordered sequence of stages spanning `total_duration`, partitioned into
/// named sets. Immutable once constructed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Animation<S> {
    #[serde(rename = "totalDuration")]
    pub total_duration: f32,
    pub stages: Vec<AnimationStage<S>>,
    #[serde(default)]
    #[serde(rename = "stageSets")]
    pub stage_sets: Vec<AnimationStageSet>,
}

impl<S> Animation<S> {
    /// Validate basic invariants: positive finite duration, well-formed stage
    /// intervals inside the timeline with non-decreasing starts, finite
    /// non-negative stage set lengths.
    pub fn validate_basic(&self) -> Result<(), AnimationError> {
        if !self.total_duration.is_finite() || self.total_duration <= 0.0 {
            return Err(AnimationError::InvalidDuration {
                duration: self.total_duration,
            });
        }
        let mut last_sp = f32::NEG_INFINITY;
        for stage in &self.stages {
            let well_formed = stage.sp.is_finite()
                && stage.ep.is_finite()
                && stage.sp <= stage.ep
                && stage.sp >= 0.0
                && stage.ep <= self.total_duration
                && stage.sp >= last_sp;
            if !well_formed {
                return Err(AnimationError::InvalidStage {
                    sp: stage.sp,
                    ep: stage.ep,
                });
            }
            last_sp = stage.sp;
        }
        for set in &self.stage_sets {
            if !set.length.is_finite() || set.length < 0.0 {
                return Err(AnimationError::InvalidStageSet {
                    name: set.name.clone(),
                    length: set.length,
                });
            }
        }
        Ok(())
    }

    /// Find the stage active at time `t` and the normalized progress through
    /// its interval, clamped to [0,1].
    ///
    /// Edge cases:
    /// - no stages: `None`
    /// - `t` at or before the first stage's start: first stage at progress 0
    /// - `t` at or past the last stage's end: last stage at progress 1
    /// - `t` in a gap between intervals: the preceding stage at progress 1
    pub fn stage_at(&self, t: f32) -> Option<(usize, f32)> {
        let stages = &self.stages;
        let n = stages.len();
        if n == 0 {
            return None;
        }
        if t <= stages[0].sp {
            return Some((0, 0.0));
        }
        if t >= stages[n - 1].ep {
            return Some((n - 1, 1.0));
        }
        for (i, stage) in stages.iter().enumerate() {
            if t >= stage.sp && t <= stage.ep {
                let denom = (stage.ep - stage.sp).max(f32::EPSILON);
                let lp = (t - stage.sp) / denom;
                return Some((i, lp.clamp(0.0, 1.0)));
            }
        }
        // Gap between intervals: hold the preceding stage fully played out.
        for i in (0..n).rev() {
            if t > stages[i].ep {
                return Some((i, 1.0));
            }
        }
        Some((0, 0.0))
    }

    /// Look up a stage set by name.
    pub fn stage_set(&self, name: &str) -> Option<&AnimationStageSet> {
        self.stage_sets.iter().find(|set| set.name == name)
    }

    /// Cumulative start offsets of the stage sets on the timeline, derived
    /// from their lengths in order. `offsets[i]` is where set `i` begins.
    pub fn stage_set_offsets(&self) -> Vec<f32> {
        let mut offsets = Vec::with_capacity(self.stage_sets.len());
        let mut acc = 0.0f32;
        for set in &self.stage_sets {
            offsets.push(acc);
            acc += set.length;
        }
        offsets
    }
}

impl<S: Lerp + Clone> Animation<S> {
    /// Sample the interpolated state at time `t`.
    ///
    /// Blends the active stage's state toward the next stage's state at the
    /// active stage's local progress; the final stage holds its state. Pure
    /// stage selection plus blending; no clock lives here.
    pub fn sample(&self, t: f32) -> Result<Option<S>, AnimationError> {
        let Some((i, lp)) = self.stage_at(t) else {
            return Ok(None);
        };
        let current = &self.stages[i];
        match self.stages.get(i + 1) {
            Some(next) => Ok(Some(S::lerp(&current.state, &next.state, lp)?)),
            None => Ok(Some(current.state.clone())),
        }
    }
}
