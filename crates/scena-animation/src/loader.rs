//! Parse animation-descriptor JSON into a validated [`Animation<Value>`].
//!
//! The wire shape mirrors the authoring format:
//! `{"totalDuration": .., "stages": [{"state": .., "sp": .., "ep": ..}],
//!   "stageSets": [{"name": .., "length": ..}]}`
//! Stage states are arbitrary JSON trees converted through
//! [`Value::from_json`], so null/bool leaves are rejected up front.

use serde::Deserialize;

use crate::data::{Animation, AnimationStage, AnimationStageSet};
use crate::error::AnimationError;
use crate::value::Value;

/// Parse and validate an animation descriptor from JSON.
pub fn parse_animation_json(s: &str) -> Result<Animation<Value>, AnimationError> {
    let raw: RawAnimation = serde_json::from_str(s)?;

    let mut stages: Vec<AnimationStage<Value>> = Vec::with_capacity(raw.stages.len());
    for stage in raw.stages {
        stages.push(AnimationStage {
            state: Value::from_json(&stage.state)?,
            sp: stage.sp,
            ep: stage.ep,
        });
    }

    let stage_sets = raw
        .stage_sets
        .into_iter()
        .map(|set| AnimationStageSet {
            name: set.name,
            length: set.length,
        })
        .collect();

    let anim = Animation {
        total_duration: raw.total_duration,
        stages,
        stage_sets,
    };
    anim.validate_basic()?;
    Ok(anim)
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct RawAnimation {
    #[serde(rename = "totalDuration")]
    total_duration: f32,
    stages: Vec<RawStage>,
    #[serde(default)]
    #[serde(rename = "stageSets")]
    stage_sets: Vec<RawStageSet>,
}

#[derive(Debug, Deserialize)]
struct RawStage {
    state: serde_json::Value,
    sp: f32,
    ep: f32,
}

#[derive(Debug, Deserialize)]
struct RawStageSet {
    name: String,
    length: f32,
}
