//! Baked export: flatten a resolved track into a stable JSON schema for
//! tools that consume per-frame poses (rotations in axis-angle form).

use serde::{Deserialize, Serialize};

use crate::data::{AnimationTrack, Pose};

/// Per-frame poses of a resolved track, plus the keyframe indices the poses
/// were authored at.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedAnimation {
    pub num_frames: usize,
    pub keyframes: Vec<usize>,
    pub frames: Vec<Pose>,
}

/// Flatten `track` into its baked form.
pub fn bake_track(track: &AnimationTrack) -> BakedAnimation {
    BakedAnimation {
        num_frames: track.num_frames(),
        keyframes: track.keyframes().to_vec(),
        frames: (0..track.num_frames()).map(|f| track.pose(f)).collect(),
    }
}

/// Export baked data as `serde_json::Value` (stable schema for
/// serialization/FFI).
pub fn export_baked_json(baked: &BakedAnimation) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
