//! splinetime-animation-core: Catmull-Rom keyframe pose interpolation
//! (engine-agnostic).
//!
//! A keyframe script declares a total frame count and sparse per-keyframe
//! poses (translation, scale, axis-angle rotation). Parsing produces a
//! [`KeyframeSet`]; resolving it fills every in-between frame with a cubic
//! Catmull-Rom blend over the circular 4-keyframe neighborhood, with
//! rotations interpolated component-wise as quaternions and re-normalized.
//! The resolved [`AnimationTrack`] is immutable and answers per-frame pose
//! lookups for whatever consumer draws or exports the animation.

pub mod baking;
pub mod basis;
pub mod data;
pub mod math;
pub mod sampling;
pub mod script;

// Re-exports for consumers (adapters)
pub use baking::{bake_track, export_baked_json, BakedAnimation};
pub use data::{AnimationTrack, KeyframeSet, Pose};
pub use math::{AxisAngle, Quaternion, Vec3};
pub use script::{parse_keyframe_script, ScriptError};
