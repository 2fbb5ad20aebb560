//! Parsed keyframe channels and the fully resolved animation track.

use serde::{Deserialize, Serialize};

use crate::math::{AxisAngle, Quaternion, Vec3};
use crate::sampling;

/// Sparse parser output: three parallel channels sized `num_frames`,
/// populated only at keyframe positions, plus the keyframe index list in
/// file order (not de-duplicated).
///
/// Fewer than two keyframes leaves interpolation degenerate; `resolve` does
/// not guard it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KeyframeSet {
    pub num_frames: usize,
    /// Keyframe indices in file order; each in `[0, num_frames)`.
    pub keyframes: Vec<usize>,
    pub translations: Vec<Vec3>,
    pub scales: Vec<Vec3>,
    pub rotations: Vec<Quaternion>,
}

impl KeyframeSet {
    /// Empty set with zero-defaulted channels of length `num_frames`.
    pub fn new(num_frames: usize) -> Self {
        Self {
            num_frames,
            keyframes: Vec::new(),
            translations: vec![Vec3::default(); num_frames],
            scales: vec![Vec3::default(); num_frames],
            rotations: vec![Quaternion::default(); num_frames],
        }
    }

    /// Fill every non-keyframe frame and freeze the result.
    ///
    /// Consuming `self` separates the one-time build from read-only playback:
    /// once resolved, no channel is written again, so later per-frame reads
    /// need no synchronization.
    pub fn resolve(mut self) -> AnimationTrack {
        sampling::fill_gaps(&mut self);
        log::debug!(
            "resolved track: {} frames from {} keyframes",
            self.num_frames,
            self.keyframes.len()
        );
        AnimationTrack {
            num_frames: self.num_frames,
            keyframes: self.keyframes,
            translations: self.translations,
            scales: self.scales,
            rotations: self.rotations,
        }
    }
}

/// One frame's pose as handed to consumers: the stored quaternion converted
/// back to axis-angle at read time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub scale: Vec3,
    pub rotation: AxisAngle,
}

/// Fully resolved per-frame pose data, one entry per frame in each channel.
/// Built once by [`KeyframeSet::resolve`] and immutable thereafter.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationTrack {
    num_frames: usize,
    keyframes: Vec<usize>,
    translations: Vec<Vec3>,
    scales: Vec<Vec3>,
    rotations: Vec<Quaternion>,
}

impl AnimationTrack {
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Keyframe indices in file order.
    pub fn keyframes(&self) -> &[usize] {
        &self.keyframes
    }

    pub fn translations(&self) -> &[Vec3] {
        &self.translations
    }

    pub fn scales(&self) -> &[Vec3] {
        &self.scales
    }

    pub fn rotations(&self) -> &[Quaternion] {
        &self.rotations
    }

    /// Pose at `frame`.
    ///
    /// # Panics
    /// If `frame >= num_frames` (caller error).
    pub fn pose(&self, frame: usize) -> Pose {
        Pose {
            translation: self.translations[frame],
            scale: self.scales[frame],
            rotation: self.rotations[frame].to_axis_angle(),
        }
    }
}
