//! Gap filling across keyframe spans (the channel interpolator).
//!
//! Model:
//! - Consecutive keyframes k1 -> k2 in list order define spans; the list is
//!   circular, so the last span wraps back to the first keyframe and the
//!   animation loops.
//! - Each span blends over the 4-point neighborhood {k0, k1, k2, k3}: the
//!   keyframe before k1, k1, k2, and the keyframe after k2, with list
//!   positions wrapped modulo the keyframe count.
//! - Translation and scale blend per coordinate; rotation blends the four
//!   quaternion components and re-normalizes. Component-wise-then-normalize
//!   is an approximation of spherical interpolation and is kept on purpose:
//!   replacing it with slerp would change numeric output.

use crate::basis;
use crate::data::KeyframeSet;
use crate::math::{Quaternion, Vec3};

/// Map a logical neighbor offset (-1, 0, +1, +2) relative to list position
/// `i` to a physical keyframe index, wrapping modulo the keyframe count.
fn neighbor(keyframes: &[usize], i: usize, offset: isize) -> usize {
    let n = keyframes.len() as isize;
    keyframes[(i as isize + offset).rem_euclid(n) as usize]
}

fn spline_vec3(u: f32, p: [Vec3; 4]) -> Vec3 {
    Vec3 {
        x: basis::evaluate(u, [p[0].x, p[1].x, p[2].x, p[3].x]),
        y: basis::evaluate(u, [p[0].y, p[1].y, p[2].y, p[3].y]),
        z: basis::evaluate(u, [p[0].z, p[1].z, p[2].z, p[3].z]),
    }
}

fn spline_quat(u: f32, q: [Quaternion; 4]) -> Quaternion {
    Quaternion {
        s: basis::evaluate(u, [q[0].s, q[1].s, q[2].s, q[3].s]),
        x: basis::evaluate(u, [q[0].x, q[1].x, q[2].x, q[3].x]),
        y: basis::evaluate(u, [q[0].y, q[1].y, q[2].y, q[3].y]),
        z: basis::evaluate(u, [q[0].z, q[1].z, q[2].z, q[3].z]),
    }
    .normalized()
}

/// Fill every non-keyframe frame of `set` in place.
///
/// Normally invoked once through [`KeyframeSet::resolve`]. Keyframe entries
/// are never rewritten, and spans do not overlap in their write targets, so
/// span order is irrelevant.
pub fn fill_gaps(set: &mut KeyframeSet) {
    let num_frames = set.num_frames;
    let num_keys = set.keyframes.len();

    for i in 0..num_keys {
        let k0 = neighbor(&set.keyframes, i, -1);
        let k1 = neighbor(&set.keyframes, i, 0);
        let k2 = neighbor(&set.keyframes, i, 1);
        let k3 = neighbor(&set.keyframes, i, 2);

        let t = [
            set.translations[k0],
            set.translations[k1],
            set.translations[k2],
            set.translations[k3],
        ];
        let sc = [set.scales[k0], set.scales[k1], set.scales[k2], set.scales[k3]];
        let q = [
            set.rotations[k0],
            set.rotations[k1],
            set.rotations[k2],
            set.rotations[k3],
        ];

        // Frames strictly between k1 and k2, walking forward modulo the
        // frame count.
        let span_len = (num_frames + k2 - k1) % num_frames;
        for j in 1..span_len {
            let f = (k1 + j) % num_frames;
            let u = j as f32 / span_len as f32;
            // Span bounds guarantee it; anything else is a logic error, not
            // a user-facing condition.
            assert!(
                u > 0.0 && u < 1.0,
                "interpolation parameter {u} outside (0,1) at frame {f}"
            );

            set.translations[f] = spline_vec3(u, t);
            set.scales[f] = spline_vec3(u, sc);
            set.rotations[f] = spline_quat(u, q);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_wraps_both_directions() {
        let keyframes = [0usize, 10, 20];
        assert_eq!(neighbor(&keyframes, 0, -1), 20);
        assert_eq!(neighbor(&keyframes, 0, 0), 0);
        assert_eq!(neighbor(&keyframes, 2, 1), 0);
        assert_eq!(neighbor(&keyframes, 2, 2), 10);
    }

    #[test]
    fn spline_quat_is_unit() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let q = spline_quat(0.5, [a, b, a, b]);
        assert!((q.norm() - 1.0).abs() <= 1e-5);
    }
}
