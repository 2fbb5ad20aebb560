//! Pose-channel value types: Vec3, axis-angle rotations, quaternions.
//! All numeric components are f32.

use serde::{Deserialize, Serialize};

/// Below this, 1 - s² is treated as zero when recovering an axis. The
/// original exact `== 0` check misses near-zero denominators produced by
/// accumulated float error; see DESIGN.md.
const AXIS_RECOVERY_EPS: f32 = 1e-6;

/// 3D vector used for the translation and scale channels.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Axis-angle rotation with the angle in degrees.
///
/// Transient representation: used at parse time and at pose-read time only.
/// Rotation channels store unit quaternions. The axis is not required to be
/// normalized here.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct AxisAngle {
    pub axis: Vec3,
    /// Degrees.
    pub angle: f32,
}

impl AxisAngle {
    pub const fn new(axis: Vec3, angle: f32) -> Self {
        Self { axis, angle }
    }
}

/// Scalar-first quaternion (s, x, y, z).
///
/// Every quaternion stored in a rotation channel is unit length; callers
/// normalize immediately after construction and after interpolation.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Quaternion {
    pub s: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        s: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(s: f32, x: f32, y: f32, z: f32) -> Self {
        Self { s, x, y, z }
    }

    /// Build a quaternion from an axis-angle rotation (angle in degrees).
    ///
    /// The axis is taken as-is: callers wanting a unit result off a non-unit
    /// axis normalize the axis first.
    pub fn from_axis_angle(r: AxisAngle) -> Self {
        let half = r.angle.to_radians() / 2.0;
        let (sin, cos) = half.sin_cos();
        Self {
            s: cos,
            x: r.axis.x * sin,
            y: r.axis.y * sin,
            z: r.axis.z * sin,
        }
    }

    /// Recover the axis-angle form: axis = (x,y,z)/√(1−s²), angle = 2·acos(s)
    /// in degrees.
    ///
    /// An identity-like quaternion (|s| ≈ 1) has no defined axis; the fixed
    /// default axis (1,0,0) with angle 0 is returned instead of dividing by a
    /// vanishing denominator.
    pub fn to_axis_angle(self) -> AxisAngle {
        let denom = (1.0 - self.s * self.s).max(0.0).sqrt();
        if denom <= AXIS_RECOVERY_EPS {
            return AxisAngle::new(Vec3::new(1.0, 0.0, 0.0), 0.0);
        }
        AxisAngle::new(
            Vec3::new(self.x / denom, self.y / denom, self.z / denom),
            (2.0 * self.s.clamp(-1.0, 1.0).acos()).to_degrees(),
        )
    }

    /// Euclidean norm of all four components.
    pub fn norm(self) -> f32 {
        (self.s * self.s + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale to unit length. A zero-norm input is a caller precondition
    /// violation; the result is then non-finite rather than a panic.
    pub fn normalized(self) -> Self {
        let n = self.norm();
        Self {
            s: self.s / n,
            x: self.x / n,
            y: self.y / n,
            z: self.z / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn axis_angle_round_trip() {
        let r = AxisAngle::new(Vec3::new(0.0, 1.0, 0.0), 90.0);
        let back = Quaternion::from_axis_angle(r).to_axis_angle();
        approx(back.angle, 90.0, 1e-4);
        approx(back.axis.x, 0.0, 1e-5);
        approx(back.axis.y, 1.0, 1e-5);
        approx(back.axis.z, 0.0, 1e-5);
    }

    #[test]
    fn identity_recovery_uses_default_axis() {
        let r = Quaternion::IDENTITY.to_axis_angle();
        assert_eq!(r.axis, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(r.angle, 0.0);

        // Zero-angle input off an arbitrary axis recovers the same default.
        let q = Quaternion::from_axis_angle(AxisAngle::new(Vec3::new(0.3, 0.4, 0.5), 0.0));
        let r = q.to_axis_angle();
        assert_eq!(r.axis, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(r.angle, 0.0);
    }

    #[test]
    fn normalized_has_unit_norm() {
        let q = Quaternion::new(2.0, 0.0, 2.0, 1.0).normalized();
        approx(q.norm(), 1.0, 1e-6);
    }

    #[test]
    fn from_axis_angle_matches_half_angle_form() {
        let q = Quaternion::from_axis_angle(AxisAngle::new(Vec3::new(0.0, 0.0, 1.0), 180.0));
        approx(q.s, 0.0, 1e-6);
        approx(q.z, 1.0, 1e-6);
    }
}
