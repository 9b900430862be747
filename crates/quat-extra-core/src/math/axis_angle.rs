// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversions between quaternions and the axis-angle representation.

use serde::{Deserialize, Serialize};

use super::{ensure_finite, Quaternion, Vec3, EPSILON};
use crate::error::{QuatError, QuatResult};

/// A rotation expressed as a unit axis and an angle in radians about it.
///
/// Values produced by [`Quaternion::to_axis_angle`] always carry a unit axis
/// and an angle in `[0, π]`. Values consumed by [`Quaternion::from_axis_angle`]
/// may have an axis of any non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    /// The rotation axis.
    pub axis: Vec3,
    /// The rotation angle in radians.
    pub angle: f64,
}

impl AxisAngle {
    /// The axis reported for rotations whose axis is undefined (angle ≈ 0).
    ///
    /// This is a convention, not something the math dictates: any unit vector
    /// would be equally valid.
    pub const DEFAULT_AXIS: Vec3 = Vec3::X;

    /// The zero rotation, reported with [`AxisAngle::DEFAULT_AXIS`].
    pub const IDENTITY: AxisAngle = AxisAngle {
        axis: Self::DEFAULT_AXIS,
        angle: 0.0,
    };

    /// Creates a new axis-angle pair without validating it.
    #[inline]
    pub const fn new(axis: Vec3, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Builds the equivalent unit quaternion.
    #[inline]
    pub fn to_quaternion(&self) -> QuatResult<Quaternion> {
        Quaternion::from_axis_angle(self.axis, self.angle)
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// The axis does not need to be unit length; it is normalized here. Any
    /// finite axis other than the zero vector is accepted, whatever its scale.
    ///
    /// # Errors
    ///
    /// * [`QuatError::InvalidArgument`] if the axis or angle is not finite.
    /// * [`QuatError::DegenerateAxis`] if the axis has zero length, even when
    ///   `angle` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use quat_extra_core::{Quaternion, Vec3};
    /// use quat_extra_core::math::{approx_eq, FRAC_PI_2};
    ///
    /// let q = Quaternion::from_axis_angle(Vec3::Z, FRAC_PI_2).unwrap();
    /// assert!(approx_eq(q.z, 0.5f64.sqrt()));
    /// assert!(approx_eq(q.w, 0.5f64.sqrt()));
    /// ```
    pub fn from_axis_angle(axis: Vec3, angle_radians: f64) -> QuatResult<Self> {
        if !axis.is_finite() {
            return Err(QuatError::InvalidArgument { name: "axis" });
        }
        let angle_radians = ensure_finite("angle", angle_radians)?;
        let normalized_axis = axis.try_normalize().ok_or(QuatError::DegenerateAxis)?;

        let half_angle = angle_radians * 0.5;
        let (s, c) = half_angle.sin_cos();
        Ok(Self {
            x: normalized_axis.x * s,
            y: normalized_axis.y * s,
            z: normalized_axis.z * s,
            w: c,
        })
    }

    /// Decomposes the rotation into a unit axis and an angle in `[0, π]`.
    ///
    /// The quaternion does not need to be unit length: it is normalized
    /// first, so its scale never affects the result. It is then moved to
    /// the `w >= 0` hemisphere, so `q` and `-q` decompose identically and a
    /// reflex angle is reported as the smaller angle about the opposite axis.
    ///
    /// At or near the identity the axis is undefined; the result is then
    /// [`AxisAngle::IDENTITY`] rather than an error. "Near" is measured on
    /// the normalized quaternion, so it is relative to the input's magnitude.
    ///
    /// # Errors
    ///
    /// [`QuatError::InvalidArgument`] if a component is not finite.
    pub fn to_axis_angle(&self) -> QuatResult<AxisAngle> {
        let q = self.sanitize("quaternion")?;
        let q = if q.w < 0.0 { -q } else { q };

        let s = q.vector_part().length();
        if s < EPSILON {
            log::trace!("Near-identity quaternion; reporting the default axis.");
            return Ok(AxisAngle::IDENTITY);
        }

        // atan2 keeps precision near 0 and π, where acos(w) does not.
        let angle = 2.0 * s.atan2(q.w);
        Ok(AxisAngle {
            axis: q.vector_part() * (1.0 / s),
            angle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    #[test]
    fn test_from_axis_angle() {
        let angle = FRAC_PI_2;
        let q = Quaternion::from_axis_angle(Vec3::Y, angle).unwrap();

        let (expected_s, expected_c) = (angle * 0.5).sin_cos();
        assert_relative_eq!(q.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q.y, expected_s, epsilon = EPSILON);
        assert_relative_eq!(q.z, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q.w, expected_c, epsilon = EPSILON);
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_from_axis_angle_normalizes_axis() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 5.0, 0.0), FRAC_PI_2).unwrap();
        let expected = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2).unwrap();
        assert_relative_eq!(q.y, expected.y, epsilon = EPSILON);
        assert_relative_eq!(q.w, expected.w, epsilon = EPSILON);
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.3, -4.0, 2.0), 0.0).unwrap();
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_degenerate_axis_rejected() {
        for angle in [0.0, 1.0, -PI] {
            assert_eq!(
                Quaternion::from_axis_angle(Vec3::ZERO, angle),
                Err(QuatError::DegenerateAxis)
            );
        }
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert_eq!(
            Quaternion::from_axis_angle(Vec3::new(f64::NAN, 0.0, 1.0), 1.0),
            Err(QuatError::InvalidArgument { name: "axis" })
        );
        assert_eq!(
            Quaternion::from_axis_angle(Vec3::Z, f64::INFINITY),
            Err(QuatError::InvalidArgument { name: "angle" })
        );
        assert_eq!(
            Quaternion::new(0.0, 0.0, f64::NAN, 1.0).to_axis_angle(),
            Err(QuatError::InvalidArgument { name: "quaternion" })
        );
    }

    #[test]
    fn test_from_axis_angle_accepts_any_nonzero_axis_scale() {
        let expected = Quaternion::from_axis_angle(Vec3::X, 1.0).unwrap();
        for axis in [
            Vec3::new(1e-10, 0.0, 0.0),
            Vec3::new(1e-300, 0.0, 0.0),
            Vec3::new(1e200, 0.0, 0.0),
            Vec3::new(f64::MAX, 0.0, 0.0),
        ] {
            let q = Quaternion::from_axis_angle(axis, 1.0).unwrap();
            assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON);
            assert_relative_eq!(q.x, expected.x, epsilon = EPSILON);
            assert_relative_eq!(q.w, expected.w, epsilon = EPSILON);
        }

        let q = Quaternion::from_axis_angle(Vec3::new(1e200, 1e200, 0.0), FRAC_PI_2).unwrap();
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(q.x, q.y, epsilon = EPSILON);
    }

    #[test]
    fn test_to_axis_angle_ignores_input_scale() {
        let aa = Quaternion::new(1e200, 0.0, 0.0, 1e200).to_axis_angle().unwrap();
        assert_relative_eq!(aa.angle, FRAC_PI_2, epsilon = EPSILON);
        assert_relative_eq!(aa.axis.x, 1.0, epsilon = EPSILON);

        let aa = Quaternion::new(0.0, 0.0, 1e-200, 1e-200).to_axis_angle().unwrap();
        assert_relative_eq!(aa.angle, FRAC_PI_2, epsilon = EPSILON);
        assert_relative_eq!(aa.axis.z, 1.0, epsilon = EPSILON);

        // Tiny but far from the identity direction.
        let aa = Quaternion::new(0.0, 3e-12, 0.0, 0.0).to_axis_angle().unwrap();
        assert_relative_eq!(aa.angle, PI, epsilon = EPSILON);
        assert_relative_eq!(aa.axis.y, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_to_axis_angle_identity_uses_default_axis() {
        let aa = Quaternion::IDENTITY.to_axis_angle().unwrap();
        assert_eq!(aa, AxisAngle::IDENTITY);
        assert_eq!(aa.axis, AxisAngle::DEFAULT_AXIS);

        // -identity is the same (zero) rotation.
        let aa = (-Quaternion::IDENTITY).to_axis_angle().unwrap();
        assert_eq!(aa, AxisAngle::IDENTITY);
    }

    #[test]
    fn test_to_axis_angle_denormalized_input() {
        let q = Quaternion::from_axis_angle(Vec3::Z, 1.0).unwrap() * 3.0;
        let aa = q.to_axis_angle().unwrap();
        assert_relative_eq!(aa.angle, 1.0, epsilon = EPSILON);
        assert_relative_eq!(aa.axis.z, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_to_axis_angle_reflex_angle_flips_axis() {
        // 1.5π about +X is 0.5π about -X.
        let q = Quaternion::from_axis_angle(Vec3::X, 1.5 * PI).unwrap();
        let aa = q.to_axis_angle().unwrap();
        assert_relative_eq!(aa.angle, 0.5 * PI, epsilon = EPSILON);
        assert_relative_eq!(aa.axis.x, -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_negated_quaternion_decomposes_identically() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 2.0).unwrap();
        let a = q.to_axis_angle().unwrap();
        let b = (-q).to_axis_angle().unwrap();
        assert_relative_eq!(a.angle, b.angle, epsilon = EPSILON);
        assert_relative_eq!(a.axis.x, b.axis.x, epsilon = EPSILON);
        assert_relative_eq!(a.axis.y, b.axis.y, epsilon = EPSILON);
        assert_relative_eq!(a.axis.z, b.axis.z, epsilon = EPSILON);
    }

    #[test]
    fn test_axis_angle_to_quaternion_helper() {
        let aa = AxisAngle::new(Vec3::Z, FRAC_PI_2);
        let q = aa.to_quaternion().unwrap();
        assert_relative_eq!(q.z, 0.5f64.sqrt(), epsilon = EPSILON);
        assert_relative_eq!(q.w, 0.5f64.sqrt(), epsilon = EPSILON);
    }
}
