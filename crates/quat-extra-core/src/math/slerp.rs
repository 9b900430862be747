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

//! Spherical linear interpolation with spin control.

use super::{ensure_finite, Quaternion, EPSILON, PI};
use crate::error::QuatResult;

impl Quaternion {
    /// Performs a Spherical Linear Interpolation (Slerp) between two quaternions,
    /// optionally winding extra full revolutions along the way.
    ///
    /// Both inputs are normalized first. If they lie on opposite hemispheres,
    /// `end` is negated so the base arc is the short one; `end` and `-end`
    /// encode the same rotation.
    ///
    /// * `t` - The interpolation factor. `0.0` gives `start`, `1.0` gives a
    ///   quaternion encoding the same rotation as `end`. Values outside
    ///   `[0.0, 1.0]` are not clamped and extrapolate along the same arc.
    /// * `spin` - Extra revolutions. The angle swept on the hypersphere is
    ///   `θ + spin·π`, which is `spin` extra full turns of the 3D rotation.
    ///   `-1` takes the long arc instead of the short one; each further
    ///   negative step adds a full turn in that direction.
    ///
    /// When `start` and `end` are nearly identical the arc has no defined
    /// axis, so this falls back to a normalized linear interpolation and
    /// `spin` has no effect.
    ///
    /// # Errors
    ///
    /// [`QuatError::InvalidArgument`](crate::QuatError::InvalidArgument) if
    /// any component of `start`, `end`, or `t` is not finite.
    pub fn slerp(start: Self, end: Self, t: f64, spin: i32) -> QuatResult<Self> {
        let start = start.sanitize("start")?;
        let end = end.sanitize("end")?;
        let t = ensure_finite("t", t)?;

        let mut cos_theta = start.dot(end);
        let mut end_adjusted = end;

        // Opposite hemispheres: flip to the representative on the short arc.
        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            end_adjusted = -end;
        }

        if cos_theta > 1.0 - EPSILON {
            if spin != 0 {
                log::debug!("Slerp endpoints coincide; ignoring spin of {spin}.");
            }
            // Linear Interpolation: (1-t)*start + t*end_adjusted
            let result = (start * (1.0 - t)) + (end_adjusted * t);
            return Ok(result.normalize());
        }

        // Half-chord over half-sum: stays accurate for small angles, where acos does not.
        let theta = 2.0 * (start - end_adjusted)
            .magnitude()
            .atan2((start + end_adjusted).magnitude());
        let phi = theta + f64::from(spin) * PI;
        let sin_theta_inv = 1.0 / theta.sin();
        let scale_start = (theta - t * phi).sin() * sin_theta_inv;
        let scale_end = (t * phi).sin() * sin_theta_inv;
        Ok((start * scale_start) + (end_adjusted * scale_end))
    }
}
