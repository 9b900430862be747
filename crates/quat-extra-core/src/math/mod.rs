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

//! Double-precision math primitives for rotations.
//!
//! This module holds the vector and quaternion value types, the axis-angle
//! pair, and the handful of scalar helpers they share. All angular functions
//! operate in **radians**; converting from degrees is the caller's job
//! (see [`degrees_to_radians`]).

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
///
/// It is only ever compared against unit-scale quantities. Zero-length checks
/// on axes and quaternions are exact and do not use it.
pub const EPSILON: f64 = 1e-9;

// Re-export standard mathematical constants for convenience.
pub use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f64 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f64 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod axis_angle;
pub mod quaternion;
pub mod slerp;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::axis_angle::AxisAngle;
pub use self::quaternion::Quaternion;
pub use self::vector::Vec3;

use crate::error::{QuatError, QuatResult};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use quat_extra_core::math::{approx_eq, degrees_to_radians, PI};
/// assert!(approx_eq(degrees_to_radians(180.0), PI));
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use quat_extra_core::math::{approx_eq, radians_to_degrees, PI};
/// assert!(approx_eq(radians_to_degrees(PI), 180.0));
/// ```
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Clamps a value to a specified minimum and maximum range.
///
/// # Examples
///
/// ```
/// use quat_extra_core::math::clamp;
/// assert_eq!(clamp(1.5, -1.0, 1.0), 1.0);
/// assert_eq!(clamp(-1.5, -1.0, 1.0), -1.0);
/// assert_eq!(clamp(0.5, -1.0, 1.0), 0.5);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
#[inline]
pub fn approx_eq_eps(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use quat_extra_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Rejects a NaN or infinite scalar input.
#[inline]
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> QuatResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuatError::InvalidArgument { name })
    }
}
