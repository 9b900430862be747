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

//! Provides a Quaternion type for representing 3D rotations.

use serde::{Deserialize, Serialize};

use super::{clamp, Vec3};
use crate::error::{QuatError, QuatResult};
use std::ops::{Add, Mul, Neg, Sub};

/// Represents a quaternion for 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)` and stands for `w + xi + yj + zk`:
/// `[x, y, z]` is the "vector" part and `w` is the "scalar" part. Every
/// quaternion produced by the kernel operations is a unit quaternion
/// (`x² + y² + z² + w² = 1` within floating-point tolerance).
///
/// `q` and `-q` encode the same rotation (double cover) but sit on opposite
/// hemispheres of the unit hypersphere, which matters for interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f64,
    /// The y component of the vector part.
    pub y: f64,
    /// The z component of the vector part.
    pub z: f64,
    /// The scalar (real) part.
    pub w: f64,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer [`Quaternion::from_axis_angle`].
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the components as `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns the vector part `[x, y, z]`.
    #[inline]
    pub const fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the quaternion.
    ///
    /// Scaled by the largest component first, like [`Vec3::length`].
    #[inline]
    pub fn magnitude(&self) -> f64 {
        let scale = self.max_abs();
        if scale == 0.0 || !self.is_finite() {
            return self.magnitude_squared().sqrt();
        }
        scale * self.scaled_down(scale).magnitude_squared().sqrt()
    }

    /// Returns `true` if every component is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Returns a unit-length copy of the quaternion, or `None` if it is
    /// exactly zero or has a non-finite component.
    pub fn try_normalize(&self) -> Option<Self> {
        if !self.is_finite() {
            return None;
        }
        let scale = self.max_abs();
        if scale == 0.0 {
            return None;
        }
        let scaled = self.scaled_down(scale);
        Some(scaled * (1.0 / scaled.magnitude_squared().sqrt()))
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    /// If the quaternion is zero, it returns the identity quaternion.
    pub fn normalize(&self) -> Self {
        self.try_normalize().unwrap_or(Self::IDENTITY)
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Computes the 4D dot product of two quaternions.
    ///
    /// A negative result means `other` lies on the far hemisphere from `self`.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotates a 3D vector by this quaternion.
    ///
    /// The quaternion is expected to be unit length.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let u = self.vector_part();
        let s = self.w;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }

    /// Returns the angle in radians of the rotation taking `self` to `other`.
    ///
    /// Both quaternions are expected to be unit length. The result lies in
    /// `[0, π]` and does not depend on the hemisphere of either input.
    pub fn angle_between(&self, other: Self) -> f64 {
        2.0 * clamp(self.dot(other).abs(), 0.0, 1.0).acos()
    }

    /// Validates a caller-supplied quaternion and brings it to unit length.
    ///
    /// Non-finite components are rejected. A zero quaternion is replaced by
    /// the identity, since it encodes no rotation at all.
    pub(crate) fn sanitize(self, name: &'static str) -> QuatResult<Self> {
        if !self.is_finite() {
            return Err(QuatError::InvalidArgument { name });
        }
        Ok(self.try_normalize().unwrap_or_else(|| {
            log::warn!("Quaternion `{name}` has zero magnitude; using identity instead.");
            Self::IDENTITY
        }))
    }

    #[inline]
    fn max_abs(&self) -> f64 {
        self.x
            .abs()
            .max(self.y.abs())
            .max(self.z.abs())
            .max(self.w.abs())
    }

    #[inline]
    fn scaled_down(&self, scale: f64) -> Self {
        Self::new(
            self.x / scale,
            self.y / scale,
            self.z / scale,
            self.w / scale,
        )
    }
}

// --- Conversions ---

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a rotation operation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. The result encodes the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
