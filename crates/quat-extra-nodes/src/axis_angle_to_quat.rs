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

//! `axisAngleToQuat`: builds a quaternion from a rotation about an axis.

use quat_extra_core::{QuatResult, Quaternion, Vec3};
use serde::{Deserialize, Serialize};

use crate::Node;

/// Inputs of the `axisAngleToQuat` node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisAngleToQuatInput {
    /// The axis about which the rotation occurs. Any non-zero length.
    pub axis: Vec3,
    /// The angle of rotation about the axis, in radians.
    pub angle: f64,
}

impl Default for AxisAngleToQuatInput {
    fn default() -> Self {
        Self {
            axis: Vec3::new(1.0, 1.0, 1.0),
            angle: 0.0,
        }
    }
}

/// Constructs a quaternion whose rotation is expressed by a rotation about an axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisAngleToQuatNode;

impl Node for AxisAngleToQuatNode {
    const NAME: &'static str = "axisAngleToQuat";
    type Input = AxisAngleToQuatInput;
    type Output = Quaternion;

    fn compute(input: &Self::Input) -> QuatResult<Self::Output> {
        log::trace!("Evaluating {} with {:?}", Self::NAME, input);
        Quaternion::from_axis_angle(input.axis, input.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quat_extra_core::math::FRAC_PI_2;
    use quat_extra_core::QuatError;

    #[test]
    fn test_default_input_is_identity() {
        let q = AxisAngleToQuatNode::compute(&AxisAngleToQuatInput::default()).unwrap();
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_quarter_turn() {
        let input = AxisAngleToQuatInput {
            axis: Vec3::Z,
            angle: FRAC_PI_2,
        };
        let q = AxisAngleToQuatNode::compute(&input).unwrap();
        assert_relative_eq!(q.z, 0.70710678, epsilon = 1e-8);
        assert_relative_eq!(q.w, 0.70710678, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_axis_is_reported() {
        let input = AxisAngleToQuatInput {
            axis: Vec3::ZERO,
            angle: 1.0,
        };
        assert_eq!(
            AxisAngleToQuatNode::compute(&input),
            Err(QuatError::DegenerateAxis)
        );
    }
}
