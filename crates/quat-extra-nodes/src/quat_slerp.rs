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

//! `quatSlerp`: spherical linear interpolation of two quaternions.

use quat_extra_core::{QuatResult, Quaternion};
use serde::{Deserialize, Serialize};

use crate::Node;

/// Inputs of the `quatSlerp` node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuatSlerpInput {
    /// Quaternion to rotate from.
    pub input1_quat: Quaternion,
    /// Quaternion to rotate to.
    pub input2_quat: Quaternion,
    /// Fraction of the interpolation between the two inputs. Not clamped.
    pub tween: f64,
    /// Number of complete revolutions around the axis. Negative values take
    /// the long path on the quaternion sphere.
    pub spin: i32,
}

/// Computes the spherical linear interpolation of two quaternions.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuatSlerpNode;

impl Node for QuatSlerpNode {
    const NAME: &'static str = "quatSlerp";
    type Input = QuatSlerpInput;
    type Output = Quaternion;

    fn compute(input: &Self::Input) -> QuatResult<Self::Output> {
        log::trace!("Evaluating {} with {:?}", Self::NAME, input);
        Quaternion::slerp(input.input1_quat, input.input2_quat, input.tween, input.spin)
    }
}
