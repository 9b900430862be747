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

//! `quatToAxisAngle`: converts a quaternion to a pivot vector and a rotation around it.

use quat_extra_core::{AxisAngle, QuatResult, Quaternion};
use serde::{Deserialize, Serialize};

use crate::Node;

/// Inputs of the `quatToAxisAngle` node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuatToAxisAngleInput {
    /// The quaternion to convert. Need not be unit length.
    pub input_quat: Quaternion,
}

/// Converts a quaternion to an axis and an angle in `[0, π]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuatToAxisAngleNode;

impl Node for QuatToAxisAngleNode {
    const NAME: &'static str = "quatToAxisAngle";
    type Input = QuatToAxisAngleInput;
    type Output = AxisAngle;

    fn compute(input: &Self::Input) -> QuatResult<Self::Output> {
        log::trace!("Evaluating {} with {:?}", Self::NAME, input);
        input.input_quat.to_axis_angle()
    }
}
