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

//! The contract shared by every node evaluator.

use quat_extra_core::QuatResult;
use serde::{de::DeserializeOwned, Serialize};

use crate::{AxisAngleToQuatNode, QuatSlerpNode, QuatToAxisAngleNode};

/// A stateless numeric node.
///
/// Implementors hold no data: `compute` is a pure function of its input, so
/// a node can be evaluated any number of times, from any thread.
pub trait Node {
    /// The node's type name as a host would register it.
    const NAME: &'static str;

    /// Plain numeric inputs. `Default` yields the attribute defaults.
    type Input: Default + Serialize + DeserializeOwned;

    /// Plain numeric outputs.
    type Output: Serialize;

    /// Evaluates the node.
    fn compute(input: &Self::Input) -> QuatResult<Self::Output>;
}

/// Returns the type names of all nodes, in registration order.
pub fn node_names() -> [&'static str; 3] {
    [
        AxisAngleToQuatNode::NAME,
        QuatToAxisAngleNode::NAME,
        QuatSlerpNode::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_names() {
        assert_eq!(
            node_names(),
            ["axisAngleToQuat", "quatToAxisAngle", "quatSlerp"]
        );
    }
}
