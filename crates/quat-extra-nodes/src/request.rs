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

//! JSON-friendly dispatch over all nodes.

use std::fmt;

use quat_extra_core::{AxisAngle, QuatResult, Quaternion};
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    AngleUnit, AxisAngleToQuatInput, AxisAngleToQuatNode, Node, QuatSlerpInput, QuatSlerpNode,
    QuatToAxisAngleInput, QuatToAxisAngleNode,
};

/// One node evaluation, tagged by node name.
///
/// ```json
/// { "node": "quatSlerp", "input2Quat": { "x": 0, "y": 0, "z": 1, "w": 0 }, "tween": 0.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node")]
pub enum NodeRequest {
    /// Evaluate `axisAngleToQuat`.
    #[serde(rename = "axisAngleToQuat")]
    AxisAngleToQuat(AxisAngleToQuatInput),
    /// Evaluate `quatToAxisAngle`.
    #[serde(rename = "quatToAxisAngle")]
    QuatToAxisAngle(QuatToAxisAngleInput),
    /// Evaluate `quatSlerp`.
    #[serde(rename = "quatSlerp")]
    QuatSlerp(QuatSlerpInput),
}

/// The result of a [`NodeRequest`], tagged like the request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node")]
pub enum NodeResponse {
    /// Output of `axisAngleToQuat`.
    #[serde(rename = "axisAngleToQuat")]
    AxisAngleToQuat(Quaternion),
    /// Output of `quatToAxisAngle`.
    #[serde(rename = "quatToAxisAngle")]
    QuatToAxisAngle(AxisAngle),
    /// Output of `quatSlerp`.
    #[serde(rename = "quatSlerp")]
    QuatSlerp(Quaternion),
}

impl NodeRequest {
    /// The name of the node this request targets.
    pub fn node_name(&self) -> &'static str {
        match self {
            NodeRequest::AxisAngleToQuat(_) => AxisAngleToQuatNode::NAME,
            NodeRequest::QuatToAxisAngle(_) => QuatToAxisAngleNode::NAME,
            NodeRequest::QuatSlerp(_) => QuatSlerpNode::NAME,
        }
    }

    /// Evaluates the request with angles in radians.
    pub fn evaluate(&self) -> QuatResult<NodeResponse> {
        self.evaluate_in(AngleUnit::Radians)
    }

    /// Evaluates the request, reading and reporting angles in `unit`.
    pub fn evaluate_in(&self, unit: AngleUnit) -> QuatResult<NodeResponse> {
        match *self {
            NodeRequest::AxisAngleToQuat(input) => {
                let input = AxisAngleToQuatInput {
                    angle: unit.to_radians(input.angle),
                    ..input
                };
                AxisAngleToQuatNode::compute(&input).map(NodeResponse::AxisAngleToQuat)
            }
            NodeRequest::QuatToAxisAngle(input) => {
                let aa = QuatToAxisAngleNode::compute(&input)?;
                Ok(NodeResponse::QuatToAxisAngle(AxisAngle {
                    angle: unit.from_radians(aa.angle),
                    ..aa
                }))
            }
            NodeRequest::QuatSlerp(input) => {
                QuatSlerpNode::compute(&input).map(NodeResponse::QuatSlerp)
            }
        }
    }
}

/// A batch of requests sharing one angle unit, as read from a request file.
///
/// A bare JSON array of requests is accepted as well and uses radians.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeBatch {
    /// `{ "angleUnit": "degrees", "requests": [...] }`
    #[serde(rename_all = "camelCase")]
    WithUnit {
        /// Unit of every angle in the batch.
        #[serde(default)]
        angle_unit: AngleUnit,
        /// The requests, evaluated in order.
        requests: Vec<NodeRequest>,
    },
    /// `[...]`
    Bare(Vec<NodeRequest>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchFile {
    #[serde(default)]
    angle_unit: AngleUnit,
    requests: Vec<NodeRequest>,
}

// Picks the form from the JSON shape so that errors inside `requests` reach
// the caller instead of collapsing into "did not match any variant".
impl<'de> Deserialize<'de> for NodeBatch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BatchVisitor;

        impl<'de> Visitor<'de> for BatchVisitor {
            type Value = NodeBatch;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array of node requests or an object with `requests`")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<NodeBatch, A::Error> {
                let requests = Vec::<NodeRequest>::deserialize(SeqAccessDeserializer::new(seq))?;
                Ok(NodeBatch::Bare(requests))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<NodeBatch, A::Error> {
                let file = BatchFile::deserialize(MapAccessDeserializer::new(map))?;
                Ok(NodeBatch::WithUnit {
                    angle_unit: file.angle_unit,
                    requests: file.requests,
                })
            }
        }

        deserializer.deserialize_any(BatchVisitor)
    }
}

impl NodeBatch {
    /// Parses a batch from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// The unit every angle in the batch is expressed in.
    pub fn angle_unit(&self) -> AngleUnit {
        match self {
            NodeBatch::WithUnit { angle_unit, .. } => *angle_unit,
            NodeBatch::Bare(_) => AngleUnit::Radians,
        }
    }

    /// The requests in evaluation order.
    pub fn requests(&self) -> &[NodeRequest] {
        match self {
            NodeBatch::WithUnit { requests, .. } => requests,
            NodeBatch::Bare(requests) => requests,
        }
    }

    /// Evaluates every request independently in the batch's own unit. One
    /// failing request does not stop the others.
    pub fn evaluate(&self) -> Vec<QuatResult<NodeResponse>> {
        self.evaluate_in(self.angle_unit())
    }

    /// Like [`NodeBatch::evaluate`], but reads and reports every angle in
    /// `unit` regardless of the unit the batch declares.
    pub fn evaluate_in(&self, unit: AngleUnit) -> Vec<QuatResult<NodeResponse>> {
        log::debug!(
            "Evaluating {} node request(s) in {:?}.",
            self.requests().len(),
            unit
        );
        self.requests()
            .iter()
            .map(|request| request.evaluate_in(unit))
            .collect()
    }
}
