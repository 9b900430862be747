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

//! # Quat Extra Nodes
//!
//! Host-independent evaluators for the three quaternion nodes:
//! `axisAngleToQuat`, `quatToAxisAngle` and `quatSlerp`.
//!
//! A host extracts plain numbers from its own storage, fills one of the input
//! records, calls [`Node::compute`], and stores the returned values. Input
//! records default to the values the nodes' attributes start with, and
//! (de)serialize with the attribute names, so a host can also submit
//! evaluations as JSON through [`NodeRequest`].

#![warn(missing_docs)]

mod axis_angle_to_quat;
mod node;
mod quat_slerp;
mod quat_to_axis_angle;
mod request;
mod units;

pub use axis_angle_to_quat::{AxisAngleToQuatInput, AxisAngleToQuatNode};
pub use node::{node_names, Node};
pub use quat_slerp::{QuatSlerpInput, QuatSlerpNode};
pub use quat_to_axis_angle::{QuatToAxisAngleInput, QuatToAxisAngleNode};
pub use request::{NodeBatch, NodeRequest, NodeResponse};
pub use units::AngleUnit;

pub use quat_extra_core::{AxisAngle, QuatError, QuatResult, Quaternion, Vec3};
