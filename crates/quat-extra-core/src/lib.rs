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

//! # Quat Extra Core
//!
//! The numeric kernel behind the quaternion nodes: axis-angle construction,
//! axis-angle extraction and spin-aware spherical interpolation.
//!
//! Every operation is a pure function over `Copy` value types. Nothing is
//! cached or shared between calls, so all of it can be called from any thread.

#![warn(missing_docs)]

pub mod error;
pub mod math;

pub use error::{QuatError, QuatResult};
pub use math::{AxisAngle, Quaternion, Vec3};
