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

//! Unit handling for angles crossing the host boundary.

use quat_extra_core::math::{degrees_to_radians, radians_to_degrees};
use serde::{Deserialize, Serialize};

/// The unit a host stores angles in.
///
/// The kernel works in radians only; conversion happens here, on the way in
/// and on the way out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Radians (the kernel's unit).
    #[default]
    Radians,
    /// Degrees.
    Degrees,
}

impl AngleUnit {
    /// Converts an angle expressed in this unit to radians.
    #[inline]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => degrees_to_radians(value),
        }
    }

    /// Converts an angle in radians to this unit.
    #[inline]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians_to_degrees(radians),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quat_extra_core::math::PI;

    #[test]
    fn test_radians_is_passthrough() {
        assert_eq!(AngleUnit::Radians.to_radians(1.25), 1.25);
        assert_eq!(AngleUnit::Radians.from_radians(1.25), 1.25);
    }

    #[test]
    fn test_degrees_conversion() {
        assert_relative_eq!(AngleUnit::Degrees.to_radians(90.0), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(AngleUnit::Degrees.from_radians(PI), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_serde_names() {
        let unit: AngleUnit = serde_json::from_str("\"degrees\"").unwrap();
        assert_eq!(unit, AngleUnit::Degrees);
        assert_eq!(serde_json::to_string(&AngleUnit::Radians).unwrap(), "\"radians\"");
    }
}
