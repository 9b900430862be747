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

//! Error type shared by all kernel operations.

use thiserror::Error;

/// An error reported by one of the quaternion operations.
///
/// None of these are fatal: the caller decides whether to surface them or to
/// substitute a fallback rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuatError {
    /// An input component was NaN or infinite.
    #[error("invalid argument: `{name}` has a non-finite component")]
    InvalidArgument {
        /// The name of the offending input.
        name: &'static str,
    },
    /// A zero-length axis was supplied where a rotation axis is required.
    #[error("degenerate axis: the rotation axis has zero length")]
    DegenerateAxis,
}

/// Convenience alias for results produced by the kernel.
pub type QuatResult<T> = Result<T, QuatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_argument() {
        let err = QuatError::InvalidArgument { name: "end" };
        assert_eq!(
            err.to_string(),
            "invalid argument: `end` has a non-finite component"
        );
        assert!(QuatError::DegenerateAxis.to_string().contains("zero length"));
    }
}
