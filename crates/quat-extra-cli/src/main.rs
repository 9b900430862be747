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

//! Command-line host for the quaternion nodes.
//!
//! Plays the part of the host application: it pulls numbers out of the
//! command line (or a JSON request file), hands them to the nodes, and prints
//! what comes back.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quaternion utility nodes: axis-angle conversion and spin-aware slerp.
#[derive(Debug, Parser)]
#[command(name = "quat-extra", version, about)]
pub struct Cli {
    /// Read and print angles in degrees instead of radians.
    #[arg(long, global = true)]
    pub degrees: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a quaternion from a rotation axis and an angle.
    AxisAngleToQuat {
        /// The rotation axis; any non-zero length.
        #[arg(
            long,
            required = true,
            num_args = 3,
            value_names = ["X", "Y", "Z"],
            allow_negative_numbers = true,
        )]
        axis: Vec<f64>,
        /// The rotation angle.
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
    },
    /// Decompose a quaternion into a unit axis and an angle in [0, π].
    QuatToAxisAngle {
        /// The quaternion components.
        #[arg(
            long,
            required = true,
            num_args = 4,
            value_names = ["X", "Y", "Z", "W"],
            allow_negative_numbers = true,
        )]
        quat: Vec<f64>,
    },
    /// Spherically interpolate between two quaternions.
    Slerp {
        /// Quaternion to rotate from.
        #[arg(
            long,
            required = true,
            num_args = 4,
            value_names = ["X", "Y", "Z", "W"],
            allow_negative_numbers = true,
        )]
        from: Vec<f64>,
        /// Quaternion to rotate to.
        #[arg(
            long,
            required = true,
            num_args = 4,
            value_names = ["X", "Y", "Z", "W"],
            allow_negative_numbers = true,
        )]
        to: Vec<f64>,
        /// Interpolation factor; values outside [0, 1] extrapolate.
        #[arg(long, allow_negative_numbers = true)]
        tween: f64,
        /// Extra full revolutions; negative values take the long arc.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        spin: i32,
    },
    /// Evaluate a JSON file of node requests (`-` reads standard input).
    Eval {
        /// Path to the request file.
        path: PathBuf,
    },
    /// List the available nodes.
    Nodes,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Parsed command line: {cli:?}");

    let report = commands::run(&cli)?;
    print!("{}", report.output);
    if report.failed > 0 {
        anyhow::bail!("{} request(s) failed", report.failed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_components() {
        let cli = Cli::try_parse_from([
            "quat-extra",
            "axis-angle-to-quat",
            "--axis",
            "0",
            "-1",
            "0",
            "--angle",
            "-0.5",
        ])
        .unwrap();
        match cli.command {
            Command::AxisAngleToQuat { axis, angle } => {
                assert_eq!(axis, vec![0.0, -1.0, 0.0]);
                assert_eq!(angle, -0.5);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(!cli.degrees);
    }

    #[test]
    fn test_parse_slerp_defaults_spin() {
        let cli = Cli::try_parse_from([
            "quat-extra", "--json", "slerp", "--from", "0", "0", "0", "1", "--to", "0", "0", "1",
            "0", "--tween", "0.5",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Slerp { spin, tween, .. } => {
                assert_eq!(spin, 0);
                assert_eq!(tween, 0.5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_short_quaternion() {
        let result = Cli::try_parse_from([
            "quat-extra",
            "quat-to-axis-angle",
            "--quat",
            "0",
            "0",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
