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

//! Executes a parsed command line against the nodes.

use anyhow::{Context, Result};
use quat_extra_nodes::{
    node_names, AngleUnit, AxisAngleToQuatInput, NodeBatch, NodeRequest, QuatSlerpInput,
    QuatToAxisAngleInput, Quaternion, Vec3,
};
use std::io::Read;
use std::path::Path;

use crate::output::{render_batch, render_response};
use crate::{Cli, Command};

/// What a command printed, and how many of its evaluations failed.
#[derive(Debug, Default)]
pub struct Report {
    pub output: String,
    pub failed: usize,
}

pub fn run(cli: &Cli) -> Result<Report> {
    let unit = if cli.degrees {
        AngleUnit::Degrees
    } else {
        AngleUnit::Radians
    };

    let request = match &cli.command {
        Command::AxisAngleToQuat { axis, angle } => {
            NodeRequest::AxisAngleToQuat(AxisAngleToQuatInput {
                axis: Vec3::from(components::<3>("axis", axis)?),
                angle: *angle,
            })
        }
        Command::QuatToAxisAngle { quat } => NodeRequest::QuatToAxisAngle(QuatToAxisAngleInput {
            input_quat: Quaternion::from(components::<4>("quat", quat)?),
        }),
        Command::Slerp {
            from,
            to,
            tween,
            spin,
        } => NodeRequest::QuatSlerp(QuatSlerpInput {
            input1_quat: Quaternion::from(components::<4>("from", from)?),
            input2_quat: Quaternion::from(components::<4>("to", to)?),
            tween: *tween,
            spin: *spin,
        }),
        Command::Eval { path } => return eval(path, cli.degrees.then_some(unit), cli.json),
        Command::Nodes => {
            let mut output = node_names().join("\n");
            output.push('\n');
            return Ok(Report { output, failed: 0 });
        }
    };

    let response = request
        .evaluate_in(unit)
        .with_context(|| format!("{} failed", request.node_name()))?;
    Ok(Report {
        output: render_response(&response, unit, cli.json)?,
        failed: 0,
    })
}

/// Evaluates a request file. `unit_override` replaces the file's own unit.
fn eval(path: &Path, unit_override: Option<AngleUnit>, json: bool) -> Result<Report> {
    let text = read_source(path)?;
    let batch = NodeBatch::from_json(&text)
        .with_context(|| format!("Invalid request file '{}'", path.display()))?;
    let unit = unit_override.unwrap_or_else(|| batch.angle_unit());

    let results = batch.evaluate_in(unit);
    let failed = results.iter().filter(|result| result.is_err()).count();
    if failed > 0 {
        log::warn!("{failed} of {} request(s) failed.", results.len());
    }

    Ok(Report {
        output: render_batch(&results, unit, json)?,
        failed,
    })
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read requests from standard input")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file '{}'", path.display()))
    }
}

fn components<const N: usize>(name: &str, values: &[f64]) -> Result<[f64; N]> {
    values
        .try_into()
        .with_context(|| format!("`{name}` needs {N} components, got {}", values.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn run_args(args: &[&str]) -> Result<Report> {
        let mut argv = vec!["quat-extra"];
        argv.extend_from_slice(args);
        run(&Cli::try_parse_from(argv)?)
    }

    #[test]
    fn test_axis_angle_to_quat_in_degrees() -> Result<()> {
        let report = run_args(&[
            "--degrees",
            "axis-angle-to-quat",
            "--axis",
            "0",
            "0",
            "1",
            "--angle",
            "90",
        ])?;
        assert_eq!(report.output, "0.00000000 0.00000000 0.70710678 0.70710678\n");
        Ok(())
    }

    #[test]
    fn test_degenerate_axis_is_an_error() {
        let err = run_args(&[
            "axis-angle-to-quat",
            "--axis",
            "0",
            "0",
            "0",
            "--angle",
            "1",
        ])
        .unwrap_err();
        assert!(format!("{err:#}").contains("degenerate axis"));
    }

    #[test]
    fn test_slerp_json_output() -> Result<()> {
        let report = run_args(&[
            "--json",
            "slerp",
            "--from",
            "0",
            "0",
            "0",
            "1",
            "--to",
            "0",
            "0",
            "0.70710678",
            "0.70710678",
            "--tween",
            "0.5",
        ])?;
        let value: serde_json::Value = serde_json::from_str(&report.output)?;
        assert_eq!(value["node"], "quatSlerp");
        approx::assert_relative_eq!(value["w"].as_f64().unwrap(), 0.92387953, epsilon = 1e-8);
        Ok(())
    }

    #[test]
    fn test_nodes_lists_all_nodes() -> Result<()> {
        let report = run_args(&["nodes"])?;
        assert_eq!(report.output, "axisAngleToQuat\nquatToAxisAngle\nquatSlerp\n");
        Ok(())
    }

    #[test]
    fn test_eval_request_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{"angleUnit": "degrees", "requests": [
                {{"node": "quatToAxisAngle", "inputQuat": {{"x": 0, "y": 1, "z": 0, "w": 1}}}},
                {{"node": "axisAngleToQuat", "axis": {{"x": 0, "y": 0, "z": 0}}}}
            ]}}"#
        )?;

        let report = run_args(&["--json", "eval", file.path().to_str().unwrap()])?;
        assert_eq!(report.failed, 1);

        let value: serde_json::Value = serde_json::from_str(&report.output)?;
        let extracted = &value[0]["ok"];
        assert_eq!(extracted["node"], "quatToAxisAngle");
        approx::assert_relative_eq!(extracted["angle"].as_f64().unwrap(), 90.0, epsilon = 1e-9);
        assert!(value[1]["error"].as_str().unwrap().contains("degenerate axis"));
        Ok(())
    }

    #[test]
    fn test_eval_degrees_flag_overrides_file_unit() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"node": "axisAngleToQuat", "axis": {{"x": 0, "y": 0, "z": 1}}, "angle": 90}}]"#
        )?;

        let report = run_args(&["--json", "--degrees", "eval", file.path().to_str().unwrap()])?;
        assert_eq!(report.failed, 0);
        let value: serde_json::Value = serde_json::from_str(&report.output)?;
        let w = value[0]["ok"]["w"].as_f64().unwrap();
        approx::assert_relative_eq!(w, 0.5f64.sqrt(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_eval_reports_unknown_node() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"requests": [{{"node": "quatInvert"}}]}}"#)?;

        let err = run_args(&["eval", file.path().to_str().unwrap()]).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Invalid request file"));
        assert!(message.contains("quatInvert"), "unhelpful error: {message}");
        Ok(())
    }

    #[test]
    fn test_eval_missing_file() {
        let err = run_args(&["eval", "/definitely/not/here.json"]).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read request file"));
    }

    #[test]
    fn test_components_length_checked() {
        assert!(components::<3>("axis", &[1.0, 2.0]).is_err());
        assert_eq!(components::<3>("axis", &[1.0, 2.0, 3.0]).unwrap(), [1.0, 2.0, 3.0]);
    }
}
