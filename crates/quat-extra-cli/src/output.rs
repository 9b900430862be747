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

//! Text and JSON rendering of node results.

use anyhow::Result;
use quat_extra_nodes::{AngleUnit, NodeResponse, QuatResult, Quaternion};
use serde::Serialize;
use std::fmt::Write;

/// Per-request entry of a batch report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Ok(NodeResponse),
    Error(String),
}

pub fn render_response(response: &NodeResponse, unit: AngleUnit, json: bool) -> Result<String> {
    if json {
        let mut text = serde_json::to_string_pretty(response)?;
        text.push('\n');
        return Ok(text);
    }
    Ok(render_text(response, unit))
}

pub fn render_batch(
    results: &[QuatResult<NodeResponse>],
    unit: AngleUnit,
    json: bool,
) -> Result<String> {
    if json {
        let outcomes: Vec<Outcome> = results
            .iter()
            .map(|result| match result {
                Ok(response) => Outcome::Ok(*response),
                Err(err) => Outcome::Error(err.to_string()),
            })
            .collect();
        let mut text = serde_json::to_string_pretty(&outcomes)?;
        text.push('\n');
        return Ok(text);
    }

    let mut text = String::new();
    for (index, result) in results.iter().enumerate() {
        match result {
            Ok(response) => {
                for line in render_text(response, unit).lines() {
                    let _ = writeln!(text, "[{index}] {line}");
                }
            }
            Err(err) => {
                let _ = writeln!(text, "[{index}] error: {err}");
            }
        }
    }
    Ok(text)
}

fn render_text(response: &NodeResponse, unit: AngleUnit) -> String {
    match response {
        NodeResponse::AxisAngleToQuat(q) | NodeResponse::QuatSlerp(q) => quat_line(q),
        NodeResponse::QuatToAxisAngle(aa) => {
            let suffix = match unit {
                AngleUnit::Radians => "rad",
                AngleUnit::Degrees => "deg",
            };
            format!(
                "axis: {:.8} {:.8} {:.8}\nangle: {:.8} {suffix}\n",
                aa.axis.x, aa.axis.y, aa.axis.z, aa.angle
            )
        }
    }
}

fn quat_line(q: &Quaternion) -> String {
    format!("{:.8} {:.8} {:.8} {:.8}\n", q.x, q.y, q.z, q.w)
}
