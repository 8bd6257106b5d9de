//! Rendering a [`ThicknessResult`] for the terminal.

use std::fmt::{self, Display, Write};

use serde::{Deserialize, Serialize};
use thicket_partition::ThicknessResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Human-readable summary: a header followed by one line per layer.
pub fn text<N: Display>(result: &ThicknessResult<N>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_text(&mut out, result);
    out
}

fn write_text<N: Display>(out: &mut String, result: &ThicknessResult<N>) -> fmt::Result {
    writeln!(out, "planar: {}", result.is_planar())?;
    writeln!(out, "thickness: {}", result.thickness())?;
    for (i, (layer, edges)) in result.layers().iter().zip(result.partition()).enumerate() {
        writeln!(out, "layer {} ({} edges): {}", i + 1, edges.len(), layer)?;
    }
    Ok(())
}

pub fn json<N: Serialize>(result: &ThicknessResult<N>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
