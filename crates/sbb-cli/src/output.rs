//! Output formatting and writing utilities

use crate::cli::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use tracing::trace;

/// Serialized form of a finished build
#[derive(Debug, Serialize)]
pub struct BuildOutput<'a> {
    pub fragments: &'a [String],
    pub result: &'a str,
}

/// Writes build results in the selected format
pub struct OutputWriter {
    format: OutputFormat,
    trailing_newline: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, trailing_newline: bool) -> Self {
        Self {
            format,
            trailing_newline,
        }
    }

    /// Format a build result without writing it
    pub fn render(&self, fragments: &[String], result: &str) -> Result<String> {
        let output = BuildOutput { fragments, result };
        let mut text = match self.format {
            OutputFormat::Human => result.to_string(),
            OutputFormat::Json => serde_json::to_string(&output)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&output)?,
        };

        if self.trailing_newline || self.format != OutputFormat::Human {
            text.push('\n');
        }
        Ok(text)
    }

    /// Format and write a build result to `out`
    pub fn write_result<W: Write>(&self, out: &mut W, fragments: &[String], result: &str) -> Result<()> {
        let text = self.render(fragments, result)?;
        trace!(format = ?self.format, bytes = text.len(), "Writing output");

        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
