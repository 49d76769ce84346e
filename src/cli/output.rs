//! Output formatting utilities for the CLI.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use super::types::OutputFormat;
use crate::domain::models::Envelope;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

/// Single-line JSON with `", "` and `": "` separators
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// Serialize a value onto one line, e.g. `{"success": true, "data": {}}`
pub fn to_single_line(value: &serde_json::Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    if value.serialize(&mut serializer).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

/// Render a result in the requested format
pub fn render<T: CommandOutput>(result: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_single_line(&result.to_json()),
        OutputFormat::Pretty => {
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        }
        OutputFormat::Table => result.to_human(),
    }
}

/// Print a result to stdout; exactly one call per invocation
pub fn output<T: CommandOutput>(result: &T, format: OutputFormat) {
    println!("{}", render(result, format));
}

/// Human-readable form shared by every failed envelope
pub fn failure_to_human(envelope: &Envelope) -> String {
    let message = envelope.message.as_deref().unwrap_or("unknown error");
    let mut lines = vec![format!("{} {}", console::style("error:").red().bold(), message)];
    if let Some(detail) = &envelope.detail {
        lines.push(format!("  {detail}"));
    }
    lines.join("\n")
}

impl CommandOutput for Envelope {
    fn to_human(&self) -> String {
        if self.success {
            self.data
                .as_ref()
                .and_then(|data| serde_json::to_string_pretty(data).ok())
                .unwrap_or_default()
        } else {
            failure_to_human(self)
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
