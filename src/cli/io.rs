//! JSON output for CLI commands
//!
//! One JSON object per line on stdout.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Build the success envelope written by [`write_response`]
pub fn response_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_to(&mut io::stdout(), &response_envelope(data))
}

fn write_to<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
