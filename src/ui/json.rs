//! Single-line JSON event output for `--json` mode.

use std::io::Write;

use anyhow::Result;

/// Emit one JSON event per line to stdout.
pub fn emit(value: serde_json::Value) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &value)?;
    writeln!(stdout)?;
    Ok(())
}
