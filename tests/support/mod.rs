use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn field_metadata_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_field-metadata"))
}

/// A `field-metadata` command with the inspection environment cleared so the
/// caller's shell cannot leak a table or filter into the test.
pub fn field_metadata_command() -> Command {
    let mut cmd = Command::new(field_metadata_binary());
    cmd.env_remove("PBPRDF_FIELD_TABLE")
        .env_remove("PBPRDF_CLASSES")
        .env_remove("PBPRDF_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn parse_stdout(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout is not JSON")
}

pub fn write_table(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate field table")?;
    serde_json::to_writer(&mut file, value)?;
    Ok(file)
}

/// Find the metadata entry for `field` of `class` in CLI output.
pub fn field_entry<'a>(reports: &'a Value, class: &str, field: &str) -> Option<&'a Value> {
    reports
        .as_array()?
        .iter()
        .find(|report| report.get("class").and_then(Value::as_str) == Some(class))?
        .get("fields")?
        .as_array()?
        .iter()
        .find(|entry| entry.get("field").and_then(Value::as_str) == Some(field))
}
