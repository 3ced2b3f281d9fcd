//! Logging setup for the inspection binary.
//!
//! Logs go to stderr so stdout stays clean JSON. The library itself only emits
//! `tracing` events; installing a subscriber is left to binaries.

use anyhow::{Context, Result, anyhow};
use std::io;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `directive` (e.g. `warn`,
/// `pbprdf_ontology=debug`).
pub fn init_logging(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_directive() {
        let err = init_logging("pbprdf_ontology=loud").expect_err("bad level");
        assert!(err.to_string().contains("pbprdf_ontology=loud"));
    }
}
