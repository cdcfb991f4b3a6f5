//! Reading many invocations at once and dispatching them concurrently.
//!
//! Input is one command per line (`mail someone@example.com`). Blank lines
//! and lines starting with `#` are skipped.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use futures::future::join_all;

use crate::model::DisplayDocument;
use crate::router::{CommandRouter, Invocation};

pub fn parse_invocations<R: BufRead>(reader: R) -> Result<Vec<Invocation>> {
    let mut invocations = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        invocations.push(Invocation::parse_line(trimmed)?);
    }

    Ok(invocations)
}

pub fn load_invocations(path: &Path) -> Result<Vec<Invocation>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_invocations(content.as_bytes())
}

/// Handles every invocation concurrently. Documents come back in input order.
pub async fn run_all(router: &CommandRouter, invocations: &[Invocation]) -> Vec<DisplayDocument> {
    join_all(invocations.iter().map(|inv| router.handle(inv))).await
}
