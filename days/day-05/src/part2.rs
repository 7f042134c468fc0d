use miette::*;

use crate::inventory::{merge, parse};

/// Counts every ID the fresh ranges cover, overlaps counted once.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let inventory = parse(input)?;

    let merged = merge(inventory.fresh);
    tracing::debug!(ranges = merged.len(), "merged fresh ranges");

    let covered: u64 = merged
        .iter()
        .map(|range| range.end() - range.start() + 1)
        .sum();

    Ok(covered.to_string())
}
