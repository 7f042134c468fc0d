use miette::*;

use crate::ids::{in_any, parse, repetitions, MAX_DIGITS};

/// Sums the IDs inside any range that are some block written exactly twice.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parse(input)?;

    let sum: u64 = (1..=MAX_DIGITS / 2)
        .flat_map(|block_len| repetitions(block_len, 2))
        .filter(|&id| in_any(&ranges, id))
        .sum();

    Ok(sum.to_string())
}
