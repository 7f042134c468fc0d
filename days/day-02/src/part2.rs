use itertools::Itertools;
use miette::*;

use crate::ids::{in_any, parse, repetitions, MAX_DIGITS};

/// Sums the IDs inside any range that are some block written two or more
/// times.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parse(input)?;

    let sum: u64 = (1..=MAX_DIGITS / 2)
        .flat_map(|block_len| (2..=MAX_DIGITS / block_len).map(move |repeats| (block_len, repeats)))
        .flat_map(|(block_len, repeats)| repetitions(block_len, repeats))
        .filter(|&id| in_any(&ranges, id))
        // 1111 is both 1 x 4 and 11 x 2
        .unique()
        .sum();

    Ok(sum.to_string())
}
