use miette::*;

use crate::bank::{parse, Bank};

/// Largest two-digit joltage from switching on exactly two batteries.
///
/// The tens digit is the leftmost maximum that still leaves a battery after
/// it; the units digit is the best of what follows.
fn max_pair(bank: &Bank) -> u64 {
    let Some((_, head)) = bank.split_last() else {
        return 0;
    };
    let Some(first) = head.iter().copied().max() else {
        return 0;
    };

    // `position` finds the leftmost occurrence, which leaves the most choice.
    let first_pos = head.iter().position(|&d| d == first).unwrap_or_default();
    let second = bank[first_pos + 1..].iter().copied().max().unwrap_or_default();

    u64::from(first * 10 + second)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parse(input)?;

    let total: u64 = banks.iter().map(max_pair).sum();

    Ok(total.to_string())
}
