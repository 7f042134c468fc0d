use miette::*;

use crate::bank::{parse, to_number, Bank};

const BATTERIES: usize = 12;

/// Keeps `keep` digits of `bank`, in order, spelling the largest number.
///
/// A digit is dropped whenever a larger one arrives and there is still
/// budget to drop; banks shorter than `keep` are used whole.
pub fn max_joltage(bank: &Bank, keep: usize) -> u64 {
    let mut budget = bank.len().saturating_sub(keep);
    let mut kept: Vec<u8> = Vec::with_capacity(bank.len());

    for &digit in bank {
        while budget > 0 && kept.last().is_some_and(|&last| last < digit) {
            kept.pop();
            budget -= 1;
        }
        kept.push(digit);
    }
    kept.truncate(keep);

    to_number(&kept)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parse(input)?;

    let total: u64 = banks.iter().map(|bank| max_joltage(bank, BATTERIES)).sum();

    Ok(total.to_string())
}
