use chumsky::prelude::*;
use miette::*;
use std::ops::RangeInclusive;

/// Product IDs in the database never exceed this many digits.
pub const MAX_DIGITS: u32 = 10;

/// Every ID made of a `block_len`-digit block written `repeats` times,
/// smallest first.
///
/// Such an ID is the block times `1 0..01 0..01 ...`, so no string
/// handling is needed.
pub fn repetitions(block_len: u32, repeats: u32) -> impl Iterator<Item = u64> {
    let shift = 10_u64.pow(block_len);
    let multiplier = (0..repeats).fold(0, |acc, _| acc * shift + 1);
    let first_block = 10_u64.pow(block_len - 1);

    (first_block..shift).map(move |block| block * multiplier)
}

pub fn in_any(ranges: &[RangeInclusive<u64>], id: u64) -> bool {
    ranges.iter().any(|range| range.contains(&id))
}

fn parser<'a>(
) -> impl Parser<'a, &'a str, Vec<RangeInclusive<u64>>, extra::Err<Rich<'a, char>>> {
    let id = text::int(10)
        .try_map(|s: &str, span| s.parse::<u64>().map_err(|e| Rich::custom(span, e)));

    // Ranges wrap across lines in the puzzle input.
    id.clone()
        .then_ignore(just('-'))
        .then(id)
        .map(|(start, end)| start..=end)
        .padded()
        .separated_by(just(','))
        .allow_trailing()
        .collect()
}

pub fn parse(input: &str) -> Result<Vec<RangeInclusive<u64>>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
