use chumsky::prelude::*;
use miette::*;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub fresh: Vec<RangeInclusive<u64>>,
    pub available: Vec<u64>,
}

impl Inventory {
    pub fn is_fresh(&self, id: u64) -> bool {
        self.fresh.iter().any(|range| range.contains(&id))
    }
}

/// Collapses overlapping or touching ranges, ordered by start.
///
/// `3-5` and `6-8` become `3-8`.
pub fn merge(mut ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges.sort_by_key(|range| *range.start());

    let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn parser<'a>() -> impl Parser<'a, &'a str, Inventory, extra::Err<Rich<'a, char>>> {
    let id = text::int(10)
        .try_map(|s: &str, span| s.parse::<u64>().map_err(|e| Rich::custom(span, e)));

    let range = id
        .clone()
        .then_ignore(just('-'))
        .then(id.clone())
        .map(|(start, end)| start..=end);

    let fresh = range
        .separated_by(text::newline())
        .allow_trailing()
        .collect();

    let available = id.separated_by(text::newline()).allow_trailing().collect();

    // The two sections are split by a blank line.
    fresh
        .then_ignore(text::newline())
        .then(available)
        .padded()
        .map(|(fresh, available)| Inventory { fresh, available })
}

pub fn parse(input: &str) -> Result<Inventory> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
