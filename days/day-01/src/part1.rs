use miette::*;

use crate::dial::{parse, START_POSITION};

/// Counts the rotations that leave the dial resting on 0.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parse(input)?;

    let zero_stops = rotations
        .iter()
        .scan(START_POSITION, |position, rotation| {
            *position = rotation.apply(*position);
            Some(*position)
        })
        .filter(|&position| position == 0)
        .count();

    Ok(zero_stops.to_string())
}
