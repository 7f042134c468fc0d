use miette::*;

use crate::dial::{parse, START_POSITION};

/// Counts every click that points the dial at 0, mid-rotation or not.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parse(input)?;

    let (position, clicks) = rotations
        .iter()
        .fold((START_POSITION, 0), |(position, clicks), rotation| {
            (
                rotation.apply(position),
                clicks + rotation.zero_clicks(position),
            )
        });
    tracing::debug!(position, clicks, "dial settled");

    Ok(clicks.to_string())
}
