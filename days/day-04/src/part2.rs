use miette::*;

use crate::floor::parse;

/// Removes every accessible roll at once, round after round, until the
/// forklifts are stuck.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut floor = parse(input)?;
    let mut removed = 0;

    for round in 1.. {
        let accessible = floor.accessible();
        if accessible.is_empty() {
            tracing::debug!(rounds = round - 1, removed, "no roll left to reach");
            break;
        }

        removed += accessible.len();
        for at in accessible {
            floor.remove(at);
        }
    }

    Ok(removed.to_string())
}
