use miette::*;
use std::collections::BTreeSet;

use crate::manifold::Manifold;

/// Sends the beam down the manifold and counts how many times it is split.
///
/// Beams landing in the same column merge, so a splitter is only hit once.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let manifold = Manifold::parse(input)?;
    let (start_row, start_column) = manifold.start;

    let mut beams = BTreeSet::from([start_column]);
    let mut splits = 0;

    for row in start_row + 1..manifold.height() {
        let mut next = BTreeSet::new();
        for column in beams {
            if manifold.is_splitter(row, column) {
                splits += 1;
                next.extend(manifold.split(column));
            } else {
                next.insert(column);
            }
        }
        beams = next;
    }
    tracing::debug!(beams = beams.len(), splits, "beams left the manifold");

    Ok(splits.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = ".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............";
        assert_eq!("21", process(input)?);
        Ok(())
    }
}
