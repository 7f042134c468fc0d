use miette::*;
use std::collections::HashMap;

use crate::manifold::Manifold;

/// Timelines reachable from a particle at `(row, column)`, memoised.
struct Timelines<'a> {
    manifold: &'a Manifold,
    memo: HashMap<(usize, usize), u64>,
}

impl<'a> Timelines<'a> {
    fn new(manifold: &'a Manifold) -> Self {
        Self {
            manifold,
            memo: HashMap::new(),
        }
    }

    fn count(&mut self, row: usize, column: usize) -> u64 {
        if row >= self.manifold.height() {
            return 1;
        }
        if let Some(&known) = self.memo.get(&(row, column)) {
            return known;
        }

        let total = if self.manifold.is_splitter(row, column) {
            self.manifold
                .split(column)
                .collect::<Vec<_>>()
                .into_iter()
                .map(|next| self.count(row + 1, next))
                .sum()
        } else {
            self.count(row + 1, column)
        };

        self.memo.insert((row, column), total);
        total
    }
}

/// Counts the timelines a single quantum tachyon ends up on: every
/// splitter sends it both ways.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let manifold = Manifold::parse(input)?;
    let (start_row, start_column) = manifold.start;

    let timelines = Timelines::new(&manifold).count(start_row + 1, start_column);

    Ok(timelines.to_string())
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
        assert_eq!("40", process(input)?);
        Ok(())
    }

    #[test]
    fn edge_splitter_loses_a_branch() -> Result<()> {
        assert_eq!("1", process("S.\n^.\n..")?);
        Ok(())
    }
}
