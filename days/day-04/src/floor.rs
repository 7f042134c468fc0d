use chumsky::prelude::*;
use glam::IVec2;
use miette::*;

const NEIGHBORS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// A forklift can reach a roll with fewer neighbours than this.
pub const CROWDED: usize = 4;

/// The printing department floor. `true` marks a roll of paper.
///
/// Rows may differ in length; anything past the end of a row is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    rows: Vec<Vec<bool>>,
}

impl Floor {
    pub fn is_roll(&self, at: IVec2) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(at.x), usize::try_from(at.y)) else {
            return false;
        };
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn rolls(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &roll)| roll)
                .map(move |(x, _)| IVec2::new(x as i32, y as i32))
        })
    }

    pub fn neighboring_rolls(&self, at: IVec2) -> usize {
        NEIGHBORS
            .iter()
            .filter(|&&offset| self.is_roll(at + offset))
            .count()
    }

    /// Rolls a forklift can currently get at.
    pub fn accessible(&self) -> Vec<IVec2> {
        self.rolls()
            .filter(|&at| self.neighboring_rolls(at) < CROWDED)
            .collect()
    }

    pub fn remove(&mut self, at: IVec2) {
        if let Some(cell) = self
            .rows
            .get_mut(at.y as usize)
            .and_then(|row| row.get_mut(at.x as usize))
        {
            *cell = false;
        }
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Floor, extra::Err<Rich<'a, char>>> {
    let cell = just('@').to(true).or(just('.').to(false));

    cell.repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
        .map(|rows| Floor { rows })
}

pub fn parse(input: &str) -> Result<Floor> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_is_empty() -> Result<()> {
        let floor = parse("@@\n@")?;
        assert!(floor.is_roll(IVec2::new(1, 0)));
        assert!(!floor.is_roll(IVec2::new(1, 1)));
        assert!(!floor.is_roll(IVec2::new(-1, 0)));
        assert_eq!(floor.neighboring_rolls(IVec2::new(1, 1)), 3);
        Ok(())
    }

    #[test]
    fn crowded_roll_is_inaccessible() -> Result<()> {
        let floor = parse("@@@\n@@@\n@@@\n")?;
        let accessible = floor.accessible();
        // Only the four corners have three neighbours.
        assert_eq!(accessible.len(), 4);
        assert!(!accessible.contains(&IVec2::new(1, 1)));
        Ok(())
    }
}
