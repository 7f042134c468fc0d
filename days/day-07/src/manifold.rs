use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Splitter,
}

/// The tachyon manifold diagram. Beams enter at `start` and travel down.
#[derive(Debug, Clone)]
pub struct Manifold {
    pub cells: Vec<Vec<Cell>>,
    pub width: usize,
    pub start: (usize, usize),
}

impl Manifold {
    pub fn parse(input: &str) -> Result<Self> {
        let mut start = None;
        let mut cells = Vec::new();

        for (row, line) in input.lines().filter(|line| !line.is_empty()).enumerate() {
            let cells_in_row = line
                .chars()
                .enumerate()
                .map(|(column, c)| match c {
                    '^' => Ok(Cell::Splitter),
                    '.' | '|' => Ok(Cell::Empty),
                    'S' => {
                        start = Some((row, column));
                        Ok(Cell::Empty)
                    }
                    other => Err(miette!("Unexpected `{other}` at row {row}, column {column}")),
                })
                .collect::<Result<Vec<_>>>()?;
            cells.push(cells_in_row);
        }

        let start = start.ok_or_else(|| miette!("No start position 'S' found in diagram"))?;
        let width = cells.iter().map(Vec::len).max().unwrap_or(0);

        Ok(Self { cells, width, start })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn is_splitter(&self, row: usize, column: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .is_some_and(|&cell| cell == Cell::Splitter)
    }

    /// Where a beam goes after hitting a splitter in `column`. Beams that
    /// would leave the diagram sideways are lost.
    pub fn split(&self, column: usize) -> impl Iterator<Item = usize> {
        let left = column.checked_sub(1);
        let right = Some(column + 1).filter(|&c| c < self.width);
        left.into_iter().chain(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_start_and_splitters() -> Result<()> {
        let manifold = Manifold::parse("..S..\n.....\n..^..\n")?;
        assert_eq!(manifold.start, (0, 2));
        assert_eq!(manifold.height(), 3);
        assert!(manifold.is_splitter(2, 2));
        assert!(!manifold.is_splitter(1, 2));
        assert!(!manifold.is_splitter(9, 9));
        Ok(())
    }

    #[test]
    fn split_clips_at_edges() -> Result<()> {
        let manifold = Manifold::parse("S..")?;
        assert_eq!(manifold.split(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(manifold.split(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(manifold.split(2).collect::<Vec<_>>(), vec![1]);
        Ok(())
    }

    #[test]
    fn missing_start_is_an_error() {
        assert!(Manifold::parse("...\n.^.").is_err());
    }
}
