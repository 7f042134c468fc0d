use itertools::Itertools;
use miette::*;

use crate::homework::{split_sheet, Op};

/// A column-aligned sheet, padded so every row has the same width.
struct Sheet {
    rows: Vec<Vec<char>>,
    operators: Vec<char>,
    width: usize,
}

impl Sheet {
    fn new(rows: Vec<&str>, operators: &str) -> Self {
        let width = rows
            .iter()
            .chain(std::iter::once(&operators))
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let pad = |line: &str| {
            let mut chars = line.chars().collect::<Vec<_>>();
            chars.resize(width, ' ');
            chars
        };

        Self {
            rows: rows.into_iter().map(pad).collect(),
            operators: pad(operators),
            width,
        }
    }

    fn is_gap(&self, column: usize) -> bool {
        self.operators[column] == ' ' && self.rows.iter().all(|row| row[column] == ' ')
    }

    /// Runs of adjacent non-blank columns, one per problem.
    fn problems(&self) -> Vec<Vec<usize>> {
        (0..self.width)
            .chunk_by(|&column| self.is_gap(column))
            .into_iter()
            .filter(|(gap, _)| !gap)
            .map(|(_, columns)| columns.collect())
            .collect()
    }

    /// The digits of one column, read top to bottom.
    fn column_number(&self, column: usize) -> Option<u64> {
        self.rows
            .iter()
            .filter_map(|row| row[column].to_digit(10))
            .fold(None, |acc, digit| Some(acc.unwrap_or(0) * 10 + u64::from(digit)))
    }

    fn solve(&self, columns: &[usize]) -> Result<u64> {
        let op = columns
            .iter()
            .find_map(|&column| Op::from_symbol(self.operators[column]))
            .ok_or_else(|| miette!("Problem at column {} has no operator", columns[0]))?;

        Ok(op.apply(columns.iter().filter_map(|&column| self.column_number(column))))
    }
}

/// Reads each problem column by column: every column spells one number.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (rows, operators) = split_sheet(input)?;
    let sheet = Sheet::new(rows, operators);

    let problems = sheet.problems();
    tracing::debug!(problems = problems.len(), "split worksheet");

    let total = problems
        .iter()
        .map(|columns| sheet.solve(columns))
        .sum::<Result<u64>>()?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "123 328  51 64 
 45 64  387 23 
  6 98  215 314
*   +   *   +  ";
        assert_eq!("3263827", process(input)?);
        Ok(())
    }

    #[test]
    fn columns_spell_numbers() -> Result<()> {
        // The left column reads 12, the right one 3.
        assert_eq!("36", process("13\n2 \n* ")?);
        Ok(())
    }
}
