use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Op::Add),
            '*' => Some(Op::Mul),
            _ => None,
        }
    }

    pub fn apply(self, numbers: impl IntoIterator<Item = u64>) -> u64 {
        match self {
            Op::Add => numbers.into_iter().sum(),
            Op::Mul => numbers.into_iter().product(),
        }
    }
}

/// Splits the worksheet into its number rows and the operator row.
///
/// Blank lines (a trailing newline, mostly) are dropped.
pub fn split_sheet(input: &str) -> Result<(Vec<&str>, &str)> {
    let mut lines = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>();

    let operators = lines
        .pop()
        .ok_or_else(|| miette!("Worksheet is empty"))?;

    Ok((lines, operators))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops() {
        assert_eq!(Op::Add.apply([1, 2, 3]), 6);
        assert_eq!(Op::Mul.apply([2, 3, 4]), 24);
        assert_eq!(Op::from_symbol('-'), None);
    }

    #[test]
    fn operator_row_is_last() -> Result<()> {
        let (rows, operators) = split_sheet("1 2\n3 4\n+ *\n\n")?;
        assert_eq!(rows, vec!["1 2", "3 4"]);
        assert_eq!(operators, "+ *");
        Ok(())
    }

    #[test]
    fn empty_sheet_is_an_error() {
        assert!(split_sheet("\n").is_err());
    }
}
