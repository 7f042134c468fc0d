use chumsky::prelude::*;
use miette::*;

use crate::homework::{split_sheet, Op};

fn numbers<'a>() -> impl Parser<'a, &'a str, Vec<u64>, extra::Err<Rich<'a, char>>> {
    text::int(10)
        .try_map(|s: &str, span| s.parse::<u64>().map_err(|e| Rich::custom(span, e)))
        .padded_by(text::inline_whitespace())
        .repeated()
        .at_least(1)
        .collect()
}

fn operators<'a>() -> impl Parser<'a, &'a str, Vec<Op>, extra::Err<Rich<'a, char>>> {
    choice((just('+').to(Op::Add), just('*').to(Op::Mul)))
        .padded_by(text::inline_whitespace())
        .repeated()
        .at_least(1)
        .collect()
}

/// Reads the worksheet as columns of whitespace-separated numbers, each
/// column solved with the operator under it.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (rows, operator_row) = split_sheet(input)?;

    let rows = rows
        .into_iter()
        .map(|row| {
            numbers()
                .parse(row)
                .into_result()
                .map_err(|e| miette!("Parse failed: {:?}", e))
        })
        .collect::<Result<Vec<_>>>()?;
    let ops = operators()
        .parse(operator_row)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    if let Some(row) = rows.iter().find(|row| row.len() != ops.len()) {
        return Err(miette!(
            "Row has {} numbers but there are {} operators",
            row.len(),
            ops.len()
        ));
    }

    let total: u64 = ops
        .iter()
        .enumerate()
        .map(|(column, op)| op.apply(rows.iter().map(|row| row[column])))
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "123 328  51 64 
 45 64  387 23 
  6 98  215 314
*   +   *   +  ";
        assert_eq!("4277556", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case::ragged_rows("1 2\n3\n+ +")]
    #[case::number_too_large("1 99999999999999999999\n3 4\n+ *")]
    fn rejects_bad_sheets(#[case] input: &str) {
        assert!(process(input).is_err());
    }
}
