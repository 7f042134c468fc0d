use chumsky::prelude::*;
use miette::*;

/// A bank of batteries, one joltage digit per battery.
pub type Bank = Vec<u8>;

/// Folds digits into the number they spell.
pub fn to_number(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0, |acc, &digit| acc * 10 + u64::from(digit))
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Bank>, extra::Err<Rich<'a, char>>> {
    let digit = any()
        .filter(|c: &char| c.is_ascii_digit())
        .map(|c: char| c as u8 - b'0');

    digit
        .repeated()
        .at_least(1)
        .collect::<Bank>()
        .separated_by(text::newline().repeated().at_least(1))
        .allow_trailing()
        .collect()
}

pub fn parse(input: &str) -> Result<Vec<Bank>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digit_rows() -> Result<()> {
        assert_eq!(parse("12\n\n903\n")?, vec![vec![1, 2], vec![9, 0, 3]]);
        Ok(())
    }

    #[test]
    fn folds_digits() {
        assert_eq!(to_number(&[4, 0, 7]), 407);
        assert_eq!(to_number(&[]), 0);
    }
}
