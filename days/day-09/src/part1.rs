use itertools::Itertools;
use miette::*;

use crate::tiles::{parse, Rect};

/// Largest rectangle with two red tiles in opposite corners.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse(input)?;

    let largest = points
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| Rect::from_corners(a, b).area())
        .max()
        .unwrap_or(0);

    Ok(largest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";
        assert_eq!("50", process(input)?);
        Ok(())
    }
}
