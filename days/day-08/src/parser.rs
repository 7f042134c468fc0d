use chumsky::prelude::*;

use crate::error::ParseError;
use crate::network::Point;

/// Largest coordinate magnitude accepted.
///
/// Keeps the squared distance between any two boxes, at most
/// `3 * (2 * MAX_COORDINATE)^2`, inside an `i64`.
pub const MAX_COORDINATE: i64 = 500_000_000;

fn coordinate<'a>() -> impl Parser<'a, &'a str, i64, extra::Err<Rich<'a, char>>> + Clone {
    just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|s: &str, span| {
            let value = s.parse::<i64>().map_err(|e| Rich::custom(span, e))?;
            if value.abs() > MAX_COORDINATE {
                return Err(Rich::custom(
                    span,
                    format!("coordinate {value} is outside ±{MAX_COORDINATE}"),
                ));
            }
            Ok(value)
        })
        .labelled("coordinate")
}

/// One junction box per line: `x,y,z`.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coordinate = coordinate();

    let point = coordinate
        .clone()
        .then_ignore(just(','))
        .then(coordinate.clone())
        .then_ignore(just(','))
        .then(coordinate)
        .map(|((x, y), z)| Point::new(x, y, z));

    point
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Reads the junction box positions, in input order.
///
/// Only the first parse error is reported.
pub fn parse(input: &str) -> Result<Vec<Point>, ParseError> {
    parser().parse(input).into_result().map_err(|errors| {
        match errors.into_iter().next() {
            Some(error) => {
                let span = *error.span();
                ParseError::new(input, span.start, span.end, error.to_string())
            }
            None => ParseError::new(input, 0, 0, "unknown parse failure"),
        }
    })
}
