use chumsky::prelude::*;
use miette::*;

pub const DIAL_SIZE: i64 = 100;
pub const START_POSITION: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(i64),
    Right(i64),
}

impl Rotation {
    pub fn distance(self) -> i64 {
        match self {
            Rotation::Left(distance) | Rotation::Right(distance) => distance,
        }
    }

    /// Where the dial points once the rotation is done.
    pub fn apply(self, position: i64) -> i64 {
        match self {
            Rotation::Left(distance) => (position - distance).rem_euclid(DIAL_SIZE),
            Rotation::Right(distance) => (position + distance).rem_euclid(DIAL_SIZE),
        }
    }

    /// How many clicks of this rotation leave the dial on 0, counting the
    /// final one.
    pub fn zero_clicks(self, position: i64) -> i64 {
        let distance = self.distance();
        if distance <= 0 {
            return 0;
        }
        if position == 0 {
            return distance / DIAL_SIZE;
        }

        let to_first_zero = match self {
            Rotation::Left(_) => position,
            Rotation::Right(_) => DIAL_SIZE - position,
        };
        if distance < to_first_zero {
            return 0;
        }
        1 + (distance - to_first_zero) / DIAL_SIZE
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Rotation>, extra::Err<Rich<'a, char>>> {
    let distance = text::int(10)
        .try_map(|s: &str, span| s.parse::<i64>().map_err(|e| Rich::custom(span, e)));

    let rotation = one_of("LR")
        .then(distance)
        .map(|(direction, distance)| match direction {
            'L' => Rotation::Left(distance),
            _ => Rotation::Right(distance),
        });

    rotation
        .separated_by(text::newline().repeated().at_least(1))
        .allow_trailing()
        .collect()
}

pub fn parse(input: &str) -> Result<Vec<Rotation>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
