use chumsky::prelude::*;
use glam::I64Vec2;
use miette::*;

pub type Point = I64Vec2;

/// Axis-aligned box spanned by two opposite corner tiles, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Tiles covered, counting both edges.
    pub fn area(&self) -> i64 {
        let size = self.max - self.min + Point::ONE;
        size.x * size.y
    }

    /// Whether `other` reaches strictly inside this rectangle.
    pub fn overlaps_interior(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Edges of the closed loop through `points`, last point back to the first.
pub fn loop_edges(points: &[Point]) -> impl Iterator<Item = Rect> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&a, &b)| Rect::from_corners(a, b))
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = text::int(10)
        .try_map(|s: &str, span| s.parse::<i64>().map_err(|e| Rich::custom(span, e)));

    coord
        .clone()
        .then_ignore(just(','))
        .then(coord)
        .map(|(x, y)| Point::new(x, y))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub fn parse(input: &str) -> Result<Vec<Point>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
