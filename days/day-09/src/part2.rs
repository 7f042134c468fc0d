use miette::*;
use rayon::prelude::*;

use crate::tiles::{loop_edges, parse, Rect};

/// Largest red-cornered rectangle made only of red and green tiles.
///
/// The loop of red tiles encloses the green area; a rectangle stays inside
/// it as long as no edge of the loop cuts through the rectangle's interior.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse(input)?;
    let edges = loop_edges(&points).collect::<Vec<_>>();

    let largest = (0..points.len())
        .into_par_iter()
        .flat_map_iter(|i| (i + 1..points.len()).map(move |j| (i, j)))
        .map(|(i, j)| Rect::from_corners(points[i], points[j]))
        .filter(|rect| !edges.iter().any(|edge| rect.overlaps_interior(edge)))
        .map(|rect| rect.area())
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
        assert_eq!("24", process(input)?);
        Ok(())
    }
}
