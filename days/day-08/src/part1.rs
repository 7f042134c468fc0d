use miette::*;

use crate::network::Network;
use crate::parser::parse;

/// Wires up as many of the shortest links as there are junction boxes and
/// multiplies the sizes of the three largest circuits.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse(input)?;
    let edge_count = points.len();
    let network = Network::new(points);

    Ok(network.top_three_product(edge_count).to_string())
}
