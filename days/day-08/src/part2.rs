use miette::*;

use crate::network::Network;
use crate::parser::parse;

/// Keeps wiring the shortest links until everything is one circuit, then
/// multiplies the X coordinates of the last two junction boxes joined.
///
/// Yields 0 if there is nothing to connect.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let network = Network::new(parse(input)?);

    let product = network
        .connecting_endpoints(|a, b| a.x * b.x)
        .unwrap_or(0);

    Ok(product.to_string())
}
