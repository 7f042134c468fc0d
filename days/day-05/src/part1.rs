use miette::*;

use crate::inventory::parse;

/// Counts the available ingredients that fall in a fresh range.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let inventory = parse(input)?;

    let fresh = inventory
        .available
        .iter()
        .filter(|&&id| inventory.is_fresh(id))
        .count();

    Ok(fresh.to_string())
}
