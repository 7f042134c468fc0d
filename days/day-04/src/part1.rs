use miette::*;

use crate::floor::parse;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let floor = parse(input)?;
    Ok(floor.accessible().len().to_string())
}
