use miette::*;

use crate::reactor::parse;

/// Counts every path data can take from `you` to `out`.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let reactor = parse(input)?;
    let paths = reactor.count_paths("you", "out")?;
    Ok(paths.to_string())
}
