use miette::*;
use tracing_subscriber::EnvFilter;

use aoc2025_day_2::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/input.txt").to_string());
    let input = std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not read puzzle input from `{path}`"))?;

    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
