use miette::*;

use crate::reactor::parse;

/// Counts the `svr` to `out` paths that pass through both `dac` and `fft`.
///
/// With no loops, one of the two always comes first, so each path splits
/// into three independent legs.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let reactor = parse(input)?;

    let legs = |stops: [&'static str; 4]| -> Result<u64> {
        stops
            .windows(2)
            .map(|leg| reactor.count_paths(leg[0], leg[1]))
            .product()
    };

    let fft_first = legs(["svr", "fft", "dac", "out"])?;
    let dac_first = legs(["svr", "dac", "fft", "out"])?;
    tracing::debug!(fft_first, dac_first, "counted both orders");

    Ok((fft_first + dac_first).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out";
        assert_eq!("2", process(input)?);
        Ok(())
    }

    #[test]
    fn paths_missing_a_stop_do_not_count() -> Result<()> {
        assert_eq!("0", process("svr: fft\nfft: out\ndac: out")?);
        Ok(())
    }
}
