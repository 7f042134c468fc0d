use miette::*;

use crate::machine::{parse, Machine};

/// Fewest presses that leave exactly the diagram's lights on.
///
/// Pressing a button twice undoes it, so only subsets need checking.
fn fewest_presses(machine: &Machine) -> Option<u32> {
    machine
        .single_presses()
        .into_iter()
        .filter(|(_, bumps)| {
            machine
                .lights
                .iter()
                .zip(bumps)
                .all(|(&on, &count)| on == (count % 2 == 1))
        })
        .map(|(mask, _)| mask.count_ones())
        .min()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let machines = parse(input)?;

    let total = machines
        .iter()
        .enumerate()
        .map(|(index, machine)| {
            fewest_presses(machine)
                .ok_or_else(|| miette!("Machine {} can never match its light diagram", index + 1))
        })
        .sum::<Result<u32>>()?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}", 2)]
    #[case("[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}", 3)]
    #[case("[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}", 2)]
    fn per_machine(#[case] input: &str, #[case] expected: u32) -> Result<()> {
        let machine = parse(input)?.remove(0);
        assert_eq!(fewest_presses(&machine), Some(expected));
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}";
        assert_eq!("7", process(input)?);
        Ok(())
    }

    #[test]
    fn unreachable_pattern_is_an_error() {
        assert!(process("[#.] (1) {1,1}").is_err());
    }
}
