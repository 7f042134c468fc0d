use miette::*;
use rayon::prelude::*;
use std::collections::HashMap;

use crate::machine::{parse, Machine};

/// Fewest presses bringing every counter to exactly its joltage.
///
/// Any solution presses some subset of buttons an odd number of times and
/// everything else an even number. The odd subset must match the parity of
/// the targets; whatever is left is even, so halve it and solve again.
struct JoltageSolver {
    /// Single-press subsets grouped by which counters they leave odd.
    by_parity: HashMap<Vec<bool>, Vec<(u32, Vec<u32>)>>,
    memo: HashMap<Vec<u32>, Option<u64>>,
}

impl JoltageSolver {
    fn new(machine: &Machine) -> Self {
        let counters = machine.joltages.len();
        let mut by_parity: HashMap<Vec<bool>, Vec<(u32, Vec<u32>)>> = HashMap::new();

        for (mask, mut bumps) in machine.single_presses() {
            bumps.truncate(counters);
            let parity = bumps.iter().map(|&b| b % 2 == 1).collect();
            by_parity.entry(parity).or_default().push((mask, bumps));
        }

        Self {
            by_parity,
            memo: HashMap::new(),
        }
    }

    fn fewest_presses(&mut self, target: &[u32]) -> Option<u64> {
        if target.iter().all(|&t| t == 0) {
            return Some(0);
        }
        if let Some(&known) = self.memo.get(target) {
            return known;
        }

        let parity = target.iter().map(|&t| t % 2 == 1).collect::<Vec<_>>();
        let candidates = self.by_parity.get(&parity).cloned().unwrap_or_default();

        let mut best: Option<u64> = None;
        for (mask, bumps) in candidates {
            if bumps.iter().zip(target).any(|(&b, &t)| b > t) {
                continue;
            }
            let rest = target
                .iter()
                .zip(&bumps)
                .map(|(&t, &b)| (t - b) / 2)
                .collect::<Vec<_>>();

            if let Some(halved) = self.fewest_presses(&rest) {
                let presses = u64::from(mask.count_ones()) + 2 * halved;
                best = Some(best.map_or(presses, |b| b.min(presses)));
            }
        }

        self.memo.insert(target.to_vec(), best);
        best
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let machines = parse(input)?;

    let presses = machines
        .par_iter()
        .enumerate()
        .map(|(index, machine)| {
            JoltageSolver::new(machine)
                .fewest_presses(&machine.joltages)
                .ok_or_else(|| miette!("Machine {} can never reach its joltages", index + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let total: u64 = presses.iter().sum();
    Ok(total.to_string())
}
