use chumsky::prelude::*;
use miette::*;

/// One machine from the manual: `[.##.] (3) (1,3) (2) {3,5,4,7}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Indicator light diagram, `true` for lights that must end up on.
    pub lights: Vec<bool>,
    /// Indices each button toggles (or bumps, in joltage mode).
    pub buttons: Vec<Vec<usize>>,
    pub joltages: Vec<u32>,
}

impl Machine {
    /// Every subset of buttons pressed once each, as a bit mask over
    /// `buttons` paired with how much each counter goes up.
    pub fn single_presses(&self) -> Vec<(u32, Vec<u32>)> {
        (0..1u32 << self.buttons.len())
            .map(|mask| {
                let mut bumps = vec![0; self.joltages.len().max(self.lights.len())];
                for (index, button) in self.buttons.iter().enumerate() {
                    if mask & (1 << index) != 0 {
                        for &counter in button {
                            bumps[counter] += 1;
                        }
                    }
                }
                (mask, bumps)
            })
            .collect()
    }

    fn validate(self) -> Result<Self> {
        let counters = self.lights.len().max(self.joltages.len());
        if self.buttons.len() >= 32 {
            return Err(miette!(
                "Machine has {} buttons, at most 31 are supported",
                self.buttons.len()
            ));
        }
        if let Some(&index) = self.buttons.iter().flatten().find(|&&index| index >= counters) {
            return Err(miette!(
                "Button wired to counter {index}, but the machine only has {counters}"
            ));
        }
        Ok(self)
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Machine>, extra::Err<Rich<'a, char>>> {
    let number = text::int(10)
        .try_map(|s: &str, span| s.parse::<u32>().map_err(|e| Rich::custom(span, e)));
    let list = number.separated_by(just(',')).collect::<Vec<_>>();

    let lights = one_of(".#")
        .map(|c| c == '#')
        .repeated()
        .collect::<Vec<_>>()
        .delimited_by(just('['), just(']'));

    let button = list
        .clone()
        .delimited_by(just('('), just(')'))
        .map(|indices| indices.into_iter().map(|i| i as usize).collect::<Vec<_>>());

    let joltages = list.delimited_by(just('{'), just('}'));

    let machine = lights
        .then_ignore(text::inline_whitespace())
        .then(
            button
                .then_ignore(text::inline_whitespace())
                .repeated()
                .collect::<Vec<_>>(),
        )
        .then(joltages)
        .map(|((lights, buttons), joltages)| Machine {
            lights,
            buttons,
            joltages,
        });

    machine
        .separated_by(text::newline().repeated().at_least(1))
        .allow_trailing()
        .collect()
}

pub fn parse(input: &str) -> Result<Vec<Machine>> {
    let machines = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    machines.into_iter().map(Machine::validate).collect()
}
