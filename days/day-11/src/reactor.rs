use chumsky::prelude::*;
use miette::*;
use std::collections::HashMap;

/// Device wiring: each device and the devices its outputs feed.
#[derive(Debug, Clone, Default)]
pub struct Reactor<'a> {
    outputs: HashMap<&'a str, Vec<&'a str>>,
}

#[derive(Debug, Clone, Copy)]
enum Visit {
    InProgress,
    Done(u64),
}

impl<'a> Reactor<'a> {
    pub fn outputs(&self, device: &str) -> &[&'a str] {
        self.outputs.get(device).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct paths from `from` to `to`.
    ///
    /// Data only flows forward, so a cycle reachable from `from` is an error.
    pub fn count_paths(&self, from: &'a str, to: &str) -> Result<u64> {
        let mut visits = HashMap::new();
        self.walk(from, to, &mut visits)
    }

    fn walk(&self, device: &'a str, to: &str, visits: &mut HashMap<&'a str, Visit>) -> Result<u64> {
        if device == to {
            return Ok(1);
        }
        match visits.get(device) {
            Some(Visit::Done(paths)) => return Ok(*paths),
            Some(Visit::InProgress) => {
                return Err(miette!("Wiring loops back through `{device}`"));
            }
            None => {}
        }

        visits.insert(device, Visit::InProgress);
        let mut paths = 0;
        for &next in self.outputs(device) {
            paths += self.walk(next, to, visits)?;
        }
        visits.insert(device, Visit::Done(paths));

        Ok(paths)
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Reactor<'a>, extra::Err<Rich<'a, char>>> {
    let device = text::ident();

    let outputs = device
        .clone()
        .separated_by(text::inline_whitespace().at_least(1))
        .allow_trailing()
        .collect::<Vec<_>>();

    let line = device
        .then_ignore(just(':').padded_by(text::inline_whitespace()))
        .then(outputs);

    line.separated_by(text::newline().repeated().at_least(1))
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|lines| Reactor {
            outputs: lines.into_iter().collect(),
        })
}

pub fn parse(input: &str) -> Result<Reactor<'_>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
