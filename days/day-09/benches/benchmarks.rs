use aoc2025_day_9::{part1, part2};
use divan::black_box;

fn main() {
    divan::main();
}

/// A staircase loop with a few hundred corners.
fn staircase(steps: i64) -> String {
    let mut corners = Vec::new();
    for step in 0..steps {
        corners.push((step * 1000, step * 1000));
        corners.push(((step + 1) * 1000, step * 1000));
    }
    corners.push((steps * 1000, steps * 1000));
    corners.push((0, steps * 1000));

    corners
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[divan::bench]
fn part1(bencher: divan::Bencher) {
    let input = staircase(250);
    bencher.bench(|| part1::process(black_box(&input)).unwrap());
}

#[divan::bench]
fn part2(bencher: divan::Bencher) {
    let input = staircase(250);
    bencher.bench(|| part2::process(black_box(&input)).unwrap());
}
