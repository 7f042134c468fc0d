use aoc2025_day_8::connectivity::{Adjacency, Connectivity};
use aoc2025_day_8::{part1, part2, Network, Point, UnionFind};
use divan::{black_box, Bencher};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    divan::main();
}

/// A reproducible cloud of junction boxes, about the size of a real input.
fn cloud(count: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(8);
    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(0..100_000),
                rng.random_range(0..100_000),
                rng.random_range(0..100_000),
            )
        })
        .collect()
}

fn cloud_input(count: usize) -> String {
    cloud(count)
        .iter()
        .map(|p| format!("{},{},{}", p.x, p.y, p.z))
        .collect::<Vec<_>>()
        .join("\n")
}

#[divan::bench]
fn part1(bencher: Bencher) {
    let input = cloud_input(1000);
    bencher.bench(|| part1::process(black_box(&input)).unwrap());
}

#[divan::bench]
fn part2(bencher: Bencher) {
    let input = cloud_input(1000);
    bencher.bench(|| part2::process(black_box(&input)).unwrap());
}

#[divan::bench]
fn distance_table(bencher: Bencher) {
    let points = cloud(1000);
    bencher.bench(|| Network::new(black_box(points.clone())));
}

#[divan::bench(types = [UnionFind, Adjacency])]
fn first_full_connection<C: Connectivity>(bencher: Bencher) {
    let network = Network::new(cloud(300));
    bencher.bench(|| black_box(&network).first_full_connection_with::<C>());
}
