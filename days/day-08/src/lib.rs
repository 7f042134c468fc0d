pub mod connectivity;
pub mod dsu;
pub mod error;
pub mod network;
pub mod parser;
pub mod part1;
pub mod part2;

pub use connectivity::{Adjacency, Connectivity};
pub use dsu::UnionFind;
pub use network::{Link, Network, Point};
