pub mod homework;
pub mod part1;
pub mod part2;
