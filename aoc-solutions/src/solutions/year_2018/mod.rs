//! Advent of Code 2018

pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_05;

#[cfg(test)]
pub(crate) fn fixture() -> aoc_solver::testing::Fixture {
    aoc_solver::testing::Fixture::for_manifest(env!("CARGO_MANIFEST_DIR"), 2018)
}
