//! Day 5: Alchemical Reduction

use aoc_solver::{Answer, AocParser, InputSet, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 5, tags = ["2018", "stack"])]
pub struct Solver;

impl AocParser for Solver {
    type Parsed<'a> = &'a [u8];

    fn parse<'a>(input: &'a InputSet) -> Result<Self::Parsed<'a>, ParseError> {
        let (line, polymer) = input
            .non_empty()
            .next()
            .ok_or_else(|| ParseError::MissingData("polymer".into()))?;
        if let Some(bad) = polymer.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(ParseError::InvalidLine {
                line,
                message: format!("polymer units must be letters, found {bad:?}"),
            });
        }
        Ok(polymer.as_bytes())
    }
}

impl PartSolver<1> for Solver {
    fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
        Ok(react(parsed.iter().copied()).len().into())
    }
}

impl PartSolver<2> for Solver {
    fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
        // Scrubbing commutes with reacting; start from the reduced polymer.
        let reduced = react(parsed.iter().copied());
        let shortest = (b'a'..=b'z')
            .map(|unit| {
                react(
                    reduced
                        .iter()
                        .copied()
                        .filter(|u| u.to_ascii_lowercase() != unit),
                )
                .len()
            })
            .min()
            .unwrap_or(reduced.len());
        Ok(shortest.into())
    }
}

/// Fully react a polymer: adjacent units of the same type and opposite
/// polarity annihilate until none are left
fn react(units: impl Iterator<Item = u8>) -> Vec<u8> {
    let mut stack: Vec<u8> = Vec::new();
    for unit in units {
        match stack.last() {
            // ASCII letters differ only in bit 0x20 between cases
            Some(&top) if top ^ unit == 0x20 => {
                stack.pop();
            }
            _ => stack.push(unit),
        }
    }
    stack
}
