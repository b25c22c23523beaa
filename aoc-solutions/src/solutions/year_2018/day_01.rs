//! Day 1: Chronal Calibration

use anyhow::{anyhow, bail};
use aoc_solver::{Answer, AocParser, InputSet, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 1, tags = ["2018", "frequency"])]
pub struct Solver;

impl AocParser for Solver {
    type Parsed<'a> = Vec<i64>;

    fn parse(input: &InputSet) -> Result<Self::Parsed<'_>, ParseError> {
        input
            .non_empty()
            .map(|(line, text)| {
                parse_change(text).map_err(|e| ParseError::InvalidLine {
                    line,
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

fn parse_change(text: &str) -> anyhow::Result<i64> {
    let sign = match text.as_bytes().first() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => bail!("change must start with '+' or '-', got {text:?}"),
    };
    let digits = &text[1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        bail!("change must be a sign followed by digits, got {text:?}");
    }
    digits
        .parse::<i64>()
        .map(|v| sign * v)
        .map_err(|e| anyhow!("invalid change {text:?}: {e}"))
}

fn apply(frequency: i64, change: i64) -> Result<i64, SolveError> {
    frequency
        .checked_add(change)
        .ok_or_else(|| SolveError::failed(format!("frequency overflows applying {change:+}")))
}

impl PartSolver<1> for Solver {
    fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
        parsed.iter().try_fold(0, |f, &c| apply(f, c)).map(Answer::from)
    }
}

impl PartSolver<2> for Solver {
    fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
        first_repeated_frequency(parsed).map(Answer::from)
    }
}

/// First cumulative frequency reached twice while cycling through `changes`
fn first_repeated_frequency(changes: &[i64]) -> Result<i64, SolveError> {
    if changes.is_empty() {
        return Err(SolveError::failed("no frequency changes to apply"));
    }

    let mut seen = HashSet::from([0i64]);
    let mut first_pass = Vec::with_capacity(changes.len());
    let mut frequency = 0i64;
    for &change in changes {
        frequency = apply(frequency, change)?;
        if !seen.insert(frequency) {
            return Ok(frequency);
        }
        first_pass.push(frequency);
    }

    // Every later pass visits the first-pass values shifted by `drift`, so a
    // repeat exists only if two of them are congruent modulo `drift`.
    let drift = frequency;
    let modulus = i128::from(drift).abs();
    let mut residues = HashSet::with_capacity(first_pass.len());
    if first_pass
        .iter()
        .all(|&f| residues.insert(i128::from(f).rem_euclid(modulus)))
    {
        return Err(SolveError::failed(format!(
            "frequencies drift by {drift} per pass and never repeat"
        )));
    }

    loop {
        for &change in changes {
            frequency = apply(frequency, change)?;
            if !seen.insert(frequency) {
                return Ok(frequency);
            }
        }
    }
}
