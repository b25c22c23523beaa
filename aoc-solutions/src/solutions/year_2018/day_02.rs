//! Day 2: Inventory Management System

use aoc_solver::{Answer, AocParser, InputSet, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 2, tags = ["2018", "strings"])]
pub struct Solver;

impl AocParser for Solver {
    type Parsed<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a InputSet) -> Result<Self::Parsed<'a>, ParseError> {
        input
            .non_empty()
            .map(|(line, id)| {
                if id.bytes().all(|b| b.is_ascii_lowercase()) {
                    Ok(id)
                } else {
                    Err(ParseError::InvalidLine {
                        line,
                        message: format!("box id must be lowercase letters, got {id:?}"),
                    })
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
        let (twos, threes) = parsed.iter().fold((0usize, 0usize), |(twos, threes), id| {
            let counts = letter_counts(id);
            (
                twos + usize::from(counts.contains(&2)),
                threes + usize::from(counts.contains(&3)),
            )
        });
        Ok((twos * threes).into())
    }
}

impl PartSolver<2> for Solver {
    fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
        parsed
            .iter()
            .enumerate()
            .find_map(|(i, a)| parsed[i + 1..].iter().find_map(|b| common_if_one_apart(a, b)))
            .map(Answer::from)
            .ok_or_else(|| SolveError::failed("no two box ids differ by exactly one letter"))
    }
}

fn letter_counts(id: &str) -> [u8; 26] {
    let mut counts = [0u8; 26];
    for b in id.bytes() {
        let slot = &mut counts[usize::from(b - b'a')];
        *slot = slot.saturating_add(1);
    }
    counts
}

/// Letters `a` and `b` share, if they differ in exactly one position
fn common_if_one_apart(a: &str, b: &str) -> Option<String> {
    if a.len() != b.len() {
        return None;
    }
    let mut diffs = a.bytes().zip(b.bytes()).filter(|(x, y)| x != y);
    match (diffs.next(), diffs.next()) {
        (Some(_), None) => Some(
            a.chars()
                .zip(b.chars())
                .filter(|(x, y)| x == y)
                .map(|(x, _)| x)
                .collect(),
        ),
        _ => None,
    }
}
