//! Which puzzles a run targets

use aoc_solver::{InvalidPuzzleId, PuzzleId, SolverRegistry};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Set of targets requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunRequest {
    /// Every registered puzzle
    AllKnown,
    /// Every registered day of one year
    AllOfYear(u16),
    /// Listed days of one year, all of their parts
    SpecificDays { year: u16, days: BTreeSet<u8> },
    /// Listed (day, part) pairs of one year
    SpecificParts { year: u16, parts: BTreeSet<(u8, u8)> },
}

/// One target: a puzzle and the parts to run, in ascending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub id: PuzzleId,
    pub parts: Vec<u8>,
}

impl RunRequest {
    /// Build a request from the year/day/part selectors
    pub fn from_selection(year: Option<u16>, days: &[u8], part: Option<u8>) -> Self {
        match (year, days.is_empty(), part) {
            (None, _, _) => RunRequest::AllKnown,
            (Some(year), true, _) => RunRequest::AllOfYear(year),
            (Some(year), false, None) => RunRequest::SpecificDays {
                year,
                days: days.iter().copied().collect(),
            },
            (Some(year), false, Some(part)) => RunRequest::SpecificParts {
                year,
                parts: days.iter().map(|&day| (day, part)).collect(),
            },
        }
    }

    /// The only day named, when exactly one is
    pub fn single_day(&self) -> Result<Option<PuzzleId>, InvalidPuzzleId> {
        let (year, mut days) = match self {
            RunRequest::AllKnown | RunRequest::AllOfYear(_) => return Ok(None),
            RunRequest::SpecificDays { year, days } => (*year, days.iter().copied().collect_vec()),
            RunRequest::SpecificParts { year, parts } => {
                (*year, parts.iter().map(|&(day, _)| day).dedup().collect_vec())
            }
        };
        match (days.pop(), days.is_empty()) {
            (Some(day), true) => PuzzleId::new(year, day).map(Some),
            _ => Ok(None),
        }
    }

    /// Expand into work items ordered by identifier
    ///
    /// Explicitly named days are kept even when nothing is registered for
    /// them, so the report can list them as failures.
    pub fn work_items(&self, registry: &SolverRegistry) -> Result<Vec<WorkItem>, InvalidPuzzleId> {
        let registered = |year: Option<u16>| {
            registry
                .iter_info()
                .filter(move |info| year.is_none_or(|y| info.id.year() == y))
                .map(|info| WorkItem {
                    id: info.id,
                    parts: (1..=info.parts).collect(),
                })
                .collect_vec()
        };

        match self {
            RunRequest::AllKnown => Ok(registered(None)),
            RunRequest::AllOfYear(year) => Ok(registered(Some(*year))),
            RunRequest::SpecificDays { year, days } => days
                .iter()
                .map(|&day| {
                    let id = PuzzleId::new(*year, day)?;
                    // Unknown days still get one part to report against
                    let parts = registry.info(id).map_or(1, |info| info.parts);
                    Ok(WorkItem {
                        id,
                        parts: (1..=parts).collect(),
                    })
                })
                .collect(),
            RunRequest::SpecificParts { year, parts } => parts
                .iter()
                .chunk_by(|&&(day, _)| day)
                .into_iter()
                .map(|(day, group)| {
                    Ok(WorkItem {
                        id: PuzzleId::new(*year, day)?,
                        parts: group.map(|&(_, part)| part).collect(),
                    })
                })
                .collect(),
        }
    }
}
