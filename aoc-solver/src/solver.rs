//! Core solver traits
//!
//! A puzzle is implemented in two steps: [`AocParser`] turns the input lines
//! into a parsed form once, then each part reads that parsed form through
//! [`PartSolver<N>`] (or a hand-written [`Solver::solve_part`]). Parts only get
//! shared access, so one part cannot leak state into another.

use crate::answer::Answer;
use crate::error::{ParseError, SolveError};
use crate::input::InputSet;

/// Trait for parsing puzzle input lines
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, InputSet, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type Parsed<'a> = Vec<i64>;
///
///     fn parse(input: &InputSet) -> Result<Self::Parsed<'_>, ParseError> {
///         input
///             .non_empty()
///             .map(|(line, l)| {
///                 l.parse().map_err(|_| ParseError::InvalidLine {
///                     line,
///                     message: format!("not an integer: {l}"),
///                 })
///             })
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// Parsed input.
    ///
    /// Owned data is simplest; `&'a str` slices borrowed from the input lines
    /// work too when no transformation is needed.
    type Parsed<'a>;

    /// Parse the input lines
    fn parse<'a>(input: &'a InputSet) -> Result<Self::Parsed<'a>, ParseError>;
}

/// One part of a puzzle; `N` is the part number
///
/// ```
/// use aoc_solver::{Answer, AocParser, InputSet, ParseError, PartSolver, SolveError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type Parsed<'a> = Vec<i64>;
///
///     fn parse(input: &InputSet) -> Result<Self::Parsed<'_>, ParseError> {
///         input
///             .iter()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
///         Ok(parsed.iter().sum::<i64>().into())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError>;
}

/// Core trait every puzzle unit implements
///
/// Usually derived with `#[derive(AocSolver)]`, which dispatches `solve_part`
/// to the matching [`PartSolver<N>`] impl.
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, AocParser, InputSet, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type Parsed<'a> = Vec<i64>;
///
///     fn parse(input: &InputSet) -> Result<Self::Parsed<'_>, ParseError> {
///         input
///             .iter()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(parsed: &Self::Parsed<'_>, part: u8) -> Result<Answer, SolveError> {
///         match part {
///             1 => Ok(parsed.iter().sum::<i64>().into()),
///             2 => Ok(parsed.iter().product::<i64>().into()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts, numbered `1..=PARTS`
    const PARTS: u8;

    /// Input file read by default; `None` means `day{day:02}.txt`
    const INPUT_FILE: Option<&'static str> = None;

    /// Solve a specific part
    ///
    /// # Returns
    /// * `Ok(Answer)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - The input has no valid answer
    fn solve_part(parsed: &Self::Parsed<'_>, part: u8) -> Result<Answer, SolveError>;
}

pub trait SolverExt: Solver {
    /// `solve_part`, rejecting part numbers outside `1..=PARTS` first
    fn solve_part_checked_range(parsed: &Self::Parsed<'_>, part: u8) -> Result<Answer, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(parsed, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
