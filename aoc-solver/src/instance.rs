//! Type-erased puzzle units

use crate::answer::Answer;
use crate::error::SolverError;
use crate::id::PuzzleId;
use crate::input::InputSet;
use crate::solver::{Solver, SolverExt};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Type-erased interface over any solver
///
/// The registry hands these out; the runner only ever talks to this trait.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::{InputSet, PuzzleUnit};
///
/// fn example(unit: Box<dyn PuzzleUnit>, input: &InputSet) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=unit.parts() {
///         println!("{} part {}: {}", unit.id(), part, unit.solve(part, input)?);
///     }
///     Ok(())
/// }
/// ```
pub trait PuzzleUnit: Send + Sync {
    /// The puzzle this unit solves
    fn id(&self) -> PuzzleId;

    /// Number of parts, numbered `1..=parts()`
    fn parts(&self) -> u8;

    /// File name of the default input inside the year directory
    fn input_file(&self) -> Cow<'static, str>;

    /// Parse `input` and solve one part of it
    fn solve(&self, part: u8, input: &InputSet) -> Result<Answer, SolverError>;
}

/// Puzzle unit backed by a [`Solver`] type
///
/// Holds nothing but its identifier: every call parses the input it is given,
/// so two instances (or two calls) never share state.
pub struct SolverInstance<S> {
    id: PuzzleId,
    _solver: PhantomData<fn() -> S>,
}

impl<S: Solver> SolverInstance<S> {
    pub fn new(id: PuzzleId) -> Self {
        Self {
            id,
            _solver: PhantomData,
        }
    }
}

impl<S: Solver + 'static> PuzzleUnit for SolverInstance<S> {
    fn id(&self) -> PuzzleId {
        self.id
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn input_file(&self) -> Cow<'static, str> {
        match S::INPUT_FILE {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.id.default_input_file()),
        }
    }

    fn solve(&self, part: u8, input: &InputSet) -> Result<Answer, SolverError> {
        let parsed = S::parse(input)?;
        Ok(S::solve_part_checked_range(&parsed, part)?)
    }
}
