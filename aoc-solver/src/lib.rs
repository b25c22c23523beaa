//! Advent of Code Solver Library
//!
//! The harness every puzzle unit plugs into: identifiers, input loading,
//! solver traits and the registry the runner resolves units from.
//!
//! # Overview
//!
//! - [`PuzzleId`] / [`PuzzlePart`]: validated year/day (and part) keys
//! - [`InputLoader`] / [`InputSet`]: reads `{root}/{year}/dayDD.txt` into trimmed lines
//! - [`AocParser`], [`PartSolver`], [`Solver`]: the typed solver traits
//! - [`PuzzleUnit`]: the type-erased unit the runner works with
//! - [`RegistryBuilder`] / [`SolverRegistry`]: the identifier to factory table
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{Answer, AocParser, InputSet, ParseError, PartSolver, PuzzleId, RegistryBuilder, SolveError};
//! use aoc_solver::AocSolver;
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! struct Frequency;
//!
//! impl AocParser for Frequency {
//!     type Parsed<'a> = Vec<i64>;
//!
//!     fn parse(input: &InputSet) -> Result<Self::Parsed<'_>, ParseError> {
//!         input
//!             .iter()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.clone())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Frequency {
//!     fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
//!         Ok(parsed.iter().sum::<i64>().into())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Frequency>(2018, 1)
//!     .unwrap()
//!     .build();
//!
//! let unit = registry.resolve(PuzzleId::new(2018, 1).unwrap()).unwrap();
//! let input = InputSet::from_text("+1\n-2\n+3\n+1\n");
//! assert_eq!(unit.solve(1, &input).unwrap(), Answer::Long(3));
//! ```
//!
//! # Plugin System
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through
//! `inventory`; the binary collects them once at startup with
//! [`RegistryBuilder::register_all_plugins`]:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2018, day = 1, tags = ["easy"])]
//! struct Day1Solver;
//! ```

mod answer;
mod error;
mod id;
mod input;
mod instance;
mod registry;
mod solver;

#[cfg(feature = "test-support")]
pub mod testing;

pub use answer::Answer;
pub use error::{
    ErrorKind, InputError, InvalidPuzzleId, ParseError, RegistrationError, SolveError,
    SolverError,
};
pub use id::{BASE_YEAR, DAYS_PER_YEAR, PuzzleId, PuzzlePart};
pub use input::{InputLoader, InputSet, variant_file_name};
pub use instance::{PuzzleUnit, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverPlugin, SolverRegistry, UnitFactory,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
