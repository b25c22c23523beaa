//! Error types for the solver library

use crate::id::PuzzleId;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A year/day pair that cannot name a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid puzzle {year}/{day}: year must be 2015 or later and day within 1-25")]
pub struct InvalidPuzzleId {
    pub year: u16,
    pub day: u8,
}

/// Error type for parsing input lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A specific line could not be parsed (1-based line number)
    #[error("Line {line}: {message}")]
    InvalidLine { line: usize, message: String },
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Convenience for failures that are only a message
    pub fn failed(message: impl Into<String>) -> Self {
        let message: String = message.into();
        SolveError::SolveFailed(message.into())
    }
}

/// Error type for loading input files
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file does not exist
    #[error("Input not found: {}", .path.display())]
    NotFound { path: PathBuf },
    /// The input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for everything that can go wrong running one part
#[derive(Debug, Error)]
pub enum SolverError {
    /// No unit is registered for the identifier
    #[error("No solver registered for {0}")]
    NotRegistered(PuzzleId),
    /// The requested year/day cannot name a puzzle
    #[error(transparent)]
    InvalidPuzzleId(#[from] InvalidPuzzleId),
    /// Input could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("{0}")]
    Solve(#[from] SolveError),
    /// The part panicked or its worker thread could not run it
    #[error("Solver aborted: {0}")]
    Aborted(String),
    /// The part ran longer than the configured guard
    #[error("Part {part} exceeded the {} time limit", humanize(.limit))]
    Timeout { part: u8, limit: Duration },
}

impl SolverError {
    /// Classify this error for reporting
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolverError::NotRegistered(_)
            | SolverError::InvalidPuzzleId(_)
            | SolverError::Solve(SolveError::PartOutOfRange(_) | SolveError::PartNotImplemented(_)) => {
                ErrorKind::NotRegistered
            }
            SolverError::Input(InputError::NotFound { .. }) => ErrorKind::NotFound,
            SolverError::Input(InputError::Io { .. })
            | SolverError::Parse(_)
            | SolverError::Solve(_)
            | SolverError::Aborted(_) => ErrorKind::Puzzle,
            SolverError::Timeout { .. } => ErrorKind::Timeout,
        }
    }
}

fn humanize(limit: &Duration) -> String {
    format!("{:.3}s", limit.as_secs_f64())
}

/// Report-level classification of a failed part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    NotRegistered,
    Puzzle,
    Timeout,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::NotRegistered => "not registered",
            ErrorKind::Puzzle => "puzzle error",
            ErrorKind::Timeout => "timeout",
        })
    }
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for {0}")]
    Duplicate(PuzzleId),
    /// The year/day pair is not a valid puzzle
    #[error(transparent)]
    InvalidPuzzleId(#[from] InvalidPuzzleId),
    /// A unit must expose at least part 1
    #[error("Solver for {0} declares no parts")]
    NoParts(PuzzleId),
    /// The factory builds units whose part count differs from the registration
    #[error("Solver for {id} registered with {declared} parts but its unit has {built}")]
    PartsMismatch { id: PuzzleId, declared: u8, built: u8 },
}
