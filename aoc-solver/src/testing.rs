//! Fixture loading for solver tests
//!
//! Fixtures go through [`InputLoader`], so a test reads its input exactly the
//! way the runner does.

use crate::answer::Answer;
use crate::error::{InputError, SolverError};
use crate::id::PuzzleId;
use crate::input::{InputLoader, InputSet};
use crate::instance::{PuzzleUnit, SolverInstance};
use crate::solver::Solver;
use std::path::{Path, PathBuf};

/// Reads fixture files of one year
///
/// ```ignore
/// let fixture = Fixture::for_manifest(env!("CARGO_MANIFEST_DIR"), 2018);
/// let input = fixture.setup_from_file("day05-sample.txt")?;
/// ```
#[derive(Debug, Clone)]
pub struct Fixture {
    loader: InputLoader,
    year: u16,
}

impl Fixture {
    /// Fixtures under `{root}/{year}`
    pub fn new(root: impl Into<PathBuf>, year: u16) -> Self {
        Self {
            loader: InputLoader::new(root),
            year,
        }
    }

    /// Fixtures under `{manifest_dir}/inputs/{year}`
    pub fn for_manifest(manifest_dir: impl AsRef<Path>, year: u16) -> Self {
        Self::new(manifest_dir.as_ref().join("inputs"), year)
    }

    /// Load a fixture file by name
    pub fn setup_from_file(&self, file_name: &str) -> Result<InputSet, InputError> {
        self.loader.load_file(self.year, file_name)
    }

    /// Load a fixture and solve one part of it with `S`
    pub fn solve<S: Solver + 'static>(
        &self,
        day: u8,
        file_name: &str,
        part: u8,
    ) -> Result<Answer, SolverError> {
        let id = PuzzleId::new(self.year, day)?;
        let input = self.setup_from_file(file_name)?;
        SolverInstance::<S>::new(id).solve(part, &input)
    }
}
