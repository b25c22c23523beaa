//! Input loading from the conventional per-year directory layout
//!
//! Layout: `{root}/{year}/{file}`. The default file of a day is
//! `day{day:02}.txt`; a unit may declare another name. A variant suffix
//! `sample` selects `day{day:02}-sample.txt` (or `polymer-sample.txt`).

use crate::error::InputError;
use crate::instance::PuzzleUnit;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// The lines of one input file, in file order
///
/// Each line has its terminator and any trailing whitespace removed. Empty
/// lines are kept, so blank-line separated sections survive loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSet {
    lines: Vec<String>,
}

impl InputSet {
    /// Split raw text into lines using the same rules as file loading
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| line.trim_end().to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate over lines that are not empty
    pub fn non_empty(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| (i + 1, line.as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for InputSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Deref for InputSet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.lines
    }
}

/// Insert a variant suffix before the extension of a file name
///
/// `variant_file_name("day05.txt", "sample") == "day05-sample.txt"`
pub fn variant_file_name(file_name: &str, variant: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{variant}.{ext}"),
        _ => format!("{file_name}-{variant}"),
    }
}

/// Reads puzzle inputs from disk
///
/// Every call reads the file again; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct InputLoader {
    root: PathBuf,
}

impl InputLoader {
    /// Create a loader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the inputs of one year
    pub fn year_dir(&self, year: u16) -> PathBuf {
        self.root.join(year.to_string())
    }

    /// Path of the input a unit declares, or the named variant of it
    pub fn path_for(&self, unit: &dyn PuzzleUnit, variant: Option<&str>) -> PathBuf {
        let file = unit.input_file();
        let dir = self.year_dir(unit.id().year());
        match variant {
            Some(v) => dir.join(variant_file_name(&file, v)),
            None => dir.join(file.as_ref()),
        }
    }

    /// Load the input a unit declares, or the named variant of it
    pub fn load(&self, unit: &dyn PuzzleUnit, variant: Option<&str>) -> Result<InputSet, InputError> {
        read_lines(&self.path_for(unit, variant))
    }

    /// Load an explicitly named file from a year's directory
    pub fn load_file(&self, year: u16, file_name: &str) -> Result<InputSet, InputError> {
        read_lines(&self.year_dir(year).join(file_name))
    }
}

fn read_lines(path: &Path) -> Result<InputSet, InputError> {
    tracing::debug!(path = %path.display(), "loading input");
    match fs::read_to_string(path) {
        Ok(text) => Ok(InputSet::from_text(&text)),
        Err(e) if e.kind() == IoErrorKind::NotFound => Err(InputError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(InputError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
