//! Puzzle identifiers

use crate::error::InvalidPuzzleId;
use std::fmt;

/// First year Advent of Code ran
pub const BASE_YEAR: u16 = 2015;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Identifies one puzzle: a year and a day within it
///
/// Construction validates the day range, so every `PuzzleId` in circulation
/// names a day that can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    year: u16,
    day: u8,
}

impl PuzzleId {
    /// Create an identifier, rejecting years before 2015 and days outside 1-25
    pub fn new(year: u16, day: u8) -> Result<Self, InvalidPuzzleId> {
        if year < BASE_YEAR || day == 0 || day > DAYS_PER_YEAR {
            return Err(InvalidPuzzleId { year, day });
        }
        Ok(Self { year, day })
    }

    pub fn year(self) -> u16 {
        self.year
    }

    pub fn day(self) -> u8 {
        self.day
    }

    /// Address one part of this puzzle
    pub fn part(self, part: u8) -> PuzzlePart {
        PuzzlePart { id: self, part }
    }

    /// Default input file name for this day, e.g. `day05.txt`
    pub fn default_input_file(self) -> String {
        format!("day{:02}.txt", self.day)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

/// One scored sub-problem of a puzzle
///
/// Ordered by year, then day, then part number; this is the order reports
/// are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzlePart {
    pub id: PuzzleId,
    pub part: u8,
}

impl fmt::Display for PuzzlePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} part {}", self.id, self.part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_days() {
        assert!(PuzzleId::new(2018, 0).is_err());
        assert!(PuzzleId::new(2018, 26).is_err());
        assert!(PuzzleId::new(2014, 1).is_err());
        assert!(PuzzleId::new(2018, 1).is_ok());
        assert!(PuzzleId::new(2018, 25).is_ok());
    }

    #[test]
    fn test_display() {
        let id = PuzzleId::new(2018, 5).unwrap();
        assert_eq!(id.to_string(), "2018/05");
        assert_eq!(id.part(2).to_string(), "2018/05 part 2");
        assert_eq!(id.default_input_file(), "day05.txt");
    }

    #[test]
    fn test_parts_order_by_id_then_part() {
        let d1 = PuzzleId::new(2018, 1).unwrap();
        let d2 = PuzzleId::new(2018, 2).unwrap();
        let y2 = PuzzleId::new(2019, 1).unwrap();

        let mut parts = vec![y2.part(1), d2.part(1), d1.part(2), d1.part(1)];
        parts.sort();
        assert_eq!(parts, vec![d1.part(1), d1.part(2), d2.part(1), y2.part(1)]);
    }
}
