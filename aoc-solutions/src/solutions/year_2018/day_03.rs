//! Day 3: No Matter How You Slice It

use anyhow::{Context, anyhow, bail};
use aoc_solver::{Answer, AocParser, InputSet, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 3, tags = ["2018", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    id: u32,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

impl Claim {
    fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.top..self.top + self.height)
            .flat_map(move |y| (self.left..self.left + self.width).map(move |x| (x, y)))
    }
}

/// Largest sheet the coverage grid is allocated for
const MAX_FABRIC_CELLS: usize = 1 << 26;

/// Claims and how many of them cover each square inch
#[derive(Debug)]
pub struct Fabric {
    claims: Vec<Claim>,
    width: usize,
    coverage: Vec<u16>,
}

impl Fabric {
    /// Claim extents must already fit in `usize` (checked by `parse_claim`)
    fn new(claims: Vec<Claim>) -> Result<Self, ParseError> {
        let width = claims.iter().map(|c| c.left + c.width).max().unwrap_or(0);
        let height = claims.iter().map(|c| c.top + c.height).max().unwrap_or(0);
        let cells = width
            .checked_mul(height)
            .filter(|&n| n <= MAX_FABRIC_CELLS)
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "claims span {width}x{height}, more than {MAX_FABRIC_CELLS} square inches"
                ))
            })?;
        let mut coverage = vec![0u16; cells];
        for claim in &claims {
            for (x, y) in claim.cells() {
                coverage[y * width + x] = coverage[y * width + x].saturating_add(1);
            }
        }
        Ok(Self {
            claims,
            width,
            coverage,
        })
    }

    fn covered_by(&self, x: usize, y: usize) -> u16 {
        self.coverage[y * self.width + x]
    }
}

impl AocParser for Solver {
    type Parsed<'a> = Fabric;

    fn parse(input: &InputSet) -> Result<Self::Parsed<'_>, ParseError> {
        let claims = input
            .non_empty()
            .map(|(line, text)| {
                parse_claim(text).map_err(|e| ParseError::InvalidLine {
                    line,
                    message: format!("{e:#}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if claims.is_empty() {
            return Err(ParseError::MissingData("no claims in input".into()));
        }
        Fabric::new(claims)
    }
}

/// `#123 @ 3,2: 5x4`
fn parse_claim(text: &str) -> anyhow::Result<Claim> {
    let rest = text
        .strip_prefix('#')
        .ok_or_else(|| anyhow!("claim must start with '#': {text:?}"))?;
    let (id, rest) = rest
        .split_once(" @ ")
        .ok_or_else(|| anyhow!("missing ' @ ' in {text:?}"))?;
    let (origin, size) = rest
        .split_once(": ")
        .ok_or_else(|| anyhow!("missing ': ' in {text:?}"))?;
    let (left, top) = origin
        .split_once(',')
        .ok_or_else(|| anyhow!("origin must be 'left,top': {origin:?}"))?;
    let (width, height) = size
        .split_once('x')
        .ok_or_else(|| anyhow!("size must be 'WxH': {size:?}"))?;

    let claim = Claim {
        id: id.parse().context("claim id")?,
        left: left.parse().context("left edge")?,
        top: top.parse().context("top edge")?,
        width: width.parse().context("width")?,
        height: height.parse().context("height")?,
    };
    if claim.left.checked_add(claim.width).is_none() || claim.top.checked_add(claim.height).is_none() {
        bail!("claim extends past the addressable sheet: {text:?}");
    }
    Ok(claim)
}

impl PartSolver<1> for Solver {
    fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
        let overlapping = parsed.coverage.iter().filter(|&&n| n > 1).count();
        Ok(overlapping.into())
    }
}

impl PartSolver<2> for Solver {
    fn solve(parsed: &Self::Parsed<'_>) -> Result<Answer, SolveError> {
        parsed
            .claims
            .iter()
            .find(|claim| claim.cells().all(|(x, y)| parsed.covered_by(x, y) == 1))
            .map(|claim| Answer::Text(claim.id.to_string()))
            .ok_or_else(|| SolveError::failed("every claim overlaps another"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::year_2018::fixture;

    #[test]
    fn test_part1_overlap_area() {
        let answer = fixture().solve::<Solver>(3, "day03-sample.txt", 1).unwrap();
        assert_eq!(answer, Answer::Long(4));
    }

    #[test]
    fn test_part2_intact_claim() {
        let answer = fixture().solve::<Solver>(3, "day03-sample.txt", 2).unwrap();
        assert_eq!(answer, Answer::from("3"));
    }

    #[test]
    fn test_parse_claim() {
        assert_eq!(
            parse_claim("#123 @ 3,2: 5x4").unwrap(),
            Claim {
                id: 123,
                left: 3,
                top: 2,
                width: 5,
                height: 4
            }
        );
        assert!(parse_claim("#1 @ 3,2 5x4").is_err());
        assert!(parse_claim("#x @ 3,2: 5x4").is_err());
    }

    #[test]
    fn test_empty_input_is_missing_data() {
        let err = <Solver as AocParser>::parse(&InputSet::from_text("\n\n")).unwrap_err();
        assert!(matches!(err, ParseError::MissingData(_)));
    }

    #[test]
    fn test_oversized_claims_are_parse_errors() {
        let max = usize::MAX;
        assert!(parse_claim(&format!("#1 @ {max},0: 1x1")).is_err());
        assert!(parse_claim(&format!("#1 @ 0,1: 1x{max}")).is_err());

        for text in [
            format!("#1 @ 0,0: {}x{}", 1usize << 40, 1usize << 40),
            "#1 @ 0,0: 100000x100000".to_string(),
        ] {
            let err = <Solver as AocParser>::parse(&InputSet::from_text(&text)).unwrap_err();
            assert!(matches!(err, ParseError::InvalidFormat(_)), "{err}");
        }
    }

    #[test]
    fn test_all_overlapping_fails_part2() {
        let input = InputSet::from_text("#1 @ 0,0: 2x2\n#2 @ 1,1: 2x2\n");
        let parsed = <Solver as AocParser>::parse(&input).unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&parsed).is_err());
        assert_eq!(<Solver as PartSolver<1>>::solve(&parsed).unwrap(), Answer::Long(1));
    }
}
