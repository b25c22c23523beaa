//! Answer values produced by puzzle parts

use std::fmt;

/// The value a part produces
///
/// Most puzzles answer with a number; some ask for a string (a claim id, a
/// set of common letters) and a few for a small coordinate-like tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    Int(i32),
    Long(i64),
    Text(String),
    Tuple(Vec<Answer>),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(v) => write!(f, "{v}"),
            Answer::Long(v) => write!(f, "{v}"),
            Answer::Text(s) => f.write_str(s),
            Answer::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<i32> for Answer {
    fn from(v: i32) -> Self {
        Answer::Int(v)
    }
}

impl From<u32> for Answer {
    fn from(v: u32) -> Self {
        Answer::Long(i64::from(v))
    }
}

impl From<i64> for Answer {
    fn from(v: i64) -> Self {
        Answer::Long(v)
    }
}

impl From<usize> for Answer {
    fn from(v: usize) -> Self {
        // Counts never get near i64::MAX in practice; saturate rather than wrap.
        Answer::Long(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

impl<A: Into<Answer>, B: Into<Answer>> From<(A, B)> for Answer {
    fn from((a, b): (A, B)) -> Self {
        Answer::Tuple(vec![a.into(), b.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Answer::Int(-3).to_string(), "-3");
        assert_eq!(Answer::Long(10_000_000_000).to_string(), "10000000000");
        assert_eq!(Answer::from("fgij").to_string(), "fgij");
    }

    #[test]
    fn test_display_tuple() {
        let answer = Answer::from((243, 16));
        assert_eq!(answer.to_string(), "(243, 16)");

        let nested = Answer::Tuple(vec![Answer::Int(1), Answer::from(("a", 2))]);
        assert_eq!(nested.to_string(), "(1, (a, 2))");
    }

    #[test]
    fn test_usize_becomes_long() {
        assert_eq!(Answer::from(12usize), Answer::Long(12));
    }
}
