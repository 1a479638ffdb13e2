use std::any::type_name;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot parse {input:?} as {what}")]
    Parse { what: &'static str, input: String },

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("unexpected {found:?} at row {row}, column {col}")]
    UnexpectedCell { found: char, row: usize, col: usize },

    #[error("no solution: {0}")]
    NoSolution(String),

    #[error("day {0} is not a puzzle day")]
    UnknownDay(u8),

    #[error("day {day} has no part {part}")]
    NoSuchPart { day: u8, part: u8 },

    #[error("cannot read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn malformed(what: impl Display) -> Self {
        Error::Malformed(what.to_string())
    }

    pub fn no_solution(what: impl Display) -> Self {
        Error::NoSolution(what.to_string())
    }
}

/// Parses a trimmed token, keeping the offending text in the error.
pub fn parse<T: FromStr>(input: &str) -> Result<T> {
    input.trim().parse().map_err(|_| Error::Parse {
        what: type_name::<T>(),
        input: input.to_owned(),
    })
}
