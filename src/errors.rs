use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum AlignError {
    /// Banded alignment was requested, but the sequence lengths differ by more than the band allows
    BandingInfeasible { len1: usize, len2: usize, max_indels: usize },

    /// The back-pointers did not lead back to the origin cell
    InvalidTraceback { row: usize, col: usize },

    /// Not enough sequences were given to form a pair
    TooFewSequences(usize),

    /// Error variant when we couldn't read from a file
    FileReadError { source: io::Error },

    /// Other IO errors
    IOError(io::Error),

    /// Other miscellaneous errors
    Other,
}

impl Error for AlignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::FileReadError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for AlignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl Display for AlignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::BandingInfeasible { len1, len2, max_indels } =>
                write!(f, "Sequence lengths {len1} and {len2} differ by more than {max_indels}, banded alignment is not possible!"),
            Self::InvalidTraceback { row, col } =>
                write!(f, "Traceback got stuck at cell ({row}, {col}) before reaching the origin!"),
            Self::TooFewSequences(n) =>
                write!(f, "Need at least two sequences to align, got {n}!"),
            Self::FileReadError { source: _ } =>
                write!(f, "Could not read from file!"),
            Self::IOError(ref err) =>
                err.fmt(f),
            Self::Other =>
                write!(f, "Alignment error!")
        }
    }
}
