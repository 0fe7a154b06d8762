pub mod edit;

pub use edit::{Direction, EditCosts, Step};

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Add;

use serde::{Serialize, Serializer};


/// Alignment cost of a DP cell. Cells that have not been reached, or can't be reached,
/// are `Infinite`, which compares greater than any finite cost.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub enum Score {
    Score(i32),

    #[default]
    Infinite
}

impl Score {
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Score(_))
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Score(score) => Some(*score),
            Self::Infinite => None
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        match self {
            Self::Score(score) => match other {
                Self::Score(other_score) => score.cmp(other_score),
                Self::Infinite => Ordering::Less,
            },
            Self::Infinite => match other {
                Self::Score(_) => Ordering::Greater,
                Self::Infinite => Ordering::Equal
            }
        }
    }
}

impl Add<i32> for Score {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        match self {
            Self::Score(score) => Self::Score(score + rhs),
            Self::Infinite => Self::Infinite
        }
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Self::Score(value)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Score(score) => Display::fmt(score, f),
            Self::Infinite => Display::fmt("inf", f)
        }
    }
}

impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        match self {
            Self::Score(score) => serializer.serialize_i32(*score),
            Self::Infinite => serializer.serialize_str("inf"),
        }
    }
}
