/// Identifier types
///
/// Every persisted entity is keyed by a `u64` wrapped in its own newtype so a
/// station id can never be passed where a line id is expected. Ids are
/// generated by the storage layer through an [`IdSequence`].
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Key of a station; also the node key of a line's path graph
    StationId
);
id_type!(LineId);
id_type!(SectionId);

/// Monotonic id generator, one per table
///
/// Starts at 1 like an auto-increment column and never hands out the same
/// value twice, even after deletions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next id
    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}
