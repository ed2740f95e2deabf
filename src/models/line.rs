use serde::{Deserialize, Serialize};
use super::{LineId, Station};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
}

impl Line {
    #[must_use]
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A line together with its stations in path order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStations {
    #[serde(flatten)]
    pub line: Line,
    pub stations: Vec<Station>,
}
