use serde::{Deserialize, Serialize};
use std::fmt;
use super::{LineId, SectionId, StationId};
use crate::error::{Result, SubwayError};

/// Length of a section, always a positive integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Distance(u32);

impl Distance {
    /// # Errors
    /// Returns a validation error for a zero distance
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(SubwayError::validation("distance must be a positive integer"));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Distance left over once `part` is cut off the front or back of `self`
    ///
    /// # Errors
    /// Returns a validation error unless `part` is strictly shorter than `self`
    pub fn shrink_by(self, part: Distance) -> Result<Self> {
        if part.0 >= self.0 {
            return Err(SubwayError::validation(
                "a new section must be shorter than the section it splits",
            ));
        }
        Ok(Self(self.0 - part.0))
    }

    /// # Errors
    /// Returns a validation error on overflow
    pub fn merge(self, other: Distance) -> Result<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| SubwayError::validation("merged distance is too long"))
    }
}

impl TryFrom<u32> for Distance {
    type Error = SubwayError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed edge `up_station -> down_station` of one line
///
/// `id` is `None` until the section has been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SectionId>,
    pub line_id: LineId,
    pub up_station: StationId,
    pub down_station: StationId,
    pub distance: Distance,
}

impl Section {
    #[must_use]
    pub fn new(line_id: LineId, up_station: StationId, down_station: StationId, distance: Distance) -> Self {
        Self {
            id: None,
            line_id,
            up_station,
            down_station,
            distance,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: SectionId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn contains(&self, station: StationId) -> bool {
        self.up_station == station || self.down_station == station
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(value: u32) -> Distance {
        Distance::new(value).expect("distance should be positive")
    }

    #[test]
    fn test_zero_distance_is_rejected() {
        assert!(matches!(Distance::new(0), Err(SubwayError::Validation(_))));
    }

    #[test]
    fn test_shrink_by_shorter_part() {
        assert_eq!(distance(10).shrink_by(distance(4)), Ok(distance(6)));
    }

    #[test]
    fn test_shrink_by_equal_or_longer_part_fails() {
        assert!(matches!(distance(10).shrink_by(distance(10)), Err(SubwayError::Validation(_))));
        assert!(matches!(distance(10).shrink_by(distance(11)), Err(SubwayError::Validation(_))));
    }

    #[test]
    fn test_merge_sums_distances() {
        assert_eq!(distance(3).merge(distance(4)), Ok(distance(7)));
        assert!(distance(u32::MAX).merge(distance(1)).is_err());
    }

    #[test]
    fn test_section_contains_both_endpoints() {
        let section = Section::new(LineId(1), StationId(1), StationId(2), distance(5));
        assert!(section.contains(StationId(1)));
        assert!(section.contains(StationId(2)));
        assert!(!section.contains(StationId(3)));
        assert_eq!(section.id, None);
        assert_eq!(section.with_id(SectionId(9)).id, Some(SectionId(9)));
    }
}
