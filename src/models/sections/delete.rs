use log::debug;
use super::{PathIndex, Sections, SectionsUpdate};
use crate::error::{Result, SubwayError};
use crate::models::StationId;

impl Sections {
    /// Remove a station from the path
    ///
    /// An end station takes its single section with it. An interior station
    /// merges its two sections: the one ending at the station is kept and
    /// stretched to the far end of the other, which is removed.
    ///
    /// # Errors
    /// Returns a validation error for a path with fewer than two sections and
    /// a not-found error for a station that is not on the path
    pub fn delete_station(&self, station: StationId) -> Result<SectionsUpdate> {
        if self.edges.is_empty() {
            return Err(SubwayError::validation("the line has no sections"));
        }
        if self.edges.len() == 1 {
            return Err(SubwayError::validation(
                "the only section of a line cannot be removed",
            ));
        }

        let index = PathIndex::build(&self.edges);
        if !index.contains(station) {
            return Err(SubwayError::not_found(format!(
                "station {station} is not on line {}",
                self.line_id
            )));
        }

        let mut edges = self.edges.clone();
        match (index.incoming(station), index.outgoing(station)) {
            (Some(incoming), Some(outgoing)) => {
                let following = &self.edges[outgoing];
                let distance = edges[incoming].distance.merge(following.distance)?;
                debug!(
                    "line {}: merging around station {station} into {} -> {}",
                    self.line_id, edges[incoming].up_station, following.down_station
                );
                edges[incoming].down_station = following.down_station;
                edges[incoming].distance = distance;
                edges.remove(outgoing);
            }
            (Some(position), None) | (None, Some(position)) => {
                debug!("line {}: dropping end station {station}", self.line_id);
                edges.remove(position);
            }
            (None, None) => {
                return Err(SubwayError::not_found(format!(
                    "no section of line {} touches station {station}",
                    self.line_id
                )));
            }
        }

        Ok(self.updated(edges))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SubwayError;
    use crate::models::sections::tests::{saved, section, A, B, C, D, E, LINE};
    use crate::models::{SectionId, Sections};

    #[test]
    fn test_delete_interior_station_merges_distances() {
        let sections = saved(&[(A, B, 3), (B, C, 4)]);
        let update = sections.delete_station(B).expect("interior station should be removable");

        assert_eq!(update.sections.edges(), &[section(A, C, 7).with_id(SectionId(1))]);
        assert_eq!(update.sections.sorted_stations(), Ok(vec![A, C]));
        assert_eq!(update.changes.updated, vec![section(A, C, 7).with_id(SectionId(1))]);
        assert_eq!(update.changes.removed, vec![SectionId(2)]);
        assert!(update.changes.inserted.is_empty());
    }

    #[test]
    fn test_delete_top_station() {
        let sections = saved(&[(A, B, 3), (B, C, 4)]);
        let update = sections.delete_station(A).expect("top station should be removable");

        assert_eq!(update.sections.sorted_stations(), Ok(vec![B, C]));
        assert_eq!(update.changes.removed, vec![SectionId(1)]);
        assert!(update.changes.updated.is_empty());
    }

    #[test]
    fn test_delete_bottom_station() {
        let sections = saved(&[(A, B, 3), (B, C, 4)]);
        let update = sections.delete_station(C).expect("bottom station should be removable");

        assert_eq!(update.sections.sorted_stations(), Ok(vec![A, B]));
        assert_eq!(update.changes.removed, vec![SectionId(2)]);
    }

    #[test]
    fn test_delete_in_a_long_shuffled_path() {
        let sections = saved(&[(C, D, 5), (A, B, 3), (D, E, 6), (B, C, 4)]);
        let update = sections.delete_station(D).expect("interior station should be removable");

        assert_eq!(update.sections.sorted_stations(), Ok(vec![A, B, C, E]));
        assert_eq!(update.changes.updated, vec![section(C, E, 11).with_id(SectionId(1))]);
        assert_eq!(update.changes.removed, vec![SectionId(3)]);
    }

    #[test]
    fn test_delete_from_single_section_fails() {
        let sections = saved(&[(A, B, 3)]);
        assert!(matches!(sections.delete_station(A), Err(SubwayError::Validation(_))));
        assert!(matches!(sections.delete_station(B), Err(SubwayError::Validation(_))));
    }

    #[test]
    fn test_delete_from_empty_path_fails() {
        assert!(matches!(
            Sections::empty(LINE).delete_station(A),
            Err(SubwayError::Validation(_))
        ));
    }

    #[test]
    fn test_delete_unknown_station_fails() {
        let sections = saved(&[(A, B, 3), (B, C, 4)]);
        assert!(matches!(sections.delete_station(D), Err(SubwayError::NotFound(_))));
    }
}
