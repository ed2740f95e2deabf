use log::debug;
use super::{PathIndex, Sections, SectionsUpdate};
use crate::error::{Result, SubwayError};
use crate::models::Section;

impl Sections {
    /// Add a section while keeping a single path
    ///
    /// The new section either extends the path at the top or the bottom, or
    /// splits the existing section that starts (or ends) at its known
    /// endpoint. A split shortens the existing section by the new distance.
    ///
    /// # Errors
    /// Returns a validation error when
    /// - the section belongs to another line or loops on one station
    /// - neither or both of its stations are already on the path
    /// - it splits a section that is not strictly longer than itself
    pub fn insert(&self, section: Section) -> Result<SectionsUpdate> {
        if section.line_id != self.line_id {
            return Err(SubwayError::validation(format!(
                "section of line {} cannot be added to line {}",
                section.line_id, self.line_id
            )));
        }
        if section.up_station == section.down_station {
            return Err(SubwayError::validation(
                "up and down stations of a section must differ",
            ));
        }

        if self.edges.is_empty() {
            return Ok(self.updated(vec![section]));
        }

        let index = PathIndex::build(&self.edges);
        let up_known = index.contains(section.up_station);
        let down_known = index.contains(section.down_station);
        if !up_known && !down_known {
            return Err(SubwayError::validation(
                "at least one station of the section must already be on the line",
            ));
        }
        if up_known && down_known {
            return Err(SubwayError::validation(
                "the section is already registered on the line",
            ));
        }

        let mut edges = self.edges.clone();

        if index.top() == Some(section.down_station) {
            debug!("line {}: new top station {}", self.line_id, section.up_station);
            edges.insert(0, section);
            return Ok(self.updated(edges));
        }

        if index.bottom() == Some(section.up_station) {
            debug!("line {}: new bottom station {}", self.line_id, section.down_station);
            edges.push(section);
            return Ok(self.updated(edges));
        }

        if let Some(position) = index.outgoing(section.up_station) {
            let existing = &self.edges[position];
            let remaining = existing.distance.shrink_by(section.distance)?;
            debug!(
                "line {}: splitting {} -> {} after {}",
                self.line_id, existing.up_station, existing.down_station, section.up_station
            );
            edges[position] = Section {
                up_station: section.down_station,
                distance: remaining,
                ..existing.clone()
            };
            edges.insert(position, section);
            return Ok(self.updated(edges));
        }

        if let Some(position) = index.incoming(section.down_station) {
            let existing = &self.edges[position];
            let remaining = existing.distance.shrink_by(section.distance)?;
            debug!(
                "line {}: splitting {} -> {} before {}",
                self.line_id, existing.up_station, existing.down_station, section.down_station
            );
            edges[position] = Section {
                down_station: section.up_station,
                distance: remaining,
                ..existing.clone()
            };
            edges.insert(position + 1, section);
            return Ok(self.updated(edges));
        }

        Err(SubwayError::not_found(format!(
            "no section of line {} can take a section from {} to {}",
            self.line_id, section.up_station, section.down_station
        )))
    }
}
