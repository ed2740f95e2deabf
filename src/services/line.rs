use log::info;
use crate::error::{Result, SubwayError};
use crate::models::{Distance, Line, LineId, LineStations, Section, Sections, StationId};
use crate::storage::{LineDao, SectionDao, StationDao};

/// A line with its stations from top to bottom, read through a shared borrow
///
/// # Errors
/// Returns a not-found error for an unknown line
pub fn find_line<S: LineDao + StationDao + SectionDao + ?Sized>(storage: &S, id: LineId) -> Result<LineStations> {
    let line = super::require_line(storage, id)?;
    let stations = super::sorted_stations(storage, id)?;
    Ok(LineStations { line, stations })
}

pub struct LineService<'a, S: ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: LineDao + StationDao + SectionDao + ?Sized> LineService<'a, S> {
    #[must_use]
    pub fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// Create a line together with its first section
    ///
    /// # Errors
    /// Returns a validation error for a blank name or an invalid first
    /// section, a duplicate-name error for a taken name and a not-found
    /// error for unknown stations
    pub fn create(
        &mut self,
        name: &str,
        color: &str,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Result<LineStations> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubwayError::validation("line name must not be blank"));
        }
        if self.storage.find_line_by_name(name)?.is_some() {
            return Err(SubwayError::DuplicateName(format!("line {name} already exists")));
        }
        super::require_station(&*self.storage, up_station)?;
        super::require_station(&*self.storage, down_station)?;

        if up_station == down_station {
            return Err(SubwayError::validation(
                "up and down stations of a section must differ",
            ));
        }

        let line = self.storage.save_line(name, color)?;
        let first_section = Sections::empty(line.id)
            .insert(Section::new(line.id, up_station, down_station, distance))
            .and_then(|update| super::apply_changes(&mut *self.storage, &update.changes));
        if let Err(err) = first_section {
            // no line without sections
            self.storage.delete_sections_by_line(line.id)?;
            self.storage.delete_line(line.id)?;
            return Err(err);
        }
        info!("created line {} ({})", line.id, line.name);

        self.find(line.id)
    }

    /// # Errors
    /// Propagates storage errors
    pub fn find_all(&self) -> Result<Vec<Line>> {
        self.storage.find_all_lines()
    }

    /// A line with its stations from top to bottom
    ///
    /// # Errors
    /// Returns a not-found error for an unknown line
    pub fn find(&self, id: LineId) -> Result<LineStations> {
        find_line(&*self.storage, id)
    }

    /// Rename or recolor a line
    ///
    /// # Errors
    /// Returns a not-found error for an unknown line and a duplicate-name
    /// error if another line already uses `name`
    pub fn update(&mut self, id: LineId, name: &str, color: &str) -> Result<Line> {
        let mut line = super::require_line(&*self.storage, id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SubwayError::validation("line name must not be blank"));
        }
        if let Some(other) = self.storage.find_line_by_name(name)? {
            if other.id != id {
                return Err(SubwayError::DuplicateName(format!("line {name} already exists")));
            }
        }

        line.name = name.to_string();
        line.color = color.to_string();
        self.storage.update_line(&line)?;
        info!("updated line {id}");
        Ok(line)
    }

    /// Delete a line and all of its sections
    ///
    /// # Errors
    /// Returns a not-found error for an unknown line
    pub fn delete(&mut self, id: LineId) -> Result<()> {
        super::require_line(&*self.storage, id)?;
        let removed = self.storage.delete_sections_by_line(id)?;
        self.storage.delete_line(id)?;
        info!("deleted line {id} and {removed} sections");
        Ok(())
    }
}
