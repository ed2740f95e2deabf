use log::info;
use crate::error::{Result, SubwayError};
use crate::models::{Station, StationId};
use crate::storage::{SectionDao, StationDao};

pub struct StationService<'a, S: ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: StationDao + SectionDao + ?Sized> StationService<'a, S> {
    #[must_use]
    pub fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// # Errors
    /// Returns a validation error for a blank name and a duplicate-name
    /// error if a station with this exact name already exists
    pub fn create(&mut self, name: &str) -> Result<Station> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubwayError::validation("station name must not be blank"));
        }
        if self.storage.find_station_by_name(name)?.is_some() {
            return Err(SubwayError::DuplicateName(format!("station {name} already exists")));
        }

        let station = self.storage.save_station(name)?;
        info!("created station {} ({})", station.id, station.name);
        Ok(station)
    }

    /// # Errors
    /// Propagates storage errors
    pub fn find_all(&self) -> Result<Vec<Station>> {
        self.storage.find_all_stations()
    }

    /// Delete a station that no line uses any more
    ///
    /// # Errors
    /// Returns a not-found error for an unknown station and a validation
    /// error if a section still references it
    pub fn delete(&mut self, id: StationId) -> Result<()> {
        let station = super::require_station(&*self.storage, id)?;
        let in_use = self
            .storage
            .find_all_sections()?
            .iter()
            .any(|section| section.contains(id));
        if in_use {
            return Err(SubwayError::validation(format!(
                "station {} is still part of a line",
                station.name
            )));
        }

        self.storage.delete_station(id)?;
        info!("deleted station {id}");
        Ok(())
    }
}
