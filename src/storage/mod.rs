mod file;
mod memory;

pub use file::{deserialize_snapshot, load_snapshot, save_snapshot, serialize_snapshot, CURRENT_SNAPSHOT_VERSION};
pub use memory::MemoryStorage;

use crate::error::Result;
use crate::models::{Line, LineId, Section, SectionId, Station, StationId};

/// Station persistence
pub trait StationDao {
    /// Save a new station and return it with its generated id
    ///
    /// # Errors
    /// Returns a storage error if the backend cannot write
    fn save_station(&mut self, name: &str) -> Result<Station>;

    /// # Errors
    /// Returns a storage error if the backend cannot read
    fn find_station(&self, id: StationId) -> Result<Option<Station>>;

    /// Exact, case-sensitive name lookup
    ///
    /// # Errors
    /// Returns a storage error if the backend cannot read
    fn find_station_by_name(&self, name: &str) -> Result<Option<Station>>;

    /// # Errors
    /// Returns a storage error if the backend cannot read
    fn find_all_stations(&self) -> Result<Vec<Station>>;

    /// # Errors
    /// Returns a not-found error if no such station exists
    fn delete_station(&mut self, id: StationId) -> Result<()>;
}

/// Line persistence
pub trait LineDao {
    /// Save a new line and return it with its generated id
    ///
    /// # Errors
    /// Returns a storage error if the backend cannot write
    fn save_line(&mut self, name: &str, color: &str) -> Result<Line>;

    /// # Errors
    /// Returns a storage error if the backend cannot read
    fn find_line(&self, id: LineId) -> Result<Option<Line>>;

    /// # Errors
    /// Returns a storage error if the backend cannot read
    fn find_line_by_name(&self, name: &str) -> Result<Option<Line>>;

    /// # Errors
    /// Returns a storage error if the backend cannot read
    fn find_all_lines(&self) -> Result<Vec<Line>>;

    /// Overwrite name and color of a saved line
    ///
    /// # Errors
    /// Returns a not-found error if the line was never saved
    fn update_line(&mut self, line: &Line) -> Result<()>;

    /// # Errors
    /// Returns a not-found error if no such line exists
    fn delete_line(&mut self, id: LineId) -> Result<()>;
}

/// Section persistence, rows of `(line_id, up_station_id, down_station_id, distance)`
pub trait SectionDao {
    /// Save a section without id and return it with its generated id
    ///
    /// # Errors
    /// Returns a storage error if the section already carries an id
    fn save_section(&mut self, section: &Section) -> Result<Section>;

    /// # Errors
    /// Returns a storage error if the backend cannot read
    fn find_section(&self, id: SectionId) -> Result<Option<Section>>;

    /// # Errors
    /// Returns a storage error if the backend cannot read
    fn find_all_sections(&self) -> Result<Vec<Section>>;

    /// # Errors
    /// Returns a storage error if the backend cannot read
    fn find_sections_by_line(&self, line_id: LineId) -> Result<Vec<Section>>;

    /// Overwrite a saved section, matched by its id
    ///
    /// # Errors
    /// Returns a storage error for a section without id and a not-found
    /// error for an unknown id
    fn update_section(&mut self, section: &Section) -> Result<()>;

    /// # Errors
    /// Returns a not-found error if no such section exists
    fn delete_section(&mut self, id: SectionId) -> Result<()>;

    /// Delete every section of a line, returning how many were removed
    ///
    /// # Errors
    /// Returns a storage error if the backend cannot write
    fn delete_sections_by_line(&mut self, line_id: LineId) -> Result<usize>;
}
