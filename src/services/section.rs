use log::info;
use crate::error::{Result, SubwayError};
use crate::models::{Distance, LineId, Section, StationId};
use crate::storage::{LineDao, SectionDao, StationDao};

pub struct SectionService<'a, S: ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: LineDao + StationDao + SectionDao + ?Sized> SectionService<'a, S> {
    #[must_use]
    pub fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// Add a section to a line and return it with its generated id
    ///
    /// A split also shortens the existing section it cuts into.
    ///
    /// # Errors
    /// Returns a not-found error for an unknown line or station and any
    /// validation error raised by [`crate::models::Sections::insert`]
    pub fn create(
        &mut self,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Result<Section> {
        super::require_line(&*self.storage, line_id)?;
        super::require_station(&*self.storage, up_station)?;
        super::require_station(&*self.storage, down_station)?;

        let sections = super::load_sections(&*self.storage, line_id)?;
        let update = sections.insert(Section::new(line_id, up_station, down_station, distance))?;

        let created = super::apply_changes(&mut *self.storage, &update.changes)?
            .into_iter()
            .next()
            .ok_or_else(|| SubwayError::Storage("the new section was not saved".to_string()))?;
        info!(
            "line {line_id}: added section {up_station} -> {down_station} ({distance})"
        );
        Ok(created)
    }

    /// Remove a station from a line, merging its sections if needed
    ///
    /// # Errors
    /// Returns a not-found error for an unknown line or a station that is not
    /// on the line, and a validation error if the line has a single section
    pub fn delete_station(&mut self, line_id: LineId, station: StationId) -> Result<()> {
        super::require_line(&*self.storage, line_id)?;

        let sections = super::load_sections(&*self.storage, line_id)?;
        let update = sections.delete_station(station)?;
        super::apply_changes(&mut *self.storage, &update.changes)?;
        info!("line {line_id}: removed station {station}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Line, Station};
    use crate::storage::MemoryStorage;

    struct Fixture {
        storage: MemoryStorage,
        line: Line,
        stations: Vec<Station>,
    }

    fn distance(value: u32) -> Distance {
        Distance::new(value).expect("distance should be positive")
    }

    /// Line with stations A..E saved and a first section A -> B (10)
    fn fixture() -> Fixture {
        let mut storage = MemoryStorage::new();
        let stations: Vec<Station> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|name| storage.save_station(name).expect("save should succeed"))
            .collect();
        let line = storage.save_line("Line 2", "green").expect("save should succeed");
        storage
            .save_section(&Section::new(line.id, stations[0].id, stations[1].id, distance(10)))
            .expect("save should succeed");
        Fixture { storage, line, stations }
    }

    fn names(fixture: &Fixture) -> Vec<String> {
        super::super::sorted_stations(&fixture.storage, fixture.line.id)
            .expect("path should be valid")
            .into_iter()
            .map(|station| station.name)
            .collect()
    }

    #[test]
    fn test_create_section_at_bottom() {
        let mut f = fixture();
        let (b, c) = (f.stations[1].id, f.stations[2].id);
        let created = SectionService::new(&mut f.storage)
            .create(f.line.id, b, c, distance(4))
            .expect("create should succeed");

        assert!(created.id.is_some());
        assert_eq!(created.up_station, b);
        assert_eq!(names(&f), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_split_updates_existing_section() {
        let mut f = fixture();
        let (a, c) = (f.stations[0].id, f.stations[2].id);
        let created = SectionService::new(&mut f.storage)
            .create(f.line.id, a, c, distance(4))
            .expect("create should succeed");

        let sections = f.storage.find_sections_by_line(f.line.id).expect("listing should succeed");
        assert_eq!(sections.len(), 2);
        let shortened = sections
            .iter()
            .find(|section| section.id != created.id)
            .expect("old section should remain");
        assert_eq!(shortened.up_station, c);
        assert_eq!(shortened.distance, distance(6));
        assert_eq!(names(&f), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_failed_split_writes_nothing() {
        let mut f = fixture();
        let (a, c) = (f.stations[0].id, f.stations[2].id);
        let before = f.storage.find_all_sections().expect("listing should succeed");

        let result = SectionService::new(&mut f.storage).create(f.line.id, a, c, distance(10));
        assert!(matches!(result, Err(SubwayError::Validation(_))));
        assert_eq!(f.storage.find_all_sections().expect("listing should succeed"), before);
    }

    #[test]
    fn test_create_on_unknown_line_or_station_fails() {
        let mut f = fixture();
        let (a, b) = (f.stations[0].id, f.stations[1].id);
        let mut service = SectionService::new(&mut f.storage);

        assert!(matches!(
            service.create(LineId(42), a, b, distance(1)),
            Err(SubwayError::NotFound(_))
        ));
        assert!(matches!(
            service.create(f.line.id, a, StationId(42), distance(1)),
            Err(SubwayError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_interior_station_merges() {
        let mut f = fixture();
        let (a, b, c) = (f.stations[0].id, f.stations[1].id, f.stations[2].id);
        let mut service = SectionService::new(&mut f.storage);
        service.create(f.line.id, b, c, distance(4)).expect("create should succeed");
        service.delete_station(f.line.id, b).expect("delete should succeed");

        let sections = f.storage.find_sections_by_line(f.line.id).expect("listing should succeed");
        assert_eq!(sections.len(), 1);
        assert_eq!((sections[0].up_station, sections[0].down_station), (a, c));
        assert_eq!(sections[0].distance, distance(14));
    }

    #[test]
    fn test_delete_from_single_section_fails() {
        let mut f = fixture();
        let a = f.stations[0].id;
        assert!(matches!(
            SectionService::new(&mut f.storage).delete_station(f.line.id, a),
            Err(SubwayError::Validation(_))
        ));
    }

    #[test]
    fn test_delete_station_not_on_line_fails() {
        let mut f = fixture();
        let (b, c, e) = (f.stations[1].id, f.stations[2].id, f.stations[4].id);
        let mut service = SectionService::new(&mut f.storage);
        service.create(f.line.id, b, c, distance(4)).expect("create should succeed");

        assert!(matches!(
            service.delete_station(f.line.id, e),
            Err(SubwayError::NotFound(_))
        ));
    }
}
