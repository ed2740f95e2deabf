use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use super::{LineDao, SectionDao, StationDao};
use crate::error::{Result, SubwayError};
use crate::models::{IdSequence, Line, LineId, Section, SectionId, Station, StationId};

/// In-process store for stations, lines and sections
///
/// Tables keep insertion order so listings are stable. The whole store is
/// serializable and doubles as the snapshot format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStorage {
    stations: IndexMap<StationId, Station>,
    lines: IndexMap<LineId, Line>,
    sections: IndexMap<SectionId, Section>,
    station_ids: IdSequence,
    line_ids: IdSequence,
    section_ids: IdSequence,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StationDao for MemoryStorage {
    fn save_station(&mut self, name: &str) -> Result<Station> {
        let station = Station::new(StationId(self.station_ids.next_id()), name);
        self.stations.insert(station.id, station.clone());
        Ok(station)
    }

    fn find_station(&self, id: StationId) -> Result<Option<Station>> {
        Ok(self.stations.get(&id).cloned())
    }

    fn find_station_by_name(&self, name: &str) -> Result<Option<Station>> {
        Ok(self.stations.values().find(|station| station.name == name).cloned())
    }

    fn find_all_stations(&self) -> Result<Vec<Station>> {
        Ok(self.stations.values().cloned().collect())
    }

    fn delete_station(&mut self, id: StationId) -> Result<()> {
        self.stations
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(|| SubwayError::not_found(format!("station {id} does not exist")))
    }
}

impl LineDao for MemoryStorage {
    fn save_line(&mut self, name: &str, color: &str) -> Result<Line> {
        let line = Line::new(LineId(self.line_ids.next_id()), name, color);
        self.lines.insert(line.id, line.clone());
        Ok(line)
    }

    fn find_line(&self, id: LineId) -> Result<Option<Line>> {
        Ok(self.lines.get(&id).cloned())
    }

    fn find_line_by_name(&self, name: &str) -> Result<Option<Line>> {
        Ok(self.lines.values().find(|line| line.name == name).cloned())
    }

    fn find_all_lines(&self) -> Result<Vec<Line>> {
        Ok(self.lines.values().cloned().collect())
    }

    fn update_line(&mut self, line: &Line) -> Result<()> {
        let Some(stored) = self.lines.get_mut(&line.id) else {
            return Err(SubwayError::not_found(format!("line {} does not exist", line.id)));
        };
        stored.clone_from(line);
        Ok(())
    }

    fn delete_line(&mut self, id: LineId) -> Result<()> {
        self.lines
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(|| SubwayError::not_found(format!("line {id} does not exist")))
    }
}

impl SectionDao for MemoryStorage {
    fn save_section(&mut self, section: &Section) -> Result<Section> {
        if let Some(id) = section.id {
            return Err(SubwayError::Storage(format!("section {id} is already saved")));
        }
        let id = SectionId(self.section_ids.next_id());
        let saved = section.clone().with_id(id);
        self.sections.insert(id, saved.clone());
        Ok(saved)
    }

    fn find_section(&self, id: SectionId) -> Result<Option<Section>> {
        Ok(self.sections.get(&id).cloned())
    }

    fn find_all_sections(&self) -> Result<Vec<Section>> {
        Ok(self.sections.values().cloned().collect())
    }

    fn find_sections_by_line(&self, line_id: LineId) -> Result<Vec<Section>> {
        Ok(self
            .sections
            .values()
            .filter(|section| section.line_id == line_id)
            .cloned()
            .collect())
    }

    fn update_section(&mut self, section: &Section) -> Result<()> {
        let Some(id) = section.id else {
            return Err(SubwayError::Storage("cannot update a section that was never saved".to_string()));
        };
        let Some(stored) = self.sections.get_mut(&id) else {
            return Err(SubwayError::not_found(format!("section {id} does not exist")));
        };
        stored.clone_from(section);
        Ok(())
    }

    fn delete_section(&mut self, id: SectionId) -> Result<()> {
        self.sections
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(|| SubwayError::not_found(format!("section {id} does not exist")))
    }

    fn delete_sections_by_line(&mut self, line_id: LineId) -> Result<usize> {
        let before = self.sections.len();
        self.sections.retain(|_, section| section.line_id != line_id);
        Ok(before - self.sections.len())
    }
}
