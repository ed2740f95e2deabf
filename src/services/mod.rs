mod line;
mod section;
mod station;

pub use line::{find_line, LineService};
pub use section::SectionService;
pub use station::StationService;

use log::info;
use crate::error::{Result, SubwayError};
use crate::models::{Line, LineId, Section, SectionChanges, Sections, Station, StationId};
use crate::storage::{LineDao, SectionDao, StationDao};

fn require_line<S: LineDao + ?Sized>(storage: &S, id: LineId) -> Result<Line> {
    storage
        .find_line(id)?
        .ok_or_else(|| SubwayError::not_found(format!("line {id} does not exist")))
}

fn require_station<S: StationDao + ?Sized>(storage: &S, id: StationId) -> Result<Station> {
    storage
        .find_station(id)?
        .ok_or_else(|| SubwayError::not_found(format!("station {id} does not exist")))
}

fn load_sections<S: SectionDao + ?Sized>(storage: &S, line_id: LineId) -> Result<Sections> {
    Sections::from_edges(line_id, storage.find_sections_by_line(line_id)?)
}

/// Resolve the stations of a line in path order
fn sorted_stations<S: StationDao + SectionDao + ?Sized>(storage: &S, line_id: LineId) -> Result<Vec<Station>> {
    load_sections(storage, line_id)?
        .sorted_stations()?
        .into_iter()
        .map(|id| require_station(storage, id))
        .collect()
}

/// Write a change set: removals first, then updates, then inserts
///
/// Returns the inserted sections with their generated ids.
fn apply_changes<S: SectionDao + ?Sized>(storage: &mut S, changes: &SectionChanges) -> Result<Vec<Section>> {
    for &id in &changes.removed {
        storage.delete_section(id)?;
    }
    for section in &changes.updated {
        storage.update_section(section)?;
    }
    let inserted = changes
        .inserted
        .iter()
        .map(|section| storage.save_section(section))
        .collect::<Result<Vec<_>>>()?;

    info!(
        "applied section changes: {} inserted, {} updated, {} removed",
        inserted.len(),
        changes.updated.len(),
        changes.removed.len()
    );
    Ok(inserted)
}
