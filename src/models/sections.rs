use log::debug;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::{LineId, Section, SectionId, StationId};
use crate::error::{Result, SubwayError};

mod delete;
mod insert;

/// The sections of one line, forming a single simple path of stations
///
/// `Sections` is a value: `insert` and `delete_station` never touch `self`,
/// they return a [`SectionsUpdate`] holding the new value together with the
/// writes needed to persist it. The order of `edges` carries no meaning, the
/// path order is always derived from the up/down links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    line_id: LineId,
    edges: Vec<Section>,
}

/// Result of a path transformation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionsUpdate {
    pub sections: Sections,
    pub changes: SectionChanges,
}

/// Storage writes turning one `Sections` value into another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionChanges {
    /// New sections, still without id
    pub inserted: Vec<Section>,
    /// Saved sections whose endpoints or distance changed
    pub updated: Vec<Section>,
    pub removed: Vec<SectionId>,
}

impl SectionChanges {
    /// Diff two edge sets of the same line
    ///
    /// Edges of `old` are expected to carry ids; an edge of `new` without id
    /// is always reported as inserted.
    #[must_use]
    pub fn between(old: &Sections, new: &Sections) -> Self {
        let previous: HashMap<SectionId, &Section> = old
            .edges
            .iter()
            .filter_map(|section| section.id.map(|id| (id, section)))
            .collect();

        let mut changes = Self::default();
        for section in &new.edges {
            match section.id.and_then(|id| previous.get(&id)) {
                None => changes.inserted.push(section.clone()),
                Some(&before) if before != section => changes.updated.push(section.clone()),
                Some(_) => {}
            }
        }

        changes.removed = old
            .edges
            .iter()
            .filter_map(|section| section.id)
            .filter(|id| !new.edges.iter().any(|section| section.id == Some(*id)))
            .collect();

        changes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Adjacency of a path keyed by station id
///
/// Edge weights are positions in the `edges` list the index was built from.
struct PathIndex {
    graph: DiGraphMap<StationId, usize>,
}

impl PathIndex {
    fn build(edges: &[Section]) -> Self {
        let mut graph = DiGraphMap::with_capacity(edges.len() + 1, edges.len());
        for (position, section) in edges.iter().enumerate() {
            graph.add_edge(section.up_station, section.down_station, position);
        }
        Self { graph }
    }

    fn contains(&self, station: StationId) -> bool {
        self.graph.contains_node(station)
    }

    /// Position of the edge starting at `station`
    fn outgoing(&self, station: StationId) -> Option<usize> {
        let next = self.graph.neighbors_directed(station, Direction::Outgoing).next()?;
        self.graph.edge_weight(station, next).copied()
    }

    /// Position of the edge ending at `station`
    fn incoming(&self, station: StationId) -> Option<usize> {
        let previous = self.graph.neighbors_directed(station, Direction::Incoming).next()?;
        self.graph.edge_weight(previous, station).copied()
    }

    /// The only station without `direction` neighbours, if there is exactly one
    fn unique_end(&self, direction: Direction) -> Option<StationId> {
        let mut ends = self
            .graph
            .nodes()
            .filter(|&station| self.graph.neighbors_directed(station, direction).next().is_none());
        match (ends.next(), ends.next()) {
            (Some(station), None) => Some(station),
            _ => None,
        }
    }

    fn top(&self) -> Option<StationId> {
        self.unique_end(Direction::Incoming)
    }

    fn bottom(&self) -> Option<StationId> {
        self.unique_end(Direction::Outgoing)
    }
}

impl Sections {
    #[must_use]
    pub fn empty(line_id: LineId) -> Self {
        Self {
            line_id,
            edges: Vec::new(),
        }
    }

    /// Wrap sections loaded from storage
    ///
    /// # Errors
    /// Returns a validation error if a section belongs to another line
    pub fn from_edges(line_id: LineId, edges: Vec<Section>) -> Result<Self> {
        if let Some(stray) = edges.iter().find(|section| section.line_id != line_id) {
            return Err(SubwayError::validation(format!(
                "section of line {} cannot be part of line {line_id}",
                stray.line_id
            )));
        }
        Ok(Self { line_id, edges })
    }

    #[must_use]
    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    #[must_use]
    pub fn edges(&self) -> &[Section] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn contains_station(&self, station: StationId) -> bool {
        self.edges.iter().any(|section| section.contains(station))
    }

    /// Station with no incoming section
    #[must_use]
    pub fn top_station(&self) -> Option<StationId> {
        PathIndex::build(&self.edges).top()
    }

    /// Station with no outgoing section
    #[must_use]
    pub fn bottom_station(&self) -> Option<StationId> {
        PathIndex::build(&self.edges).bottom()
    }

    /// Stations from top to bottom
    ///
    /// # Errors
    /// Returns a not-found error if the edges do not form a single path
    pub fn sorted_stations(&self) -> Result<Vec<StationId>> {
        if self.edges.is_empty() {
            return Ok(Vec::new());
        }

        let index = PathIndex::build(&self.edges);
        let mut station = index
            .top()
            .ok_or_else(|| SubwayError::not_found("the top station of the line does not exist"))?;

        let mut stations = Vec::with_capacity(self.edges.len() + 1);
        stations.push(station);
        for _ in 0..self.edges.len() {
            let position = index
                .outgoing(station)
                .ok_or_else(|| SubwayError::not_found(format!("no section leaves station {station}")))?;
            station = self.edges[position].down_station;
            stations.push(station);
        }

        Ok(stations)
    }

    /// Sections from top to bottom
    ///
    /// # Errors
    /// Same as [`Sections::sorted_stations`]
    pub fn sorted_sections(&self) -> Result<Vec<&Section>> {
        let index = PathIndex::build(&self.edges);
        let stations = self.sorted_stations()?;

        Ok(stations
            .iter()
            .filter_map(|&station| index.outgoing(station))
            .map(|position| &self.edges[position])
            .collect())
    }

    fn updated(&self, edges: Vec<Section>) -> SectionsUpdate {
        let sections = Self {
            line_id: self.line_id,
            edges,
        };
        let changes = SectionChanges::between(self, &sections);
        debug!(
            "line {}: {} inserted, {} updated, {} removed",
            self.line_id,
            changes.inserted.len(),
            changes.updated.len(),
            changes.removed.len()
        );
        SectionsUpdate { sections, changes }
    }
}
