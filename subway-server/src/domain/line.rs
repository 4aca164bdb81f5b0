//! Line aggregate.
//!
//! A `Line` holds identity and display metadata and delegates every
//! topology operation to its [`SectionPath`].

use std::fmt;

use chrono::{DateTime, Utc};

use super::{PathCorruption, Section, SectionError, SectionPath, StationId};

/// Opaque identifier for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subway line: metadata plus its section path.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    deleted: bool,
    path: SectionPath,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Line {
    /// Create a line with an empty path.
    pub fn new(id: LineId, name: String, color: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            color,
            deleted: false,
            path: SectionPath::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Update display metadata. Empty or absent fields keep their current
    /// value.
    pub fn update(&mut self, name: Option<&str>, color: Option<&str>) {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.name = name.to_string();
        }
        if let Some(color) = color.filter(|c| !c.is_empty()) {
            self.color = color.to_string();
        }
        self.touch();
    }

    /// Mark the line as deleted. Deleted lines are hidden by the store but
    /// keep their data.
    pub fn delete(&mut self) {
        self.deleted = true;
        self.touch();
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Insert a section into the line's path.
    pub fn add_section(&mut self, section: Section) -> Result<(), SectionError> {
        self.path.add_section(section)?;
        self.touch();
        Ok(())
    }

    /// Remove a station from the line's path.
    pub fn remove_station(&mut self, station: StationId) -> Result<(), SectionError> {
        self.path.remove_station(station)?;
        self.touch();
        Ok(())
    }

    /// The line's stations in travel order.
    pub fn ordered_stations(&self) -> Result<Vec<StationId>, PathCorruption> {
        self.path.ordered_stations()
    }

    /// The line's section path.
    pub fn path(&self) -> &SectionPath {
        &self.path
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
