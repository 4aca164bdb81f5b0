//! Ordered section path for a single line.
//!
//! A [`SectionPath`] owns the sections of one line and keeps them forming a
//! single non-branching, acyclic, distance-consistent chain. Insertion
//! either extends a terminus or splits an existing section; deletion
//! re-stitches the chain around the removed station.

use std::collections::HashMap;

use super::{Distance, Section, StationId};

/// Rejected section mutation.
///
/// Every variant is a caller mistake, reported synchronously and without any
/// partial mutation of the path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// Both endpoints of the proposed section are already on the line.
    #[error("stations {up} and {down} are both already on the line")]
    DuplicateSection { up: StationId, down: StationId },

    /// Neither endpoint of the proposed section is on the line.
    #[error("neither station {up} nor {down} is on the line")]
    Disconnected { up: StationId, down: StationId },

    /// A split was requested with a distance that does not leave a positive
    /// remainder.
    #[error("distance {proposed} must be shorter than the existing section's {existing}")]
    InvalidDistance {
        proposed: Distance,
        existing: Distance,
    },

    /// The proposed section matches none of the accepted shapes
    /// (bootstrap, prepend, append, split).
    #[error("section ({up}, {down}) does not fit the line")]
    InvalidTopology { up: StationId, down: StationId },

    /// Removal attempted when only one section remains.
    #[error("a line must keep at least one section")]
    MinimumSection,

    /// The station to remove is not on the line.
    #[error("station {0} is not on the line")]
    StationNotFound(StationId),
}

/// Internal-consistency failure detected while walking the path.
///
/// Unlike [`SectionError`], these are never caused by a caller: a branch or
/// cycle can only appear if a mutation slipped past validation. The web
/// layer maps them to a server error, not a client error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathCorruption {
    /// A station appears twice in the same role (two outgoing or two
    /// incoming sections).
    #[error("station {0} appears on more than one section in the same role")]
    Branch(StationId),

    /// No station qualifies as the up terminus; the sections form a cycle.
    #[error("no up terminus found among {0} sections")]
    NoTerminus(usize),

    /// The walk from the up terminus did not visit every station.
    #[error("walk visited {visited} stations, expected {expected}")]
    BrokenWalk { visited: usize, expected: usize },
}

/// Station-to-section index, rebuilt per operation.
///
/// Gives constant-time answers to "is this station on the line", "which
/// section leaves it" and "which section arrives at it".
struct PathLinks {
    outgoing: HashMap<StationId, usize>,
    incoming: HashMap<StationId, usize>,
}

impl PathLinks {
    fn contains(&self, station: StationId) -> bool {
        self.outgoing.contains_key(&station) || self.incoming.contains_key(&station)
    }

    /// The most-upstream station: an up endpoint that is never a down
    /// endpoint. `None` on a corrupted (cyclic) set.
    fn head(&self) -> Option<StationId> {
        self.outgoing
            .keys()
            .find(|station| !self.incoming.contains_key(station))
            .copied()
    }

    /// The most-downstream station: a down endpoint that is never an up
    /// endpoint.
    fn tail(&self) -> Option<StationId> {
        self.incoming
            .keys()
            .find(|station| !self.outgoing.contains_key(station))
            .copied()
    }
}

/// The ordered collection of sections for one line.
///
/// Created empty when the owning line is created; mutated only through
/// [`add_section`](Self::add_section) and
/// [`remove_station`](Self::remove_station). Each mutation either fully
/// applies or fully fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPath {
    sections: Vec<Section>,
}

impl SectionPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections on the path.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// True when the path has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The sections in storage order.
    ///
    /// Storage order is not travel order; use
    /// [`ordered_stations`](Self::ordered_stations) for that.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// True when `station` is an endpoint of any section.
    pub fn contains(&self, station: StationId) -> bool {
        self.links().contains(station)
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections.iter().map(|s| s.distance().get()).sum()
    }

    /// Insert a section into the path.
    ///
    /// Accepted shapes, checked in this fixed order with the first match
    /// authoritative: bootstrap into an empty path, prepend at the up
    /// terminus, append at the down terminus, split of the existing section
    /// sharing the matched endpoint.
    ///
    /// # Errors
    ///
    /// - [`SectionError::DuplicateSection`] when both endpoints are already
    ///   on the line.
    /// - [`SectionError::Disconnected`] when neither endpoint is.
    /// - [`SectionError::InvalidDistance`] when a split would not leave a
    ///   positive remainder.
    /// - [`SectionError::InvalidTopology`] when no accepted shape matches.
    pub fn add_section(&mut self, new: Section) -> Result<(), SectionError> {
        if self.sections.is_empty() {
            self.sections.push(new);
            return Ok(());
        }

        let links = self.links();
        let has_up = links.contains(new.up());
        let has_down = links.contains(new.down());

        if has_up && has_down {
            return Err(SectionError::DuplicateSection {
                up: new.up(),
                down: new.down(),
            });
        }
        if !has_up && !has_down {
            return Err(SectionError::Disconnected {
                up: new.up(),
                down: new.down(),
            });
        }

        // Prepend: the new section arrives at the current up terminus.
        if links.head() == Some(new.down()) {
            self.sections.push(new);
            return Ok(());
        }

        // Append: the new section leaves the current down terminus.
        if links.tail() == Some(new.up()) {
            self.sections.push(new);
            return Ok(());
        }

        // Split on the upstream endpoint: the new station goes immediately
        // downstream of `new.up`, so the new distance is the upper leg.
        if let Some(&index) = links.outgoing.get(&new.up()) {
            return self.split(index, new.down(), new.distance());
        }

        // Split on the downstream endpoint: the new station goes immediately
        // upstream of `new.down`, so the new distance is the lower leg and
        // the upper leg carries the remainder.
        if let Some(&index) = links.incoming.get(&new.down()) {
            let existing = self.sections[index].distance();
            let upper =
                existing
                    .minus(new.distance())
                    .ok_or(SectionError::InvalidDistance {
                        proposed: new.distance(),
                        existing,
                    })?;
            return self.split(index, new.up(), upper);
        }

        Err(SectionError::InvalidTopology {
            up: new.up(),
            down: new.down(),
        })
    }

    /// Remove a station, re-stitching the path around it.
    ///
    /// An interior station's two sections are replaced by one merged section
    /// accumulating both distances; a terminus station's single section is
    /// dropped.
    ///
    /// # Errors
    ///
    /// - [`SectionError::MinimumSection`] when fewer than two sections
    ///   remain; a single-section line cannot shrink further.
    /// - [`SectionError::StationNotFound`] when the station is not on the
    ///   line.
    pub fn remove_station(&mut self, station: StationId) -> Result<(), SectionError> {
        if self.sections.len() < 2 {
            return Err(SectionError::MinimumSection);
        }

        let links = self.links();
        let arriving = links.incoming.get(&station).copied();
        let leaving = links.outgoing.get(&station).copied();

        match (arriving, leaving) {
            (None, None) => Err(SectionError::StationNotFound(station)),
            (Some(arriving), Some(leaving)) => {
                let merged = Section::bridging(&self.sections[arriving], &self.sections[leaving]);
                // Drop the higher index first so the lower one stays valid.
                self.sections.remove(arriving.max(leaving));
                self.sections.remove(arriving.min(leaving));
                self.sections.push(merged);
                Ok(())
            }
            (Some(index), None) | (None, Some(index)) => {
                self.sections.remove(index);
                Ok(())
            }
        }
    }

    /// The stations in travel order, from up terminus to down terminus.
    ///
    /// # Errors
    ///
    /// Returns [`PathCorruption`] when the stored sections do not form a
    /// single simple chain. This cannot happen through the public mutation
    /// API; it indicates a bug, and callers should treat it as fatal rather
    /// than as a validation failure.
    pub fn ordered_stations(&self) -> Result<Vec<StationId>, PathCorruption> {
        if self.sections.is_empty() {
            return Ok(Vec::new());
        }

        let mut outgoing = HashMap::with_capacity(self.sections.len());
        let mut incoming = HashMap::with_capacity(self.sections.len());
        for section in &self.sections {
            if outgoing.insert(section.up(), section.down()).is_some() {
                return Err(PathCorruption::Branch(section.up()));
            }
            if incoming.insert(section.down(), section.up()).is_some() {
                return Err(PathCorruption::Branch(section.down()));
            }
        }

        let head = outgoing
            .keys()
            .find(|station| !incoming.contains_key(station))
            .copied()
            .ok_or(PathCorruption::NoTerminus(self.sections.len()))?;

        let expected = self.sections.len() + 1;
        let mut order = Vec::with_capacity(expected);
        let mut current = head;
        order.push(current);
        while let Some(&next) = outgoing.get(&current) {
            if order.len() == expected {
                return Err(PathCorruption::BrokenWalk {
                    visited: order.len(),
                    expected,
                });
            }
            order.push(next);
            current = next;
        }

        if order.len() != expected {
            return Err(PathCorruption::BrokenWalk {
                visited: order.len(),
                expected,
            });
        }

        Ok(order)
    }

    fn links(&self) -> PathLinks {
        let mut outgoing = HashMap::with_capacity(self.sections.len());
        let mut incoming = HashMap::with_capacity(self.sections.len());
        for (index, section) in self.sections.iter().enumerate() {
            outgoing.insert(section.up(), index);
            incoming.insert(section.down(), index);
        }
        PathLinks { outgoing, incoming }
    }

    /// Replace `sections[index]` with the two halves of a split around
    /// `station`, where `upper` is the distance of the upstream half.
    fn split(
        &mut self,
        index: usize,
        station: StationId,
        upper: Distance,
    ) -> Result<(), SectionError> {
        let existing = self.sections[index];
        let (first, second) =
            existing
                .split_at(station, upper)
                .ok_or(SectionError::InvalidDistance {
                    proposed: upper,
                    existing: existing.distance(),
                })?;
        self.sections[index] = first;
        self.sections.push(second);
        Ok(())
    }
}
