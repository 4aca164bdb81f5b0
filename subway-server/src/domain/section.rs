//! Directed section between two adjacent stations.

use super::{Distance, StationId};

/// Error returned when constructing an invalid section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid section: up and down station must differ")]
pub struct InvalidSection;

/// A directed edge of the line: `down` is `distance` units downstream of
/// `up`, with no station in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    up: StationId,
    down: StationId,
    distance: Distance,
}

impl Section {
    /// Construct a section between two distinct stations.
    pub fn new(up: StationId, down: StationId, distance: Distance) -> Result<Self, InvalidSection> {
        if up == down {
            return Err(InvalidSection);
        }
        Ok(Section { up, down, distance })
    }

    /// The upstream endpoint.
    pub fn up(&self) -> StationId {
        self.up
    }

    /// The downstream endpoint.
    pub fn down(&self) -> StationId {
        self.down
    }

    /// The distance covered by this section.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Split this section around a new interior station.
    ///
    /// `upper` is the distance from `self.up` to `station`; the remainder
    /// goes to the second half. Returns `None` when `upper` is not strictly
    /// smaller than this section's distance, leaving nothing for the
    /// remainder.
    ///
    /// `station` must not equal either endpoint; the caller has already
    /// established that it is new to the path.
    pub(crate) fn split_at(&self, station: StationId, upper: Distance) -> Option<(Section, Section)> {
        let lower = self.distance.minus(upper)?;
        Some((
            Section {
                up: self.up,
                down: station,
                distance: upper,
            },
            Section {
                up: station,
                down: self.down,
                distance: lower,
            },
        ))
    }

    /// Join two adjacent sections around a removed interior station.
    ///
    /// `upstream.down` and `downstream.up` are the station being removed;
    /// the result spans from `upstream.up` to `downstream.down` and
    /// accumulates both distances.
    pub(crate) fn bridging(upstream: &Section, downstream: &Section) -> Section {
        Section {
            up: upstream.up,
            down: downstream.down,
            distance: upstream.distance + downstream.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(units: u64) -> Distance {
        Distance::new(units).unwrap()
    }

    #[test]
    fn new_accepts_distinct_endpoints() {
        assert!(Section::new(StationId(1), StationId(2), dist(10)).is_ok());
    }

    #[test]
    fn new_rejects_self_loop() {
        assert_eq!(
            Section::new(StationId(1), StationId(1), dist(10)),
            Err(InvalidSection)
        );
    }

    #[test]
    fn split_conserves_distance() {
        let section = Section::new(StationId(1), StationId(2), dist(10)).unwrap();
        let (first, second) = section.split_at(StationId(3), dist(3)).unwrap();

        assert_eq!(first.up(), StationId(1));
        assert_eq!(first.down(), StationId(3));
        assert_eq!(first.distance(), dist(3));

        assert_eq!(second.up(), StationId(3));
        assert_eq!(second.down(), StationId(2));
        assert_eq!(second.distance(), dist(7));
    }

    #[test]
    fn split_rejects_equal_distance() {
        let section = Section::new(StationId(1), StationId(2), dist(10)).unwrap();
        assert!(section.split_at(StationId(3), dist(10)).is_none());
    }

    #[test]
    fn split_rejects_excess_distance() {
        let section = Section::new(StationId(1), StationId(2), dist(10)).unwrap();
        assert!(section.split_at(StationId(3), dist(15)).is_none());
    }

    #[test]
    fn bridging_accumulates_distance() {
        let upstream = Section::new(StationId(1), StationId(2), dist(3)).unwrap();
        let downstream = Section::new(StationId(2), StationId(3), dist(7)).unwrap();
        let merged = Section::bridging(&upstream, &downstream);

        assert_eq!(merged.up(), StationId(1));
        assert_eq!(merged.down(), StationId(3));
        assert_eq!(merged.distance(), dist(10));
    }
}
