//! Section distance type.

use std::fmt;
use std::ops::Add;

/// Error returned when constructing an invalid distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance: {reason}")]
pub struct InvalidDistance {
    reason: &'static str,
}

/// A strictly positive distance between two adjacent stations.
///
/// Any `Distance` value is positive by construction, so the path algorithm
/// never has to re-check for zero.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let d = Distance::new(10).unwrap();
/// assert_eq!(d.get(), 10);
///
/// // Zero is rejected
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u64);

impl Distance {
    /// Construct a distance from raw units.
    ///
    /// The value must be strictly greater than zero.
    pub fn new(units: u64) -> Result<Self, InvalidDistance> {
        if units == 0 {
            return Err(InvalidDistance {
                reason: "must be greater than zero",
            });
        }
        Ok(Distance(units))
    }

    /// Returns the distance in raw units.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Subtract `other`, keeping the result strictly positive.
    ///
    /// Returns `None` when `other >= self`, which is exactly the case a
    /// section split must reject.
    pub fn minus(self, other: Distance) -> Option<Distance> {
        self.0
            .checked_sub(other.0)
            .and_then(|rest| Distance::new(rest).ok())
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        Distance(self.0 + other.0)
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
