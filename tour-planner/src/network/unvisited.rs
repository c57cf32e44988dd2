//! Set of stations still to be placed in an itinerary.

use std::collections::BTreeSet;

use crate::domain::StationId;

/// The stations a search branch has not visited yet.
///
/// Stations are held by ID, so two handles to the same logical station
/// can never both be present. The set has value semantics: `clone`,
/// [`union`](Self::union) and [`difference`](Self::difference) always
/// produce an independent set, and iteration is in ascending station ID.
///
/// # Examples
///
/// ```
/// use tour_planner::domain::StationId;
/// use tour_planner::network::UnvisitedSet;
///
/// let mut set: UnvisitedSet = [3, 1, 2].map(StationId::new).into_iter().collect();
/// set.remove(StationId::new(2));
/// assert_eq!(set.to_list(), vec![StationId::new(1), StationId::new(3)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnvisitedSet {
    stations: BTreeSet<StationId>,
}

impl UnvisitedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the station is in the set.
    pub fn contains(&self, station: StationId) -> bool {
        self.stations.contains(&station)
    }

    /// Add a station. Returns false if it was already present.
    pub fn insert(&mut self, station: StationId) -> bool {
        self.stations.insert(station)
    }

    /// Remove a station. Returns false (and does nothing) if it was absent.
    pub fn remove(&mut self, station: StationId) -> bool {
        self.stations.remove(&station)
    }

    /// Returns a new set holding the stations of both sets.
    pub fn union(&self, other: &UnvisitedSet) -> UnvisitedSet {
        Self {
            stations: self.stations.union(&other.stations).copied().collect(),
        }
    }

    /// Returns a new set holding the stations of `self` not in `other`.
    pub fn difference(&self, other: &UnvisitedSet) -> UnvisitedSet {
        Self {
            stations: self.stations.difference(&other.stations).copied().collect(),
        }
    }

    /// Snapshot of the stations in ascending ID order.
    ///
    /// The snapshot is detached from the set, so the set may be mutated
    /// while walking it.
    pub fn to_list(&self) -> Vec<StationId> {
        self.stations.iter().copied().collect()
    }

    /// Returns the number of stations in the set.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no stations remain.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl FromIterator<StationId> for UnvisitedSet {
    fn from_iter<I: IntoIterator<Item = StationId>>(iter: I) -> Self {
        Self {
            stations: iter.into_iter().collect(),
        }
    }
}
