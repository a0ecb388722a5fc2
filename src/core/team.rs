//! Team identification and per-team data storage.
//!
//! ## TeamSlot
//!
//! A match always has exactly two team slots, `A` and `B`. Slot `A` plays
//! the first turn.
//!
//! ## TeamMap
//!
//! Per-team data backed by a fixed array, indexable by `TeamSlot`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two team slots in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamSlot {
    A,
    B,
}

impl TeamSlot {
    /// Both slots in turn order.
    pub const ALL: [TeamSlot; 2] = [TeamSlot::A, TeamSlot::B];

    /// The slot that plays after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            TeamSlot::A => TeamSlot::B,
            TeamSlot::B => TeamSlot::A,
        }
    }

    /// Raw slot index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamSlot::A => 0,
            TeamSlot::B => 1,
        }
    }
}

impl std::fmt::Display for TeamSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSlot::A => write!(f, "Team A"),
            TeamSlot::B => write!(f, "Team B"),
        }
    }
}

/// Per-team data storage.
///
/// ## Example
///
/// ```
/// use charades_engine::core::{TeamMap, TeamSlot};
///
/// let mut scores: TeamMap<u32> = TeamMap::with_value(0);
/// scores[TeamSlot::B] += 3;
///
/// assert_eq!(scores[TeamSlot::A], 0);
/// assert_eq!(scores[TeamSlot::B], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(TeamSlot) -> T) -> Self {
        Self {
            data: [factory(TeamSlot::A), factory(TeamSlot::B)],
        }
    }

    /// Create a map from explicit values for A and B.
    pub fn from_pair(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamSlot) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamSlot) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamSlot, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamSlot, &T)> {
        TeamSlot::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (TeamSlot, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TeamSlot, &mut T)> {
        TeamSlot::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for TeamMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<TeamSlot> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamSlot) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamSlot> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamSlot) -> &mut Self::Output {
        self.get_mut(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_slot_basics() {
        assert_eq!(TeamSlot::A.other(), TeamSlot::B);
        assert_eq!(TeamSlot::B.other(), TeamSlot::A);
        assert_eq!(TeamSlot::A.index(), 0);
        assert_eq!(TeamSlot::B.index(), 1);
        assert_eq!(format!("{}", TeamSlot::B), "Team B");
    }

    #[test]
    fn test_team_map_new() {
        let map: TeamMap<usize> = TeamMap::new(|t| t.index() * 10);

        assert_eq!(map[TeamSlot::A], 0);
        assert_eq!(map[TeamSlot::B], 10);
    }

    #[test]
    fn test_team_map_mutation() {
        let mut map: TeamMap<u32> = TeamMap::default();

        map[TeamSlot::A] = 10;
        *map.get_mut(TeamSlot::B) += 4;

        assert_eq!(map[TeamSlot::A], 10);
        assert_eq!(map[TeamSlot::B], 4);
    }

    #[test]
    fn test_team_map_iter() {
        let map = TeamMap::from_pair("red", "blue");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(TeamSlot::A, &"red"), (TeamSlot::B, &"blue")]);
    }

    #[test]
    fn test_team_map_iter_mut() {
        let mut map: TeamMap<u32> = TeamMap::with_value(1);
        for (_, v) in map.iter_mut() {
            *v += 1;
        }
        assert_eq!(map, TeamMap::with_value(2));
    }

    #[test]
    fn test_team_map_serialization() {
        let map = TeamMap::from_pair(3u32, 7u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: TeamMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
