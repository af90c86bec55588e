use std::fmt;

use serde::{Deserialize, Serialize};

/// A cardinal facade orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// Every facade orientation, in the order contributions are summed.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::North => "north",
            Orientation::South => "south",
            Orientation::East => "east",
            Orientation::West => "west",
        };
        f.write_str(name)
    }
}

/// One value per facade orientation.
///
/// A building always has exactly the four keys north, south, east, and
/// west; a subset is unrepresentable. Serializes as
/// `{"north": .., "south": .., "east": .., "west": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Compass<T> {
    pub north: T,
    pub south: T,
    pub east: T,
    pub west: T,
}

impl<T> Compass<T> {
    /// Returns the value for the given orientation.
    pub fn get(&self, orientation: Orientation) -> &T {
        match orientation {
            Orientation::North => &self.north,
            Orientation::South => &self.south,
            Orientation::East => &self.east,
            Orientation::West => &self.west,
        }
    }

    /// Builds a `Compass` with the same value on every orientation.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            north: value.clone(),
            south: value.clone(),
            east: value.clone(),
            west: value,
        }
    }

    /// Iterates over `(orientation, value)` pairs in [`Orientation::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Orientation, &T)> {
        Orientation::ALL
            .iter()
            .map(move |&orientation| (orientation, self.get(orientation)))
    }
}
