use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{Compass, Extent, Ratio};

/// Opaque identifier for a stored building design.
///
/// Assigned by the store at creation and immutable afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DesignId(Uuid);

impl DesignId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DesignId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DesignId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Width and height of one facade, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacadeDims {
    pub width: Extent,
    pub height: Extent,
}

impl FacadeDims {
    /// The facade's full wall area in square meters.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Width and height of a roof skylight, in meters.
///
/// A design without a skylight omits this entirely; a skylight that is
/// present always has strictly positive extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkylightDims {
    pub width: Extent,
    pub height: Extent,
}

impl SkylightDims {
    /// The skylight's glazed area in square meters.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A validated request to create or fully replace a building design.
///
/// Deserializing a `DesignSpec` already enforces the numeric invariants
/// (positive extents, ratios in `[0, 1]`, all four orientations present);
/// [`validate`](DesignSpec::validate) covers what serde cannot express.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSpec {
    pub name: String,
    pub dimensions: Compass<FacadeDims>,
    pub wwr: Compass<Ratio>,
    pub shgc: Ratio,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skylight: Option<SkylightDims>,
}

impl DesignSpec {
    /// Checks the constraints deserialization cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::EmptyName`] if the name is empty or only
    /// whitespace.
    pub fn validate(&self) -> Result<(), DesignError> {
        if self.name.trim().is_empty() {
            return Err(DesignError::EmptyName);
        }
        Ok(())
    }
}

/// Errors from validating a [`DesignSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    /// The design name was empty or only whitespace.
    #[error("design name must not be empty")]
    EmptyName,
}

/// A stored building design.
///
/// The id and timestamps are owned by the store: `created_at` is set once,
/// `updated_at` changes on every full-field update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDesign {
    pub id: DesignId,
    pub name: String,
    pub dimensions: Compass<FacadeDims>,
    pub wwr: Compass<Ratio>,
    pub shgc: Ratio,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skylight: Option<SkylightDims>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_json() -> serde_json::Value {
        serde_json::json!({
            "name": "Glass box",
            "dimensions": {
                "north": {"width": 2.0, "height": 1.5},
                "south": {"width": 2.0, "height": 1.5},
                "east":  {"width": 2.0, "height": 1.5},
                "west":  {"width": 2.0, "height": 1.5}
            },
            "wwr": {"north": 0.4, "south": 0.4, "east": 0.4, "west": 0.4},
            "shgc": 0.5
        })
    }

    #[test]
    fn deserializes_a_well_formed_spec() {
        let spec: DesignSpec = serde_json::from_value(spec_json()).unwrap();

        assert_eq!(spec.name, "Glass box");
        assert_eq!(spec.dimensions.north.area(), 3.0);
        assert_eq!(spec.wwr.east.get(), 0.4);
        assert_eq!(spec.shgc.get(), 0.5);
        assert!(spec.skylight.is_none());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn rejects_a_missing_orientation() {
        let mut json = spec_json();
        json["dimensions"]
            .as_object_mut()
            .unwrap()
            .remove("west")
            .unwrap();

        assert!(serde_json::from_value::<DesignSpec>(json).is_err());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut json = spec_json();
        json["dimensions"]["south"]["height"] = serde_json::json!(0.0);

        assert!(serde_json::from_value::<DesignSpec>(json).is_err());
    }

    #[test]
    fn rejects_wwr_above_one() {
        let mut json = spec_json();
        json["wwr"]["north"] = serde_json::json!(1.2);

        assert!(serde_json::from_value::<DesignSpec>(json).is_err());
    }

    #[test]
    fn validate_rejects_a_blank_name() {
        let mut spec: DesignSpec = serde_json::from_value(spec_json()).unwrap();
        spec.name = "   ".to_owned();

        assert_eq!(spec.validate(), Err(DesignError::EmptyName));
    }

    #[test]
    fn accepts_an_optional_skylight() {
        let mut json = spec_json();
        json["skylight"] = serde_json::json!({"width": 1.0, "height": 0.5});

        let spec: DesignSpec = serde_json::from_value(json).unwrap();
        let skylight = spec.skylight.unwrap();
        assert!((skylight.area() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn design_id_round_trips_through_its_string_form() {
        let id = DesignId::new();
        let parsed: DesignId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
