use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A named aspect: exact angle plus the orb allowed around it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    /// Aspect type: "conjunction", "trine", etc.
    pub name: String,
    /// Exact angle for this aspect (0-180)
    pub exact_angle: f64,
    /// Maximum deviation from the exact angle
    pub orb: f64,
}

impl AspectDefinition {
    pub fn new(name: impl Into<String>, exact_angle: f64, orb: f64) -> Self {
        Self {
            name: name.into(),
            exact_angle,
            orb,
        }
    }
}

/// Ordered aspect table. Declaration order breaks ties between equally close matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AspectTable(Vec<AspectDefinition>);

impl AspectTable {
    pub fn new(definitions: Vec<AspectDefinition>) -> Self {
        Self(definitions)
    }
}

impl Default for AspectTable {
    fn default() -> Self {
        Self(vec![
            AspectDefinition::new("conjunction", 0.0, 8.0),
            AspectDefinition::new("sextile", 60.0, 4.0),
            AspectDefinition::new("square", 90.0, 6.0),
            AspectDefinition::new("trine", 120.0, 7.0),
            AspectDefinition::new("opposition", 180.0, 8.0),
        ])
    }
}

impl Deref for AspectTable {
    type Target = [AspectDefinition];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Reference to a planet in the input, by position and name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRef {
    pub index: usize,
    pub name: String,
}

/// Classified angular relationship between two planets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub from: PlanetRef,
    pub to: PlanetRef,
    pub aspect_type: String,
    pub exact_angle: f64,
    /// Shortest angular distance between the two longitudes (0-180)
    pub separation: f64,
    /// Deviation from the exact angle
    pub orb_delta: f64,
    /// Within 0.1 degrees of exact
    pub is_exact: bool,
    /// Whether the pair is moving toward exact. Only known when both planets have a speed.
    pub is_applying: Option<bool>,
}

/// Single-pair classification result, before planet references are attached
#[derive(Debug, Clone, PartialEq)]
pub struct AspectMatch {
    pub aspect_type: String,
    pub exact_angle: f64,
    pub separation: f64,
    pub orb_delta: f64,
}
