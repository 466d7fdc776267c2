use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A plotted body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    /// Zodiacal longitude in degrees (any finite value, wrapped by the engine)
    pub longitude: f64,
    /// Speed in longitude (degrees per day). Negative means retrograde.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl Planet {
    pub fn new(name: impl Into<String>, longitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            speed: None,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed.map_or(false, |s| s < 0.0)
    }
}

/// Input for one chart: planets plus the twelve house cusps (houses 1-12 in order)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub planets: Vec<Planet>,
    pub cusps: Vec<f64>,
}

impl ChartData {
    pub fn new(planets: Vec<Planet>, cusps: Vec<f64>) -> Self {
        Self { planets, cusps }
    }

    /// JSON shape the validator inspects.
    ///
    /// Non-finite floats become `null`, so they fail the numeric checks.
    pub fn to_candidate(&self) -> Value {
        let planets: Vec<Value> = self
            .planets
            .iter()
            .map(|p| match p.speed {
                Some(speed) => json!({ "name": p.name, "longitude": p.longitude, "speed": speed }),
                None => json!({ "name": p.name, "longitude": p.longitude }),
            })
            .collect();

        json!({
            "planets": planets,
            "cusps": self.cusps,
        })
    }

    /// Read a value that already passed validation
    pub(crate) fn deserialize_validated(value: &Value) -> Result<Self, ValidationError> {
        Self::deserialize(value).map_err(|e| {
            ValidationError::new(vec![format!("Chart data could not be read: {}", e)])
        })
    }
}
