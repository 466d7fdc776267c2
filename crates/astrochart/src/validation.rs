//! Structural validation of chart input.
//!
//! Validation is exhaustive: every rule runs and every failure is reported, so a caller
//! sees all problems in one pass. The one exception is an absent input, which stops
//! immediately.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub const MSG_DATA_NOT_SET: &str = "Data is not set";
pub const MSG_PLANETS_INVALID: &str = "Planets data is missing or invalid.";
pub const MSG_CUSPS_INVALID: &str = "Cusps data is missing or invalid.";
pub const MSG_CUSPS_COUNT: &str = "Cusps array must have exactly 12 elements.";

pub const CUSP_COUNT: usize = 12;

/// Outcome of a validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub has_error: bool,
    pub messages: Vec<String>,
}

impl ValidationResult {
    fn push(&mut self, message: impl Into<String>) {
        self.has_error = true;
        self.messages.push(message.into());
    }
}

/// Receives each validation message as it is produced
pub trait ValidationObserver: Send + Sync {
    fn on_message(&self, message: &str);

    fn on_complete(&self, _result: &ValidationResult) {}
}

/// Checks chart input shape before any geometry runs
#[derive(Clone, Default)]
pub struct DataValidator {
    observer: Option<Arc<dyn ValidationObserver>>,
}

impl std::fmt::Debug for DataValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataValidator")
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl DataValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Arc<dyn ValidationObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Validate a candidate chart value (typically parsed JSON)
    pub fn validate(&self, data: &Value) -> ValidationResult {
        let mut result = ValidationResult::default();

        if is_absent(data) {
            self.report(&mut result, MSG_DATA_NOT_SET.to_string());
            self.finish(&result);
            return result;
        }

        match data.get("planets").and_then(Value::as_array) {
            Some(planets) if !planets.is_empty() => {
                for (index, planet) in planets.iter().enumerate() {
                    if !is_valid_planet(planet) {
                        self.report(
                            &mut result,
                            format!(
                                "Planet at index {} must have a string name and a numeric longitude.",
                                index
                            ),
                        );
                    }
                }
            }
            _ => self.report(&mut result, MSG_PLANETS_INVALID.to_string()),
        }

        match data.get("cusps").and_then(Value::as_array) {
            None => self.report(&mut result, MSG_CUSPS_INVALID.to_string()),
            Some(cusps) if cusps.len() != CUSP_COUNT => {
                self.report(&mut result, MSG_CUSPS_COUNT.to_string())
            }
            Some(cusps) => {
                for (index, cusp) in cusps.iter().enumerate() {
                    if !is_finite_number(cusp) {
                        self.report(
                            &mut result,
                            format!("Cusp at index {} must be a finite number.", index),
                        );
                    }
                }
            }
        }

        self.finish(&result);
        result
    }

    fn report(&self, result: &mut ValidationResult, message: String) {
        log::debug!("Chart validation: {}", message);
        if let Some(observer) = &self.observer {
            observer.on_message(&message);
        }
        result.push(message);
    }

    fn finish(&self, result: &ValidationResult) {
        log::debug!(
            "Chart validation finished: has_error={}, {} message(s)",
            result.has_error,
            result.messages.len()
        );
        if let Some(observer) = &self.observer {
            observer.on_complete(result);
        }
    }
}

/// `null` and `{}` both count as "no data"
fn is_absent(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn is_finite_number(value: &Value) -> bool {
    value.as_f64().map_or(false, f64::is_finite)
}

fn is_valid_planet(planet: &Value) -> bool {
    let Some(obj) = planet.as_object() else {
        return false;
    };
    let name_ok = obj.get("name").map_or(false, Value::is_string);
    let longitude_ok = obj.get("longitude").map_or(false, is_finite_number);
    let speed_ok = match obj.get("speed") {
        None | Some(Value::Null) => true,
        Some(speed) => is_finite_number(speed),
    };
    name_ok && longitude_ok && speed_ok
}
