//! Geometry and aspect engine for circular astrological charts.
//!
//! Takes planet longitudes and twelve house cusps, checks the input shape, maps
//! everything onto the chart circle, spreads crowded glyphs apart and classifies the
//! aspects between planets. The result is a [`ChartScene`] for an external renderer.

pub mod aspects;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod validation;

pub use aspects::{Aspect, AspectCalculator, AspectDefinition, AspectTable};
pub use chart::{ChartController, ChartData, ChartScene, Planet};
pub use config::ChartConfig;
pub use error::{ConfigError, ValidationError};
pub use validation::{DataValidator, ValidationObserver, ValidationResult};

use serde_json::Value;

/// Entry point bundling chart rendering and standalone aspect calculation
#[derive(Debug, Clone, Default)]
pub struct AstroChart {
    controller: ChartController,
}

impl AstroChart {
    /// Build from a configuration, rejecting invalid values
    pub fn new(config: ChartConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: ChartController::new(config)?,
        })
    }

    /// Attach a validator, e.g. one carrying a [`ValidationObserver`]
    pub fn with_validator(self, validator: DataValidator) -> Self {
        Self {
            controller: self.controller.with_validator(validator),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        self.controller.config()
    }

    pub fn validate(&self, data: &Value) -> ValidationResult {
        self.controller.validate(data)
    }

    pub fn render(&self, data: &ChartData) -> Result<ChartScene, ValidationError> {
        self.controller.render(data)
    }

    pub fn render_json(&self, data: &Value) -> Result<ChartScene, ValidationError> {
        self.controller.render_json(data)
    }

    /// Aspects between the given planets, using the configured orb table
    pub fn compute_aspects(&self, planets: &[Planet]) -> Vec<Aspect> {
        self.controller.calculator().compute_aspects(planets)
    }
}
