use crate::aspects::types::{AspectDefinition, AspectTable};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Chart configuration.
///
/// Every field has a default, so a TOML file only needs the values it overrides:
///
/// ```toml
/// chart_radius = 400.0
/// collision_threshold_degrees = 6.0
///
/// [[aspects]]
/// name = "conjunction"
/// exact_angle = 0.0
/// orb = 10.0
/// ```
///
/// Supplying `aspects` replaces the whole default table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Outer ring radius in pixels
    pub chart_radius: f64,
    /// Inner ring radius as a fraction of `chart_radius`
    pub inner_radius_ratio: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Where the Ascendant (cusp 1) points, counter-clockwise from the +x axis.
    /// 180 puts it on the left, which is the usual way charts are drawn.
    pub rotation_degrees: f64,
    pub collision_threshold_degrees: f64,
    /// Widest arc a single cluster may spread over before spilling onto overflow rings
    pub max_cluster_arc_degrees: f64,
    /// Radius step between overflow rings, as a fraction of `chart_radius`
    pub overflow_tier_spacing: f64,
    pub aspects: AspectTable,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_radius: 300.0,
            inner_radius_ratio: 0.5,
            center_x: 0.0,
            center_y: 0.0,
            rotation_degrees: 180.0,
            collision_threshold_degrees: 5.0,
            max_cluster_arc_degrees: 30.0,
            overflow_tier_spacing: 0.1,
            aspects: AspectTable::default(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded chart config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.chart_radius.is_finite() && self.chart_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "chart_radius must be a positive number, got: {}",
                self.chart_radius
            )));
        }
        if !(self.inner_radius_ratio > 0.0 && self.inner_radius_ratio < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "inner_radius_ratio must be between 0 and 1, got: {}",
                self.inner_radius_ratio
            )));
        }
        for (name, value) in [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("rotation_degrees", self.rotation_degrees),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{} must be finite", name)));
            }
        }
        if !(self.collision_threshold_degrees.is_finite() && self.collision_threshold_degrees >= 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "collision_threshold_degrees must be >= 0, got: {}",
                self.collision_threshold_degrees
            )));
        }
        if !(0.0..=360.0).contains(&self.max_cluster_arc_degrees) {
            return Err(ConfigError::Invalid(format!(
                "max_cluster_arc_degrees must be between 0 and 360, got: {}",
                self.max_cluster_arc_degrees
            )));
        }
        if !(self.overflow_tier_spacing.is_finite() && self.overflow_tier_spacing > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "overflow_tier_spacing must be a positive number, got: {}",
                self.overflow_tier_spacing
            )));
        }
        for (index, aspect) in self.aspects.iter().enumerate() {
            validate_aspect_definition(aspect, index)?;
        }
        Ok(())
    }
}

fn validate_aspect_definition(aspect: &AspectDefinition, index: usize) -> Result<(), ConfigError> {
    if aspect.name.trim().is_empty() {
        return Err(ConfigError::Invalid(format!(
            "aspects[{}].name must be a non-empty string",
            index
        )));
    }
    if !(0.0..=180.0).contains(&aspect.exact_angle) {
        return Err(ConfigError::Invalid(format!(
            "aspects[{}].exact_angle must be between 0 and 180, got: {}",
            index, aspect.exact_angle
        )));
    }
    if !(aspect.orb.is_finite() && aspect.orb >= 0.0) {
        return Err(ConfigError::Invalid(format!(
            "aspects[{}].orb must be >= 0, got: {}",
            index, aspect.orb
        )));
    }
    Ok(())
}
