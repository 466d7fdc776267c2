use super::data::ChartData;
use super::scene::{AspectLine, ChartScene, CuspRay, PlacedPoint};
use crate::aspects::AspectCalculator;
use crate::config::ChartConfig;
use crate::error::{ConfigError, ValidationError};
use crate::geometry::{house_of, relative_angle, sign_degree, GeometryEngine, RadiusTier, ZodiacSign};
use crate::layout::CollisionResolver;
use crate::validation::{DataValidator, ValidationResult};
use serde_json::Value;

/// Turns validated chart data into a [`ChartScene`].
///
/// Holds only configuration; every render works on fresh values, so one controller
/// can serve any number of callers.
#[derive(Debug, Clone)]
pub struct ChartController {
    config: ChartConfig,
    validator: DataValidator,
    geometry: GeometryEngine,
    resolver: CollisionResolver,
    calculator: AspectCalculator,
}

impl ChartController {
    /// Build from a configuration, rejecting invalid values
    pub fn new(config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: ChartConfig) -> Self {
        Self {
            validator: DataValidator::new(),
            geometry: GeometryEngine::new(&config),
            resolver: CollisionResolver::from_config(&config),
            calculator: AspectCalculator::with_table(config.aspects.clone()),
            config,
        }
    }

    /// Replace the validator, e.g. to attach an observer
    pub fn with_validator(mut self, validator: DataValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GeometryEngine {
        &self.geometry
    }

    pub fn calculator(&self) -> &AspectCalculator {
        &self.calculator
    }

    pub fn validate(&self, data: &Value) -> ValidationResult {
        self.validator.validate(data)
    }

    /// Render typed chart data
    pub fn render(&self, data: &ChartData) -> Result<ChartScene, ValidationError> {
        self.check(&data.to_candidate())?;
        Ok(self.build_scene(data))
    }

    /// Validate and render untyped (JSON) chart data
    pub fn render_json(&self, data: &Value) -> Result<ChartScene, ValidationError> {
        self.check(data)?;
        let chart = ChartData::deserialize_validated(data)?;
        Ok(self.build_scene(&chart))
    }

    fn check(&self, candidate: &Value) -> Result<(), ValidationError> {
        let result = self.validator.validate(candidate);
        if result.has_error {
            log::warn!("Chart rejected: {}", result.messages.join(" "));
            return Err(ValidationError::new(result.messages));
        }
        Ok(())
    }

    fn build_scene(&self, data: &ChartData) -> ChartScene {
        let cusp_zero = data.cusps[0];

        let true_angles: Vec<f64> = data
            .planets
            .iter()
            .map(|p| relative_angle(p.longitude, cusp_zero))
            .collect();
        let placements = self.resolver.resolve(&true_angles);

        let placed_points: Vec<PlacedPoint> = data
            .planets
            .iter()
            .zip(true_angles.iter().zip(&placements))
            .enumerate()
            .map(|(index, (planet, (&true_angle, placement)))| PlacedPoint {
                index,
                name: planet.name.clone(),
                longitude: planet.longitude,
                true_angle,
                display_angle: placement.display_angle,
                tier: placement.tier,
                position: self.geometry.point_at(placement.display_angle, placement.tier),
                anchor: self.geometry.point_at(true_angle, RadiusTier::Outer),
                retrograde: planet.is_retrograde(),
                sign: ZodiacSign::from_longitude(planet.longitude),
                sign_degree: sign_degree(planet.longitude),
                house: house_of(planet.longitude, &data.cusps),
            })
            .collect();

        let cusp_rays: Vec<CuspRay> = data
            .cusps
            .iter()
            .enumerate()
            .map(|(i, &longitude)| {
                let angle = self.geometry.cusp_angle(longitude, cusp_zero);
                CuspRay {
                    house: (i + 1) as u8,
                    longitude,
                    angle,
                    start: self.geometry.point_at(angle, RadiusTier::Inner),
                    end: self.geometry.point_at(angle, RadiusTier::Outer),
                }
            })
            .collect();

        let aspects = self.calculator.compute_aspects(&data.planets);

        let aspect_lines: Vec<AspectLine> = aspects
            .iter()
            .map(|aspect| AspectLine {
                aspect_type: aspect.aspect_type.clone(),
                from_index: aspect.from.index,
                to_index: aspect.to.index,
                from: self
                    .geometry
                    .point_at(true_angles[aspect.from.index], RadiusTier::Inner),
                to: self
                    .geometry
                    .point_at(true_angles[aspect.to.index], RadiusTier::Inner),
            })
            .collect();

        log::info!(
            "Rendered chart: {} planets, {} cusps, {} aspects",
            placed_points.len(),
            cusp_rays.len(),
            aspects.len()
        );

        ChartScene::new(placed_points, cusp_rays, aspects, aspect_lines)
    }
}

impl Default for ChartController {
    fn default() -> Self {
        Self::from_valid(ChartConfig::default())
    }
}
