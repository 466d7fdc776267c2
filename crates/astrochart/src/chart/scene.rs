use crate::aspects::types::Aspect;
use crate::geometry::{Point, RadiusTier, ZodiacSign};
use serde::Serialize;

/// A planet as it should be drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPoint {
    /// Position of the planet in the input sequence
    pub index: usize,
    pub name: String,
    pub longitude: f64,
    /// Chart-relative angle of the actual longitude
    pub true_angle: f64,
    /// Angle the glyph is drawn at after collision resolution
    pub display_angle: f64,
    pub tier: RadiusTier,
    /// Glyph location
    pub position: Point,
    /// True location on the outer ring, for a leader line to the glyph
    pub anchor: Point,
    pub retrograde: bool,
    pub sign: ZodiacSign,
    pub sign_degree: f64,
    /// House number (1-12)
    pub house: u8,
}

/// House boundary line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuspRay {
    /// House number (1-12)
    pub house: u8,
    pub longitude: f64,
    /// Chart-relative angle
    pub angle: f64,
    pub start: Point,
    pub end: Point,
}

/// Line joining two aspected planets inside the inner ring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectLine {
    pub aspect_type: String,
    pub from_index: usize,
    pub to_index: usize,
    pub from: Point,
    pub to: Point,
}

/// Everything a renderer needs for one chart. Built once per render, read-only after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScene {
    placed_points: Vec<PlacedPoint>,
    cusp_rays: Vec<CuspRay>,
    aspects: Vec<Aspect>,
    aspect_lines: Vec<AspectLine>,
}

impl ChartScene {
    pub(crate) fn new(
        placed_points: Vec<PlacedPoint>,
        cusp_rays: Vec<CuspRay>,
        aspects: Vec<Aspect>,
        aspect_lines: Vec<AspectLine>,
    ) -> Self {
        Self {
            placed_points,
            cusp_rays,
            aspects,
            aspect_lines,
        }
    }

    pub fn placed_points(&self) -> &[PlacedPoint] {
        &self.placed_points
    }

    pub fn cusp_rays(&self) -> &[CuspRay] {
        &self.cusp_rays
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn aspect_lines(&self) -> &[AspectLine] {
        &self.aspect_lines
    }
}
