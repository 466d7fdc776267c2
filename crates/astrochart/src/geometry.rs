//! Longitude to chart coordinate mapping.
//!
//! Chart angle 0 sits at the first house cusp (the Ascendant) and grows
//! counter-clockwise with longitude. Cartesian output uses a y-up frame:
//! `x = cx + r·cos θ`, `y = cy + r·sin θ`, where `θ` is the chart angle plus the
//! configured rotation.

use crate::config::ChartConfig;
use serde::{Deserialize, Serialize};

/// Point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Ring a point is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusTier {
    /// House cusps and aspect lines
    Inner,
    /// Planet glyphs
    Outer,
    /// Extra rings outside the chart for clusters too dense to fit on `Outer`
    Overflow(u8),
}

/// Map any finite angle into [0, 360)
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Angle of `longitude` relative to the first cusp, in [0, 360)
pub fn relative_angle(longitude: f64, cusp_zero: f64) -> f64 {
    normalize_degrees(longitude - cusp_zero)
}

/// Zodiac signs in ecliptic order, 30 degrees each starting at 0° Aries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign containing `longitude`
    pub fn from_longitude(longitude: f64) -> Self {
        let index = (normalize_degrees(longitude) / 30.0).floor() as usize;
        Self::ALL[index.min(11)]
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }
}

/// Position within the sign (0-30)
pub fn sign_degree(longitude: f64) -> f64 {
    normalize_degrees(longitude) % 30.0
}

/// House number (1-12) containing `longitude`.
///
/// Cusps are read in house order; a cusp smaller than its predecessor marks the
/// wrap through 0° Aries. Falls back to house 1 when the cusps are out of order.
pub fn house_of(longitude: f64, cusps: &[f64]) -> u8 {
    if cusps.is_empty() {
        return 1;
    }
    let lon = normalize_degrees(longitude);

    for i in 0..cusps.len() {
        let current = normalize_degrees(cusps[i]);
        let next = normalize_degrees(cusps[(i + 1) % cusps.len()]);

        let inside = if next < current {
            lon >= current || lon < next
        } else {
            lon >= current && lon < next
        };
        if inside {
            return (i + 1) as u8;
        }
    }

    1
}

/// Polar-to-Cartesian mapping for one chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryEngine {
    center: Point,
    radius: f64,
    inner_radius_ratio: f64,
    rotation_degrees: f64,
    overflow_tier_spacing: f64,
}

impl GeometryEngine {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            center: Point {
                x: config.center_x,
                y: config.center_y,
            },
            radius: config.chart_radius,
            inner_radius_ratio: config.inner_radius_ratio,
            rotation_degrees: config.rotation_degrees,
            overflow_tier_spacing: config.overflow_tier_spacing,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of a ring in pixels
    pub fn radius_for(&self, tier: RadiusTier) -> f64 {
        match tier {
            RadiusTier::Inner => self.radius * self.inner_radius_ratio,
            RadiusTier::Outer => self.radius,
            RadiusTier::Overflow(level) => {
                self.radius * (1.0 + f64::from(level) * self.overflow_tier_spacing)
            }
        }
    }

    /// Chart-relative angle of a cusp
    pub fn cusp_angle(&self, cusp_longitude: f64, cusp_zero: f64) -> f64 {
        relative_angle(cusp_longitude, cusp_zero)
    }

    /// Point for a longitude on the given ring
    pub fn to_point(&self, longitude: f64, tier: RadiusTier, cusp_zero: f64) -> Point {
        self.point_at(relative_angle(longitude, cusp_zero), tier)
    }

    /// Point for an already chart-relative angle on the given ring
    pub fn point_at(&self, angle: f64, tier: RadiusTier) -> Point {
        self.point_at_radius(angle, self.radius_for(tier))
    }

    pub fn point_at_radius(&self, angle: f64, radius: f64) -> Point {
        let angle_rad = (angle + self.rotation_degrees).to_radians();
        Point {
            x: self.center.x + radius * angle_rad.cos(),
            y: self.center.y + radius * angle_rad.sin(),
        }
    }
}
