use crate::aspects::types::{Aspect, AspectMatch, AspectTable, PlanetRef};
use crate::chart::data::Planet;

/// Orb below which an aspect is reported as exact
const EXACT_ORB: f64 = 0.1;

/// Look-ahead used to decide whether a pair is applying (days)
const APPLYING_TIME_STEP: f64 = 0.1;

/// Shortest angular distance between two longitudes, in [0, 180]
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    raw_diff.min(360.0 - raw_diff)
}

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    table: AspectTable,
}

impl AspectCalculator {
    /// Create a calculator with the default orb table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: AspectTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AspectTable {
        &self.table
    }

    /// Compute aspects between every unordered pair of planets.
    ///
    /// Pairs come out in enumeration order: outer loop over planets in input order,
    /// inner loop over the planets after it. Pairs matching no aspect are skipped.
    pub fn compute_aspects(&self, planets: &[Planet]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        if planets.len() < 2 {
            return aspects;
        }

        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                let p1 = &planets[i];
                let p2 = &planets[j];

                let Some(found) = self.calculate_aspect(p1.longitude, p2.longitude) else {
                    continue;
                };

                let is_applying = match (p1.speed, p2.speed) {
                    (Some(speed1), Some(speed2)) => Some(is_aspect_applying(
                        p1.longitude,
                        p2.longitude,
                        speed1,
                        speed2,
                        found.exact_angle,
                        found.separation,
                    )),
                    _ => None,
                };

                aspects.push(Aspect {
                    from: PlanetRef {
                        index: i,
                        name: p1.name.clone(),
                    },
                    to: PlanetRef {
                        index: j,
                        name: p2.name.clone(),
                    },
                    is_exact: found.orb_delta < EXACT_ORB,
                    aspect_type: found.aspect_type,
                    exact_angle: found.exact_angle,
                    separation: found.separation,
                    orb_delta: found.orb_delta,
                    is_applying,
                });
            }
        }

        log::debug!(
            "Found {} aspects among {} planets",
            aspects.len(),
            planets.len()
        );
        aspects
    }

    /// Classify the separation between two longitudes against the table.
    ///
    /// The closest match wins; equally close matches go to the earlier table entry.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<AspectMatch> {
        let separation = angular_separation(lon1, lon2);

        let mut best: Option<(usize, f64)> = None;
        for (index, definition) in self.table.iter().enumerate() {
            let deviation = (separation - definition.exact_angle).abs();
            if deviation > definition.orb {
                continue;
            }
            match best {
                Some((_, best_deviation)) if best_deviation <= deviation => {}
                _ => best = Some((index, deviation)),
            }
        }

        best.map(|(index, orb_delta)| {
            let definition = &self.table[index];
            AspectMatch {
                aspect_type: definition.name.clone(),
                exact_angle: definition.exact_angle,
                separation,
                orb_delta,
            }
        })
    }
}

/// Determine if an aspect is applying (approaching exact) or separating
fn is_aspect_applying(
    lon1: f64,
    lon2: f64,
    speed1: f64,
    speed2: f64,
    aspect_angle: f64,
    current_angle: f64,
) -> bool {
    // Relative speed in degrees per day
    let relative_speed = speed1 - speed2;

    // Without relative motion the separation is not closing
    if relative_speed.abs() < 0.01 {
        return false;
    }

    let signed_diff = wrap_signed(lon1 - lon2);
    let current_distance = (current_angle - aspect_angle).abs();

    let future_signed_diff = wrap_signed(signed_diff + relative_speed * APPLYING_TIME_STEP);
    let future_distance = (future_signed_diff.abs() - aspect_angle).abs();

    future_distance < current_distance
}

/// Wrap an angle difference into (-180, 180]
fn wrap_signed(diff: f64) -> f64 {
    let wrapped = diff.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
