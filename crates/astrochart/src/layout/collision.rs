use crate::config::ChartConfig;
use crate::geometry::{normalize_degrees, RadiusTier};
use serde::{Deserialize, Serialize};

/// Where a planet's glyph goes after collision resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub display_angle: f64,
    pub tier: RadiusTier,
}

/// Run of planets closer together than the threshold.
///
/// Angles are unwrapped (may exceed 360) so they stay increasing across 0°.
#[derive(Debug, Clone)]
struct Cluster {
    /// (input index, unwrapped true angle), sorted by angle then input index
    members: Vec<(usize, f64)>,
}

impl Cluster {
    fn centroid(&self) -> f64 {
        let sum: f64 = self.members.iter().map(|(_, angle)| angle).sum();
        sum / self.members.len() as f64
    }

    /// Angular range the cluster occupies on the outer ring once spread
    fn span(&self, slots: usize, spacing: f64) -> (f64, f64) {
        if self.members.len() == 1 {
            let angle = self.members[0].1;
            return (angle, angle);
        }
        let on_ring = self.members.len().min(slots);
        let half = (on_ring - 1) as f64 * spacing / 2.0;
        let centroid = self.centroid();
        (centroid - half, centroid + half)
    }
}

/// Spreads glyphs of nearly coincident planets apart.
///
/// Only display angles move; true angles are left alone for aspect work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResolver {
    threshold: f64,
    max_arc: f64,
}

impl CollisionResolver {
    pub fn new(threshold_degrees: f64, max_cluster_arc_degrees: f64) -> Self {
        Self {
            threshold: threshold_degrees,
            max_arc: max_cluster_arc_degrees.clamp(0.0, 360.0),
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(
            config.collision_threshold_degrees,
            config.max_cluster_arc_degrees,
        )
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// How many glyphs one cluster may place on a single ring
    pub fn slots_per_ring(&self) -> usize {
        if !(self.threshold > 0.0) {
            return usize::MAX;
        }
        // The cast saturates for tiny thresholds, so the increment must too
        let by_arc = ((self.max_arc / self.threshold).floor() as usize).saturating_add(1);
        // Keep the first and last slot at least one threshold apart around the circle
        let by_circle = (360.0 / self.threshold).floor() as usize;
        by_arc.min(by_circle).max(1)
    }

    /// Compute placements for the given true angles, returned in input order.
    ///
    /// Output depends only on the threshold, the arc limit and the input sequence;
    /// equal angles keep their input order.
    pub fn resolve(&self, true_angles: &[f64]) -> Vec<Placement> {
        let mut placements: Vec<Placement> = true_angles
            .iter()
            .map(|&angle| Placement {
                display_angle: angle,
                tier: RadiusTier::Outer,
            })
            .collect();

        if true_angles.len() < 2 || !(self.threshold > 0.0) {
            return placements;
        }

        let slots = self.slots_per_ring();
        let clusters = self.merge_overlapping(self.find_clusters(true_angles), slots);

        for cluster in clusters.iter().filter(|c| c.members.len() > 1) {
            let centroid = cluster.centroid();
            log::debug!(
                "Spreading cluster of {} planets around {:.2}°",
                cluster.members.len(),
                normalize_degrees(centroid)
            );

            for (chunk_index, chunk) in cluster.members.chunks(slots).enumerate() {
                let tier = if chunk_index == 0 {
                    RadiusTier::Outer
                } else {
                    RadiusTier::Overflow(u8::try_from(chunk_index).unwrap_or(u8::MAX))
                };
                let middle = (chunk.len() - 1) as f64 / 2.0;
                for (position, (index, _)) in chunk.iter().enumerate() {
                    placements[*index] = Placement {
                        display_angle: normalize_degrees(
                            centroid + (position as f64 - middle) * self.threshold,
                        ),
                        tier,
                    };
                }
            }
        }

        placements
    }

    /// Group sorted angles into maximal runs with gaps below the threshold.
    ///
    /// The scan starts right after the widest gap, so a run crossing 0° is not split.
    fn find_clusters(&self, true_angles: &[f64]) -> Vec<Cluster> {
        let n = true_angles.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| true_angles[a].total_cmp(&true_angles[b]));
        let sorted: Vec<f64> = order.iter().map(|&i| true_angles[i]).collect();

        let gap_after = |k: usize| {
            if k + 1 < n {
                sorted[k + 1] - sorted[k]
            } else {
                sorted[0] + 360.0 - sorted[n - 1]
            }
        };
        let mut widest = 0;
        for k in 1..n {
            if gap_after(k) > gap_after(widest) {
                widest = k;
            }
        }
        let start = (widest + 1) % n;

        let mut clusters: Vec<Cluster> = Vec::new();
        let mut previous: Option<f64> = None;
        for step in 0..n {
            let pos = (start + step) % n;
            let angle = if pos < start {
                sorted[pos] + 360.0
            } else {
                sorted[pos]
            };
            let member = (order[pos], angle);

            let joins = previous.map_or(false, |prev| angle - prev < self.threshold);
            match clusters.last_mut() {
                Some(last) if joins => last.members.push(member),
                _ => clusters.push(Cluster {
                    members: vec![member],
                }),
            }
            previous = Some(angle);
        }

        clusters
    }

    /// Merge neighbouring clusters whose spread ranges come too close, until stable.
    fn merge_overlapping(&self, mut clusters: Vec<Cluster>, slots: usize) -> Vec<Cluster> {
        while clusters.len() > 1 {
            let mut merged = false;

            for i in 0..clusters.len() - 1 {
                let (_, high) = clusters[i].span(slots, self.threshold);
                let (low, _) = clusters[i + 1].span(slots, self.threshold);
                if low - high < self.threshold {
                    let next = clusters.remove(i + 1);
                    clusters[i].members.extend(next.members);
                    merged = true;
                    break;
                }
            }

            if !merged {
                let last = clusters.len() - 1;
                let (_, high) = clusters[last].span(slots, self.threshold);
                let (low, _) = clusters[0].span(slots, self.threshold);
                if low + 360.0 - high < self.threshold {
                    let first = clusters.remove(0);
                    let last = clusters.len() - 1;
                    clusters[last]
                        .members
                        .extend(first.members.into_iter().map(|(i, a)| (i, a + 360.0)));
                    merged = true;
                }
            }

            if !merged {
                break;
            }
            log::debug!("Merged neighbouring clusters, {} remain", clusters.len());
        }

        clusters
    }
}
