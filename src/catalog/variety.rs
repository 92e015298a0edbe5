use std::collections::BTreeMap;

use crate::compositor::input::NaviCueBundle;

/// Pairwise collision statistics over the `(scene, entry pattern, interaction shape)` triple.
///
/// Two specimens collide when all three fields match. `collision_ratio` is the share of
/// unordered specimen pairs that collide, i.e. the empirical probability that two specimens
/// drawn from the set look alike on first glance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VarietyReport {
    /// Number of bundles examined.
    pub specimens: usize,
    /// Number of distinct triples.
    pub distinct_triples: usize,
    /// Size of the most populated triple bucket.
    pub largest_bucket: usize,
    /// Unordered pairs sharing a triple.
    pub colliding_pairs: u64,
    /// `colliding_pairs / total_pairs`, `0` when fewer than two specimens.
    pub collision_ratio: f64,
}

impl VarietyReport {
    /// Tally `bundles`.
    pub fn from_bundles<'a>(bundles: impl IntoIterator<Item = &'a NaviCueBundle>) -> Self {
        let mut buckets = BTreeMap::new();
        let mut specimens = 0usize;
        for b in bundles {
            *buckets.entry(b.variety_key()).or_insert(0u64) += 1;
            specimens += 1;
        }

        let colliding_pairs: u64 = buckets.values().map(|&k| k * k.saturating_sub(1) / 2).sum();
        let n = specimens as u64;
        let total_pairs = n * n.saturating_sub(1) / 2;
        let collision_ratio = if total_pairs == 0 {
            0.0
        } else {
            colliding_pairs as f64 / total_pairs as f64
        };

        Self {
            specimens,
            distinct_triples: buckets.len(),
            largest_bucket: buckets.values().copied().max().unwrap_or(0) as usize,
            colliding_pairs,
            collision_ratio,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/variety.rs"]
mod tests;
