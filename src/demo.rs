//! Randomized score source driving the live demo.
//!
//! Each tick draws an independent uniform score per category; there is no
//! smoothing between ticks.

use std::time::Duration;

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::api::RadarChart;
use crate::render::Renderer;

pub const DEMO_UPDATE_INTERVAL: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct ScoreFeed {
    rng: StdRng,
}

impl Default for ScoreFeed {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ScoreFeed {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic feed for reproducible runs and tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One fresh score in `[0, 1)` per label.
    pub fn next_scores(&mut self, labels: &[String]) -> IndexMap<String, f64> {
        labels
            .iter()
            .map(|label| (label.clone(), self.rng.gen_range(0.0..1.0)))
            .collect()
    }

    /// Pushes a fresh batch of scores into `chart`.
    pub fn tick<R: Renderer>(&mut self, chart: &mut RadarChart<R>) {
        let scores = self.next_scores(chart.labels());
        let applied = chart.set_scores(scores);
        trace!(applied, "demo feed pushed scores");
    }
}
