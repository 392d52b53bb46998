//! Bootstrap ensemble of regression trees with a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::tree::RegressionTree;

/// Training configuration. The seed is a fixed constant, never entropy:
/// two fits on identical data must be bit-identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestConfig {
    pub trees: usize,
    pub seed: u64,
    pub min_leaf: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            trees: 150,
            seed: 42,
            min_leaf: 1,
        }
    }
}

pub struct ForestRegressor {
    trees: Vec<RegressionTree>,
}

impl ForestRegressor {
    /// Train one tree per bootstrap resample of the (x, y) pairs. Each
    /// tree draws its sample from an RNG seeded by the base seed and the
    /// tree index, so the ensemble is reproducible tree by tree.
    pub fn fit(xs: &[f64], ys: &[f64], config: &ForestConfig) -> Self {
        let n = xs.len();
        let trees = (0..config.trees)
            .map(|index| {
                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
                let mut bx = Vec::with_capacity(n);
                let mut by = Vec::with_capacity(n);
                for _ in 0..n {
                    let pick = rng.gen_range(0..n);
                    bx.push(xs[pick]);
                    by.push(ys[pick]);
                }
                RegressionTree::fit(&bx, &by, config.min_leaf)
            })
            .collect();
        Self { trees }
    }

    /// Ensemble prediction: mean of the individual tree outputs.
    pub fn predict(&self, x: f64) -> f64 {
        let sum: f64 = self.trees.iter().map(|tree| tree.predict(x)).sum();
        sum / self.trees.len() as f64
    }
}
