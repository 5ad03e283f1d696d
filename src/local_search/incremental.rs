//! Incremental swap search over a privately cached distance matrix.

use std::sync::Arc;

use super::exchange::SearchVariant;
use super::swap_cache::SwapCache;
use crate::eval::{CostModel, DistanceMatrix};
use crate::grasp::LocalSearch;
use crate::solution::Solution;

/// Swap local search priced through a [`SwapCache`] instead of full
/// re-evaluations.
///
/// Explores the same (candidate-in, candidate-out) neighborhood as
/// [`ExchangeSearch`](super::ExchangeSearch) in the same scan order and
/// with the same acceptance epsilon, but each pair costs O(points served
/// by the outgoing medoid) instead of O(n·k). Given the same input the
/// two must converge to the same cost; that equivalence is the search's
/// correctness argument and is pinned by tests.
///
/// The strategy holds its own handle to the distance matrix — the engine
/// never sees it — and must be given the same matrix its cost model
/// evaluates against. Solutions with fewer than two elements are left
/// untouched (the loss table needs a second-nearest medoid to exist).
pub struct IncrementalSwapSearch {
    pub variant: SearchVariant,

    /// Minimum magnitude for a delta to count as improving.
    pub epsilon: f64,

    matrix: Arc<DistanceMatrix>,
}

impl IncrementalSwapSearch {
    pub fn new(variant: SearchVariant, matrix: Arc<DistanceMatrix>) -> Self {
        Self {
            variant,
            epsilon: 1e-12,
            matrix,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Best improving pair under the cache, or `None` at a local optimum.
    fn scan(&self, cache: &SwapCache<'_>, sol: &Solution) -> Option<(usize, usize)> {
        let n = self.matrix.len() as f64;
        let mut best: Option<(usize, usize)> = None;
        let mut best_delta = 0.0;

        for fi in 0..self.matrix.len() {
            if sol.contains(fi) {
                continue;
            }
            for &fr in sol.iter() {
                let delta = -cache.swap_profit(fi, fr) / n;
                if delta < best_delta - self.epsilon {
                    best = Some((fi, fr));
                    best_delta = delta;
                    if self.variant == SearchVariant::FirstImproving {
                        return best;
                    }
                }
            }
        }

        best
    }
}

impl<M: CostModel> LocalSearch<M> for IncrementalSwapSearch {
    fn name(&self) -> &str {
        match self.variant {
            SearchVariant::BestImproving => "incremental-swap-best",
            SearchVariant::FirstImproving => "incremental-swap-first",
        }
    }

    fn improve(&self, _model: &M, solution: &mut Solution) {
        if solution.len() < 2 {
            return;
        }

        let mut cache = SwapCache::build(&self.matrix, solution);
        solution.cost = cache.cost();

        while let Some((fi, fr)) = self.scan(&cache, solution) {
            cache.apply_swap(fi, fr, solution);
            solution.cost = cache.cost();
        }
    }
}
