//! Exchange neighborhood search through the cost-model contract.

use crate::construction::candidate_list;
use crate::eval::CostModel;
use crate::grasp::LocalSearch;
use crate::solution::Solution;

/// Acceptance rule for neighborhood scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchVariant {
    /// Scan the whole neighborhood, apply the most negative delta.
    BestImproving,
    /// Apply the first strictly improving move and rescan.
    FirstImproving,
}

/// Exchange local search over all (candidate-in, candidate-out) pairs.
///
/// Every pair is priced with [`CostModel::exchange_delta`], which makes
/// each round O(|solution| x |CL|) model calls with a full re-evaluation
/// behind each one. This is the slow, obviously-correct baseline the
/// incremental swap search is validated against.
///
/// The scan goes candidates-in ascending, then candidates-out in solution
/// order; a move is accepted only when its delta is strictly below
/// `-epsilon`, so floating-point noise cannot make the search oscillate.
/// Works on undersized solutions too, which is what the
/// periodic-improvement construction runs it on.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeSearch {
    pub variant: SearchVariant,

    /// Minimum magnitude for a delta to count as improving.
    pub epsilon: f64,
}

impl ExchangeSearch {
    pub fn new(variant: SearchVariant) -> Self {
        Self {
            variant,
            epsilon: 1e-12,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Best pair of one scan, or `None` when no move beats the epsilon.
    fn scan<M: CostModel>(&self, model: &M, sol: &Solution) -> Option<(usize, usize)> {
        let cl = candidate_list(model, sol);
        let mut best: Option<(usize, usize)> = None;
        let mut best_delta = 0.0;

        for &elem_in in &cl {
            for &elem_out in sol.iter() {
                let delta = model.exchange_delta(elem_in, elem_out, sol);
                if delta < best_delta - self.epsilon {
                    best = Some((elem_in, elem_out));
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

impl<M: CostModel> LocalSearch<M> for ExchangeSearch {
    fn name(&self) -> &str {
        match self.variant {
            SearchVariant::BestImproving => "exchange-best",
            SearchVariant::FirstImproving => "exchange-first",
        }
    }

    fn improve(&self, model: &M, solution: &mut Solution) {
        if solution.is_empty() {
            return;
        }
        if !solution.cost.is_finite() {
            solution.cost = model.evaluate(solution);
        }

        while let Some((elem_in, elem_out)) = self.scan(model, solution) {
            solution.replace(elem_out, elem_in);
            solution.cost = model.evaluate(solution);
        }
    }
}
