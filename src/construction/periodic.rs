//! Semi-greedy construction with periodic local-search passes.

use rand::Rng;

use super::candidate_list;
use super::semi_greedy::select_candidate;
use crate::eval::CostModel;
use crate::grasp::{Construction, LocalSearch};
use crate::solution::Solution;

/// Semi-greedy insertion interleaved with local search at size milestones.
///
/// Runs the same alpha-RCL rounds as [`SemiGreedy`](super::SemiGreedy),
/// but after the partial solution reaches `ceil(f * k)` elements for each
/// configured fraction `f`, the wrapped local search runs in place before
/// insertion resumes. Milestones are computed once per construction,
/// sorted and deduplicated, and never fire at `k` itself — the engine runs
/// the final local search anyway.
pub struct PeriodicImprovement<L> {
    /// Greediness parameter in `[0, 1]`.
    pub alpha: f64,

    /// Milestone fractions of the target size, each in `(0, 1)`.
    pub milestones: Vec<f64>,

    local_search: L,
}

impl<L> PeriodicImprovement<L> {
    /// Creates the strategy with the default milestones at 40% and 80%
    /// of the target size.
    pub fn new(alpha: f64, local_search: L) -> Self {
        Self {
            alpha,
            milestones: vec![0.4, 0.8],
            local_search,
        }
    }

    pub fn with_milestones(mut self, fractions: Vec<f64>) -> Self {
        self.milestones = fractions;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        for &f in &self.milestones {
            if !(f > 0.0 && f < 1.0) {
                return Err(format!("milestone fraction must be in (0, 1), got {f}"));
            }
        }
        Ok(())
    }

    /// Milestone sizes for a concrete target: `ceil(f * k)`, clamped to
    /// `1..k`, ascending, deduplicated.
    fn triggers(&self, target_size: usize) -> Vec<usize> {
        let mut triggers: Vec<usize> = self
            .milestones
            .iter()
            .map(|f| (f * target_size as f64).ceil() as usize)
            .filter(|&t| t >= 1 && t < target_size)
            .collect();
        triggers.sort_unstable();
        triggers.dedup();
        triggers
    }
}

impl<M, L> Construction<M> for PeriodicImprovement<L>
where
    M: CostModel,
    L: LocalSearch<M>,
{
    fn name(&self) -> &str {
        "periodic-improvement"
    }

    fn construct<R: Rng>(&self, model: &M, target_size: usize, rng: &mut R) -> Solution {
        let triggers = self.triggers(target_size);
        let mut next_trigger = 0;

        let mut sol = Solution::new();
        let mut cl = candidate_list(model, &sol);

        while sol.len() < target_size {
            let Some(idx) = select_candidate(model, &sol, &cl, self.alpha, rng) else {
                break;
            };
            let chosen = cl.remove(idx);
            sol.add(chosen);
            sol.cost = model.evaluate(&sol);

            if next_trigger < triggers.len() && sol.len() == triggers[next_trigger] {
                self.local_search.improve(model, &mut sol);
                // Local search may have swapped elements in and out.
                cl = candidate_list(model, &sol);
                next_trigger += 1;
            }
        }

        sol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::SemiGreedy;
    use crate::eval::{DistanceMatrix, KMedoidsModel};
    use crate::grasp::NoLocalSearch;
    use crate::local_search::{ExchangeSearch, SearchVariant};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn line_model(positions: &[f64]) -> KMedoidsModel {
        let values = positions
            .iter()
            .map(|a| positions.iter().map(|b| (a - b).abs()).collect())
            .collect();
        KMedoidsModel::new(Arc::new(DistanceMatrix::new(values).unwrap()))
    }

    #[test]
    fn test_validate() {
        assert!(PeriodicImprovement::new(0.5, NoLocalSearch).validate().is_ok());
        assert!(PeriodicImprovement::new(1.5, NoLocalSearch).validate().is_err());
        let bad = PeriodicImprovement::new(0.5, NoLocalSearch).with_milestones(vec![0.4, 1.0]);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_trigger_computation() {
        let strategy = PeriodicImprovement::new(0.5, NoLocalSearch);
        // k = 10: ceil(4.0) = 4, ceil(8.0) = 8.
        assert_eq!(strategy.triggers(10), vec![4, 8]);
        // k = 2: ceil(0.8) = 1, ceil(1.6) = 2 (== k, excluded).
        assert_eq!(strategy.triggers(2), vec![1]);
        // k = 1: everything collapses onto k and is excluded.
        assert!(strategy.triggers(1).is_empty());
        // Fractions landing on the same size collapse to one trigger.
        let strategy =
            PeriodicImprovement::new(0.5, NoLocalSearch).with_milestones(vec![0.35, 0.4]);
        assert_eq!(strategy.triggers(10), vec![4]);
    }

    #[test]
    fn test_reaches_target_size() {
        let model = line_model(&[0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0, 21.0, 30.0]);
        let strategy = PeriodicImprovement::new(
            0.4,
            ExchangeSearch::new(SearchVariant::BestImproving),
        );
        let mut rng = StdRng::seed_from_u64(42);
        let sol = strategy.construct(&model, 5, &mut rng);
        assert_eq!(sol.len(), 5);
        let mut seen = sol.elements().to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_milestone_search_does_not_hurt() {
        let model = line_model(&[0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0]);
        let with = PeriodicImprovement::new(
            0.0,
            ExchangeSearch::new(SearchVariant::BestImproving),
        );
        let without = SemiGreedy::new(0.0);
        let mut rng = StdRng::seed_from_u64(1);
        let a = with.construct(&model, 3, &mut rng);
        let mut rng = StdRng::seed_from_u64(1);
        let b = without.construct(&model, 3, &mut rng);
        assert!(a.cost <= b.cost + 1e-12);
    }
}
