//! Random-sampling construction.

use rand::seq::SliceRandom;
use rand::Rng;

use super::candidate_list;
use crate::eval::CostModel;
use crate::grasp::Construction;
use crate::solution::Solution;

/// Random-sampling insertion: each round draws `sample_size` candidates
/// uniformly without replacement and inserts the one with the smallest
/// delta.
///
/// Compared to the full RCL pass this costs O(p) delta evaluations per
/// insertion instead of O(|CL|), trading exploration breadth for speed.
/// There is no alpha filter; the sample itself provides the randomization.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampledGreedy {
    /// Candidates drawn per insertion round. Clamped to `|CL|` when the
    /// pool is smaller.
    pub sample_size: usize,
}

impl SampledGreedy {
    pub fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_size == 0 {
            return Err("sample_size must be at least 1".into());
        }
        Ok(())
    }
}

impl<M: CostModel> Construction<M> for SampledGreedy {
    fn name(&self) -> &str {
        "sampled-greedy"
    }

    fn construct<R: Rng>(&self, model: &M, target_size: usize, rng: &mut R) -> Solution {
        let mut sol = Solution::new();
        let mut cl = candidate_list(model, &sol);

        while sol.len() < target_size && !cl.is_empty() {
            let m = self.sample_size.min(cl.len());
            // partial_shuffle draws the sample into the tail of the list.
            let sample_start = cl.len() - m;
            let (sample, _) = cl.partial_shuffle(rng, m);

            let mut best = 0;
            let mut best_delta = model.insertion_delta(sample[0], &sol);
            for (i, &c) in sample.iter().enumerate().skip(1) {
                let delta = model.insertion_delta(c, &sol);
                if delta < best_delta {
                    best_delta = delta;
                    best = i;
                }
            }

            let chosen = cl.remove(sample_start + best);
            sol.add(chosen);
            sol.cost = model.evaluate(&sol);
        }

        sol
    }
}
