//! GRASP execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::GraspConfig;
use super::types::{Construction, LocalSearch};
use crate::eval::CostModel;
use crate::solution::Solution;

/// Result of a GRASP run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspResult {
    /// Best feasible solution found; empty with infinite cost when no
    /// iteration produced a feasible solution.
    pub best: Solution,

    /// Number of construct-then-improve iterations executed.
    pub iterations: usize,

    /// Iteration at which the best solution was found.
    pub best_iteration: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-known cost after each iteration.
    pub cost_history: Vec<f64>,
}

impl GraspResult {
    fn empty() -> Self {
        Self {
            best: Solution::new(),
            iterations: 0,
            best_iteration: 0,
            cancelled: false,
            cost_history: Vec::new(),
        }
    }
}

/// Executes the GRASP metaheuristic.
///
/// The engine is a plain restart loop: each iteration builds a candidate
/// solution with the injected construction strategy, refines it in place
/// with the injected local-search strategy, and promotes it to best-known
/// when it is feasible (exactly `target_size` elements) and strictly
/// cheaper. Nothing carries over between iterations except the best-known
/// solution and the engine-owned random source.
///
/// Construction and local search are black boxes behind the
/// [`Construction`] and [`LocalSearch`] traits; the engine itself only
/// talks to the problem through the [`CostModel`] contract.
pub struct GraspRunner;

impl GraspRunner {
    /// Runs GRASP with the given strategies.
    pub fn run<M, C, L>(
        model: &M,
        construction: &C,
        local_search: &L,
        config: &GraspConfig,
    ) -> GraspResult
    where
        M: CostModel,
        C: Construction<M>,
        L: LocalSearch<M>,
    {
        Self::run_with_cancel(model, construction, local_search, config, None)
    }

    /// Runs GRASP with an optional cancellation token.
    ///
    /// Cancellation (like the time limit) is cooperative and checked only
    /// at the top of each iteration; mid-iteration work always completes.
    pub fn run_with_cancel<M, C, L>(
        model: &M,
        construction: &C,
        local_search: &L,
        config: &GraspConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GraspResult
    where
        M: CostModel,
        C: Construction<M>,
        L: LocalSearch<M>,
    {
        config.validate().expect("invalid GraspConfig");

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        let started = Instant::now();

        let mut best = Solution::new();
        let mut best_iteration = 0;
        let mut cancelled = false;
        let mut iterations = 0;
        let mut cost_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit {
                if started.elapsed() >= limit {
                    break;
                }
            }

            let mut sol = construction.construct(model, config.target_size, &mut rng);
            local_search.improve(model, &mut sol);

            if sol.len() == config.target_size && sol.cost < best.cost {
                best = sol;
                best_iteration = iteration;
            }

            iterations += 1;
            cost_history.push(best.cost);
        }

        GraspResult {
            best,
            iterations,
            best_iteration,
            cancelled,
            cost_history,
        }
    }

    /// Runs `runs` independent GRASP instances in parallel and keeps the
    /// cheapest feasible result.
    ///
    /// Each run owns its own random stream, seeded by offsetting the
    /// configured seed with the run index, so the outcome is reproducible
    /// regardless of scheduling.
    #[cfg(feature = "parallel")]
    pub fn run_multistart<M, C, L>(
        model: &M,
        construction: &C,
        local_search: &L,
        config: &GraspConfig,
        runs: usize,
    ) -> GraspResult
    where
        M: CostModel + Sync,
        C: Construction<M>,
        L: LocalSearch<M>,
    {
        use rayon::prelude::*;

        let base_seed = config.seed.unwrap_or_else(rand::random);
        (0..runs as u64)
            .into_par_iter()
            .map(|run| {
                let run_config = config.clone().with_seed(base_seed.wrapping_add(run));
                Self::run(model, construction, local_search, &run_config)
            })
            .min_by(|a, b| a.best.cost.total_cmp(&b.best.cost))
            .unwrap_or_else(GraspResult::empty)
    }
}
