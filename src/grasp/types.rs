//! Strategy traits for the GRASP engine.

use rand::Rng;

use crate::eval::CostModel;
use crate::solution::Solution;

/// Builds one candidate solution from scratch.
///
/// A construction strategy draws elements from the candidate list (domain
/// minus current selection) until the solution reaches `target_size` or the
/// pool is exhausted. An exhausted pool is not an error: the undersized
/// solution is returned as-is and the engine's feasibility check keeps it
/// out of the best-known slot.
///
/// Implementations must leave `cost` consistent with the returned
/// selection (or infinite when the selection is empty).
pub trait Construction<M: CostModel>: Send + Sync {
    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;

    /// Builds a solution of up to `target_size` elements.
    fn construct<R: Rng>(&self, model: &M, target_size: usize, rng: &mut R) -> Solution;
}

/// Improves a solution in place until a local optimum is reached.
///
/// Local search mutates the working solution directly; the engine
/// promotes it afterwards if it is worth keeping. Strategies are
/// deterministic
/// given their input, so no random source is threaded through.
///
/// Implementations must keep `solution.cost` in sync with the final
/// selection and must never increase it.
pub trait LocalSearch<M: CostModel>: Send + Sync {
    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;

    /// Refines `solution` to a local optimum of the strategy's
    /// neighborhood.
    fn improve(&self, model: &M, solution: &mut Solution);
}

/// A no-op local search, turning the engine into a pure multi-start
/// constructive heuristic.
pub struct NoLocalSearch;

impl<M: CostModel> LocalSearch<M> for NoLocalSearch {
    fn name(&self) -> &str {
        "none"
    }

    fn improve(&self, _model: &M, _solution: &mut Solution) {}
}
