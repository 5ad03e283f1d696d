//! Construction strategies: semi-greedy, random-sampling, and
//! periodic-improvement insertion.
//!
//! All three share the same insertion loop: keep a candidate list (the
//! domain minus the current selection), pick one candidate per round by
//! some greedy-randomized rule, insert it, and stop at the target size or
//! when the pool runs dry. They differ only in how the candidate of the
//! round is picked.

mod periodic;
mod sampled;
mod semi_greedy;

pub use periodic::PeriodicImprovement;
pub use sampled::SampledGreedy;
pub use semi_greedy::SemiGreedy;

use crate::eval::CostModel;
use crate::solution::Solution;

/// Elements eligible for insertion: the domain minus the selection, in
/// ascending order.
pub(crate) fn candidate_list<M: CostModel>(model: &M, sol: &Solution) -> Vec<usize> {
    (0..model.domain_size())
        .filter(|&e| !sol.contains(e))
        .collect()
}
