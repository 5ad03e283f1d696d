//! Cost-model contract for selection problems.

use crate::solution::Solution;

/// Evaluates solutions and single-move cost deltas for one problem instance.
///
/// A cost model is stateless with respect to the solution: it may cache
/// read-only instance data (a distance matrix, say) but never remembers
/// anything between calls. The generic engine and the construction and
/// local-search strategies talk to the problem exclusively through this
/// trait.
///
/// # Deltas
///
/// Every delta is `(cost after the move) - (cost before the move)`, using
/// the current solution's cost as baseline. When the solution is empty the
/// baseline is infinite and the insertion delta degenerates to the absolute
/// cost of the one-element solution.
///
/// Ill-formed moves (inserting a selected element, removing or exchanging
/// an absent one) report `f64::INFINITY` rather than an error, so callers
/// filter candidates by comparison alone.
pub trait CostModel {
    /// Number of elements eligible for selection. Element identifiers are
    /// `0..domain_size()`.
    fn domain_size(&self) -> usize;

    /// Full objective value of a solution. `f64::INFINITY` for the empty
    /// solution.
    fn evaluate(&self, sol: &Solution) -> f64;

    /// Cost delta of inserting `elem` into `sol`.
    fn insertion_delta(&self, elem: usize, sol: &Solution) -> f64;

    /// Cost delta of removing `elem` from `sol`.
    fn removal_delta(&self, elem: usize, sol: &Solution) -> f64;

    /// Cost delta of replacing `elem_out` with `elem_in` in `sol`.
    fn exchange_delta(&self, elem_in: usize, elem_out: usize, sol: &Solution) -> f64;
}
