//! Local-search strategies over the swap neighborhood.
//!
//! Three families, all driving a solution to a local optimum in place:
//!
//! - [`ExchangeSearch`]: the naive baseline, pricing every
//!   (candidate-in, candidate-out) pair through the cost model's full
//!   re-evaluation.
//! - [`IncrementalSwapSearch`]: the same neighborhood priced in O(n) per
//!   pair through cached nearest/second-nearest assignments and gain/loss
//!   tables (Whitaker's fast swap; Resende & Werneck 2007). Must match
//!   the baseline's result exactly.
//! - [`ReassignmentSearch`]: Voronoi iteration — alternate nearest-medoid
//!   assignment and per-cluster medoid re-election to a fixed point.

mod exchange;
mod incremental;
mod reassignment;
mod swap_cache;

pub use exchange::{ExchangeSearch, SearchVariant};
pub use incremental::IncrementalSwapSearch;
pub use reassignment::ReassignmentSearch;
