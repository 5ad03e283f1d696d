//! GRASP metaheuristic engine for k-medoids clustering.
//!
//! Selects k medoids out of n points to minimize the mean distance from
//! every point to its nearest medoid, given a precomputed symmetric
//! distance matrix. The search is GRASP — Greedy Randomized Adaptive
//! Search Procedure — repeated semi-greedy construction followed by
//! local-search improvement, keeping the best feasible solution across
//! restarts.
//!
//! # Architecture
//!
//! One generic engine ([`grasp::GraspRunner`]) is parameterized by two
//! injected strategies:
//!
//! - **Construction** ([`construction`]): semi-greedy RCL insertion,
//!   random-sampling insertion, or semi-greedy with periodic local-search
//!   passes at size milestones.
//! - **Local search** ([`local_search`]): best/first-improving exchange
//!   over the cost model, the incremental swap search with cached
//!   nearest/second-nearest assignments and gain/loss tables, or
//!   reassignment convergence (Voronoi iteration).
//!
//! The engine talks to the problem only through the [`eval::CostModel`]
//! contract; the k-medoids objective lives in [`eval::KMedoidsModel`].
//! Dataset parsing, normalization, and distance-matrix construction from
//! raw features belong to the caller.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use grasp_medoids::construction::SemiGreedy;
//! use grasp_medoids::eval::{DistanceMatrix, KMedoidsModel};
//! use grasp_medoids::grasp::{GraspConfig, GraspRunner};
//! use grasp_medoids::local_search::{IncrementalSwapSearch, SearchVariant};
//!
//! let matrix = Arc::new(DistanceMatrix::new(vec![
//!     vec![0.0, 1.0, 2.0, 10.0],
//!     vec![1.0, 0.0, 1.0, 9.0],
//!     vec![2.0, 1.0, 0.0, 8.0],
//!     vec![10.0, 9.0, 8.0, 0.0],
//! ]).unwrap());
//!
//! let model = KMedoidsModel::new(matrix.clone());
//! let config = GraspConfig::new(2).with_max_iterations(50).with_seed(42);
//! let result = GraspRunner::run(
//!     &model,
//!     &SemiGreedy::new(0.3),
//!     &IncrementalSwapSearch::new(SearchVariant::BestImproving, matrix),
//!     &config,
//! );
//!
//! assert_eq!(result.best.len(), 2);
//! assert!((result.best.cost - 0.5).abs() < 1e-9);
//! ```

pub mod construction;
pub mod eval;
pub mod grasp;
pub mod local_search;
pub mod solution;

pub use solution::Solution;
