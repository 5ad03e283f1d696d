//! Cost evaluation: the model contract and the k-medoids objective.
//!
//! The [`CostModel`] trait is the seam between the generic GRASP machinery
//! and the clustering problem: the engine and the strategies only ever see
//! full evaluations and single-move deltas. [`KMedoidsModel`] is the one
//! concrete model, computing the mean nearest-medoid distance over a
//! [`DistanceMatrix`].

mod kmedoids;
mod types;

pub use kmedoids::{DistanceMatrix, KMedoidsModel};
pub use types::CostModel;
