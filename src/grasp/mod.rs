//! Generic GRASP engine.
//!
//! GRASP (Greedy Randomized Adaptive Search Procedure) repeats a
//! construct-then-improve cycle over many randomized restarts, keeping the
//! best feasible solution seen. The engine here is one loop parameterized
//! by two injected strategies — a [`Construction`] and a [`LocalSearch`] —
//! rather than a hierarchy of solver subclasses; which combination to run
//! is plain configuration.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"
//! - Resende & Ribeiro (2010), "Greedy Randomized Adaptive Search
//!   Procedures: Advances and Applications"

mod config;
mod runner;
mod types;

pub use config::GraspConfig;
pub use runner::{GraspResult, GraspRunner};
pub use types::{Construction, LocalSearch, NoLocalSearch};
