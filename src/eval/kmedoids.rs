//! K-medoids cost model over a precomputed distance matrix.

use std::sync::Arc;

use super::types::CostModel;
use crate::solution::Solution;

/// A validated symmetric pairwise distance matrix.
///
/// The matrix is the only instance data the k-medoids model needs; how it
/// was produced (Euclidean distances over normalized features, usually) is
/// the caller's business. It is shared by reference (`Arc`) between the
/// cost model and the incremental local-search strategies, which keep a
/// private handle for O(n) move evaluation.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    values: Vec<Vec<f64>>,
    n: usize,
}

impl DistanceMatrix {
    /// Validates and wraps a pairwise distance matrix.
    ///
    /// Requires a square matrix with a zero diagonal, symmetric entries,
    /// and finite non-negative distances.
    pub fn new(values: Vec<Vec<f64>>) -> Result<Self, String> {
        let n = values.len();
        for (i, row) in values.iter().enumerate() {
            if row.len() != n {
                return Err(format!("row {i} has length {}, expected {n}", row.len()));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(format!("distance [{i}][{j}] = {d} is not finite non-negative"));
                }
                if i == j && d != 0.0 {
                    return Err(format!("diagonal [{i}][{i}] = {d}, expected 0"));
                }
                if (d - values[j][i]).abs() > 1e-9 {
                    return Err(format!(
                        "matrix is not symmetric at [{i}][{j}]: {d} != {}",
                        values[j][i]
                    ));
                }
            }
        }
        Ok(Self { values, n })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix is empty.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between points `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Row of distances from point `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i]
    }
}

/// Mean nearest-medoid distance objective.
///
/// `evaluate` returns `sum_i min_{m in sol} D[i][m] / n`. Deltas reuse the
/// solution's cached cost as baseline when it is finite, so construction
/// loops that keep the cache fresh pay one O(n·k) scan per delta instead
/// of two.
pub struct KMedoidsModel {
    matrix: Arc<DistanceMatrix>,
}

impl KMedoidsModel {
    pub fn new(matrix: Arc<DistanceMatrix>) -> Self {
        Self { matrix }
    }

    /// Shared handle to the underlying matrix.
    pub fn matrix(&self) -> &Arc<DistanceMatrix> {
        &self.matrix
    }

    /// Mean nearest distance for an explicit medoid set, infinity if empty.
    fn mean_nearest(&self, medoids: &[usize]) -> f64 {
        if medoids.is_empty() {
            return f64::INFINITY;
        }
        let n = self.matrix.len();
        let mut total = 0.0;
        for i in 0..n {
            let row = self.matrix.row(i);
            let mut best = f64::INFINITY;
            for &m in medoids {
                if row[m] < best {
                    best = row[m];
                }
            }
            total += best;
        }
        total / n as f64
    }

    /// Baseline for delta computations: the cached cost when finite,
    /// otherwise a fresh evaluation.
    fn baseline(&self, sol: &Solution) -> f64 {
        if sol.is_empty() {
            return f64::INFINITY;
        }
        if sol.cost.is_finite() {
            return sol.cost;
        }
        self.mean_nearest(sol.elements())
    }
}

impl CostModel for KMedoidsModel {
    fn domain_size(&self) -> usize {
        self.matrix.len()
    }

    fn evaluate(&self, sol: &Solution) -> f64 {
        self.mean_nearest(sol.elements())
    }

    fn insertion_delta(&self, elem: usize, sol: &Solution) -> f64 {
        if sol.contains(elem) {
            return f64::INFINITY;
        }
        let mut medoids = sol.elements().to_vec();
        medoids.push(elem);
        let new_cost = self.mean_nearest(&medoids);
        let base = self.baseline(sol);
        if base.is_infinite() {
            new_cost
        } else {
            new_cost - base
        }
    }

    fn removal_delta(&self, elem: usize, sol: &Solution) -> f64 {
        if !sol.contains(elem) || sol.len() <= 1 {
            return f64::INFINITY;
        }
        let medoids: Vec<usize> = sol.iter().copied().filter(|&m| m != elem).collect();
        self.mean_nearest(&medoids) - self.baseline(sol)
    }

    fn exchange_delta(&self, elem_in: usize, elem_out: usize, sol: &Solution) -> f64 {
        if !sol.contains(elem_out) || sol.contains(elem_in) {
            return f64::INFINITY;
        }
        let medoids: Vec<usize> = sol
            .iter()
            .map(|&m| if m == elem_out { elem_in } else { m })
            .collect();
        self.mean_nearest(&medoids) - self.baseline(sol)
    }
}
