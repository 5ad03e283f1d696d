//! Reassignment-convergence local search (Voronoi iteration).

use std::sync::Arc;

use crate::eval::{CostModel, DistanceMatrix};
use crate::grasp::LocalSearch;
use crate::solution::Solution;

/// Alternating reassignment and medoid re-election until a fixed point.
///
/// Two phases repeat: (1) every point is assigned to its nearest current
/// medoid; (2) each medoid slot elects, among the points assigned to it,
/// the one with the smallest summed distance to the slot's members, and
/// swaps it in if different. This is Lloyd-style Voronoi iteration over a
/// fixed candidate pool instead of continuous centroids. A point already
/// serving as another slot's medoid is never eligible for election, so
/// zero-distance pairs cannot collapse two slots onto one index.
///
/// Both phases are non-increasing in the total assignment distance and
/// ties resolve deterministically, so the fixed point is reached without
/// cycling; a rounds cap bounds the worst case anyway. Like the swap
/// search the strategy owns a private matrix handle; the final cost is
/// still reported through the model so the engine's comparison stays
/// uniform.
pub struct ReassignmentSearch {
    matrix: Arc<DistanceMatrix>,
}

impl ReassignmentSearch {
    pub fn new(matrix: Arc<DistanceMatrix>) -> Self {
        Self { matrix }
    }
}

impl<M: CostModel> LocalSearch<M> for ReassignmentSearch {
    fn name(&self) -> &str {
        "reassignment"
    }

    fn improve(&self, model: &M, solution: &mut Solution) {
        let k = solution.len();
        if k == 0 {
            return;
        }
        let n = self.matrix.len();
        let mut medoids = solution.elements().to_vec();

        // Slot index of each point's nearest medoid.
        let mut assigned = vec![0usize; n];

        for _ in 0..n.max(1) {
            // Phase 1: reassign every point to its true nearest medoid.
            for (u, slot) in assigned.iter_mut().enumerate() {
                let row = self.matrix.row(u);
                let mut best = 0;
                for s in 1..k {
                    if row[medoids[s]] < row[medoids[best]] {
                        best = s;
                    }
                }
                *slot = best;
            }

            // Phase 2: per slot, elect the member with minimal summed
            // distance to the slot's members.
            let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
            for (u, &slot) in assigned.iter().enumerate() {
                members[slot].push(u);
            }

            let mut changed = false;
            for (slot, group) in members.iter().enumerate() {
                if group.is_empty() {
                    continue;
                }
                let mut best = medoids[slot];
                let mut best_total = f64::INFINITY;
                for &u in group {
                    // Coincident points can pull another slot's medoid into
                    // this group; electing it would duplicate a medoid.
                    if medoids.iter().enumerate().any(|(s, &m)| s != slot && m == u) {
                        continue;
                    }
                    let row = self.matrix.row(u);
                    let total: f64 = group.iter().map(|&v| row[v]).sum();
                    if total < best_total {
                        best_total = total;
                        best = u;
                    }
                }
                if best_total.is_finite() && medoids[slot] != best {
                    medoids[slot] = best;
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        *solution = Solution::from_elements(medoids);
        solution.cost = model.evaluate(solution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::KMedoidsModel;
    use crate::local_search::{ExchangeSearch, SearchVariant};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(n: usize, seed: u64) -> Arc<DistanceMatrix> {
        let mut rng = StdRng::seed_from_u64(seed);
        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        let values = points
            .iter()
            .map(|a| {
                points
                    .iter()
                    .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        Arc::new(DistanceMatrix::new(values).unwrap())
    }

    fn line_matrix(positions: &[f64]) -> Arc<DistanceMatrix> {
        let values = positions
            .iter()
            .map(|a| positions.iter().map(|b| (a - b).abs()).collect())
            .collect();
        Arc::new(DistanceMatrix::new(values).unwrap())
    }

    #[test]
    fn test_solves_collinear_instance() {
        let matrix = line_matrix(&[0.0, 1.0, 2.0, 10.0]);
        let model = KMedoidsModel::new(matrix.clone());
        // Start {0, 3}: the dense cluster {0, 1, 2} lands in slot 0,
        // which then elects its true 1-medoid (point 1).
        let mut sol = Solution::from_elements(vec![0, 3]);
        sol.cost = model.evaluate(&sol);
        ReassignmentSearch::new(matrix).improve(&model, &mut sol);
        assert_eq!(sol.elements(), &[1, 3]);
        assert!((sol.cost - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_stalled_start_is_a_fixed_point() {
        let matrix = line_matrix(&[0.0, 1.0, 2.0, 10.0]);
        let model = KMedoidsModel::new(matrix.clone());
        // {0, 2} splits the points into {0, 1} and {2, 3}; both slots
        // already hold their cluster's 1-medoid, so nothing moves even
        // though the full exchange neighborhood could still improve.
        let mut sol = Solution::from_elements(vec![0, 2]);
        sol.cost = model.evaluate(&sol);
        ReassignmentSearch::new(matrix).improve(&model, &mut sol);
        assert_eq!(sol.elements(), &[0, 2]);
        assert!((sol.cost - 9.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_never_degrades() {
        let matrix = random_matrix(25, 21);
        let model = KMedoidsModel::new(matrix.clone());
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..8 {
            let mut pool: Vec<usize> = (0..25).collect();
            let mut start = Vec::new();
            for _ in 0..4 {
                let idx = rng.random_range(0..pool.len());
                start.push(pool.swap_remove(idx));
            }
            let mut sol = Solution::from_elements(start);
            sol.cost = model.evaluate(&sol);
            let before = sol.cost;
            ReassignmentSearch::new(matrix.clone()).improve(&model, &mut sol);
            assert!(sol.cost <= before + 1e-12);
            assert_eq!(sol.len(), 4);
        }
    }

    #[test]
    fn test_medoids_stay_distinct() {
        let matrix = random_matrix(15, 33);
        let model = KMedoidsModel::new(matrix.clone());
        let mut sol = Solution::from_elements(vec![0, 1, 2]);
        sol.cost = model.evaluate(&sol);
        ReassignmentSearch::new(matrix).improve(&model, &mut sol);
        let mut seen = sol.elements().to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_coincident_points_keep_medoids_distinct() {
        // Points 0 and 1 coincide, so every point lands in the first
        // slot and the second slot's medoid shows up as an election
        // candidate there. It must not win a second slot.
        let matrix = Arc::new(
            DistanceMatrix::new(vec![
                vec![0.0, 0.0, 5.0],
                vec![0.0, 0.0, 5.0],
                vec![5.0, 5.0, 0.0],
            ])
            .unwrap(),
        );
        let model = KMedoidsModel::new(matrix.clone());
        let mut sol = Solution::from_elements(vec![1, 0]);
        sol.cost = model.evaluate(&sol);
        ReassignmentSearch::new(matrix).improve(&model, &mut sol);

        assert_eq!(sol.len(), 2);
        let mut seen = sol.elements().to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 2, "medoids not distinct: {:?}", sol.elements());
    }

    #[test]
    fn test_close_to_exchange_baseline() {
        // Voronoi iteration is a weaker neighborhood than full exchange,
        // but on easy instances it should land near the same optima.
        let matrix = random_matrix(20, 8);
        let model = KMedoidsModel::new(matrix.clone());

        let mut baseline = Solution::from_elements(vec![0, 5, 10, 15]);
        baseline.cost = model.evaluate(&baseline);
        ExchangeSearch::new(SearchVariant::BestImproving).improve(&model, &mut baseline);

        let mut sol = Solution::from_elements(vec![0, 5, 10, 15]);
        sol.cost = model.evaluate(&sol);
        ReassignmentSearch::new(matrix).improve(&model, &mut sol);

        assert!(sol.cost.is_finite());
        assert!(sol.cost <= baseline.cost * 2.0 + 1e-9);
    }

    #[test]
    fn test_fixed_point_is_stable() {
        let matrix = random_matrix(12, 2);
        let model = KMedoidsModel::new(matrix.clone());
        let mut sol = Solution::from_elements(vec![1, 7, 9]);
        sol.cost = model.evaluate(&sol);
        let search = ReassignmentSearch::new(matrix);
        search.improve(&model, &mut sol);
        let first = sol.clone();
        search.improve(&model, &mut sol);
        assert_eq!(sol, first);
    }
}
