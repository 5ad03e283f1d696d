//! Incremental bookkeeping for the swap neighborhood.

use crate::eval::DistanceMatrix;
use crate::solution::Solution;

/// Nearest/second-nearest assignments plus gain/loss tables for O(n) swap
/// pricing.
///
/// The tables are mutually dependent — `served_by` is the inverse of
/// `phi1`, `loss` is derived from `served_by` and the distance gaps,
/// `gain` from `d1` — so they live in one struct with exactly two ways to
/// change: [`SwapCache::build`] (full rebuild, once per local-search
/// invocation) and [`SwapCache::apply_swap`] (patch after an accepted
/// move). There is deliberately no way to mutate one table alone.
///
/// Requires at least two medoids; with a single medoid every second-nearest
/// distance is infinite and the loss table degenerates.
pub(super) struct SwapCache<'a> {
    matrix: &'a DistanceMatrix,
    n: usize,

    /// Nearest selected medoid per point.
    phi1: Vec<usize>,
    /// Second-nearest selected medoid per point.
    phi2: Vec<usize>,
    /// Distance to the nearest medoid.
    d1: Vec<f64>,
    /// Distance to the second-nearest medoid.
    d2: Vec<f64>,
    /// Points each medoid serves as nearest; inverse of `phi1`.
    served_by: Vec<Vec<usize>>,
    /// Per candidate: total distance saved by inserting it.
    gain: Vec<f64>,
    /// Per medoid: total distance lost by removing it.
    loss: Vec<f64>,
}

impl<'a> SwapCache<'a> {
    /// Builds all tables from scratch for the given selection.
    pub fn build(matrix: &'a DistanceMatrix, sol: &Solution) -> Self {
        let n = matrix.len();
        let mut cache = Self {
            matrix,
            n,
            phi1: vec![usize::MAX; n],
            phi2: vec![usize::MAX; n],
            d1: vec![f64::INFINITY; n],
            d2: vec![f64::INFINITY; n],
            served_by: vec![Vec::new(); n],
            gain: vec![0.0; n],
            loss: vec![0.0; n],
        };

        for u in 0..n {
            cache.reassign(u, sol);
        }
        cache.rebuild_served_by();
        cache.rebuild_gain_loss(sol);
        cache
    }

    /// Objective value implied by the assignment table: mean of `d1`.
    pub fn cost(&self) -> f64 {
        self.d1.iter().sum::<f64>() / self.n as f64
    }

    /// Total-distance profit of swapping `fi` in for `fr`; positive means
    /// the swap improves the solution.
    ///
    /// `gain[fi] - loss[fr]` prices insertion and removal independently;
    /// the correction term re-examines only the points served by `fr`,
    /// whose fallback to their second choice may be undercut by `fi`.
    pub fn swap_profit(&self, fi: usize, fr: usize) -> f64 {
        let mut extra = 0.0;
        for &u in &self.served_by[fr] {
            let dufi = self.matrix.get(u, fi);
            if dufi < self.d2[u] {
                let term = self.d2[u] - dufi.max(self.d1[u]);
                if term > 0.0 {
                    extra += term;
                }
            }
        }
        self.gain[fi] - self.loss[fr] + extra
    }

    /// Applies the swap to `sol` and patches every table.
    ///
    /// Every point that referenced `fr` as its nearest *or* second-nearest
    /// medoid gets a full reassignment against the new selection — a point
    /// served by a third medoid can still hold `fr` in its second slot,
    /// and leaving that entry stale would corrupt the loss table. The
    /// remaining points absorb `fi` with a single comparison. `served_by`
    /// is then rebuilt from `phi1` (points can migrate to `fi` from any
    /// medoid, not just `fr`), and gain/loss are recomputed for the whole
    /// selection.
    pub fn apply_swap(&mut self, fi: usize, fr: usize, sol: &mut Solution) {
        sol.replace(fr, fi);

        for u in 0..self.n {
            if self.phi1[u] == fr || self.phi2[u] == fr {
                self.reassign(u, sol);
            } else {
                let du = self.matrix.get(u, fi);
                if du < self.d1[u] {
                    self.d2[u] = self.d1[u];
                    self.phi2[u] = self.phi1[u];
                    self.d1[u] = du;
                    self.phi1[u] = fi;
                } else if du < self.d2[u] {
                    self.d2[u] = du;
                    self.phi2[u] = fi;
                }
            }
        }

        self.rebuild_served_by();
        self.rebuild_gain_loss(sol);
    }

    /// Recomputes the nearest/second-nearest slots of point `u` from
    /// scratch.
    fn reassign(&mut self, u: usize, sol: &Solution) {
        let row = self.matrix.row(u);
        let mut best_f = usize::MAX;
        let mut second_f = usize::MAX;
        let mut best = f64::INFINITY;
        let mut second = f64::INFINITY;
        for &f in sol.iter() {
            let du = row[f];
            if du < best {
                second = best;
                second_f = best_f;
                best = du;
                best_f = f;
            } else if du < second {
                second = du;
                second_f = f;
            }
        }
        self.phi1[u] = best_f;
        self.phi2[u] = second_f;
        self.d1[u] = best;
        self.d2[u] = second;
    }

    fn rebuild_served_by(&mut self) {
        for list in &mut self.served_by {
            list.clear();
        }
        for u in 0..self.n {
            self.served_by[self.phi1[u]].push(u);
        }
    }

    fn rebuild_gain_loss(&mut self, sol: &Solution) {
        self.gain.fill(0.0);
        self.loss.fill(0.0);

        for &fr in sol.iter() {
            let mut sum = 0.0;
            for &u in &self.served_by[fr] {
                sum += self.d2[u] - self.d1[u];
            }
            self.loss[fr] = sum;
        }

        for fi in 0..self.n {
            if sol.contains(fi) {
                continue;
            }
            let mut sum = 0.0;
            for u in 0..self.n {
                let improve = self.d1[u] - self.matrix.get(u, fi);
                if improve > 0.0 {
                    sum += improve;
                }
            }
            self.gain[fi] = sum;
        }
    }
}
