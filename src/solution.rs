//! Shared solution container for selection problems.

use std::fmt;

/// An ordered set of selected element indices with a cached cost.
///
/// Insertion order is irrelevant to correctness but preserved so that
/// iteration (and therefore tie-breaking in the search strategies) is
/// deterministic. The cached `cost` starts at `f64::INFINITY` ("not yet
/// evaluated / infeasible") and is refreshed by whoever mutates the
/// selection.
///
/// Cloning produces the independent copy used when a solution is promoted
/// to best-known while local search keeps mutating the working copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    elements: Vec<usize>,

    /// Objective value of the current selection. Lower is better.
    pub cost: f64,
}

impl Solution {
    /// Creates an empty, unevaluated solution.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    /// Creates an unevaluated solution from an existing selection.
    pub fn from_elements(elements: Vec<usize>) -> Self {
        Self {
            elements,
            cost: f64::INFINITY,
        }
    }

    /// Appends an element to the selection.
    ///
    /// Does not check for duplicates; the construction strategies guarantee
    /// distinctness by drawing from the candidate list.
    pub fn add(&mut self, elem: usize) {
        self.elements.push(elem);
    }

    /// Removes an element by value. Returns `false` if it was not selected.
    pub fn remove(&mut self, elem: usize) -> bool {
        match self.elements.iter().position(|&e| e == elem) {
            Some(idx) => {
                self.elements.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replaces `elem_out` with `elem_in` in place, keeping its position.
    ///
    /// Returns `false` (and leaves the solution untouched) if `elem_out`
    /// is not selected.
    pub fn replace(&mut self, elem_out: usize, elem_in: usize) -> bool {
        match self.elements.iter().position(|&e| e == elem_out) {
            Some(idx) => {
                self.elements[idx] = elem_in;
                true
            }
            None => false,
        }
    }

    /// Whether `elem` is currently selected.
    pub fn contains(&self, elem: usize) -> bool {
        self.elements.contains(&elem)
    }

    /// Number of selected elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no element is selected.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The selected elements, in insertion order.
    pub fn elements(&self) -> &[usize] {
        &self.elements
    }

    /// Iterates over the selected elements.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.elements.iter()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solution: cost=[{}], size=[{}], elements={:?}",
            self.cost,
            self.len(),
            self.elements
        )
    }
}
