//! Multiset matching between two sequences.
//!
//! The matcher pairs every element of the right sequence with the first
//! unconsumed equal element of the left sequence. Duplicates are matched
//! one-for-one, and the leftmost candidate always wins, so diffs are
//! reproducible. Equality is whatever `PartialEq` says, which lets elements
//! nest further unordered comparisons.
//!
//! Cost is O(n·m) comparisons in the worst case. Inputs are test fixtures.

use serde::Serialize;

/// Elements left over on each side after matching, in source order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diff<T> {
    pub extra_left: Vec<T>,
    pub extra_right: Vec<T>,
}

impl<T> Diff<T> {
    /// True when both sides were fully matched
    pub fn is_empty(&self) -> bool {
        self.extra_left.is_empty() && self.extra_right.is_empty()
    }

    /// Exchange the left and right sides
    pub fn swap(self) -> Diff<T> {
        Diff {
            extra_left: self.extra_right,
            extra_right: self.extra_left,
        }
    }
}

/// Index-level result of matching `left` against `right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    /// For every right position, the left index it consumed
    pairs: Vec<Option<usize>>,
    /// Left indices nothing in `right` consumed, ascending
    unmatched_left: Vec<usize>,
}

impl Matching {
    pub fn pairs(&self) -> &[Option<usize>] {
        &self.pairs
    }

    pub fn unmatched_left(&self) -> &[usize] {
        &self.unmatched_left
    }

    /// Right positions that found no counterpart, ascending
    pub fn unmatched_right(&self) -> impl Iterator<Item = usize> + '_ {
        self.pairs
            .iter()
            .enumerate()
            .filter(|(_, pair)| pair.is_none())
            .map(|(j, _)| j)
    }

    pub fn matched_count(&self) -> usize {
        self.pairs.iter().filter(|pair| pair.is_some()).count()
    }

    /// True when every element on both sides found a partner
    pub fn is_complete(&self) -> bool {
        self.unmatched_left.is_empty() && self.pairs.iter().all(Option::is_some)
    }

    /// Extract the leftover elements of the sequences this matching was built from
    pub fn diff<L: Clone, R: Clone + Into<L>>(&self, left: &[L], right: &[R]) -> Diff<L> {
        Diff {
            extra_left: self
                .unmatched_left
                .iter()
                .filter_map(|&i| left.get(i).cloned())
                .collect(),
            extra_right: self
                .unmatched_right()
                .filter_map(|j| right.get(j).cloned().map(Into::into))
                .collect(),
        }
    }

    /// Order in which the left indices appear once reordered to follow `right`
    ///
    /// Matched left elements take the position of their partner. Positions
    /// whose right element had no partner are gaps; unmatched left elements
    /// fill the gaps from the tail backward, keeping their relative order.
    /// Gaps nobody fills are dropped, and unmatched left elements that found
    /// no gap are appended at the end in their original order.
    pub fn permutation(&self) -> Vec<usize> {
        let mut slots = self.pairs.clone();
        let mut fillers = self.unmatched_left.clone();
        for slot in slots.iter_mut().rev() {
            if fillers.is_empty() {
                break;
            }
            if slot.is_none() {
                *slot = fillers.pop();
            }
        }
        let mut order: Vec<usize> = slots.into_iter().flatten().collect();
        order.extend(fillers);
        order
    }

    /// Move the elements of `left` into the order given by [`Matching::permutation`]
    pub fn apply<T>(&self, left: Vec<T>) -> Vec<T> {
        let mut slots: Vec<Option<T>> = left.into_iter().map(Some).collect();
        let mut out: Vec<T> = self
            .permutation()
            .into_iter()
            .filter_map(|i| slots.get_mut(i).and_then(Option::take))
            .collect();
        out.extend(slots.into_iter().flatten());
        out
    }
}

/// Pair each element of `right`, in order, with the first unconsumed equal
/// element of `left`
pub fn match_elements<L, R>(left: &[L], right: &[R]) -> Matching
where
    L: PartialEq<R>,
{
    let mut consumed = vec![false; left.len()];
    let mut pairs = Vec::with_capacity(right.len());

    for elem in right {
        let found = (0..left.len()).find(|&i| !consumed[i] && left[i] == *elem);
        if let Some(i) = found {
            consumed[i] = true;
        }
        pairs.push(found);
    }

    let unmatched_left = consumed
        .iter()
        .enumerate()
        .filter(|(_, used)| !**used)
        .map(|(i, _)| i)
        .collect();

    Matching {
        pairs,
        unmatched_left,
    }
}

/// Multiset symmetric difference of two sequences
///
/// # Example
///
/// ```
/// use unordered_core::matcher::diff;
///
/// let d = diff(&[1, 2, 3, 3], &[1, 2, 3]);
/// assert_eq!(d.extra_left, vec![3]);
/// assert!(d.extra_right.is_empty());
/// ```
pub fn diff<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Diff<T> {
    match_elements(left, right).diff(left, right)
}

/// True when `left` and `right` hold the same elements with the same multiplicities
///
/// Sequences of different length are rejected without comparing any element.
pub fn is_permutation<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len() && match_elements(left, right).is_complete()
}

/// Permute `expected` so that matched elements sit where their partners sit in `actual_order`
pub fn reorder<T: PartialEq + Clone>(expected: &[T], actual_order: &[T]) -> Vec<T> {
    match_elements(expected, actual_order).apply(expected.to_vec())
}
