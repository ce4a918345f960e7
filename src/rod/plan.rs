//! Back-pointer storage for the best plan of every sub-length.

use std::cmp::Ordering;

/// Best plans for all lengths `0..=length` of one rod.
///
/// A solved length `n > 0` stores only its final piece `last[n]`; its cut
/// sequence is the sequence of `n - last[n]` followed by that piece. The
/// plans therefore form a tree rooted at length 0, where the path from the
/// root spells out the cut sequence.
///
/// Each node also keeps ancestor jumps of power-of-two distance, so two
/// plans can be compared lexicographically in `O(log length)` without
/// materializing either sequence.
///
/// Allocated per call; never shared between calls.
#[derive(Debug)]
pub(crate) struct PlanTree {
    profit: Vec<Option<f64>>,
    last: Vec<usize>,
    depth: Vec<usize>,
    levels: usize,
    /// `jumps[n * levels + k]` is the ancestor `2^k` steps above `n`,
    /// clamped at the root.
    jumps: Vec<usize>,
}

impl PlanTree {
    /// Creates a tree for lengths `0..=length` with only the root solved.
    pub(crate) fn new(length: usize) -> Self {
        let nodes = length + 1;
        let levels = (usize::BITS - nodes.leading_zeros()) as usize;
        let mut profit = vec![None; nodes];
        profit[0] = Some(0.0);
        Self {
            profit,
            last: vec![0; nodes],
            depth: vec![0; nodes],
            levels,
            jumps: vec![0; nodes * levels],
        }
    }

    pub(crate) fn is_solved(&self, n: usize) -> bool {
        self.profit[n].is_some()
    }

    pub(crate) fn profit(&self, n: usize) -> Option<f64> {
        self.profit[n]
    }

    pub(crate) fn solved_count(&self) -> usize {
        self.profit.iter().filter(|p| p.is_some()).count()
    }

    /// Stores the plan for `n`: the plan of `n - piece` followed by `piece`.
    ///
    /// `n - piece` must already be solved.
    pub(crate) fn record(&mut self, n: usize, piece: usize, profit: f64) {
        let parent = n - piece;
        debug_assert!(self.is_solved(parent));

        self.profit[n] = Some(profit);
        self.last[n] = piece;
        self.depth[n] = self.depth[parent] + 1;

        let base = n * self.levels;
        self.jumps[base] = parent;
        for k in 1..self.levels {
            let mid = self.jumps[base + k - 1];
            self.jumps[base + k] = self.jumps[mid * self.levels + k - 1];
        }
    }

    /// Rebuilds the cut sequence of `n`.
    pub(crate) fn cuts(&self, n: usize) -> Vec<usize> {
        let mut cuts = Vec::with_capacity(self.depth[n]);
        let mut node = n;
        while node > 0 {
            cuts.push(self.last[node]);
            node -= self.last[node];
        }
        cuts.reverse();
        cuts
    }

    /// Compares `cuts(a) ++ [i]` with `cuts(b) ++ [j]` lexicographically.
    ///
    /// Same ordering as [`compare_cuts`](super::compare_cuts) on the
    /// materialized sequences.
    pub(crate) fn compare_extended(&self, a: usize, i: usize, b: usize, j: usize) -> Ordering {
        if a == b {
            return i.cmp(&j);
        }
        let (da, db) = (self.depth[a], self.depth[b]);
        if da > db {
            return self.compare_extended(b, j, a, i).reverse();
        }

        let b_lifted = self.lift(b, da);
        if b_lifted != a {
            let (la, lb) = self.diverging_pieces(a, b_lifted);
            return la.cmp(&lb);
        }

        // cuts(a) is a prefix of cuts(b); `i` meets the next piece of b.
        // On a match the left sequence ends first.
        let next = self.last[self.lift(b, da + 1)];
        i.cmp(&next).then(Ordering::Less)
    }

    fn jump(&self, n: usize, k: usize) -> usize {
        self.jumps[n * self.levels + k]
    }

    /// Ancestor of `n` at `depth`, which must not exceed `n`'s own depth.
    fn lift(&self, mut n: usize, depth: usize) -> usize {
        let mut diff = self.depth[n] - depth;
        let mut k = 0;
        while diff > 0 {
            if diff & 1 == 1 {
                n = self.jump(n, k);
            }
            diff >>= 1;
            k += 1;
        }
        n
    }

    /// Pieces on which two distinct nodes of equal depth first differ.
    fn diverging_pieces(&self, mut u: usize, mut v: usize) -> (usize, usize) {
        for k in (0..self.levels).rev() {
            let (ju, jv) = (self.jump(u, k), self.jump(v, k));
            if ju != jv {
                u = ju;
                v = jv;
            }
        }
        (self.last[u], self.last[v])
    }
}
