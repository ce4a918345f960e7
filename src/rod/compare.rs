//! Lexicographic ordering of cut sequences.

use std::cmp::Ordering;

/// Compares two cut sequences element by element.
///
/// The first differing element decides. If one sequence is a strict
/// prefix of the other, the shorter one is smaller.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_batchcut::rod::compare_cuts;
///
/// assert_eq!(compare_cuts(&[1, 2, 2], &[2, 3]), Ordering::Less);
/// assert_eq!(compare_cuts(&[2], &[2, 1]), Ordering::Less);
/// assert_eq!(compare_cuts(&[3, 1], &[3, 1]), Ordering::Equal);
/// ```
pub fn compare_cuts(a: &[usize], b: &[usize]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => {}
            decided => return decided,
        }
    }
    a.len().cmp(&b.len())
}

/// Chooses the final piece for one sub-length.
///
/// `candidates` holds `(profit, piece)` pairs in ascending piece order, and
/// `order(a, b)` compares the cut sequences the two pieces would produce.
///
/// - Strict: the first candidate is kept until another beats it by more
///   than `epsilon`.
/// - Lexicographic: every candidate within `epsilon` of the best profit is
///   tied, and the one with the smallest sequence wins. `order` is only
///   consulted between tied candidates.
///
/// Either way the chosen profit is at most `epsilon` below the best
/// candidate.
pub(crate) fn select_piece(
    candidates: &[(f64, usize)],
    epsilon: f64,
    lexicographic: bool,
    order: impl Fn(usize, usize) -> Ordering,
) -> Option<(f64, usize)> {
    if !lexicographic {
        return candidates.iter().copied().reduce(|kept, next| {
            if next.0 - kept.0 > epsilon {
                next
            } else {
                kept
            }
        });
    }

    let top = candidates
        .iter()
        .map(|&(profit, _)| profit)
        .fold(f64::NEG_INFINITY, f64::max);
    candidates
        .iter()
        .copied()
        .filter(|&(profit, _)| top - profit <= epsilon)
        .reduce(|kept, next| {
            if order(next.1, kept.1).is_lt() {
                next
            } else {
                kept
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_difference_decides() {
        assert_eq!(compare_cuts(&[1, 5, 9], &[1, 6]), Ordering::Less);
        assert_eq!(compare_cuts(&[2, 1], &[1, 9, 9]), Ordering::Greater);
    }

    #[test]
    fn test_prefix_is_smaller() {
        assert_eq!(compare_cuts(&[], &[1]), Ordering::Less);
        assert_eq!(compare_cuts(&[1, 2], &[1]), Ordering::Greater);
        assert_eq!(compare_cuts(&[], &[]), Ordering::Equal);
    }

    // Candidate sequences for a rod of length 3 whose sub-plans are
    // cuts(2) = [2] and cuts(1) = [1]: piece 1 -> [2, 1], 2 -> [1, 2], 3 -> [3].
    fn sequence(piece: usize) -> Vec<usize> {
        match piece {
            1 => vec![2, 1],
            2 => vec![1, 2],
            _ => vec![3],
        }
    }

    fn by_sequence(a: usize, b: usize) -> Ordering {
        compare_cuts(&sequence(a), &sequence(b))
    }

    #[test]
    fn test_select_strict_keeps_first_on_tie() {
        let candidates = [(7.0, 1), (7.0, 2), (6.0, 3)];
        assert_eq!(select_piece(&candidates, 1e-9, false, by_sequence), Some((7.0, 1)));

        let candidates = [(6.0, 1), (7.0, 2), (7.0, 3)];
        assert_eq!(select_piece(&candidates, 1e-9, false, by_sequence), Some((7.0, 2)));
    }

    #[test]
    fn test_select_lexicographic_tie() {
        let candidates = [(7.0, 1), (7.0, 2), (7.0, 3)];
        assert_eq!(select_piece(&candidates, 1e-9, true, by_sequence), Some((7.0, 2)));

        let candidates = [(7.0, 1), (6.0, 2), (7.0, 3)];
        assert_eq!(select_piece(&candidates, 1e-9, true, by_sequence), Some((7.0, 1)));
    }

    #[test]
    fn test_select_tie_window_anchored_at_best() {
        // Each step is within epsilon of the previous one, but only the
        // first two are within epsilon of the best.
        let candidates = [(8.0, 3), (7.6, 1), (7.2, 2)];
        let chosen = select_piece(&candidates, 0.5, true, by_sequence);
        assert_eq!(chosen, Some((7.6, 1)));
    }

    #[test]
    fn test_select_order_only_consulted_on_ties() {
        let panics = |_: usize, _: usize| -> Ordering { panic!("order evaluated without a tie") };
        assert_eq!(select_piece(&[(9.0, 1), (5.0, 2)], 1e-9, true, panics), Some((9.0, 1)));
        assert_eq!(select_piece(&[(2.0, 1)], 1e-9, true, panics), Some((2.0, 1)));
        assert_eq!(select_piece(&[], 1e-9, true, panics), None);
    }
}
