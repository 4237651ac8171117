//! Shuffle algorithms for queue randomization
//!
//! Implements a plain Fisher-Yates copy and the anchored shuffle used when the
//! user turns shuffle on mid-playback: the currently playing track keeps its
//! slot while every other track is permuted uniformly around it.

use crate::error::Result;
use crate::random::RandomSource;
use tracing::warn;

/// Shuffle a copy of the whole queue
///
/// Each element has equal probability of landing at any position.
/// The input slice is left untouched.
pub fn full_shuffle<T, R>(queue: &[T], rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut shuffled = queue.to_vec();
    if shuffled.len() <= 1 {
        return Ok(shuffled);
    }

    for i in (1..shuffled.len()).rev() {
        let j = rng.next_index(i)?;
        if i != j {
            shuffled.swap(i, j);
        }
    }

    Ok(shuffled)
}

/// Shuffle a copy of the queue while keeping the anchor element in place
///
/// The element at `anchor` (clamped to the last valid index) stays at
/// `anchor`; the other `n - 1` elements are uniformly permuted across the
/// remaining slots.
///
/// # Example
///
/// ```rust
/// use cadence_shuffle::anchored_shuffle;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let queue = vec!["A", "B", "C", "D", "E"];
/// let mut rng = StdRng::seed_from_u64(42);
/// let shuffled = anchored_shuffle(&queue, 2, &mut rng).unwrap();
///
/// assert_eq!(shuffled[2], "C");
/// assert_eq!(shuffled.len(), queue.len());
/// ```
pub fn anchored_shuffle<T, R>(queue: &[T], anchor: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    if queue.len() <= 1 {
        return Ok(queue.to_vec());
    }

    let order = shuffle_order(queue.len(), anchor, rng)?;
    Ok(apply_order(queue, &order))
}

/// Generate an anchored shuffle order for a queue of `len` items
///
/// `order[i]` is the source index of the element that ends up at position
/// `i`. The clamped anchor always maps to itself.
pub fn shuffle_order<R>(len: usize, anchor: usize, rng: &mut R) -> Result<Vec<usize>>
where
    R: RandomSource + ?Sized,
{
    if len <= 1 {
        return Ok((0..len).collect());
    }

    let anchor = clamp_anchor(anchor, len);
    let mut pool = anchor_pool(len, anchor);

    for i in (1..pool.len()).rev() {
        swap_step(&mut pool, i, rng)?;
    }

    Ok(assemble_order(&pool, anchor, len))
}

/// Map a shuffle order onto the queue it was generated for
pub(crate) fn apply_order<T: Clone>(queue: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&source| queue[source].clone()).collect()
}

/// Coerce an anchor into `[0, len - 1]`
///
/// `len` must be non-zero.
pub(crate) fn clamp_anchor(anchor: usize, len: usize) -> usize {
    let last = len - 1;
    if anchor > last {
        warn!(
            "Shuffle anchor {} out of range for queue of {} tracks, clamping to {}",
            anchor, len, last
        );
        last
    } else {
        anchor
    }
}

/// Every index in `0..len` except the anchor, in ascending order
pub(crate) fn anchor_pool(len: usize, anchor: usize) -> Vec<usize> {
    (0..len).filter(|&i| i != anchor).collect()
}

/// One Fisher-Yates step: swap pool slot `i` with a uniform slot in `0..=i`
pub(crate) fn swap_step<R>(pool: &mut [usize], i: usize, rng: &mut R) -> Result<()>
where
    R: RandomSource + ?Sized,
{
    let j = rng.next_index(i)?;
    if i != j {
        pool.swap(i, j);
    }
    Ok(())
}

/// Rebuild the full order with the anchor fixed and the pool filling the rest
pub(crate) fn assemble_order(pool: &[usize], anchor: usize, len: usize) -> Vec<usize> {
    let mut remaining = pool.iter().copied();
    (0..len)
        .map(|i| {
            if i == anchor {
                anchor
            } else {
                // Pool holds exactly len - 1 entries, one per non-anchor slot
                remaining.next().unwrap_or(i)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShuffleError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// Replays a fixed list of draws, failing once exhausted
    struct ScriptedSource {
        draws: Vec<usize>,
    }

    impl RandomSource for ScriptedSource {
        fn next_index(&mut self, upper: usize) -> Result<usize> {
            if self.draws.is_empty() {
                return Err(ShuffleError::RandomSource("script exhausted".to_string()));
            }
            let draw = self.draws.remove(0);
            assert!(draw <= upper, "scripted draw {} above {}", draw, upper);
            Ok(draw)
        }
    }

    #[test]
    fn anchor_stays_in_place() {
        let queue = vec!['A', 'B', 'C', 'D', 'E'];
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let shuffled = anchored_shuffle(&queue, 2, &mut rng).unwrap();
            assert_eq!(shuffled[2], 'C');

            let rest: HashSet<char> = shuffled
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != 2)
                .map(|(_, c)| *c)
                .collect();
            assert_eq!(rest, HashSet::from(['A', 'B', 'D', 'E']));
        }
    }

    #[test]
    fn empty_queue_returns_empty() {
        let queue: Vec<u32> = vec![];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(anchored_shuffle(&queue, 0, &mut rng).unwrap().is_empty());
        assert!(full_shuffle(&queue, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn single_track_with_out_of_range_anchor() {
        let queue = vec!["X"];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(anchored_shuffle(&queue, 5, &mut rng).unwrap(), vec!["X"]);
    }

    #[test]
    fn out_of_range_anchor_clamps_to_last() {
        let queue: Vec<u32> = (0..6).collect();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            let shuffled = anchored_shuffle(&queue, 99, &mut rng).unwrap();
            assert_eq!(shuffled[5], 5);
        }
    }

    #[test]
    fn order_follows_scripted_draws() {
        // len 4, anchor 1 -> pool [0, 2, 3]
        // i = 2, j = 0 -> [3, 2, 0]
        // i = 1, j = 1 -> unchanged
        let mut source = ScriptedSource {
            draws: vec![0, 1],
        };
        let order = shuffle_order(4, 1, &mut source).unwrap();
        assert_eq!(order, vec![3, 1, 2, 0]);
        assert!(source.draws.is_empty());
    }

    #[test]
    fn full_shuffle_follows_scripted_draws() {
        // i = 2, j = 0 -> [c, b, a]; i = 1, j = 0 -> [b, c, a]
        let mut source = ScriptedSource {
            draws: vec![0, 0],
        };
        let shuffled = full_shuffle(&['a', 'b', 'c'], &mut source).unwrap();
        assert_eq!(shuffled, vec!['b', 'c', 'a']);
    }

    #[test]
    fn random_source_failure_propagates() {
        let mut source = ScriptedSource { draws: vec![] };
        let result = anchored_shuffle(&[1, 2, 3], 0, &mut source);
        assert_eq!(
            result,
            Err(ShuffleError::RandomSource("script exhausted".to_string()))
        );
    }

    #[test]
    fn two_tracks_only_one_arrangement() {
        let mut rng = StdRng::seed_from_u64(9);
        for anchor in 0..2 {
            let shuffled = anchored_shuffle(&["a", "b"], anchor, &mut rng).unwrap();
            assert_eq!(shuffled, vec!["a", "b"]);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let queue = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let snapshot = queue.clone();
        let mut rng = StdRng::seed_from_u64(21);

        let _ = anchored_shuffle(&queue, 3, &mut rng).unwrap();
        let _ = full_shuffle(&queue, &mut rng).unwrap();

        assert_eq!(queue, snapshot);
    }

    #[test]
    fn assemble_places_anchor() {
        assert_eq!(assemble_order(&[2, 0], 1, 3), vec![2, 1, 0]);
        assert_eq!(assemble_order(&[1, 2], 0, 3), vec![0, 1, 2]);
    }
}
