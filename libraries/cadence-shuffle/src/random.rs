//! Random index sources
//!
//! Shuffles draw every swap index through [`RandomSource`]. Any `rand`
//! generator works out of the box; callers with a fallible entropy stream
//! implement the trait themselves and their errors reach the caller unchanged.

use crate::error::Result;
use rand::{Rng, RngCore};

/// Source of uniformly distributed swap indices
pub trait RandomSource {
    /// Draw an index uniformly from `0..=upper`
    fn next_index(&mut self, upper: usize) -> Result<usize>;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_index(&mut self, upper: usize) -> Result<usize> {
        Ok(self.gen_range(0..=upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_indices_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for upper in 0..50 {
            let index = rng.next_index(upper).unwrap();
            assert!(index <= upper);
        }
    }

    #[test]
    fn zero_upper_always_returns_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(rng.next_index(0).unwrap(), 0);
        }
    }

    #[test]
    fn works_through_trait_object() {
        let mut rng = StdRng::seed_from_u64(3);
        let source: &mut dyn RngCore = &mut rng;
        assert!(source.next_index(4).unwrap() <= 4);
    }
}
