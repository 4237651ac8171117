//! Cadence - Queue Shuffling
//!
//! Platform-agnostic shuffle algorithms for Cadence play queues.
//!
//! This crate provides:
//! - Plain Fisher-Yates shuffle of a queue copy
//! - Anchored shuffle (current track keeps its slot, everything else is randomized)
//! - Cooperative anchored shuffle that yields to the scheduler on large queues
//! - Pluggable random sources (any `rand` generator, or a fallible custom source)
//!
//! Every shuffle takes the queue by shared reference and returns a new `Vec`,
//! so callers adopt the new order explicitly. No state is kept between calls.
//!
//! # Example: Shuffle around the current track
//!
//! ```rust
//! use cadence_shuffle::{anchored_shuffle, shuffle_order};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let queue = vec!["intro", "verse", "chorus", "bridge", "outro"];
//! let now_playing = 1;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let shuffled = anchored_shuffle(&queue, now_playing, &mut rng).unwrap();
//! assert_eq!(shuffled[now_playing], "verse");
//!
//! // The raw order is handy for restoring the original sequence later
//! let mut rng = StdRng::seed_from_u64(7);
//! let order = shuffle_order(queue.len(), now_playing, &mut rng).unwrap();
//! assert_eq!(order[now_playing], now_playing);
//! ```
//!
//! # Example: Large queues on an async runtime
//!
//! ```rust
//! use cadence_shuffle::{anchored_shuffle_cooperative, ShuffleConfig, TokioYield};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let queue: Vec<u32> = (0..50_000).collect();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let shuffled = anchored_shuffle_cooperative(
//!     &queue,
//!     10,
//!     &mut rng,
//!     &ShuffleConfig::default(),
//!     &mut TokioYield,
//! )
//! .await
//! .unwrap();
//!
//! assert_eq!(shuffled[10], 10);
//! # }
//! ```

mod cooperative;
mod error;
mod random;
mod shuffle;
pub mod types;

// Public exports
pub use cooperative::{
    anchored_shuffle_async, anchored_shuffle_cooperative, shuffle_order_cooperative, Checkpoint,
    TokioYield,
};
pub use error::{Result, ShuffleError};
pub use random::RandomSource;
pub use shuffle::{anchored_shuffle, full_shuffle, shuffle_order};
pub use types::{ShuffleConfig, DEFAULT_YIELD_BATCH};
