//! Cooperative anchored shuffle
//!
//! Shuffling tens of thousands of tracks in one go can hold an executor
//! thread for noticeably long. The cooperative variant runs the same
//! Fisher-Yates pass but hands control back to the scheduler every
//! [`ShuffleConfig::yield_batch`] pool positions.
//!
//! Yield points never touch the random source, so for the same generator
//! state the cooperative and blocking shuffles produce identical output.
//! The result is only returned once the pass completes; dropping the future
//! part-way leaves the caller with nothing.

use crate::error::Result;
use crate::random::RandomSource;
use crate::shuffle::{anchor_pool, apply_order, assemble_order, clamp_anchor, swap_step};
use crate::types::ShuffleConfig;
use async_trait::async_trait;
use tracing::{debug, trace};

/// Scheduler yield hook used between shuffle batches
#[async_trait]
pub trait Checkpoint: Send {
    /// Suspend briefly so other tasks on the executor can run
    async fn checkpoint(&mut self);
}

/// Yields to the tokio scheduler
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioYield;

#[async_trait]
impl Checkpoint for TokioYield {
    async fn checkpoint(&mut self) {
        tokio::task::yield_now().await;
    }
}

/// Anchored shuffle that periodically yields to the scheduler
///
/// Semantics match [`crate::anchored_shuffle`]. The config is validated
/// before any randomness is consumed.
pub async fn anchored_shuffle_cooperative<T, R, Y>(
    queue: &[T],
    anchor: usize,
    rng: &mut R,
    config: &ShuffleConfig,
    yielder: &mut Y,
) -> Result<Vec<T>>
where
    T: Clone,
    R: RandomSource + ?Sized,
    Y: Checkpoint + ?Sized,
{
    config.validate()?;

    if queue.len() <= 1 {
        return Ok(queue.to_vec());
    }

    let order = shuffle_order_cooperative(queue.len(), anchor, rng, config, yielder).await?;
    Ok(apply_order(queue, &order))
}

/// Anchored shuffle on the tokio scheduler with the default batch size
pub async fn anchored_shuffle_async<T, R>(queue: &[T], anchor: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    anchored_shuffle_cooperative(
        queue,
        anchor,
        rng,
        &ShuffleConfig::default(),
        &mut TokioYield,
    )
    .await
}

/// Cooperative counterpart of [`crate::shuffle_order`]
pub async fn shuffle_order_cooperative<R, Y>(
    len: usize,
    anchor: usize,
    rng: &mut R,
    config: &ShuffleConfig,
    yielder: &mut Y,
) -> Result<Vec<usize>>
where
    R: RandomSource + ?Sized,
    Y: Checkpoint + ?Sized,
{
    config.validate()?;

    if len <= 1 {
        return Ok((0..len).collect());
    }

    let anchor = clamp_anchor(anchor, len);
    let mut pool = anchor_pool(len, anchor);

    if pool.len() > config.yield_batch {
        debug!(
            "Cooperative shuffle of {} tracks, yielding every {} positions",
            len, config.yield_batch
        );
    }

    for i in (1..pool.len()).rev() {
        swap_step(&mut pool, i, rng)?;
        if i % config.yield_batch == 0 {
            trace!("Shuffle checkpoint at pool position {}", i);
            yielder.checkpoint().await;
        }
    }

    Ok(assemble_order(&pool, anchor, len))
}
