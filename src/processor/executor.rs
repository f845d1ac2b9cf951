//! Fan-out/fan-in over [`Chunk`]s.
//!
//! Every call gets its own rayon pool sized to the configured worker count.
//! The caller blocks until all chunks are done. Results come back in chunk
//! order no matter which worker finishes first, so anything order-sensitive
//! is decided in the sequential combine step after the join.

use rayon::{
    ThreadPool, ThreadPoolBuilder,
    iter::{IntoParallelIterator, ParallelIterator},
};
use tracing::{debug, warn};

use crate::processor::{
    config::ProcessorConfig,
    partition::{Chunk, partition},
};

#[derive(Debug, Clone, Copy)]
pub struct Executor {
    workers: usize,
}

impl Executor {
    pub fn new(config: &ProcessorConfig) -> Self {
        Executor {
            workers: config.resolve_workers(),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    fn build_pool(&self) -> Option<ThreadPool> {
        match ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!(workers = self.workers, error = %e, "worker pool unavailable, running on caller thread");
                None
            }
        }
    }

    /// Runs `f` inside a fresh pool so nested rayon work (e.g. `rayon::join`)
    /// stays within the configured width.
    pub fn install<R, F>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match self.build_pool() {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    /// Applies `worker` to each chunk of `[0, len)` and returns the partial
    /// results indexed by chunk.
    pub fn map_chunks<R, F>(&self, op: &'static str, len: usize, worker: F) -> Vec<R>
    where
        F: Fn(Chunk) -> R + Sync + Send,
        R: Send,
    {
        let chunks = partition(len, self.workers);
        if chunks.is_empty() {
            return vec![];
        }
        debug!(op, len, workers = self.workers, chunks = chunks.len(), "fan-out");

        if chunks.len() == 1 {
            return vec![worker(chunks[0])];
        }

        self.install(|| chunks.into_par_iter().map(&worker).collect())
    }

    /// Hands each worker exclusive access to its own chunk of `data`.
    ///
    /// The slices come from `split_at_mut` along the chunk boundaries, so no
    /// element is reachable from two workers.
    pub fn for_each_chunk_mut<T, F>(&self, op: &'static str, data: &mut [T], worker: F)
    where
        T: Send,
        F: Fn(Chunk, &mut [T]) + Sync + Send,
    {
        let chunks = partition(data.len(), self.workers);
        if chunks.is_empty() {
            return;
        }
        debug!(op, len = data.len(), workers = self.workers, chunks = chunks.len(), "fan-out");

        let mut parts = Vec::with_capacity(chunks.len());
        let mut rest = data;
        for chunk in chunks {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(chunk.len());
            parts.push((chunk, head));
            rest = tail;
        }

        if parts.len() == 1 {
            for (chunk, slice) in parts {
                worker(chunk, slice);
            }
            return;
        }

        self.install(|| {
            parts
                .into_par_iter()
                .for_each(|(chunk, slice)| worker(chunk, slice))
        });
    }
}
