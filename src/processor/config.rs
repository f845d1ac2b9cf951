//! Execution settings for [`crate::SeriesProcessor`].
//!
//! The worker count is injectable so callers (and tests) can pin it. When it
//! is left unset, hardware parallelism is looked up on every call and never
//! stored, so a process whose CPU affinity changes picks it up immediately.
//!
//! Environment overrides, read by [`ProcessorConfig::from_env`]:
//!
//! - `SERIES_NUM_WORKERS`: fixed worker count. Zero or garbage is ignored.
//! - `SERIES_SORT_THRESHOLD`: range length below which the parallel merge
//!   sort stops splitting. Default: 4096.

use std::num::NonZeroUsize;
use std::thread;

const DEFAULT_SORT_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// `None` resolves to the platform's available parallelism per call.
    pub num_workers: Option<NonZeroUsize>,
    pub sort_threshold: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            num_workers: None,
            sort_threshold: DEFAULT_SORT_THRESHOLD,
        }
    }
}

impl ProcessorConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(val) = std::env::var("SERIES_NUM_WORKERS") {
            config.num_workers = parse_positive(&val).and_then(NonZeroUsize::new);
        }
        if let Ok(val) = std::env::var("SERIES_SORT_THRESHOLD") {
            if let Some(n) = parse_positive(&val) {
                config.sort_threshold = n;
            }
        }
        config
    }

    /// Pin the worker count. Zero is treated as one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.num_workers = Some(NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN));
        self
    }

    pub fn with_sort_threshold(mut self, threshold: usize) -> Self {
        self.sort_threshold = threshold.max(1);
        self
    }

    /// Worker count for one call.
    pub fn resolve_workers(&self) -> usize {
        match self.num_workers {
            Some(n) => n.get(),
            None => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

fn parse_positive(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|&n| n > 0)
}
