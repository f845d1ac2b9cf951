use std::ops::Range;

/// Half-open index range `[start, end)` handled by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Splits `[0, len)` into at most `workers` contiguous chunks of
/// `ceil(len / workers)` elements, in ascending order.
///
/// Chunks starting at or past `len` are dropped, so every returned chunk is
/// non-empty and `len == 0` yields no chunks. `workers == 0` is treated as 1.
pub fn partition(len: usize, workers: usize) -> Vec<Chunk> {
    if len == 0 {
        return vec![];
    }

    let workers = workers.max(1);
    let chunk_size = len.div_ceil(workers);

    (0..workers)
        .map(|i| (i, i * chunk_size))
        .take_while(|&(_, start)| start < len)
        .map(|(index, start)| Chunk {
            index,
            start,
            end: (start + chunk_size).min(len),
        })
        .collect()
}
