// =============================================================================
// Partitioner — balanced contiguous split of an ordered sequence
// =============================================================================
//
// `partition` cuts the input into at most `worker_count` contiguous chunks:
// with `base = N / w` and `rem = N % w`, the first `rem` chunks carry
// `base + 1` elements and the rest carry `base`.  Chunk sizes therefore never
// differ by more than one, and concatenating the chunks in index order
// reproduces the input exactly (no overlap, no gap).
//
// Chunks that would be empty (possible only when `worker_count > N`) are
// dropped, so every emitted chunk is non-empty.
// =============================================================================

use serde::Serialize;

/// A contiguous slice of the close column assigned to one worker, tagged with
/// its position so results can be reassembled in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chunk {
    /// Ordinal of this chunk in the left-to-right emission order.
    pub index: usize,
    /// Offset of the first element within the original sequence.
    pub start: usize,
    /// The chunk's own copy of its values.
    pub values: Vec<f64>,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split `values` into at most `worker_count` balanced, contiguous chunks.
///
/// `worker_count == 0` is clamped to 1.  An empty input yields no chunks.
pub fn partition(values: &[f64], worker_count: usize) -> Vec<Chunk> {
    let workers = worker_count.max(1);
    let n = values.len();
    let base = n / workers;
    let remainder = n % workers;

    let mut chunks = Vec::with_capacity(workers.min(n));
    let mut start = 0;

    for i in 0..workers {
        let size = if i < remainder { base + 1 } else { base };
        if size == 0 {
            continue; // worker_count > N — drop the empty tail chunks
        }
        chunks.push(Chunk {
            index: chunks.len(),
            start,
            values: values[start..start + size].to_vec(),
        });
        start += size;
    }

    chunks
}
