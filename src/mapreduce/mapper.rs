// =============================================================================
// Parallel Mapper — bounded worker pool over chunks
// =============================================================================
//
// The map stage applies a pure, stateless per-chunk transform on a bounded
// worker pool and reassembles the outputs positionally, so the result order
// never depends on worker completion order.
//
// The transform is pluggable: `ChunkMapper` is the seam where a heavier
// per-chunk workload (e.g. partial statistics for a tree reduction) slots in
// without touching the scheduling code.  The engine's own transform is the
// identity close-copy.
//
// The pool is scoped to a single call — built, used, torn down — so there is
// no process-global pool state to bootstrap or leak.  When the effective
// worker count is 1 (or there is only one chunk), the chunks are mapped
// inline: pool construction would cost more than it saves at that size.
// =============================================================================

use rayon::prelude::*;
use tracing::debug;

use crate::error::EngineError;
use crate::mapreduce::partition::Chunk;

/// A pure per-chunk transform executed by the map stage.
///
/// Implementations must not share mutable state: each worker receives a
/// disjoint chunk and returns an owned output.
pub trait ChunkMapper: Sync {
    type Output: Send;

    fn map_chunk(&self, chunk: &Chunk) -> Result<Self::Output, EngineError>;
}

/// The engine's map transform: materialize the chunk's close values as an
/// independent sequence.
pub struct CloseMapper;

impl ChunkMapper for CloseMapper {
    type Output = Vec<f64>;

    fn map_chunk(&self, chunk: &Chunk) -> Result<Self::Output, EngineError> {
        Ok(chunk.values.clone())
    }
}

/// Map every chunk on a pool of at most `worker_count` threads.
///
/// Outputs are returned in chunk-index order.  If any worker fails, the whole
/// call fails with [`EngineError::Computation`] and partial results are
/// discarded — there is no partial-success contract.
pub fn map_chunks<M: ChunkMapper>(
    mapper: &M,
    chunks: &[Chunk],
    worker_count: usize,
) -> Result<Vec<M::Output>, EngineError> {
    let workers = worker_count.max(1);

    if workers == 1 || chunks.len() <= 1 {
        debug!(chunks = chunks.len(), "map stage running inline");
        return chunks.iter().map(|c| mapper.map_chunk(c)).collect();
    }

    debug!(chunks = chunks.len(), workers, "map stage dispatching to pool");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| EngineError::computation(format!("failed to build worker pool: {e}")))?;

    // `par_iter` is positional: the collected Vec is in chunk-index order no
    // matter which worker finishes first, and the first Err aborts the call.
    pool.install(|| {
        chunks
            .par_iter()
            .map(|c| mapper.map_chunk(c))
            .collect::<Result<Vec<_>, _>>()
    })
}

/// Effective worker count for the map stage: available parallelism capped at
/// `cap`, never below 1.
pub fn resolve_worker_count(cap: usize) -> usize {
    let available = std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1);
    available.min(cap.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapreduce::partition::partition;

    /// A mapper that fails on chunks containing a negative value, used to
    /// exercise the fail-the-whole-call contract.
    struct RejectNegatives;

    impl ChunkMapper for RejectNegatives {
        type Output = Vec<f64>;

        fn map_chunk(&self, chunk: &Chunk) -> Result<Self::Output, EngineError> {
            if chunk.values.iter().any(|v| *v < 0.0) {
                return Err(EngineError::computation(format!(
                    "negative value in chunk {}",
                    chunk.index
                )));
            }
            Ok(chunk.values.clone())
        }
    }

    /// A mapper that sleeps longer on earlier chunks, so later chunks finish
    /// first and positional reassembly is actually exercised.
    struct StaggeredDelay;

    impl ChunkMapper for StaggeredDelay {
        type Output = Vec<f64>;

        fn map_chunk(&self, chunk: &Chunk) -> Result<Self::Output, EngineError> {
            let delay = 20u64.saturating_sub(chunk.index as u64 * 5);
            std::thread::sleep(std::time::Duration::from_millis(delay));
            Ok(chunk.values.clone())
        }
    }

    #[test]
    fn identity_map_preserves_values_and_order() {
        let values: Vec<f64> = (0..17).map(|x| x as f64).collect();
        let chunks = partition(&values, 4);
        let mapped = map_chunks(&CloseMapper, &chunks, 4).unwrap();

        let flat: Vec<f64> = mapped.into_iter().flatten().collect();
        assert_eq!(flat, values);
    }

    #[test]
    fn output_order_independent_of_completion_order() {
        let values: Vec<f64> = (0..40).map(|x| x as f64).collect();
        let chunks = partition(&values, 4);
        let mapped = map_chunks(&StaggeredDelay, &chunks, 4).unwrap();

        let flat: Vec<f64> = mapped.into_iter().flatten().collect();
        assert_eq!(flat, values);
    }

    #[test]
    fn worker_failure_fails_whole_call() {
        let values = vec![1.0, 2.0, -3.0, 4.0, 5.0, 6.0];
        let chunks = partition(&values, 3);
        let err = map_chunks(&RejectNegatives, &chunks, 3).unwrap_err();
        assert!(matches!(err, EngineError::Computation(_)));
    }

    #[test]
    fn single_worker_runs_inline() {
        let values = vec![3.0, 1.0, 4.0];
        let chunks = partition(&values, 1);
        let mapped = map_chunks(&CloseMapper, &chunks, 1).unwrap();
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0], values);
    }

    #[test]
    fn empty_chunk_list_yields_empty_output() {
        let mapped = map_chunks(&CloseMapper, &[], 4).unwrap();
        assert!(mapped.is_empty());
    }

    #[test]
    fn resolve_worker_count_bounds() {
        assert!(resolve_worker_count(4) >= 1);
        assert!(resolve_worker_count(4) <= 4);
        assert_eq!(resolve_worker_count(0), 1);
    }
}
