// =============================================================================
// Local Map-Reduce Module
// =============================================================================
//
// Single-machine, process-level map-reduce over the close column of a price
// series: a balanced partitioner, a bounded worker pool dispatching a pure
// per-chunk transform, and a positional reducer that restores the original
// order exactly before deriving base statistics.

pub mod mapper;
pub mod partition;
pub mod reducer;

pub use mapper::{map_chunks, ChunkMapper, CloseMapper};
pub use partition::{partition, Chunk};
pub use reducer::{compute_base_stats, reduce_concat, BaseStats};
