pub mod chunk_aggregator;
pub mod data_merger;
pub mod parallel_processor;
pub mod station_hasher;

pub use chunk_aggregator::{ChunkAggregator, StationMap};
pub use data_merger::DataMerger;
pub use parallel_processor::ParallelProcessor;
pub use station_hasher::StationHasher;
