pub mod chunk_planner;
pub mod file_mapper;

pub use chunk_planner::ChunkPlanner;
pub use file_mapper::MappedFile;
