//! # brc-processor
//!
//! Parallel min/mean/max aggregation of `<station>;<temperature>` measurement
//! files. The input is memory-mapped, split into newline-aligned chunks, each
//! chunk is aggregated on its own worker and the partial results are merged
//! into a single sorted summary.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;

pub use self::config::ProcessorConfig;
pub use error::{ProcessingError, Result};
pub use models::{StationAggregate, StationSummary};
pub use processors::ParallelProcessor;
