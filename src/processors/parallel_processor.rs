use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::models::StationSummary;
use crate::processors::{ChunkAggregator, DataMerger, StationHasher, StationMap};
use crate::readers::{ChunkPlanner, MappedFile};
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::ops::Range;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Runs the whole pipeline: map, plan, aggregate in parallel, merge
pub struct ParallelProcessor {
    max_workers: usize,
    hasher: StationHasher,
    show_progress: bool,
}

impl ParallelProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            hasher: StationHasher::new(),
            show_progress: false,
        }
    }

    pub fn from_config(config: &ProcessorConfig) -> Self {
        let processor = Self::new(config.workers).with_progress(config.show_progress);
        match config.hash_seed {
            Some(seed) => processor.with_hash_seed(seed),
            None => processor,
        }
    }

    pub fn with_hash_seed(mut self, seed: u64) -> Self {
        self.hasher = StationHasher::with_seed(seed);
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Map `path` and summarise every record in it
    pub fn process_file(&self, path: &Path) -> Result<StationSummary> {
        let progress =
            ProgressReporter::new_spinner("Mapping measurements file...", !self.show_progress);

        let mapped = MappedFile::open(path)?;
        info!(path = %mapped.path().display(), bytes = mapped.len(), "processing measurements");

        let summary = self.process_bytes_with_progress(&mapped, Some(&progress))?;

        progress.finish_with_message(&format!(
            "Summarised {} records from {} stations",
            summary.record_count(),
            summary.station_count()
        ));

        // `mapped` is released here, after every worker has joined
        Ok(summary)
    }

    /// Summarise an in-memory buffer of measurements
    pub fn process_bytes(&self, data: &[u8]) -> Result<StationSummary> {
        self.process_bytes_with_progress(data, None)
    }

    fn process_bytes_with_progress(
        &self,
        data: &[u8],
        progress: Option<&ProgressReporter>,
    ) -> Result<StationSummary> {
        let started = Instant::now();

        let ranges = ChunkPlanner::new(self.max_workers).plan(data)?;
        debug!(
            chunks = ranges.len(),
            workers = self.max_workers,
            "planned newline-aligned chunks"
        );

        if let Some(p) = progress {
            p.set_message(&format!("Aggregating {} chunks...", ranges.len()));
        }

        let partials = self.aggregate_chunks(data, &ranges)?;
        debug!(elapsed = ?started.elapsed(), "all chunks aggregated");

        if let Some(p) = progress {
            p.set_message("Merging partial results...");
        }

        let merged = DataMerger::new().merge(partials);
        let summary = StationSummary::from_stations(merged);

        info!(
            stations = summary.station_count(),
            records = summary.record_count(),
            elapsed = ?started.elapsed(),
            "aggregation complete"
        );

        Ok(summary)
    }

    /// Aggregate each range on its own worker and return the per-chunk
    /// results in range order, once every worker has finished.
    pub fn aggregate_chunks<'a>(
        &self,
        data: &'a [u8],
        ranges: &[Range<usize>],
    ) -> Result<Vec<StationMap<'a>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(ranges.len().max(1))
            .thread_name(|i| format!("brc-worker-{}", i))
            .build()?;

        let aggregator = ChunkAggregator::new(&self.hasher);

        // Indexed collect writes each chunk's result into its own slot
        Ok(pool.install(|| {
            ranges
                .par_iter()
                .map(|range| aggregator.aggregate(&data[range.clone()]))
                .collect::<Vec<_>>()
        }))
    }
}

impl Default for ParallelProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
