use brc_processor::models::StationAggregate;
use brc_processor::processors::{ChunkAggregator, DataMerger, StationHasher, StationMap};
use brc_processor::readers::ChunkPlanner;
use brc_processor::{ParallelProcessor, ProcessingError, StationSummary};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_measurements(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents).expect("Failed to write measurements");
    file.flush().expect("Failed to flush measurements");
    file
}

fn summarise(contents: &[u8], workers: usize) -> String {
    let file = write_measurements(contents);
    ParallelProcessor::new(workers)
        .process_file(file.path())
        .expect("processing failed")
        .to_string()
}

#[test]
fn test_end_to_end_two_stations() {
    assert_eq!(
        summarise(b"A;3.0\nB;-1.2\nA;5.0\n", 1),
        "{A=3.0/4.0/5.0, B=-1.2/-1.2/-1.2}"
    );
    assert_eq!(
        summarise(b"A;3.0\nB;-1.2\nA;5.0\n", 3),
        "{A=3.0/4.0/5.0, B=-1.2/-1.2/-1.2}"
    );
}

#[test]
fn test_end_to_end_single_zero_record() {
    assert_eq!(summarise(b"X;0.0\n", 1), "{X=0.0/0.0/0.0}");
}

#[test]
fn test_missing_trailing_newline() {
    assert_eq!(
        summarise(b"Oslo;-3.0\nOslo;1.0\nLima;18.4", 2),
        "{Lima=18.4/18.4/18.4, Oslo=-3.0/-1.0/1.0}"
    );
}

#[test]
fn test_mean_rounds_ties_upwards() {
    // means of exactly 0.25 and -0.25 round towards positive infinity
    assert_eq!(summarise(b"T;0.2\nT;0.3\n", 1), "{T=0.2/0.3/0.3}");
    assert_eq!(summarise(b"T;-0.2\nT;-0.3\n", 1), "{T=-0.3/-0.2/-0.2}");
}

#[test]
fn test_empty_file_is_size_error() {
    let file = write_measurements(b"");
    let err = ParallelProcessor::new(1).process_file(file.path()).err();

    assert!(matches!(err, Some(ProcessingError::InvalidSize { size: 0 })));
}

#[test]
fn test_small_file_many_workers_is_chunk_error() {
    let file = write_measurements(b"X;0.0\n");
    let err = ParallelProcessor::new(32).process_file(file.path()).err();

    assert!(matches!(
        err,
        Some(ProcessingError::ChunkSize { size: 6, chunks: 32 })
    ));
}

#[test]
fn test_reproducible_with_seed() {
    let data = b"Hamburg;12.0\nBulawayo;8.9\nPalembang;38.8\nHamburg;34.2\n";
    let first = ParallelProcessor::new(2).with_hash_seed(5).process_bytes(data).unwrap();
    let second = ParallelProcessor::new(2).with_hash_seed(5).process_bytes(data).unwrap();

    assert_eq!(first, second);
}

fn arb_measurements() -> impl Strategy<Value = Vec<u8>> {
    let station = prop::sample::select(vec![
        "Hamburg", "Bulawayo", "Palembang", "St. John's", "Cracow", "Abéché", "Zürich", "X",
    ]);
    prop::collection::vec((station, -999i32..=999), 1..300).prop_map(|rows| {
        let mut out = Vec::new();
        for (name, tenths) in rows {
            out.extend_from_slice(format!("{};{:.1}\n", name, tenths as f64 / 10.0).as_bytes());
        }
        out
    })
}

fn aggregate_chunks<'a>(
    hasher: &StationHasher,
    data: &'a [u8],
    chunks: usize,
) -> Vec<StationMap<'a>> {
    let aggregator = ChunkAggregator::new(hasher);
    ChunkPlanner::new(chunks)
        .plan(data)
        .unwrap()
        .into_iter()
        .map(|range| aggregator.aggregate(&data[range]))
        .collect()
}

fn sorted(stations: StationMap<'_>) -> BTreeMap<Vec<u8>, StationAggregate> {
    stations
        .into_iter()
        .map(|(name, agg)| (name.to_vec(), agg))
        .collect()
}

fn assert_equivalent(
    left: &BTreeMap<Vec<u8>, StationAggregate>,
    right: &BTreeMap<Vec<u8>, StationAggregate>,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(left.len(), right.len());
    for ((l_name, l), (r_name, r)) in left.iter().zip(right.iter()) {
        prop_assert_eq!(l_name, r_name);
        prop_assert_eq!(l.min, r.min);
        prop_assert_eq!(l.max, r.max);
        prop_assert_eq!(l.count, r.count);
        // float addition order differs between chunkings
        prop_assert!((l.sum - r.sum).abs() < 1e-6);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_chunk_count_does_not_change_result(data in arb_measurements(), n in 1usize..16) {
        prop_assume!(data.len() / n > 0);
        let hasher = StationHasher::with_seed(11);

        let whole = sorted(DataMerger::new().merge(aggregate_chunks(&hasher, &data, 1)));
        let split = sorted(DataMerger::new().merge(aggregate_chunks(&hasher, &data, n)));

        assert_equivalent(&whole, &split)?;
    }

    #[test]
    fn prop_merge_order_does_not_change_result(
        data in arb_measurements(),
        n in 2usize..16,
        rotation in 0usize..16,
        reverse in any::<bool>(),
    ) {
        prop_assume!(data.len() / n > 0);
        let hasher = StationHasher::new();

        let in_order = sorted(DataMerger::new().merge(aggregate_chunks(&hasher, &data, n)));

        let mut shuffled = aggregate_chunks(&hasher, &data, n);
        let len = shuffled.len();
        shuffled.rotate_left(rotation % len);
        if reverse {
            shuffled.reverse();
        }
        let reordered = sorted(DataMerger::new().merge(shuffled));

        assert_equivalent(&in_order, &reordered)?;
    }

    #[test]
    fn prop_aggregate_invariants(data in arb_measurements(), n in 1usize..8) {
        prop_assume!(data.len() / n > 0);
        let summary: StationSummary = ParallelProcessor::new(n).process_bytes(&data).unwrap();

        let lines = data.iter().filter(|&&b| b == b'\n').count() as i64;
        prop_assert_eq!(summary.record_count(), lines);

        for (_, agg) in summary.iter() {
            prop_assert!(agg.count >= 1);
            prop_assert!(agg.min <= agg.max);
            prop_assert!(agg.min <= agg.mean() + 1e-9);
            prop_assert!(agg.mean() <= agg.max + 1e-9);
        }
    }
}
