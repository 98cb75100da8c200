use crate::processors::chunk_aggregator::StationMap;
use std::collections::hash_map::Entry;

/// Folds per-chunk station maps into one
#[derive(Debug, Default)]
pub struct DataMerger;

impl DataMerger {
    pub fn new() -> Self {
        Self
    }

    /// Merge partial aggregates. The first partial becomes the accumulator;
    /// a station seen for the first time moves its aggregate in unchanged.
    /// The result does not depend on the order of `partials`.
    pub fn merge<'a, I>(&self, partials: I) -> StationMap<'a>
    where
        I: IntoIterator<Item = StationMap<'a>>,
    {
        let mut partials = partials.into_iter();
        let mut merged = partials.next().unwrap_or_default();

        for partial in partials {
            for (station, aggregate) in partial {
                match merged.entry(station) {
                    Entry::Occupied(mut existing) => existing.get_mut().merge(&aggregate),
                    Entry::Vacant(vacant) => {
                        vacant.insert(aggregate);
                    }
                }
            }
        }

        merged
    }
}
