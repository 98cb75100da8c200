use crate::models::StationAggregate;
use crate::processors::StationHasher;
use crate::utils::constants::{DEFAULT_STATION_CAPACITY, FIELD_SEPARATOR, RECORD_TERMINATOR};
use crate::utils::parse_temperature;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Per-station aggregates keyed by identifier bytes borrowed from the input
pub type StationMap<'a> = FxHashMap<&'a [u8], StationAggregate>;

/// Aggregates every `<station>;<temperature>` record of one chunk
pub struct ChunkAggregator<'h> {
    hasher: &'h StationHasher,
}

impl<'h> ChunkAggregator<'h> {
    pub fn new(hasher: &'h StationHasher) -> Self {
        Self { hasher }
    }

    /// Scan `chunk` record by record. The last record may lack its trailing
    /// newline; input is assumed well formed.
    pub fn aggregate<'a>(&self, chunk: &'a [u8]) -> StationMap<'a> {
        let mut table = IdentityTable::with_capacity(DEFAULT_STATION_CAPACITY);
        let mut rest = chunk;

        while let Some(sep) = rest.iter().position(|&b| b == FIELD_SEPARATOR) {
            let station = &rest[..sep];
            rest = &rest[sep + 1..];

            let value = match rest.iter().position(|&b| b == RECORD_TERMINATOR) {
                Some(nl) => {
                    let value = &rest[..nl];
                    rest = &rest[nl + 1..];
                    value
                }
                None => std::mem::take(&mut rest),
            };

            table.record(self.hasher.hash(station), station, parse_temperature(value));
        }

        table.into_station_map()
    }
}

struct IdentityEntry<'a> {
    station: &'a [u8],
    aggregate: StationAggregate,
}

/// Chunk-local table keyed by identifier hash.
///
/// The first identifier seen for a hash is kept and compared on every hit;
/// a different identifier with the same hash goes to the overflow table
/// instead of sharing the aggregate.
struct IdentityTable<'a> {
    by_hash: FxHashMap<u64, IdentityEntry<'a>>,
    collisions: StationMap<'a>,
}

impl<'a> IdentityTable<'a> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            by_hash: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            collisions: StationMap::default(),
        }
    }

    #[inline]
    fn record(&mut self, hash: u64, station: &'a [u8], temperature: f64) {
        match self.by_hash.entry(hash) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if entry.station == station {
                    entry.aggregate.observe(temperature);
                } else {
                    self.collisions
                        .entry(station)
                        .and_modify(|agg| agg.observe(temperature))
                        .or_insert_with(|| StationAggregate::new(temperature));
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(IdentityEntry {
                    station,
                    aggregate: StationAggregate::new(temperature),
                });
            }
        }
    }

    fn into_station_map(self) -> StationMap<'a> {
        let mut stations = StationMap::with_capacity_and_hasher(
            self.by_hash.len() + self.collisions.len(),
            Default::default(),
        );
        stations.extend(
            self.by_hash
                .into_values()
                .map(|entry| (entry.station, entry.aggregate)),
        );
        stations.extend(self.collisions);
        stations
    }
}
