use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use crate::models::StationAggregate;
use crate::utils::rounding::round_to_tenth;

/// Final per-station aggregates, ordered bytewise by station identifier.
///
/// Displays as `{id1=min/mean/max, id2=min/mean/max, ...}` with every value
/// rounded to one decimal place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationSummary {
    stations: BTreeMap<Vec<u8>, StationAggregate>,
}

impl StationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a summary from borrowed identifiers, copying each one exactly once
    pub fn from_stations<'a, I>(stations: I) -> Self
    where
        I: IntoIterator<Item = (&'a [u8], StationAggregate)>,
    {
        Self {
            stations: stations
                .into_iter()
                .map(|(name, agg)| (name.to_vec(), agg))
                .collect(),
        }
    }

    pub fn get(&self, station: &str) -> Option<&StationAggregate> {
        self.stations.get(station.as_bytes())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &StationAggregate)> {
        self.stations.iter().map(|(name, agg)| (name.as_slice(), agg))
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Total number of records contributing to the summary
    pub fn record_count(&self) -> i64 {
        self.stations.values().map(|agg| agg.count).sum()
    }

    /// Write the summary with identifiers copied byte for byte.
    ///
    /// `Display` has to produce UTF-8 and replaces invalid sequences; this
    /// writes the stored identifier bytes unchanged.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"{")?;
        for (i, (name, agg)) in self.stations.iter().enumerate() {
            if i > 0 {
                out.write_all(b", ")?;
            }
            out.write_all(name)?;
            write!(
                out,
                "={:.1}/{:.1}/{:.1}",
                round_to_tenth(agg.min),
                round_to_tenth(agg.mean()),
                round_to_tenth(agg.max)
            )?;
        }
        out.write_all(b"}")
    }
}

impl fmt::Display for StationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, agg)) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{}={:.1}/{:.1}/{:.1}",
                String::from_utf8_lossy(name),
                round_to_tenth(agg.min),
                round_to_tenth(agg.mean()),
                round_to_tenth(agg.max)
            )?;
        }
        f.write_str("}")
    }
}
