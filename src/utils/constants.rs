/// Record layout
pub const FIELD_SEPARATOR: u8 = b';';
pub const RECORD_TERMINATOR: u8 = b'\n';

/// Initial capacity of a chunk's identity table; generated 1BRC datasets have
/// at most ten thousand distinct stations
pub const DEFAULT_STATION_CAPACITY: usize = 10_000;

/// Default log filter for the binary
pub const DEFAULT_LOG_FILTER: &str = "brc_processor=warn";
pub const VERBOSE_LOG_FILTER: &str = "brc_processor=debug";
