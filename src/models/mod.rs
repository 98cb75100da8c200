pub mod station;
pub mod summary;

pub use station::StationAggregate;
pub use summary::StationSummary;
