pub mod constants;
pub mod number;
pub mod progress;
pub mod rounding;

pub use constants::*;
pub use number::parse_temperature;
pub use progress::ProgressReporter;
pub use rounding::{round_java, round_to_tenth};
