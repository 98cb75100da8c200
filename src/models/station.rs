/// Running min/max/sum/count for a single station.
///
/// Always created from a first observation, so `count >= 1` and
/// `min <= max` hold for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationAggregate {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: i64,
}

impl StationAggregate {
    pub fn new(temperature: f64) -> Self {
        Self {
            min: temperature,
            max: temperature,
            sum: temperature,
            count: 1,
        }
    }

    /// Fold one more observation into the aggregate
    #[inline]
    pub fn observe(&mut self, temperature: f64) {
        self.min = self.min.min(temperature);
        self.max = self.max.max(temperature);
        self.sum += temperature;
        self.count += 1;
    }

    /// Combine a partial aggregate for the same station
    #[inline]
    pub fn merge(&mut self, other: &StationAggregate) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}
