/// Streaming accumulator for one `(group, field × measure)` cell.
///
/// Mean and variance use Welford's online update, so both are well-defined
/// *prefix* aggregates: after any number of observations they equal the
/// batch computation over the values seen so far. `min`/`max` keep their
/// infinity sentinels until the first observation arrives.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStats {
    pub sum: f64,
    pub count: u64,
    pub min: f64,
    pub max: f64,
    mean: f64,
    m2: f64,
}

impl Default for FieldStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldStats {
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Fold one observation into the running aggregates.
    pub fn record(&mut self, x: f64) {
        self.count += 1;
        self.sum += x;
        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }

        // Welford
        let n = self.count as f64;
        let delta = x - self.mean;
        self.mean += delta / n;
        let delta2 = x - self.mean;
        self.m2 += delta * delta2;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Population standard deviation of everything recorded so far.
    pub fn population_std_dev(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.m2 / self.count as f64).sqrt()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
