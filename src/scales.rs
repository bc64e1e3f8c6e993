use serde::{Deserialize, Serialize};

/// Continuous linear mapping from a data domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new_linear((0.0, 0.0), (0.0, 0.0))
    }
}

impl LinearScale {
    /// A zero-width domain is widened by half a unit on each side.
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d_min, mut d_max) = domain;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        Self {
            domain: (d_min, d_max),
            range,
        }
    }

    /// Non-finite results collapse to 0.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let res = r0 + (value - d0) / (d1 - d0) * (r1 - r0);
        if res.is_finite() {
            res
        } else {
            0.0
        }
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (r1 - r0).abs() < f64::EPSILON {
            return d0;
        }
        let res = d0 + (pixel - r0) / (r1 - r0) * (d1 - d0);
        if res.is_finite() {
            res
        } else {
            d0
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Same scale over a different domain.
    pub fn with_domain(&self, domain: (f64, f64)) -> Self {
        Self::new_linear(domain, self.range)
    }

    /// Evenly spaced "nice" values inside the domain: multiples of 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || !d0.is_finite() || !d1.is_finite() {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }

        let reverse = d1 < d0;
        let (start, stop) = if reverse { (d1, d0) } else { (d0, d1) };
        let increment = tick_increment(start, stop, count);
        if increment == 0.0 || !increment.is_finite() {
            return Vec::new();
        }

        let mut ticks: Vec<f64> = if increment > 0.0 {
            let first = (start / increment).ceil() as i64;
            let last = (stop / increment).floor() as i64;
            (first..=last).map(|i| i as f64 * increment).collect()
        } else {
            // Negative increments hold the inverse step, which keeps decimal ticks exact.
            let inverse = -increment;
            let first = (start * inverse).ceil() as i64;
            let last = (stop * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        };

        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

/// Tick step for `count` ticks over `[start, stop]`. Returns `-1 / step` when the step is below 1.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}
