use crate::evaluation::estimators::Estimator;

/// Running mean `sum / count`, plus the extremes seen so far.
///
/// NaN inputs are skipped. With no input the mean is NaN.
#[derive(Debug, Clone, Copy)]
pub struct BasicEstimator {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl Default for BasicEstimator {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl BasicEstimator {
    pub fn min(&self) -> f64 {
        if self.count > 0 { self.min } else { f64::NAN }
    }

    pub fn max(&self) -> f64 {
        if self.count > 0 { self.max } else { f64::NAN }
    }
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.count += 1;
        self.sum += v;
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        let e = BasicEstimator::default();
        assert!(e.estimation().is_nan());
        assert!(e.min().is_nan());
        assert!(e.max().is_nan());
        assert_eq!(e.count(), 0);
    }

    #[test]
    fn indicators_average_to_hit_rate() {
        let mut e = BasicEstimator::default();
        for hit in [true, false, true, true] {
            e.add_indicator(hit);
        }
        assert!((e.estimation() - 0.75).abs() < 1e-12);
        assert_eq!(e.count(), 4);
    }

    #[test]
    fn skips_nan_and_tracks_extremes() {
        let mut e = BasicEstimator::default();
        e.add(0.25);
        e.add(f64::NAN);
        e.add(0.75);
        assert_eq!(e.count(), 2);
        assert_eq!(e.min(), 0.25);
        assert_eq!(e.max(), 0.75);
        assert!((e.estimation() - 0.5).abs() < 1e-12);
    }
}
