/// Online scalar estimator.
///
/// Values arrive one at a time through [`add`]; [`estimation`] reports the
/// current estimate and [`count`] how many values contributed to it.
///
/// [`add`]: Estimator::add
/// [`estimation`]: Estimator::estimation
/// [`count`]: Estimator::count
pub trait Estimator {
    fn add(&mut self, v: f64);

    fn estimation(&self) -> f64;

    fn count(&self) -> u64;

    /// Records a 0/1 indicator, e.g. whether a prediction was correct.
    fn add_indicator(&mut self, hit: bool) {
        self.add(if hit { 1.0 } else { 0.0 });
    }
}
