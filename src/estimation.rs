/// A recursive estimator that corrects a predicted state and extrapolates it.
pub trait EstimationFilter<T> {
    /// Calculates the state estimate of the current cycle from its prediction
    /// and measurement.
    fn calculate_current_state_estimate(&self) -> T;

    /// Calculates the prediction for the next cycle from the current estimate.
    fn calculate_state_extrapolation(&self) -> T;
}

/// A filter that is driven by individual observations.
pub trait Measurable<T> {
    /// Incorporates a new observation, completing one estimation cycle.
    fn measure(&mut self, measurement: T);
}
