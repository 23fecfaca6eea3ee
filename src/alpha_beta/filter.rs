use log::trace;

use crate::alpha_beta::types::DEFAULT_TIME_INTERVAL;
use crate::equations::{extrapolate, update_position, update_velocity};
use crate::{EstimationFilter, Measurable, Scalar, SystemCycle};

/// A filter estimating position and velocity using the measure, update and
/// predict cycle of the alpha-beta algorithm.
///
/// The gains are fixed; for `alpha` and `beta` values in `(0, 1]` the filter
/// behaves like a steady-state Kalman filter of a constant-velocity model.
pub struct AlphaBetaFilter<T> {
    cycle: SystemCycle<T>,
    /// The weight of the position correction.
    alpha: T,
    /// The weight of the velocity correction.
    beta: T,
    /// The fixed sampling period between two measurements.
    time_interval: T,
    /// The number of measurements processed.
    iteration: usize,
}

impl<T> AlphaBetaFilter<T> {
    /// Initializes a new instance of the [`AlphaBetaFilter`] struct sampling
    /// every [`DEFAULT_TIME_INTERVAL`] time units.
    ///
    /// ## Arguments
    /// * `initial_state_guess` - The initial guess of the system state, e.g. a position.
    /// * `initial_velocity_guess` - The initial guess of the velocity.
    /// * `alpha` - The factor weight for the estimate of the position.
    /// * `beta` - The factor weight for the estimate of the velocity.
    pub fn new(initial_state_guess: T, initial_velocity_guess: T, alpha: T, beta: T) -> Self
    where
        T: Scalar + From<u8>,
    {
        Self::with_time_interval(
            initial_state_guess,
            initial_velocity_guess,
            alpha,
            beta,
            T::from(DEFAULT_TIME_INTERVAL),
        )
    }

    /// Initializes a new instance of the [`AlphaBetaFilter`] struct with an
    /// explicit sampling period.
    ///
    /// ## Panics
    /// Panics if `time_interval` is zero.
    pub fn with_time_interval(
        initial_state_guess: T,
        initial_velocity_guess: T,
        alpha: T,
        beta: T,
        time_interval: T,
    ) -> Self
    where
        T: Scalar,
    {
        assert!(!time_interval.is_zero(), "the time interval must not be zero");

        let state_prediction = extrapolate(initial_state_guess, time_interval, initial_velocity_guess);
        Self {
            cycle: SystemCycle::new(
                initial_state_guess,
                state_prediction,
                initial_velocity_guess,
                T::zero(),
            ),
            alpha,
            beta,
            time_interval,
            iteration: 0,
        }
    }
}

impl<T> AlphaBetaFilter<T> {
    /// Gets the quantities of the current cycle.
    pub fn cycle_info(&self) -> &SystemCycle<T> {
        &self.cycle
    }

    /// Replaces the quantities of the current cycle, e.g. to re-seed the filter.
    pub fn set_cycle_info(&mut self, cycle: SystemCycle<T>) {
        self.cycle = cycle;
    }

    pub fn alpha(&self) -> T
    where
        T: Copy,
    {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: T) {
        self.alpha = alpha;
    }

    pub fn beta(&self) -> T
    where
        T: Copy,
    {
        self.beta
    }

    pub fn set_beta(&mut self, beta: T) {
        self.beta = beta;
    }

    pub fn time_interval(&self) -> T
    where
        T: Copy,
    {
        self.time_interval
    }

    /// Gets the number of measurements processed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Gets the estimated state of the last cycle.
    pub fn state_estimate(&self) -> T
    where
        T: Copy,
    {
        self.cycle.state_estimate
    }

    /// Gets the estimated velocity of the last cycle.
    pub fn velocity(&self) -> T
    where
        T: Copy,
    {
        self.cycle.state_velocity
    }

    /// Gets the prediction for the upcoming cycle.
    pub fn state_prediction(&self) -> T
    where
        T: Copy,
    {
        self.cycle.state_prediction
    }
}

impl<T> AlphaBetaFilter<T>
where
    T: Scalar,
{
    /// Calculates the position estimate from the prior prediction and the current measurement.
    pub fn calculate_current_state_estimate(&self) -> T {
        update_position(
            self.cycle.state_prediction,
            self.alpha,
            self.cycle.measurement,
        )
    }

    /// Calculates the velocity estimate from the prior prediction and the current measurement.
    pub fn calculate_current_velocity(&self) -> T {
        update_velocity(
            self.cycle.state_prediction,
            self.cycle.state_velocity,
            self.beta,
            self.cycle.measurement,
            self.time_interval,
        )
    }

    /// Calculates the prediction for the next cycle from the current estimate and velocity.
    pub fn calculate_state_extrapolation(&self) -> T {
        extrapolate(
            self.cycle.state_estimate,
            self.time_interval,
            self.cycle.state_velocity,
        )
    }

    /// Incorporates a measurement and prepares the prediction for the next cycle.
    ///
    /// Both corrections use the prediction made in the previous cycle; the
    /// new prediction uses the corrected estimate and velocity.
    pub fn measure(&mut self, measurement: T) {
        self.iteration += 1;
        self.cycle.measurement = measurement;
        self.cycle.state_velocity = self.calculate_current_velocity();
        self.cycle.state_estimate = self.calculate_current_state_estimate();
        self.cycle.state_prediction = self.calculate_state_extrapolation();
        trace!("alpha-beta filter completed cycle {}", self.iteration);
    }
}

impl<T> EstimationFilter<T> for AlphaBetaFilter<T>
where
    T: Scalar,
{
    fn calculate_current_state_estimate(&self) -> T {
        AlphaBetaFilter::calculate_current_state_estimate(self)
    }

    fn calculate_state_extrapolation(&self) -> T {
        AlphaBetaFilter::calculate_state_extrapolation(self)
    }
}

impl<T> Measurable<T> for AlphaBetaFilter<T>
where
    T: Scalar,
{
    fn measure(&mut self, measurement: T) {
        AlphaBetaFilter::measure(self, measurement)
    }
}
