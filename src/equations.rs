//! The state update and extrapolation equations of the alpha-beta filter.
//!
//! These are pure functions; the caller owns all state.

use core::ops::{Add, Div, Mul, Sub};

/// Extrapolates the state to the next cycle assuming constant velocity.
///
/// ```
/// use alpha_beta_estimation::equations::extrapolate;
/// assert_eq!(extrapolate(30000.0, 5.0, 40.0), 30200.0);
/// ```
#[inline]
pub fn extrapolate<T>(estimate: T, time_interval: T, velocity: T) -> T
where
    T: Add<Output = T> + Mul<Output = T>,
{
    estimate + time_interval * velocity
}

/// Corrects the predicted position towards the measurement, weighted by `alpha`.
#[inline]
pub fn update_position<T>(prediction: T, alpha: T, measurement: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    prediction + alpha * (measurement - prediction)
}

/// Corrects the velocity by the innovation per time interval, weighted by `beta`.
///
/// ## Panics
/// Integer types panic if `time_interval` is zero; floating-point types
/// produce non-finite values.
#[inline]
pub fn update_velocity<T>(
    prediction: T,
    prior_velocity: T,
    beta: T,
    measurement: T,
    time_interval: T,
) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    prior_velocity + beta * (measurement - prediction) / time_interval
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrapolate() {
        assert_eq!(extrapolate(0.0, 5.0, 0.0), 0.0);
        assert_eq!(extrapolate(5.0, 5.0, 1.0), 10.0);
        assert_eq!(extrapolate(-2.5_f32, 0.5, 3.0), -1.0);
        assert_eq!(extrapolate(10, 2, -3), 4);
    }

    #[test]
    fn test_update_position() {
        assert_eq!(update_position(0.0, 0.5, 10.0), 5.0);
        assert_eq!(update_position(30200.0, 0.2, 30171.0), 30194.2);
        assert_eq!(update_position(4.0, 1.0, 7.0), 7.0);
    }

    #[test]
    fn test_update_velocity() {
        assert_eq!(update_velocity(0.0, 0.0, 0.5, 10.0, 5.0), 1.0);
        assert_eq!(update_velocity(30200.0, 40.0, 0.1, 30171.0, 5.0), 39.42);
    }

    #[test]
    fn test_equations_are_deterministic() {
        let first = update_velocity(1.1_f64, 2.2, 0.3, 4.4, 5.0);
        let second = update_velocity(1.1_f64, 2.2, 0.3, 4.4, 5.0);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
