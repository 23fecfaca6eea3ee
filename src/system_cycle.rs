use crate::impl_scalar_record;
use core::fmt::{Debug, Formatter};
use uniform_array_derive::UniformArray;

/// The scalar quantities of a single estimation cycle.
///
/// At the start of a cycle, `state_prediction` holds the extrapolation
/// computed at the end of the previous cycle (or at construction of the
/// filter for the first cycle).
#[derive(UniformArray)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct SystemCycle<T> {
    /// The best estimate of the tracked quantity, e.g. a position.
    pub state_estimate: T,
    /// The extrapolated estimate for the next cycle.
    pub state_prediction: T,
    /// The estimated rate of change of the tracked quantity.
    pub state_velocity: T,
    /// The latest raw observation.
    pub measurement: T,
}

impl<T> SystemCycle<T> {
    /// Initializes a new [`SystemCycle`] instance.
    #[inline(always)]
    pub const fn new(state_estimate: T, state_prediction: T, state_velocity: T, measurement: T) -> Self {
        Self {
            state_estimate,
            state_prediction,
            state_velocity,
            measurement,
        }
    }
}

impl<T> Default for SystemCycle<T>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(
            Default::default(),
            Default::default(),
            Default::default(),
            Default::default(),
        )
    }
}

impl<T> Clone for SystemCycle<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state_estimate: self.state_estimate.clone(),
            state_prediction: self.state_prediction.clone(),
            state_velocity: self.state_velocity.clone(),
            measurement: self.measurement.clone(),
        }
    }
}

impl<T> PartialEq for SystemCycle<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.state_estimate == other.state_estimate
            && self.state_prediction == other.state_prediction
            && self.state_velocity == other.state_velocity
            && self.measurement == other.measurement
    }
}

impl<T> Debug for SystemCycle<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SystemCycle")
            .field("state_estimate", &self.state_estimate)
            .field("state_prediction", &self.state_prediction)
            .field("state_velocity", &self.state_velocity)
            .field("measurement", &self.measurement)
            .finish()
    }
}

impl_scalar_record!(SystemCycle, T);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_len() {
        let cycle = SystemCycle::<f32>::default();
        assert_eq!(cycle.len(), 4);
    }

    #[test]
    fn test_index() {
        let cycle = SystemCycle::<f32>::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(cycle[0], 1.0);
        assert_eq!(cycle[1], 2.0);
        assert_eq!(cycle[2], 3.0);
        assert_eq!(cycle[3], 4.0);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = SystemCycle::<f64>::new(1.0, 2.0, 3.0, 4.0);
        let mut copy = original;
        copy.measurement = 10.0;

        assert_eq!(original.measurement, 4.0);
        assert_ne!(original, copy);
    }
}
