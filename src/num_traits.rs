use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{One, Zero};

/// The arithmetic required by the estimators and the matrix engine.
///
/// This trait is implemented for every type providing the listed operations,
/// most notably [`f32`] and [`f64`].
pub trait Scalar:
    Copy
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy
        + PartialOrd
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}

/// Decimal rounding of floating-point values.
pub trait RoundHalfUp {
    /// Rounds the value to `places` decimal places, rounding ties away from zero.
    ///
    /// Rounding operates on the shortest decimal representation that
    /// round-trips to the value, not on its binary expansion. Thus `2.0005`
    /// rounds to `2.001` even though the nearest `f64` lies slightly below
    /// the tie. Non-finite values are returned unchanged and a value that
    /// rounds to zero is returned as positive zero.
    fn round_half_up(self, places: usize) -> Self;
}

macro_rules! impl_round_half_up {
    ($float:ty) => {
        impl RoundHalfUp for $float {
            fn round_half_up(self, places: usize) -> Self {
                if !self.is_finite() {
                    return self;
                }

                let mut repr = String::new();
                if write!(repr, "{self}").is_err() {
                    return self;
                }

                match round_decimal_repr(&repr, places) {
                    Some(rounded) => match rounded.parse::<$float>() {
                        Ok(value) if value == 0.0 => 0.0,
                        Ok(value) => value,
                        Err(_) => self,
                    },
                    None => self,
                }
            }
        }
    };
}

impl_round_half_up!(f32);
impl_round_half_up!(f64);

/// Rounds a plain decimal string (optional sign, digits, optional fraction).
///
/// Returns `None` if the fraction has no more than `places` digits.
fn round_decimal_repr(repr: &str, places: usize) -> Option<String> {
    let (negative, magnitude) = match repr.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, repr),
    };

    let (integral, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));
    if fraction.len() <= places {
        return None;
    }

    let mut digits: Vec<u8> = integral
        .bytes()
        .chain(fraction.bytes().take(places))
        .collect();

    if fraction.as_bytes()[places] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }

        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let mut rounded = String::with_capacity(digits.len() + 2);
    if negative {
        rounded.push('-');
    }

    for (index, digit) in digits.iter().enumerate() {
        if index == split {
            rounded.push('.');
        }
        rounded.push(char::from(*digit));
    }

    Some(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_f64() {
        assert_eq!(0.1235_f64.round_half_up(3), 0.124);
        assert_eq!(0.1234_f64.round_half_up(3), 0.123);
        assert_eq!((-0.1235_f64).round_half_up(3), -0.124);
        assert_eq!(9.9995_f64.round_half_up(3), 10.0);
        assert_eq!(0.5_f64.round_half_up(0), 1.0);
        assert_eq!(12.0_f64.round_half_up(3), 12.0);
    }

    #[test]
    fn test_round_half_up_uses_decimal_representation() {
        // The binary value of 2.0005 is 2.000499999..., which a naive
        // `(x * 1000.0).round() / 1000.0` would round down.
        assert_eq!(2.0005_f64.round_half_up(3), 2.001);
        assert_eq!(1.0005_f32.round_half_up(3), 1.001);
    }

    #[test]
    fn test_round_half_up_returns_positive_zero() {
        let rounded = (-0.0004_f64).round_half_up(3);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());

        let tiny = 1e-7_f64.round_half_up(3);
        assert_eq!(tiny, 0.0);
    }

    #[test]
    fn test_round_half_up_non_finite() {
        assert!(f64::NAN.round_half_up(3).is_nan());
        assert_eq!(f64::INFINITY.round_half_up(3), f64::INFINITY);
        assert_eq!(f32::NEG_INFINITY.round_half_up(3), f32::NEG_INFINITY);
    }

    #[test]
    fn test_round_decimal_repr() {
        assert_eq!(round_decimal_repr("0.12", 3), None);
        assert_eq!(round_decimal_repr("7", 3), None);
        assert_eq!(round_decimal_repr("0.9996", 3).as_deref(), Some("1.000"));
        assert_eq!(round_decimal_repr("-99.9999", 2).as_deref(), Some("-100.00"));
        assert_eq!(round_decimal_repr("3.14159", 0).as_deref(), Some("3"));
    }
}
