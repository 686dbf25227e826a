//! Numeric trait shared by every range type
use num_traits::{Float, FloatConst, NumCast};

/// Floating-point type usable as the bound / coefficient type of a range
///
/// This is implemented for `f32` and `f64`; the blanket implementation means
/// that any type with the same capabilities also qualifies.
pub trait Scalar:
    Float
    + FloatConst
    + std::str::FromStr
    + std::fmt::Display
    + std::fmt::Debug
    + Default
    + Send
    + Sync
    + 'static
{
    /// Returns `0.5`
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Returns `2.0`
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Converts from another scalar type
    ///
    /// Values which can't be represented become `NaN` instead of panicking.
    #[inline]
    fn cast_from<U: Scalar>(u: U) -> Self {
        <Self as NumCast>::from(u).unwrap_or_else(Self::nan)
    }

    /// Converts from an `f64` constant (see [`Scalar::cast_from`])
    #[inline]
    fn lit(v: f64) -> Self {
        Self::cast_from(v)
    }
}

impl<T> Scalar for T where
    T: Float
        + FloatConst
        + std::str::FromStr
        + std::fmt::Display
        + std::fmt::Debug
        + Default
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(f32::half(), 0.5);
        assert_eq!(f64::two(), 2.0);
        assert_eq!(f32::lit(0.25), 0.25f32);
    }

    #[test]
    fn cast() {
        assert_eq!(f32::cast_from(1.5f64), 1.5f32);
        assert_eq!(f64::cast_from(-3.0f32), -3.0);
        assert!(f32::cast_from(f64::NAN).is_nan());
    }
}
