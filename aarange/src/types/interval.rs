use crate::{Error, scalar::Scalar};

/// Stores a range, with conservative calculations to guarantee that it always
/// contains the actual value.
///
/// A well-formed interval has `lo <= hi`.  This is a construction contract
/// rather than a runtime check: a few operations (the intersection of disjoint
/// ranges, the reciprocal of a range that straddles zero) can return inverted
/// or `NaN` bounds, which callers detect with [`Interval::is_empty`].
///
/// # Warning
/// This implementation does not set rounding modes, so it may not be _perfect_.
#[derive(Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    lo: T,
    hi: T,
}

impl<T: Scalar> std::fmt::Debug for Interval<T> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        f.debug_tuple("").field(&self.lo).field(&self.hi).finish()
    }
}

impl<T: Scalar> Interval<T> {
    /// Builds a new interval from its bounds
    #[inline]
    pub fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }

    /// Builds the degenerate interval `[v, v]`
    #[inline]
    pub fn point(v: T) -> Self {
        Self { lo: v, hi: v }
    }

    /// Returns the `[NaN, NaN]` interval
    #[inline]
    pub fn nan() -> Self {
        Self::point(T::nan())
    }

    /// Returns the unbounded interval `[-inf, inf]`
    #[inline]
    pub fn everything() -> Self {
        Self::new(T::neg_infinity(), T::infinity())
    }

    /// Returns the lower bound of the interval
    #[inline]
    pub fn lo(&self) -> T {
        self.lo
    }

    /// Returns the upper bound of the interval
    #[inline]
    pub fn hi(&self) -> T {
        self.hi
    }

    /// Calculates the width of the interval
    ///
    /// ```
    /// # use aarange::types::Interval;
    /// let a = Interval::new(2.0f64, 3.0);
    /// assert_eq!(a.width(), 1.0);
    /// let b = Interval::new(2.0f64, 5.0);
    /// assert_eq!(b.width(), 3.0);
    /// ```
    #[inline]
    pub fn width(&self) -> T {
        self.hi - self.lo
    }

    /// Returns the midpoint of the interval
    #[inline]
    pub fn center(&self) -> T {
        (self.hi + self.lo) / T::two()
    }

    /// Returns half of the interval's width
    #[inline]
    pub fn radius(&self) -> T {
        self.width() / T::two()
    }

    /// Checks whether the given value is contained in the interval
    #[inline]
    pub fn contains(&self, v: T) -> bool {
        v >= self.lo && v <= self.hi
    }

    /// Returns `true` if either bound of the interval is `NaN`
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.lo.is_nan() || self.hi.is_nan()
    }

    /// Returns `true` if the interval contains no values
    ///
    /// This is the case for inverted bounds (`lo > hi`) and for `NaN` bounds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.lo <= self.hi)
    }

    /// Converts to an interval over a different scalar type
    pub fn cast<U: Scalar>(self) -> Interval<U> {
        Interval::new(U::cast_from(self.lo), U::cast_from(self.hi))
    }

    /// Checks whether both bounds are identical to `other`'s bounds
    pub fn bounds_eq(&self, other: &Self) -> bool {
        self.lo == other.lo && self.hi == other.hi
    }

    /// Applies a monotonically increasing function to both bounds
    #[inline]
    fn monotone(self, f: impl Fn(T) -> T) -> Self {
        Self::new(f(self.lo), f(self.hi))
    }

    fn domain_error(&self, op: &'static str) -> Error {
        Error::Domain {
            op,
            bounds: self.to_string(),
        }
    }

    ////////////////////////////////////////////////////////////////////////////
    // Reciprocal and powers

    /// Calculates the reciprocal of the interval, `[1/hi, 1/lo]`
    ///
    /// If the interval includes 0, the result is not a valid bound (it may be
    /// inverted or infinite); a warning is logged.  Use
    /// [`try_recip`](Self::try_recip) to get an error instead.
    pub fn recip(self) -> Self {
        if self.lo <= T::zero() && self.hi >= T::zero() {
            log::warn!("reciprocal of {self} straddles zero");
        }
        Self::new(T::one() / self.hi, T::one() / self.lo)
    }

    /// Checked version of [`recip`](Self::recip)
    pub fn try_recip(self) -> Result<Self, Error> {
        if self.lo <= T::zero() && self.hi >= T::zero() {
            Err(self.domain_error("recip"))
        } else {
            Ok(self.recip())
        }
    }

    /// Calculates the square root of the interval
    ///
    /// Negative lower bounds produce a `NaN` bound and a logged warning; use
    /// [`try_sqrt`](Self::try_sqrt) to get an error instead.
    pub fn sqrt(self) -> Self {
        if self.lo < T::zero() {
            log::warn!("sqrt of {self} leaves its domain");
        }
        self.monotone(T::sqrt)
    }

    /// Checked version of [`sqrt`](Self::sqrt)
    pub fn try_sqrt(self) -> Result<Self, Error> {
        if self.lo < T::zero() {
            Err(self.domain_error("sqrt"))
        } else {
            Ok(self.monotone(T::sqrt))
        }
    }

    /// Reciprocal square root
    pub fn rsq(self) -> Self {
        self.sqrt().recip()
    }

    /// Cube root (monotonic over the whole real line)
    pub fn cbrt(self) -> Self {
        self.monotone(T::cbrt)
    }

    /// Raises `self` to the power `b`, computed as `exp(ln(self) * b)`
    pub fn pow(self, b: Self) -> Self {
        (self.ln() * b).exp()
    }

    ////////////////////////////////////////////////////////////////////////////
    // Exponentials and logarithms

    /// Computes the exponent function applied to the interval
    pub fn exp(self) -> Self {
        self.monotone(T::exp)
    }

    /// Computes `2^x` over the interval
    pub fn exp2(self) -> Self {
        self.monotone(T::exp2)
    }

    /// Computes `10^x` over the interval
    pub fn exp10(self) -> Self {
        let ten = T::lit(10.0);
        self.monotone(|v| ten.powf(v))
    }

    /// Computes the natural log of the input interval
    ///
    /// A lower bound at or below zero logs a warning and produces a `NaN` or
    /// infinite bound; see [`try_ln`](Self::try_ln).
    pub fn ln(self) -> Self {
        if self.lo <= T::zero() {
            log::warn!("ln of {self} leaves its domain");
        }
        self.monotone(T::ln)
    }

    /// Checked version of [`ln`](Self::ln)
    pub fn try_ln(self) -> Result<Self, Error> {
        if self.lo <= T::zero() {
            Err(self.domain_error("ln"))
        } else {
            Ok(self.monotone(T::ln))
        }
    }

    /// Base-2 logarithm
    pub fn log2(self) -> Self {
        if self.lo <= T::zero() {
            log::warn!("log2 of {self} leaves its domain");
        }
        self.monotone(T::log2)
    }

    /// Base-10 logarithm
    pub fn log10(self) -> Self {
        if self.lo <= T::zero() {
            log::warn!("log10 of {self} leaves its domain");
        }
        self.monotone(T::log10)
    }

    ////////////////////////////////////////////////////////////////////////////
    // Rounding and clamping

    /// Snap to the largest less-than-or-equal value
    pub fn floor(self) -> Self {
        self.monotone(T::floor)
    }

    /// Snap to the smallest greater-than-or-equal value
    pub fn ceil(self) -> Self {
        self.monotone(T::ceil)
    }

    /// Round to the nearest integer, with halves rounding up
    pub fn round(self) -> Self {
        let h = T::half();
        self.monotone(|v| (v + h).floor())
    }

    /// Fractional part; always `[0, 1]`
    pub fn frac(self) -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Sign function (`-1`, `0`, or `1` at each bound)
    pub fn sgn(self) -> Self {
        let s = |v: T| {
            if v < T::zero() {
                -T::one()
            } else if v > T::zero() {
                T::one()
            } else {
                T::zero()
            }
        };
        self.monotone(s)
    }

    /// Calculates the absolute value of the interval
    pub fn abs(self) -> Self {
        if self.lo < T::zero() {
            if self.hi > T::zero() {
                Self::new(T::zero(), self.hi.max(-self.lo))
            } else {
                Self::new(-self.hi, -self.lo)
            }
        } else {
            self
        }
    }

    /// Calculates the minimum of two intervals
    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.lo.min(rhs.lo), self.hi.min(rhs.hi))
    }

    /// Calculates the maximum of two intervals
    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.lo.max(rhs.lo), self.hi.max(rhs.hi))
    }

    /// Linear interpolation `self * (b - c) + c`
    pub fn lerp(self, b: Self, c: Self) -> Self {
        self * (b - c) + c
    }

    /// Selects between `b` and `c` based on whether `self > 0`
    pub fn cond(self, b: Self, c: Self) -> Self {
        self.cmp_gt_scalar(T::zero()).lerp(b, c)
    }

    ////////////////////////////////////////////////////////////////////////////
    // Trigonometry

    /// Checks whether `phase + 2πk` lies in the interval for some integer `k`
    fn hits_phase(&self, phase: T) -> bool {
        let tau = T::TAU();
        let k = ((self.lo - phase) / tau).ceil();
        phase + k * tau <= self.hi
    }

    /// Computes the sine of the interval
    ///
    /// The result is bounded by the endpoint values, widened to `±1` when a
    /// peak or trough lies inside the interval.
    pub fn sin(self) -> Self {
        if self.has_nan() {
            return Self::nan();
        }
        if self.width() >= T::TAU() {
            return Self::new(-T::one(), T::one());
        }
        let a = self.lo.sin();
        let b = self.hi.sin();
        let hi = if self.hits_phase(T::FRAC_PI_2()) {
            T::one()
        } else {
            a.max(b)
        };
        let lo = if self.hits_phase(-T::FRAC_PI_2()) {
            -T::one()
        } else {
            a.min(b)
        };
        Self::new(lo, hi)
    }

    /// Computes the cosine of the interval
    pub fn cos(self) -> Self {
        if self.has_nan() {
            return Self::nan();
        }
        if self.width() >= T::TAU() {
            return Self::new(-T::one(), T::one());
        }
        let a = self.lo.cos();
        let b = self.hi.cos();
        let hi = if self.hits_phase(T::zero()) {
            T::one()
        } else {
            a.max(b)
        };
        let lo = if self.hits_phase(T::PI()) {
            -T::one()
        } else {
            a.min(b)
        };
        Self::new(lo, hi)
    }

    /// Computes the tangent of the interval
    ///
    /// Returns `[-inf, inf]` if the interval contains an asymptote
    pub fn tan(self) -> Self {
        if self.has_nan() {
            return Self::nan();
        }
        if self.width() >= T::PI()
            || self.hits_phase(T::FRAC_PI_2())
            || self.hits_phase(-T::FRAC_PI_2())
        {
            return Self::everything();
        }
        self.monotone(T::tan)
    }

    /// Computes the arcsine of the interval
    ///
    /// Bounds are clamped to `[-1, 1]`; returns the `NaN` interval if the
    /// input lies entirely outside of that range.
    pub fn asin(self) -> Self {
        match self.clamp_to(-T::one(), T::one()) {
            Some(v) => v.monotone(T::asin),
            None => Self::nan(),
        }
    }

    /// Computes the arccosine of the interval (see [`asin`](Self::asin))
    pub fn acos(self) -> Self {
        match self.clamp_to(-T::one(), T::one()) {
            Some(v) => Self::new(v.hi.acos(), v.lo.acos()),
            None => Self::nan(),
        }
    }

    /// Computes the arctangent of the interval
    pub fn atan(self) -> Self {
        self.monotone(T::atan)
    }

    /// Two-argument arctangent; always `[-π, π]`
    pub fn atan2(self, _other: Self) -> Self {
        Self::new(-T::PI(), T::PI())
    }

    /// Hyperbolic sine
    pub fn sinh(self) -> Self {
        self.monotone(T::sinh)
    }

    /// Hyperbolic cosine, which has its minimum of `1` at `x = 0`
    pub fn cosh(self) -> Self {
        if self.lo >= T::zero() {
            self.monotone(T::cosh)
        } else if self.hi <= T::zero() {
            Self::new(self.hi.cosh(), self.lo.cosh())
        } else {
            Self::new(T::one(), self.lo.cosh().max(self.hi.cosh()))
        }
    }

    /// Hyperbolic tangent
    pub fn tanh(self) -> Self {
        self.monotone(T::tanh)
    }

    /// Inverse hyperbolic sine
    pub fn asinh(self) -> Self {
        self.monotone(T::asinh)
    }

    /// Inverse hyperbolic cosine, defined on `[1, inf)`
    pub fn acosh(self) -> Self {
        match self.clamp_to(T::one(), T::infinity()) {
            Some(v) => v.monotone(T::acosh),
            None => Self::nan(),
        }
    }

    /// Inverse hyperbolic tangent, defined on `(-1, 1)`
    pub fn atanh(self) -> Self {
        match self.clamp_to(-T::one(), T::one()) {
            Some(v) => v.monotone(T::atanh),
            None => Self::nan(),
        }
    }

    /// Clamps to `[lo, hi]`, returning `None` if nothing is left
    fn clamp_to(self, lo: T, hi: T) -> Option<Self> {
        if self.has_nan() || self.hi < lo || self.lo > hi {
            None
        } else {
            Some(Self::new(self.lo.max(lo), self.hi.min(hi)))
        }
    }

    ////////////////////////////////////////////////////////////////////////////
    // Tri-state comparisons

    /// Encodes a tri-state truth value as an interval
    ///
    /// Definitely true is `[1, 1]`, definitely false is `[0, 0]`, and unknown
    /// is `[0, 1]`.
    fn tristate(true_cond: bool, false_cond: bool) -> Self {
        if true_cond {
            Self::point(T::one())
        } else if false_cond {
            Self::point(T::zero())
        } else {
            Self::new(T::zero(), T::one())
        }
    }

    /// Decodes a tri-state comparison result
    ///
    /// Returns `Some(true)` for `[1, 1]`, `Some(false)` for `[0, 0]`, and
    /// `None` otherwise.
    pub fn truth(&self) -> Option<bool> {
        if self.lo == T::one() && self.hi == T::one() {
            Some(true)
        } else if self.lo == T::zero() && self.hi == T::zero() {
            Some(false)
        } else {
            None
        }
    }

    /// Tri-state `self < rhs`
    pub fn cmp_lt(&self, rhs: &Self) -> Self {
        Self::tristate(self.hi < rhs.lo, self.lo > rhs.hi)
    }

    /// Tri-state `self <= rhs`
    pub fn cmp_le(&self, rhs: &Self) -> Self {
        Self::tristate(self.hi <= rhs.lo, self.lo > rhs.hi)
    }

    /// Tri-state `self > rhs`
    pub fn cmp_gt(&self, rhs: &Self) -> Self {
        Self::tristate(self.lo > rhs.hi, self.hi < rhs.lo)
    }

    /// Tri-state `self >= rhs`
    pub fn cmp_ge(&self, rhs: &Self) -> Self {
        Self::tristate(self.lo >= rhs.hi, self.hi < rhs.lo)
    }

    /// Tri-state `self > rhs` against a scalar
    pub fn cmp_gt_scalar(&self, rhs: T) -> Self {
        Self::tristate(self.lo > rhs, self.hi <= rhs)
    }

    /// Tri-state `self == rhs`
    pub fn cmp_eq(&self, rhs: &Self) -> Self {
        Self::tristate(
            self.bounds_eq(rhs) && self.lo == self.hi,
            self.hi < rhs.lo || self.lo > rhs.hi,
        )
    }

    /// Tri-state `self != rhs`
    pub fn cmp_ne(&self, rhs: &Self) -> Self {
        Self::tristate(
            self.hi < rhs.lo || self.lo > rhs.hi,
            self.bounds_eq(rhs) && self.lo == self.hi,
        )
    }

    ////////////////////////////////////////////////////////////////////////////
    // Set operations

    /// Smallest interval containing both inputs
    ///
    /// ```
    /// # use aarange::types::Interval;
    /// let a = Interval::new(0.0f64, 1.0);
    /// let b = Interval::new(3.0, 4.0);
    /// assert_eq!(a.range_union(b), Interval::new(0.0, 4.0));
    /// ```
    pub fn range_union(self, other: Self) -> Self {
        Self::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }

    /// Intersection of both inputs
    ///
    /// If the inputs are disjoint, the result is inverted; check with
    /// [`is_empty`](Self::is_empty).
    pub fn range_isct(self, other: Self) -> Self {
        Self::new(self.lo.max(other.lo), self.hi.min(other.hi))
    }

    /// Returns `1` if `other` lies entirely within `self`, `0` otherwise
    pub fn range_contains(&self, other: &Self) -> T {
        if self.lo <= other.lo && other.hi <= self.hi {
            T::one()
        } else {
            T::zero()
        }
    }

    /// Checks that the two values are roughly equal, panicking otherwise
    #[cfg(test)]
    pub(crate) fn compare_eq(&self, other: Self) {
        let d = (self.lo - other.lo)
            .abs()
            .max((self.hi - other.hi).abs());
        if !(d < T::lit(1e-6)) {
            panic!("lhs != rhs ({self:?} != {other:?})");
        }
    }
}

impl<T: Scalar> From<[T; 2]> for Interval<T> {
    fn from(i: [T; 2]) -> Self {
        Interval::new(i[0], i[1])
    }
}

impl<T: Scalar> From<T> for Interval<T> {
    fn from(f: T) -> Self {
        Interval::point(f)
    }
}

impl<T: Scalar> std::ops::Add<Interval<T>> for Interval<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Interval::new(self.lo + rhs.lo, self.hi + rhs.hi)
    }
}

impl<T: Scalar> std::ops::Sub<Interval<T>> for Interval<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Interval::new(self.lo - rhs.hi, self.hi - rhs.lo)
    }
}

impl<T: Scalar> std::ops::Mul<Interval<T>> for Interval<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let ll = self.lo * rhs.lo;
        let lh = self.lo * rhs.hi;
        let hl = self.hi * rhs.lo;
        let hh = self.hi * rhs.hi;
        Interval::new(ll.min(lh).min(hl.min(hh)), ll.max(lh).max(hl.max(hh)))
    }
}

impl<T: Scalar> std::ops::Div<Interval<T>> for Interval<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self * rhs.recip()
    }
}

impl<T: Scalar> std::ops::Rem<Interval<T>> for Interval<T> {
    type Output = Self;
    /// Floating-point remainder, which takes the sign of the dividend
    fn rem(self, rhs: Self) -> Self {
        let m = rhs.lo.abs().max(rhs.hi.abs());
        Interval::new(-m, m)
    }
}

impl<T: Scalar> std::ops::Add<T> for Interval<T> {
    type Output = Self;
    fn add(self, rhs: T) -> Self {
        Interval::new(self.lo + rhs, self.hi + rhs)
    }
}

impl<T: Scalar> std::ops::Sub<T> for Interval<T> {
    type Output = Self;
    fn sub(self, rhs: T) -> Self {
        Interval::new(self.lo - rhs, self.hi - rhs)
    }
}

impl<T: Scalar> std::ops::Mul<T> for Interval<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        let (lo, hi) = (self.lo * rhs, self.hi * rhs);
        if rhs < T::zero() {
            Interval::new(hi, lo)
        } else {
            Interval::new(lo, hi)
        }
    }
}

impl<T: Scalar> std::ops::Div<T> for Interval<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self * (T::one() / rhs)
    }
}

impl<T: Scalar> std::ops::Rem<T> for Interval<T> {
    type Output = Self;
    fn rem(self, rhs: T) -> Self {
        self % Interval::point(rhs)
    }
}

impl<T: Scalar> std::ops::Neg for Interval<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Interval::new(-self.hi, -self.lo)
    }
}

macro_rules! impl_assign {
    ($op:ident, $op_assign:ident, $base_fn:ident, $assign_fn:ident) => {
        impl<T: Scalar> std::ops::$op_assign<Interval<T>> for Interval<T> {
            fn $assign_fn(&mut self, other: Interval<T>) {
                use std::ops::$op;
                *self = (*self).$base_fn(other)
            }
        }
        impl<T: Scalar> std::ops::$op_assign<T> for Interval<T> {
            fn $assign_fn(&mut self, other: T) {
                use std::ops::$op;
                *self = (*self).$base_fn(other)
            }
        }
    };
}

impl_assign!(Add, AddAssign, add, add_assign);
impl_assign!(Sub, SubAssign, sub, sub_assign);
impl_assign!(Mul, MulAssign, mul, mul_assign);
impl_assign!(Div, DivAssign, div, div_assign);
impl_assign!(Rem, RemAssign, rem, rem_assign);

macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl std::ops::Add<Interval<$t>> for $t {
            type Output = Interval<$t>;
            fn add(self, rhs: Interval<$t>) -> Interval<$t> {
                rhs + self
            }
        }
        impl std::ops::Sub<Interval<$t>> for $t {
            type Output = Interval<$t>;
            fn sub(self, rhs: Interval<$t>) -> Interval<$t> {
                -rhs + self
            }
        }
        impl std::ops::Mul<Interval<$t>> for $t {
            type Output = Interval<$t>;
            fn mul(self, rhs: Interval<$t>) -> Interval<$t> {
                rhs * self
            }
        }
        impl std::ops::Div<Interval<$t>> for $t {
            type Output = Interval<$t>;
            fn div(self, rhs: Interval<$t>) -> Interval<$t> {
                rhs.recip() * self
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

#[cfg(test)]
mod test {
    use super::*;

    type I = Interval<f64>;

    #[test]
    fn test_basic_ops() {
        let a = I::new(1.0, 2.0);
        let b = I::new(-3.0, 4.0);
        assert_eq!(a + b, I::new(-2.0, 6.0));
        assert_eq!(a - b, I::new(-3.0, 5.0));
        assert_eq!(a * b, I::new(-6.0, 8.0));
        assert_eq!(-a, I::new(-2.0, -1.0));
        assert_eq!(a.width(), 1.0);
        assert_eq!(a.center(), 1.5);
        assert_eq!(b.radius(), 3.5);
    }

    #[test]
    fn test_mul_corners() {
        let a = I::new(-2.0, -1.0);
        let b = I::new(-4.0, 3.0);
        assert_eq!(a * b, I::new(-6.0, 8.0));
        let c = I::new(-1.0, 1.0);
        assert_eq!(c * c, I::new(-1.0, 1.0));
    }

    #[test]
    fn test_scalar_mul_swaps() {
        let mut a = Interval::new(1.0f32, 3.0);
        a *= -2.0;
        assert_eq!(a, Interval::new(-6.0, -2.0));
        assert_eq!(2.0 * I::new(1.0, 2.0), I::new(2.0, 4.0));
        let mut b = I::new(2.0, 4.0);
        b /= 2.0;
        assert_eq!(b, I::new(1.0, 2.0));
    }

    #[test]
    fn test_div() {
        let a = I::new(1.0, 2.0);
        let b = I::new(2.0, 4.0);
        (a / b).compare_eq(I::new(0.25, 1.0));
        assert_eq!(b.recip(), I::new(0.25, 0.5));
        assert_eq!(I::new(-4.0, -2.0).recip(), [-0.5, -0.25].into());
    }

    #[test]
    fn test_recip_straddling_zero() {
        let a = I::new(-1.0, 1.0);
        assert!(a.try_recip().is_err());
        assert!(a.recip().is_empty());
        assert!(I::new(0.5, 1.0).try_recip().is_ok());
    }

    #[test]
    fn test_monotone() {
        let a = I::new(0.0f64, 1.0);
        a.exp().compare_eq(I::new(1.0, std::f64::consts::E));
        I::new(1.0, 4.0).sqrt().compare_eq(I::new(1.0, 2.0));
        I::new(1.0, std::f64::consts::E)
            .ln()
            .compare_eq(I::new(0.0, 1.0));
        assert_eq!(I::new(0.5, 2.5).floor(), I::new(0.0, 2.0));
        assert_eq!(I::new(0.5, 2.5).ceil(), I::new(1.0, 3.0));
        I::new(-8.0, 27.0).cbrt().compare_eq([-2.0, 3.0].into());
        I::new(1.0, 3.0).exp2().compare_eq([2.0, 8.0].into());
        I::new(0.0, 2.0).exp10().compare_eq([1.0, 100.0].into());
    }

    #[test]
    fn test_domain_checks() {
        let a = I::new(-1.0, 4.0);
        assert!(matches!(
            a.try_sqrt(),
            Err(Error::Domain { op: "sqrt", .. })
        ));
        assert!(a.try_ln().is_err());
        assert!(a.sqrt().has_nan());
        assert!(I::new(1.0, 4.0).try_ln().is_ok());
    }

    #[test]
    fn test_abs_sgn() {
        assert_eq!(I::new(-2.0, 1.0).abs(), I::new(0.0, 2.0));
        assert_eq!(I::new(-3.0, -1.0).abs(), I::new(1.0, 3.0));
        assert_eq!(I::new(-3.0, 1.0).sgn(), I::new(-1.0, 1.0));
        assert_eq!(I::new(0.0, 1.0).sgn(), I::new(0.0, 1.0));
    }

    #[test]
    fn test_sin_cos() {
        use std::f64::consts::{FRAC_PI_2, PI};
        let s = I::new(0.0, FRAC_PI_2 / 2.0).sin();
        s.compare_eq([0.0, (FRAC_PI_2 / 2.0).sin()].into());
        let s = I::new(0.0, PI).sin();
        assert_eq!(s.hi(), 1.0);
        assert!(s.lo() <= 0.0 && s.lo() > -1e-12);
        let s = I::new(-10.0, 10.0).sin();
        assert_eq!(s, I::new(-1.0, 1.0));
        let c = I::new(-0.5, 0.5).cos();
        assert_eq!(c.hi(), 1.0);
        c.compare_eq([0.5f64.cos(), 1.0].into());
        let c = I::new(3.0, 3.5).cos();
        assert_eq!(c.lo(), -1.0);
    }

    #[test]
    fn test_tan() {
        let t = I::new(-0.5, 0.5).tan();
        t.compare_eq([(-0.5f64).tan(), 0.5f64.tan()].into());
        let t = I::new(1.0, 2.0).tan();
        assert_eq!(t, I::everything());
    }

    #[test]
    fn test_inverse_trig() {
        let a = I::new(-2.0f64, 0.5).asin();
        a.compare_eq([-std::f64::consts::FRAC_PI_2, 0.5f64.asin()].into());
        let a = I::new(0.0f64, 1.0).acos();
        a.compare_eq([0.0, std::f64::consts::FRAC_PI_2].into());
        assert!(I::new(2.0, 3.0).asin().has_nan());
        let c = I::new(-1.0f64, 2.0).cosh();
        assert_eq!(c.lo(), 1.0);
        c.compare_eq([1.0, 2.0f64.cosh()].into());
    }

    #[test]
    fn test_comparisons() {
        let a = I::new(0.0, 1.0);
        let b = I::new(2.0, 3.0);
        let c = I::new(0.5, 2.5);
        assert_eq!(a.cmp_lt(&b).truth(), Some(true));
        assert_eq!(b.cmp_lt(&a).truth(), Some(false));
        assert_eq!(a.cmp_lt(&c).truth(), None);
        assert_eq!(a.cmp_lt(&c), I::new(0.0, 1.0));
        assert_eq!(b.cmp_gt(&a).truth(), Some(true));
        assert_eq!(a.cmp_gt(&b).truth(), Some(false));
        assert_eq!(a.cmp_ge(&c).truth(), None);
        assert_eq!(a.cmp_ne(&b).truth(), Some(true));
        assert_eq!(a.cmp_eq(&b).truth(), Some(false));
        let p = I::point(1.0);
        assert_eq!(p.cmp_eq(&p).truth(), Some(true));
        assert_eq!(a.cmp_gt_scalar(-1.0).truth(), Some(true));
    }

    #[test]
    fn test_min_max() {
        let a = I::new(0.0, 3.0);
        let b = I::new(1.0, 2.0);
        assert_eq!(a.min(b), I::new(0.0, 2.0));
        assert_eq!(a.max(b), I::new(1.0, 3.0));
    }

    #[test]
    fn test_set_ops() {
        let a = I::new(0.0, 2.0);
        let b = I::new(1.0, 3.0);
        assert_eq!(a.range_union(b), I::new(0.0, 3.0));
        assert_eq!(a.range_isct(b), I::new(1.0, 2.0));
        assert_eq!(a.range_contains(&I::new(0.5, 1.5)), 1.0);
        assert_eq!(a.range_contains(&b), 0.0);
        let far = I::new(5.0, 6.0);
        assert!(a.range_isct(far).is_empty());
    }

    #[test]
    fn test_rem() {
        let a = I::new(-5.0, 5.0);
        assert_eq!(a % I::new(-2.0, 1.0), I::new(-2.0, 2.0));
        assert_eq!(a % 3.0, I::new(-3.0, 3.0));
    }

    #[test]
    fn test_cast() {
        let a = I::new(0.5, 1.25);
        let b: Interval<f32> = a.cast();
        assert_eq!(b, Interval::new(0.5f32, 1.25));
    }

    #[test]
    fn test_lerp_cond() {
        let t = I::point(1.0);
        let b = I::new(2.0, 3.0);
        let c = I::new(5.0, 6.0);
        assert_eq!(t.lerp(b, c), b - c + c);
        assert_eq!(I::point(2.0).cond(b, c), b - c + c);
        assert_eq!(I::point(-2.0).cond(b, c), c);
    }
}
