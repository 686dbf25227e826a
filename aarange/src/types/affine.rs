use crate::{
    Error,
    scalar::Scalar,
    types::{AffineSymbol, Interval},
};
use std::cmp::Ordering;

/// Affine form `center + Σ coeffᵢ·εᵢ`, with every `εᵢ ∈ [-1, 1]`
///
/// Error symbols are stored sorted by strictly increasing index with at most
/// one symbol per index.  Every binary operation is a single linear merge of
/// the two symbol lists; values are never shared, and each operation returns
/// a new owned value.
///
/// Rounding error is not accounted for.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RawAffine<T>",
        bound(deserialize = "T: Scalar + serde::Deserialize<'de>")
    )
)]
pub struct Affine<T> {
    center: T,
    syms: Vec<AffineSymbol<T>>,
}

/// Unchecked wire form, normalized by [`Affine::from_symbols`] on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAffine<T> {
    center: T,
    syms: Vec<AffineSymbol<T>>,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<RawAffine<T>> for Affine<T> {
    type Error = Error;
    fn try_from(r: RawAffine<T>) -> Result<Self, Error> {
        match r.syms.iter().find(|s| !s.index().is_valid()) {
            Some(s) => Err(Error::BadIndex(s.index().to_string())),
            None => Ok(Affine::from_symbols(r.center, r.syms)),
        }
    }
}

/// One step of a sorted symbol merge
#[derive(Copy, Clone, Debug)]
pub(crate) enum Pair<T> {
    /// Index only present in the left-hand operand
    Left(AffineSymbol<T>),
    /// Index only present in the right-hand operand
    Right(AffineSymbol<T>),
    /// Index present in both operands
    Both(AffineSymbol<T>, AffineSymbol<T>),
}

/// Merges two index-sorted symbol lists in a single pass
///
/// `combine` maps each step of the merge to an output symbol, which must keep
/// the index of its input(s).  The output is sorted, free of duplicates, and
/// no longer than `a.len() + b.len()`; it has one slot of spare capacity for
/// a trailing fresh symbol.
pub(crate) fn merge_symbols<T: Scalar>(
    a: &[AffineSymbol<T>],
    b: &[AffineSymbol<T>],
    mut combine: impl FnMut(Pair<T>) -> AffineSymbol<T>,
) -> Vec<AffineSymbol<T>> {
    let mut out = Vec::with_capacity(a.len() + b.len() + 1);
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp_index(&b[j]) {
            Ordering::Less => {
                out.push(combine(Pair::Left(a[i])));
                i += 1;
            }
            Ordering::Greater => {
                out.push(combine(Pair::Right(b[j])));
                j += 1;
            }
            Ordering::Equal => {
                out.push(combine(Pair::Both(a[i], b[j])));
                i += 1;
                j += 1;
            }
        }
    }
    out.extend(a[i..].iter().map(|s| combine(Pair::Left(*s))));
    out.extend(b[j..].iter().map(|s| combine(Pair::Right(*s))));
    out
}

impl<T: Scalar> Affine<T> {
    /// Builds an exact value with no error symbols
    pub fn constant(value: T) -> Self {
        Self {
            center: value,
            syms: vec![],
        }
    }

    /// Builds a value spanning `[lo, hi]` with a single fresh error symbol
    pub fn from_bounds(lo: T, hi: T) -> Self {
        Self {
            center: (lo + hi) * T::half(),
            syms: vec![AffineSymbol::fresh((hi - lo) * T::half())],
        }
    }

    /// Builds a value from a center and an arbitrary list of symbols
    ///
    /// Symbols are sorted by index and symbols sharing an index are summed.
    /// Every index is reserved, so fresh symbols minted later won't collide.
    ///
    /// # Panics
    /// If any index is above [`SymbolIndex::MAX`](super::SymbolIndex::MAX)
    pub fn from_symbols(
        center: T,
        syms: impl IntoIterator<Item = AffineSymbol<T>>,
    ) -> Self {
        let mut syms: Vec<_> = syms.into_iter().collect();
        syms.sort_by(|a, b| a.cmp_index(b));
        syms.dedup_by(|next, prev| {
            if next.index() == prev.index() {
                *prev = *prev + *next;
                true
            } else {
                false
            }
        });
        if let Some(s) = syms.last() {
            s.index().reserve();
        }
        Self { center, syms }
    }

    /// Wraps an interval bound, dropping the error symbol for point values
    ///
    /// This is how functions without an affine model return their result:
    /// the bound is sound, but correlation with the input is lost.
    pub fn from_range(i: Interval<T>) -> Self {
        if i.lo() == i.hi() {
            Self::constant(i.lo())
        } else {
            Self::from_bounds(i.lo(), i.hi())
        }
    }

    /// Returns the central value
    #[inline]
    pub fn center(&self) -> T {
        self.center
    }

    /// Returns the error symbols, sorted by index
    #[inline]
    pub fn symbols(&self) -> &[AffineSymbol<T>] {
        &self.syms
    }

    /// Returns the number of error symbols
    #[inline]
    pub fn len(&self) -> usize {
        self.syms.len()
    }

    /// Checks whether the value has no error symbols
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.syms.is_empty()
    }

    /// Sum of the absolute values of every coefficient
    pub fn radius(&self) -> T {
        self.syms
            .iter()
            .fold(T::zero(), |acc, s| acc + s.abs_coeff())
    }

    /// Returns `2 * radius`
    pub fn width(&self) -> T {
        self.radius() * T::two()
    }

    /// Lower bound, `center - radius`
    pub fn lo(&self) -> T {
        self.center - self.radius()
    }

    /// Upper bound, `center + radius`
    pub fn hi(&self) -> T {
        self.center + self.radius()
    }

    /// Projects the affine form onto an interval
    pub fn to_interval(&self) -> Interval<T> {
        let r = self.radius();
        Interval::new(self.center - r, self.center + r)
    }

    /// Converts to an affine value over a different scalar type
    pub fn cast<U: Scalar>(&self) -> Affine<U> {
        Affine {
            center: U::cast_from(self.center),
            syms: self.syms.iter().map(|s| s.cast()).collect(),
        }
    }

    /// Checks whether the center and every symbol are identical
    pub fn bounds_eq(&self, other: &Self) -> bool {
        self == other
    }

    /// Builds a value from symbols which are already sorted and deduplicated
    pub(crate) fn from_parts(center: T, syms: Vec<AffineSymbol<T>>) -> Self {
        debug_assert!(syms.windows(2).all(|w| w[0].index() < w[1].index()));
        Self { center, syms }
    }

    /// Appends a symbol, which must have a higher index than every other
    pub(crate) fn push_symbol(&mut self, s: AffineSymbol<T>) {
        debug_assert!(self.syms.last().is_none_or(|v| v.index() < s.index()));
        self.syms.push(s);
    }

    /// Scales every coefficient, leaving the center unchanged
    pub(crate) fn scale_symbols(&mut self, s: T) {
        for v in &mut self.syms {
            *v *= s;
        }
    }

    /// Returns `alpha * self + beta`, plus a fresh error symbol `delta`
    pub(crate) fn affine_approx(&self, alpha: T, beta: T, delta: T) -> Self {
        let mut syms = Vec::with_capacity(self.syms.len() + 1);
        syms.extend(self.syms.iter().map(|s| s.scaled(alpha)));
        syms.push(AffineSymbol::fresh(delta));
        Self {
            center: alpha * self.center + beta,
            syms,
        }
    }

    /// Scales the center and every coefficient
    fn scaled(&self, s: T) -> Self {
        Self {
            center: self.center * s,
            syms: self.syms.iter().map(|v| v.scaled(s)).collect(),
        }
    }

    fn domain_error(&self, op: &'static str) -> Error {
        Error::Domain {
            op,
            bounds: self.to_interval().to_string(),
        }
    }

    ////////////////////////////////////////////////////////////////////////////
    // Nonlinear functions with convex models (see `crate::approx`)

    /// Reciprocal, using a Chebyshev approximation of `1/x`
    ///
    /// If the value's bounds straddle zero, the approximation is meaningless
    /// (it will contain `NaN` or infinite values) and a warning is logged.
    pub fn recip(&self) -> Self {
        let bounds = self.to_interval();
        if bounds.lo() <= T::zero() && bounds.hi() >= T::zero() {
            log::warn!("reciprocal of {bounds} straddles zero");
        }
        self.convex_approx_in::<crate::approx::Recip>(bounds)
    }

    /// Checked version of [`recip`](Self::recip)
    pub fn try_recip(&self) -> Result<Self, Error> {
        let bounds = self.to_interval();
        if bounds.lo() <= T::zero() && bounds.hi() >= T::zero() {
            Err(self.domain_error("recip"))
        } else {
            Ok(self.convex_approx_in::<crate::approx::Recip>(bounds))
        }
    }

    /// Square root, using a Chebyshev approximation
    ///
    /// Negative lower bounds produce `NaN` values and a logged warning.
    pub fn sqrt(&self) -> Self {
        let bounds = self.to_interval();
        if bounds.lo() < T::zero() {
            log::warn!("sqrt of {bounds} leaves its domain");
        }
        self.convex_approx_in::<crate::approx::Sqrt>(bounds)
    }

    /// Checked version of [`sqrt`](Self::sqrt)
    pub fn try_sqrt(&self) -> Result<Self, Error> {
        let bounds = self.to_interval();
        if bounds.lo() < T::zero() {
            Err(self.domain_error("sqrt"))
        } else {
            Ok(self.convex_approx_in::<crate::approx::Sqrt>(bounds))
        }
    }

    /// Cube root
    ///
    /// The cube root is concave for positive values and convex for negative
    /// ones; if the bounds straddle zero, this falls back to interval
    /// arithmetic.
    pub fn cbrt(&self) -> Self {
        let bounds = self.to_interval();
        if bounds.lo() < T::zero() && bounds.hi() > T::zero() {
            Self::from_range(bounds.cbrt())
        } else {
            self.convex_approx_in::<crate::approx::Cbrt>(bounds)
        }
    }

    /// Exponential function
    pub fn exp(&self) -> Self {
        self.convex_approx::<crate::approx::Exp>()
    }

    /// Natural logarithm
    ///
    /// A lower bound at or below zero logs a warning and produces `NaN` or
    /// infinite values.
    pub fn ln(&self) -> Self {
        let bounds = self.to_interval();
        if bounds.lo() <= T::zero() {
            log::warn!("ln of {bounds} leaves its domain");
        }
        self.convex_approx_in::<crate::approx::Ln>(bounds)
    }

    /// Checked version of [`ln`](Self::ln)
    pub fn try_ln(&self) -> Result<Self, Error> {
        let bounds = self.to_interval();
        if bounds.lo() <= T::zero() {
            Err(self.domain_error("ln"))
        } else {
            Ok(self.convex_approx_in::<crate::approx::Ln>(bounds))
        }
    }

    /// `2^x`, computed as `exp(x * ln 2)`
    pub fn exp2(&self) -> Self {
        self.scaled(T::LN_2()).exp()
    }

    /// `10^x`, computed as `exp(x * ln 10)`
    pub fn exp10(&self) -> Self {
        self.scaled(T::LN_10()).exp()
    }

    /// Base-2 logarithm, computed as `ln(x) / ln 2`
    pub fn log2(&self) -> Self {
        self.ln().scaled(T::LOG2_E())
    }

    /// Base-10 logarithm, computed as `ln(x) / ln 10`
    pub fn log10(&self) -> Self {
        self.ln().scaled(T::LOG10_E())
    }

    /// Raises `self` to the power `b`, computed as `exp(ln(self) * b)`
    pub fn pow(&self, b: &Self) -> Self {
        (&self.ln() * b).exp()
    }

    /// Raises `self` to a scalar power, computed as `exp(ln(self) * b)`
    pub fn powf(&self, b: T) -> Self {
        self.ln().scaled(b).exp()
    }

    /// Reciprocal square root
    pub fn rsq(&self) -> Self {
        self.sqrt().recip()
    }

    ////////////////////////////////////////////////////////////////////////////
    // Piecewise functions

    /// Least non-negative remainder with respect to a positive scalar
    ///
    /// Within a single period `[n * value, (n + 1) * value)` the remainder is
    /// a shift, so the result is exact.  If the bounds span more than one
    /// period, the result collapses to `[0, value]`.
    pub fn rem_scalar(&self, value: T) -> Self {
        let bounds = self.to_interval();
        let ilow = (bounds.lo() / value).floor();
        let dhigh = bounds.hi() / value;
        // Reaching the next multiple of `value` wraps around to zero
        if dhigh - ilow >= T::one() {
            let h = value * T::half();
            Self {
                center: h,
                syms: vec![AffineSymbol::fresh(h)],
            }
        } else {
            Self {
                center: self.center - ilow * value,
                syms: self.syms.clone(),
            }
        }
    }

    /// Fractional part, `self % 1`
    pub fn frac(&self) -> Self {
        self.rem_scalar(T::one())
    }

    /// Sign function
    pub fn sgn(&self) -> Self {
        let bounds = self.to_interval();
        if bounds.lo() > T::zero() {
            Self::constant(T::one())
        } else if bounds.hi() < T::zero() {
            Self::constant(-T::one())
        } else {
            Self::from_bounds(-T::one(), T::one())
        }
    }

    /// Absolute value
    ///
    /// When the bounds straddle zero, this uses the best linear approximation
    /// of `|x|`, whose maximum error is reached at both endpoints and at zero.
    pub fn abs(&self) -> Self {
        let bounds = self.to_interval();
        let (lo, hi) = (bounds.lo(), bounds.hi());
        if lo >= T::zero() {
            return self.clone();
        } else if hi <= T::zero() {
            return -self;
        }
        let alpha = (hi + lo) / bounds.width();
        let beta = T::half() * (hi - alpha * hi);
        self.affine_approx(alpha, beta, beta)
    }

    /// Positive part, `max(x, 0)`
    ///
    /// When the bounds straddle zero, this uses the best linear approximation
    /// of the ramp: the secant `alpha * (x - lo)` shifted down by half of its
    /// maximum error (which is reached at zero).
    pub fn pos(&self) -> Self {
        let bounds = self.to_interval();
        let (lo, hi) = (bounds.lo(), bounds.hi());
        if lo > T::zero() {
            return self.clone();
        } else if hi <= T::zero() {
            return Self::constant(T::zero());
        }
        let alpha = hi / bounds.width();
        let delta = -alpha * lo * T::half();
        self.affine_approx(alpha, delta, delta)
    }

    /// Snap to the largest less-than-or-equal value
    ///
    /// Returns a constant if the floor is the same across the whole range;
    /// otherwise approximates `floor(x)` as `x - 0.5 ± 0.5`.
    pub fn floor(&self) -> Self {
        let f = self.to_interval().floor();
        if f.lo() == f.hi() {
            Self::constant(f.lo())
        } else {
            self.affine_approx(T::one(), -T::half(), T::half())
        }
    }

    /// Snap to the smallest greater-than-or-equal value
    ///
    /// Like [`floor`](Self::floor), with `x + 0.5 ± 0.5` as the approximation
    pub fn ceil(&self) -> Self {
        let c = self.to_interval().ceil();
        if c.lo() == c.hi() {
            Self::constant(c.lo())
        } else {
            self.affine_approx(T::one(), T::half(), T::half())
        }
    }

    /// Round to the nearest integer (`x ± 0.5` unless constant)
    pub fn round(&self) -> Self {
        let r = self.to_interval().round();
        if r.lo() == r.hi() {
            Self::constant(r.lo())
        } else {
            self.affine_approx(T::one(), T::zero(), T::half())
        }
    }

    /// Minimum, computed as `a - pos(a - b)`
    pub fn min(&self, b: &Self) -> Self {
        self - &(self - b).pos()
    }

    /// Maximum, computed as `pos(a - b) + b`
    pub fn max(&self, b: &Self) -> Self {
        &(self - b).pos() + b
    }

    /// Linear interpolation `self * (b - c) + c`
    pub fn lerp(&self, b: &Self, c: &Self) -> Self {
        &(self * &(b - c)) + c
    }

    /// Selects between `b` and `c` based on whether `self > 0`
    pub fn cond(&self, b: &Self, c: &Self) -> Self {
        self.cmp_gt_scalar(T::zero()).lerp(b, c)
    }

    ////////////////////////////////////////////////////////////////////////////
    // Functions without an affine model, evaluated on the interval bound

    /// Sine
    pub fn sin(&self) -> Self {
        Self::from_range(self.to_interval().sin())
    }

    /// Cosine
    pub fn cos(&self) -> Self {
        Self::from_range(self.to_interval().cos())
    }

    /// Tangent
    pub fn tan(&self) -> Self {
        Self::from_range(self.to_interval().tan())
    }

    /// Arcsine
    pub fn asin(&self) -> Self {
        Self::from_range(self.to_interval().asin())
    }

    /// Arccosine
    pub fn acos(&self) -> Self {
        Self::from_range(self.to_interval().acos())
    }

    /// Arctangent
    pub fn atan(&self) -> Self {
        Self::from_range(self.to_interval().atan())
    }

    /// Two-argument arctangent
    pub fn atan2(&self, other: &Self) -> Self {
        Self::from_range(self.to_interval().atan2(other.to_interval()))
    }

    /// Hyperbolic sine, `(exp(x) - exp(-x)) / 2`
    pub fn sinh(&self) -> Self {
        (&self.exp() - &(-self).exp()).scaled(T::half())
    }

    /// Hyperbolic cosine, `(exp(x) + exp(-x)) / 2`
    pub fn cosh(&self) -> Self {
        (&self.exp() + &(-self).exp()).scaled(T::half())
    }

    /// Hyperbolic tangent
    pub fn tanh(&self) -> Self {
        Self::from_range(self.to_interval().tanh())
    }

    /// Inverse hyperbolic sine
    pub fn asinh(&self) -> Self {
        Self::from_range(self.to_interval().asinh())
    }

    /// Inverse hyperbolic cosine
    pub fn acosh(&self) -> Self {
        Self::from_range(self.to_interval().acosh())
    }

    /// Inverse hyperbolic tangent
    pub fn atanh(&self) -> Self {
        Self::from_range(self.to_interval().atanh())
    }

    ////////////////////////////////////////////////////////////////////////////
    // Tri-state comparisons, evaluated on the interval bounds

    /// Tri-state `self < rhs` (see [`Interval::truth`])
    pub fn cmp_lt(&self, rhs: &Self) -> Self {
        Self::from_range(self.to_interval().cmp_lt(&rhs.to_interval()))
    }

    /// Tri-state `self <= rhs`
    pub fn cmp_le(&self, rhs: &Self) -> Self {
        Self::from_range(self.to_interval().cmp_le(&rhs.to_interval()))
    }

    /// Tri-state `self > rhs`
    pub fn cmp_gt(&self, rhs: &Self) -> Self {
        Self::from_range(self.to_interval().cmp_gt(&rhs.to_interval()))
    }

    /// Tri-state `self > rhs` against a scalar
    pub fn cmp_gt_scalar(&self, rhs: T) -> Self {
        Self::from_range(self.to_interval().cmp_gt_scalar(rhs))
    }

    /// Tri-state `self >= rhs`
    pub fn cmp_ge(&self, rhs: &Self) -> Self {
        Self::from_range(self.to_interval().cmp_ge(&rhs.to_interval()))
    }

    /// Tri-state `self == rhs`
    pub fn cmp_eq(&self, rhs: &Self) -> Self {
        Self::from_range(self.to_interval().cmp_eq(&rhs.to_interval()))
    }

    /// Tri-state `self != rhs`
    pub fn cmp_ne(&self, rhs: &Self) -> Self {
        Self::from_range(self.to_interval().cmp_ne(&rhs.to_interval()))
    }
}

impl<T: Scalar> From<T> for Affine<T> {
    fn from(v: T) -> Self {
        Affine::constant(v)
    }
}

impl<T: Scalar> From<Interval<T>> for Affine<T> {
    fn from(i: Interval<T>) -> Self {
        Affine::from_bounds(i.lo(), i.hi())
    }
}

impl<T: Scalar> From<&Affine<T>> for Interval<T> {
    fn from(a: &Affine<T>) -> Self {
        a.to_interval()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Operators between affine values

impl<T: Scalar> std::ops::Add<&Affine<T>> for &Affine<T> {
    type Output = Affine<T>;
    fn add(self, rhs: &Affine<T>) -> Affine<T> {
        let syms = merge_symbols(&self.syms, &rhs.syms, |p| match p {
            Pair::Left(a) => a,
            Pair::Right(b) => b,
            Pair::Both(a, b) => a + b,
        });
        Affine {
            center: self.center + rhs.center,
            syms,
        }
    }
}

impl<T: Scalar> std::ops::Sub<&Affine<T>> for &Affine<T> {
    type Output = Affine<T>;
    fn sub(self, rhs: &Affine<T>) -> Affine<T> {
        let syms = merge_symbols(&self.syms, &rhs.syms, |p| match p {
            Pair::Left(a) => a,
            Pair::Right(b) => -b,
            Pair::Both(a, b) => a - b,
        });
        Affine {
            center: self.center - rhs.center,
            syms,
        }
    }
}

impl<T: Scalar> std::ops::Mul<&Affine<T>> for &Affine<T> {
    type Output = Affine<T>;
    /// Multiplies two affine values
    ///
    /// The result keeps the first-order terms exactly; the discarded
    /// second-order term is bounded by one fresh symbol with coefficient
    /// `radius(a) * radius(b)`.  This is conservative but lossy.
    fn mul(self, rhs: &Affine<T>) -> Affine<T> {
        let (ac, bc) = (self.center, rhs.center);
        let mut syms = merge_symbols(&self.syms, &rhs.syms, |p| match p {
            Pair::Left(a) => a.scaled(bc),
            Pair::Right(b) => b.scaled(ac),
            Pair::Both(a, b) => a.with_coeff(a.coeff() * bc + b.coeff() * ac),
        });
        syms.push(AffineSymbol::fresh(self.radius() * rhs.radius()));
        Affine {
            center: ac * bc,
            syms,
        }
    }
}

impl<T: Scalar> std::ops::Div<&Affine<T>> for &Affine<T> {
    type Output = Affine<T>;
    fn div(self, rhs: &Affine<T>) -> Affine<T> {
        self * &rhs.recip()
    }
}

impl<T: Scalar> std::ops::Rem<&Affine<T>> for &Affine<T> {
    type Output = Affine<T>;
    /// Floating-point modulus, computed as `a - b * floor(a / b)`
    fn rem(self, rhs: &Affine<T>) -> Affine<T> {
        let q = (self / rhs).floor();
        self - &(rhs * &q)
    }
}

impl<T: Scalar> std::ops::Neg for &Affine<T> {
    type Output = Affine<T>;
    fn neg(self) -> Affine<T> {
        Affine {
            center: -self.center,
            syms: self.syms.iter().map(|s| -*s).collect(),
        }
    }
}

impl<T: Scalar> std::ops::Neg for Affine<T> {
    type Output = Affine<T>;
    fn neg(self) -> Affine<T> {
        -&self
    }
}

macro_rules! impl_binary {
    ($op:ident, $op_assign:ident, $base_fn:ident, $assign_fn:ident) => {
        impl<T: Scalar> std::ops::$op<Affine<T>> for Affine<T> {
            type Output = Affine<T>;
            fn $base_fn(self, rhs: Affine<T>) -> Affine<T> {
                std::ops::$op::$base_fn(&self, &rhs)
            }
        }
        impl<T: Scalar> std::ops::$op<&Affine<T>> for Affine<T> {
            type Output = Affine<T>;
            fn $base_fn(self, rhs: &Affine<T>) -> Affine<T> {
                std::ops::$op::$base_fn(&self, rhs)
            }
        }
        impl<T: Scalar> std::ops::$op<Affine<T>> for &Affine<T> {
            type Output = Affine<T>;
            fn $base_fn(self, rhs: Affine<T>) -> Affine<T> {
                std::ops::$op::$base_fn(self, &rhs)
            }
        }
        impl<T: Scalar> std::ops::$op_assign<&Affine<T>> for Affine<T> {
            fn $assign_fn(&mut self, rhs: &Affine<T>) {
                *self = std::ops::$op::$base_fn(&*self, rhs)
            }
        }
        impl<T: Scalar> std::ops::$op_assign<Affine<T>> for Affine<T> {
            fn $assign_fn(&mut self, rhs: Affine<T>) {
                *self = std::ops::$op::$base_fn(&*self, &rhs)
            }
        }
    };
}

impl_binary!(Add, AddAssign, add, add_assign);
impl_binary!(Sub, SubAssign, sub, sub_assign);
impl_binary!(Mul, MulAssign, mul, mul_assign);
impl_binary!(Div, DivAssign, div, div_assign);
impl_binary!(Rem, RemAssign, rem, rem_assign);

////////////////////////////////////////////////////////////////////////////////
// Operators with scalars

impl<T: Scalar> std::ops::Add<T> for &Affine<T> {
    type Output = Affine<T>;
    fn add(self, rhs: T) -> Affine<T> {
        Affine {
            center: self.center + rhs,
            syms: self.syms.clone(),
        }
    }
}

impl<T: Scalar> std::ops::Sub<T> for &Affine<T> {
    type Output = Affine<T>;
    fn sub(self, rhs: T) -> Affine<T> {
        self + (-rhs)
    }
}

impl<T: Scalar> std::ops::Mul<T> for &Affine<T> {
    type Output = Affine<T>;
    fn mul(self, rhs: T) -> Affine<T> {
        self.scaled(rhs)
    }
}

impl<T: Scalar> std::ops::Div<T> for &Affine<T> {
    type Output = Affine<T>;
    fn div(self, rhs: T) -> Affine<T> {
        self.scaled(T::one() / rhs)
    }
}

impl<T: Scalar> std::ops::Rem<T> for &Affine<T> {
    type Output = Affine<T>;
    fn rem(self, rhs: T) -> Affine<T> {
        self.rem_scalar(rhs)
    }
}

macro_rules! impl_scalar {
    ($op:ident, $op_assign:ident, $base_fn:ident, $assign_fn:ident) => {
        impl<T: Scalar> std::ops::$op<T> for Affine<T> {
            type Output = Affine<T>;
            fn $base_fn(self, rhs: T) -> Affine<T> {
                std::ops::$op::$base_fn(&self, rhs)
            }
        }
        impl<T: Scalar> std::ops::$op_assign<T> for Affine<T> {
            fn $assign_fn(&mut self, rhs: T) {
                *self = std::ops::$op::$base_fn(&*self, rhs)
            }
        }
    };
}

impl_scalar!(Add, AddAssign, add, add_assign);
impl_scalar!(Sub, SubAssign, sub, sub_assign);
impl_scalar!(Mul, MulAssign, mul, mul_assign);
impl_scalar!(Div, DivAssign, div, div_assign);
impl_scalar!(Rem, RemAssign, rem, rem_assign);

macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl std::ops::Add<Affine<$t>> for $t {
            type Output = Affine<$t>;
            fn add(self, rhs: Affine<$t>) -> Affine<$t> {
                &rhs + self
            }
        }
        impl std::ops::Sub<Affine<$t>> for $t {
            type Output = Affine<$t>;
            fn sub(self, rhs: Affine<$t>) -> Affine<$t> {
                &(-rhs) + self
            }
        }
        impl std::ops::Mul<Affine<$t>> for $t {
            type Output = Affine<$t>;
            fn mul(self, rhs: Affine<$t>) -> Affine<$t> {
                rhs.scaled(self)
            }
        }
        impl std::ops::Div<Affine<$t>> for $t {
            type Output = Affine<$t>;
            fn div(self, rhs: Affine<$t>) -> Affine<$t> {
                rhs.recip().scaled(self)
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);
