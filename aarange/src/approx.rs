//! Chebyshev (min-range) linear approximation of convex and concave functions
//!
//! Given a function `f` which is convex or concave over `[lo, hi]`, the best
//! linear approximation has the secant slope
//! `alpha = (f(hi) - f(lo)) / (hi - lo)`.  The point where `f' == alpha` is
//! `ss`.  The secant through `(lo, f(lo))` and the tangent through
//! `(ss, f(ss))` bracket `f`; their midline is the approximation, and half of
//! their gap is the error term.
//!
//! Each supported function is described by a [`ConvexModel`]; the
//! approximation itself is computed by [`chebyshev_fit`] and applied to an
//! affine value by [`Affine::convex_approx`].
use crate::{
    scalar::Scalar,
    types::{Affine, Interval},
};

/// Description of a function which is convex or concave on its domain
///
/// The domain is assumed to be respected by the caller; violations produce
/// `NaN` values rather than errors.
pub trait ConvexModel<T: Scalar> {
    /// Name of the function, used when logging
    const NAME: &'static str;

    /// Evaluates the function
    fn f(x: T) -> T;

    /// Inverse of the derivative: returns the point `ss` where `f'(ss) == alpha`
    ///
    /// `lo` and `hi` are the approximation bounds, which are used to pick a
    /// branch when the inverse is multi-valued.
    fn dfinv(alpha: T, lo: T, hi: T) -> T;

    /// Evaluates `f(dfinv(alpha))` directly, if that's cheaper or more precise
    fn fdfinv(_alpha: T) -> Option<T> {
        None
    }
}

/// `exp(x)`, convex everywhere
pub struct Exp;

impl<T: Scalar> ConvexModel<T> for Exp {
    const NAME: &'static str = "exp";
    fn f(x: T) -> T {
        x.exp()
    }
    fn dfinv(alpha: T, _lo: T, _hi: T) -> T {
        alpha.ln()
    }
    fn fdfinv(alpha: T) -> Option<T> {
        Some(alpha)
    }
}

/// `ln(x)`, concave on `x > 0`
pub struct Ln;

impl<T: Scalar> ConvexModel<T> for Ln {
    const NAME: &'static str = "ln";
    fn f(x: T) -> T {
        x.ln()
    }
    fn dfinv(alpha: T, _lo: T, _hi: T) -> T {
        alpha.recip()
    }
    fn fdfinv(alpha: T) -> Option<T> {
        Some(-alpha.ln())
    }
}

/// `1/x`, convex on `x > 0` and concave on `x < 0`
pub struct Recip;

impl<T: Scalar> ConvexModel<T> for Recip {
    const NAME: &'static str = "recip";
    fn f(x: T) -> T {
        x.recip()
    }
    fn dfinv(alpha: T, _lo: T, hi: T) -> T {
        let r = (-alpha.recip()).sqrt();
        if r > hi { -r } else { r }
    }
}

/// `sqrt(x)`, concave on `x >= 0`
pub struct Sqrt;

impl<T: Scalar> ConvexModel<T> for Sqrt {
    const NAME: &'static str = "sqrt";
    fn f(x: T) -> T {
        x.sqrt()
    }
    fn dfinv(alpha: T, _lo: T, _hi: T) -> T {
        (T::two() * alpha).powi(2).recip()
    }
    fn fdfinv(alpha: T) -> Option<T> {
        Some(T::half() / alpha)
    }
}

/// `cbrt(x)`, concave on `x > 0` and convex on `x < 0`
pub struct Cbrt;

impl<T: Scalar> ConvexModel<T> for Cbrt {
    const NAME: &'static str = "cbrt";
    fn f(x: T) -> T {
        x.cbrt()
    }
    fn dfinv(alpha: T, _lo: T, hi: T) -> T {
        let three = T::two() + T::one();
        let r = (three * alpha).powf(-T::lit(1.5));
        if r > hi { -r } else { r }
    }
}

/// Coefficients of a Chebyshev approximation `alpha * x + beta ± delta`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChebyshevFit<T> {
    /// Slope of the secant
    pub alpha: T,
    /// Offset of the approximating line
    pub beta: T,
    /// Maximum absolute error of the approximation
    pub delta: T,
    /// Point where the tangent is parallel to the secant
    pub ss: T,
}

/// Computes the best linear approximation of `M` over `bounds`
///
/// If `bounds` has zero width, the result is the constant `f(lo)`.
pub fn chebyshev_fit<T: Scalar, M: ConvexModel<T>>(
    bounds: Interval<T>,
) -> ChebyshevFit<T> {
    let (lo, hi) = (bounds.lo(), bounds.hi());
    let flo = M::f(lo);
    if lo == hi {
        return ChebyshevFit {
            alpha: T::zero(),
            beta: flo,
            delta: T::zero(),
            ss: lo,
        };
    }
    let fhi = M::f(hi);
    let alpha = (fhi - flo) / (hi - lo);
    let ss = M::dfinv(alpha, lo, hi);
    if !(lo <= ss && ss <= hi) {
        log::warn!(
            "{}: tangent point {ss} is outside of {bounds}",
            M::NAME
        );
    }
    let bmd = flo - alpha * lo;
    let fss = M::fdfinv(alpha).unwrap_or_else(|| M::f(ss));
    let bpd = fss - alpha * ss;
    let beta = (bpd + bmd) * T::half();
    let delta = ((bpd - bmd) * T::half()).abs();
    log::trace!(
        "{}{bounds}: alpha = {alpha}, ss = {ss}, beta = {beta}, delta = {delta}",
        M::NAME
    );
    ChebyshevFit {
        alpha,
        beta,
        delta,
        ss,
    }
}

impl<T: Scalar> Affine<T> {
    /// Applies the Chebyshev approximation of `M` over this value's bounds
    pub fn convex_approx<M: ConvexModel<T>>(&self) -> Self {
        self.convex_approx_in::<M>(self.to_interval())
    }

    /// Applies the Chebyshev approximation of `M` over the given bounds
    ///
    /// `bounds` should be this value's own bounds; they're passed in so that
    /// callers which already computed them (e.g. for a domain check) don't
    /// have to compute them again.
    pub(crate) fn convex_approx_in<M: ConvexModel<T>>(
        &self,
        bounds: Interval<T>,
    ) -> Self {
        let fit = chebyshev_fit::<T, M>(bounds);
        if bounds.lo() == bounds.hi() {
            Affine::constant(fit.beta)
        } else {
            self.affine_approx(fit.alpha, fit.beta, fit.delta)
        }
    }
}
