//! Set operations on ranges
//!
//! Both range types implement [`RangeSet`], so generic code can take the
//! union or intersection of either.  For intervals, the results are exact.
//! For affine values, the symbols are merged and then rescaled so that the
//! result spans (for union) or fits within (for intersection) the exact
//! interval result; this is a heuristic, not an optimal enclosure.
use crate::{
    scalar::Scalar,
    types::{Affine, AffineSymbol, Interval, Pair, merge_symbols},
};

/// A range supporting set operations
pub trait RangeSet: Sized {
    /// Scalar type of the range's bounds
    type Scalar: Scalar;

    /// Returns a range covering both inputs
    fn union(&self, other: &Self) -> Self;

    /// Returns a range covering the overlap of both inputs
    fn isct(&self, other: &Self) -> Self;

    /// Returns `1` if `other` lies within `self`, `0` otherwise
    fn encloses(&self, other: &Self) -> Self::Scalar;

    /// Returns the interval bounds of the range
    fn bounds(&self) -> Interval<Self::Scalar>;
}

impl<T: Scalar> RangeSet for Interval<T> {
    type Scalar = T;
    fn union(&self, other: &Self) -> Self {
        self.range_union(*other)
    }
    fn isct(&self, other: &Self) -> Self {
        self.range_isct(*other)
    }
    fn encloses(&self, other: &Self) -> T {
        self.range_contains(other)
    }
    fn bounds(&self) -> Interval<T> {
        *self
    }
}

impl<T: Scalar> RangeSet for Affine<T> {
    type Scalar = T;
    fn union(&self, other: &Self) -> Self {
        self.range_union(other)
    }
    fn isct(&self, other: &Self) -> Self {
        self.range_isct(other)
    }
    fn encloses(&self, other: &Self) -> T {
        self.range_contains(other)
    }
    fn bounds(&self) -> Interval<T> {
        self.to_interval()
    }
}

/// Returns a range covering both inputs
pub fn union<R: RangeSet>(a: &R, b: &R) -> R {
    a.union(b)
}

/// Returns a range covering the overlap of both inputs
pub fn isct<R: RangeSet>(a: &R, b: &R) -> R {
    a.isct(b)
}

/// Returns `1` if `b` lies within `a`, `0` otherwise
pub fn contains<R: RangeSet>(a: &R, b: &R) -> R::Scalar {
    a.encloses(b)
}

impl<T: Scalar> Affine<T> {
    /// Union of two affine values
    ///
    /// Symbols shared by both inputs keep the larger magnitude.  The result is
    /// centered on the exact interval union, and its symbols are scaled up if
    /// their radius is smaller than that of the exact union.
    pub fn range_union(&self, other: &Self) -> Self {
        let exact = self.to_interval().range_union(other.to_interval());
        let syms = merge_symbols(self.symbols(), other.symbols(), |p| match p {
            Pair::Left(s) | Pair::Right(s) => s,
            Pair::Both(a, b) => a.with_coeff(a.abs_coeff().max(b.abs_coeff())),
        });
        let mut out = Affine::from_parts(exact.center(), syms);
        let (radius, target) = (out.radius(), exact.radius());
        if radius < target {
            if radius > T::zero() {
                out.scale_symbols(target / radius);
            } else {
                out.push_symbol(AffineSymbol::fresh(target));
            }
        }
        out
    }

    /// Intersection of two affine values
    ///
    /// Symbols shared by both inputs keep the smaller magnitude.  The result
    /// is centered on the exact interval intersection, and its symbols are
    /// scaled down if their radius exceeds that of the exact intersection.
    ///
    /// If the inputs are disjoint, the exact intersection is empty and the
    /// result collapses to a single point between them; check with
    /// [`Interval::is_empty`] on the interval intersection beforehand.
    pub fn range_isct(&self, other: &Self) -> Self {
        let exact = self.to_interval().range_isct(other.to_interval());
        let syms = merge_symbols(self.symbols(), other.symbols(), |p| match p {
            Pair::Left(s) | Pair::Right(s) => s,
            Pair::Both(a, b) => a.with_coeff(a.abs_coeff().min(b.abs_coeff())),
        });
        let mut out = Affine::from_parts(exact.center(), syms);
        let (radius, target) = (out.radius(), exact.radius().max(T::zero()));
        if radius > target {
            out.scale_symbols(target / radius);
        }
        out
    }

    /// Returns `1` if `other`'s bounds lie within this value's bounds
    pub fn range_contains(&self, other: &Self) -> T {
        self.to_interval().range_contains(&other.to_interval())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::SymbolIndex;

    fn sym(i: u64, c: f64) -> AffineSymbol<f64> {
        AffineSymbol::with_index(SymbolIndex(i), c)
    }

    #[test]
    fn interval_ops() {
        let a = Interval::new(0.0, 2.0);
        let b = Interval::new(1.0, 3.0);
        assert_eq!(union(&a, &b), Interval::new(0.0, 3.0));
        assert_eq!(isct(&a, &b), Interval::new(1.0, 2.0));
        assert_eq!(contains(&a, &b), 0.0);
        assert_eq!(contains(&a, &Interval::new(0.5, 1.5)), 1.0);
        assert!(isct(&a, &Interval::new(5.0, 6.0)).is_empty());
    }

    #[test]
    fn affine_union_shared() {
        let a = Affine::from_symbols(0.0, [sym(0, 1.0)]);
        let b = Affine::from_symbols(2.0, [sym(0, -1.0)]);
        let u = union(&a, &b);
        assert_eq!(u.center(), 1.0);
        assert_eq!(u.to_interval(), Interval::new(-1.0, 3.0));
        assert_eq!(u.symbols()[0].index(), SymbolIndex(0));
    }

    #[test]
    fn affine_union_constants() {
        let a = Affine::constant(1.0);
        let b = Affine::constant(3.0);
        let u = a.range_union(&b);
        assert_eq!(u.to_interval(), Interval::new(1.0, 3.0));
        assert_eq!(u.len(), 1);
    }

    #[test]
    fn affine_union_contains_inputs() {
        let a = Affine::from_bounds(0.0, 1.0);
        let b = Affine::from_bounds(0.25, 0.75);
        let u = union(&a, &b).to_interval();
        assert!(u.lo() <= 0.0 && u.hi() >= 1.0, "{u}");
    }

    #[test]
    fn affine_isct() {
        let a = Affine::from_symbols(1.0, [sym(0, 1.0)]);
        let b = Affine::from_symbols(2.0, [sym(0, 1.0)]);
        let i = isct(&a, &b);
        assert_eq!(i.center(), 1.5);
        assert_eq!(i.to_interval(), Interval::new(1.0, 2.0));
        assert_eq!(i.symbols(), &[sym(0, 0.5)]);
    }

    #[test]
    fn affine_isct_disjoint() {
        let a = Affine::from_bounds(0.0, 1.0);
        let b = Affine::from_bounds(2.0, 3.0);
        let i = a.range_isct(&b);
        assert_eq!(i.radius(), 0.0);
        assert_eq!(i.center(), 1.5);
    }

    fn width<R: RangeSet<Scalar = f64>>(r: &R) -> f64 {
        r.bounds().width()
    }

    #[test]
    fn bounds_of_either_type() {
        let i = Interval::new(1.0, 3.0);
        assert_eq!(i.bounds(), i);
        assert_eq!(width(&i), 2.0);

        let a = Affine::from_symbols(2.0, [sym(0, 0.5), sym(1, -0.5)]);
        assert_eq!(a.bounds(), Interval::new(1.0, 3.0));
        assert_eq!(width(&union(&a, &Affine::constant(4.0))), 3.0);
    }

    #[test]
    fn affine_contains() {
        let a = Affine::from_bounds(0.0, 4.0);
        let b = Affine::from_bounds(1.0, 2.0);
        assert_eq!(contains(&a, &b), 1.0);
        assert_eq!(contains(&b, &a), 0.0);
    }
}
