//! Error symbols for affine arithmetic
use crate::scalar::Scalar;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of fresh symbol indices
///
/// Starts at zero when the process starts and is never reset.
static NEXT_INDEX: AtomicU64 = AtomicU64::new(0);

/// Globally unique identifier for one source of uncertainty
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SymbolIndex(pub u64);

impl SymbolIndex {
    /// Largest index which can be allocated or reserved
    ///
    /// The counter stops at `u64::MAX`, which is never a valid index.
    pub const MAX: Self = SymbolIndex(u64::MAX - 1);

    /// Allocates a new index from the process-wide counter
    ///
    /// # Panics
    /// If every index up to [`SymbolIndex::MAX`] is already in use
    pub fn fresh() -> Self {
        match NEXT_INDEX.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| {
            i.checked_add(1)
        }) {
            Ok(i) => SymbolIndex(i),
            Err(_) => panic!("symbol indices are exhausted"),
        }
    }

    /// Checks whether this index may enter the system from outside
    pub fn is_valid(self) -> bool {
        self <= Self::MAX
    }

    /// Marks this index (and every index below it) as used
    ///
    /// Indices that enter the system from outside the counter (parsed from
    /// text, or passed to [`Affine::from_symbols`](super::Affine::from_symbols))
    /// are reserved so that a later [`fresh`](Self::fresh) call can't return
    /// them again.
    ///
    /// # Panics
    /// If the index is above [`SymbolIndex::MAX`]
    pub fn reserve(self) {
        assert!(self.is_valid(), "symbol index {self} is out of range");
        NEXT_INDEX.fetch_max(self.0 + 1, Ordering::Relaxed);
    }
}

impl std::fmt::Display for SymbolIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One sparse error term `coeff * ε` of an affine form, with `ε ∈ [-1, 1]`
///
/// Two symbols with the same index represent the same `ε`, so they must be
/// combined rather than duplicated within a single affine value.  Equality
/// compares both fields, while [`cmp_index`](Self::cmp_index) only looks at
/// the index.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineSymbol<T> {
    index: SymbolIndex,
    coeff: T,
}

impl<T: Scalar> AffineSymbol<T> {
    /// Builds a symbol with a newly allocated index
    pub fn fresh(coeff: T) -> Self {
        Self {
            index: SymbolIndex::fresh(),
            coeff,
        }
    }

    /// Builds a symbol with the given index, without touching the counter
    pub fn with_index(index: SymbolIndex, coeff: T) -> Self {
        Self { index, coeff }
    }

    /// Returns the symbol's index
    #[inline]
    pub fn index(&self) -> SymbolIndex {
        self.index
    }

    /// Returns the (signed) coefficient
    #[inline]
    pub fn coeff(&self) -> T {
        self.coeff
    }

    /// Absolute value of the coefficient
    #[inline]
    pub fn abs_coeff(&self) -> T {
        self.coeff.abs()
    }

    /// Returns a symbol with the same index and a scaled coefficient
    #[inline]
    pub fn scaled(self, scale: T) -> Self {
        Self {
            coeff: self.coeff * scale,
            ..self
        }
    }

    /// Returns a symbol with the same index and a different coefficient
    #[inline]
    pub fn with_coeff(self, coeff: T) -> Self {
        Self { coeff, ..self }
    }

    /// Orders two symbols by index, ignoring their coefficients
    #[inline]
    pub fn cmp_index(&self, other: &Self) -> std::cmp::Ordering {
        self.index.cmp(&other.index)
    }

    /// Converts the coefficient to a different scalar type
    pub fn cast<U: Scalar>(self) -> AffineSymbol<U> {
        AffineSymbol {
            index: self.index,
            coeff: U::cast_from(self.coeff),
        }
    }
}

impl<T: Scalar> std::ops::Neg for AffineSymbol<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.with_coeff(-self.coeff)
    }
}

/// Combines two symbols which share an index
///
/// The indices aren't checked; callers only pair up matching symbols.
impl<T: Scalar> std::ops::Add for AffineSymbol<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.index, rhs.index);
        self.with_coeff(self.coeff + rhs.coeff)
    }
}

impl<T: Scalar> std::ops::Sub for AffineSymbol<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        debug_assert_eq!(self.index, rhs.index);
        self.with_coeff(self.coeff - rhs.coeff)
    }
}

impl<T: Scalar> std::ops::Mul<T> for AffineSymbol<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.scaled(rhs)
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for AffineSymbol<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.coeff = self.coeff * rhs;
    }
}
