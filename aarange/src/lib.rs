//! `aarange` is a library for conservative range arithmetic: given bounds on
//! the inputs of an expression, it computes bounds which are guaranteed to
//! contain every value the expression can take.
//!
//! Two range representations are provided:
//!
//! - [`Interval`](types::Interval) stores a plain `[lo, hi]` pair.  It's cheap
//!   and always sound, but it forgets how values are related, so `x - x` over
//!   `[0, 1]` evaluates to `[-1, 1]`.
//! - [`Affine`](types::Affine) stores a center plus a sparse list of error
//!   symbols `coeffᵢ·εᵢ`, each `εᵢ` being an unknown in `[-1, 1]` shared by
//!   every value derived from the same source.  Correlated terms cancel, so
//!   `x - x` is exactly zero.
//!
//! ```
//! use aarange::types::{Affine, Interval};
//!
//! let x = Interval::new(0.0f64, 1.0);
//! assert_eq!(x - x, Interval::new(-1.0, 1.0));
//!
//! let x = Affine::from_bounds(0.0f64, 1.0);
//! assert_eq!((&x - &x).to_interval(), Interval::new(0.0, 0.0));
//! ```
//!
//! Nonlinear functions with a convex or concave shape (`exp`, `ln`, `sqrt`,
//! `1/x`, `cbrt`) are propagated through affine values with their best
//! linear (Chebyshev) approximation; see the [`approx`] module.  Other
//! functions are evaluated on the interval bound and lose correlation.
//!
//! ```
//! use aarange::types::Affine;
//!
//! let x = Affine::from_bounds(0.0f64, 1.0);
//! let y = x.exp();
//! assert!(y.lo() <= 1.0);
//! assert!(y.hi() >= std::f64::consts::E - 1e-12);
//! ```
//!
//! All range types are generic over a [`Scalar`](scalar::Scalar) bound type
//! (`f32` or `f64`), and can be printed and parsed with a compact text format
//! (see the [`text`] module).
//!
//! No operation returns an error on bad inputs: values outside a function's
//! domain produce `NaN` (or infinite) bounds, and log a warning through the
//! [`log`] crate.  Checked variants (`try_sqrt`, `try_ln`, `try_recip`)
//! return an [`Error`] instead.
//!
//! # Feature flags
#![doc = document_features::document_features!()]
#![warn(missing_docs)]

pub mod approx;
pub mod range;
pub mod scalar;
pub mod text;
pub mod types;

mod error;
pub use error::Error;
