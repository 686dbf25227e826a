//! Range types: intervals, error symbols, and affine forms
mod affine;
mod interval;
mod symbol;

pub use affine::Affine;
pub use interval::Interval;
pub use symbol::{AffineSymbol, SymbolIndex};

pub(crate) use affine::{Pair, merge_symbols};

static_assertions::assert_impl_all!(Interval<f32>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Affine<f64>: Send, Sync);
