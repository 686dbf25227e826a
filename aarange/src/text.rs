//! Textual round trip for every range type
//!
//! | Type               | Format                | Example               |
//! |--------------------|-----------------------|-----------------------|
//! | [`Interval`]       | `[lo,hi]`             | `[0.5,2]`             |
//! | [`AffineSymbol`]   | `±coeff_index`        | `+0.25_3`, `-1_4`     |
//! | [`Affine`]         | `(center sym sym...)` | `(1.5 +0.25_3 -1_4)`  |
//!
//! Scalars are written with their shortest round-tripping representation
//! (unless a precision is given to the formatter), so parsing a printed value
//! reproduces it exactly.  Whitespace between tokens is ignored when parsing.
//!
//! Parsing a symbol reserves its index, so fresh symbols allocated afterwards
//! can't collide with it.
//!
//! ```
//! use aarange::types::Affine;
//! let a: Affine<f64> = "(1.5 +0.25_3 -1_4)".parse()?;
//! assert_eq!(a.center(), 1.5);
//! assert_eq!(a.radius(), 1.25);
//! assert_eq!(a.to_string(), "(1.5 +0.25_3 -1_4)");
//! # Ok::<(), aarange::Error>(())
//! ```
use crate::{
    Error,
    scalar::Scalar,
    types::{Affine, AffineSymbol, Interval, SymbolIndex},
};
use std::fmt::{Display, Formatter};

/// Characters which terminate a scalar or index token
const DELIMITERS: &str = "[],()_";

/// Writes a scalar, honoring the formatter's precision if one was given
fn write_scalar<T: Scalar>(f: &mut Formatter<'_>, v: T) -> std::fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{v:.p$}"),
        None => write!(f, "{v}"),
    }
}

impl<T: Scalar> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        write_scalar(f, self.lo())?;
        write!(f, ",")?;
        write_scalar(f, self.hi())?;
        write!(f, "]")
    }
}

impl<T: Scalar> Display for AffineSymbol<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Negative values (including -0) carry their own sign
        if !self.coeff().is_sign_negative() {
            write!(f, "+")?;
        }
        write_scalar(f, self.coeff())?;
        write!(f, "_{}", self.index())
    }
}

impl<T: Scalar> Display for Affine<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        write_scalar(f, self.center())?;
        for s in self.symbols() {
            write!(f, " ")?;
            Display::fmt(s, f)?;
        }
        write!(f, ")")
    }
}

/// Hand-written tokenizer over a borrowed string
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let r = self.rest();
        self.pos += r.len() - r.trim_start().len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    fn expect(&mut self, expected: char) -> Result<(), Error> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(_) => Err(Error::MissingDelimiter {
                expected,
                input: self.input.to_owned(),
            }),
            None => Err(Error::UnexpectedEnd),
        }
    }

    /// Returns the next run of non-delimiter, non-whitespace characters
    fn token(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let r = self.rest();
        let n = r
            .find(|c: char| c.is_whitespace() || DELIMITERS.contains(c))
            .unwrap_or(r.len());
        if n == 0 {
            None
        } else {
            self.pos += n;
            Some(&r[..n])
        }
    }

    fn scalar<T: Scalar>(&mut self) -> Result<T, Error> {
        match self.token() {
            Some(t) => t.parse().map_err(|_| Error::BadScalar(t.to_owned())),
            None if self.rest().is_empty() => Err(Error::UnexpectedEnd),
            None => Err(Error::BadScalar(self.rest().to_owned())),
        }
    }

    fn index(&mut self) -> Result<SymbolIndex, Error> {
        match self.token() {
            Some(t) => t
                .parse()
                .map(SymbolIndex)
                .ok()
                .filter(|i| i.is_valid())
                .ok_or_else(|| Error::BadIndex(t.to_owned())),
            None if self.rest().is_empty() => Err(Error::UnexpectedEnd),
            None => Err(Error::BadIndex(self.rest().to_owned())),
        }
    }

    fn interval<T: Scalar>(&mut self) -> Result<Interval<T>, Error> {
        self.expect('[')?;
        let lo = self.scalar()?;
        self.expect(',')?;
        let hi = self.scalar()?;
        self.expect(']')?;
        Ok(Interval::new(lo, hi))
    }

    fn symbol<T: Scalar>(&mut self) -> Result<AffineSymbol<T>, Error> {
        let coeff = self.scalar()?;
        self.expect('_')?;
        let index = self.index()?;
        index.reserve();
        Ok(AffineSymbol::with_index(index, coeff))
    }

    fn affine<T: Scalar>(&mut self) -> Result<Affine<T>, Error> {
        self.expect('(')?;
        let center = self.scalar()?;
        let mut syms = vec![];
        loop {
            match self.peek() {
                Some(')') => break,
                Some(_) => syms.push(self.symbol()?),
                None => return Err(Error::UnexpectedEnd),
            }
        }
        self.expect(')')?;
        Ok(Affine::from_symbols(center, syms))
    }

    fn finish<V>(mut self, v: V) -> Result<V, Error> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            Ok(v)
        } else {
            Err(Error::TrailingInput(self.rest().to_owned()))
        }
    }
}

impl<T: Scalar> std::str::FromStr for Interval<T> {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut c = Cursor::new(s);
        let v = c.interval()?;
        c.finish(v)
    }
}

impl<T: Scalar> std::str::FromStr for AffineSymbol<T> {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut c = Cursor::new(s);
        let v = c.symbol()?;
        c.finish(v)
    }
}

impl<T: Scalar> std::str::FromStr for Affine<T> {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut c = Cursor::new(s);
        let v = c.affine()?;
        c.finish(v)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interval_text() {
        let i = Interval::new(-0.1f64, 2.5);
        assert_eq!(i.to_string(), "[-0.1,2.5]");
        assert_eq!(i.to_string().parse::<Interval<f64>>().unwrap(), i);
        assert_eq!(format!("{i:.2}"), "[-0.10,2.50]");

        let j: Interval<f32> = " [ 1 , 2 ] ".parse().unwrap();
        assert_eq!(j, Interval::new(1.0, 2.0));
    }

    #[test]
    fn symbol_text() {
        let s = AffineSymbol::with_index(SymbolIndex(3), 0.25f64);
        assert_eq!(s.to_string(), "+0.25_3");
        let n = AffineSymbol::with_index(SymbolIndex(4), -1.0f64);
        assert_eq!(n.to_string(), "-1_4");
        let z = AffineSymbol::with_index(SymbolIndex(5), -0.0f64);
        assert_eq!(z.to_string(), "-0_5");

        for v in [s, n, z] {
            let p: AffineSymbol<f64> = v.to_string().parse().unwrap();
            assert_eq!(p.index(), v.index());
            assert_eq!(p.coeff().to_bits(), v.coeff().to_bits());
        }
    }

    #[test]
    fn affine_text() {
        let a = Affine::from_symbols(
            0.1f64,
            [
                AffineSymbol::with_index(SymbolIndex(2), 1.0 / 3.0),
                AffineSymbol::with_index(SymbolIndex(9), -1e-300),
            ],
        );
        let s = a.to_string();
        let b: Affine<f64> = s.parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(Affine::constant(2.0f32).to_string(), "(2)");
        assert_eq!("(2)".parse::<Affine<f32>>().unwrap(), Affine::constant(2.0));
    }

    #[test]
    fn parse_normalizes() {
        let a: Affine<f64> = "(0 +1_7 +2_6 +0.5_7)".parse().unwrap();
        assert_eq!(
            a.symbols(),
            &[
                AffineSymbol::with_index(SymbolIndex(6), 2.0),
                AffineSymbol::with_index(SymbolIndex(7), 1.5),
            ]
        );
    }

    #[test]
    fn parse_reserves_indices() {
        let big = SymbolIndex::fresh().0 + 500;
        let s: AffineSymbol<f64> = format!("+1_{big}").parse().unwrap();
        assert!(SymbolIndex::fresh() > s.index());
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Interval<f64>>(), Err(Error::UnexpectedEnd));
        assert_eq!("[1,".parse::<Interval<f64>>(), Err(Error::UnexpectedEnd));
        assert!(matches!(
            "[1;2]".parse::<Interval<f64>>(),
            Err(Error::BadScalar(..))
        ));
        assert!(matches!(
            "(1 2)".parse::<Affine<f64>>(),
            Err(Error::MissingDelimiter { expected: '_', .. })
        ));
        assert!(matches!(
            "(1 +2_x)".parse::<Affine<f64>>(),
            Err(Error::BadIndex(..))
        ));
        assert!(matches!(
            "(1 +2_-3)".parse::<Affine<f64>>(),
            Err(Error::BadIndex(..))
        ));
        assert_eq!(
            "(1 +1_18446744073709551615)".parse::<Affine<f64>>(),
            Err(Error::BadIndex("18446744073709551615".to_owned()))
        );
        assert_eq!(
            "(1 +2_3".parse::<Affine<f64>>(),
            Err(Error::UnexpectedEnd)
        );
        assert_eq!(
            "[1,2] x".parse::<Interval<f64>>(),
            Err(Error::TrailingInput("x".to_owned()))
        );
        assert!(matches!(
            "1,2]".parse::<Interval<f64>>(),
            Err(Error::MissingDelimiter { expected: '[', .. })
        ));
    }
}
