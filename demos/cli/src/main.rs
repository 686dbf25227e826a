use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info};

use aarange::{
    approx::{Cbrt, ChebyshevFit, ConvexModel, Exp, Ln, Recip, Sqrt},
    range::{self, RangeSet},
    scalar::Scalar,
    types::{Affine, Interval},
};

/// Evaluates one range-arithmetic operation and prints the result
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    cmd: Command,

    /// Compute in single precision
    #[clap(long)]
    f32: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Operate on intervals, written as `[lo,hi]`
    Interval {
        #[clap(flatten)]
        settings: OpSettings,
    },

    /// Operate on affine values, written as `(center +coeff_index ...)`
    ///
    /// Use `[lo,hi]` to build a value with a single fresh symbol instead.
    Affine {
        #[clap(flatten)]
        settings: OpSettings,
    },

    /// Print the Chebyshev approximation of a function over `[lo, hi]`
    Approx {
        /// Function to approximate
        #[clap(short, long, value_enum)]
        func: ConvexFn,

        /// Lower bound
        #[clap(allow_hyphen_values = true)]
        lo: String,

        /// Upper bound
        #[clap(allow_hyphen_values = true)]
        hi: String,
    },
}

#[derive(Parser)]
struct OpSettings {
    /// Operation to apply
    #[clap(short, long, value_enum)]
    op: Op,

    /// First operand
    #[clap(allow_hyphen_values = true)]
    a: String,

    /// Second operand, for binary operations
    #[clap(allow_hyphen_values = true)]
    b: Option<String>,

    /// Number of digits to print after the decimal point
    #[clap(short, long)]
    precision: Option<usize>,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum Op {
    // Binary operations
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Min,
    Max,
    Pow,
    Union,
    Isct,
    Contains,
    Lt,
    Gt,

    // Unary operations
    Neg,
    Abs,
    Sgn,
    Recip,
    Sqrt,
    Cbrt,
    Exp,
    Ln,
    Floor,
    Ceil,
    Round,
    Frac,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum ConvexFn {
    Exp,
    Ln,
    Sqrt,
    Recip,
    Cbrt,
}

/// Result of an operation: either a range or a `0` / `1` scalar
enum Output<R, T> {
    Range(R),
    Scalar(T),
}

fn parse<V: std::str::FromStr<Err = aarange::Error>>(s: &str) -> Result<V> {
    s.parse().with_context(|| format!("failed to parse {s:?}"))
}

fn second<'a>(op: Op, b: &'a Option<String>) -> Result<&'a str> {
    match b {
        Some(b) => Ok(b),
        None => bail!("{op:?} needs a second operand"),
    }
}

fn run_interval<T: Scalar>(s: &OpSettings) -> Result<Output<Interval<T>, T>> {
    let a: Interval<T> = parse(&s.a)?;
    let b = || -> Result<Interval<T>> { parse(second(s.op, &s.b)?) };
    let out = match s.op {
        Op::Add => a + b()?,
        Op::Sub => a - b()?,
        Op::Mul => a * b()?,
        Op::Div => a / b()?,
        Op::Rem => a % b()?,
        Op::Min => a.min(b()?),
        Op::Max => a.max(b()?),
        Op::Pow => a.pow(b()?),
        Op::Union => range::union(&a, &b()?),
        Op::Isct => range::isct(&a, &b()?),
        Op::Contains => {
            return Ok(Output::Scalar(range::contains(&a, &b()?)));
        }
        Op::Lt => a.cmp_lt(&b()?),
        Op::Gt => a.cmp_gt(&b()?),
        Op::Neg => -a,
        Op::Abs => a.abs(),
        Op::Sgn => a.sgn(),
        Op::Recip => a.recip(),
        Op::Sqrt => a.sqrt(),
        Op::Cbrt => a.cbrt(),
        Op::Exp => a.exp(),
        Op::Ln => a.ln(),
        Op::Floor => a.floor(),
        Op::Ceil => a.ceil(),
        Op::Round => a.round(),
        Op::Frac => a.frac(),
        Op::Sin => a.sin(),
        Op::Cos => a.cos(),
        Op::Tan => a.tan(),
        Op::Sinh => a.sinh(),
        Op::Cosh => a.cosh(),
        Op::Tanh => a.tanh(),
    };
    Ok(Output::Range(out))
}

/// Parses an affine value, or an interval converted to one
fn parse_affine<T: Scalar>(s: &str) -> Result<Affine<T>> {
    if s.trim_start().starts_with('[') {
        Ok(Affine::from(parse::<Interval<T>>(s)?))
    } else {
        parse(s)
    }
}

fn run_affine<T: Scalar>(s: &OpSettings) -> Result<Output<Affine<T>, T>> {
    let a = parse_affine::<T>(&s.a)?;
    let b = || -> Result<Affine<T>> { parse_affine(second(s.op, &s.b)?) };
    debug!("lhs: {a}");
    let out = match s.op {
        Op::Add => &a + &b()?,
        Op::Sub => &a - &b()?,
        Op::Mul => &a * &b()?,
        Op::Div => &a / &b()?,
        Op::Rem => &a % &b()?,
        Op::Min => a.min(&b()?),
        Op::Max => a.max(&b()?),
        Op::Pow => a.pow(&b()?),
        Op::Union => range::union(&a, &b()?),
        Op::Isct => range::isct(&a, &b()?),
        Op::Contains => {
            return Ok(Output::Scalar(range::contains(&a, &b()?)));
        }
        Op::Lt => a.cmp_lt(&b()?),
        Op::Gt => a.cmp_gt(&b()?),
        Op::Neg => -&a,
        Op::Abs => a.abs(),
        Op::Sgn => a.sgn(),
        Op::Recip => a.recip(),
        Op::Sqrt => a.sqrt(),
        Op::Cbrt => a.cbrt(),
        Op::Exp => a.exp(),
        Op::Ln => a.ln(),
        Op::Floor => a.floor(),
        Op::Ceil => a.ceil(),
        Op::Round => a.round(),
        Op::Frac => a.frac(),
        Op::Sin => a.sin(),
        Op::Cos => a.cos(),
        Op::Tan => a.tan(),
        Op::Sinh => a.sinh(),
        Op::Cosh => a.cosh(),
        Op::Tanh => a.tanh(),
    };
    Ok(Output::Range(out))
}

fn fit<T: Scalar, M: ConvexModel<T>>(
    lo: &str,
    hi: &str,
) -> Result<ChebyshevFit<T>> {
    let lo: T = lo.parse().map_err(|_| anyhow!("bad bound {lo:?}"))?;
    let hi: T = hi.parse().map_err(|_| anyhow!("bad bound {hi:?}"))?;
    if !(lo <= hi) {
        bail!("lower bound {lo} is above upper bound {hi}");
    }
    Ok(aarange::approx::chebyshev_fit::<T, M>(Interval::new(lo, hi)))
}

fn run_approx<T: Scalar>(func: ConvexFn, lo: &str, hi: &str) -> Result<()> {
    let f = match func {
        ConvexFn::Exp => fit::<T, Exp>(lo, hi)?,
        ConvexFn::Ln => fit::<T, Ln>(lo, hi)?,
        ConvexFn::Sqrt => fit::<T, Sqrt>(lo, hi)?,
        ConvexFn::Recip => fit::<T, Recip>(lo, hi)?,
        ConvexFn::Cbrt => fit::<T, Cbrt>(lo, hi)?,
    };
    println!("alpha = {}", f.alpha);
    println!("beta  = {}", f.beta);
    println!("delta = {}", f.delta);
    println!("ss    = {}", f.ss);
    Ok(())
}

fn print_range<R, T>(out: Output<R, T>, p: Option<usize>)
where
    R: RangeSet<Scalar = T> + std::fmt::Display,
    T: Scalar,
{
    match (out, p) {
        (Output::Range(r), Some(p)) => {
            println!("{r:.p$}");
            println!("{:.p$}", r.bounds());
        }
        (Output::Range(r), None) => {
            println!("{r}");
            println!("{}", r.bounds());
        }
        (Output::Scalar(v), _) => println!("{v}"),
    }
}

fn run<T: Scalar>(cmd: &Command) -> Result<()> {
    match cmd {
        Command::Interval { settings } => {
            let out = run_interval::<T>(settings)?;
            print_range(out, settings.precision);
        }
        Command::Affine { settings } => {
            let out = run_affine::<T>(settings)?;
            if let Output::Range(r) = &out {
                info!("result has {} error symbols", r.len());
            }
            print_range(out, settings.precision);
        }
        Command::Approx { func, lo, hi } => run_approx::<T>(*func, lo, hi)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();
    if args.f32 {
        run::<f32>(&args.cmd)
    } else {
        run::<f64>(&args.cmd)
    }
}
