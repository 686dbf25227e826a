//! Randomized checks that every operator returns a bound containing the true
//! value, for both range types
use aarange::types::{Affine, AffineSymbol, Interval, SymbolIndex};
use approx::assert_relative_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};

const TRIALS: usize = 200;
const SAMPLES: usize = 16;

fn random_interval(rng: &mut StdRng, lo: f64, hi: f64) -> Interval<f64> {
    let a = rng.gen_range(lo..hi);
    let b = rng.gen_range(lo..hi);
    Interval::new(a.min(b), a.max(b))
}

fn sample(rng: &mut StdRng, i: Interval<f64>) -> f64 {
    if i.lo() == i.hi() {
        i.lo()
    } else {
        rng.gen_range(i.lo()..=i.hi())
    }
}

#[track_caller]
fn check(name: &str, bound: Interval<f64>, v: f64) {
    if v.is_nan() {
        return;
    }
    let eps = 1e-9 * (1.0 + v.abs());
    assert!(
        bound.lo() - eps <= v && v <= bound.hi() + eps,
        "{name}: {v} is outside of {bound}"
    );
}

type Unary = (&'static str, fn(f64) -> f64, f64, f64);

/// Unary functions, with the domain that inputs are drawn from
const UNARY: &[Unary] = &[
    ("exp", f64::exp, -4.0, 4.0),
    ("ln", f64::ln, 0.01, 10.0),
    ("sqrt", f64::sqrt, 0.0, 10.0),
    ("recip", f64::recip, 0.1, 10.0),
    ("neg recip", f64::recip, -10.0, -0.1),
    ("cbrt", f64::cbrt, -10.0, 10.0),
    ("abs", f64::abs, -5.0, 5.0),
    ("floor", f64::floor, -5.0, 5.0),
    ("ceil", f64::ceil, -5.0, 5.0),
    ("sin", f64::sin, -10.0, 10.0),
    ("cos", f64::cos, -10.0, 10.0),
    ("tanh", f64::tanh, -3.0, 3.0),
    ("sinh", f64::sinh, -3.0, 3.0),
    ("cosh", f64::cosh, -3.0, 3.0),
    ("exp2", f64::exp2, -4.0, 4.0),
    ("log10", f64::log10, 0.01, 10.0),
];

fn eval_interval(name: &str, i: Interval<f64>) -> Interval<f64> {
    match name {
        "exp" => i.exp(),
        "ln" => i.ln(),
        "sqrt" => i.sqrt(),
        "recip" | "neg recip" => i.recip(),
        "cbrt" => i.cbrt(),
        "abs" => i.abs(),
        "floor" => i.floor(),
        "ceil" => i.ceil(),
        "sin" => i.sin(),
        "cos" => i.cos(),
        "tanh" => i.tanh(),
        "sinh" => i.sinh(),
        "cosh" => i.cosh(),
        "exp2" => i.exp2(),
        "log10" => i.log10(),
        _ => unreachable!("unknown function {name}"),
    }
}

fn eval_affine(name: &str, a: &Affine<f64>) -> Affine<f64> {
    match name {
        "exp" => a.exp(),
        "ln" => a.ln(),
        "sqrt" => a.sqrt(),
        "recip" | "neg recip" => a.recip(),
        "cbrt" => a.cbrt(),
        "abs" => a.abs(),
        "floor" => a.floor(),
        "ceil" => a.ceil(),
        "sin" => a.sin(),
        "cos" => a.cos(),
        "tanh" => a.tanh(),
        "sinh" => a.sinh(),
        "cosh" => a.cosh(),
        "exp2" => a.exp2(),
        "log10" => a.log10(),
        _ => unreachable!("unknown function {name}"),
    }
}

#[test]
fn interval_binary_ops() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..TRIALS {
        let a = random_interval(&mut rng, -10.0, 10.0);
        let b = random_interval(&mut rng, -10.0, 10.0);
        let p = random_interval(&mut rng, 0.5, 10.0);
        for _ in 0..SAMPLES {
            let x = sample(&mut rng, a);
            let y = sample(&mut rng, b);
            let z = sample(&mut rng, p);
            check("add", a + b, x + y);
            check("sub", a - b, x - y);
            check("mul", a * b, x * y);
            check("div", a / p, x / z);
            check("min", a.min(b), x.min(y));
            check("max", a.max(b), x.max(y));
            check("rem", a % b, x % y);
            check("scale", a * -3.0, x * -3.0);
            check("pow", p.pow(b), z.powf(y));
        }
    }
}

#[test]
fn affine_binary_ops() {
    let mut rng = StdRng::seed_from_u64(0xaff1);
    for _ in 0..TRIALS {
        let ia = random_interval(&mut rng, -10.0, 10.0);
        let ib = random_interval(&mut rng, -10.0, 10.0);
        let ip = random_interval(&mut rng, 0.5, 10.0);
        let (a, b, p) = (
            Affine::from(ia),
            Affine::from(ib),
            Affine::from(ip),
        );
        for _ in 0..SAMPLES {
            let x = sample(&mut rng, ia);
            let y = sample(&mut rng, ib);
            let z = sample(&mut rng, ip);
            check("add", (&a + &b).to_interval(), x + y);
            check("sub", (&a - &b).to_interval(), x - y);
            check("mul", (&a * &b).to_interval(), x * y);
            check("div", (&a / &p).to_interval(), x / z);
            check("min", a.min(&b).to_interval(), x.min(y));
            check("max", a.max(&b).to_interval(), x.max(y));
            check("rem", (&a % &p).to_interval(), x.rem_euclid(z));
            check("mod", a.rem_scalar(2.5).to_interval(), x.rem_euclid(2.5));
            check("pow", p.pow(&b).to_interval(), z.powf(y));
        }
    }
}

#[test]
fn unary_functions() {
    let mut rng = StdRng::seed_from_u64(0xf00d);
    for &(name, f, lo, hi) in UNARY {
        for _ in 0..TRIALS {
            let i = random_interval(&mut rng, lo, hi);
            let a = Affine::from(i);
            let bi = eval_interval(name, i);
            let ba = eval_affine(name, &a).to_interval();
            for _ in 0..SAMPLES {
                let x = sample(&mut rng, i);
                check(name, bi, f(x));
                check(name, ba, f(x));
            }
        }
    }
}

/// Correlated expressions: every term is driven by the same unknown, so the
/// affine bound has to follow the true function rather than the sum of
/// independent bounds
#[test]
fn correlated_expressions() {
    let mut rng = StdRng::seed_from_u64(0xc0de);
    for _ in 0..TRIALS {
        let i = random_interval(&mut rng, 0.1, 4.0);
        let a = Affine::from(i);
        let poly = &(&a * &a) - &(&a * 3.0);
        let quot = &a / &(&a + 1.0);
        let mixed = &a.exp() - &a.sqrt();
        let diff = &a - &a;
        assert_eq!(diff.radius(), 0.0);
        for _ in 0..SAMPLES {
            let x = sample(&mut rng, i);
            check("poly", poly.to_interval(), x * x - 3.0 * x);
            check("quot", quot.to_interval(), x / (x + 1.0));
            check("mixed", mixed.to_interval(), x.exp() - x.sqrt());
        }
    }
}

fn random_affine(rng: &mut StdRng) -> Affine<f64> {
    let center = rng.gen_range(1.0..4.0);
    let n = rng.gen_range(0..8);
    let syms: Vec<_> = (0..n)
        .map(|_| {
            AffineSymbol::with_index(
                SymbolIndex(rng.gen_range(0..16)),
                rng.gen_range(-1.0..1.0),
            )
        })
        .collect();
    Affine::from_symbols(center, syms)
}

#[track_caller]
fn check_merge(name: &str, out: &Affine<f64>, limit: usize) {
    assert!(
        out.symbols().windows(2).all(|w| w[0].index() < w[1].index()),
        "{name}: symbols out of order in {out}"
    );
    assert!(out.len() <= limit, "{name}: too many symbols in {out}");
}

#[test]
fn merge_invariant() {
    let mut rng = StdRng::seed_from_u64(0x3e63);
    for _ in 0..TRIALS {
        let a = random_affine(&mut rng);
        let b = random_affine(&mut rng);
        let n = a.len() + b.len();
        check_merge("add", &(&a + &b), n);
        check_merge("sub", &(&a - &b), n);
        // multiplication and division add one fresh symbol
        check_merge("mul", &(&a * &b), n + 1);
        check_merge("div", &(&a / &b), n + 2);
        check_merge("union", &a.range_union(&b), n + 1);
        check_merge("isct", &a.range_isct(&b), n);
        check_merge("min", &a.min(&b), n + 1);
    }
}

#[test]
fn to_interval_radius() {
    let mut rng = StdRng::seed_from_u64(0x7a11);
    for _ in 0..TRIALS {
        let a = random_affine(&mut rng);
        let i = a.to_interval();
        assert_relative_eq!(i.center(), a.center(), epsilon = 1e-12);
        for s in a.symbols() {
            assert!(i.radius() >= s.abs_coeff() - 1e-12, "{a} vs {i}");
        }
    }
}
