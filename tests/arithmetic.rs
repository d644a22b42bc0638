use std::cmp::Ordering;

use float_prec::ieee754::*;
use float_prec::RoundingMode;
use num_bigint::BigUint;

fn f(x: f64) -> Float {
    Float::from(x)
}

fn check(x: &Float, expected: f64, what: &str) {
    let v = x.to_f64();
    if expected.is_nan() {
        assert!(v.is_nan(), "{}: expected NaN, got {:e}", what, v);
    } else {
        assert_eq!(v.to_bits(), expected.to_bits(), "{}: expected {:e}, got {:e}", what, expected, v);
    }
}

#[test]
fn add_special_values() {
    let nan = Format::double().nan();
    let inf = f(f64::INFINITY);
    let ninf = f(f64::NEG_INFINITY);

    for x in [0.0, -0.0, 1.0, -3.5, f64::INFINITY, f64::MAX] {
        check(&(&nan + &f(x)), f64::NAN, "NaN + x");
        check(&(&f(x) + &nan), f64::NAN, "x + NaN");
    }

    let r = &inf + &ninf;
    check(&r, f64::NAN, "(+Inf) + (-Inf)");
    assert!(r.invalid_flag(), "(+Inf) + (-Inf) should be invalid");
    check(&(&inf - &inf), f64::NAN, "Inf - Inf");
    check(&(&inf + &f(1.0)), f64::INFINITY, "Inf + 1");
    check(&(&f(1.0) + &ninf), f64::NEG_INFINITY, "1 + (-Inf)");

    check(&(&f(-0.0) + &f(-0.0)), -0.0, "(-0) + (-0)");
    check(&(&f(-0.0) + &f(0.0)), 0.0, "(-0) + 0");
    check(&(&f(2.5) + &f(-2.5)), 0.0, "x + (-x)");
    check(&(&f(2.5) - &f(2.5)), 0.0, "x - x");

    let floor = Format::double().with_rounding_mode(RoundingMode::Floor);
    let x = f(2.5).cast(&floor);
    let y = f(-2.5).cast(&floor);
    check(&x.add(&y), -0.0, "x + (-x) rounding towards negative infinity");
    check(&f(-0.0).cast(&floor).add(&f(0.0).cast(&floor)), -0.0, "(-0) + 0 towards negative infinity");
}

#[test]
fn mul_special_values() {
    let inf = f(f64::INFINITY);
    let ninf = f(f64::NEG_INFINITY);

    let r = &f(0.0) * &inf;
    check(&r, f64::NAN, "0 * Inf");
    assert!(r.invalid_flag(), "0 * Inf should be invalid");
    check(&(&ninf * &f(-0.0)), f64::NAN, "-Inf * -0");
    check(&(&inf * &inf), f64::INFINITY, "Inf * Inf");
    check(&(&inf * &ninf), f64::NEG_INFINITY, "Inf * -Inf");
    check(&(&ninf * &f(-2.0)), f64::INFINITY, "-Inf * -2");
    check(&(&f(0.0) * &f(-5.0)), -0.0, "(+0) * (-5)");
    check(&(&f(-0.0) * &f(-5.0)), 0.0, "(-0) * (-5)");
}

#[test]
fn div_special_values() {
    let inf = f(f64::INFINITY);

    let r = &f(1.0) / &f(-0.0);
    check(&r, f64::NEG_INFINITY, "1 / (-0)");
    assert!(r.div_by_zero_flag(), "1 / (-0) should divide by zero");
    check(&(&f(-3.0) / &f(0.0)), f64::NEG_INFINITY, "-3 / 0");

    let r = &f(0.0) / &f(0.0);
    check(&r, f64::NAN, "0 / 0");
    assert!(r.invalid_flag(), "0 / 0 should be invalid");
    check(&(&inf / &inf), f64::NAN, "Inf / Inf");
    check(&(&inf / &f(-2.0)), f64::NEG_INFINITY, "Inf / -2");
    check(&(&f(-2.0) / &inf), -0.0, "-2 / Inf");
    check(&(&f(0.0) / &f(-2.0)), -0.0, "0 / -2");
}

#[test]
fn compare() {
    let nan = Format::double().nan();
    assert_eq!(nan.compare(&nan), None, "NaN is unordered");
    assert_eq!(nan.compare(&f(1.0)), None, "NaN is unordered");
    assert_eq!(nan, nan.clone(), "identical NaN layouts are equal");

    assert_eq!(f(0.0).compare(&f(-0.0)), Some(Ordering::Equal));
    assert_ne!(f(0.0), f(-0.0), "signed zeros differ bitwise");
    assert_eq!(f(-1.0).compare(&f(0.5)), Some(Ordering::Less));
    assert_eq!(f(-1.0).compare(&f(-2.0)), Some(Ordering::Greater));
    assert_eq!(f(3.0).compare(&f(3.0)), Some(Ordering::Equal));
    assert_eq!(f(f64::NEG_INFINITY).compare(&f(-f64::MAX)), Some(Ordering::Less));
    assert_eq!(f(f64::INFINITY).compare(&f(f64::INFINITY)), Some(Ordering::Equal));

    // values of different formats compare numerically
    let third = Format::single().parse("0.3333333").unwrap();
    assert_eq!(third.compare(&f(1.0 / 3.0)), Some(Ordering::Less));
    assert_eq!(Float::from(0.5f32).compare(&f(0.5)), Some(Ordering::Equal));
}

#[test]
fn max_min() {
    let nan = Format::double().nan();
    check(&f(1.0).max(&f(2.0)), 2.0, "max");
    check(&f(1.0).min(&f(2.0)), 1.0, "min");
    check(&nan.max(&f(2.0)), 2.0, "max ignores NaN");
    check(&f(2.0).min(&nan), 2.0, "min ignores NaN");
    check(&f(-0.0).max(&f(0.0)), 0.0, "max prefers +0");
    check(&f(0.0).min(&f(-0.0)), -0.0, "min prefers -0");
    assert!(nan.max(&nan).is_nan());
}

#[test]
fn remainder() {
    check(&f(5.0).remainder(&f(3.0)), -1.0, "remainder(5, 3)");
    check(&f(-5.0).remainder(&f(3.0)), 1.0, "remainder(-5, 3)");
    check(&f(3.0).remainder(&f(2.0)), -1.0, "remainder(3, 2)");
    check(&f(5.0).remainder(&f(2.0)), 1.0, "remainder(5, 2)");
    check(&f(4.0).remainder(&f(2.0)), 0.0, "remainder(4, 2)");
    check(&f(-4.0).remainder(&f(2.0)), -0.0, "remainder(-4, 2)");
    check(&f(1.0).remainder(&f(3.0)), 1.0, "remainder(1, 3)");
    check(&f(1.0).remainder(&f(f64::INFINITY)), 1.0, "remainder(1, Inf)");

    let r = f(1.0).remainder(&f(0.0));
    check(&r, f64::NAN, "remainder(1, 0)");
    assert!(r.invalid_flag());
    check(&f(f64::INFINITY).remainder(&f(2.0)), f64::NAN, "remainder(Inf, 2)");
}

#[test]
fn fmod() {
    let cases = [
        (5.0, 3.0),
        (-5.0, 3.0),
        (5.5, 2.0),
        (-7.25, -0.5),
        (1e300, 3.0),
        (2f64.powi(100), 3.0),
        (0.1, 0.03),
        (1e-310, 3e-320),
    ];
    for (x, y) in cases {
        check(&(f(x) % f(y)), x % y, &format!("fmod({:e}, {:e})", x, y));
    }
    check(&f(-0.0).fmod(&f(1.0)), -0.0, "fmod(-0, 1)");
}

#[test]
fn roots() {
    for x in [2.0, 0.25, 1e-310, 3.0, 1e300, 123456.789] {
        check(&f(x).sqrt(), x.sqrt(), &format!("sqrt({:e})", x));

        // libm's cbrt is only faithful: allow one ulp
        let got = f(x).cbrt().to_f64();
        let expected = x.cbrt();
        let ulp = f64::from_bits(expected.to_bits() + 1) - expected;
        assert!((got - expected).abs() <= ulp, "cbrt({:e}): expected {:e}, got {:e}", x, expected, got);
    }

    check(&f(-0.0).sqrt(), -0.0, "sqrt(-0)");
    let r = f(-1.0).sqrt();
    check(&r, f64::NAN, "sqrt(-1)");
    assert!(r.invalid_flag(), "sqrt(-1) should be invalid");
    check(&f(f64::INFINITY).sqrt(), f64::INFINITY, "sqrt(Inf)");
    check(&f(27.0).cbrt(), 3.0, "cbrt(27)");
    check(&f(-8.0).cbrt(), -2.0, "cbrt(-8)");
    check(&f(0.125).cbrt(), 0.5, "cbrt(0.125)");
    check(&f(f64::NEG_INFINITY).cbrt(), f64::NEG_INFINITY, "cbrt(-Inf)");
}

#[test]
fn mixed_formats() {
    let a = Float::from(0.1f32);
    let b = Float::from(0.2f64);

    // the exact operands are combined and rounded once into the wider format
    let sum = &a + &b;
    assert!(sum.format().same_layout(&Format::double()));
    check(&sum, 0.1f32 as f64 + 0.2, "0.1f32 + 0.2");
    check(&(&b * &a), 0.2 * (0.1f32 as f64), "0.2 * 0.1f32");
    check(&(&a / &b), (0.1f32 as f64) / 0.2, "0.1f32 / 0.2");

    // the rounding mode comes from the left operand
    let down = Format::single().with_rounding_mode(RoundingMode::Down);
    let x = Float::from(1.0f32).cast(&down);
    let third = x.div(&Float::from(3.0f32));
    assert_eq!(third.format().rounding_mode(), RoundingMode::Down);
    assert_eq!(third.to_f32(), 0.333_333_3, "1/3 rounded down");
}

#[test]
fn explicit_output_format() {
    let single = Format::single();
    let x = f(1.0);
    let y = f(1e-10);
    let r = x.add_in(&y, &single);
    assert!(r.format().same_layout(&single));
    assert_eq!(r.to_f32(), 1.0);
    assert!(r.inexact_flag());
}

#[test]
fn sign_operations() {
    check(&-f(2.0), -2.0, "neg");
    check(&-f(-0.0), 0.0, "neg -0");
    check(&f(-2.0).abs(), 2.0, "abs");
    check(&f(2.0).copy_sign(&f(-0.0)), -2.0, "copy_sign");
    assert_eq!(f(-3.0).signum(), -1);
    assert_eq!(f(0.0).signum(), 0);
    assert_eq!(f(7.0).signum(), 1);
}

#[test]
fn nan_operands_give_canonical_nan() {
    // sign and payload of a NaN operand are dropped
    let single = Format::single();
    let quiet = single.nan();
    let odd = single.from_bit_layout(BigUint::from(0xFFC0_1234u32)).unwrap();
    assert!(odd.is_nan() && odd.sign());

    let one = Float::from(1.0f32);
    for r in [odd.add(&one), odd.mul(&odd), one.div(&odd), odd.sqrt(), odd.sin(), odd.cast(&single)] {
        assert!(r.is_nan(), "{} should be NaN", r);
        assert_eq!(r.to_bits(), quiet.to_bits(), "NaN result should be canonical");
    }
    assert_eq!(odd.cast(&Format::double()).to_bits(), Format::double().nan().to_bits());
}
