use float_prec::{Decimal, DecimalValue, Error, RoundingMode};
use num_bigint::BigUint;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn parse() {
    let d = dec("-12.375");
    assert!(d.is_negative());
    assert_eq!(d.unscaled(), &BigUint::from(12375u32));
    assert_eq!(d.exponent(), -3);
    assert_eq!(d.precision(), 5);

    let d = dec("1.5E+3");
    assert_eq!(d.unscaled(), &BigUint::from(15u32));
    assert_eq!(d.exponent(), 2);

    let d = dec(".5");
    assert_eq!((d.unscaled(), d.exponent()), (&BigUint::from(5u32), -1));
    let d = dec("7.");
    assert_eq!((d.unscaled(), d.exponent()), (&BigUint::from(7u32), 0));

    let d = dec("-0");
    assert!(d.is_zero() && d.is_negative());

    for s in ["", "-", ".", "1e", "1.2.3", "abc", "1e1.5", "--1"] {
        match s.parse::<Decimal>() {
            Err(Error::Parse { input, radix: 10 }) => assert_eq!(input, s),
            other => panic!("expected a parse error for {:?}, got {:?}", s, other),
        }
    }
}

#[test]
fn round() {
    let cases = [
        ("2.5", RoundingMode::HalfEven, "2"),
        ("3.5", RoundingMode::HalfEven, "4"),
        ("2.5", RoundingMode::HalfUp, "3"),
        ("2.5", RoundingMode::HalfDown, "2"),
        ("-2.5", RoundingMode::HalfUp, "-3"),
        ("2.1", RoundingMode::Ceiling, "3"),
        ("-2.1", RoundingMode::Ceiling, "-2"),
        ("2.9", RoundingMode::Floor, "2"),
        ("-2.1", RoundingMode::Floor, "-3"),
        ("2.1", RoundingMode::Up, "3"),
        ("2.9", RoundingMode::Down, "2"),
        ("2.9", RoundingMode::Unnecessary, "2"),
    ];
    for (s, rm, expected) in cases {
        assert_eq!(dec(s).round(1, rm).to_plain_string(), expected, "rounding {} with {:?}", s, rm);
    }

    // carry into a new digit keeps the requested precision
    let d = dec("9.96").round(2, RoundingMode::HalfEven);
    assert_eq!(d.to_string(), "10");
    assert_eq!(d.precision(), 2);

    let d = dec("123.456").round(10, RoundingMode::HalfEven);
    assert_eq!(d, dec("123.456"));
}

#[test]
fn strip_trailing_zeros() {
    assert_eq!(dec("1.2500").strip_trailing_zeros(), dec("1.25"));
    assert_eq!(dec("100").strip_trailing_zeros().to_string(), "100");
    assert_eq!(dec("-0.000").strip_trailing_zeros(), Decimal::zero(true));
}

#[test]
fn strings() {
    let cases = [
        ("0.100000001", "0.100000001", "0.100000001", "0.100000001"),
        ("3.4028235E+38", "3.4028235E+38", "340282350000000000000000000000000000000", "340.28235E+36"),
        ("1.4E-45", "1.4E-45", "0.0000000000000000000000000000000000000000000014", "1.4E-45"),
        ("0.000001", "0.000001", "0.000001", "0.000001"),
        ("0.0000001", "1E-7", "0.0000001", "100E-9"),
        ("-12", "-12", "-12", "-12"),
        ("1.2E+2", "1.2E+2", "120", "120"),
    ];
    for (s, sci, plain, eng) in cases {
        let d = dec(s);
        assert_eq!(d.to_scientific_string(), sci, "scientific form of {}", s);
        assert_eq!(d.to_plain_string(), plain, "plain form of {}", s);
        assert_eq!(d.to_engineering_string(), eng, "engineering form of {}", s);
    }

    assert_eq!(Decimal::from(-42i64).to_string(), "-42");
    assert_eq!(Decimal::from(7u64).to_string(), "7");
    assert_eq!(DecimalValue::NaN.to_string(), "NaN");
    assert_eq!(DecimalValue::Infinite { negative: true }.to_string(), "-Infinity");
    assert!(DecimalValue::Finite(dec("1")).is_finite());
    assert_eq!(DecimalValue::Infinite { negative: false }.finite(), None);
}

#[test]
fn plain_string_of_huge_exponents() {
    assert_eq!(dec("1e999999999999").to_plain_string(), "1E+999999999999");
    assert_eq!(dec("-2.5e-999999999999").to_plain_string(), "-2.5E-999999999999");

    // a million padding zeros is still written out
    let s = dec("1e1048576").to_plain_string();
    assert_eq!(s.len(), 1_048_577);
    assert!(s.starts_with('1') && s.bytes().skip(1).all(|b| b == b'0'));
    assert_eq!(dec("1e1048577").to_plain_string(), "1E+1048577");
}
