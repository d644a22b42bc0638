use float_prec::ieee754::*;
use float_prec::RoundingMode;

// 4-bit significands: integers above 16 need rounding
fn narrow(rm: RoundingMode) -> Format {
    Format::new(8, 4, rm).unwrap()
}

#[test]
fn increment_table() {
    use RoundingMode::*;

    // (mode, sign, lsb, half, sticky) => increment
    let cases = [
        (Down, false, true, true, true, false),
        (Unnecessary, false, true, true, true, false),
        (Up, false, false, false, true, true),
        (Up, true, false, true, false, true),
        (Up, false, true, false, false, false),
        (Ceiling, false, false, false, true, true),
        (Ceiling, true, false, true, true, false),
        (Floor, true, false, false, true, true),
        (Floor, false, false, true, true, false),
        (HalfUp, false, false, true, false, true),
        (HalfUp, false, true, false, true, false),
        (HalfDown, false, true, true, false, false),
        (HalfDown, false, false, true, true, true),
        (HalfEven, false, false, true, false, false),
        (HalfEven, false, true, true, false, true),
        (HalfEven, true, false, true, true, true),
        (HalfEven, false, true, false, true, false),
    ];

    for (rm, sign, lsb, half, sticky, expected) in cases {
        assert_eq!(
            rm.requires_increment(sign, lsb, half, sticky),
            expected,
            "unexpected rounding decision: {:?} sign={} lsb={} half={} sticky={}",
            rm,
            sign,
            lsb,
            half,
            sticky
        );
    }
}

#[test]
fn ties_with_even_lsb() {
    use RoundingMode::*;

    // 25 = 0b1100_1: kept 1100, half bit 1, sticky 0
    let expected = [
        (HalfEven, 24.0),
        (HalfUp, 26.0),
        (HalfDown, 24.0),
        (Up, 26.0),
        (Down, 24.0),
        (Ceiling, 26.0),
        (Floor, 24.0),
        (Unnecessary, 24.0),
    ];

    for (rm, v) in expected {
        let x = narrow(rm).from_i64(25);
        assert_eq!(x.to_f64(), v, "rounding 25 with {:?}", rm);
        assert!(x.inexact_flag(), "rounding 25 with {:?} should be inexact", rm);
    }
}

#[test]
fn ties_with_odd_lsb() {
    use RoundingMode::*;

    // 27 = 0b1101_1: kept 1101, half bit 1, sticky 0
    let expected = [(HalfEven, 28.0), (HalfUp, 28.0), (HalfDown, 26.0), (Down, 26.0)];
    for (rm, v) in expected {
        let x = narrow(rm).from_i64(27);
        assert_eq!(x.to_f64(), v, "rounding 27 with {:?}", rm);
    }
}

#[test]
fn above_half() {
    use RoundingMode::*;

    // 51 = 0b1100_11: kept 1100, half bit 1, sticky 1
    let expected = [
        (HalfEven, 52.0),
        (HalfUp, 52.0),
        (HalfDown, 52.0),
        (Up, 52.0),
        (Down, 48.0),
        (Ceiling, 52.0),
        (Floor, 48.0),
    ];

    for (rm, v) in expected {
        let x = narrow(rm).from_i64(51);
        assert_eq!(x.to_f64(), v, "rounding 51 with {:?}", rm);
    }
}

#[test]
fn negative_directed() {
    use RoundingMode::*;

    let expected = [(Ceiling, -24.0), (Floor, -26.0), (Up, -26.0), (Down, -24.0)];
    for (rm, v) in expected {
        let x = narrow(rm).from_i64(-25);
        assert_eq!(x.to_f64(), v, "rounding -25 with {:?}", rm);
    }
}

#[test]
fn carry_into_exponent() {
    // 31 = 0b1111_1 rounds up to 32: the significand carries into the exponent
    let x = narrow(RoundingMode::HalfEven).from_i64(31);
    assert_eq!(x.to_f64(), 32.0);
    assert!(x.carry_flag(), "rounding 31 should carry");
    assert_eq!(x.exponent(), 5);
}

#[test]
fn exact_values() {
    for rm in RoundingMode::ALL {
        let x = narrow(rm).from_i64(26);
        assert_eq!(x.to_f64(), 26.0, "26 is representable under {:?}", rm);
        assert!(x.flags().is_empty(), "exact rounding raised flags under {:?}", rm);
    }
}

#[test]
fn overflow_by_mode() {
    // an exponent above the range is infinite whatever the mode
    for rm in RoundingMode::ALL {
        let single = Format::single().with_rounding_mode(rm);
        for (text, sign) in [("1e39", false), ("-1e39", true)] {
            let x = single.parse(text).unwrap();
            assert!(x.is_infinite(), "{} should be infinite under {:?}", text, rm);
            assert_eq!(x.sign(), sign, "{} lost its sign under {:?}", text, rm);
            assert!(x.overflow_flag() && x.inexact_flag(), "{} should overflow under {:?}", text, rm);
        }
    }

    // just above MAX_FLOAT: truncation stays in the top binade
    let down = Format::single().with_rounding_mode(RoundingMode::Down);
    let x = down.parse("3.4028236e38").unwrap();
    assert_eq!(x, down.max_value());
    assert!(!x.overflow_flag() && x.inexact_flag());

    // a rounding carry past the largest exponent is infinite
    let up = Format::single().with_rounding_mode(RoundingMode::Up);
    let x = up.parse("3.4028236e38").unwrap();
    assert!(x.is_infinite() && x.overflow_flag(), "carry out of the top binade");
}
