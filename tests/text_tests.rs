// tests/text_tests.rs
use cga_engine::basis::{GROUP_SIZE, NB_GROUPS};
use cga_engine::format::{format, StringFormat};
use cga_engine::ops::equals;
use cga_engine::{parse, parse_named, Multivector, ParseErrorKind, Scalar};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn rendered_multivectors_parse_back() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..50 {
        let mut mv = Multivector::zero();
        for g in 0..NB_GROUPS {
            if rng.gen_bool(0.6) {
                let coords: Vec<Scalar> =
                    (0..GROUP_SIZE[g]).map(|_| rng.gen_range(-100.0..100.0)).collect();
                mv.set_group(g, Some(coords)).unwrap();
            }
        }
        let lossy = parse(&format(&mv, Some("%2.2f")).unwrap()).unwrap();
        assert!(equals(&lossy, &mv, 0.0051), "{mv:?}");

        let exact = parse(&mv.to_string_e20()).unwrap();
        assert!(equals(&exact, &mv, 1e-12));
    }
}

#[test]
fn display_uses_default_format() {
    let mv = parse("-1 + 2.5*e1^ni - no").unwrap();
    assert_eq!(mv.to_string(), " - 1.00 - 1.00*no + 2.50*e1^ni");
    assert_eq!(Multivector::zero().to_string(), "0");
}

#[test]
fn custom_format_round_trips_with_matching_separators() {
    let mut cfg = StringFormat::default();
    cfg.plus = "+".to_string();
    cfg.minus = "-".to_string();
    cfg.fp = "%.3f".to_string();
    let mv = parse("0.125*e2^e3 - 4*no^e1^e2^e3^ni").unwrap();
    let s = cfg.format(&mv).unwrap();
    assert_eq!(s, "0.125*e2^e3-4.000*no^e1^e2^e3^ni");
    assert_eq!(parse(&s).unwrap(), mv);
}

#[test]
fn multi_line_errors() {
    let e = parse_named("1.0\n+ e1^e2\n+ e3^^ni", "points.txt").unwrap_err();
    assert_eq!(e.kind, ParseErrorKind::ExpectedBasisVector);
    assert_eq!((e.line, e.column), (3, 6));
    assert_eq!(e.to_string(), "Expected basis vector at points.txt, line 3, column 6");
}
