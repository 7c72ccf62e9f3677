mod common;

use common::narrow_rand;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use rand::rngs::StdRng;
use rand::SeedableRng;
use robust_predicates::bounds;
use robust_predicates::eft::{two_product, two_sum};
use robust_predicates::expansion::{
    compress, estimate, fast_expansion_sum_zeroelim, scale_expansion_zeroelim,
};
use robust_predicates::Expansion;

fn rational(value: f64) -> BigRational {
    BigRational::from_float(value).unwrap()
}

fn rational_sum(parts: &[f64]) -> BigRational {
    parts.iter().fold(BigRational::zero(), |acc, &p| acc + rational(p))
}

/// A random nonoverlapping two-component expansion, tail first.
fn rand_product_expansion(rng: &mut StdRng) -> [f64; 2] {
    let (head, tail) = two_product(narrow_rand(rng), narrow_rand(rng), bounds().splitter);
    [tail, head]
}

#[test]
fn two_sum_is_error_free() {
    let mut rng = StdRng::seed_from_u64(0x5eed_e001);
    for _ in 0..10_000 {
        let a = narrow_rand(&mut rng);
        let b = narrow_rand(&mut rng);
        let (sum, err) = two_sum(a, b);
        assert_eq!(rational(sum) + rational(err), rational(a) + rational(b));
    }
}

#[test]
fn two_product_is_error_free() {
    let splitter = bounds().splitter;
    let mut rng = StdRng::seed_from_u64(0x5eed_e002);
    for _ in 0..10_000 {
        let a = narrow_rand(&mut rng);
        let b = narrow_rand(&mut rng);
        let (product, err) = two_product(a, b, splitter);
        assert_eq!(
            rational(product) + rational(err),
            rational(a) * rational(b)
        );
    }
}

#[test]
fn fast_expansion_sum_preserves_exact_value() {
    let mut rng = StdRng::seed_from_u64(0x5eed_e003);
    for _ in 0..2_000 {
        let e = rand_product_expansion(&mut rng);
        let f = rand_product_expansion(&mut rng);
        let mut h = [0.0; 4];
        let hlen = fast_expansion_sum_zeroelim(&e, &f, &mut h);
        assert!(hlen >= 1 && hlen <= 4);
        assert_eq!(rational_sum(&h[..hlen]), rational_sum(&e) + rational_sum(&f));
    }
}

#[test]
fn scale_expansion_preserves_exact_value() {
    let splitter = bounds().splitter;
    let mut rng = StdRng::seed_from_u64(0x5eed_e004);
    for _ in 0..2_000 {
        let e = rand_product_expansion(&mut rng);
        let b = narrow_rand(&mut rng);
        let mut h = [0.0; 4];
        let hlen = scale_expansion_zeroelim(&e, b, splitter, &mut h);
        assert!(hlen >= 1 && hlen <= 4);
        assert_eq!(rational_sum(&h[..hlen]), rational_sum(&e) * rational(b));
    }
}

#[test]
fn compress_preserves_exact_value() {
    let mut rng = StdRng::seed_from_u64(0x5eed_e005);
    for _ in 0..2_000 {
        let e = rand_product_expansion(&mut rng);
        let f = rand_product_expansion(&mut rng);
        let mut h = [0.0; 4];
        let hlen = fast_expansion_sum_zeroelim(&e, &f, &mut h);
        let mut compressed = [0.0; 4];
        let clen = compress(&h[..hlen], &mut compressed);
        assert!(clen <= hlen);
        assert_eq!(rational_sum(&compressed[..clen]), rational_sum(&h[..hlen]));
    }
}

#[test]
fn estimate_tracks_exact_value() {
    let mut rng = StdRng::seed_from_u64(0x5eed_e006);
    let tolerance = rational(1.0e-12);
    for _ in 0..2_000 {
        let e = rand_product_expansion(&mut rng);
        let f = rand_product_expansion(&mut rng);
        let mut h = [0.0; 4];
        let hlen = fast_expansion_sum_zeroelim(&e, &f, &mut h);
        let truth = rational_sum(&h[..hlen]);
        let approx = rational(estimate(&h[..hlen]));
        assert!((approx - &truth).abs() <= truth.abs() * &tolerance);
    }
}

#[test]
fn expansion_type_matches_rational_arithmetic() {
    let mut rng = StdRng::seed_from_u64(0x5eed_e007);
    for _ in 0..500 {
        let a = narrow_rand(&mut rng);
        let b = narrow_rand(&mut rng);
        let c = narrow_rand(&mut rng);
        let d = narrow_rand(&mut rng);

        let product = &Expansion::from_diff(a, b) * &Expansion::from_diff(c, d);
        let expected = (rational(a) - rational(b)) * (rational(c) - rational(d));
        assert_eq!(rational_sum(product.components()), expected);

        let sum = &Expansion::from_float(a) + &Expansion::from_diff(c, d);
        let expected = rational(a) + rational(c) - rational(d);
        assert_eq!(rational_sum(sum.components()), expected);
    }
}

#[test]
fn calibration_constants_match_ieee_double() {
    let b = bounds();
    assert_eq!(b.splitter, 134217729.0);
    assert_eq!(b.epsilon, 0.5 * f64::EPSILON);
    assert!(b.resulterrbound > 0.0);
    assert!(b.ccwerrbound_a > b.ccwerrbound_b);
    assert!(b.isperrbound_a > b.o3derrbound_a);
}
