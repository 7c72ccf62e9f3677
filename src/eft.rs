//! Error-free transformations.
//!
//! Each function here recovers the exact rounding error of one native
//! floating-point operation as a second [`Float`], so that for example
//! `two_sum(a, b) == (x, y)` satisfies `a + b == x + y` exactly, with `x`
//! the correctly rounded sum. The predicates and the expansion layer are
//! built entirely from these identities; no wider intermediate type is used.
//!
//! [`split`], [`two_product`] and [`square`] take Dekker's splitter
//! explicitly. It is calibrated once at startup (see [`crate::bounds`])
//! rather than hard-coded, so the same code serves any [`Float`] width.

use crate::Float;

/// Adds `a` and `b`, returning `(sum, err)` with `a + b == sum + err` exactly.
#[inline(always)]
pub fn two_sum(a: Float, b: Float) -> (Float, Float) {
    let x = a + b;
    (x, two_sum_tail(a, b, x))
}

/// Recovers the rounding error of `x = a + b`.
#[inline(always)]
pub fn two_sum_tail(a: Float, b: Float, x: Float) -> Float {
    let bvirt = x - a;
    let avirt = x - bvirt;
    let bround = b - bvirt;
    let around = a - avirt;
    around + bround
}

/// Cheaper [`two_sum`] requiring `|a| >= |b|` (or `a == 0`).
#[inline(always)]
pub fn fast_two_sum(a: Float, b: Float) -> (Float, Float) {
    let x = a + b;
    (x, fast_two_sum_tail(a, b, x))
}

/// Recovers the rounding error of `x = a + b` when `|a| >= |b|`.
#[inline(always)]
pub fn fast_two_sum_tail(a: Float, b: Float, x: Float) -> Float {
    let bvirt = x - a;
    b - bvirt
}

/// Subtracts `b` from `a`, returning `(diff, err)` with `a - b == diff + err`
/// exactly.
#[inline(always)]
pub fn two_diff(a: Float, b: Float) -> (Float, Float) {
    let x = a - b;
    (x, two_diff_tail(a, b, x))
}

/// Recovers the rounding error of `x = a - b`.
#[inline(always)]
pub fn two_diff_tail(a: Float, b: Float, x: Float) -> Float {
    let bvirt = a - x;
    let avirt = x + bvirt;
    let bround = bvirt - b;
    let around = a - avirt;
    around + bround
}

/// Dekker's split: `a == hi + lo` exactly, where `hi` carries the upper half
/// of the mantissa and `lo` the rest, each short enough to multiply without
/// rounding.
#[inline(always)]
pub fn split(a: Float, splitter: Float) -> (Float, Float) {
    let c = splitter * a;
    let abig = c - a;
    let hi = c - abig;
    let lo = a - hi;
    (hi, lo)
}

/// Multiplies `a` and `b`, returning `(product, err)` with
/// `a * b == product + err` exactly.
#[inline(always)]
pub fn two_product(a: Float, b: Float, splitter: Float) -> (Float, Float) {
    let x = a * b;
    (x, two_product_tail(a, b, x, splitter))
}

/// Recovers the rounding error of `x = a * b`.
#[inline(always)]
pub fn two_product_tail(a: Float, b: Float, x: Float, splitter: Float) -> Float {
    let (ahi, alo) = split(a, splitter);
    let (bhi, blo) = split(b, splitter);
    let err1 = x - ahi * bhi;
    let err2 = err1 - alo * bhi;
    let err3 = err2 - ahi * blo;
    alo * blo - err3
}

/// [`two_product`] where `b` has already been split into `(bhi, blo)`.
///
/// Used by [`crate::expansion::scale_expansion_zeroelim`], which multiplies a
/// whole expansion by one scalar and splits that scalar only once.
#[inline(always)]
pub fn two_product_presplit(
    a: Float,
    b: Float,
    bhi: Float,
    blo: Float,
    splitter: Float,
) -> (Float, Float) {
    let x = a * b;
    let (ahi, alo) = split(a, splitter);
    let err1 = x - ahi * bhi;
    let err2 = err1 - alo * bhi;
    let err3 = err2 - ahi * blo;
    let y = alo * blo - err3;
    (x, y)
}

/// Squares `a`, returning `(square, err)` with `a * a == square + err`
/// exactly. Saves one split over [`two_product`].
#[inline(always)]
pub fn square(a: Float, splitter: Float) -> (Float, Float) {
    let x = a * a;
    (x, square_tail(a, x, splitter))
}

/// Recovers the rounding error of `x = a * a`.
#[inline(always)]
pub fn square_tail(a: Float, x: Float, splitter: Float) -> Float {
    let (ahi, alo) = split(a, splitter);
    let err1 = x - ahi * ahi;
    let err3 = err1 - (ahi + ahi) * alo;
    alo * alo - err3
}

/// Adds the scalar `b` to the two-component expansion `(a1, a0)`, producing
/// the three-component expansion `(x2, x1, x0)`.
#[inline(always)]
pub fn two_one_sum(a1: Float, a0: Float, b: Float) -> (Float, Float, Float) {
    let (i, x0) = two_sum(a0, b);
    let (x2, x1) = two_sum(a1, i);
    (x2, x1, x0)
}

/// Adds the two-component expansions `(a1, a0)` and `(b1, b0)`, producing the
/// four-component expansion `(x3, x2, x1, x0)`.
#[inline(always)]
pub fn two_two_sum(a1: Float, a0: Float, b1: Float, b0: Float) -> (Float, Float, Float, Float) {
    let (j, r0, x0) = two_one_sum(a1, a0, b0);
    let (x3, x2, x1) = two_one_sum(j, r0, b1);
    (x3, x2, x1, x0)
}

/// Subtracts the scalar `b` from the two-component expansion `(a1, a0)`.
#[inline(always)]
pub fn two_one_diff(a1: Float, a0: Float, b: Float) -> (Float, Float, Float) {
    let (i, x0) = two_diff(a0, b);
    let (x2, x1) = two_sum(a1, i);
    (x2, x1, x0)
}

/// Subtracts the two-component expansion `(b1, b0)` from `(a1, a0)`,
/// producing the four-component expansion `(x3, x2, x1, x0)`.
#[inline(always)]
pub fn two_two_diff(a1: Float, a0: Float, b1: Float, b0: Float) -> (Float, Float, Float, Float) {
    let (j, r0, x0) = two_one_diff(a1, a0, b0);
    let (x3, x2, x1) = two_one_diff(j, r0, b1);
    (x3, x2, x1, x0)
}

/// Multiplies the two-component expansion `(a1, a0)` by the scalar `b`,
/// producing the four-component expansion `(x3, x2, x1, x0)`.
#[inline(always)]
pub fn two_one_product(
    a1: Float,
    a0: Float,
    b: Float,
    splitter: Float,
) -> (Float, Float, Float, Float) {
    let (bhi, blo) = split(b, splitter);
    let (i, x0) = two_product_presplit(a0, b, bhi, blo, splitter);
    let (j, r0) = two_product_presplit(a1, b, bhi, blo, splitter);
    let (k, x1) = two_sum(i, r0);
    let (x3, x2) = fast_two_sum(j, k);
    (x3, x2, x1, x0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::bounds;

    #[test]
    fn two_sum_recovers_lost_bits() {
        let (sum, err) = two_sum(1.0e16, 1.0);
        assert_eq!(sum, 1.0e16);
        assert_eq!(err, 1.0);
    }

    #[test]
    fn two_diff_recovers_lost_bits() {
        let (diff, err) = two_diff(1.0e16, 1.0);
        assert_eq!(diff, 1.0e16);
        assert_eq!(err, -1.0);
    }

    #[test]
    fn fast_two_sum_matches_two_sum_when_ordered() {
        let a = 3.5e10;
        let b = -1.25e-3;
        assert_eq!(fast_two_sum(a, b), two_sum(a, b));
    }

    #[test]
    fn split_halves_recombine_exactly() {
        let splitter = bounds().splitter;
        for &a in &[1.0, -1.0 / 3.0, 1.234567890123456e8, 3.0e-200] {
            let (hi, lo) = split(a, splitter);
            assert_eq!(hi + lo, a);
        }
    }

    #[test]
    fn two_product_is_error_free() {
        let splitter = bounds().splitter;
        let a = 1.0 + 2f64.powi(-30);
        let b = 1.0 - 2f64.powi(-30);
        let (p, e) = two_product(a, b, splitter);
        // a * b = 1 - 2^-60 exactly; the product rounds to 1.
        assert_eq!(p, 1.0);
        assert_eq!(e, -(2f64.powi(-60)));
    }

    #[test]
    fn square_matches_two_product() {
        let splitter = bounds().splitter;
        let a = 1.0 / 3.0;
        assert_eq!(square(a, splitter), two_product(a, a, splitter));
    }

    #[test]
    fn two_one_product_sums_to_product() {
        let splitter = bounds().splitter;
        let (a1, a0) = two_product(1.0 / 3.0, 3.0, splitter);
        let (x3, x2, x1, x0) = two_one_product(a1, a0, 7.0, splitter);
        let approx = x0 + x1 + x2 + x3;
        assert!((approx - (1.0 / 3.0) * 3.0 * 7.0).abs() < 1.0e-15);
    }
}
