//! Expansion arithmetic over caller-provided storage.
//!
//! An expansion is an ordered sequence of [`Float`]s whose exact sum is the
//! represented real value. Nonzero components are pairwise nonoverlapping,
//! and the operations that require it assume strictly increasing magnitude
//! order. Every operation here takes input slices of their logical length,
//! writes into a caller-supplied output slice sized for the worst case, and
//! returns the logical length written; the exact sum of the output always
//! equals the exact sum of all inputs.
//!
//! [`fast_expansion_sum_zeroelim`] and [`scale_expansion_zeroelim`] are the
//! two workhorses used by the adaptive predicates; the remaining variants are
//! kept for completeness of the arithmetic layer.

use crate::eft::{
    fast_two_sum, split, two_product_presplit, two_sum,
};
use crate::Float;

/// Appends the single component `b` to expansion `e` by rippling a
/// [`two_sum`] through every component. Writes exactly `e.len() + 1`
/// components, zeros included.
pub fn grow_expansion(e: &[Float], b: Float, h: &mut [Float]) -> usize {
    let mut q = b;
    for (hh, &enow) in h.iter_mut().zip(e.iter()) {
        let (qnew, err) = two_sum(q, enow);
        *hh = err;
        q = qnew;
    }
    h[e.len()] = q;
    e.len() + 1
}

/// [`grow_expansion`] with zero components dropped. The output length is at
/// least 1: a zero-valued result is represented as the single component `0.0`.
pub fn grow_expansion_zeroelim(e: &[Float], b: Float, h: &mut [Float]) -> usize {
    let mut hindex = 0;
    let mut q = b;
    for &enow in e {
        let (qnew, err) = two_sum(q, enow);
        q = qnew;
        if err != 0.0 {
            h[hindex] = err;
            hindex += 1;
        }
    }
    if q != 0.0 || hindex == 0 {
        h[hindex] = q;
        hindex += 1;
    }
    hindex
}

/// Sums two expansions by repeatedly growing `e` with each component of `f`.
/// Works for arbitrary term order at O(len(e) * len(f)) cost. Writes exactly
/// `e.len() + f.len()` components.
pub fn expansion_sum(e: &[Float], f: &[Float], h: &mut [Float]) -> usize {
    let mut q = f[0];
    for hindex in 0..e.len() {
        let (qnew, err) = two_sum(q, e[hindex]);
        h[hindex] = err;
        q = qnew;
    }
    h[e.len()] = q;
    let mut hlast = e.len();

    for findex in 1..f.len() {
        let mut q = f[findex];
        for hindex in findex..=hlast {
            let (qnew, err) = two_sum(q, h[hindex]);
            h[hindex] = err;
            q = qnew;
        }
        hlast += 1;
        h[hlast] = q;
    }
    hlast + 1
}

/// [`expansion_sum`] followed by in-place elimination of zero components.
/// The output length is at least 1.
pub fn expansion_sum_zeroelim(e: &[Float], f: &[Float], h: &mut [Float]) -> usize {
    let hlen = expansion_sum(e, f, h);
    let mut hindex = 0;
    for index in 0..hlen {
        let hnow = h[index];
        if hnow != 0.0 {
            h[hindex] = hnow;
            hindex += 1;
        }
    }
    if hindex == 0 {
        h[0] = 0.0;
        hindex = 1;
    }
    hindex
}

/// Merges two expansions in a single O(len(e) + len(f)) pass.
///
/// Both inputs must be strongly nonoverlapping and in increasing magnitude
/// order; the comparison `(fnow > enow) == (fnow > -enow)` selects the
/// smaller-magnitude head without branching on signs. Writes exactly
/// `e.len() + f.len()` components, zeros included.
pub fn fast_expansion_sum(e: &[Float], f: &[Float], h: &mut [Float]) -> usize {
    let mut enow = e[0];
    let mut fnow = f[0];
    let mut eindex = 0;
    let mut findex = 0;

    let mut q = if (fnow > enow) == (fnow > -enow) {
        eindex += 1;
        enow
    } else {
        findex += 1;
        fnow
    };

    let mut hindex = 0;
    if eindex < e.len() && findex < f.len() {
        enow = e[eindex];
        fnow = f[findex];
        let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
            eindex += 1;
            fast_two_sum(enow, q)
        } else {
            findex += 1;
            fast_two_sum(fnow, q)
        };
        q = qnew;
        h[hindex] = hh;
        hindex += 1;

        while eindex < e.len() && findex < f.len() {
            enow = e[eindex];
            fnow = f[findex];
            let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
                eindex += 1;
                two_sum(q, enow)
            } else {
                findex += 1;
                two_sum(q, fnow)
            };
            q = qnew;
            h[hindex] = hh;
            hindex += 1;
        }
    }

    while eindex < e.len() {
        let (qnew, hh) = two_sum(q, e[eindex]);
        q = qnew;
        eindex += 1;
        h[hindex] = hh;
        hindex += 1;
    }
    while findex < f.len() {
        let (qnew, hh) = two_sum(q, f[findex]);
        q = qnew;
        findex += 1;
        h[hindex] = hh;
        hindex += 1;
    }
    h[hindex] = q;
    hindex + 1
}

/// [`fast_expansion_sum`] with zero components dropped; the variant every
/// adaptive predicate uses. Either input may be empty. The output length is
/// at least 1 when any input component exists.
pub fn fast_expansion_sum_zeroelim(e: &[Float], f: &[Float], h: &mut [Float]) -> usize {
    if e.is_empty() {
        h[..f.len()].copy_from_slice(f);
        return f.len();
    }
    if f.is_empty() {
        h[..e.len()].copy_from_slice(e);
        return e.len();
    }

    let mut enow = e[0];
    let mut fnow = f[0];
    let mut eindex = 0;
    let mut findex = 0;

    let mut q = if (fnow > enow) == (fnow > -enow) {
        eindex += 1;
        enow
    } else {
        findex += 1;
        fnow
    };

    let mut hindex = 0;
    if eindex < e.len() && findex < f.len() {
        enow = e[eindex];
        fnow = f[findex];
        let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
            eindex += 1;
            fast_two_sum(enow, q)
        } else {
            findex += 1;
            fast_two_sum(fnow, q)
        };
        q = qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }

        while eindex < e.len() && findex < f.len() {
            enow = e[eindex];
            fnow = f[findex];
            let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
                eindex += 1;
                two_sum(q, enow)
            } else {
                findex += 1;
                two_sum(q, fnow)
            };
            q = qnew;
            if hh != 0.0 {
                h[hindex] = hh;
                hindex += 1;
            }
        }
    }

    while eindex < e.len() {
        let (qnew, hh) = two_sum(q, e[eindex]);
        q = qnew;
        eindex += 1;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }
    while findex < f.len() {
        let (qnew, hh) = two_sum(q, f[findex]);
        q = qnew;
        findex += 1;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }
    if q != 0.0 || hindex == 0 {
        h[hindex] = q;
        hindex += 1;
    }
    hindex
}

/// Sums two expansions with a relaxed ordering requirement (nonoverlapping,
/// but only weakly ordered). Costlier than [`fast_expansion_sum`]; not used
/// on any predicate path, kept for completeness. Writes exactly
/// `e.len() + f.len()` components.
pub fn linear_expansion_sum(e: &[Float], f: &[Float], h: &mut [Float]) -> usize {
    let mut enow = e[0];
    let mut fnow = f[0];
    let mut eindex = 0;
    let mut findex = 0;

    let g0;
    if (fnow > enow) == (fnow > -enow) {
        g0 = enow;
        eindex += 1;
        if eindex < e.len() {
            enow = e[eindex];
        }
    } else {
        g0 = fnow;
        findex += 1;
        if findex < f.len() {
            fnow = f[findex];
        }
    }

    let (mut capq, mut q);
    if eindex < e.len() && (findex >= f.len() || (fnow > enow) == (fnow > -enow)) {
        let (qnew, small) = fast_two_sum(enow, g0);
        capq = qnew;
        q = small;
        eindex += 1;
        if eindex < e.len() {
            enow = e[eindex];
        }
    } else {
        let (qnew, small) = fast_two_sum(fnow, g0);
        capq = qnew;
        q = small;
        findex += 1;
        if findex < f.len() {
            fnow = f[findex];
        }
    }

    for hh in h.iter_mut().take(e.len() + f.len() - 2) {
        let (r, out);
        if eindex < e.len() && (findex >= f.len() || (fnow > enow) == (fnow > -enow)) {
            let (rnew, small) = fast_two_sum(enow, q);
            r = rnew;
            out = small;
            eindex += 1;
            if eindex < e.len() {
                enow = e[eindex];
            }
        } else {
            let (rnew, small) = fast_two_sum(fnow, q);
            r = rnew;
            out = small;
            findex += 1;
            if findex < f.len() {
                fnow = f[findex];
            }
        }
        *hh = out;
        let (qnew, small) = two_sum(capq, r);
        capq = qnew;
        q = small;
    }
    h[e.len() + f.len() - 2] = q;
    h[e.len() + f.len() - 1] = capq;
    e.len() + f.len()
}

/// [`linear_expansion_sum`] with zero components dropped. The output length
/// is at least 1.
pub fn linear_expansion_sum_zeroelim(e: &[Float], f: &[Float], h: &mut [Float]) -> usize {
    let mut enow = e[0];
    let mut fnow = f[0];
    let mut eindex = 0;
    let mut findex = 0;
    let mut hindex = 0;

    let g0;
    if (fnow > enow) == (fnow > -enow) {
        g0 = enow;
        eindex += 1;
        if eindex < e.len() {
            enow = e[eindex];
        }
    } else {
        g0 = fnow;
        findex += 1;
        if findex < f.len() {
            fnow = f[findex];
        }
    }

    let (mut capq, mut q);
    if eindex < e.len() && (findex >= f.len() || (fnow > enow) == (fnow > -enow)) {
        let (qnew, small) = fast_two_sum(enow, g0);
        capq = qnew;
        q = small;
        eindex += 1;
        if eindex < e.len() {
            enow = e[eindex];
        }
    } else {
        let (qnew, small) = fast_two_sum(fnow, g0);
        capq = qnew;
        q = small;
        findex += 1;
        if findex < f.len() {
            fnow = f[findex];
        }
    }

    for _ in 0..e.len() + f.len() - 2 {
        let (r, hh);
        if eindex < e.len() && (findex >= f.len() || (fnow > enow) == (fnow > -enow)) {
            let (rnew, small) = fast_two_sum(enow, q);
            r = rnew;
            hh = small;
            eindex += 1;
            if eindex < e.len() {
                enow = e[eindex];
            }
        } else {
            let (rnew, small) = fast_two_sum(fnow, q);
            r = rnew;
            hh = small;
            findex += 1;
            if findex < f.len() {
                fnow = f[findex];
            }
        }
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
        let (qnew, small) = two_sum(capq, r);
        capq = qnew;
        q = small;
    }
    if q != 0.0 {
        h[hindex] = q;
        hindex += 1;
    }
    if capq != 0.0 || hindex == 0 {
        h[hindex] = capq;
        hindex += 1;
    }
    hindex
}

/// Multiplies every component of `e` by the scalar `b`, propagating the
/// product errors. Zero components are dropped; the output holds at most
/// `2 * e.len()` components and at least 1.
pub fn scale_expansion_zeroelim(e: &[Float], b: Float, splitter: Float, h: &mut [Float]) -> usize {
    let (bhi, blo) = split(b, splitter);
    let (mut q, hh) = two_product_presplit(e[0], b, bhi, blo, splitter);
    let mut hindex = 0;
    if hh != 0.0 {
        h[hindex] = hh;
        hindex += 1;
    }
    for &enow in &e[1..] {
        let (product1, product0) = two_product_presplit(enow, b, bhi, blo, splitter);
        let (sum, hh) = two_sum(q, product0);
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
        let (qnew, hh) = fast_two_sum(product1, sum);
        q = qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }
    if q != 0.0 || hindex == 0 {
        h[hindex] = q;
        hindex += 1;
    }
    hindex
}

/// Compresses `e` into a minimal-length nonoverlapping form of equal value.
///
/// Two carry-propagation passes: top-down, then bottom-up. Not used by the
/// adaptive predicates; kept for completeness. `h` must hold `e.len()`
/// components; the returned length is at most that and at least 1.
pub fn compress(e: &[Float], h: &mut [Float]) -> usize {
    let bottom = e.len() - 1;
    let mut q = e[bottom];
    let mut boundary = bottom;
    for eindex in (0..bottom).rev() {
        let (qnew, small) = fast_two_sum(q, e[eindex]);
        if small != 0.0 {
            h[boundary] = qnew;
            boundary -= 1;
            q = small;
        } else {
            q = qnew;
        }
    }
    let mut top = 0;
    for hindex in boundary + 1..e.len() {
        let (qnew, small) = fast_two_sum(h[hindex], q);
        if small != 0.0 {
            h[top] = small;
            top += 1;
        }
        q = qnew;
    }
    h[top] = q;
    top + 1
}

/// Sums the components of `e` in order, giving a [`Float`] approximation of
/// the expansion's value. Only good enough to compare against an error
/// bound; never a substitute for the exact value.
pub fn estimate(e: &[Float]) -> Float {
    let mut q = e[0];
    for &enow in &e[1..] {
        q += enow;
    }
    q
}
