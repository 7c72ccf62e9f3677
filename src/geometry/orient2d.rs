//! Orientation of three points in the plane.
//!
//! The sign of the determinant
//!
//! ```text
//! | ax - cx  ay - cy |
//! | bx - cx  by - cy |
//! ```
//!
//! is positive when `a`, `b`, `c` wind counterclockwise, negative when they
//! wind clockwise, and zero when they are collinear.

use crate::bounds::{bounds, ensure_self_check};
use crate::eft::{two_diff_tail, two_product, two_two_diff};
use crate::exact::Expansion;
use crate::expansion::{estimate, fast_expansion_sum_zeroelim};
use crate::{Coord, Float};

/// Plain floating-point orientation test. Roughly correct unless the points
/// are nearly collinear, in which case the sign may be wrong.
pub fn orient2d_fast(pa: &Coord, pb: &Coord, pc: &Coord) -> Float {
    let acx = pa.x - pc.x;
    let bcx = pb.x - pc.x;
    let acy = pa.y - pc.y;
    let bcy = pb.y - pc.y;
    acx * bcy - acy * bcx
}

/// Adaptive orientation test; the recommended entry point.
///
/// Exact sign for all finite inputs, at floating-point speed away from
/// degeneracy. The returned magnitude is only meaningful in the fast tier;
/// callers should rely on the sign alone.
pub fn orient2d(pa: &Coord, pb: &Coord, pc: &Coord) -> Float {
    ensure_self_check();
    orient2d_adaptive(pa, pb, pc)
}

pub(crate) fn orient2d_adaptive(pa: &Coord, pb: &Coord, pc: &Coord) -> Float {
    let detleft = (pa.x - pc.x) * (pb.y - pc.y);
    let detright = (pa.y - pc.y) * (pb.x - pc.x);
    let det = detleft - detright;

    let detsum = if detleft > 0.0 {
        if detright <= 0.0 {
            return det;
        }
        detleft + detright
    } else if detleft < 0.0 {
        if detright >= 0.0 {
            return det;
        }
        -detleft - detright
    } else {
        return det;
    };

    let errbound = bounds().ccwerrbound_a * detsum;
    if det >= errbound || -det >= errbound {
        return det;
    }
    orient2d_adapt(pa, pb, pc, detsum)
}

/// The escalation ladder, entered with the fast determinant uncertified.
fn orient2d_adapt(pa: &Coord, pb: &Coord, pc: &Coord, detsum: Float) -> Float {
    let b = bounds();

    let acx = pa.x - pc.x;
    let bcx = pb.x - pc.x;
    let acy = pa.y - pc.y;
    let bcy = pb.y - pc.y;

    let (detleft, detlefttail) = two_product(acx, bcy, b.splitter);
    let (detright, detrighttail) = two_product(acy, bcx, b.splitter);

    let (b3, b2, b1, b0) = two_two_diff(detleft, detlefttail, detright, detrighttail);
    let bexp = [b0, b1, b2, b3];

    let mut det = estimate(&bexp);
    let errbound = b.ccwerrbound_b * detsum;
    if det >= errbound || -det >= errbound {
        return det;
    }

    let acxtail = two_diff_tail(pa.x, pc.x, acx);
    let bcxtail = two_diff_tail(pb.x, pc.x, bcx);
    let acytail = two_diff_tail(pa.y, pc.y, acy);
    let bcytail = two_diff_tail(pb.y, pc.y, bcy);

    if acxtail == 0.0 && acytail == 0.0 && bcxtail == 0.0 && bcytail == 0.0 {
        return det;
    }

    let errbound = b.ccwerrbound_c * detsum + b.resulterrbound * det.abs();
    det += (acx * bcytail + bcy * acxtail) - (acy * bcxtail + bcx * acytail);
    if det >= errbound || -det >= errbound {
        return det;
    }

    let (s1, s0) = two_product(acxtail, bcy, b.splitter);
    let (t1, t0) = two_product(acytail, bcx, b.splitter);
    let (u3, u2, u1, u0) = two_two_diff(s1, s0, t1, t0);
    let u = [u0, u1, u2, u3];

    let mut c1 = [0.0; 8];
    let c1length = fast_expansion_sum_zeroelim(&bexp, &u, &mut c1);

    let (s1, s0) = two_product(acx, bcytail, b.splitter);
    let (t1, t0) = two_product(acy, bcxtail, b.splitter);
    let (u3, u2, u1, u0) = two_two_diff(s1, s0, t1, t0);
    let u = [u0, u1, u2, u3];

    let mut c2 = [0.0; 12];
    let c2length = fast_expansion_sum_zeroelim(&c1[..c1length], &u, &mut c2);

    let (s1, s0) = two_product(acxtail, bcytail, b.splitter);
    let (t1, t0) = two_product(acytail, bcxtail, b.splitter);
    let (u3, u2, u1, u0) = two_two_diff(s1, s0, t1, t0);
    let u = [u0, u1, u2, u3];

    let mut d = [0.0; 16];
    let dlength = fast_expansion_sum_zeroelim(&c2[..c2length], &u, &mut d);
    d[dlength - 1]
}

/// Exact orientation test over the original coordinates, with no initial
/// translation. Always correct, always slow; kept for cross-validation.
pub fn orient2d_exact(pa: &Coord, pb: &Coord, pc: &Coord) -> Float {
    let splitter = bounds().splitter;

    let (axby1, axby0) = two_product(pa.x, pb.y, splitter);
    let (axcy1, axcy0) = two_product(pa.x, pc.y, splitter);
    let (a3, a2, a1, a0) = two_two_diff(axby1, axby0, axcy1, axcy0);
    let aterms = [a0, a1, a2, a3];

    let (bxcy1, bxcy0) = two_product(pb.x, pc.y, splitter);
    let (bxay1, bxay0) = two_product(pb.x, pa.y, splitter);
    let (b3, b2, b1, b0) = two_two_diff(bxcy1, bxcy0, bxay1, bxay0);
    let bterms = [b0, b1, b2, b3];

    let (cxay1, cxay0) = two_product(pc.x, pa.y, splitter);
    let (cxby1, cxby0) = two_product(pc.x, pb.y, splitter);
    let (c3, c2, c1, c0) = two_two_diff(cxay1, cxay0, cxby1, cxby0);
    let cterms = [c0, c1, c2, c3];

    let mut v = [0.0; 8];
    let vlength = fast_expansion_sum_zeroelim(&aterms, &bterms, &mut v);
    let mut w = [0.0; 12];
    let wlength = fast_expansion_sum_zeroelim(&v[..vlength], &cterms, &mut w);
    w[wlength - 1]
}

/// Exact orientation test through the [`Expansion`] value type. A second,
/// independently structured exact formulation used to cross-validate
/// [`orient2d_exact`].
pub fn orient2d_slow(pa: &Coord, pb: &Coord, pc: &Coord) -> Float {
    let acx = Expansion::from_diff(pa.x, pc.x);
    let acy = Expansion::from_diff(pa.y, pc.y);
    let bcx = Expansion::from_diff(pb.x, pc.x);
    let bcy = Expansion::from_diff(pb.y, pc.y);

    let det = &(&acx * &bcy) - &(&acy * &bcx);
    det.most_significant()
}
