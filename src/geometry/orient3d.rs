//! Orientation of four points in space.
//!
//! Positive when `d` lies below the plane through `a`, `b`, `c`, where
//! "below" means `a`, `b`, `c` wind counterclockwise when viewed from
//! above the plane. Negative above, zero when the four points are coplanar.

use crate::bounds::{bounds, ensure_self_check};
use crate::eft::{two_diff_tail, two_one_product, two_product, two_two_diff};
use crate::exact::Expansion;
use crate::expansion::{estimate, fast_expansion_sum_zeroelim, scale_expansion_zeroelim};
use crate::{Coord3, Float};

/// Plain floating-point orientation test. The sign may be wrong when the
/// points are nearly coplanar.
pub fn orient3d_fast(pa: &Coord3, pb: &Coord3, pc: &Coord3, pd: &Coord3) -> Float {
    let adx = pa.x - pd.x;
    let bdx = pb.x - pd.x;
    let cdx = pc.x - pd.x;
    let ady = pa.y - pd.y;
    let bdy = pb.y - pd.y;
    let cdy = pc.y - pd.y;
    let adz = pa.z - pd.z;
    let bdz = pb.z - pd.z;
    let cdz = pc.z - pd.z;

    adz * (bdx * cdy - cdx * bdy) + bdz * (cdx * ady - adx * cdy)
        + cdz * (adx * bdy - bdx * ady)
}

/// Adaptive orientation test; the recommended entry point.
pub fn orient3d(pa: &Coord3, pb: &Coord3, pc: &Coord3, pd: &Coord3) -> Float {
    ensure_self_check();

    let adx = pa.x - pd.x;
    let bdx = pb.x - pd.x;
    let cdx = pc.x - pd.x;
    let ady = pa.y - pd.y;
    let bdy = pb.y - pd.y;
    let cdy = pc.y - pd.y;
    let adz = pa.z - pd.z;
    let bdz = pb.z - pd.z;
    let cdz = pc.z - pd.z;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;

    let det =
        adz * (bdxcdy - cdxbdy) + bdz * (cdxady - adxcdy) + cdz * (adxbdy - bdxady);

    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * adz.abs()
        + (cdxady.abs() + adxcdy.abs()) * bdz.abs()
        + (adxbdy.abs() + bdxady.abs()) * cdz.abs();
    let errbound = bounds().o3derrbound_a * permanent;
    if det > errbound || -det > errbound {
        return det;
    }
    orient3d_adapt(pa, pb, pc, pd, permanent)
}

#[allow(clippy::too_many_lines)]
fn orient3d_adapt(pa: &Coord3, pb: &Coord3, pc: &Coord3, pd: &Coord3, permanent: Float) -> Float {
    let bnds = bounds();
    let splitter = bnds.splitter;

    let adx = pa.x - pd.x;
    let bdx = pb.x - pd.x;
    let cdx = pc.x - pd.x;
    let ady = pa.y - pd.y;
    let bdy = pb.y - pd.y;
    let cdy = pc.y - pd.y;
    let adz = pa.z - pd.z;
    let bdz = pb.z - pd.z;
    let cdz = pc.z - pd.z;

    let (bdxcdy1, bdxcdy0) = two_product(bdx, cdy, splitter);
    let (cdxbdy1, cdxbdy0) = two_product(cdx, bdy, splitter);
    let (bc3, bc2, bc1, bc0) = two_two_diff(bdxcdy1, bdxcdy0, cdxbdy1, cdxbdy0);
    let bc = [bc0, bc1, bc2, bc3];
    let mut adet = [0.0; 8];
    let alen = scale_expansion_zeroelim(&bc, adz, splitter, &mut adet);

    let (cdxady1, cdxady0) = two_product(cdx, ady, splitter);
    let (adxcdy1, adxcdy0) = two_product(adx, cdy, splitter);
    let (ca3, ca2, ca1, ca0) = two_two_diff(cdxady1, cdxady0, adxcdy1, adxcdy0);
    let ca = [ca0, ca1, ca2, ca3];
    let mut bdet = [0.0; 8];
    let blen = scale_expansion_zeroelim(&ca, bdz, splitter, &mut bdet);

    let (adxbdy1, adxbdy0) = two_product(adx, bdy, splitter);
    let (bdxady1, bdxady0) = two_product(bdx, ady, splitter);
    let (ab3, ab2, ab1, ab0) = two_two_diff(adxbdy1, adxbdy0, bdxady1, bdxady0);
    let ab = [ab0, ab1, ab2, ab3];
    let mut cdet = [0.0; 8];
    let clen = scale_expansion_zeroelim(&ab, cdz, splitter, &mut cdet);

    let mut abdet = [0.0; 16];
    let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
    let mut fin1 = [0.0; 192];
    let mut fin2 = [0.0; 192];
    let mut finlength = fast_expansion_sum_zeroelim(&abdet[..ablen], &cdet[..clen], &mut fin1);

    let mut det = estimate(&fin1[..finlength]);
    let errbound = bnds.o3derrbound_b * permanent;
    if det >= errbound || -det >= errbound {
        return det;
    }

    let adxtail = two_diff_tail(pa.x, pd.x, adx);
    let bdxtail = two_diff_tail(pb.x, pd.x, bdx);
    let cdxtail = two_diff_tail(pc.x, pd.x, cdx);
    let adytail = two_diff_tail(pa.y, pd.y, ady);
    let bdytail = two_diff_tail(pb.y, pd.y, bdy);
    let cdytail = two_diff_tail(pc.y, pd.y, cdy);
    let adztail = two_diff_tail(pa.z, pd.z, adz);
    let bdztail = two_diff_tail(pb.z, pd.z, bdz);
    let cdztail = two_diff_tail(pc.z, pd.z, cdz);

    if adxtail == 0.0
        && bdxtail == 0.0
        && cdxtail == 0.0
        && adytail == 0.0
        && bdytail == 0.0
        && cdytail == 0.0
        && adztail == 0.0
        && bdztail == 0.0
        && cdztail == 0.0
    {
        return det;
    }

    let errbound = bnds.o3derrbound_c * permanent + bnds.resulterrbound * det.abs();
    det += (adz * ((bdx * cdytail + cdy * bdxtail) - (bdy * cdxtail + cdx * bdytail))
        + adztail * (bdx * cdy - bdy * cdx))
        + (bdz * ((cdx * adytail + ady * cdxtail) - (cdy * adxtail + adx * cdytail))
            + bdztail * (cdx * ady - cdy * adx))
        + (cdz * ((adx * bdytail + bdy * adxtail) - (ady * bdxtail + bdx * adytail))
            + cdztail * (adx * bdy - ady * bdx));
    if det >= errbound || -det >= errbound {
        return det;
    }

    let mut finnow: &mut [Float; 192] = &mut fin1;
    let mut finother: &mut [Float; 192] = &mut fin2;

    let mut at_b = [0.0; 4];
    let mut at_c = [0.0; 4];
    let at_blen;
    let at_clen;
    if adxtail == 0.0 {
        if adytail == 0.0 {
            at_b[0] = 0.0;
            at_blen = 1;
            at_c[0] = 0.0;
            at_clen = 1;
        } else {
            let (at_blarge, at_b0) = two_product(-adytail, bdx, splitter);
            at_b[0] = at_b0;
            at_b[1] = at_blarge;
            at_blen = 2;
            let (at_clarge, at_c0) = two_product(adytail, cdx, splitter);
            at_c[0] = at_c0;
            at_c[1] = at_clarge;
            at_clen = 2;
        }
    } else if adytail == 0.0 {
        let (at_blarge, at_b0) = two_product(adxtail, bdy, splitter);
        at_b[0] = at_b0;
        at_b[1] = at_blarge;
        at_blen = 2;
        let (at_clarge, at_c0) = two_product(-adxtail, cdy, splitter);
        at_c[0] = at_c0;
        at_c[1] = at_clarge;
        at_clen = 2;
    } else {
        let (adxt_bdy1, adxt_bdy0) = two_product(adxtail, bdy, splitter);
        let (adyt_bdx1, adyt_bdx0) = two_product(adytail, bdx, splitter);
        let (b3, b2, b1, b0) = two_two_diff(adxt_bdy1, adxt_bdy0, adyt_bdx1, adyt_bdx0);
        at_b = [b0, b1, b2, b3];
        at_blen = 4;
        let (adyt_cdx1, adyt_cdx0) = two_product(adytail, cdx, splitter);
        let (adxt_cdy1, adxt_cdy0) = two_product(adxtail, cdy, splitter);
        let (c3, c2, c1, c0) = two_two_diff(adyt_cdx1, adyt_cdx0, adxt_cdy1, adxt_cdy0);
        at_c = [c0, c1, c2, c3];
        at_clen = 4;
    }

    let mut bt_c = [0.0; 4];
    let mut bt_a = [0.0; 4];
    let bt_clen;
    let bt_alen;
    if bdxtail == 0.0 {
        if bdytail == 0.0 {
            bt_c[0] = 0.0;
            bt_clen = 1;
            bt_a[0] = 0.0;
            bt_alen = 1;
        } else {
            let (bt_clarge, bt_c0) = two_product(-bdytail, cdx, splitter);
            bt_c[0] = bt_c0;
            bt_c[1] = bt_clarge;
            bt_clen = 2;
            let (bt_alarge, bt_a0) = two_product(bdytail, adx, splitter);
            bt_a[0] = bt_a0;
            bt_a[1] = bt_alarge;
            bt_alen = 2;
        }
    } else if bdytail == 0.0 {
        let (bt_clarge, bt_c0) = two_product(bdxtail, cdy, splitter);
        bt_c[0] = bt_c0;
        bt_c[1] = bt_clarge;
        bt_clen = 2;
        let (bt_alarge, bt_a0) = two_product(-bdxtail, ady, splitter);
        bt_a[0] = bt_a0;
        bt_a[1] = bt_alarge;
        bt_alen = 2;
    } else {
        let (bdxt_cdy1, bdxt_cdy0) = two_product(bdxtail, cdy, splitter);
        let (bdyt_cdx1, bdyt_cdx0) = two_product(bdytail, cdx, splitter);
        let (c3, c2, c1, c0) = two_two_diff(bdxt_cdy1, bdxt_cdy0, bdyt_cdx1, bdyt_cdx0);
        bt_c = [c0, c1, c2, c3];
        bt_clen = 4;
        let (bdyt_adx1, bdyt_adx0) = two_product(bdytail, adx, splitter);
        let (bdxt_ady1, bdxt_ady0) = two_product(bdxtail, ady, splitter);
        let (a3, a2, a1, a0) = two_two_diff(bdyt_adx1, bdyt_adx0, bdxt_ady1, bdxt_ady0);
        bt_a = [a0, a1, a2, a3];
        bt_alen = 4;
    }

    let mut ct_a = [0.0; 4];
    let mut ct_b = [0.0; 4];
    let ct_alen;
    let ct_blen;
    if cdxtail == 0.0 {
        if cdytail == 0.0 {
            ct_a[0] = 0.0;
            ct_alen = 1;
            ct_b[0] = 0.0;
            ct_blen = 1;
        } else {
            let (ct_alarge, ct_a0) = two_product(-cdytail, adx, splitter);
            ct_a[0] = ct_a0;
            ct_a[1] = ct_alarge;
            ct_alen = 2;
            let (ct_blarge, ct_b0) = two_product(cdytail, bdx, splitter);
            ct_b[0] = ct_b0;
            ct_b[1] = ct_blarge;
            ct_blen = 2;
        }
    } else if cdytail == 0.0 {
        let (ct_alarge, ct_a0) = two_product(cdxtail, ady, splitter);
        ct_a[0] = ct_a0;
        ct_a[1] = ct_alarge;
        ct_alen = 2;
        let (ct_blarge, ct_b0) = two_product(-cdxtail, bdy, splitter);
        ct_b[0] = ct_b0;
        ct_b[1] = ct_blarge;
        ct_blen = 2;
    } else {
        let (cdxt_ady1, cdxt_ady0) = two_product(cdxtail, ady, splitter);
        let (cdyt_adx1, cdyt_adx0) = two_product(cdytail, adx, splitter);
        let (a3, a2, a1, a0) = two_two_diff(cdxt_ady1, cdxt_ady0, cdyt_adx1, cdyt_adx0);
        ct_a = [a0, a1, a2, a3];
        ct_alen = 4;
        let (cdyt_bdx1, cdyt_bdx0) = two_product(cdytail, bdx, splitter);
        let (cdxt_bdy1, cdxt_bdy0) = two_product(cdxtail, bdy, splitter);
        let (b3, b2, b1, b0) = two_two_diff(cdyt_bdx1, cdyt_bdx0, cdxt_bdy1, cdxt_bdy0);
        ct_b = [b0, b1, b2, b3];
        ct_blen = 4;
    }

    let mut bct = [0.0; 8];
    let mut cat = [0.0; 8];
    let mut abt = [0.0; 8];
    let mut v = [0.0; 12];
    let mut w = [0.0; 16];

    let bctlen = fast_expansion_sum_zeroelim(&bt_c[..bt_clen], &ct_b[..ct_blen], &mut bct);
    let wlength = scale_expansion_zeroelim(&bct[..bctlen], adz, splitter, &mut w);
    finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], finother);
    std::mem::swap(&mut finnow, &mut finother);

    let catlen = fast_expansion_sum_zeroelim(&ct_a[..ct_alen], &at_c[..at_clen], &mut cat);
    let wlength = scale_expansion_zeroelim(&cat[..catlen], bdz, splitter, &mut w);
    finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], finother);
    std::mem::swap(&mut finnow, &mut finother);

    let abtlen = fast_expansion_sum_zeroelim(&at_b[..at_blen], &bt_a[..bt_alen], &mut abt);
    let wlength = scale_expansion_zeroelim(&abt[..abtlen], cdz, splitter, &mut w);
    finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], finother);
    std::mem::swap(&mut finnow, &mut finother);

    if adztail != 0.0 {
        let vlength = scale_expansion_zeroelim(&bc, adztail, splitter, &mut v);
        finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &v[..vlength], finother);
        std::mem::swap(&mut finnow, &mut finother);
    }
    if bdztail != 0.0 {
        let vlength = scale_expansion_zeroelim(&ca, bdztail, splitter, &mut v);
        finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &v[..vlength], finother);
        std::mem::swap(&mut finnow, &mut finother);
    }
    if cdztail != 0.0 {
        let vlength = scale_expansion_zeroelim(&ab, cdztail, splitter, &mut v);
        finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &v[..vlength], finother);
        std::mem::swap(&mut finnow, &mut finother);
    }

    if adxtail != 0.0 {
        if bdytail != 0.0 {
            let (adxt_bdyt1, adxt_bdyt0) = two_product(adxtail, bdytail, splitter);
            let (u3, u2, u1, u0) = two_one_product(adxt_bdyt1, adxt_bdyt0, cdz, splitter);
            let u = [u0, u1, u2, u3];
            finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
            std::mem::swap(&mut finnow, &mut finother);
            if cdztail != 0.0 {
                let (u3, u2, u1, u0) = two_one_product(adxt_bdyt1, adxt_bdyt0, cdztail, splitter);
                let u = [u0, u1, u2, u3];
                finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
                std::mem::swap(&mut finnow, &mut finother);
            }
        }
        if cdytail != 0.0 {
            let (adxt_cdyt1, adxt_cdyt0) = two_product(-adxtail, cdytail, splitter);
            let (u3, u2, u1, u0) = two_one_product(adxt_cdyt1, adxt_cdyt0, bdz, splitter);
            let u = [u0, u1, u2, u3];
            finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
            std::mem::swap(&mut finnow, &mut finother);
            if bdztail != 0.0 {
                let (u3, u2, u1, u0) = two_one_product(adxt_cdyt1, adxt_cdyt0, bdztail, splitter);
                let u = [u0, u1, u2, u3];
                finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
                std::mem::swap(&mut finnow, &mut finother);
            }
        }
    }
    if bdxtail != 0.0 {
        if cdytail != 0.0 {
            let (bdxt_cdyt1, bdxt_cdyt0) = two_product(bdxtail, cdytail, splitter);
            let (u3, u2, u1, u0) = two_one_product(bdxt_cdyt1, bdxt_cdyt0, adz, splitter);
            let u = [u0, u1, u2, u3];
            finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
            std::mem::swap(&mut finnow, &mut finother);
            if adztail != 0.0 {
                let (u3, u2, u1, u0) = two_one_product(bdxt_cdyt1, bdxt_cdyt0, adztail, splitter);
                let u = [u0, u1, u2, u3];
                finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
                std::mem::swap(&mut finnow, &mut finother);
            }
        }
        if adytail != 0.0 {
            let (bdxt_adyt1, bdxt_adyt0) = two_product(-bdxtail, adytail, splitter);
            let (u3, u2, u1, u0) = two_one_product(bdxt_adyt1, bdxt_adyt0, cdz, splitter);
            let u = [u0, u1, u2, u3];
            finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
            std::mem::swap(&mut finnow, &mut finother);
            if cdztail != 0.0 {
                let (u3, u2, u1, u0) = two_one_product(bdxt_adyt1, bdxt_adyt0, cdztail, splitter);
                let u = [u0, u1, u2, u3];
                finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
                std::mem::swap(&mut finnow, &mut finother);
            }
        }
    }
    if cdxtail != 0.0 {
        if adytail != 0.0 {
            let (cdxt_adyt1, cdxt_adyt0) = two_product(cdxtail, adytail, splitter);
            let (u3, u2, u1, u0) = two_one_product(cdxt_adyt1, cdxt_adyt0, bdz, splitter);
            let u = [u0, u1, u2, u3];
            finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
            std::mem::swap(&mut finnow, &mut finother);
            if bdztail != 0.0 {
                let (u3, u2, u1, u0) = two_one_product(cdxt_adyt1, cdxt_adyt0, bdztail, splitter);
                let u = [u0, u1, u2, u3];
                finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
                std::mem::swap(&mut finnow, &mut finother);
            }
        }
        if bdytail != 0.0 {
            let (cdxt_bdyt1, cdxt_bdyt0) = two_product(-cdxtail, bdytail, splitter);
            let (u3, u2, u1, u0) = two_one_product(cdxt_bdyt1, cdxt_bdyt0, adz, splitter);
            let u = [u0, u1, u2, u3];
            finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
            std::mem::swap(&mut finnow, &mut finother);
            if adztail != 0.0 {
                let (u3, u2, u1, u0) = two_one_product(cdxt_bdyt1, cdxt_bdyt0, adztail, splitter);
                let u = [u0, u1, u2, u3];
                finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &u, finother);
                std::mem::swap(&mut finnow, &mut finother);
            }
        }
    }

    if adztail != 0.0 {
        let wlength = scale_expansion_zeroelim(&bct[..bctlen], adztail, splitter, &mut w);
        finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], finother);
        std::mem::swap(&mut finnow, &mut finother);
    }
    if bdztail != 0.0 {
        let wlength = scale_expansion_zeroelim(&cat[..catlen], bdztail, splitter, &mut w);
        finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], finother);
        std::mem::swap(&mut finnow, &mut finother);
    }
    if cdztail != 0.0 {
        let wlength = scale_expansion_zeroelim(&abt[..abtlen], cdztail, splitter, &mut w);
        finlength = fast_expansion_sum_zeroelim(&finnow[..finlength], &w[..wlength], finother);
        std::mem::swap(&mut finnow, &mut finother);
    }

    finnow[finlength - 1]
}

/// Exact orientation test over the original coordinates. Always correct,
/// always slow; kept for cross-validation.
pub fn orient3d_exact(pa: &Coord3, pb: &Coord3, pc: &Coord3, pd: &Coord3) -> Float {
    let splitter = bounds().splitter;

    let (axby1, axby0) = two_product(pa.x, pb.y, splitter);
    let (bxay1, bxay0) = two_product(pb.x, pa.y, splitter);
    let (ab3, ab2, ab1, ab0) = two_two_diff(axby1, axby0, bxay1, bxay0);
    let ab = [ab0, ab1, ab2, ab3];

    let (bxcy1, bxcy0) = two_product(pb.x, pc.y, splitter);
    let (cxby1, cxby0) = two_product(pc.x, pb.y, splitter);
    let (bc3, bc2, bc1, bc0) = two_two_diff(bxcy1, bxcy0, cxby1, cxby0);
    let bc = [bc0, bc1, bc2, bc3];

    let (cxdy1, cxdy0) = two_product(pc.x, pd.y, splitter);
    let (dxcy1, dxcy0) = two_product(pd.x, pc.y, splitter);
    let (cd3, cd2, cd1, cd0) = two_two_diff(cxdy1, cxdy0, dxcy1, dxcy0);
    let cd = [cd0, cd1, cd2, cd3];

    let (dxay1, dxay0) = two_product(pd.x, pa.y, splitter);
    let (axdy1, axdy0) = two_product(pa.x, pd.y, splitter);
    let (da3, da2, da1, da0) = two_two_diff(dxay1, dxay0, axdy1, axdy0);
    let da = [da0, da1, da2, da3];

    let (axcy1, axcy0) = two_product(pa.x, pc.y, splitter);
    let (cxay1, cxay0) = two_product(pc.x, pa.y, splitter);
    let (ac3, ac2, ac1, ac0) = two_two_diff(axcy1, axcy0, cxay1, cxay0);
    let mut ac = [ac0, ac1, ac2, ac3];

    let (bxdy1, bxdy0) = two_product(pb.x, pd.y, splitter);
    let (dxby1, dxby0) = two_product(pd.x, pb.y, splitter);
    let (bd3, bd2, bd1, bd0) = two_two_diff(bxdy1, bxdy0, dxby1, dxby0);
    let mut bd = [bd0, bd1, bd2, bd3];

    let mut temp8 = [0.0; 8];
    let mut cda = [0.0; 12];
    let mut dab = [0.0; 12];
    let mut abc = [0.0; 12];
    let mut bcd = [0.0; 12];

    let templen = fast_expansion_sum_zeroelim(&cd, &da, &mut temp8);
    let cdalen = fast_expansion_sum_zeroelim(&temp8[..templen], &ac, &mut cda);
    let templen = fast_expansion_sum_zeroelim(&da, &ab, &mut temp8);
    let dablen = fast_expansion_sum_zeroelim(&temp8[..templen], &bd, &mut dab);
    for i in 0..4 {
        bd[i] = -bd[i];
        ac[i] = -ac[i];
    }
    let templen = fast_expansion_sum_zeroelim(&ab, &bc, &mut temp8);
    let abclen = fast_expansion_sum_zeroelim(&temp8[..templen], &ac, &mut abc);
    let templen = fast_expansion_sum_zeroelim(&bc, &cd, &mut temp8);
    let bcdlen = fast_expansion_sum_zeroelim(&temp8[..templen], &bd, &mut bcd);

    let mut adet = [0.0; 24];
    let alen = scale_expansion_zeroelim(&bcd[..bcdlen], pa.z, splitter, &mut adet);
    let mut bdet = [0.0; 24];
    let blen = scale_expansion_zeroelim(&cda[..cdalen], -pb.z, splitter, &mut bdet);
    let mut cdet = [0.0; 24];
    let clen = scale_expansion_zeroelim(&dab[..dablen], pc.z, splitter, &mut cdet);
    let mut ddet = [0.0; 24];
    let dlen = scale_expansion_zeroelim(&abc[..abclen], -pd.z, splitter, &mut ddet);

    let mut abdet = [0.0; 48];
    let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
    let mut cddet = [0.0; 48];
    let cdlen = fast_expansion_sum_zeroelim(&cdet[..clen], &ddet[..dlen], &mut cddet);
    let mut deter = [0.0; 96];
    let deterlen = fast_expansion_sum_zeroelim(&abdet[..ablen], &cddet[..cdlen], &mut deter);
    deter[deterlen - 1]
}

/// Exact orientation test through the [`Expansion`] value type.
/// Cross-validates [`orient3d_exact`].
pub fn orient3d_slow(pa: &Coord3, pb: &Coord3, pc: &Coord3, pd: &Coord3) -> Float {
    let adx = Expansion::from_diff(pa.x, pd.x);
    let bdx = Expansion::from_diff(pb.x, pd.x);
    let cdx = Expansion::from_diff(pc.x, pd.x);
    let ady = Expansion::from_diff(pa.y, pd.y);
    let bdy = Expansion::from_diff(pb.y, pd.y);
    let cdy = Expansion::from_diff(pc.y, pd.y);
    let adz = Expansion::from_diff(pa.z, pd.z);
    let bdz = Expansion::from_diff(pb.z, pd.z);
    let cdz = Expansion::from_diff(pc.z, pd.z);

    let bc = &(&bdx * &cdy) - &(&cdx * &bdy);
    let ca = &(&cdx * &ady) - &(&adx * &cdy);
    let ab = &(&adx * &bdy) - &(&bdx * &ady);

    let det = &(&(&adz * &bc) + &(&bdz * &ca)) + &(&cdz * &ab);
    det.most_significant()
}
