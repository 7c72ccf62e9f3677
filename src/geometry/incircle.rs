//! The incircle test: does `d` lie inside the circle through `a`, `b`, `c`?
//!
//! Positive when `d` is strictly inside, negative outside, zero on the
//! circle. The sign convention assumes `a`, `b`, `c` in counterclockwise
//! order; a clockwise triangle flips the sign.

use crate::bounds::{bounds, ensure_self_check, PredicateBounds};
use crate::eft::{square, two_diff, two_diff_tail, two_product, two_two_diff, two_two_sum};
use crate::exact::Expansion;
use crate::expansion::{estimate, fast_expansion_sum_zeroelim, scale_expansion_zeroelim};
use crate::{Coord, Float};

/// Plain floating-point incircle test. The sign may be wrong when `d` is
/// near the circle.
pub fn incircle_fast(pa: &Coord, pb: &Coord, pc: &Coord, pd: &Coord) -> Float {
    let adx = pa.x - pd.x;
    let bdx = pb.x - pd.x;
    let cdx = pc.x - pd.x;
    let ady = pa.y - pd.y;
    let bdy = pb.y - pd.y;
    let cdy = pc.y - pd.y;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    alift * (bdx * cdy - cdx * bdy) + blift * (cdx * ady - adx * cdy)
        + clift * (adx * bdy - bdx * ady)
}

/// Adaptive incircle test; the recommended entry point.
pub fn incircle(pa: &Coord, pb: &Coord, pc: &Coord, pd: &Coord) -> Float {
    ensure_self_check();

    let adx = pa.x - pd.x;
    let bdx = pb.x - pd.x;
    let cdx = pc.x - pd.x;
    let ady = pa.y - pd.y;
    let bdy = pb.y - pd.y;
    let cdy = pc.y - pd.y;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let alift = adx * adx + ady * ady;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let blift = bdx * bdx + bdy * bdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;
    let clift = cdx * cdx + cdy * cdy;

    let det =
        alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);

    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;
    let errbound = bounds().iccerrbound_a * permanent;
    if det > errbound || -det > errbound {
        return det;
    }
    incircle_adapt(pa, pb, pc, pd, permanent)
}

#[allow(clippy::too_many_lines)]
fn incircle_adapt(pa: &Coord, pb: &Coord, pc: &Coord, pd: &Coord, permanent: Float) -> Float {
    let bnds: &PredicateBounds = bounds();
    let splitter = bnds.splitter;

    let mut temp8 = [0.0; 8];
    let mut temp16a = [0.0; 16];
    let mut temp16b = [0.0; 16];
    let mut temp16c = [0.0; 16];
    let mut temp32a = [0.0; 32];
    let mut temp32b = [0.0; 32];
    let mut temp48 = [0.0; 48];
    let mut temp64 = [0.0; 64];

    let adx = pa.x - pd.x;
    let bdx = pb.x - pd.x;
    let cdx = pc.x - pd.x;
    let ady = pa.y - pd.y;
    let bdy = pb.y - pd.y;
    let cdy = pc.y - pd.y;

    let (bdxcdy1, bdxcdy0) = two_product(bdx, cdy, splitter);
    let (cdxbdy1, cdxbdy0) = two_product(cdx, bdy, splitter);
    let (bc3, bc2, bc1, bc0) = two_two_diff(bdxcdy1, bdxcdy0, cdxbdy1, cdxbdy0);
    let bc = [bc0, bc1, bc2, bc3];

    let mut axbc = [0.0; 8];
    let axbclen = scale_expansion_zeroelim(&bc, adx, splitter, &mut axbc);
    let mut axxbc = [0.0; 16];
    let axxbclen = scale_expansion_zeroelim(&axbc[..axbclen], adx, splitter, &mut axxbc);
    let mut aybc = [0.0; 8];
    let aybclen = scale_expansion_zeroelim(&bc, ady, splitter, &mut aybc);
    let mut ayybc = [0.0; 16];
    let ayybclen = scale_expansion_zeroelim(&aybc[..aybclen], ady, splitter, &mut ayybc);
    let mut adet = [0.0; 32];
    let alen = fast_expansion_sum_zeroelim(&axxbc[..axxbclen], &ayybc[..ayybclen], &mut adet);

    let (cdxady1, cdxady0) = two_product(cdx, ady, splitter);
    let (adxcdy1, adxcdy0) = two_product(adx, cdy, splitter);
    let (ca3, ca2, ca1, ca0) = two_two_diff(cdxady1, cdxady0, adxcdy1, adxcdy0);
    let ca = [ca0, ca1, ca2, ca3];

    let mut bxca = [0.0; 8];
    let bxcalen = scale_expansion_zeroelim(&ca, bdx, splitter, &mut bxca);
    let mut bxxca = [0.0; 16];
    let bxxcalen = scale_expansion_zeroelim(&bxca[..bxcalen], bdx, splitter, &mut bxxca);
    let mut byca = [0.0; 8];
    let bycalen = scale_expansion_zeroelim(&ca, bdy, splitter, &mut byca);
    let mut byyca = [0.0; 16];
    let byycalen = scale_expansion_zeroelim(&byca[..bycalen], bdy, splitter, &mut byyca);
    let mut bdet = [0.0; 32];
    let blen = fast_expansion_sum_zeroelim(&bxxca[..bxxcalen], &byyca[..byycalen], &mut bdet);

    let (adxbdy1, adxbdy0) = two_product(adx, bdy, splitter);
    let (bdxady1, bdxady0) = two_product(bdx, ady, splitter);
    let (ab3, ab2, ab1, ab0) = two_two_diff(adxbdy1, adxbdy0, bdxady1, bdxady0);
    let ab = [ab0, ab1, ab2, ab3];

    let mut cxab = [0.0; 8];
    let cxablen = scale_expansion_zeroelim(&ab, cdx, splitter, &mut cxab);
    let mut cxxab = [0.0; 16];
    let cxxablen = scale_expansion_zeroelim(&cxab[..cxablen], cdx, splitter, &mut cxxab);
    let mut cyab = [0.0; 8];
    let cyablen = scale_expansion_zeroelim(&ab, cdy, splitter, &mut cyab);
    let mut cyyab = [0.0; 16];
    let cyyablen = scale_expansion_zeroelim(&cyab[..cyablen], cdy, splitter, &mut cyyab);
    let mut cdet = [0.0; 32];
    let clen = fast_expansion_sum_zeroelim(&cxxab[..cxxablen], &cyyab[..cyyablen], &mut cdet);

    let mut abdet = [0.0; 64];
    let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
    let mut fin1 = [0.0; 1152];
    let mut finlength = fast_expansion_sum_zeroelim(&abdet[..ablen], &cdet[..clen], &mut fin1);

    let mut det = estimate(&fin1[..finlength]);
    let errbound = bnds.iccerrbound_b * permanent;
    if det >= errbound || -det >= errbound {
        return det;
    }

    let adxtail = two_diff_tail(pa.x, pd.x, adx);
    let adytail = two_diff_tail(pa.y, pd.y, ady);
    let bdxtail = two_diff_tail(pb.x, pd.x, bdx);
    let bdytail = two_diff_tail(pb.y, pd.y, bdy);
    let cdxtail = two_diff_tail(pc.x, pd.x, cdx);
    let cdytail = two_diff_tail(pc.y, pd.y, cdy);
    if adxtail == 0.0
        && bdxtail == 0.0
        && cdxtail == 0.0
        && adytail == 0.0
        && bdytail == 0.0
        && cdytail == 0.0
    {
        return det;
    }

    let errbound = bnds.iccerrbound_c * permanent + bnds.resulterrbound * det.abs();
    det += ((adx * adx + ady * ady)
        * ((bdx * cdytail + cdy * bdxtail) - (bdy * cdxtail + cdx * bdytail))
        + 2.0 * (adx * adxtail + ady * adytail) * (bdx * cdy - bdy * cdx))
        + ((bdx * bdx + bdy * bdy)
            * ((cdx * adytail + ady * cdxtail) - (cdy * adxtail + adx * cdytail))
            + 2.0 * (bdx * bdxtail + bdy * bdytail) * (cdx * ady - cdy * adx))
        + ((cdx * cdx + cdy * cdy)
            * ((adx * bdytail + bdy * adxtail) - (ady * bdxtail + bdx * adytail))
            + 2.0 * (cdx * cdxtail + cdy * cdytail) * (adx * bdy - ady * bdx));
    if det >= errbound || -det >= errbound {
        return det;
    }

    let mut fin2 = [0.0; 1152];

    let mut aa = [0.0; 4];
    if bdxtail != 0.0 || bdytail != 0.0 || cdxtail != 0.0 || cdytail != 0.0 {
        let (adxadx1, adxadx0) = square(adx, splitter);
        let (adyady1, adyady0) = square(ady, splitter);
        let (aa3, aa2, aa1, aa0) = two_two_sum(adxadx1, adxadx0, adyady1, adyady0);
        aa = [aa0, aa1, aa2, aa3];
    }

    let mut bb = [0.0; 4];
    if cdxtail != 0.0 || cdytail != 0.0 || adxtail != 0.0 || adytail != 0.0 {
        let (bdxbdx1, bdxbdx0) = square(bdx, splitter);
        let (bdybdy1, bdybdy0) = square(bdy, splitter);
        let (bb3, bb2, bb1, bb0) = two_two_sum(bdxbdx1, bdxbdx0, bdybdy1, bdybdy0);
        bb = [bb0, bb1, bb2, bb3];
    }

    let mut cc = [0.0; 4];
    if adxtail != 0.0 || adytail != 0.0 || bdxtail != 0.0 || bdytail != 0.0 {
        let (cdxcdx1, cdxcdx0) = square(cdx, splitter);
        let (cdycdy1, cdycdy0) = square(cdy, splitter);
        let (cc3, cc2, cc1, cc0) = two_two_sum(cdxcdx1, cdxcdx0, cdycdy1, cdycdy0);
        cc = [cc0, cc1, cc2, cc3];
    }

    let mut axtbclen = 9;
    let mut axtbc = [0.0; 8];
    if adxtail != 0.0 {
        axtbclen = scale_expansion_zeroelim(&bc, adxtail, splitter, &mut axtbc);
        let temp16alen =
            scale_expansion_zeroelim(&axtbc[..axtbclen], 2.0 * adx, splitter, &mut temp16a);

        let mut axtcc = [0.0; 8];
        let axtcclen = scale_expansion_zeroelim(&cc, adxtail, splitter, &mut axtcc);
        let temp16blen = scale_expansion_zeroelim(&axtcc[..axtcclen], bdy, splitter, &mut temp16b);

        let mut axtbb = [0.0; 8];
        let axtbblen = scale_expansion_zeroelim(&bb, adxtail, splitter, &mut axtbb);
        let temp16clen = scale_expansion_zeroelim(&axtbb[..axtbblen], -cdy, splitter, &mut temp16c);

        let temp32alen =
            fast_expansion_sum_zeroelim(&temp16a[..temp16alen], &temp16b[..temp16blen], &mut temp32a);
        let temp48len =
            fast_expansion_sum_zeroelim(&temp16c[..temp16clen], &temp32a[..temp32alen], &mut temp48);
        finlength = fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
        std::mem::swap(&mut fin1, &mut fin2);
    }

    let mut aytbclen = 9;
    let mut aytbc = [0.0; 8];
    if adytail != 0.0 {
        aytbclen = scale_expansion_zeroelim(&bc, adytail, splitter, &mut aytbc);
        let temp16alen =
            scale_expansion_zeroelim(&aytbc[..aytbclen], 2.0 * ady, splitter, &mut temp16a);

        let mut aytcc = [0.0; 8];
        let aytcclen = scale_expansion_zeroelim(&cc, adytail, splitter, &mut aytcc);
        let temp16blen = scale_expansion_zeroelim(&aytcc[..aytcclen], cdx, splitter, &mut temp16b);

        let mut aytbb = [0.0; 8];
        let aytbblen = scale_expansion_zeroelim(&bb, adytail, splitter, &mut aytbb);
        let temp16clen = scale_expansion_zeroelim(&aytbb[..aytbblen], -bdx, splitter, &mut temp16c);

        let temp32alen =
            fast_expansion_sum_zeroelim(&temp16a[..temp16alen], &temp16b[..temp16blen], &mut temp32a);
        let temp48len =
            fast_expansion_sum_zeroelim(&temp16c[..temp16clen], &temp32a[..temp32alen], &mut temp48);
        finlength = fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
        std::mem::swap(&mut fin1, &mut fin2);
    }

    let mut bxtcalen = 9;
    let mut bxtca = [0.0; 8];
    if bdxtail != 0.0 {
        bxtcalen = scale_expansion_zeroelim(&ca, bdxtail, splitter, &mut bxtca);
        let temp16alen =
            scale_expansion_zeroelim(&bxtca[..bxtcalen], 2.0 * bdx, splitter, &mut temp16a);

        let mut bxtaa = [0.0; 8];
        let bxtaalen = scale_expansion_zeroelim(&aa, bdxtail, splitter, &mut bxtaa);
        let temp16blen = scale_expansion_zeroelim(&bxtaa[..bxtaalen], cdy, splitter, &mut temp16b);

        let mut bxtcc = [0.0; 8];
        let bxtcclen = scale_expansion_zeroelim(&cc, bdxtail, splitter, &mut bxtcc);
        let temp16clen = scale_expansion_zeroelim(&bxtcc[..bxtcclen], -ady, splitter, &mut temp16c);

        let temp32alen =
            fast_expansion_sum_zeroelim(&temp16a[..temp16alen], &temp16b[..temp16blen], &mut temp32a);
        let temp48len =
            fast_expansion_sum_zeroelim(&temp16c[..temp16clen], &temp32a[..temp32alen], &mut temp48);
        finlength = fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
        std::mem::swap(&mut fin1, &mut fin2);
    }

    let mut bytcalen = 9;
    let mut bytca = [0.0; 8];
    if bdytail != 0.0 {
        bytcalen = scale_expansion_zeroelim(&ca, bdytail, splitter, &mut bytca);
        let temp16alen =
            scale_expansion_zeroelim(&bytca[..bytcalen], 2.0 * bdy, splitter, &mut temp16a);

        let mut bytcc = [0.0; 8];
        let bytcclen = scale_expansion_zeroelim(&cc, bdytail, splitter, &mut bytcc);
        let temp16blen = scale_expansion_zeroelim(&bytcc[..bytcclen], adx, splitter, &mut temp16b);

        let mut bytaa = [0.0; 8];
        let bytaalen = scale_expansion_zeroelim(&aa, bdytail, splitter, &mut bytaa);
        let temp16clen = scale_expansion_zeroelim(&bytaa[..bytaalen], -cdx, splitter, &mut temp16c);

        let temp32alen =
            fast_expansion_sum_zeroelim(&temp16a[..temp16alen], &temp16b[..temp16blen], &mut temp32a);
        let temp48len =
            fast_expansion_sum_zeroelim(&temp16c[..temp16clen], &temp32a[..temp32alen], &mut temp48);
        finlength = fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
        std::mem::swap(&mut fin1, &mut fin2);
    }

    let mut cxtablen = 9;
    let mut cxtab = [0.0; 8];
    if cdxtail != 0.0 {
        cxtablen = scale_expansion_zeroelim(&ab, cdxtail, splitter, &mut cxtab);
        let temp16alen =
            scale_expansion_zeroelim(&cxtab[..cxtablen], 2.0 * cdx, splitter, &mut temp16a);

        let mut cxtbb = [0.0; 8];
        let cxtbblen = scale_expansion_zeroelim(&bb, cdxtail, splitter, &mut cxtbb);
        let temp16blen = scale_expansion_zeroelim(&cxtbb[..cxtbblen], ady, splitter, &mut temp16b);

        let mut cxtaa = [0.0; 8];
        let cxtaalen = scale_expansion_zeroelim(&aa, cdxtail, splitter, &mut cxtaa);
        let temp16clen = scale_expansion_zeroelim(&cxtaa[..cxtaalen], -bdy, splitter, &mut temp16c);

        let temp32alen =
            fast_expansion_sum_zeroelim(&temp16a[..temp16alen], &temp16b[..temp16blen], &mut temp32a);
        let temp48len =
            fast_expansion_sum_zeroelim(&temp16c[..temp16clen], &temp32a[..temp32alen], &mut temp48);
        finlength = fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
        std::mem::swap(&mut fin1, &mut fin2);
    }

    let mut cytablen = 9;
    let mut cytab = [0.0; 8];
    if cdytail != 0.0 {
        cytablen = scale_expansion_zeroelim(&ab, cdytail, splitter, &mut cytab);
        let temp16alen =
            scale_expansion_zeroelim(&cytab[..cytablen], 2.0 * cdy, splitter, &mut temp16a);

        let mut cytaa = [0.0; 8];
        let cytaalen = scale_expansion_zeroelim(&aa, cdytail, splitter, &mut cytaa);
        let temp16blen = scale_expansion_zeroelim(&cytaa[..cytaalen], bdx, splitter, &mut temp16b);

        let mut cytbb = [0.0; 8];
        let cytbblen = scale_expansion_zeroelim(&bb, cdytail, splitter, &mut cytbb);
        let temp16clen = scale_expansion_zeroelim(&cytbb[..cytbblen], -adx, splitter, &mut temp16c);

        let temp32alen =
            fast_expansion_sum_zeroelim(&temp16a[..temp16alen], &temp16b[..temp16blen], &mut temp32a);
        let temp48len =
            fast_expansion_sum_zeroelim(&temp16c[..temp16clen], &temp32a[..temp32alen], &mut temp48);
        finlength = fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
        std::mem::swap(&mut fin1, &mut fin2);
    }

    if adxtail != 0.0 || adytail != 0.0 {
        let mut bctt = [0.0; 4];
        let mut bct = [0.0; 8];
        let bcttlen;
        let bctlen;
        if bdxtail != 0.0 || bdytail != 0.0 || cdxtail != 0.0 || cdytail != 0.0 {
            let (ti1, ti0) = two_product(bdxtail, cdy, splitter);
            let (tj1, tj0) = two_product(bdx, cdytail, splitter);
            let (u3, u2, u1, u0) = two_two_sum(ti1, ti0, tj1, tj0);
            let u = [u0, u1, u2, u3];
            let (ti1, ti0) = two_product(cdxtail, -bdy, splitter);
            let (tj1, tj0) = two_product(cdx, -bdytail, splitter);
            let (v3, v2, v1, v0) = two_two_sum(ti1, ti0, tj1, tj0);
            let v = [v0, v1, v2, v3];
            bctlen = fast_expansion_sum_zeroelim(&u, &v, &mut bct);

            let (ti1, ti0) = two_product(bdxtail, cdytail, splitter);
            let (tj1, tj0) = two_product(cdxtail, bdytail, splitter);
            let (bctt3, bctt2, bctt1, bctt0) = two_two_diff(ti1, ti0, tj1, tj0);
            bctt = [bctt0, bctt1, bctt2, bctt3];
            bcttlen = 4;
        } else {
            bct[0] = 0.0;
            bctlen = 1;
            bctt[0] = 0.0;
            bcttlen = 1;
        }

        if adxtail != 0.0 {
            let temp16alen =
                scale_expansion_zeroelim(&axtbc[..axtbclen], adxtail, splitter, &mut temp16a);
            let mut axtbct = [0.0; 16];
            let axtbctlen = scale_expansion_zeroelim(&bct[..bctlen], adxtail, splitter, &mut axtbct);
            let temp32alen =
                scale_expansion_zeroelim(&axtbct[..axtbctlen], 2.0 * adx, splitter, &mut temp32a);
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);

            if bdytail != 0.0 {
                let temp8len = scale_expansion_zeroelim(&cc, adxtail, splitter, &mut temp8);
                let temp16alen =
                    scale_expansion_zeroelim(&temp8[..temp8len], bdytail, splitter, &mut temp16a);
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp16a[..temp16alen],
                    &mut fin2,
                );
                std::mem::swap(&mut fin1, &mut fin2);
            }
            if cdytail != 0.0 {
                let temp8len = scale_expansion_zeroelim(&bb, -adxtail, splitter, &mut temp8);
                let temp16alen =
                    scale_expansion_zeroelim(&temp8[..temp8len], cdytail, splitter, &mut temp16a);
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp16a[..temp16alen],
                    &mut fin2,
                );
                std::mem::swap(&mut fin1, &mut fin2);
            }

            let temp32alen =
                scale_expansion_zeroelim(&axtbct[..axtbctlen], adxtail, splitter, &mut temp32a);
            let mut axtbctt = [0.0; 8];
            let axtbcttlen =
                scale_expansion_zeroelim(&bctt[..bcttlen], adxtail, splitter, &mut axtbctt);
            let temp16alen =
                scale_expansion_zeroelim(&axtbctt[..axtbcttlen], 2.0 * adx, splitter, &mut temp16a);
            let temp16blen =
                scale_expansion_zeroelim(&axtbctt[..axtbcttlen], adxtail, splitter, &mut temp16b);
            let temp32blen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32b,
            );
            let temp64len = fast_expansion_sum_zeroelim(
                &temp32a[..temp32alen],
                &temp32b[..temp32blen],
                &mut temp64,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp64[..temp64len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);
        }

        if adytail != 0.0 {
            let temp16alen =
                scale_expansion_zeroelim(&aytbc[..aytbclen], adytail, splitter, &mut temp16a);
            let mut aytbct = [0.0; 16];
            let aytbctlen = scale_expansion_zeroelim(&bct[..bctlen], adytail, splitter, &mut aytbct);
            let temp32alen =
                scale_expansion_zeroelim(&aytbct[..aytbctlen], 2.0 * ady, splitter, &mut temp32a);
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);

            let temp32alen =
                scale_expansion_zeroelim(&aytbct[..aytbctlen], adytail, splitter, &mut temp32a);
            let mut aytbctt = [0.0; 8];
            let aytbcttlen =
                scale_expansion_zeroelim(&bctt[..bcttlen], adytail, splitter, &mut aytbctt);
            let temp16alen =
                scale_expansion_zeroelim(&aytbctt[..aytbcttlen], 2.0 * ady, splitter, &mut temp16a);
            let temp16blen =
                scale_expansion_zeroelim(&aytbctt[..aytbcttlen], adytail, splitter, &mut temp16b);
            let temp32blen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32b,
            );
            let temp64len = fast_expansion_sum_zeroelim(
                &temp32a[..temp32alen],
                &temp32b[..temp32blen],
                &mut temp64,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp64[..temp64len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);
        }
    }

    if bdxtail != 0.0 || bdytail != 0.0 {
        let mut catt = [0.0; 4];
        let mut cat = [0.0; 8];
        let cattlen;
        let catlen;
        if cdxtail != 0.0 || cdytail != 0.0 || adxtail != 0.0 || adytail != 0.0 {
            let (ti1, ti0) = two_product(cdxtail, ady, splitter);
            let (tj1, tj0) = two_product(cdx, adytail, splitter);
            let (u3, u2, u1, u0) = two_two_sum(ti1, ti0, tj1, tj0);
            let u = [u0, u1, u2, u3];
            let (ti1, ti0) = two_product(adxtail, -cdy, splitter);
            let (tj1, tj0) = two_product(adx, -cdytail, splitter);
            let (v3, v2, v1, v0) = two_two_sum(ti1, ti0, tj1, tj0);
            let v = [v0, v1, v2, v3];
            catlen = fast_expansion_sum_zeroelim(&u, &v, &mut cat);

            let (ti1, ti0) = two_product(cdxtail, adytail, splitter);
            let (tj1, tj0) = two_product(adxtail, cdytail, splitter);
            let (catt3, catt2, catt1, catt0) = two_two_diff(ti1, ti0, tj1, tj0);
            catt = [catt0, catt1, catt2, catt3];
            cattlen = 4;
        } else {
            cat[0] = 0.0;
            catlen = 1;
            catt[0] = 0.0;
            cattlen = 1;
        }

        if bdxtail != 0.0 {
            let temp16alen =
                scale_expansion_zeroelim(&bxtca[..bxtcalen], bdxtail, splitter, &mut temp16a);
            let mut bxtcat = [0.0; 16];
            let bxtcatlen = scale_expansion_zeroelim(&cat[..catlen], bdxtail, splitter, &mut bxtcat);
            let temp32alen =
                scale_expansion_zeroelim(&bxtcat[..bxtcatlen], 2.0 * bdx, splitter, &mut temp32a);
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);

            if cdytail != 0.0 {
                let temp8len = scale_expansion_zeroelim(&aa, bdxtail, splitter, &mut temp8);
                let temp16alen =
                    scale_expansion_zeroelim(&temp8[..temp8len], cdytail, splitter, &mut temp16a);
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp16a[..temp16alen],
                    &mut fin2,
                );
                std::mem::swap(&mut fin1, &mut fin2);
            }
            if adytail != 0.0 {
                let temp8len = scale_expansion_zeroelim(&cc, -bdxtail, splitter, &mut temp8);
                let temp16alen =
                    scale_expansion_zeroelim(&temp8[..temp8len], adytail, splitter, &mut temp16a);
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp16a[..temp16alen],
                    &mut fin2,
                );
                std::mem::swap(&mut fin1, &mut fin2);
            }

            let temp32alen =
                scale_expansion_zeroelim(&bxtcat[..bxtcatlen], bdxtail, splitter, &mut temp32a);
            let mut bxtcatt = [0.0; 8];
            let bxtcattlen =
                scale_expansion_zeroelim(&catt[..cattlen], bdxtail, splitter, &mut bxtcatt);
            let temp16alen =
                scale_expansion_zeroelim(&bxtcatt[..bxtcattlen], 2.0 * bdx, splitter, &mut temp16a);
            let temp16blen =
                scale_expansion_zeroelim(&bxtcatt[..bxtcattlen], bdxtail, splitter, &mut temp16b);
            let temp32blen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32b,
            );
            let temp64len = fast_expansion_sum_zeroelim(
                &temp32a[..temp32alen],
                &temp32b[..temp32blen],
                &mut temp64,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp64[..temp64len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);
        }
        if bdytail != 0.0 {
            let temp16alen =
                scale_expansion_zeroelim(&bytca[..bytcalen], bdytail, splitter, &mut temp16a);
            let mut bytcat = [0.0; 16];
            let bytcatlen = scale_expansion_zeroelim(&cat[..catlen], bdytail, splitter, &mut bytcat);
            let temp32alen =
                scale_expansion_zeroelim(&bytcat[..bytcatlen], 2.0 * bdy, splitter, &mut temp32a);
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);

            let temp32alen =
                scale_expansion_zeroelim(&bytcat[..bytcatlen], bdytail, splitter, &mut temp32a);
            let mut bytcatt = [0.0; 8];
            let bytcattlen =
                scale_expansion_zeroelim(&catt[..cattlen], bdytail, splitter, &mut bytcatt);
            let temp16alen =
                scale_expansion_zeroelim(&bytcatt[..bytcattlen], 2.0 * bdy, splitter, &mut temp16a);
            let temp16blen =
                scale_expansion_zeroelim(&bytcatt[..bytcattlen], bdytail, splitter, &mut temp16b);
            let temp32blen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32b,
            );
            let temp64len = fast_expansion_sum_zeroelim(
                &temp32a[..temp32alen],
                &temp32b[..temp32blen],
                &mut temp64,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp64[..temp64len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);
        }
    }

    if cdxtail != 0.0 || cdytail != 0.0 {
        let mut abtt = [0.0; 4];
        let mut abt = [0.0; 8];
        let abttlen;
        let abtlen;
        if adxtail != 0.0 || adytail != 0.0 || bdxtail != 0.0 || bdytail != 0.0 {
            let (ti1, ti0) = two_product(adxtail, bdy, splitter);
            let (tj1, tj0) = two_product(adx, bdytail, splitter);
            let (u3, u2, u1, u0) = two_two_sum(ti1, ti0, tj1, tj0);
            let u = [u0, u1, u2, u3];
            let (ti1, ti0) = two_product(bdxtail, -ady, splitter);
            let (tj1, tj0) = two_product(bdx, -adytail, splitter);
            let (v3, v2, v1, v0) = two_two_sum(ti1, ti0, tj1, tj0);
            let v = [v0, v1, v2, v3];
            abtlen = fast_expansion_sum_zeroelim(&u, &v, &mut abt);

            let (ti1, ti0) = two_product(adxtail, bdytail, splitter);
            let (tj1, tj0) = two_product(bdxtail, adytail, splitter);
            let (abtt3, abtt2, abtt1, abtt0) = two_two_diff(ti1, ti0, tj1, tj0);
            abtt = [abtt0, abtt1, abtt2, abtt3];
            abttlen = 4;
        } else {
            abt[0] = 0.0;
            abtlen = 1;
            abtt[0] = 0.0;
            abttlen = 1;
        }

        if cdxtail != 0.0 {
            let temp16alen =
                scale_expansion_zeroelim(&cxtab[..cxtablen], cdxtail, splitter, &mut temp16a);
            let mut cxtabt = [0.0; 16];
            let cxtabtlen = scale_expansion_zeroelim(&abt[..abtlen], cdxtail, splitter, &mut cxtabt);
            let temp32alen =
                scale_expansion_zeroelim(&cxtabt[..cxtabtlen], 2.0 * cdx, splitter, &mut temp32a);
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);

            if adytail != 0.0 {
                let temp8len = scale_expansion_zeroelim(&bb, cdxtail, splitter, &mut temp8);
                let temp16alen =
                    scale_expansion_zeroelim(&temp8[..temp8len], adytail, splitter, &mut temp16a);
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp16a[..temp16alen],
                    &mut fin2,
                );
                std::mem::swap(&mut fin1, &mut fin2);
            }
            if bdytail != 0.0 {
                let temp8len = scale_expansion_zeroelim(&aa, -cdxtail, splitter, &mut temp8);
                let temp16alen =
                    scale_expansion_zeroelim(&temp8[..temp8len], bdytail, splitter, &mut temp16a);
                finlength = fast_expansion_sum_zeroelim(
                    &fin1[..finlength],
                    &temp16a[..temp16alen],
                    &mut fin2,
                );
                std::mem::swap(&mut fin1, &mut fin2);
            }

            let temp32alen =
                scale_expansion_zeroelim(&cxtabt[..cxtabtlen], cdxtail, splitter, &mut temp32a);
            let mut cxtabtt = [0.0; 8];
            let cxtabttlen =
                scale_expansion_zeroelim(&abtt[..abttlen], cdxtail, splitter, &mut cxtabtt);
            let temp16alen =
                scale_expansion_zeroelim(&cxtabtt[..cxtabttlen], 2.0 * cdx, splitter, &mut temp16a);
            let temp16blen =
                scale_expansion_zeroelim(&cxtabtt[..cxtabttlen], cdxtail, splitter, &mut temp16b);
            let temp32blen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32b,
            );
            let temp64len = fast_expansion_sum_zeroelim(
                &temp32a[..temp32alen],
                &temp32b[..temp32blen],
                &mut temp64,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp64[..temp64len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);
        }
        if cdytail != 0.0 {
            let temp16alen =
                scale_expansion_zeroelim(&cytab[..cytablen], cdytail, splitter, &mut temp16a);
            let mut cytabt = [0.0; 16];
            let cytabtlen = scale_expansion_zeroelim(&abt[..abtlen], cdytail, splitter, &mut cytabt);
            let temp32alen =
                scale_expansion_zeroelim(&cytabt[..cytabtlen], 2.0 * cdy, splitter, &mut temp32a);
            let temp48len = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp32a[..temp32alen],
                &mut temp48,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp48[..temp48len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);

            let temp32alen =
                scale_expansion_zeroelim(&cytabt[..cytabtlen], cdytail, splitter, &mut temp32a);
            let mut cytabtt = [0.0; 8];
            let cytabttlen =
                scale_expansion_zeroelim(&abtt[..abttlen], cdytail, splitter, &mut cytabtt);
            let temp16alen =
                scale_expansion_zeroelim(&cytabtt[..cytabttlen], 2.0 * cdy, splitter, &mut temp16a);
            let temp16blen =
                scale_expansion_zeroelim(&cytabtt[..cytabttlen], cdytail, splitter, &mut temp16b);
            let temp32blen = fast_expansion_sum_zeroelim(
                &temp16a[..temp16alen],
                &temp16b[..temp16blen],
                &mut temp32b,
            );
            let temp64len = fast_expansion_sum_zeroelim(
                &temp32a[..temp32alen],
                &temp32b[..temp32blen],
                &mut temp64,
            );
            finlength =
                fast_expansion_sum_zeroelim(&fin1[..finlength], &temp64[..temp64len], &mut fin2);
            std::mem::swap(&mut fin1, &mut fin2);
        }
    }

    fin1[finlength - 1]
}

/// Exact incircle test over the original coordinates. Always correct,
/// always slow; kept for cross-validation.
pub fn incircle_exact(pa: &Coord, pb: &Coord, pc: &Coord, pd: &Coord) -> Float {
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

    let mut det24x = [0.0; 24];
    let mut det24y = [0.0; 24];
    let mut det48x = [0.0; 48];
    let mut det48y = [0.0; 48];

    let xlen = scale_expansion_zeroelim(&bcd[..bcdlen], pa.x, splitter, &mut det24x);
    let xlen = scale_expansion_zeroelim(&det24x[..xlen], pa.x, splitter, &mut det48x);
    let ylen = scale_expansion_zeroelim(&bcd[..bcdlen], pa.y, splitter, &mut det24y);
    let ylen = scale_expansion_zeroelim(&det24y[..ylen], pa.y, splitter, &mut det48y);
    let mut adet = [0.0; 96];
    let alen = fast_expansion_sum_zeroelim(&det48x[..xlen], &det48y[..ylen], &mut adet);

    let xlen = scale_expansion_zeroelim(&cda[..cdalen], pb.x, splitter, &mut det24x);
    let xlen = scale_expansion_zeroelim(&det24x[..xlen], -pb.x, splitter, &mut det48x);
    let ylen = scale_expansion_zeroelim(&cda[..cdalen], pb.y, splitter, &mut det24y);
    let ylen = scale_expansion_zeroelim(&det24y[..ylen], -pb.y, splitter, &mut det48y);
    let mut bdet = [0.0; 96];
    let blen = fast_expansion_sum_zeroelim(&det48x[..xlen], &det48y[..ylen], &mut bdet);

    let xlen = scale_expansion_zeroelim(&dab[..dablen], pc.x, splitter, &mut det24x);
    let xlen = scale_expansion_zeroelim(&det24x[..xlen], pc.x, splitter, &mut det48x);
    let ylen = scale_expansion_zeroelim(&dab[..dablen], pc.y, splitter, &mut det24y);
    let ylen = scale_expansion_zeroelim(&det24y[..ylen], pc.y, splitter, &mut det48y);
    let mut cdet = [0.0; 96];
    let clen = fast_expansion_sum_zeroelim(&det48x[..xlen], &det48y[..ylen], &mut cdet);

    let xlen = scale_expansion_zeroelim(&abc[..abclen], pd.x, splitter, &mut det24x);
    let xlen = scale_expansion_zeroelim(&det24x[..xlen], -pd.x, splitter, &mut det48x);
    let ylen = scale_expansion_zeroelim(&abc[..abclen], pd.y, splitter, &mut det24y);
    let ylen = scale_expansion_zeroelim(&det24y[..ylen], -pd.y, splitter, &mut det48y);
    let mut ddet = [0.0; 96];
    let dlen = fast_expansion_sum_zeroelim(&det48x[..xlen], &det48y[..ylen], &mut ddet);

    let mut abdet = [0.0; 192];
    let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
    let mut cddet = [0.0; 192];
    let cdlen = fast_expansion_sum_zeroelim(&cdet[..clen], &ddet[..dlen], &mut cddet);
    let mut deter = [0.0; 384];
    let deterlen = fast_expansion_sum_zeroelim(&abdet[..ablen], &cddet[..cdlen], &mut deter);
    deter[deterlen - 1]
}

/// Exact incircle test through the [`Expansion`] value type, structured as
/// the cofactor sum over the translated determinant. Cross-validates
/// [`incircle_exact`].
pub fn incircle_slow(pa: &Coord, pb: &Coord, pc: &Coord, pd: &Coord) -> Float {
    let adx = Expansion::from_diff(pa.x, pd.x);
    let ady = Expansion::from_diff(pa.y, pd.y);
    let bdx = Expansion::from_diff(pb.x, pd.x);
    let bdy = Expansion::from_diff(pb.y, pd.y);
    let cdx = Expansion::from_diff(pc.x, pd.x);
    let cdy = Expansion::from_diff(pc.y, pd.y);

    let bc = &(&bdx * &cdy) - &(&cdx * &bdy);
    let ca = &(&cdx * &ady) - &(&adx * &cdy);
    let ab = &(&adx * &bdy) - &(&bdx * &ady);

    let alift = &(&adx * &adx) + &(&ady * &ady);
    let blift = &(&bdx * &bdx) + &(&bdy * &bdy);
    let clift = &(&cdx * &cdx) + &(&cdy * &cdy);

    let det = &(&(&alift * &bc) + &(&blift * &ca)) + &(&clift * &ab);
    det.most_significant()
}

/// Plain floating-point test of whether the angle at `c` in triangle
/// `a`, `c`, `b` is obtuse, which is equivalent to `c` lying inside the
/// circle with diameter `ab`. Positive inside, negative outside.
pub fn incircle2p_fast(pa: &Coord, pb: &Coord, pc: &Coord) -> Float {
    let acx = pa.x - pc.x;
    let acy = pa.y - pc.y;
    let bcx = pb.x - pc.x;
    let bcy = pb.y - pc.y;
    -acx * bcx - acy * bcy
}

/// Compensated variant of [`incircle2p_fast`]: the dot product is computed
/// with error-free products and a first-order correction for the
/// translation tails.
///
/// Much more accurate than the fast form near the circle, but it carries no
/// exact fallback and its sign is not guaranteed for adversarial inputs.
pub fn incircle2p(pa: &Coord, pb: &Coord, pc: &Coord) -> Float {
    let splitter = bounds().splitter;

    let (acx, acxtail) = two_diff(pa.x, pc.x);
    let (acy, acytail) = two_diff(pa.y, pc.y);
    let (bcx, bcxtail) = two_diff(pb.x, pc.x);
    let (bcy, bcytail) = two_diff(pb.y, pc.y);

    let (xx1, xx0) = two_product(acx, bcx, splitter);
    let (yy1, yy0) = two_product(acy, bcy, splitter);
    let (s3, s2, s1, s0) = two_two_sum(xx1, xx0, yy1, yy0);

    let tails = acx * bcxtail + bcx * acxtail + acy * bcytail + bcy * acytail;
    -(((s0 + s1) + s2) + s3) - tails
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Coord, Coord, Coord) {
        (
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(0.0, 1.0),
        )
    }

    #[test]
    fn inside_is_positive() {
        let (a, b, c) = triangle();
        let d = Coord::new(0.5, 0.5);
        assert!(incircle(&a, &b, &c, &d) > 0.0);
        assert!(incircle_fast(&a, &b, &c, &d) > 0.0);
        assert!(incircle_exact(&a, &b, &c, &d) > 0.0);
        assert!(incircle_slow(&a, &b, &c, &d) > 0.0);
    }

    #[test]
    fn outside_is_negative() {
        let (a, b, c) = triangle();
        let d = Coord::new(1.1, 1.1);
        assert!(incircle(&a, &b, &c, &d) < 0.0);
        assert!(incircle_exact(&a, &b, &c, &d) < 0.0);
        assert!(incircle_slow(&a, &b, &c, &d) < 0.0);
    }

    #[test]
    fn cocircular_is_exactly_zero() {
        // (1, 1) lies on the circumcircle of the right triangle.
        let (a, b, c) = triangle();
        for d in [Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)] {
            assert_eq!(incircle(&a, &b, &c, &d), 0.0);
            assert_eq!(incircle_exact(&a, &b, &c, &d), 0.0);
            assert_eq!(incircle_slow(&a, &b, &c, &d), 0.0);
        }
    }

    #[test]
    fn diametral_circle_signs() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(2.0, 0.0);
        // Inside the circle with diameter ab.
        assert!(incircle2p_fast(&a, &b, &Coord::new(1.0, 0.5)) > 0.0);
        assert!(incircle2p(&a, &b, &Coord::new(1.0, 0.5)) > 0.0);
        // Outside.
        assert!(incircle2p_fast(&a, &b, &Coord::new(1.0, 1.5)) < 0.0);
        assert!(incircle2p(&a, &b, &Coord::new(1.0, 1.5)) < 0.0);
        // On the circle.
        assert_eq!(incircle2p(&a, &b, &Coord::new(1.0, 1.0)), 0.0);
    }
}
