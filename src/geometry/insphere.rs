//! The insphere test: does `e` lie inside the sphere through `a`, `b`, `c`,
//! `d`?
//!
//! Positive when `e` is strictly inside, negative outside, zero on the
//! sphere. The sign convention assumes the four sphere points are ordered so
//! that [`crate::orient3d`]`(a, b, c, d)` is positive; the opposite ordering
//! flips the sign.
//!
//! The adaptive path carries the fast tier, the exactly-translated dominant
//! terms and a first-order correction; when even that fails to certify a
//! sign it falls back to [`insphere_exact`] rather than growing a dedicated
//! second-order tail expansion.

use crate::bounds::{bounds, ensure_self_check};
use crate::eft::{two_diff_tail, two_product, two_two_diff};
use crate::exact::Expansion;
use crate::expansion::{estimate, fast_expansion_sum_zeroelim, scale_expansion_zeroelim};
use crate::{Coord3, Float};

/// Plain floating-point insphere test. The sign may be wrong when `e` is
/// near the sphere.
pub fn insphere_fast(pa: &Coord3, pb: &Coord3, pc: &Coord3, pd: &Coord3, pe: &Coord3) -> Float {
    let aex = pa.x - pe.x;
    let bex = pb.x - pe.x;
    let cex = pc.x - pe.x;
    let dex = pd.x - pe.x;
    let aey = pa.y - pe.y;
    let bey = pb.y - pe.y;
    let cey = pc.y - pe.y;
    let dey = pd.y - pe.y;
    let aez = pa.z - pe.z;
    let bez = pb.z - pe.z;
    let cez = pc.z - pe.z;
    let dez = pd.z - pe.z;

    let ab = aex * bey - bex * aey;
    let bc = bex * cey - cex * bey;
    let cd = cex * dey - dex * cey;
    let da = dex * aey - aex * dey;
    let ac = aex * cey - cex * aey;
    let bd = bex * dey - dex * bey;

    let abc = aez * bc - bez * ac + cez * ab;
    let bcd = bez * cd - cez * bd + dez * bc;
    let cda = cez * da + dez * ac + aez * cd;
    let dab = dez * ab + aez * bd + bez * da;

    let alift = aex * aex + aey * aey + aez * aez;
    let blift = bex * bex + bey * bey + bez * bez;
    let clift = cex * cex + cey * cey + cez * cez;
    let dlift = dex * dex + dey * dey + dez * dez;

    (dlift * abc - clift * dab) + (blift * cda - alift * bcd)
}

/// Adaptive insphere test; the recommended entry point.
pub fn insphere(pa: &Coord3, pb: &Coord3, pc: &Coord3, pd: &Coord3, pe: &Coord3) -> Float {
    ensure_self_check();

    let aex = pa.x - pe.x;
    let bex = pb.x - pe.x;
    let cex = pc.x - pe.x;
    let dex = pd.x - pe.x;
    let aey = pa.y - pe.y;
    let bey = pb.y - pe.y;
    let cey = pc.y - pe.y;
    let dey = pd.y - pe.y;
    let aez = pa.z - pe.z;
    let bez = pb.z - pe.z;
    let cez = pc.z - pe.z;
    let dez = pd.z - pe.z;

    let aexbey = aex * bey;
    let bexaey = bex * aey;
    let ab = aexbey - bexaey;
    let bexcey = bex * cey;
    let cexbey = cex * bey;
    let bc = bexcey - cexbey;
    let cexdey = cex * dey;
    let dexcey = dex * cey;
    let cd = cexdey - dexcey;
    let dexaey = dex * aey;
    let aexdey = aex * dey;
    let da = dexaey - aexdey;
    let aexcey = aex * cey;
    let cexaey = cex * aey;
    let ac = aexcey - cexaey;
    let bexdey = bex * dey;
    let dexbey = dex * bey;
    let bd = bexdey - dexbey;

    let abc = aez * bc - bez * ac + cez * ab;
    let bcd = bez * cd - cez * bd + dez * bc;
    let cda = cez * da + dez * ac + aez * cd;
    let dab = dez * ab + aez * bd + bez * da;

    let alift = aex * aex + aey * aey + aez * aez;
    let blift = bex * bex + bey * bey + bez * bez;
    let clift = cex * cex + cey * cey + cez * cez;
    let dlift = dex * dex + dey * dey + dez * dez;

    let det = (dlift * abc - clift * dab) + (blift * cda - alift * bcd);

    let aezplus = aez.abs();
    let bezplus = bez.abs();
    let cezplus = cez.abs();
    let dezplus = dez.abs();
    let aexbeyplus = aexbey.abs();
    let bexaeyplus = bexaey.abs();
    let bexceyplus = bexcey.abs();
    let cexbeyplus = cexbey.abs();
    let cexdeyplus = cexdey.abs();
    let dexceyplus = dexcey.abs();
    let dexaeyplus = dexaey.abs();
    let aexdeyplus = aexdey.abs();
    let aexceyplus = aexcey.abs();
    let cexaeyplus = cexaey.abs();
    let bexdeyplus = bexdey.abs();
    let dexbeyplus = dexbey.abs();
    let permanent = ((cexdeyplus + dexceyplus) * bezplus
        + (dexbeyplus + bexdeyplus) * cezplus
        + (bexceyplus + cexbeyplus) * dezplus)
        * alift
        + ((dexaeyplus + aexdeyplus) * cezplus
            + (aexceyplus + cexaeyplus) * dezplus
            + (cexdeyplus + dexceyplus) * aezplus)
            * blift
        + ((aexbeyplus + bexaeyplus) * dezplus
            + (bexdeyplus + dexbeyplus) * aezplus
            + (dexaeyplus + aexdeyplus) * bezplus)
            * clift
        + ((bexceyplus + cexbeyplus) * aezplus
            + (cexaeyplus + aexceyplus) * bezplus
            + (aexbeyplus + bexaeyplus) * cezplus)
            * dlift;
    let errbound = bounds().isperrbound_a * permanent;
    if det > errbound || -det > errbound {
        return det;
    }
    insphere_adapt(pa, pb, pc, pd, pe, permanent)
}

#[allow(clippy::too_many_lines)]
fn insphere_adapt(
    pa: &Coord3,
    pb: &Coord3,
    pc: &Coord3,
    pd: &Coord3,
    pe: &Coord3,
    permanent: Float,
) -> Float {
    let bnds = bounds();
    let splitter = bnds.splitter;

    let aex = pa.x - pe.x;
    let bex = pb.x - pe.x;
    let cex = pc.x - pe.x;
    let dex = pd.x - pe.x;
    let aey = pa.y - pe.y;
    let bey = pb.y - pe.y;
    let cey = pc.y - pe.y;
    let dey = pd.y - pe.y;
    let aez = pa.z - pe.z;
    let bez = pb.z - pe.z;
    let cez = pc.z - pe.z;
    let dez = pd.z - pe.z;

    let (aexbey1, aexbey0) = two_product(aex, bey, splitter);
    let (bexaey1, bexaey0) = two_product(bex, aey, splitter);
    let (ab3, ab2, ab1, ab0) = two_two_diff(aexbey1, aexbey0, bexaey1, bexaey0);
    let ab = [ab0, ab1, ab2, ab3];

    let (bexcey1, bexcey0) = two_product(bex, cey, splitter);
    let (cexbey1, cexbey0) = two_product(cex, bey, splitter);
    let (bc3, bc2, bc1, bc0) = two_two_diff(bexcey1, bexcey0, cexbey1, cexbey0);
    let bc = [bc0, bc1, bc2, bc3];

    let (cexdey1, cexdey0) = two_product(cex, dey, splitter);
    let (dexcey1, dexcey0) = two_product(dex, cey, splitter);
    let (cd3, cd2, cd1, cd0) = two_two_diff(cexdey1, cexdey0, dexcey1, dexcey0);
    let cd = [cd0, cd1, cd2, cd3];

    let (dexaey1, dexaey0) = two_product(dex, aey, splitter);
    let (aexdey1, aexdey0) = two_product(aex, dey, splitter);
    let (da3, da2, da1, da0) = two_two_diff(dexaey1, dexaey0, aexdey1, aexdey0);
    let da = [da0, da1, da2, da3];

    let (aexcey1, aexcey0) = two_product(aex, cey, splitter);
    let (cexaey1, cexaey0) = two_product(cex, aey, splitter);
    let (ac3, ac2, ac1, ac0) = two_two_diff(aexcey1, aexcey0, cexaey1, cexaey0);
    let ac = [ac0, ac1, ac2, ac3];

    let (bexdey1, bexdey0) = two_product(bex, dey, splitter);
    let (dexbey1, dexbey0) = two_product(dex, bey, splitter);
    let (bd3, bd2, bd1, bd0) = two_two_diff(bexdey1, bexdey0, dexbey1, dexbey0);
    let bd = [bd0, bd1, bd2, bd3];

    let mut temp8a = [0.0; 8];
    let mut temp8b = [0.0; 8];
    let mut temp8c = [0.0; 8];
    let mut temp16 = [0.0; 16];

    let temp8alen = scale_expansion_zeroelim(&bc, aez, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&ac, -bez, splitter, &mut temp8b);
    let temp8clen = scale_expansion_zeroelim(&ab, cez, splitter, &mut temp8c);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let mut abc = [0.0; 24];
    let abclen = fast_expansion_sum_zeroelim(&temp8c[..temp8clen], &temp16[..temp16len], &mut abc);

    let temp8alen = scale_expansion_zeroelim(&cd, bez, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&bd, -cez, splitter, &mut temp8b);
    let temp8clen = scale_expansion_zeroelim(&bc, dez, splitter, &mut temp8c);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let mut bcd = [0.0; 24];
    let bcdlen = fast_expansion_sum_zeroelim(&temp8c[..temp8clen], &temp16[..temp16len], &mut bcd);

    let temp8alen = scale_expansion_zeroelim(&da, cez, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&ac, dez, splitter, &mut temp8b);
    let temp8clen = scale_expansion_zeroelim(&cd, aez, splitter, &mut temp8c);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let mut cda = [0.0; 24];
    let cdalen = fast_expansion_sum_zeroelim(&temp8c[..temp8clen], &temp16[..temp16len], &mut cda);

    let temp8alen = scale_expansion_zeroelim(&ab, dez, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&bd, aez, splitter, &mut temp8b);
    let temp8clen = scale_expansion_zeroelim(&da, bez, splitter, &mut temp8c);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let mut dab = [0.0; 24];
    let dablen = fast_expansion_sum_zeroelim(&temp8c[..temp8clen], &temp16[..temp16len], &mut dab);

    let mut xdet = [0.0; 48];
    let mut xxdet = [0.0; 96];
    let mut ydet = [0.0; 48];
    let mut yydet = [0.0; 96];
    let mut zdet = [0.0; 48];
    let mut zzdet = [0.0; 96];
    let mut xydet = [0.0; 192];

    let xlen = scale_expansion_zeroelim(&bcd[..bcdlen], aex, splitter, &mut xdet);
    let xxlen = scale_expansion_zeroelim(&xdet[..xlen], -aex, splitter, &mut xxdet);
    let ylen = scale_expansion_zeroelim(&bcd[..bcdlen], aey, splitter, &mut ydet);
    let yylen = scale_expansion_zeroelim(&ydet[..ylen], -aey, splitter, &mut yydet);
    let zlen = scale_expansion_zeroelim(&bcd[..bcdlen], aez, splitter, &mut zdet);
    let zzlen = scale_expansion_zeroelim(&zdet[..zlen], -aez, splitter, &mut zzdet);
    let xylen = fast_expansion_sum_zeroelim(&xxdet[..xxlen], &yydet[..yylen], &mut xydet);
    let mut adet = [0.0; 288];
    let alen = fast_expansion_sum_zeroelim(&xydet[..xylen], &zzdet[..zzlen], &mut adet);

    let xlen = scale_expansion_zeroelim(&cda[..cdalen], bex, splitter, &mut xdet);
    let xxlen = scale_expansion_zeroelim(&xdet[..xlen], bex, splitter, &mut xxdet);
    let ylen = scale_expansion_zeroelim(&cda[..cdalen], bey, splitter, &mut ydet);
    let yylen = scale_expansion_zeroelim(&ydet[..ylen], bey, splitter, &mut yydet);
    let zlen = scale_expansion_zeroelim(&cda[..cdalen], bez, splitter, &mut zdet);
    let zzlen = scale_expansion_zeroelim(&zdet[..zlen], bez, splitter, &mut zzdet);
    let xylen = fast_expansion_sum_zeroelim(&xxdet[..xxlen], &yydet[..yylen], &mut xydet);
    let mut bdet = [0.0; 288];
    let blen = fast_expansion_sum_zeroelim(&xydet[..xylen], &zzdet[..zzlen], &mut bdet);

    let xlen = scale_expansion_zeroelim(&dab[..dablen], cex, splitter, &mut xdet);
    let xxlen = scale_expansion_zeroelim(&xdet[..xlen], -cex, splitter, &mut xxdet);
    let ylen = scale_expansion_zeroelim(&dab[..dablen], cey, splitter, &mut ydet);
    let yylen = scale_expansion_zeroelim(&ydet[..ylen], -cey, splitter, &mut yydet);
    let zlen = scale_expansion_zeroelim(&dab[..dablen], cez, splitter, &mut zdet);
    let zzlen = scale_expansion_zeroelim(&zdet[..zlen], -cez, splitter, &mut zzdet);
    let xylen = fast_expansion_sum_zeroelim(&xxdet[..xxlen], &yydet[..yylen], &mut xydet);
    let mut cdet = [0.0; 288];
    let clen = fast_expansion_sum_zeroelim(&xydet[..xylen], &zzdet[..zzlen], &mut cdet);

    let xlen = scale_expansion_zeroelim(&abc[..abclen], dex, splitter, &mut xdet);
    let xxlen = scale_expansion_zeroelim(&xdet[..xlen], dex, splitter, &mut xxdet);
    let ylen = scale_expansion_zeroelim(&abc[..abclen], dey, splitter, &mut ydet);
    let yylen = scale_expansion_zeroelim(&ydet[..ylen], dey, splitter, &mut yydet);
    let zlen = scale_expansion_zeroelim(&abc[..abclen], dez, splitter, &mut zdet);
    let zzlen = scale_expansion_zeroelim(&zdet[..zlen], dez, splitter, &mut zzdet);
    let xylen = fast_expansion_sum_zeroelim(&xxdet[..xxlen], &yydet[..yylen], &mut xydet);
    let mut ddet = [0.0; 288];
    let dlen = fast_expansion_sum_zeroelim(&xydet[..xylen], &zzdet[..zzlen], &mut ddet);

    let mut abdet = [0.0; 576];
    let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
    let mut cddet = [0.0; 576];
    let cdlen = fast_expansion_sum_zeroelim(&cdet[..clen], &ddet[..dlen], &mut cddet);
    let mut fin1 = [0.0; 1152];
    let finlength = fast_expansion_sum_zeroelim(&abdet[..ablen], &cddet[..cdlen], &mut fin1);

    let mut det = estimate(&fin1[..finlength]);
    let errbound = bnds.isperrbound_b * permanent;
    if det >= errbound || -det >= errbound {
        return det;
    }

    let aextail = two_diff_tail(pa.x, pe.x, aex);
    let aeytail = two_diff_tail(pa.y, pe.y, aey);
    let aeztail = two_diff_tail(pa.z, pe.z, aez);
    let bextail = two_diff_tail(pb.x, pe.x, bex);
    let beytail = two_diff_tail(pb.y, pe.y, bey);
    let beztail = two_diff_tail(pb.z, pe.z, bez);
    let cextail = two_diff_tail(pc.x, pe.x, cex);
    let ceytail = two_diff_tail(pc.y, pe.y, cey);
    let ceztail = two_diff_tail(pc.z, pe.z, cez);
    let dextail = two_diff_tail(pd.x, pe.x, dex);
    let deytail = two_diff_tail(pd.y, pe.y, dey);
    let deztail = two_diff_tail(pd.z, pe.z, dez);
    if aextail == 0.0
        && aeytail == 0.0
        && aeztail == 0.0
        && bextail == 0.0
        && beytail == 0.0
        && beztail == 0.0
        && cextail == 0.0
        && ceytail == 0.0
        && ceztail == 0.0
        && dextail == 0.0
        && deytail == 0.0
        && deztail == 0.0
    {
        return det;
    }

    let errbound = bnds.isperrbound_c * permanent + bnds.resulterrbound * det.abs();
    let abeps = (aex * beytail + bey * aextail) - (aey * bextail + bex * aeytail);
    let bceps = (bex * ceytail + cey * bextail) - (bey * cextail + cex * beytail);
    let cdeps = (cex * deytail + dey * cextail) - (cey * dextail + dex * ceytail);
    let daeps = (dex * aeytail + aey * dextail) - (dey * aextail + aex * deytail);
    let aceps = (aex * ceytail + cey * aextail) - (aey * cextail + cex * aeytail);
    let bdeps = (bex * deytail + dey * bextail) - (bey * dextail + dex * beytail);
    det += (((bex * bex + bey * bey + bez * bez)
        * ((cez * daeps + dez * aceps + aez * cdeps)
            + (ceztail * da3 + deztail * ac3 + aeztail * cd3))
        + (dex * dex + dey * dey + dez * dez)
            * ((aez * bceps - bez * aceps + cez * abeps)
                + (aeztail * bc3 - beztail * ac3 + ceztail * ab3)))
        - ((aex * aex + aey * aey + aez * aez)
            * ((bez * cdeps - cez * bdeps + dez * bceps)
                + (beztail * cd3 - ceztail * bd3 + deztail * bc3))
            + (cex * cex + cey * cey + cez * cez)
                * ((dez * abeps + aez * bdeps + bez * daeps)
                    + (deztail * ab3 + aeztail * bd3 + beztail * da3))))
        + 2.0
            * (((bex * bextail + bey * beytail + bez * beztail)
                * (cez * da3 + dez * ac3 + aez * cd3)
                + (dex * dextail + dey * deytail + dez * deztail)
                    * (aez * bc3 - bez * ac3 + cez * ab3))
                - ((aex * aextail + aey * aeytail + aez * aeztail)
                    * (bez * cd3 - cez * bd3 + dez * bc3)
                    + (cex * cextail + cey * ceytail + cez * ceztail)
                        * (dez * ab3 + aez * bd3 + bez * da3)));
    if det >= errbound || -det >= errbound {
        return det;
    }

    // The correction above is first order in the translation tails. Rather
    // than build the full second-order tail expansion, hand the rare
    // remaining cases to the exact formulation.
    insphere_exact(pa, pb, pc, pd, pe)
}

/// Exact insphere test over the original coordinates of all five points.
/// Always correct, always slow; also the final fallback of [`insphere`].
#[allow(clippy::too_many_lines)]
pub fn insphere_exact(
    pa: &Coord3,
    pb: &Coord3,
    pc: &Coord3,
    pd: &Coord3,
    pe: &Coord3,
) -> Float {
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

    let (dxey1, dxey0) = two_product(pd.x, pe.y, splitter);
    let (exdy1, exdy0) = two_product(pe.x, pd.y, splitter);
    let (de3, de2, de1, de0) = two_two_diff(dxey1, dxey0, exdy1, exdy0);
    let de = [de0, de1, de2, de3];

    let (exay1, exay0) = two_product(pe.x, pa.y, splitter);
    let (axey1, axey0) = two_product(pa.x, pe.y, splitter);
    let (ea3, ea2, ea1, ea0) = two_two_diff(exay1, exay0, axey1, axey0);
    let ea = [ea0, ea1, ea2, ea3];

    let (axcy1, axcy0) = two_product(pa.x, pc.y, splitter);
    let (cxay1, cxay0) = two_product(pc.x, pa.y, splitter);
    let (ac3, ac2, ac1, ac0) = two_two_diff(axcy1, axcy0, cxay1, cxay0);
    let ac = [ac0, ac1, ac2, ac3];

    let (bxdy1, bxdy0) = two_product(pb.x, pd.y, splitter);
    let (dxby1, dxby0) = two_product(pd.x, pb.y, splitter);
    let (bd3, bd2, bd1, bd0) = two_two_diff(bxdy1, bxdy0, dxby1, dxby0);
    let bd = [bd0, bd1, bd2, bd3];

    let (cxey1, cxey0) = two_product(pc.x, pe.y, splitter);
    let (excy1, excy0) = two_product(pe.x, pc.y, splitter);
    let (ce3, ce2, ce1, ce0) = two_two_diff(cxey1, cxey0, excy1, excy0);
    let ce = [ce0, ce1, ce2, ce3];

    let (dxay1, dxay0) = two_product(pd.x, pa.y, splitter);
    let (axdy1, axdy0) = two_product(pa.x, pd.y, splitter);
    let (da3, da2, da1, da0) = two_two_diff(dxay1, dxay0, axdy1, axdy0);
    let da = [da0, da1, da2, da3];

    let (exby1, exby0) = two_product(pe.x, pb.y, splitter);
    let (bxey1, bxey0) = two_product(pb.x, pe.y, splitter);
    let (eb3, eb2, eb1, eb0) = two_two_diff(exby1, exby0, bxey1, bxey0);
    let eb = [eb0, eb1, eb2, eb3];

    let mut temp8a = [0.0; 8];
    let mut temp8b = [0.0; 8];
    let mut temp16 = [0.0; 16];

    let mut abc = [0.0; 24];
    let mut bcd = [0.0; 24];
    let mut cde = [0.0; 24];
    let mut dea = [0.0; 24];
    let mut eab = [0.0; 24];
    let mut abd = [0.0; 24];
    let mut bce = [0.0; 24];
    let mut cda = [0.0; 24];
    let mut deb = [0.0; 24];
    let mut eac = [0.0; 24];

    let temp8alen = scale_expansion_zeroelim(&bc, pa.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&ac, -pb.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&ab, pc.z, splitter, &mut temp8a);
    let abclen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut abc);

    let temp8alen = scale_expansion_zeroelim(&cd, pb.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&bd, -pc.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&bc, pd.z, splitter, &mut temp8a);
    let bcdlen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut bcd);

    let temp8alen = scale_expansion_zeroelim(&de, pc.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&ce, -pd.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&cd, pe.z, splitter, &mut temp8a);
    let cdelen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut cde);

    let temp8alen = scale_expansion_zeroelim(&ea, pd.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&da, -pe.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&de, pa.z, splitter, &mut temp8a);
    let dealen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut dea);

    let temp8alen = scale_expansion_zeroelim(&ab, pe.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&eb, -pa.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&ea, pb.z, splitter, &mut temp8a);
    let eablen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut eab);

    let temp8alen = scale_expansion_zeroelim(&bd, pa.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&da, pb.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&ab, pd.z, splitter, &mut temp8a);
    let abdlen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut abd);

    let temp8alen = scale_expansion_zeroelim(&ce, pb.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&eb, pc.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&bc, pe.z, splitter, &mut temp8a);
    let bcelen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut bce);

    let temp8alen = scale_expansion_zeroelim(&da, pc.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&ac, pd.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&cd, pa.z, splitter, &mut temp8a);
    let cdalen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut cda);

    let temp8alen = scale_expansion_zeroelim(&eb, pd.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&bd, pe.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&de, pb.z, splitter, &mut temp8a);
    let deblen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut deb);

    let temp8alen = scale_expansion_zeroelim(&ac, pe.z, splitter, &mut temp8a);
    let temp8blen = scale_expansion_zeroelim(&ce, pa.z, splitter, &mut temp8b);
    let temp16len =
        fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp8b[..temp8blen], &mut temp16);
    let temp8alen = scale_expansion_zeroelim(&ea, pc.z, splitter, &mut temp8a);
    let eaclen = fast_expansion_sum_zeroelim(&temp8a[..temp8alen], &temp16[..temp16len], &mut eac);

    let mut temp48a = [0.0; 48];
    let mut temp48b = [0.0; 48];
    let mut xdet = [0.0; 192];
    let mut xxdet = [0.0; 384];
    let mut ydet = [0.0; 192];
    let mut yydet = [0.0; 384];
    let mut zdet = [0.0; 192];
    let mut zzdet = [0.0; 384];
    let mut detxy = [0.0; 768];

    let temp48alen = fast_expansion_sum_zeroelim(&cde[..cdelen], &bce[..bcelen], &mut temp48a);
    let mut temp48blen = fast_expansion_sum_zeroelim(&deb[..deblen], &bcd[..bcdlen], &mut temp48b);
    for t in temp48b[..temp48blen].iter_mut() {
        *t = -*t;
    }
    let mut bcde = [0.0; 96];
    let bcdelen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut bcde);
    let xlen = scale_expansion_zeroelim(&bcde[..bcdelen], pa.x, splitter, &mut xdet);
    let xxlen = scale_expansion_zeroelim(&xdet[..xlen], pa.x, splitter, &mut xxdet);
    let ylen = scale_expansion_zeroelim(&bcde[..bcdelen], pa.y, splitter, &mut ydet);
    let yylen = scale_expansion_zeroelim(&ydet[..ylen], pa.y, splitter, &mut yydet);
    let zlen = scale_expansion_zeroelim(&bcde[..bcdelen], pa.z, splitter, &mut zdet);
    let zzlen = scale_expansion_zeroelim(&zdet[..zlen], pa.z, splitter, &mut zzdet);
    let xylen = fast_expansion_sum_zeroelim(&xxdet[..xxlen], &yydet[..yylen], &mut detxy);
    let mut adet = vec![0.0; 1152];
    let alen = fast_expansion_sum_zeroelim(&detxy[..xylen], &zzdet[..zzlen], &mut adet);

    let temp48alen = fast_expansion_sum_zeroelim(&dea[..dealen], &cda[..cdalen], &mut temp48a);
    temp48blen = fast_expansion_sum_zeroelim(&eac[..eaclen], &cde[..cdelen], &mut temp48b);
    for t in temp48b[..temp48blen].iter_mut() {
        *t = -*t;
    }
    let mut cdea = [0.0; 96];
    let cdealen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut cdea);
    let xlen = scale_expansion_zeroelim(&cdea[..cdealen], pb.x, splitter, &mut xdet);
    let xxlen = scale_expansion_zeroelim(&xdet[..xlen], pb.x, splitter, &mut xxdet);
    let ylen = scale_expansion_zeroelim(&cdea[..cdealen], pb.y, splitter, &mut ydet);
    let yylen = scale_expansion_zeroelim(&ydet[..ylen], pb.y, splitter, &mut yydet);
    let zlen = scale_expansion_zeroelim(&cdea[..cdealen], pb.z, splitter, &mut zdet);
    let zzlen = scale_expansion_zeroelim(&zdet[..zlen], pb.z, splitter, &mut zzdet);
    let xylen = fast_expansion_sum_zeroelim(&xxdet[..xxlen], &yydet[..yylen], &mut detxy);
    let mut bdet = vec![0.0; 1152];
    let blen = fast_expansion_sum_zeroelim(&detxy[..xylen], &zzdet[..zzlen], &mut bdet);

    let temp48alen = fast_expansion_sum_zeroelim(&eab[..eablen], &deb[..deblen], &mut temp48a);
    temp48blen = fast_expansion_sum_zeroelim(&abd[..abdlen], &dea[..dealen], &mut temp48b);
    for t in temp48b[..temp48blen].iter_mut() {
        *t = -*t;
    }
    let mut deab = [0.0; 96];
    let deablen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut deab);
    let xlen = scale_expansion_zeroelim(&deab[..deablen], pc.x, splitter, &mut xdet);
    let xxlen = scale_expansion_zeroelim(&xdet[..xlen], pc.x, splitter, &mut xxdet);
    let ylen = scale_expansion_zeroelim(&deab[..deablen], pc.y, splitter, &mut ydet);
    let yylen = scale_expansion_zeroelim(&ydet[..ylen], pc.y, splitter, &mut yydet);
    let zlen = scale_expansion_zeroelim(&deab[..deablen], pc.z, splitter, &mut zdet);
    let zzlen = scale_expansion_zeroelim(&zdet[..zlen], pc.z, splitter, &mut zzdet);
    let xylen = fast_expansion_sum_zeroelim(&xxdet[..xxlen], &yydet[..yylen], &mut detxy);
    let mut cdet = vec![0.0; 1152];
    let clen = fast_expansion_sum_zeroelim(&detxy[..xylen], &zzdet[..zzlen], &mut cdet);

    let temp48alen = fast_expansion_sum_zeroelim(&abc[..abclen], &eac[..eaclen], &mut temp48a);
    temp48blen = fast_expansion_sum_zeroelim(&bce[..bcelen], &eab[..eablen], &mut temp48b);
    for t in temp48b[..temp48blen].iter_mut() {
        *t = -*t;
    }
    let mut eabc = [0.0; 96];
    let eabclen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut eabc);
    let xlen = scale_expansion_zeroelim(&eabc[..eabclen], pd.x, splitter, &mut xdet);
    let xxlen = scale_expansion_zeroelim(&xdet[..xlen], pd.x, splitter, &mut xxdet);
    let ylen = scale_expansion_zeroelim(&eabc[..eabclen], pd.y, splitter, &mut ydet);
    let yylen = scale_expansion_zeroelim(&ydet[..ylen], pd.y, splitter, &mut yydet);
    let zlen = scale_expansion_zeroelim(&eabc[..eabclen], pd.z, splitter, &mut zdet);
    let zzlen = scale_expansion_zeroelim(&zdet[..zlen], pd.z, splitter, &mut zzdet);
    let xylen = fast_expansion_sum_zeroelim(&xxdet[..xxlen], &yydet[..yylen], &mut detxy);
    let mut ddet = vec![0.0; 1152];
    let dlen = fast_expansion_sum_zeroelim(&detxy[..xylen], &zzdet[..zzlen], &mut ddet);

    let temp48alen = fast_expansion_sum_zeroelim(&bcd[..bcdlen], &abd[..abdlen], &mut temp48a);
    temp48blen = fast_expansion_sum_zeroelim(&cda[..cdalen], &abc[..abclen], &mut temp48b);
    for t in temp48b[..temp48blen].iter_mut() {
        *t = -*t;
    }
    let mut abcd = [0.0; 96];
    let abcdlen =
        fast_expansion_sum_zeroelim(&temp48a[..temp48alen], &temp48b[..temp48blen], &mut abcd);
    let xlen = scale_expansion_zeroelim(&abcd[..abcdlen], pe.x, splitter, &mut xdet);
    let xxlen = scale_expansion_zeroelim(&xdet[..xlen], pe.x, splitter, &mut xxdet);
    let ylen = scale_expansion_zeroelim(&abcd[..abcdlen], pe.y, splitter, &mut ydet);
    let yylen = scale_expansion_zeroelim(&ydet[..ylen], pe.y, splitter, &mut yydet);
    let zlen = scale_expansion_zeroelim(&abcd[..abcdlen], pe.z, splitter, &mut zdet);
    let zzlen = scale_expansion_zeroelim(&zdet[..zlen], pe.z, splitter, &mut zzdet);
    let xylen = fast_expansion_sum_zeroelim(&xxdet[..xxlen], &yydet[..yylen], &mut detxy);
    let mut edet = vec![0.0; 1152];
    let elen = fast_expansion_sum_zeroelim(&detxy[..xylen], &zzdet[..zzlen], &mut edet);

    let mut abdet = vec![0.0; 2304];
    let ablen = fast_expansion_sum_zeroelim(&adet[..alen], &bdet[..blen], &mut abdet);
    let mut cddet = vec![0.0; 2304];
    let cdlen = fast_expansion_sum_zeroelim(&cdet[..clen], &ddet[..dlen], &mut cddet);
    let mut cdedet = vec![0.0; 3456];
    let cdelen = fast_expansion_sum_zeroelim(&cddet[..cdlen], &edet[..elen], &mut cdedet);
    let mut deter = vec![0.0; 5760];
    let deterlen = fast_expansion_sum_zeroelim(&abdet[..ablen], &cdedet[..cdelen], &mut deter);
    deter[deterlen - 1]
}

/// Exact insphere test through the [`Expansion`] value type.
/// Cross-validates [`insphere_exact`].
pub fn insphere_slow(
    pa: &Coord3,
    pb: &Coord3,
    pc: &Coord3,
    pd: &Coord3,
    pe: &Coord3,
) -> Float {
    let aex = Expansion::from_diff(pa.x, pe.x);
    let bex = Expansion::from_diff(pb.x, pe.x);
    let cex = Expansion::from_diff(pc.x, pe.x);
    let dex = Expansion::from_diff(pd.x, pe.x);
    let aey = Expansion::from_diff(pa.y, pe.y);
    let bey = Expansion::from_diff(pb.y, pe.y);
    let cey = Expansion::from_diff(pc.y, pe.y);
    let dey = Expansion::from_diff(pd.y, pe.y);
    let aez = Expansion::from_diff(pa.z, pe.z);
    let bez = Expansion::from_diff(pb.z, pe.z);
    let cez = Expansion::from_diff(pc.z, pe.z);
    let dez = Expansion::from_diff(pd.z, pe.z);

    let ab = &(&aex * &bey) - &(&bex * &aey);
    let bc = &(&bex * &cey) - &(&cex * &bey);
    let cd = &(&cex * &dey) - &(&dex * &cey);
    let da = &(&dex * &aey) - &(&aex * &dey);
    let ac = &(&aex * &cey) - &(&cex * &aey);
    let bd = &(&bex * &dey) - &(&dex * &bey);

    let abc = &(&(&aez * &bc) - &(&bez * &ac)) + &(&cez * &ab);
    let bcd = &(&(&bez * &cd) - &(&cez * &bd)) + &(&dez * &bc);
    let cda = &(&(&cez * &da) + &(&dez * &ac)) + &(&aez * &cd);
    let dab = &(&(&dez * &ab) + &(&aez * &bd)) + &(&bez * &da);

    let alift = &(&(&aex * &aex) + &(&aey * &aey)) + &(&aez * &aez);
    let blift = &(&(&bex * &bex) + &(&bey * &bey)) + &(&bez * &bez);
    let clift = &(&(&cex * &cex) + &(&cey * &cey)) + &(&cez * &cez);
    let dlift = &(&(&dex * &dex) + &(&dey * &dey)) + &(&dez * &dez);

    let det = &(&(&dlift * &abc) - &(&clift * &dab)) + &(&(&blift * &cda) - &(&alift * &bcd));
    det.most_significant()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Positively oriented regular tetrahedron-ish base.
    fn base() -> (Coord3, Coord3, Coord3, Coord3) {
        (
            Coord3::new(0.0, 0.0, 0.0),
            Coord3::new(1.0, 0.0, 0.0),
            Coord3::new(0.0, 1.0, 0.0),
            Coord3::new(0.0, 0.0, -1.0),
        )
    }

    #[test]
    fn inside_is_positive() {
        let (a, b, c, d) = base();
        let e = Coord3::new(0.25, 0.25, -0.25);
        assert!(insphere_fast(&a, &b, &c, &d, &e) > 0.0);
        assert!(insphere(&a, &b, &c, &d, &e) > 0.0);
        assert!(insphere_exact(&a, &b, &c, &d, &e) > 0.0);
        assert!(insphere_slow(&a, &b, &c, &d, &e) > 0.0);
    }

    #[test]
    fn outside_is_negative() {
        let (a, b, c, d) = base();
        let e = Coord3::new(3.0, 3.0, 3.0);
        assert!(insphere(&a, &b, &c, &d, &e) < 0.0);
        assert!(insphere_exact(&a, &b, &c, &d, &e) < 0.0);
        assert!(insphere_slow(&a, &b, &c, &d, &e) < 0.0);
    }

    #[test]
    fn cospherical_is_exactly_zero() {
        // The circumsphere has center (0.5, 0.5, -0.5) and radius^2 = 0.75;
        // (1, 1, -1) lies on it exactly.
        let (a, b, c, d) = base();
        let e = Coord3::new(1.0, 1.0, -1.0);
        assert_eq!(insphere(&a, &b, &c, &d, &e), 0.0);
        assert_eq!(insphere_exact(&a, &b, &c, &d, &e), 0.0);
        assert_eq!(insphere_slow(&a, &b, &c, &d, &e), 0.0);
    }

    #[test]
    fn near_sphere_signs_agree() {
        let (a, b, c, d) = base();
        for dz in [-f64::EPSILON, 0.0, f64::EPSILON] {
            let e = Coord3::new(1.0, 1.0, -1.0 + dz);
            let exact = insphere_exact(&a, &b, &c, &d, &e);
            let adaptive = insphere(&a, &b, &c, &d, &e);
            let slow = insphere_slow(&a, &b, &c, &d, &e);
            assert_eq!(exact > 0.0, adaptive > 0.0);
            assert_eq!(exact < 0.0, adaptive < 0.0);
            assert_eq!(exact > 0.0, slow > 0.0);
            assert_eq!(exact < 0.0, slow < 0.0);
        }
    }
}
