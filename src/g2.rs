//! Hashing to the BLS12-381 G2 group, over Fp².
//!
//! The structure mirrors [`crate::g1`]: SWU (with ξ = 1 + i) or SvdW
//! onto the 3-isogenous auxiliary curve `y² = x³ + 240i·x + 1012(1+i)`,
//! isogeny evaluation onto `y² = x³ + 4(1+i)`, then Budroni–Pintore
//! cofactor clearing built on the ψ (untwist–Frobenius–twist)
//! endomorphism.
//!
//! The G2 SWU square-root branch is an exhaustive search over four
//! precomputed η roots; the constant-time path executes all four probes
//! and collapses the winner by bitmask selection.

mod iso;

use crate::arithmetic::{
    JacobianPoint, fp::FieldElement, fp2::Fp2Element, iso_horner, multiexp::MultiexpTable,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// A G2 point in Jacobian coordinates over Fp².
pub type G2Point = JacobianPoint<Fp2Element>;

pub(crate) const CURVE_B: Fp2Element = Fp2Element {
    c0: FieldElement([
        0x6000000d1ff2e0, 0x3379b4800ac467, 0x0e882431c84b80, 0x683dcf80dd9a7e,
        0x4a5eec26c26d0b, 0x04b29f1457663c, 0x0015de9967f3e8,
    ]),
    c1: FieldElement([
        0x6000000d1ff2e0, 0x3379b4800ac467, 0x0e882431c84b80, 0x683dcf80dd9a7e,
        0x4a5eec26c26d0b, 0x04b29f1457663c, 0x0015de9967f3e8,
    ]),
};
pub(crate) const ISO2_A_SC: FieldElement = FieldElement([
    0xb20003138d971a, 0x10c7ab9a8615e6, 0xf7b9eb97e3b474, 0xde7ef8d1c8ac67,
    0xa67d477644ceb4, 0x0fba9d5dba5cfc, 0x000bf6749def66,
]);

pub(crate) const ISO2_B: Fp2Element = Fp2Element {
    c0: FieldElement([
        0xb4000cf8d9b1c4, 0xe05c88faa45422, 0x1041395d093742, 0x5ae28bd98d4027,
        0xd4ad031b5b3a2c, 0xacc104337d19da, 0x00141ac5c46e61,
    ]),
    c1: FieldElement([
        0xb4000cf8d9b1c4, 0xe05c88faa45422, 0x1041395d093742, 0x5ae28bd98d4027,
        0xd4ad031b5b3a2c, 0xacc104337d19da, 0x00141ac5c46e61,
    ]),
};

pub(crate) const SWU_XI: Fp2Element = Fp2Element {
    c0: FieldElement([
        0xd800000347fcb8, 0x0cde6d2002b119, 0x83a2090c7212e0, 0xda0f73e037669f,
        0x1297bb09b09b42, 0x012ca7c515d98f, 0x000577a659fcfa,
    ]),
    c1: FieldElement([
        0xd800000347fcb8, 0x0cde6d2002b119, 0x83a2090c7212e0, 0xda0f73e037669f,
        0x1297bb09b09b42, 0x012ca7c515d98f, 0x000577a659fcfa,
    ]),
};

pub(crate) const SWU_ETA01: FieldElement = FieldElement([
    0x3c8b38a6cce981, 0x4675c19e1db987, 0x6f1f61c12e7466, 0xdae2ea6d3ed2ec,
    0x38b922075cac7c, 0xd218cd3a315705, 0x00012d2c20cdb2,
]);

pub(crate) const SWU_ETA23: [Fp2Element; 2] = [
    Fp2Element {
        c0: FieldElement([
            0x34d7605439efe7, 0x26a3342899eb39, 0x1fdf25b7608de1, 0xce78d00e231922,
            0x17de8c57fe86bb, 0x66731f988523f4, 0x001807d1dc9525,
        ]),
        c1: FieldElement([
            0x34d7605439efe7, 0x26a3342899eb39, 0x1fdf25b7608de1, 0xce78d00e231922,
            0x17de8c57fe86bb, 0x66731f988523f4, 0x001807d1dc9525,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0x34d7605439efe7, 0x26a3342899eb39, 0x1fdf25b7608de1, 0xce78d00e231922,
            0x17de8c57fe86bb, 0x66731f988523f4, 0x001807d1dc9525,
        ]),
        c1: FieldElement([
            0xca289fabc5bac4, 0xd95b7d2b661480, 0x81178b3ec390ca, 0x250c42b14417b0,
            0x33ce4b0c78c4c9, 0x80272b8322924f, 0x0001f9400da45a,
        ]),
    },
];

pub(crate) const SVDW_CX1_2: FieldElement = FieldElement([
    0x401b798dbd8f52, 0xb89e99122cefb7, 0xd988f0f157ce25, 0x47146594b8a7b6,
    0x67446bd493d3c0, 0x57403315baa0da, 0x000ce6d1bedd60,
]);

pub(crate) const SVDW_CX2_2: FieldElement = FieldElement([
    0x681b798a75929a, 0xabc02bf22a3e9d, 0x55e6e7e4e5bb45, 0x6d04f1b4814117,
    0x54acb0cae3387d, 0x56138b50a4c74b, 0x00076f2b64e066,
]);

pub(crate) const SVDW_SQRT_M3: FieldElement = FieldElement([
    0xa836f3183321ec, 0x645ec504572e54, 0x2f6fd8d63d896b, 0xb419574939e8ce,
    0xbbf11c9f770c3d, 0xad53be665f6825, 0x001455fd23bdc6,
]);

pub(crate) const SVDW_INV3: FieldElement = FieldElement([
    0x475555566d1b5a, 0x04494542ab902f, 0x972fce52e8c568, 0x405dddca5742c1,
    0x8dfb23463510c4, 0x44cb14a977175c, 0x00132898ba2553,
]);

pub(crate) const SVDW_3P4I: Fp2Element = Fp2Element {
    c0: FieldElement([
        0x88000009d7f628, 0x269b476008134d, 0x8ae61b255638a0, 0x8e2e5ba0a633de,
        0x37c7311d11d1c8, 0x0385f74f418cad, 0x001066f30df6ee,
    ]),
    c1: FieldElement([
        0x6000000d1ff2e0, 0x3379b4800ac467, 0x0e882431c84b80, 0x683dcf80dd9a7e,
        0x4a5eec26c26d0b, 0x04b29f1457663c, 0x0015de9967f3e8,
    ]),
};

pub(crate) const PSI_IWSC: Fp2Element = Fp2Element {
    c0: FieldElement([
        0xec000001a3fe5c, 0x066f369001588c, 0xc1d10486390970, 0x6d07b9f01bb34f,
        0x894bdd84d84da1, 0x009653e28aecc7, 0x0002bbd32cfe7d,
    ]),
    c1: FieldElement([
        0x12fffffe5bac4f, 0xf98f7ac3fea72d, 0xdf25ac6feb153b, 0x867d58cf4b7d82,
        0xc260f9df9efde3, 0xe603f7391cc97b, 0x0017453ebd3b02,
    ]),
};

pub(crate) const PSI_K_QI_X: FieldElement = FieldElement([
    0x96e486758a1811, 0x543e8561d5c11c, 0x4b0fc9113e6366, 0x8680210ae5efbb,
    0xf7002699941307, 0x9086bfcb02eef7, 0x001291e6855919,
]);

pub(crate) const PSI_K_QI_Y: FieldElement = FieldElement([
    0x32a25aa33e2f27, 0xc1e049e27ca1d2, 0x055ca94c3f707a, 0x3b937942010b7b,
    0xa544de3d5a86aa, 0x9c66da5556a044, 0x000cea338ec515,
]);

pub(crate) const PSI_K_CX: FieldElement = FieldElement([
    0x96e486758a1811, 0x543e8561d5c11c, 0x4b0fc9113e6366, 0x8680210ae5efbb,
    0xf7002699941307, 0x9086bfcb02eef7, 0x001291e6855919,
]);

pub(crate) const PSI_K_CY: Fp2Element = Fp2Element {
    c0: FieldElement([
        0xcc5da55cc17b84, 0x3e1e6771835de7, 0x9b9a07a9e4ae31, 0xb7f1997d662557,
        0xa667f9271cc4da, 0x4a3370c65115fe, 0x000d16de5b746a,
    ]),
    c1: FieldElement([
        0x32a25aa33e2f27, 0xc1e049e27ca1d2, 0x055ca94c3f707a, 0x3b937942010b7b,
        0xa544de3d5a86aa, 0x9c66da5556a044, 0x000cea338ec515,
    ]),
};

pub(crate) const BASE2_X: Fp2Element = Fp2Element {
    c0: FieldElement([
        0xc5a202941c0fee, 0x26ce4cde1b04b6, 0x4a219195157db3, 0xde9cf541e44747,
        0x3ff629636faf0e, 0x32e38fe202a631, 0x000557cadb2fc2,
    ]),
    c1: FieldElement([
        0x6c759e242f5b1c, 0x9e9da8f0c3d4b2, 0xbcc792a6660535, 0xa44acea25cb094,
        0xad26639a900f31, 0x04184058607cde, 0x0019720014beff,
    ]),
};

pub(crate) const BASE2_Y: Fp2Element = Fp2Element {
    c0: FieldElement([
        0x0ff860494df4a9, 0x1f64bff85a4dd1, 0x8538ee8ba4e39e, 0x4bb0022ae2914f,
        0xab4286f9616fd5, 0x64045c1f2f619e, 0x0001f834eb615b,
    ]),
    c1: FieldElement([
        0x6992df64d4b231, 0x0ab9939ddccb8f, 0xb2db92d2b79aeb, 0x8dfa3f07bde2bb,
        0x9255c38291272d, 0xc3351c91e80995, 0x00194e00a962a6,
    ]),
};

pub(crate) const BASE2_SHIFT_X: Fp2Element = Fp2Element {
    c0: FieldElement([
        0x2a5349746ec3ac, 0xda1edcef01a2b7, 0xd356ffcbad8b2e, 0x105d5bb51d632a,
        0x453dd845f23482, 0x1a3516ca4ec8db, 0x0018db7bedec1f,
    ]),
    c1: FieldElement([
        0xe0bda5c062ee80, 0x416203dc0af1bc, 0xe5a6562d46839d, 0xaadd2f08a28687,
        0x47d3967fdccf20, 0xb10e96e857eaac, 0x000514d5f1f4d7,
    ]),
};

pub(crate) const BASE2_SHIFT_Y: Fp2Element = Fp2Element {
    c0: FieldElement([
        0x65f0cd4794f48a, 0x8432bc3ed2b761, 0x73494ef14b8216, 0x6459285827e4a5,
        0x37b77d8bde79e0, 0xedd52c18c370c1, 0x0011d3d5ec720d,
    ]),
    c1: FieldElement([
        0x4aa98ca9d7b6e2, 0x5af744edfbd064, 0xabb36b19f201ed, 0xbc66ee9f4cd0cb,
        0x83dbc0f73a58a4, 0xe0854448b76cce, 0x00064d81f34e59,
    ]),
};


/// The auxiliary-curve coefficient a = 240i as a full Fp² element, for
/// the unified-addition doubling fallback.
const ISO2_A: Fp2Element = Fp2Element::new(FieldElement::ZERO, ISO2_A_SC);

/// Big-endian bytes of −z = 0xd201000000010000, the multiexp fold scalar
/// for the ψ-based chain.
const MZ_BYTES: [u8; 8] = [0xd2, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00];

/// Fixed subgroup base point G₂' and its 2^64 multiple.
const BASE2: G2Point = JacobianPoint::from_affine(BASE2_X, BASE2_Y);
const BASE2_SHIFT: G2Point = JacobianPoint::from_affine(BASE2_SHIFT_X, BASE2_SHIFT_Y);

/// Simplified SWU map onto the auxiliary curve, constant time.
///
/// The only exceptional input is u = 0 (−1/ξ is a non-square, so
/// ξ²u⁴ + ξu² = 0 has no other solutions); it is patched by swapping in
/// the denominator ξ·a.
fn map_to_iso_curve(u: &Fp2Element) -> G2Point {
    let u2 = u.square(); //               u^2                      v4, w3
    let xiu2 = u2.mul(&SWU_XI); //        xi u^2                   v4, w3
    let xi2u4 = xiu2.square(); //         xi^2 u^4                 v4, w3
    let t = xi2u4.add(&xiu2); //          xi^2 u^4 + xi u^2        v8, w6
    let num = t
        .add_scalar(&FieldElement::ONE) // xi^2 u^4 + xi u^2 + 1   v10, w8
        .mul(&ISO2_B); //                 b (...)                  v4, w3
    let den0 = t.neg(3).mul_scalar_i(&ISO2_A_SC); // -a (...)      v2, w2
    let xia = SWU_XI.mul_scalar_i(&ISO2_A_SC); //  xi a            v2, w2

    let den0 = den0.reduce(); //          reduce before zero test  v2, w1
    let den_zero = den0.is_zero();
    let den = Fp2Element::conditional_select(&den0, &xia, den_zero); // v4, w3

    // (num^3 + a num den^2 + b den^3) / den^3
    let den2 = den.square(); //           den^2                    v4, w3
    let a_nd2 = num.mul(&den2).mul_scalar_i(&ISO2_A_SC); //        v2, w2
    let den3 = den2.mul(&den); //         V = den^3                v4, w3
    let b_d3 = den3.mul(&ISO2_B); //      b den^3                  v4, w3
    let num3 = num.square().mul(&num); // num^3                    v4, w3
    let gnum = a_nd2.add(&b_d3).add(&num3); // U                   v12, w9

    let (x0_good, cand) = Fp2Element::sqrt_ratio(&gnum, &den3);

    let u_neg = u.is_negative();
    let cand_neg = cand.neg(2); //        -sqrtCand                v4, w4

    // the g(x0)-nonsquare case: x1 = xi u^2 x0
    let x_bad = num.mul(&xiu2); //        xi u^2 num               v4, w3
    let gnum1 = xi2u4.mul(&gnum).mul(&xiu2); // X1(u) V = xi^3 u^6 U
    let u3cand = u2.mul(&cand).mul(u); // u^3 sqrtCand             v4, w3

    // y1 = eta_j u^3 sqrtCand for exactly one of the four eta roots;
    // all four probes run and the match is kept by bitmask selection.
    let mut y_bad = u3cand;
    for probe in 0..4u8 {
        let cnd = match probe {
            0 => u3cand.mul_scalar(&SWU_ETA01),
            1 => u3cand.mul_scalar_i(&SWU_ETA01),
            2 => u3cand.mul(&SWU_ETA23[0]),
            _ => u3cand.mul(&SWU_ETA23[1]),
        };
        let hit = cnd.square().mul(&den3).ct_eq(&gnum1);
        y_bad = Fp2Element::conditional_select(&y_bad, &cnd, hit);
    }

    let mut y = Fp2Element::conditional_select(&cand, &cand_neg, u_neg);
    y = Fp2Element::conditional_select(&y_bad, &y, x0_good);
    let x = Fp2Element::conditional_select(&x_bad, &num, x0_good);

    JacobianPoint {
        x: x.mul(&den), //                X = num den => X/Z^2 = num/den
        y: y.mul(&den2).mul(&den), //     Y = y den^3  => Y/Z^3 = y
        z: den,
    }
}

/// Simplified SWU map onto the auxiliary curve. **Variable time.**
fn map_to_iso_curve_vartime(u: &Fp2Element) -> G2Point {
    let u2 = u.square();
    let xiu2 = u2.mul(&SWU_XI);
    let xi2u4 = xiu2.square();
    let t = xi2u4.add(&xiu2);
    let num = t.add_scalar(&FieldElement::ONE).mul(&ISO2_B);
    let mut den = t.neg(3).mul_scalar_i(&ISO2_A_SC).reduce();
    if den.is_zero().into() {
        den = SWU_XI.mul_scalar_i(&ISO2_A_SC);
    }

    let den2 = den.square();
    let den3 = den2.mul(&den);
    let gnum = num
        .mul(&den2)
        .mul_scalar_i(&ISO2_A_SC)
        .add(&den3.mul(&ISO2_B))
        .add(&num.square().mul(&num));

    let (ok, cand) = Fp2Element::sqrt_ratio(&gnum, &den3);
    let (x, y) = if ok.into() {
        let y = if u.is_negative().into() { cand.neg(2) } else { cand };
        (num, y)
    } else {
        let gnum1 = xi2u4.mul(&gnum).mul(&xiu2);
        let u3cand = u2.mul(&cand).mul(u);
        let mut y = None;
        for probe in 0..4u8 {
            let cnd = match probe {
                0 => u3cand.mul_scalar(&SWU_ETA01),
                1 => u3cand.mul_scalar_i(&SWU_ETA01),
                2 => u3cand.mul(&SWU_ETA23[0]),
                _ => u3cand.mul(&SWU_ETA23[1]),
            };
            if cnd.square().mul(&den3).ct_eq(&gnum1).into() {
                y = Some(cnd);
                break;
            }
        }
        // one eta always matches when g(x0) is a non-square
        let y = y.unwrap_or(u3cand);
        (num.mul(&xiu2), y)
    };

    JacobianPoint {
        x: x.mul(&den),
        y: y.mul(&den2).mul(&den),
        z: den,
    }
}

/// Evaluate the 3-isogeny, carrying a Jacobian point on the auxiliary
/// curve to the target curve.
pub(crate) fn iso_map(p: &G2Point) -> G2Point {
    // even powers of Z up to Z^6
    let zz = p.z.square();
    let zpow = [zz, zz.square(), zz.square().mul(&zz)];

    let yden = iso_horner(&iso::ISO2_YDEN, &zpow, &p.x, true)
        .mul(&zz)
        .mul(&p.z); //                    Yden * Z^3
    let ynum = iso_horner(&iso::ISO2_YNUM, &zpow, &p.x, false).mul(&p.y);
    let xden = iso_horner(&iso::ISO2_XDEN, &zpow, &p.x, true).mul(&zz);
    let xnum = iso_horner(&iso::ISO2_XNUM, &zpow, &p.x, false);

    let z = xden.mul(&yden);
    JacobianPoint {
        x: xnum.mul(&yden).mul(&z),
        y: ynum.mul(&xden).mul(&z.square()),
        z,
    }
}

/// Untwist–Frobenius helper for x-type values: conj(w · iwsc) · k_qi_x.
fn psi_qi_x(w: &Fp2Element) -> Fp2Element {
    w.mul(&PSI_IWSC) //                                             v4, w3
        .mul_scalar(&PSI_K_QI_X) //                                 v2, w1
        .conjugate(1) //                                            v2, w2
}

/// Untwist–Frobenius helper for y-type values.
fn psi_qi_y(w: &Fp2Element) -> Fp2Element {
    w.mul(&PSI_IWSC) //                                             v4, w3
        .sum_diff(2) //                                             v8, w7
        .mul_scalar(&PSI_K_QI_Y) //                                 v2, w1
}

/// The ψ endomorphism: untwist, Frobenius, twist, in Jacobian
/// coordinates.
pub(crate) fn psi(p: &G2Point) -> G2Point {
    let z2 = p.z.square();
    let z3 = z2.mul(&p.z);

    let xnum = psi_qi_x(&p.x).mul_scalar_i(&PSI_K_CX);
    let xden = psi_qi_x(&z2);
    let ynum = psi_qi_y(&p.y).mul(&PSI_K_CY);
    let yden = psi_qi_y(&z3);

    let z = xden.mul(&yden);
    JacobianPoint {
        x: xnum.mul(&yden).mul(&z),
        y: ynum.mul(&xden).mul(&z.square()),
        z,
    }
}

/// Budroni–Pintore cofactor clearing:
/// `(z² − z − 1)·P + (z − 1)·ψ(P) + ψ(ψ(2P))`.
pub fn clear_cofactor(p: &G2Point) -> G2Point {
    let p2 = p.double(); //               2P
    let mut acc = p.mul_by_minus_z(); //  -z P
    acc = acc.add(p); //                  (1 - z) P
    let p_neg = JacobianPoint {
        x: p.x,
        y: p.y.neg(3), // bup 3: the y of an addition result is unreduced
        z: p.z,
    };
    let psi_neg = psi(&p_neg); //         -psi(P)
    acc = acc.add(&psi_neg); //           (1 - z) P - psi(P)
    acc = acc.mul_by_minus_z(); //        (z^2 - z) P + z psi(P)
    acc = acc.add(&psi_neg); //           (z^2 - z) P + (z - 1) psi(P)
    acc = acc.add(&p_neg); //             (z^2 - z - 1) P + (z - 1) psi(P)
    let tail = psi(&psi(&p2)); //         psi(psi(2P))
    acc.add(&tail)
}

/// Map one field element to the G2 subgroup: SWU, isogeny, cofactor
/// clearing. Constant time.
pub fn swu_map(u: &Fp2Element) -> G2Point {
    clear_cofactor(&iso_map(&map_to_iso_curve(u)))
}

/// Variable-time variant of [`swu_map`]; identical output.
pub fn swu_map_vartime(u: &Fp2Element) -> G2Point {
    clear_cofactor(&iso_map(&map_to_iso_curve_vartime(u)))
}

/// Hash two field elements to the G2 subgroup. Constant time.
pub fn hash_to_g2(u1: &Fp2Element, u2: &Fp2Element) -> G2Point {
    let p = map_to_iso_curve(u1).add_unified(&map_to_iso_curve(u2), &ISO2_A);
    clear_cofactor(&iso_map(&p))
}

/// Variable-time variant of [`hash_to_g2`]; identical output.
pub fn hash_to_g2_vartime(u1: &Fp2Element, u2: &Fp2Element) -> G2Point {
    let p = map_to_iso_curve_vartime(u1).add_unified(&map_to_iso_curve_vartime(u2), &ISO2_A);
    clear_cofactor(&iso_map(&p))
}

/// Shared tail of the rG fold: the multiexp computes
/// `(z² − z)·P + z·ψ(P) + r·G₂'` from the table base
/// `(1 − z)·P − ψ(P)`, and the chain is completed by explicit adds.
fn rg_fold(p: &G2Point, r: &[u8; 16], constant_time: bool) -> G2Point {
    let p2 = p.double();
    let mut w = p.mul_by_minus_z();
    w = w.add(p); //                      (1 - z) P
    let p_neg = JacobianPoint {
        x: p.x,
        y: p.y.neg(3),
        z: p.z,
    };
    let psi_neg = psi(&p_neg);
    let w = w.add(&psi_neg); //           (1 - z) P - psi(P)

    let table = MultiexpTable::new(&w, &BASE2, &BASE2_SHIFT);
    let mut acc = if constant_time {
        table.fold(&MZ_BYTES, r)
    } else {
        table.fold_vartime(&MZ_BYTES, r)
    };
    acc = acc.add(&psi_neg); //           (z^2 - z) P + (z - 1) psi(P) + r G2'
    acc = acc.add(&p_neg); //             (z^2 - z - 1) P + ...
    acc.add(&psi(&psi(&p2)))
}

/// Map one field element to G2 and fold in `r·G₂'` for a 128-bit
/// big-endian scalar. Constant time in `u` and `r`.
pub fn swu_map_rg(u: &Fp2Element, r: &[u8; 16]) -> G2Point {
    rg_fold(&iso_map(&map_to_iso_curve(u)), r, true)
}

/// Variable-time variant of [`swu_map_rg`]; identical output.
pub fn swu_map_rg_vartime(u: &Fp2Element, r: &[u8; 16]) -> G2Point {
    rg_fold(&iso_map(&map_to_iso_curve_vartime(u)), r, false)
}

/// Try the square root of g(x/z) for a projective SvdW candidate over
/// Fp²; constant time.
fn check_fx_over_z(x: &Fp2Element, z: &Fp2Element) -> (Choice, Fp2Element) {
    let x3 = x.square().mul(x); //        x^3                      v4, w3
    let z3 = z.square().mul(z); //        z^3                      v4, w3
    let iz3 = z3.mul_by_i(2); //          i z^3                    v4, w4
    let b_z3 = z3.add(&iz3).shl(2); //    4 (1 + i) z^3            v32, w28
    let num = x3.add(&b_z3).reduce(); //  x^3 + 4(1+i) z^3         v2, w1
    Fp2Element::sqrt_ratio(&num, &z3)
}

/// Shallue–van de Woestijne map to the target curve over Fp², constant
/// time.
///
/// The exceptional inputs are those with t² + 3 + 4i = 0 (a square, so
/// they exist): x1 is patched to cx1₂ over the denominator 1, which is
/// known to give a square g(x1).
pub fn svdw_map(t: &Fp2Element) -> G2Point {
    let neg_t = t.is_negative();
    let t2 = t.square(); //               t^2                      v4, w3
    let den0 = t2.add(&SVDW_3P4I); //     t^2 + 3 + 4i             v6, w4
    let com = t2.mul_scalar(&SVDW_SQRT_M3); // t^2 sqrt(-3)        v2, w1

    let den0 = den0.reduce(); //          reduce before zero test  v2, w1
    let z0 = den0.is_zero();

    // x1: (cx1 (t^2 + 3 + 4i) - t^2 sqrt(-3)) / (t^2 + 3 + 4i)
    let x1 = den0.mul_scalar(&SVDW_CX1_2).sub(&com, 1); //         v4, w3
    let cx1 = Fp2Element::new(SVDW_CX1_2, FieldElement::ZERO);
    let x1 = Fp2Element::conditional_select(&x1, &cx1, z0);
    let den = Fp2Element::conditional_select(&den0, &Fp2Element::ONE, z0);
    let (x1g, y1) = check_fx_over_z(&x1, &den);

    // x2: (t^2 sqrt(-3) - cx2 (t^2 + 3 + 4i)) / (t^2 + 3 + 4i)
    let x2 = com.sub(&den.mul_scalar(&SVDW_CX2_2), 1); //          v4, w3
    let (x2g, y2) = check_fx_over_z(&x2, &den);

    let mut x = Fp2Element::conditional_select(&x2, &x1, x1g);
    let mut y = Fp2Element::conditional_select(&y2, &y1, x1g);
    let found = x1g | x2g;

    // x3: ((t^2 + 3 + 4i)^2 + 3 t^2) / (-3 t^2)
    let t2x3 = t2.shl(1).add(&t2); //     3 t^2                    v12, w9
    let x3 = t2x3.add(&den.square()).reduce(); //                  v2, w1
    let z3 = t2x3.neg(4).reduce(); //     -3 t^2                   v2, w1
    let (_, y3) = check_fx_over_z(&x3, &z3); // must succeed when x1, x2 fail

    x = Fp2Element::conditional_select(&x3, &x, found);
    y = Fp2Element::conditional_select(&y3, &y, found);
    let z = Fp2Element::conditional_select(&z3, &den, found);

    let y_neg = y.neg(2);
    let y = Fp2Element::conditional_select(&y, &y_neg, neg_t);

    JacobianPoint {
        x: x.mul(&z),
        y: y.mul(&z.square()).mul(&z),
        z: z.reduce(),
    }
}

/// Shallue–van de Woestijne map using field operations only, no
/// inversion. **Variable time**; identical output to [`svdw_map`].
pub fn svdw_map_vartime(t: &Fp2Element) -> G2Point {
    let neg_t: bool = t.is_negative().into();
    let t2 = t.square();
    let mut den = t2.add(&SVDW_3P4I).reduce();
    let com = t2.mul_scalar(&SVDW_SQRT_M3);

    let finish = |x: Fp2Element, y: Fp2Element, z: Fp2Element| JacobianPoint {
        x: x.mul(&z),
        y: {
            let y = if neg_t { y.neg(2) } else { y };
            y.mul(&z.square()).mul(&z)
        },
        z: z.reduce(),
    };

    let x1 = if den.is_zero().into() {
        den = Fp2Element::ONE;
        Fp2Element::new(SVDW_CX1_2, FieldElement::ZERO)
    } else {
        den.mul_scalar(&SVDW_CX1_2).sub(&com, 1)
    };
    let (ok, y) = check_fx_over_z(&x1, &den);
    if ok.into() {
        return finish(x1, y, den);
    }

    let x2 = com.sub(&den.mul_scalar(&SVDW_CX2_2), 1);
    let (ok, y) = check_fx_over_z(&x2, &den);
    if ok.into() {
        return finish(x2, y, den);
    }

    let t2x3 = t2.shl(1).add(&t2);
    let x3 = t2x3.add(&den.square()).reduce();
    let z3 = t2x3.neg(4).reduce();
    let (_, y) = check_fx_over_z(&x3, &z3);
    finish(x3, y, z3)
}

/// The candidate-selection tail shared by the inversion-based SvdW
/// variants; `inv` is `[t²(t² + 3 + 4i)]⁻¹` or zero.
fn svdw_finish_affine_vartime(
    t2: &Fp2Element,
    den: &Fp2Element,
    inv: &Fp2Element,
    neg_t: bool,
) -> G2Point {
    // t^2 sqrt(-3) / (t^2 + 3 + 4i)
    let com = t2.square().mul(inv).mul_scalar(&SVDW_SQRT_M3);

    let fix = |y: Fp2Element| if neg_t { y.neg(2).reduce() } else { y };
    let g_of = |x: &Fp2Element| x.square().mul(x).add(&CURVE_B);

    let x1 = Fp2Element::new(SVDW_CX1_2, FieldElement::ZERO).sub(&com, 1);
    let (ok, y) = Fp2Element::sqrt_ratio(&g_of(&x1), &Fp2Element::ONE);
    if ok.into() {
        return JacobianPoint::from_affine(x1.reduce(), fix(y));
    }

    let x2 = com.sub(&Fp2Element::new(SVDW_CX2_2, FieldElement::ZERO), 1);
    let (ok, y) = Fp2Element::sqrt_ratio(&g_of(&x2), &Fp2Element::ONE);
    if ok.into() {
        return JacobianPoint::from_affine(x2.reduce(), fix(y));
    }

    // x3 = -1 - (t^2 + 3 + 4i)^2 / (3 t^2)
    let x3 = den
        .square()
        .mul(den)
        .mul(inv)
        .mul_scalar(&SVDW_INV3)
        .add_scalar(&FieldElement::ONE)
        .neg(2);
    let (_, y) = Fp2Element::sqrt_ratio(&g_of(&x3), &Fp2Element::ONE);
    JacobianPoint::from_affine(x3.reduce(), fix(y))
}

/// Shallue–van de Woestijne map with one Fp² inversion, producing an
/// affine (Z = 1) point. **Variable time**; identical affine output to
/// [`svdw_map`].
pub fn svdw_map_affine_vartime(t: &Fp2Element) -> G2Point {
    let t2 = t.square();
    let den = t2.add(&SVDW_3P4I).reduce();
    let prod = t2.mul(&den).reduce();
    let inv = if prod.is_zero().into() {
        Fp2Element::ZERO
    } else {
        prod.invert_vartime()
    };
    svdw_finish_affine_vartime(&t2, &den, &inv, t.is_negative().into())
}

/// Apply the SvdW map to two inputs, sharing a single inversion between
/// them (Montgomery's trick). **Variable time.**
pub fn svdw_map2_affine_vartime(t1: &Fp2Element, t2: &Fp2Element) -> (G2Point, G2Point) {
    let t1sq = t1.square();
    let den1 = t1sq.add(&SVDW_3P4I).reduce();
    let p1 = t1sq.mul(&den1).reduce();
    let t2sq = t2.square();
    let den2 = t2sq.add(&SVDW_3P4I).reduce();
    let p2 = t2sq.mul(&den2).reduce();

    let z1: bool = p1.is_zero().into();
    let z2: bool = p2.is_zero().into();
    let (i1, i2) = if z1 && !z2 {
        (Fp2Element::ZERO, p2.invert_vartime())
    } else if !z1 && z2 {
        (p1.invert_vartime(), Fp2Element::ZERO)
    } else if !z1 && !z2 {
        let mi = p1.mul(&p2).reduce().invert_vartime();
        (p2.mul(&mi), p1.mul(&mi))
    } else {
        (Fp2Element::ZERO, Fp2Element::ZERO)
    };

    (
        svdw_finish_affine_vartime(&t1sq, &den1, &i1, t1.is_negative().into()),
        svdw_finish_affine_vartime(&t2sq, &den2, &i2, t2.is_negative().into()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_b_is_four_plus_four_i() {
        let four = FieldElement::from_u64(4);
        assert_eq!(CURVE_B, Fp2Element::new(four, four));
    }

    #[test]
    fn base_points_consistent() {
        assert!(bool::from(BASE2.is_on_curve()));
        assert!(bool::from(BASE2_SHIFT.is_on_curve()));
        let shifted = BASE2.mul_vartime(&[1, 0]);
        let (sx, sy) = shifted.to_affine_vartime().expect("not the identity");
        let (ex, ey) = BASE2_SHIFT.to_affine_vartime().expect("not the identity");
        assert_eq!(sx, ex);
        assert_eq!(sy, ey);
    }

    #[test]
    fn psi_image_stays_on_curve() {
        let p = svdw_map(&Fp2Element::new(
            FieldElement::from_u64(7),
            FieldElement::from_u64(9),
        ));
        assert!(bool::from(p.is_on_curve()));
        assert!(bool::from(psi(&p).is_on_curve()));
        assert!(bool::from(psi(&psi(&p)).is_on_curve()));
    }
}
