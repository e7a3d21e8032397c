//! Jacobian-coordinate point arithmetic, generic over the coordinate
//! field so G1 and G2 share one implementation.
//!
//! The formulas are dbl-2009-l and add-2007-bl from the EFD
//! (<https://www.hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html>),
//! specialized to a = 0. Every step carries its `(v, w)` bound
//! annotation; `reduce` calls are scheduled for the Fp² worst case, which
//! also covers Fp with room to spare.

use crate::arithmetic::FieldCore;
use subtle::{Choice, ConditionallySelectable};

/// A point in Jacobian coordinates: `(X, Y, Z)` represents the affine
/// point `(X/Z², Y/Z³)`; `Z = 0` is the point at infinity.
#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint<F: FieldCore> {
    /// X coordinate.
    pub x: F,
    /// Y coordinate.
    pub y: F,
    /// Z coordinate.
    pub z: F,
}

impl<F: FieldCore> JacobianPoint<F> {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: F::ZERO,
        y: F::ONE,
        z: F::ZERO,
    };

    /// Build from affine coordinates.
    pub const fn from_affine(x: F, y: F) -> Self {
        Self { x, y, z: F::ONE }
    }

    /// Constant-time identity test.
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Point doubling (dbl-2009-l, a = 0). `self.y` may arrive
    /// unreduced from a preceding addition.
    pub fn double(&self) -> Self {
        let a = self.x.square(); //          A = X^2                v = 4   w = 3
        let b = self.y.square(); //          B = Y^2                v = 4   w = 3
        let c = b.square(); //               C = B^2                v = 4   w = 3

        let mut d = self.x.add(&b); //       X + B                  v = 8   w = 6
        d = d.square(); //                   (X + B)^2              v = 4   w = 3
        let ac = a.add(&c); //               A + C                  v = 8   w = 6
        d = d.sub(&ac, 3); //                (X + B)^2 - A - C      v = 12  w = 11
        d = d.shl(1); //                     D = 2 ((X+B)^2 - A -C) v = 24  w = 22

        let e = a.shl(1).add(&a); //         E = 3 * A              v = 12  w = 9
        let f = e.square(); //               F = E^2                v = 4   w = 3

        let mut x3 = f.sub(&d.shl(1), 6); // F - 2 * D              v = 68  w = 67
        x3 = x3.reduce(); //                 X3 = F - 2 * D         v = 2   w = 1

        let z3 = self.z.shl(1).mul(&self.y); // Z3 = 2 * Z * Y      v = 4   w = 3

        let c8 = c.shl(3); //                8 * C                  v = 32  w = 24
        let mut y3 = d.sub(&x3, 1); //       D - X3                 v = 26  w = 24
        y3 = y3.reduce(); //                 (w24 * w9 is too big)  v = 2   w = 1
        y3 = y3.mul(&e); //                  E * (D - X3)           v = 4   w = 3
        y3 = y3.sub(&c8, 5); //              E * (D - X3) - 8 * C   v = 36  w = 35
        y3 = y3.reduce(); //                 Y3                     v = 2   w = 1

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point addition (add-2007-bl). The chord construction never uses
    /// the curve coefficient, so this is valid on the target and the
    /// auxiliary curves alike.
    ///
    /// Not complete: the inputs must be distinct and nonzero (opposite
    /// inputs do yield the identity correctly), which every chain and
    /// table in this crate guarantees by construction. Use
    /// [`JacobianPoint::add_unified`] where that cannot be assumed. The
    /// output `y` is left unreduced; the formulas accept it as input.
    pub fn add(&self, rhs: &Self) -> Self {
        let z1z1 = self.z.square(); //       Z1Z1 = Z1^2            v = 4   w = 3
        let z2z2 = rhs.z.square(); //        Z2Z2 = Z2^2            v = 4   w = 3
        let u1 = z2z2.mul(&self.x); //       U1 = X1 * Z2Z2         v = 4   w = 3
        let u2 = z1z1.mul(&rhs.x); //        U2 = X2 * Z1Z1         v = 4   w = 3
        let s1 = self.y.mul(&rhs.z).mul(&z2z2); // S1 = Y1 Z2 Z2Z2  v = 4   w = 3
        let s2 = rhs.y.mul(&self.z).mul(&z1z1); // S2 = Y2 Z1 Z1Z1  v = 4   w = 3

        let h = u2.sub(&u1, 2); //           H = U2 - U1            v = 8   w = 7

        let mut i = h.shl(1); //             2 * H                  v = 16  w = 14
        i = i.reduce(); //                   (w14 * w14 too big)    v = 2   w = 1
        i = i.square(); //                   I = (2 * H)^2          v = 4   w = 3

        let j = i.mul(&h); //                J = H * I              v = 4   w = 3

        let mut r = s2.sub(&s1, 2); //       S2 - S1                v = 8   w = 7
        r = r.shl(1); //                     r = 2 * (S2 - S1)      v = 16  w = 14
        r = r.reduce(); //                                          v = 2   w = 1

        let v = u1.mul(&i); //               V = U1 * I             v = 4   w = 3

        let mut x3 = v.shl(1); //            2 * V                  v = 8   w = 6
        x3 = x3.add(&j); //                  J + 2 * V              v = 12  w = 9
        x3 = r.square().sub(&x3, 4); //      r^2 - J - 2 * V        v = 20  w = 19
        x3 = x3.reduce(); //                 X3                     v = 2   w = 1

        let s1j = s1.shl(1).mul(&j); //      2 * S1 * J             v = 4   w = 3
        let mut y3 = v.sub(&x3, 1); //       V - X3                 v = 6   w = 5
        y3 = y3.mul(&r); //                  r * (V - X3)           v = 4   w = 3
        y3 = y3.sub(&s1j, 2); //             r (V - X3) - 2 S1 J    v = 8   w = 7

        let mut z3 = self.z.add(&rhs.z); //  Z1 + Z2                v = 8   w = 6
        z3 = z3.square(); //                 (Z1 + Z2)^2            v = 4   w = 3
        let zz = z1z1.add(&z2z2); //         Z1Z1 + Z2Z2            v = 8   w = 6
        z3 = z3.sub(&zz, 3); //              (Z1+Z2)^2 - Z1Z1 -Z2Z2 v = 12  w = 11
        z3 = z3.mul(&h); //                  Z3 = 2 * Z1 * Z2 * H   v = 4   w = 3

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point doubling on a curve with arbitrary coefficient `a`
    /// (dbl-2007-bl): `M = 3X² + a·Z⁴` replaces the a = 0 shortcut.
    ///
    /// The addition formula is chord-based and works on any short
    /// Weierstrass curve, so this is only needed where a doubling can
    /// occur on the auxiliary (a ≠ 0) curves.
    pub(crate) fn double_generic(&self, a: &F) -> Self {
        let xx = self.x.square(); //         XX = X^2               v = 4   w = 3
        let yy = self.y.square(); //         YY = Y^2               v = 4   w = 3
        let yyyy = yy.square(); //           YYYY = YY^2            v = 4   w = 3
        let zz = self.z.square(); //         ZZ = Z^2               v = 4   w = 3

        let mut s = self.x.add(&yy); //      X + YY                 v = 8   w = 6
        s = s.square(); //                   (X + YY)^2             v = 4   w = 3
        let xy4 = xx.add(&yyyy); //          XX + YYYY              v = 8   w = 6
        s = s.sub(&xy4, 3); //               (X+YY)^2 - XX - YYYY   v = 12  w = 11
        s = s.shl(1); //                     S = 2 (...)            v = 24  w = 22

        let azz = zz.square().mul(a); //     a ZZ^2                 v = 4   w = 3
        let mut m = xx.shl(1).add(&xx); //   3 XX                   v = 12  w = 9
        m = m.add(&azz); //                  M = 3 XX + a ZZ^2      v = 16  w = 12
        m = m.reduce(); //                   (w12 * w12 too big)    v = 2   w = 1

        let mut x3 = m.square(); //          M^2                    v = 4   w = 3
        x3 = x3.sub(&s.shl(1), 6); //        T = M^2 - 2 S          v = 52  w = 47
        x3 = x3.reduce(); //                 X3 = T                 v = 2   w = 1

        let mut z3 = self.y.add(&self.z); // Y + Z                  v = 8   w = 6
        z3 = z3.square(); //                 (Y + Z)^2              v = 4   w = 3
        let yz2 = yy.add(&zz); //            YY + ZZ                v = 8   w = 6
        z3 = z3.sub(&yz2, 3); //             Z3 = (Y+Z)^2 - YY - ZZ v = 12  w = 11

        let mut y3 = s.sub(&x3, 1); //       S - T                  v = 26  w = 24
        y3 = y3.reduce(); //                 (w24 * w1 next)        v = 2   w = 1
        y3 = y3.mul(&m); //                  M (S - T)              v = 4   w = 3
        y3 = y3.sub(&yyyy.shl(3), 5); //     M (S - T) - 8 YYYY     v = 36  w = 35
        y3 = y3.reduce(); //                 Y3                     v = 2   w = 1

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Addition with the exceptional cases patched by constant-time
    /// selection: identity inputs pass through and equal inputs fall back
    /// to an a-aware doubling (`a` is the curve coefficient the points
    /// live on). Used where inputs are caller-controlled, e.g. the
    /// two-input hash entry points combining map outputs on the auxiliary
    /// curves.
    pub fn add_unified(&self, rhs: &Self, a: &F) -> Self {
        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = z2z2.mul(&self.x);
        let u2 = z1z1.mul(&rhs.x);
        let s1 = self.y.mul(&rhs.z).mul(&z2z2);
        let s2 = rhs.y.mul(&self.z).mul(&z1z1);
        let h_zero = u2.sub(&u1, 2).is_zero();
        let r_zero = s2.sub(&s1, 2).is_zero();

        let added = self.add(rhs);
        let doubled = self.double_generic(a);

        let p_inf = self.is_identity();
        let q_inf = rhs.is_identity();
        let degenerate = h_zero & r_zero & !p_inf & !q_inf;

        let mut out = Self::conditional_select(&added, &doubled, degenerate);
        out = Self::conditional_select(&out, rhs, p_inf);
        out = Self::conditional_select(&out, self, q_inf);
        out
    }

    /// Multiply by 0xd201000000010000, the negated BLS parameter, with a
    /// fixed Bos-Coster window-2 addition chain: 6 adds interleaved with
    /// doubling blocks of lengths [1, 2, 3, 9, 32, 16].
    pub(crate) fn mul_by_minus_z(&self) -> Self {
        let mut acc = self.double();
        acc = acc.add(self);
        for _ in 0..2 {
            acc = acc.double();
        }
        acc = acc.add(self);
        for _ in 0..3 {
            acc = acc.double();
        }
        acc = acc.add(self);
        for _ in 0..9 {
            acc = acc.double();
        }
        acc = acc.add(self);
        for _ in 0..32 {
            acc = acc.double();
        }
        acc = acc.add(self);
        for _ in 0..16 {
            acc = acc.double();
        }
        acc
    }

    /// Check the curve equation `Y^2 = X^3 + B Z^6`; the identity
    /// passes.
    pub fn is_on_curve(&self) -> Choice {
        let y2 = self.y.square(); //                                v = 4   w = 3
        let x3 = self.x.square().mul(&self.x); //                   v = 4   w = 3
        let z3 = self.z.square().mul(&self.z);
        let bz6 = z3.square().mul(&F::CURVE_B); //                  v = 4   w = 3
        let rhs = x3.add(&bz6); //                                  v = 8   w = 6
        rhs.sub(&y2, 2).is_zero() | self.is_identity()
    }

    /// Convert to affine `(x, y)`; `None` for the identity.
    /// **Variable time** (field inversion).
    pub fn to_affine_vartime(&self) -> Option<(F, F)> {
        if self.is_identity().into() {
            return None;
        }
        let zi = self.z.reduce().invert_vartime();
        let zi2 = zi.square();
        let zi3 = zi2.mul(&zi);
        Some((self.x.mul(&zi2).reduce(), self.y.mul(&zi3).reduce()))
    }

    /// Double-and-add scalar multiplication over big-endian u64 limbs,
    /// using the unified addition so any input is safe. **Variable
    /// time**; intended for diagnostics and subgroup checks, not for
    /// secret scalars.
    pub fn mul_vartime(&self, scalar_be: &[u64]) -> Self {
        let mut acc = Self::IDENTITY;
        for limb in scalar_be {
            for j in (0..64).rev() {
                acc = acc.double();
                if (limb >> j) & 1 == 1 {
                    acc = acc.add_unified(self, &F::ZERO);
                }
            }
        }
        acc
    }
}

impl<F: FieldCore> ConditionallySelectable for JacobianPoint<F> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: F::conditional_select(&a.x, &b.x, choice),
            y: F::conditional_select(&a.y, &b.y, choice),
            z: F::conditional_select(&a.z, &b.z, choice),
        }
    }
}
