//! Arithmetic in Fp² = Fp[i]/(i² + 1).
//!
//! An element is a pair `c0 + c1·i` of [`FieldElement`]s sharing the
//! Montgomery limb representation. Multiplication is schoolbook over the
//! components; the real part of a product needs `sub(.., 1)` because each
//! half-product comes out of the Montgomery tail with one unit of
//! headroom.

use crate::arithmetic::{FieldCore, fp::FieldElement};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// (p² - 9) / 16, the Fp² divsqrt exponent.
pub(crate) const P2M9_OVER_16: [u64; 12] = [
    0xb26aa00001c718e3, 0xd7ced6b1d76382ea, 0x3162c338362113cf,
    0x966bf91ed3e71b74, 0xb292e85a87091a04, 0x11d68619c86185c7,
    0xef53149330978ef0, 0x050a62cfd16ddca6, 0x466e59e49349e8bd,
    0x9e2dc90e50e7046b, 0x74bd278eaa22f25e, 0x002a437a4b8c35fc,
];

// The four candidate corrections for the 16th-root divsqrt candidate:
// 1, i, and the two roots below, whose squares are -i and i. Stored in
// Montgomery form like every other constant.
const SQRT_ROOT3: Fp2Element = Fp2Element {
    c0: FieldElement([
        0x32a25aa33e2f27, 0xc1e049e27ca1d2, 0x055ca94c3f707a, 0x3b937942010b7b,
        0xa544de3d5a86aa, 0x9c66da5556a044, 0x000cea338ec515,
    ]),
    c1: FieldElement([
        0x32a25aa33e2f27, 0xc1e049e27ca1d2, 0x055ca94c3f707a, 0x3b937942010b7b,
        0xa544de3d5a86aa, 0x9c66da5556a044, 0x000cea338ec515,
    ]),
};
const SQRT_ROOT4: Fp2Element = Fp2Element {
    c0: FieldElement([
        0x32a25aa33e2f27, 0xc1e049e27ca1d2, 0x055ca94c3f707a, 0x3b937942010b7b,
        0xa544de3d5a86aa, 0x9c66da5556a044, 0x000cea338ec515,
    ]),
    c1: FieldElement([
        0xcc5da55cc17b84, 0x3e1e6771835de7, 0x9b9a07a9e4ae31, 0xb7f1997d662557,
        0xa667f9271cc4da, 0x4a3370c65115fe, 0x000d16de5b746a,
    ]),
};

/// An element of Fp², components in Montgomery form.
#[derive(Clone, Copy, Debug)]
pub struct Fp2Element {
    /// Real component.
    pub c0: FieldElement,
    /// Coefficient of i.
    pub c1: FieldElement,
}

impl Fp2Element {
    /// Additive identity.
    pub const ZERO: Self = Self {
        c0: FieldElement::ZERO,
        c1: FieldElement::ZERO,
    };
    /// Multiplicative identity.
    pub const ONE: Self = Self {
        c0: FieldElement::ONE,
        c1: FieldElement::ZERO,
    };

    /// Build from components.
    pub const fn new(c0: FieldElement, c1: FieldElement) -> Self {
        Self { c0, c1 }
    }

    /// Componentwise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Componentwise `self + (p << bup) - rhs`.
    pub fn sub(&self, rhs: &Self, bup: u32) -> Self {
        Self {
            c0: self.c0.sub(&rhs.c0, bup),
            c1: self.c1.sub(&rhs.c1, bup),
        }
    }

    /// Componentwise negation.
    pub fn neg(&self, bup: u32) -> Self {
        Self {
            c0: self.c0.neg(bup),
            c1: self.c1.neg(bup),
        }
    }

    /// Componentwise left shift.
    pub fn shl(&self, k: u32) -> Self {
        Self {
            c0: self.c0.shl(k),
            c1: self.c1.shl(k),
        }
    }

    /// Schoolbook product `(s + ti)(s' + t'i) = (ss' - tt') + (st' + ts')i`.
    pub fn mul(&self, rhs: &Self) -> Self {
        let ss = self.c0.mul(&rhs.c0);
        let tt = self.c1.mul(&rhs.c1);
        let st = self.c0.mul(&rhs.c1);
        let ts = self.c1.mul(&rhs.c0);
        Self {
            c0: ss.sub(&tt, 1), //                                  v = 4   w = 3
            c1: st.add(&ts),    //                                  v = 4   w = 2
        }
    }

    /// `(s + ti)^2 = (s^2 - t^2) + 2st·i`.
    pub fn square(&self) -> Self {
        let s2 = self.c0.square();
        let t2 = self.c1.square();
        let st = self.c0.mul(&self.c1);
        Self {
            c0: s2.sub(&t2, 1), //                                  v = 4   w = 3
            c1: st.shl(1),      //                                  v = 4   w = 2
        }
    }

    /// Multiply by `i`: `(s + ti)·i = -t + si`, as swap-then-negate.
    pub fn mul_by_i(&self, bup: u32) -> Self {
        Self {
            c0: self.c1.neg(bup),
            c1: self.c0,
        }
    }

    /// Multiply both components by an Fp scalar.
    pub fn mul_scalar(&self, k: &FieldElement) -> Self {
        Self {
            c0: self.c0.mul(k),
            c1: self.c1.mul(k),
        }
    }

    /// Multiply by `k·i` for an Fp scalar `k`.
    pub fn mul_scalar_i(&self, k: &FieldElement) -> Self {
        Self {
            c0: self.c1.mul(k).neg(1),
            c1: self.c0.mul(k),
        }
    }

    /// Add an Fp scalar to the real component.
    pub fn add_scalar(&self, k: &FieldElement) -> Self {
        Self {
            c0: self.c0.add(k),
            c1: self.c1,
        }
    }

    /// Negate the coefficient of i (the Frobenius map on Fp²).
    pub fn conjugate(&self, bup: u32) -> Self {
        Self {
            c0: self.c0,
            c1: self.c1.neg(bup),
        }
    }

    /// `(s + t) + (s - t)i`, used by the untwist-Frobenius map.
    pub fn sum_diff(&self, bup: u32) -> Self {
        Self {
            c0: self.c0.add(&self.c1),
            c1: self.c0.sub(&self.c1, bup),
        }
    }

    /// Bring both components back to the standard envelope.
    pub fn reduce(&self) -> Self {
        Self {
            c0: self.c0.reduce(),
            c1: self.c1.reduce(),
        }
    }

    /// Constant-time zero test; no component short-circuit.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// The hash-to-curve sgn0: the sign of the real component, falling
    /// back to the imaginary component when the real one is zero.
    pub fn is_negative(&self) -> Choice {
        Choice::conditional_select(
            &self.c0.is_negative(),
            &self.c1.is_negative(),
            self.c0.is_zero(),
        )
    }

    /// `self^exp` for a little-endian u64 exponent; variable time in the
    /// exponent only (all call sites use fixed public exponents).
    pub fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        let mut i = exp.len();
        while i > 0 {
            i -= 1;
            let mut j = 64;
            while j > 0 {
                j -= 1;
                res = res.square();
                if ((exp[i] >> j) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Inversion via the conjugate over the norm; zero maps to zero.
    /// **Variable time** (fixed public exponent in the Fp inversion).
    pub fn invert_vartime(&self) -> Self {
        let norm = self.c0.square().add(&self.c1.square()).reduce();
        let ni = norm.invert_vartime();
        Self {
            c0: self.c0.mul(&ni),
            c1: self.c1.mul(&ni).neg(1),
        }
    }

    /// Check one root candidate: keep it in `out` when `cand^2·v = u`.
    fn sqrt_ratio_probe(out: &mut Self, cand: &Self, u: &Self, v: &Self) -> Choice {
        let work = cand.square().mul(v);
        let eq = work.ct_eq(u);
        *out = Self::conditional_select(out, cand, eq);
        eq
    }

    /// Square root of the ratio `u / v` in Fp² without inverting `v`.
    ///
    /// Computes `uv^7(uv^15)^((p²-9)/16)`, one of four candidate 16th
    /// roots differing by factors {1, i, √i, √-i}; all four are probed and
    /// the match is kept by constant-time selection. Returns true iff a
    /// probe succeeded; the numeric result is the bare candidate
    /// otherwise.
    pub fn sqrt_ratio(u: &Self, v: &Self) -> (Choice, Self) {
        let v2 = v.square();
        let v3 = v2.mul(v);
        let v4 = v2.square();
        let v7 = v4.mul(&v3);
        let v8 = v4.square();
        let uv7 = u.mul(&v7);
        let uv15 = uv7.mul(&v8);

        let cand = uv15.pow_vartime(&P2M9_OVER_16).mul(&uv7);

        let mut out = cand;
        let mut found = Self::sqrt_ratio_probe(&mut out, &cand, u, v);
        found |= Self::sqrt_ratio_probe(&mut out, &cand.mul_by_i(2), u, v);
        found |= Self::sqrt_ratio_probe(&mut out, &cand.mul(&SQRT_ROOT3), u, v);
        found |= Self::sqrt_ratio_probe(&mut out, &cand.mul(&SQRT_ROOT4), u, v);
        (found, out)
    }

    /// Canonical serialization: big-endian c0 then big-endian c1.
    pub fn to_bytes(&self) -> [u8; 96] {
        let mut out = [0u8; 96];
        out[..48].copy_from_slice(&self.c0.to_bytes());
        out[48..].copy_from_slice(&self.c1.to_bytes());
        out
    }

    /// Parse the serialization produced by [`Fp2Element::to_bytes`].
    pub fn from_bytes(bytes: &[u8; 96]) -> subtle::CtOption<Self> {
        let mut b0 = [0u8; 48];
        let mut b1 = [0u8; 48];
        b0.copy_from_slice(&bytes[..48]);
        b1.copy_from_slice(&bytes[48..]);
        FieldElement::from_bytes(&b0)
            .and_then(|c0| FieldElement::from_bytes(&b1).map(|c1| Self { c0, c1 }))
    }
}

impl Default for Fp2Element {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ConditionallySelectable for Fp2Element {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            c0: FieldElement::conditional_select(&a.c0, &b.c0, choice),
            c1: FieldElement::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl ConstantTimeEq for Fp2Element {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2Element {}
impl PartialEq for Fp2Element {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp2Element {}

impl FieldCore for Fp2Element {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const CURVE_B: Self = crate::g2::CURVE_B;

    fn add(&self, rhs: &Self) -> Self {
        Self::add(self, rhs)
    }
    fn sub(&self, rhs: &Self, bup: u32) -> Self {
        Self::sub(self, rhs, bup)
    }
    fn neg(&self, bup: u32) -> Self {
        Self::neg(self, bup)
    }
    fn shl(&self, k: u32) -> Self {
        Self::shl(self, k)
    }
    fn mul(&self, rhs: &Self) -> Self {
        Self::mul(self, rhs)
    }
    fn square(&self) -> Self {
        Self::square(self)
    }
    fn reduce(&self) -> Self {
        Self::reduce(self)
    }
    fn is_zero(&self) -> Choice {
        Self::is_zero(self)
    }
    fn invert_vartime(&self) -> Self {
        Self::invert_vartime(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(n: u64) -> FieldElement {
        FieldElement::from_u64(n)
    }

    #[test]
    fn complex_multiplication() {
        // (1 + 2i)(3 + 4i) = 3 - 8 + (4 + 6)i = -5 + 10i
        let a = Fp2Element::new(fe(1), fe(2));
        let b = Fp2Element::new(fe(3), fe(4));
        let c = a.mul(&b);
        assert_eq!(c.c0, fe(5).neg(1).reduce());
        assert_eq!(c.c1, fe(10));
        assert_eq!(a.square(), a.mul(&a));
    }

    #[test]
    fn i_squares_to_minus_one() {
        let i = Fp2Element::new(FieldElement::ZERO, FieldElement::ONE);
        let m1 = Fp2Element::ONE.neg(1);
        assert_eq!(i.square(), m1.reduce());
        assert_eq!(Fp2Element::ONE.mul_by_i(1), i);
    }

    #[test]
    fn inversion() {
        let a = Fp2Element::new(fe(7), fe(11));
        assert_eq!(a.mul(&a.invert_vartime()), Fp2Element::ONE);
    }

    #[test]
    fn stored_roots_square_to_plus_minus_i() {
        let i = Fp2Element::new(FieldElement::ZERO, FieldElement::ONE);
        let mi = i.neg(1);
        assert_eq!(SQRT_ROOT3.square(), mi.reduce());
        assert_eq!(SQRT_ROOT4.square(), i);
    }

    #[test]
    fn sqrt_ratio_soundness() {
        // (3 + 5i)^2 / (2 + i)  against u = (3+5i)^2, v = (2+i)
        let root = Fp2Element::new(fe(3), fe(5));
        let v = Fp2Element::new(fe(2), fe(1));
        let u = root.square().mul(&v).reduce();
        let (ok, y) = Fp2Element::sqrt_ratio(&u, &v);
        assert!(bool::from(ok));
        assert_eq!(y.square().mul(&v), u);
    }

    #[test]
    fn sqrt_ratio_rejects_nonresidue() {
        // 1 + i is a quadratic non-residue in Fp².
        let xi = Fp2Element::new(FieldElement::ONE, FieldElement::ONE);
        let (ok, _) = Fp2Element::sqrt_ratio(&xi, &Fp2Element::ONE);
        assert!(!bool::from(ok));
    }

    #[test]
    fn sign_rule() {
        let one = Fp2Element::ONE;
        assert!(!bool::from(one.is_negative()));
        assert!(bool::from(one.neg(1).is_negative()));
        // zero real part: the sign comes from the imaginary part.
        let i = Fp2Element::new(FieldElement::ZERO, FieldElement::ONE);
        assert!(!bool::from(i.is_negative()));
        assert!(bool::from(i.neg(1).is_negative()));
    }

    #[test]
    fn sum_diff() {
        let a = Fp2Element::new(fe(9), fe(4));
        let s = a.sum_diff(1);
        assert_eq!(s.c0, fe(13));
        assert_eq!(s.c1, fe(5));
    }
}
