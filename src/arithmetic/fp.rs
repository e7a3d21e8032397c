//! Base field arithmetic modulo the BLS12-381 prime
//! p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab.
//!
//! Elements are 7 × 64-bit limbs carrying 56-bit digits, in Montgomery
//! form with R = 2^392. Additions, subtractions and shifts are performed
//! limbwise with no carry propagation; a digit may wrap below zero and is
//! then carried as its two's complement, with multiplication
//! sign-extending every digit into the 128-bit accumulator. The
//! Montgomery tail re-masks all digits nonnegative, so only
//! multiplication or an explicit [`FieldElement::reduce`] brings a value
//! back to the standard envelope. The borrow budgets (`bup`) on
//! subtraction keep digit magnitudes below 2^62, which leaves the
//! accumulator room for all 7 cross terms; `mul`/`square` check that
//! envelope in debug builds.

use crate::arithmetic::FieldCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

pub(crate) const NLIMBS: usize = 7;
pub(crate) const LIMB_BITS: u32 = 56;
pub(crate) const LIMB_MASK: u64 = (1 << LIMB_BITS) - 1;

const MODULUS: [u64; 7] = [
    0xfeffffffffaaab, 0xfffeb153ffffb9, 0xa0f6b0f6241eab, 0xf38512bf6730d2,
    0x4bacd764774b84, 0xe69a4b1ba7b643, 0x001a0111ea397f,
];
// 2^392 - p: adding this limbwise is subtracting p modulo 2^392.
const MODULUS_NEG: [u64; 7] = [
    0x01000000005555, 0x00014eac000046, 0x5f094f09dbe154, 0x0c7aed4098cf2d,
    0xb453289b88b47b, 0x1965b4e45849bc, 0xffe5feee15c680,
];
// -p^-1 mod 2^392
const MONTY_INV: [u64; 7] = [
    0xf3fffcfffcfffd, 0xdb92d9d113e889, 0xf0c8e30b48286a, 0x8eb2db4c16ef2e,
    0x68cf5819ecca0e, 0xfc9468b316fee2, 0xa0ceb06106feaa,
];
const P_OVER_2: [u64; 7] = [
    0xff7fffffffd555, 0xffff58a9ffffdc, 0x507b587b120f55, 0x79c2895fb39869,
    0xa5d66bb23ba5c2, 0xf34d258dd3db21, 0x000d0088f51cbf,
];
// R mod p
const MONTY_ONE: [u64; 7] = [
    0xd800000347fcb8, 0x0cde6d2002b119, 0x83a2090c7212e0, 0xda0f73e037669f,
    0x1297bb09b09b42, 0x012ca7c515d98f, 0x000577a659fcfa,
];
// R^2 mod p
const MONTY_R2: [u64; 7] = [
    0x6d1c34510370ed, 0xec45c53e243d62, 0x093317d3b1d65a, 0x5d74088b4f36a0,
    0x865d118c10ea72, 0xfd5cd507320a75, 0x000c8d4cc8a759,
];

/// (p - 3) / 4, the divsqrt exponent.
pub(crate) const PM3_OVER_4: [u64; 6] = [
    0xee7fbfffffffeaaa, 0x07aaffffac54ffff, 0xd9cc34a83dac3d89,
    0xd91dd2e13ce144af, 0x92c6e9ed90d2eb35, 0x0680447a8e5ff9a6,
];
/// p - 2, the inversion exponent.
pub(crate) const PM2: [u64; 6] = [
    0xb9feffffffffaaa9, 0x1eabfffeb153ffff, 0x6730d2a0f6b0f624,
    0x64774b84f38512bf, 0x4b1ba7b6434bacd7, 0x1a0111ea397fe69a,
];

/// An element of Fp in Montgomery form.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) [u64; 7]);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self([0; 7]);
    /// Multiplicative identity (R mod p).
    pub const ONE: Self = Self(MONTY_ONE);

    /// Number of bytes in the canonical serialization.
    pub const BYTES: usize = 48;

    /// Limbwise sum. Doubles the additive bound of its inputs.
    pub fn add(&self, rhs: &Self) -> Self {
        let mut w = [0u64; 7];
        for i in 0..NLIMBS {
            w[i] = self.0[i].wrapping_add(rhs.0[i]);
        }
        Self(w)
    }

    /// Limbwise `self + (p << bup) - rhs`.
    ///
    /// `bup` is the caller's borrow budget: `p << bup` must cover the
    /// additive bound of `rhs` so the result's value stays nonnegative.
    pub fn sub(&self, rhs: &Self, bup: u32) -> Self {
        debug_assert!(bup <= 6);
        let mut w = [0u64; 7];
        for i in 0..NLIMBS {
            w[i] = self.0[i]
                .wrapping_add(MODULUS[i] << bup)
                .wrapping_sub(rhs.0[i]);
        }
        Self(w)
    }

    /// Limbwise `(p << bup) - self`.
    pub fn neg(&self, bup: u32) -> Self {
        debug_assert!(bup <= 6);
        let mut w = [0u64; 7];
        for i in 0..NLIMBS {
            w[i] = (MODULUS[i] << bup).wrapping_sub(self.0[i]);
        }
        Self(w)
    }

    /// Limbwise left shift; grows bounds by `2^k`.
    pub fn shl(&self, k: u32) -> Self {
        let mut w = [0u64; 7];
        for i in 0..NLIMBS {
            w[i] = self.0[i] << k;
        }
        Self(w)
    }

    /// Double the element; shorthand for `shl(1)`.
    pub fn double(&self) -> Self {
        self.shl(1)
    }

    #[inline]
    fn envelope_check(x: &[u64; 7]) {
        // 7 sign-extended cross terms of 62-bit digits plus the
        // Montgomery tail stay inside the 128-bit accumulator.
        debug_assert!(
            x.iter().all(|&w| (w as i64).unsigned_abs() >> 62 == 0),
            "limb envelope exceeded"
        );
    }

    #[inline]
    fn term(a: u64, b: u64) -> i128 {
        // digits are signed: sign-extend before multiplying
        (a as i64 as i128) * (b as i64 as i128)
    }

    /// Schoolbook 7x7 multiply into 14 half-reduced limbs. The output
    /// digits are masked nonnegative.
    fn mul_wide(a: &[u64; 7], b: &[u64; 7]) -> [u64; 14] {
        Self::envelope_check(a);
        Self::envelope_check(b);
        let mut out = [0u64; 14];
        let mut acc: i128 = 0;
        for i in 0..NLIMBS {
            for j in 0..=i {
                acc += Self::term(a[j], b[i - j]);
            }
            out[i] = (acc as u64) & LIMB_MASK;
            acc >>= LIMB_BITS;
        }
        for i in NLIMBS..(2 * NLIMBS - 1) {
            for j in (i + 1 - NLIMBS)..NLIMBS {
                acc += Self::term(a[j], b[i - j]);
            }
            out[i] = (acc as u64) & LIMB_MASK;
            acc >>= LIMB_BITS;
        }
        out[2 * NLIMBS - 1] = acc as u64;
        out
    }

    /// Low half of the schoolbook product, used for the Montgomery `m`.
    fn mul_low(a: &[u64; 7], b: &[u64; 7]) -> [u64; 7] {
        let mut out = [0u64; 7];
        let mut acc: i128 = 0;
        for i in 0..NLIMBS {
            for j in 0..=i {
                acc += Self::term(a[j], b[i - j]);
            }
            out[i] = (acc as u64) & LIMB_MASK;
            acc >>= LIMB_BITS;
        }
        out
    }

    /// Symmetric squaring: off-diagonal terms doubled, diagonal once.
    fn sqr_wide(a: &[u64; 7]) -> [u64; 14] {
        Self::envelope_check(a);
        let mut out = [0u64; 14];
        let mut acc: i128 = Self::term(a[0], a[0]);
        out[0] = (acc as u64) & LIMB_MASK;
        acc >>= LIMB_BITS;
        for i in 1..NLIMBS {
            for j in 0..(i + 1) / 2 {
                acc += Self::term(a[j].wrapping_shl(1), a[i - j]);
            }
            if i % 2 == 0 {
                acc += Self::term(a[i / 2], a[i / 2]);
            }
            out[i] = (acc as u64) & LIMB_MASK;
            acc >>= LIMB_BITS;
        }
        for k in 1..(NLIMBS - 1) {
            let i = NLIMBS + k - 1;
            for j in 0..(NLIMBS - k) / 2 {
                acc += Self::term(a[j + k].wrapping_shl(1), a[i - j - k]);
            }
            if i % 2 == 0 {
                acc += Self::term(a[i / 2], a[i / 2]);
            }
            out[i] = (acc as u64) & LIMB_MASK;
            acc >>= LIMB_BITS;
        }
        acc += Self::term(a[NLIMBS - 1], a[NLIMBS - 1]);
        out[2 * NLIMBS - 2] = (acc as u64) & LIMB_MASK;
        out[2 * NLIMBS - 1] = (acc >> LIMB_BITS) as u64;
        out
    }

    /// Montgomery tail: T -> (T + (T p' mod R) p) / R.
    ///
    /// Output limbs are masked and the value lies below 2p.
    fn montgomery_reduce(t: &[u64; 14]) -> Self {
        let mut lo = [0u64; 7];
        lo.copy_from_slice(&t[..7]);
        let m = Self::mul_low(&lo, &MONTY_INV);
        let mp = Self::mul_wide(&m, &MODULUS);

        let mut c: u64 = 0;
        for i in 0..NLIMBS {
            let s = t[i] + mp[i] + c;
            c = s >> LIMB_BITS;
        }
        let mut out = [0u64; 7];
        for i in 0..NLIMBS {
            let s = t[NLIMBS + i] + mp[NLIMBS + i] + c;
            c = s >> LIMB_BITS;
            out[i] = s & LIMB_MASK;
        }
        Self(out)
    }

    /// Montgomery product.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::montgomery_reduce(&Self::mul_wide(&self.0, &rhs.0))
    }

    /// Montgomery square.
    pub fn square(&self) -> Self {
        Self::montgomery_reduce(&Self::sqr_wide(&self.0))
    }

    /// Reduce a loosely bounded value back to the standard envelope by
    /// multiplying with the Montgomery one; the residue class is
    /// unchanged.
    pub fn reduce(&self) -> Self {
        self.mul(&Self::ONE)
    }

    /// Constant-time comparison of masked-limb values via running
    /// `gt`/`eq` flags, most significant limb first. Returns `(gt, eq)`.
    fn ct_cmp(a: &[u64; 7], b: &[u64; 7]) -> (Choice, Choice) {
        let mut gt = Choice::from(0u8);
        let mut eq = Choice::from(1u8);
        for i in (0..NLIMBS).rev() {
            // b - a wraps iff a > b; both limbs are 56-bit masked.
            let a_gt = Choice::from(((b[i].wrapping_sub(a[i]) >> 63) & 1) as u8);
            gt |= eq & a_gt;
            eq &= a[i].ct_eq(&b[i]);
        }
        (gt, eq)
    }

    /// Conditionally subtract p from a masked-limb value in [0, 2p).
    fn condsub_p(w: &[u64; 7]) -> [u64; 7] {
        let (gt, eq) = Self::ct_cmp(w, &MODULUS);
        let geq = gt | eq;
        let mut out = [0u64; 7];
        let mut c: u64 = 0;
        for i in 0..NLIMBS {
            let s = w[i] + MODULUS_NEG[i] + c;
            c = s >> LIMB_BITS;
            out[i] = u64::conditional_select(&w[i], &(s & LIMB_MASK), geq);
        }
        out
    }

    /// Fully canonical plain-integer limbs in [0, p), leaving Montgomery
    /// form. The input digits must be nonnegative (any Montgomery product
    /// output qualifies).
    fn from_montgomery(&self) -> [u64; 7] {
        let m = Self::mul_low(&self.0, &MONTY_INV);
        let mp = Self::mul_wide(&m, &MODULUS);
        let mut c: u64 = 0;
        for i in 0..NLIMBS {
            let s = self.0[i] + mp[i] + c;
            c = s >> LIMB_BITS;
        }
        let mut out = [0u64; 7];
        for i in 0..NLIMBS {
            let s = mp[NLIMBS + i] + c;
            c = s >> LIMB_BITS;
            out[i] = s & LIMB_MASK;
        }
        Self::condsub_p(&out)
    }

    /// Canonical Montgomery-form limbs in [0, p); accepts any envelope
    /// input.
    pub(crate) fn canonicalize(&self) -> [u64; 7] {
        Self::condsub_p(&self.reduce().0)
    }

    /// Constant-time test for zero; accepts any envelope input.
    pub fn is_zero(&self) -> Choice {
        let w = self.canonicalize();
        let mut acc = 0u64;
        for i in 0..NLIMBS {
            acc |= w[i];
        }
        acc.ct_eq(&0)
    }

    /// Sign in the hash-to-curve sense: `true` iff the canonical value
    /// exceeds (p - 1) / 2. The digits of `self` must be nonnegative
    /// (standard-envelope values qualify).
    pub fn is_negative(&self) -> Choice {
        let w = self.from_montgomery();
        let (gt, _) = Self::ct_cmp(&w, &P_OVER_2);
        gt
    }

    /// `{-1, 0, 1}` comparison of canonical values. **Variable time.**
    pub fn cmp_vartime(&self, rhs: &Self) -> i32 {
        let a = self.reduce().from_montgomery();
        let b = rhs.reduce().from_montgomery();
        for i in (0..NLIMBS).rev() {
            if a[i] > b[i] {
                return 1;
            }
            if a[i] < b[i] {
                return -1;
            }
        }
        0
    }

    /// `self^exp` for a little-endian u64 exponent.
    ///
    /// **This operation is variable time with respect to the exponent.**
    ///
    /// If the exponent is fixed, this operation is effectively constant
    /// time; every call site in this crate uses a fixed public exponent.
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

    /// Inversion by Fermat; zero maps to zero. **Variable time** (fixed
    /// public exponent).
    pub fn invert_vartime(&self) -> Self {
        self.pow_vartime(&PM2)
    }

    /// Square root of the ratio `u / v` without inverting `v`.
    ///
    /// Computes `uv(uv^3)^((p-3)/4)`, which is `sqrt(u/v)` exactly when
    /// `u/v` is a quadratic residue; the returned [`Choice`] reports
    /// whether the candidate verified. The numeric result is defined
    /// either way.
    pub fn sqrt_ratio(u: &Self, v: &Self) -> (Choice, Self) {
        let uv = u.mul(v);
        let uv3 = v.square().mul(&uv);
        let cand = uv3.pow_vartime(&PM3_OVER_4).mul(&uv);

        let ok = cand.square().mul(v).ct_eq(u);
        (ok, cand)
    }

    /// Canonical big-endian serialization.
    ///
    /// Each 56-bit limb maps onto exactly seven bytes; the top limb holds
    /// the remaining 45 bits.
    pub fn to_bytes(&self) -> [u8; 48] {
        // reduce first so loosely bounded values serialize correctly
        let w = self.reduce().from_montgomery();
        let mut bytes = [0u8; 48];
        for i in 0..6 {
            let off = 48 - 7 * (i + 1);
            bytes[off..off + 7].copy_from_slice(&w[i].to_be_bytes()[1..]);
        }
        bytes[..6].copy_from_slice(&w[6].to_be_bytes()[2..]);
        bytes
    }

    /// Parse a canonical big-endian byte string; fails on values >= p.
    pub fn from_bytes(bytes: &[u8; 48]) -> CtOption<Self> {
        let mut w = [0u64; 7];
        for i in 0..6 {
            let off = 48 - 7 * (i + 1);
            let mut be = [0u8; 8];
            be[1..].copy_from_slice(&bytes[off..off + 7]);
            w[i] = u64::from_be_bytes(be);
        }
        let mut be = [0u8; 8];
        be[2..].copy_from_slice(&bytes[..6]);
        w[6] = u64::from_be_bytes(be);

        let (gt, eq) = Self::ct_cmp(&w, &MODULUS);
        CtOption::new(Self(w).mul(&Self(MONTY_R2)), !(gt | eq))
    }

    /// Convert a small integer into the field.
    pub fn from_u64(w: u64) -> Self {
        let mut limbs = [0u64; 7];
        limbs[0] = w & LIMB_MASK;
        limbs[1] = w >> LIMB_BITS;
        Self(limbs).mul(&Self(MONTY_R2))
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut w = [0u64; 7];
        for i in 0..NLIMBS {
            w[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Self(w)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        let a = self.canonicalize();
        let b = other.canonicalize();
        let mut eq = Choice::from(1u8);
        for i in 0..NLIMBS {
            eq &= a[i].ct_eq(&b[i]);
        }
        eq
    }
}

impl Eq for FieldElement {}
impl PartialEq for FieldElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for FieldElement {}

impl FieldCore for FieldElement {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const CURVE_B: Self = crate::g1::CURVE_B;

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
    use num_bigint::BigUint;
    use num_traits::Num;
    use proptest::prelude::*;

    fn p_big() -> BigUint {
        BigUint::from_str_radix(
            "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f624\
             1eabfffeb153ffffb9feffffffffaaab",
            16,
        )
        .expect("modulus parses")
    }

    fn to_big(fe: &FieldElement) -> BigUint {
        BigUint::from_bytes_be(&fe.to_bytes())
    }

    fn from_big(n: &BigUint) -> FieldElement {
        let n = n % p_big();
        let bytes = n.to_bytes_be();
        let mut buf = [0u8; 48];
        buf[48 - bytes.len()..].copy_from_slice(&bytes);
        Option::from(FieldElement::from_bytes(&buf)).expect("reduced value decodes")
    }

    #[test]
    fn montgomery_round_trip() {
        for n in [0u64, 1, 2, 0xffff_ffff_ffff_ffff] {
            let fe = FieldElement::from_u64(n);
            assert_eq!(to_big(&fe), BigUint::from(n));
        }
    }

    #[test]
    fn modulus_rejected() {
        let p = p_big();
        let bytes = p.to_bytes_be();
        let mut buf = [0u8; 48];
        buf[48 - bytes.len()..].copy_from_slice(&bytes);
        assert!(bool::from(FieldElement::from_bytes(&buf).is_none()));
    }

    #[test]
    fn inversion() {
        let x = FieldElement::from_u64(12345);
        let xi = x.invert_vartime();
        assert_eq!(x.mul(&xi), FieldElement::ONE);
        assert_eq!(FieldElement::ZERO.invert_vartime(), FieldElement::ZERO);
    }

    #[test]
    fn sqrt_ratio_soundness() {
        let u = FieldElement::from_u64(4);
        let v = FieldElement::from_u64(9);
        let (ok, y) = FieldElement::sqrt_ratio(&u, &v);
        assert!(bool::from(ok));
        assert_eq!(y.square().mul(&v), u.reduce());

        // 23 is a non-residue mod p, so 23/1 must fail.
        let nr = FieldElement::from_u64(23);
        let (ok, _) = FieldElement::sqrt_ratio(&nr, &FieldElement::ONE);
        assert!(!bool::from(ok));
    }

    #[test]
    fn sign_rule() {
        assert!(!bool::from(FieldElement::from_u64(1).is_negative()));
        assert!(!bool::from(FieldElement::ZERO.is_negative()));
        let m1 = FieldElement::ZERO.sub(&FieldElement::ONE, 1);
        assert!(bool::from(m1.is_negative()));
    }

    #[test]
    fn comparison() {
        let small = FieldElement::from_u64(3);
        let big = FieldElement::from_u64(4);
        assert_eq!(small.cmp_vartime(&big), -1);
        assert_eq!(big.cmp_vartime(&small), 1);
        assert_eq!(big.cmp_vartime(&big), 0);
        // comparison is on canonical values, not limb patterns
        let loose = big.add(&FieldElement::ZERO.sub(&FieldElement::ZERO, 1)).reduce();
        assert_eq!(loose.cmp_vartime(&big), 0);
    }

    #[test]
    fn subtraction_with_borrow_budget() {
        let a = FieldElement::from_u64(3);
        let b = FieldElement::from_u64(10);
        let d = a.sub(&b, 1);
        let expect = (p_big() + BigUint::from(3u8)) - BigUint::from(10u8);
        assert_eq!(to_big(&d), expect % p_big());
    }

    prop_compose! {
        fn arb_fe()(bytes in prop::array::uniform32(any::<u8>()),
                    more in prop::array::uniform16(any::<u8>())) -> BigUint {
            let mut all = [0u8; 48];
            all[..32].copy_from_slice(&bytes);
            all[32..].copy_from_slice(&more);
            BigUint::from_bytes_be(&all) % p_big()
        }
    }

    proptest! {
        #[test]
        fn mul_matches_reference(a in arb_fe(), b in arb_fe()) {
            let fa = from_big(&a);
            let fb = from_big(&b);
            prop_assert_eq!(to_big(&fa.mul(&fb)), (a.clone() * b.clone()) % p_big());
            prop_assert_eq!(to_big(&fa.square()), (a.clone() * a.clone()) % p_big());
        }

        #[test]
        fn add_sub_match_reference(a in arb_fe(), b in arb_fe()) {
            let fa = from_big(&a);
            let fb = from_big(&b);
            prop_assert_eq!(to_big(&fa.add(&fb)), (a.clone() + b.clone()) % p_big());
            prop_assert_eq!(
                to_big(&fa.sub(&fb, 1)),
                (a.clone() + p_big() - b.clone()) % p_big()
            );
            prop_assert_eq!(to_big(&fa.neg(1)), (p_big() * 2u8 - a.clone()) % p_big());
        }

        #[test]
        fn bytes_round_trip(a in arb_fe()) {
            let fe = from_big(&a);
            let bytes = fe.to_bytes();
            let back: FieldElement =
                Option::from(FieldElement::from_bytes(&bytes)).expect("canonical");
            prop_assert_eq!(fe, back);
        }

        #[test]
        fn sqrt_ratio_total(a in arb_fe(), b in arb_fe()) {
            let u = from_big(&a);
            let v = from_big(&b);
            prop_assume!(!bool::from(v.is_zero()));
            let (ok, y) = FieldElement::sqrt_ratio(&u, &v);
            if bool::from(ok) {
                prop_assert_eq!(y.square().mul(&v), u.reduce());
            } else {
                // u/v is a non-residue: y^2 * v != u for both signs of y.
                prop_assert_ne!(y.square().mul(&v), u.reduce());
            }
        }
    }
}
