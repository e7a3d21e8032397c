//! Field and curve arithmetic.
//!
//! Everything here operates on the 7×56-bit redundant-limb Montgomery
//! representation described in [`fp`]. Curve-level code is generic over
//! [`FieldCore`] so G1 (coordinates in Fp) and G2 (coordinates in Fp²)
//! share one set of Jacobian formulas, one cofactor-clearing chain
//! driver, and one multiexponentiation table.

pub(crate) mod fp;
pub(crate) mod fp2;
pub(crate) mod multiexp;
pub(crate) mod projective;

pub use projective::JacobianPoint;

use subtle::{Choice, ConditionallySelectable};

/// Operations shared by the base field and its quadratic extension.
///
/// Implementations keep values in a redundant (not fully reduced)
/// representation between operations: limbs hold signed digits that may
/// wrap, and multiplication sign-extends them into its accumulator. The
/// `bup` argument on [`sub`] and [`neg`] is the caller's borrow budget:
/// the subtrahend is offset by `p << bup` per limb, which keeps the
/// represented value nonnegative and the digit magnitudes within the
/// envelope. Callers are responsible for scheduling [`reduce`] calls so
/// that no operand of [`mul`]/[`square`] exceeds the 128-bit accumulator
/// envelope; the point formulas in [`projective`] carry the worked-out
/// schedule.
///
/// [`sub`]: FieldCore::sub
/// [`neg`]: FieldCore::neg
/// [`reduce`]: FieldCore::reduce
/// [`mul`]: FieldCore::mul
/// [`square`]: FieldCore::square
pub trait FieldCore: Copy + ConditionallySelectable {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity (Montgomery form).
    const ONE: Self;
    /// The constant term of the target curve equation `y^2 = x^3 + B`.
    const CURVE_B: Self;

    /// Limbwise sum.
    fn add(&self, rhs: &Self) -> Self;
    /// Limbwise `self + (p << bup) - rhs`.
    fn sub(&self, rhs: &Self, bup: u32) -> Self;
    /// Limbwise `(p << bup) - self`.
    fn neg(&self, bup: u32) -> Self;
    /// Limbwise left shift by `k` bits.
    fn shl(&self, k: u32) -> Self;
    /// Montgomery product.
    fn mul(&self, rhs: &Self) -> Self;
    /// Montgomery square.
    fn square(&self) -> Self;
    /// Bring a loosely bounded value back to the standard envelope
    /// without changing its residue class.
    fn reduce(&self) -> Self;
    /// Constant-time test for zero; accepts any envelope input.
    fn is_zero(&self) -> Choice;
    /// Multiplicative inverse; **variable time**, zero maps to zero.
    fn invert_vartime(&self) -> Self;
}

/// Horner evaluation of one isogeny polynomial with coefficients
/// pre-scaled by even powers of Z.
///
/// `zpow[i]` holds Z^(2(i+1)) so that coefficient `k_i` of a degree-`d`
/// polynomial picks up Z^(2(d-i)). For a monic polynomial the leading
/// coefficient is implicit; otherwise the last table entry is the
/// leading coefficient and is applied to X out of line.
pub(crate) fn iso_horner<F: FieldCore>(coeffs: &[F], zpow: &[F], x: &F, monic: bool) -> F {
    let d = if monic { coeffs.len() } else { coeffs.len() - 1 };
    let mut scaled = [F::ZERO; 16];
    for i in 0..d {
        scaled[i] = coeffs[i].mul(&zpow[d - 1 - i]); // k_i Z^(2(d-i))  v = 2  w = 1
    }
    let mut acc = if monic {
        x.add(&scaled[d - 1]) //          X + k_(d-1) Z^2               v = 4  w = 2
    } else {
        x.mul(&coeffs[d]).add(&scaled[d - 1]) // k_d X + k_(d-1) Z^2    v = 4  w = 2
    };
    for i in (0..d - 1).rev() {
        acc = acc.mul(x); //              acc * X                       v = 2  w = 1
        acc = acc.add(&scaled[i]); //     acc + k_i Z^(2(d-i))          v = 4  w = 2
    }
    acc
}
