//! Windowed three-scalar multiexponentiation.
//!
//! Computes `h·P + r2·G_hi + r1·G_lo` where `h` is the fixed public
//! cofactor-chain scalar, `G_lo` is a fixed subgroup base point, `G_hi`
//! its 2⁶⁴ multiple, and `r = r2‖r1` a caller-supplied 128-bit scalar.
//! A 4×4×4 table over 2-bit digits drives 32 double-double-add windows.
//! The constant-time path selects table entries by scanning the public
//! `h` plane and merging with bitmask selection; the variable-time path
//! indexes directly and skips all-zero windows.

use crate::arithmetic::{FieldCore, JacobianPoint};
use subtle::{ConditionallySelectable, ConstantTimeEq};

pub(crate) struct MultiexpTable<F: FieldCore> {
    // entries[h][j][k] = h*P + j*G_hi + k*G_lo; [0][0][0] is unused.
    entries: [[[JacobianPoint<F>; 4]; 4]; 4],
}

impl<F: FieldCore> MultiexpTable<F> {
    /// Build the full table for input point `p` over the fixed bases.
    pub fn new(
        p: &JacobianPoint<F>,
        g_lo: &JacobianPoint<F>,
        g_hi: &JacobianPoint<F>,
    ) -> Self {
        let mut t = [[[JacobianPoint::IDENTITY; 4]; 4]; 4];
        t[0][0][1] = *g_lo;
        t[0][0][2] = g_lo.double();
        t[0][0][3] = t[0][0][2].add(g_lo);
        t[0][1][0] = *g_hi;
        t[0][2][0] = g_hi.double();
        t[0][3][0] = t[0][2][0].add(g_hi);
        for j in 1..4 {
            for k in 1..4 {
                t[0][j][k] = t[0][j][0].add(&t[0][0][k]);
            }
        }
        t[1][0][0] = *p;
        t[2][0][0] = p.double();
        t[3][0][0] = t[2][0][0].add(p);
        for h in 1..4 {
            for j in 0..4 {
                for k in 0..4 {
                    if j == 0 && k == 0 {
                        continue;
                    }
                    t[h][j][k] = t[h][0][0].add(&t[0][j][k]);
                }
            }
        }
        Self { entries: t }
    }

    /// Oblivious lookup within the public `h` plane: scan all entries,
    /// merge the match by bitmask selection. `j` and `k` are secret.
    fn select(&self, out: &mut JacobianPoint<F>, h: usize, j: u8, k: u8) {
        for jj in 0..4u8 {
            for kk in 0..4u8 {
                if h == 0 && jj == 0 && kk == 0 {
                    // h, jj and kk are public loop indices.
                    continue;
                }
                let hit = jj.ct_eq(&j) & kk.ct_eq(&k);
                *out = JacobianPoint::conditional_select(
                    out,
                    &self.entries[h][jj as usize][kk as usize],
                    hit,
                );
            }
        }
    }

    /// `h·P + r·G`, constant time in `r`.
    ///
    /// `h_bytes` is the big-endian public chain scalar (its top 2-bit
    /// digit must be nonzero); `r` is big-endian, the high eight bytes
    /// weighting `G_hi` and the low eight `G_lo`.
    pub fn fold(&self, h_bytes: &[u8; 8], r: &[u8; 16]) -> JacobianPoint<F> {
        let mut acc = JacobianPoint::IDENTITY;
        let mut scratch = JacobianPoint::IDENTITY;
        for idx in 0..8 {
            // The first window of byte 0 seeds the accumulator directly.
            let (mut mask, mut shift) = if idx == 0 { (0x30u8, 4u32) } else { (0xc0u8, 6u32) };
            if idx == 0 {
                let h = (h_bytes[0] >> 6) as usize;
                debug_assert!(h != 0);
                self.select(&mut acc, h, r[0] >> 6, r[8] >> 6);
            }
            loop {
                acc = acc.double();
                acc = acc.double();

                let h = ((h_bytes[idx] & mask) >> shift) as usize;
                let r2 = (r[idx] & mask) >> shift;
                let r1 = (r[idx + 8] & mask) >> shift;
                let nonzero = !(h as u8).ct_eq(&0) | !r2.ct_eq(&0) | !r1.ct_eq(&0);

                self.select(&mut scratch, h, r2, r1);
                let stepped = acc.add(&scratch);
                acc = JacobianPoint::conditional_select(&acc, &stepped, nonzero);

                if mask == 0x03 {
                    break;
                }
                mask >>= 2;
                shift -= 2;
            }
        }
        acc
    }

    /// `h·P + r·G`, **variable time**: direct table indexing, zero
    /// windows skipped.
    pub fn fold_vartime(&self, h_bytes: &[u8; 8], r: &[u8; 16]) -> JacobianPoint<F> {
        let mut acc = JacobianPoint::IDENTITY;
        for idx in 0..8 {
            let (mut mask, mut shift) = if idx == 0 { (0x30u8, 4u32) } else { (0xc0u8, 6u32) };
            if idx == 0 {
                let h = (h_bytes[0] >> 6) as usize;
                debug_assert!(h != 0);
                acc = self.entries[h][(r[0] >> 6) as usize][(r[8] >> 6) as usize];
            }
            loop {
                acc = acc.double();
                acc = acc.double();

                let h = ((h_bytes[idx] & mask) >> shift) as usize;
                let r2 = ((r[idx] & mask) >> shift) as usize;
                let r1 = ((r[idx + 8] & mask) >> shift) as usize;
                if h | r2 | r1 != 0 {
                    acc = acc.add(&self.entries[h][r2][r1]);
                }

                if mask == 0x03 {
                    break;
                }
                mask >>= 2;
                shift -= 2;
            }
        }
        acc
    }
}
