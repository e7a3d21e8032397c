//! 3-isogeny coefficient tables over Fp².
//!
//! Same layout as the G1 tables: coefficients in increasing degree
//! order, Montgomery form, monic denominators with the leading
//! coefficient implicit.

use crate::arithmetic::{fp::FieldElement, fp2::Fp2Element};

pub(crate) const ISO2_XNUM: [Fp2Element; 4] = [
    Fp2Element {
        c0: FieldElement([
            0xb20aa0da857f47, 0xf934ff6fd93db7, 0x27a160edc3c768, 0x539951a4558801,
            0x87f8e4e89fc322, 0x17277d20ea3236, 0x0011d6fd8e0ac8,
        ]),
        c1: FieldElement([
            0xb20aa0da857f47, 0xf934ff6fd93db7, 0x27a160edc3c768, 0x539951a4558801,
            0x87f8e4e89fc322, 0x17277d20ea3236, 0x0011d6fd8e0ac8,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0x00000000000000, 0x00000000000000, 0x00000000000000, 0x00000000000000,
            0x00000000000000, 0x00000000000000, 0x00000000000000,
        ]),
        c1: FieldElement([
            0x56494424a461be, 0xec52774dcd2a17, 0x837361df7cbbf1, 0x708857b7a79eb0,
            0xe0ede5493aacfd, 0xf999ab7cd7336e, 0x00111178b62800,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0x53db5dedad79cc, 0x09d575ad196aae, 0x5f3d000665c0b3, 0x3b40e6e393617a,
            0xdb35e4bfd9f506, 0x69cd755d3c1c8b, 0x001178558f257f,
        ]),
        c1: FieldElement([
            0xab24a2125230df, 0xf6293ba6e6950b, 0x41b9b0efbe5df8, 0xb8442bdbd3cf58,
            0x7076f2a49d567e, 0x7cccd5be6b99b7, 0x000888bc5b1400,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0xdba79d29239143, 0x40d0eab117735f, 0xf33ee0a4a08f2c, 0x2748ca67e668ab,
            0x2f6262a84c5c19, 0x37e2a684df7be3, 0x0012cabdbd6975,
        ]),
        c1: FieldElement([
            0x00000000000000, 0x00000000000000, 0x00000000000000, 0x00000000000000,
            0x00000000000000, 0x00000000000000, 0x00000000000000,
        ]),
    },
];

pub(crate) const ISO2_XDEN: [Fp2Element; 2] = [
    Fp2Element {
        c0: FieldElement([
            0x00000000000000, 0x00000000000000, 0x00000000000000, 0x00000000000000,
            0x00000000000000, 0x00000000000000, 0x00000000000000,
        ]),
        c1: FieldElement([
            0x2fffff13bb96f0, 0x615c643f3e2c5b, 0x09d883e22c9bbc, 0xe3f894e6de304d,
            0x8020db8dc90d81, 0x1515824c5633f7, 0x00166a555471ae,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0x2200002760834a, 0x9a6fbad8204dc2, 0xe9ab0aa910a528, 0x51af4903ca6dd4,
            0x47c315ab58b018, 0x40e34705b6c62e, 0x000d99a86368b8,
        ]),
        c1: FieldElement([
            0xdcffffd89f2761, 0x658ef67bdfb1f7, 0xb74ba64d137983, 0xa1d5c9bb9cc2fd,
            0x03e9c1b91e9b6c, 0xa5b70415f0f015, 0x000c676986d0c7,
        ]),
    },
];

pub(crate) const ISO2_YNUM: [Fp2Element; 4] = [
    Fp2Element {
        c0: FieldElement([
            0x4c84bdfc94688e, 0xf4abd498e2ae5d, 0x24b6e04d92e31c, 0x195094cba0223d,
            0x7f98fc0b108e51, 0x4b3a9799477308, 0x000ba9598274de,
        ]),
        c1: FieldElement([
            0x4c84bdfc94688e, 0xf4abd498e2ae5d, 0x24b6e04d92e31c, 0x195094cba0223d,
            0x7f98fc0b108e51, 0x4b3a9799477308, 0x000ba9598274de,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0x00000000000000, 0x00000000000000, 0x00000000000000, 0x00000000000000,
            0x00000000000000, 0x00000000000000, 0x00000000000000,
        ]),
        c1: FieldElement([
            0xebc71c91dcb082, 0xd32af430fde066, 0xa99005a116cf5d, 0x0cade66655b52d,
            0x7e27fc99c87dc1, 0x997af884c5f681, 0x001890b86ba28c,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0x6f555553251ea2, 0xf76ad822a8df15, 0x138dc54676b287, 0x664e69ea1fdc22,
            0x7b63683c847581, 0x439e6ce4613dcd, 0x000db0f2602859,
        ]),
        c1: FieldElement([
            0x8faaaaacda8c09, 0x0893d9315720a4, 0x8d68ebafad6c24, 0x8d36a8d54754b0,
            0xd0496f27f2d603, 0xa2fbde37467875, 0x000c501f8a1126,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0x69a12f682cb11c, 0xe314034425d379, 0xa131822d7c62a8, 0xbd2f96307f036e,
            0x8f4364d5a2d607, 0x647d802c347b3d, 0x0003a664ca08a1,
        ]),
        c1: FieldElement([
            0x00000000000000, 0x00000000000000, 0x00000000000000, 0x00000000000000,
            0x00000000000000, 0x00000000000000, 0x00000000000000,
        ]),
    },
];

pub(crate) const ISO2_YDEN: [Fp2Element; 3] = [
    Fp2Element {
        c0: FieldElement([
            0x24fffa76673449, 0x4830e2d7750b81, 0x1641a27e570d0e, 0x963a1fac312db1,
            0x8664f05c61d772, 0xfd7d963fbea87c, 0x000478a6678a94,
        ]),
        c1: FieldElement([
            0x24fffa76673449, 0x4830e2d7750b81, 0x1641a27e570d0e, 0x963a1fac312db1,
            0x8664f05c61d772, 0xfd7d963fbea87c, 0x000478a6678a94,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0x00000000000000, 0x00000000000000, 0x00000000000000, 0x00000000000000,
            0x00000000000000, 0x00000000000000, 0x00000000000000,
        ]),
        c1: FieldElement([
            0x91fffd3b336f7a, 0x2417ca15ba859d, 0xdb9c29ba3d95dd, 0xc4df9935cc2f41,
            0xe908e3e06c917b, 0x720bf0adb32f5f, 0x000f3cdc28e20a,
        ]),
    },
    Fp2Element {
        c0: FieldElement([
            0x3300003b10c4ef, 0xe7a798443074a3, 0x5e808ffd98f7bc, 0x7a86ed85afa4bf,
            0x6ba4a081050824, 0x6154ea88922945, 0x0014667c951d14,
        ]),
        c1: FieldElement([
            0xcbffffc4eee5bc, 0x1857190fcf8b16, 0x427620f88b26ef, 0x78fe2539b78c13,
            0xe00836e3724360, 0x85456093158cfd, 0x00059a95551c6b,
        ]),
    },
];
