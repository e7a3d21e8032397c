//! 11-isogeny coefficient tables.
//!
//! Numerator and denominator polynomials of the rational map carrying the
//! auxiliary curve onto the target curve, coefficients in increasing
//! degree order and Montgomery form. The denominators are monic; their
//! leading coefficient is implicit.

use crate::arithmetic::fp::FieldElement;

pub(crate) const ISO_XNUM: [FieldElement; 12] = [
    FieldElement([
        0xdb0d7c136422ba, 0x982e442b005351, 0x137149ebeb779c, 0x58be844d470c0e,
        0x993c51ab9f299c, 0x0554cd15065213, 0x000b758b613e1a,
    ]),
    FieldElement([
        0x620706e3bc298b, 0x954b555f729e63, 0xf20c1569ca0141, 0xd86e981db4f7d1,
        0x9551bd39db0afb, 0xc8010e1f3c60f2, 0x0011a394ae7383,
    ]),
    FieldElement([
        0x43364cd5192d33, 0xa175fbb13b4eef, 0xa12c6e0a908c2f, 0xc76fe9e082c8dc,
        0x9172f771199581, 0x8a1313017fdf90, 0x0012d143239eb0,
    ]),
    FieldElement([
        0x542465842d8c68, 0xc1ae8e089c790b, 0x9f94e5f806578c, 0x95667980c4116e,
        0x0d29f15585d6d8, 0x0dca4f294fd848, 0x00101429861704,
    ]),
    FieldElement([
        0x5c7ad9af4afafd, 0x9c7375a6a061e8, 0x3a9a3c84f1ddad, 0x039fb7df020936,
        0x482e46f4c169bd, 0x240aab742788fe, 0x000c8d80f0f4c0,
    ]),
    FieldElement([
        0xb810192488d365, 0xb4c06c4bbfa1d5, 0xe0a7b2aa79229b, 0x7b115257a1e014,
        0x973f2345b96c81, 0x620b3bb0bb8fc4, 0x0011c1b788b98b,
    ]),
    FieldElement([
        0x0487101a4813d3, 0xc0dd0d3714ba34, 0x03bf7e919604ee, 0x030fd3c31dcc85,
        0xa69affb2112867, 0xf3de8677d0e33b, 0x00195ec97c1395,
    ]),
    FieldElement([
        0x0b870ee1362d2d, 0x2bd351f7e6a1db, 0xf6209ffea54d6a, 0x263c9a3e6e8663,
        0x39b239c048bae5, 0x18982e831c4e0f, 0x0001388e353ca0,
    ]),
    FieldElement([
        0x48dfdb324ac210, 0xa4967a9d9550b7, 0x265c2dff8c9934, 0x0131f0990b407e,
        0xeae84a9162d8f1, 0x410121cff8241d, 0x000631ef374067,
    ]),
    FieldElement([
        0x81bf90428f7458, 0xb294698bddf037, 0x0ef15c417833d3, 0x014be5461755c7,
        0xad06a57031e79a, 0x52e54a09ab0490, 0x0010dec06874bd,
    ]),
    FieldElement([
        0x92f95c5e6dfa6b, 0xfa2c5817f6e5e0, 0xa2b234a29d87dd, 0x4527c7f6e8e433,
        0x0e14b013d720b0, 0x4299d77cb9efe4, 0x0019ff9a4d6443,
    ]),
    FieldElement([
        0x70618ca40d7648, 0x9dfa710b0f288c, 0x6761c4e2794f8b, 0xc67ddaafac13d1,
        0xe9298b892b197e, 0xcd36530d591e99, 0x000ff6fe9ee36e,
    ]),
];

pub(crate) const ISO_XDEN: [FieldElement; 10] = [
    FieldElement([
        0xad77fdb0fd9a51, 0x1000d8cfa0bcf0, 0x124fc8c4d11ab8, 0x2d514b090fdbda,
        0xb84fc425b4a5d0, 0xa9c63ad344e7ee, 0x00139c83aec192,
    ]),
    FieldElement([
        0xea3ba506dc8390, 0x0afcfad76a3907, 0xea3ea414493a0a, 0x5718b76aea08de,
        0x7a41c2089282c4, 0xbeb5cc8c2957e4, 0x00132e3dbb89f9,
    ]),
    FieldElement([
        0x57a644a01ea679, 0xcd96414ff0c144, 0xd7a3c1ff445138, 0xf78713b0cb3565,
        0x5c7943823832d0, 0xab317f3699d020, 0x000721cf128db2,
    ]),
    FieldElement([
        0x7d1182792b40c5, 0x901696f0fc13b0, 0x504df721db5236, 0xb6c0e9737a63e3,
        0x29635732b09faf, 0x9b6e3e594fb7ba, 0x000794220245d5,
    ]),
    FieldElement([
        0x27ae6acb46256a, 0x334ede781f8d8c, 0x177ebfc1b50697, 0xb8920defc69649,
        0x12b792b79f25b1, 0x54871d9b36f019, 0x00046cd06e63d3,
    ]),
    FieldElement([
        0xc822cd142f1fea, 0x42951335b50d9d, 0xa85e5bb0fa640c, 0x71eeecb3508cdb,
        0x70f8a9128c7eb1, 0x77e790b2e7da27, 0x0017f98f72c1c2,
    ]),
    FieldElement([
        0xf01151b2683982, 0x65e2d511b3f57b, 0xd335d76bfc0b2c, 0x4a5bf52dc6f287,
        0x3c23398fcfa49b, 0x20e16875a07f47, 0x000afce8984d72,
    ]),
    FieldElement([
        0xf0747877164c08, 0x0d291b60f0a8ac, 0xd9c0621366fda5, 0xcb1626190c32f8,
        0xe78056b046659f, 0x26e85ad2dbadd8, 0x0000714b65f8b8,
    ]),
    FieldElement([
        0x75439c133e522e, 0x3b0fb527a73c28, 0x31403c0cf341dc, 0x54df788e677513,
        0x4648ea77adcbab, 0xe99d242ecadebd, 0x0013ae78ceb0c6,
    ]),
    FieldElement([
        0xcbc97bacfc06c3, 0x73a8ce86c0cb80, 0x03dcbfcf900b6f, 0x7328c888c8af6b,
        0x6e83d159bf7020, 0x0fca66ca78754e, 0x0010190981da73,
    ]),
];

pub(crate) const ISO_YNUM: [FieldElement; 16] = [
    FieldElement([
        0xfe0c1d7c6243d6, 0xa79cb40098b11c, 0xb888698b3a45b9, 0x3cbfa564643b0b,
        0x473194d2f14f78, 0x09dca8f2840bc3, 0x000483d41d08f0,
    ]),
    FieldElement([
        0x42a05abd941678, 0x332f95278749cd, 0xd4a08373adf68c, 0xc2c5d563fb7505,
        0xe8936bf03e7bfd, 0x593e20157b75d8, 0x0002c16d651ab0,
    ]),
    FieldElement([
        0xf86dd5a2c81b97, 0x1b904f8582b647, 0x598024dc961c28, 0xab167c7b62ef99,
        0x1c23c04f0fff67, 0x6f37fb80bc123d, 0x000bc6d5b28043,
    ]),
    FieldElement([
        0x8e6a40501b9a7c, 0x590a05f8f883ef, 0xf992241b354296, 0xd9df2b813e50bb,
        0x1e59e9a46e4144, 0x2636c1f8b94665, 0x0011ae39848252,
    ]),
    FieldElement([
        0x7a380075a31661, 0x1c5f73ad029d62, 0x6d0189a6bee637, 0xd9f430bf2c79fd,
        0x371004dccab297, 0xf9b359f9a13a9b, 0x00080436a0c0f3,
    ]),
    FieldElement([
        0xe1ceeee43c785c, 0x0a0bc6067d5556, 0x3f220051311aaf, 0xc780cefa6233ab,
        0x5879296a91513a, 0x703e830a180f25, 0x000a360b5ef5e6,
    ]),
    FieldElement([
        0x3f4f28580cb01a, 0x7e16c05de68506, 0x3fa26d411efc3a, 0x9802058e73f445,
        0x6fae9ae985960b, 0x2348cfd6fda012, 0x0001384b9ba51a,
    ]),
    FieldElement([
        0xff8d083b0f3179, 0x6efda4cb6e4edc, 0xde6ca52be28351, 0xd36ac67ab8218a,
        0x53d9628033fc57, 0xe88869fd98ab3c, 0x000946d8ff9f1a,
    ]),
    FieldElement([
        0x0b7bb1f25d0199, 0x5ba531e9cc3769, 0x634ae4c7d41312, 0x73515b897b38af,
        0xacd6d223c63ec3, 0x48b080184f956f, 0x00023d025139f8,
    ]),
    FieldElement([
        0x504fc3ed1d90fb, 0x04bac8c9e877ed, 0xa005abca2444f6, 0xf0985f95cf678b,
        0x615460f555270e, 0x4bbfb4277d6a1d, 0x0018447abd8f8d,
    ]),
    FieldElement([
        0x8e35760e962f93, 0xef646c07b0c79f, 0xe9cbe7b4189635, 0xb448eee72e0adb,
        0xb9289333d9b58b, 0xbfc529eedf0761, 0x0002e42e91040a,
    ]),
    FieldElement([
        0x296ff475ba3e5d, 0x13c75c8a3b4457, 0x8c0f98283fe4fc, 0xc69b62133d87db,
        0x78f64c0ae66b2d, 0x13a42a341f2cc1, 0x00147903f4d20c,
    ]),
    FieldElement([
        0xcefff8b9d88ad6, 0x623765d70a285c, 0x470bd6abc93d19, 0x0ad795b5f08cde,
        0xb2b25fbf05696e, 0x47d6dd0ce86e95, 0x00070f96544fce,
    ]),
    FieldElement([
        0x684ac729ab4064, 0xe6315cedc560ee, 0x51151aa9c61b69, 0xe3d6095655b049,
        0x27ba0fe09ac3d4, 0x59129dad67069e, 0x000ed54472113c,
    ]),
    FieldElement([
        0xd3b491bf77ba35, 0x630420566fea10, 0x64ca4d86dd23cc, 0x83c4b6a011096c,
        0xc13e26fee5f5c0, 0xdaccad9547cc28, 0x000f8117609561,
    ]),
    FieldElement([
        0xb73e8267796936, 0xe919d2d1d54c88, 0xdc26abbfec9c84, 0x5bcda5179d01ce,
        0x16b7f91ded513c, 0x33dece530b7b0b, 0x000725848345dc,
    ]),
];

pub(crate) const ISO_YDEN: [FieldElement; 15] = [
    FieldElement([
        0x9c9d47e54d7133, 0x8a970a81610796, 0xc55c287590982b, 0x018898db75cce1,
        0xe9dec8d2727a48, 0x293ebc368661f9, 0x001529e9a7541c,
    ]),
    FieldElement([
        0xd64f5535ed5022, 0x745f2f51118b86, 0x0ef5f1c8b4eb8b, 0x481911ce4bee11,
        0x817cabe11c90a9, 0x85990539c17eda, 0x00094b3094d50d,
    ]),
    FieldElement([
        0xc76df4700b46a5, 0x59ba0cd342308f, 0x20aa69debe9955, 0xb9b20e5b83807e,
        0x147a68b75e615a, 0xf0c601b58f9e60, 0x00089571c92d1d,
    ]),
    FieldElement([
        0x9fef3b75db3073, 0x75511b3b402026, 0x8b41ddcdf98902, 0x3538cb47f75504,
        0xe6ca4656e99343, 0x4eb2b1b717904a, 0x000cca25bfbb50,
    ]),
    FieldElement([
        0xba2ea267fc709d, 0x1c956743003cfd, 0xf304a64554d5e3, 0xe952a42b867e27,
        0x8eebbd97377773, 0x0cfbc578bf39e2, 0x001967dcdff819,
    ]),
    FieldElement([
        0x52efeeb5e6928c, 0x8a55b88b55df97, 0x1871ffa89d1ef2, 0x85470fa89c1921,
        0x740aa834e28733, 0xf49b4beebc5913, 0x0013d7994a887b,
    ]),
    FieldElement([
        0x8ceb5fae18f3d7, 0x0b2923ccf0bc5e, 0xbee26d08d82001, 0x6416b2048b2e3e,
        0x16834772112909, 0x21b2505dc10779, 0x000350c8d5ac43,
    ]),
    FieldElement([
        0x720e5b8c0f5ad5, 0x965a8d253064e0, 0x7ee4b8f7a6f038, 0xae16545835a4db,
        0x524d14fede16ab, 0xd330b443e5323a, 0x0018edfb375300,
    ]),
    FieldElement([
        0x4192ec7504a4cf, 0xab5fd8f897a6e7, 0x30e8d93105a4f0, 0x87542773a4fa97,
        0x8653550f596f4f, 0x4abd2b47e800c7, 0x000525e9f2de8c,
    ]),
    FieldElement([
        0xa0d449f6d72dd5, 0x5d61da2630a22f, 0xfd1be778b26111, 0x98c1b1043af281,
        0x8c95475d846418, 0xcbace06e8ccf8d, 0x00084b9d05f309,
    ]),
    FieldElement([
        0x0b9285fd936e47, 0xa8684e6d7c02ea, 0xfc08db56cb7671, 0xa97ed24ef4a55b,
        0x9301e9a40fb1e8, 0xe3124bb9924e0d, 0x0009d1ac9a9748,
    ]),
    FieldElement([
        0x496a7c38981ac7, 0x0eca4d0003f039, 0x9f25af4b593faf, 0x7928bf7a742aa8,
        0xc7598e04d32c8d, 0xf672629617b836, 0x000c38afd4aa0c,
    ]),
    FieldElement([
        0x02bf274511b45a, 0x0676c8c9545249, 0xc6f3ad5496f2f5, 0xa8859ab160cc82,
        0x7f705f07d7e5e8, 0x3eddffdd7f8a1f, 0x00095cf4dcb1ef,
    ]),
    FieldElement([
        0x176ca1579fd1bf, 0x991bf51f55b410, 0x1aebfea4612056, 0x06c3848c1885b5,
        0xdb4b9f1adb7ddd, 0x2f113d78c3eccd, 0x000f0b1f0fd115,
    ]),
    FieldElement([
        0x322e39837a34cf, 0x2d7ddd20213164, 0x354fc73c4601d1, 0x32faa36d796eb7,
        0xffef4e5463826e, 0xa46274a1e0d4d3, 0x000b25054daaec,
    ]),
];
