//! End-to-end vectors and group-level properties for G1 hashing.

use bls12_381_hash::{FieldElement, g1};
use hex_literal::hex;

/// The order of the G1/G2 subgroups, big-endian u64 limbs.
const Q: [u64; 4] = [
    0x73eda753299d7d48, 0x3339d80809a1d805, 0x53bda402fffe5bfe, 0xffffffff00000001,
];

fn fe(bytes: &[u8; 48]) -> FieldElement {
    Option::from(FieldElement::from_bytes(bytes)).expect("canonical test input")
}

fn affine(p: &g1::G1Point) -> ([u8; 48], [u8; 48]) {
    let (x, y) = p.to_affine_vartime().expect("not the identity");
    (x.to_bytes(), y.to_bytes())
}

#[test]
fn swu_map_vectors() {
    let u = fe(&hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"));
    let p = g1::swu_map(&u);
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(affine(&p), (hex!("0b1137a91cabcfc5aad221f427f6793557465b271d195e537f19a55310b44aca8c2160ffe1e264a0a4552ee48befea87"), hex!("0519925ce938943f79cc7634cdb04db92c2a747f5543b7e208eebbb6c77bbdba5152394ee91cdb1f79cd4ad140f5c054")));
    assert_eq!(affine(&g1::swu_map_vartime(&u)), affine(&p));

    let u = fe(&hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"));
    let p = g1::swu_map(&u);
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(affine(&p), (hex!("0b1137a91cabcfc5aad221f427f6793557465b271d195e537f19a55310b44aca8c2160ffe1e264a0a4552ee48befea87"), hex!("0519925ce938943f79cc7634cdb04db92c2a747f5543b7e208eebbb6c77bbdba5152394ee91cdb1f79cd4ad140f5c054")));
    assert_eq!(affine(&g1::swu_map_vartime(&u)), affine(&p));

    let u = fe(&hex!("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"));
    let p = g1::swu_map(&u);
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(affine(&p), (hex!("0b1137a91cabcfc5aad221f427f6793557465b271d195e537f19a55310b44aca8c2160ffe1e264a0a4552ee48befea87"), hex!("14e77f8d5047525ad14f3181759b5f1e384cd7059e415add5e4216ea2f353869cd59c6afc83724e04031b52ebf09ea57")));
    assert_eq!(affine(&g1::swu_map_vartime(&u)), affine(&p));

    let u = fe(&hex!("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"));
    let p = g1::swu_map(&u);
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(affine(&p), (hex!("1228c80e1565cfefc9faa1560f6521e5b96725fe13adf42b8a189c8ed9a0479bf48a994b82bf449875f42a42b437e74e"), hex!("14de86ba3d5cabd544d7c07a72808692632da90ac474124eba68d39d7c3c60b89ef75185bfc5c6b3b95ae9140d2b4cca")));
    assert_eq!(affine(&g1::swu_map_vartime(&u)), affine(&p));

}

#[test]
fn hash_to_g1_vectors() {
    let u1 = fe(&hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"));
    let u2 = fe(&hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"));
    let p = g1::hash_to_g1(&u1, &u2);
    assert!(bool::from(p.is_on_curve()));
    assert!(bool::from(p.mul_vartime(&Q).is_identity()));
    assert_eq!(affine(&p), (hex!("07c29e1669bc6bcfaa6bdc646b0e22bc1491213c12800a1223ca062ae5baaa1b1527a098734f6e3f5295dc1a2aadebea"), hex!("0065e496591221041b08df592c0893ca3045ad5ee0119677380acaf78786a435965a78f3391c0346260fedda85f0cbd4")));
    assert_eq!(affine(&g1::hash_to_g1_vartime(&u1, &u2)), affine(&p));

    let u1 = fe(&hex!("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"));
    let u2 = fe(&hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"));
    let p = g1::hash_to_g1(&u1, &u2);
    assert!(bool::from(p.is_on_curve()));
    // the maps of these two inputs are mirror images, so the sum vanishes
    assert!(bool::from(p.is_identity()));
    assert!(bool::from(g1::hash_to_g1_vartime(&u1, &u2).is_identity()));

    let u1 = fe(&hex!("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"));
    let u2 = fe(&hex!("0fedcba987654321fedcba987654321fedcba987654321fedcba987654321fedcba987654321fedcba987654321fedcb"));
    let p = g1::hash_to_g1(&u1, &u2);
    assert!(bool::from(p.is_on_curve()));
    assert!(bool::from(p.mul_vartime(&Q).is_identity()));
    assert_eq!(affine(&p), (hex!("14f480a2e1c6302b0d9c866dfbd30bc0fee1d92de0f76d35baf7d29b5879c957a87926169cda0949d23babb202206211"), hex!("14bb761b3cc69d295188d936b137e53d6657974e6696d482820f9f6900aae1fe6e25601ee16a273b3c54c7902af94757")));
    assert_eq!(affine(&g1::hash_to_g1_vartime(&u1, &u2)), affine(&p));

}

#[test]
fn swu_map_rg_vector() {
    let u = fe(&hex!("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"));
    let r = hex!("000102030405060708090a0b0c0d0e0f");
    let p = g1::swu_map_rg(&u, &r);
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(affine(&p), (hex!("146f465c3ad3e3bb8f3767f21039c42220be1fc65d23b8c0b3b2f5173e2c156aa7cea766f7a21ff8d2676df00291e741"), hex!("0cfdf0d587f5c05298de1a4bd17975b43b850cfddd4dfbd074c849c54d468bf8e1823ed3e83d1117ed37dc3823d96e52")));
    assert_eq!(affine(&g1::swu_map_rg_vartime(&u, &r)), affine(&p));
}

#[test]
fn svdw_map_vectors() {
    let t = fe(&hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"));
    let p = g1::svdw_map(&t);
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(affine(&p), (hex!("00000000000000011d4c358f9e646af52f3d52163e2e67c0991afbb3b4e9c39a9a47883a261e00068a05fffffffcfffd"), hex!("0963d0cce692ef96d010fbf28e5fba2e7d1701f0fb5a88b00972e73c52ba49928552d797695fd01f4253a9849d045ba1")));
    assert_eq!(affine(&g1::svdw_map_vartime(&t)), affine(&p));
    assert_eq!(affine(&g1::svdw_map_affine_vartime(&t)), affine(&p));

    let t = fe(&hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"));
    let p = g1::svdw_map(&t);
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(affine(&p), (hex!("0f68ee2bfc25ddfc9e4946f0bf95240ddcb8789aa34560716c8eb5b4b81d03a3a065ed08b4ef684bb0971c71c71c3f21"), hex!("0df6b2617e5f20952cd394edff9471a9fb87b5d09d58ec5016a61a55fcc66f620d89dcc447f1e18d1bdd59238773d2cb")));
    assert_eq!(affine(&g1::svdw_map_vartime(&t)), affine(&p));
    assert_eq!(affine(&g1::svdw_map_affine_vartime(&t)), affine(&p));

    let t = fe(&hex!("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"));
    let p = g1::svdw_map(&t);
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(affine(&p), (hex!("0f68ee2bfc25ddfc9e4946f0bf95240ddcb8789aa34560716c8eb5b4b81d03a3a065ed08b4ef684bb0971c71c71c3f21"), hex!("0c0a5f88bb20c6051e4812c843b73b2d68ef95b4562c266f508ab84af9ea86c21122233a69621e729e21a6dc788bd7e0")));
    assert_eq!(affine(&g1::svdw_map_vartime(&t)), affine(&p));
    assert_eq!(affine(&g1::svdw_map_affine_vartime(&t)), affine(&p));

    let t = fe(&hex!("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"));
    let p = g1::svdw_map(&t);
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(affine(&p), (hex!("14ce3673c9e3c7bd2246c9401b796f189548fb143f077e68c77c56613bc3f7e11bf9da028a6864a38bb7074837a47486"), hex!("07f8cbea00ec1c6db5e7942b0dadebeb0b48b7a659a6d6a3f6c7bf93ebe9f42fec52d22223499eb59c6f3213e9c65e5b")));
    assert_eq!(affine(&g1::svdw_map_vartime(&t)), affine(&p));
    assert_eq!(affine(&g1::svdw_map_affine_vartime(&t)), affine(&p));

}

#[test]
fn svdw_pair_matches_single() {
    let t1 = fe(&hex!("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"));
    let t2 = fe(&hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"));
    let (p1, p2) = g1::svdw_map2_affine_vartime(&t1, &t2);
    assert_eq!(affine(&p1), affine(&g1::svdw_map_affine_vartime(&t1)));
    assert_eq!(affine(&p2), affine(&g1::svdw_map_affine_vartime(&t2)));
    // degenerate first input shares the path that skips its inversion
    let z = FieldElement::ZERO;
    let (p1, p2) = g1::svdw_map2_affine_vartime(&z, &t2);
    assert_eq!(affine(&p1), affine(&g1::svdw_map_affine_vartime(&z)));
    assert_eq!(affine(&p2), affine(&g1::svdw_map_affine_vartime(&t2)));
}

#[test]
fn swu_sign_consistency() {
    let u = fe(&hex!("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"));
    let minus_u = FieldElement::ZERO.sub(&u, 1).reduce();
    let (px, py) = affine(&g1::swu_map(&u));
    let (nx, ny) = affine(&g1::swu_map(&minus_u));
    assert_eq!(px, nx);
    let y = fe(&py);
    let ny = fe(&ny);
    assert_eq!(y.add(&ny).reduce().to_bytes(), [0u8; 48]);
    assert_ne!(py, ny.to_bytes());
}

#[test]
fn constant_time_and_vartime_paths_agree() {
    use rand_core::{OsRng, TryRngCore};
    let mut rng = OsRng;
    for _ in 0..24 {
        let mut bytes = [0u8; 48];
        // 256 random bits keeps the value canonically below p
        rng.try_fill_bytes(&mut bytes[16..]).expect("os rng");
        let u = fe(&bytes);
        assert_eq!(affine(&g1::swu_map_vartime(&u)), affine(&g1::swu_map(&u)));
        assert_eq!(affine(&g1::svdw_map_vartime(&u)), affine(&g1::svdw_map(&u)));
        assert_eq!(
            affine(&g1::svdw_map_affine_vartime(&u)),
            affine(&g1::svdw_map(&u))
        );
    }
}

#[test]
fn subgroup_membership_random() {
    use rand_core::{OsRng, TryRngCore};
    let mut rng = OsRng;
    for _ in 0..8 {
        let mut bytes = [0u8; 48];
        rng.try_fill_bytes(&mut bytes[16..]).expect("os rng");
        let u = fe(&bytes);
        let p = g1::swu_map(&u);
        assert!(bool::from(p.is_on_curve()));
        assert!(bool::from(p.mul_vartime(&Q).is_identity()));
    }
}
