#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![allow(clippy::needless_range_loop)]

mod arithmetic;
pub mod g1;
pub mod g2;

pub use crate::{
    arithmetic::{
        FieldCore, JacobianPoint,
        fp::FieldElement,
        fp2::Fp2Element,
    },
    g1::{hash_to_g1, hash_to_g1_vartime},
    g2::{hash_to_g2, hash_to_g2_vartime},
};

pub use subtle;
