#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// 크레이트의 진입점. 공개 API를 선언하고 모듈을 구성합니다.
//======================================================================

// --- Module declarations ---
pub mod consts;
mod duplex;
mod error;
mod hash;
mod keyed;

pub mod aead;
pub mod sponge;


// --- Re-exports ---
pub use crate::aead::XoodyakAead;
pub use error::Error;
pub use hash::Xoodyak;
pub use keyed::KeyedXoodyak;
pub use sponge::{Hash, Hasher, XofReader};

pub use ::aead as aead_api;
pub use digest;
pub use xoodoo::{self, Xoodoo};
