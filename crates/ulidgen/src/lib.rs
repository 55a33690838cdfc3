#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base32;
mod encoded;
mod error;
pub mod generator;
pub mod rand;
#[cfg(feature = "serde")]
mod serde;
pub mod time;

pub use crate::base32::{ALPHABET, Base32Error};
pub use crate::encoded::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::rand::*;
pub use crate::time::*;
