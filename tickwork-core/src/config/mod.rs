//! Runtime configuration
//!
//! Thresholds and reporting settings that boards may override. Two
//! encodings are supported: a small TOML subset for human-edited board
//! files, and a postcard blob (with the `serde` feature) for persisting the
//! config in flash.

pub mod toml;
pub mod types;

#[cfg(feature = "serde")]
pub mod blob;

pub use self::toml::parse_config;
pub use types::*;

#[cfg(feature = "serde")]
pub use blob::{decode, encode, MAX_BLOB_SIZE};
