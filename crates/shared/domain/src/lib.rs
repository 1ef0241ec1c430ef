//! # Domain Vocabulary
//!
//! Pure types shared by every interop crate (`serde`, `serde_json`, `strum` only).
//! Keep it lean: no I/O and no process handling, just the closed sets the rest of
//! the workspace validates against.

pub mod config;
pub mod constants;
pub mod formats;
pub mod tokens;

pub use crate::config::Configuration;
pub use crate::formats::CanonicalFormat;
pub use crate::tokens::Token;
