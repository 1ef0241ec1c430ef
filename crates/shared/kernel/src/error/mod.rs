//! Error taxonomy.
//!
//! * [`ConfigError`]: malformed or incomplete configuration, raised while configuring or
//!   registering.
//! * [`ConversionError`] / [`ComparisonError`]: per-call runtime failures of a tool invocation.
//!
//! Launch and filesystem failures travel inside the `Io` variants, with the
//! [`std::io::Error`] left as it was raised.

mod comparison;
mod config;
mod conversion;

pub use self::comparison::{ComparisonError, ComparisonErrorExt};
pub use self::config::{ConfigError, ConfigErrorExt};
pub use self::conversion::{ConversionError, ConversionErrorExt};

use std::fmt::Display;

fn join<T: Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
