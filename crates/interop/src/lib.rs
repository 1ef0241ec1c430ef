//! Facade crate for the PROV interoperability harness.
//! Re-exports the shared vocabulary and kernel, and wires the built-in tool adapters.
//! Keep this crate thin: it composes the other crates rather than implementing tool logic.
//!
//! ## Usage
//! ```rust,no_run
//! use interop::{Harness, comparator_factory};
//!
//! # fn main() -> Result<(), interop::HarnessError> {
//! let harness = Harness::from_file(&comparator_factory(), None)?;
//! for case in harness.test_cases()? {
//!     println!("{case}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod factories;
mod harness;

pub use interop_domain as domain;
pub use interop_kernel as kernel;

pub use crate::error::{HarnessError, HarnessErrorExt};
pub use crate::factories::{adapters, comparator_factory, converter_factory};
pub use crate::harness::{Harness, TestCase, load_converter, skip_tests};
