//! ProvToolbox adapters.
//!
//! `provconvert` reads every canonical extension natively, both for conversion
//! (`-infile a.ttl -outfile b.provx`) and for comparison
//! (`-infile a.provx -compare b.json`), so nothing is renamed.

mod comparator;
mod converter;

pub use crate::comparator::ProvToolboxComparator;
pub use crate::converter::ProvToolboxConverter;

use interop_kernel::invocation::LocalFormats;

/// ProvToolbox understands every canonical format under its canonical name.
pub const LOCAL_FORMATS: LocalFormats = &[];
