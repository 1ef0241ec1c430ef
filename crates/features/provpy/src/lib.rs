//! ProvPy adapters.
//!
//! `prov-convert` and `prov-compare` name PROV-XML `xml`, and `prov-convert` picks
//! the serialization from the file extension, so `provx` documents are handed over
//! as `.xml` files.

mod comparator;
mod converter;

pub use crate::comparator::ProvPyComparator;
pub use crate::converter::ProvPyConverter;

use interop_domain::CanonicalFormat;
use interop_kernel::invocation::LocalFormats;

/// Canonical formats ProvPy knows under another name.
pub const LOCAL_FORMATS: LocalFormats = &[(CanonicalFormat::Provx, "xml")];
