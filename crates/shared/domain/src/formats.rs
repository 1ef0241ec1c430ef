use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The closed set of PROV serializations the harness understands.
///
/// The identifier doubles as the file extension: `document.provn` is PROV-N,
/// `document.provx` is PROV-XML, and so on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CanonicalFormat {
    /// PROV-N notation.
    Provn,
    /// PROV-XML.
    Provx,
    /// PROV-JSON.
    Json,
    /// Turtle.
    Ttl,
    /// TriG.
    Trig,
}

impl CanonicalFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Parses a format identifier. Matching is exact: `JSON` is not `json`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// Derives the format of a file from its extension.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref().extension().and_then(|ext| ext.to_str()).and_then(Self::parse)
    }

    /// All formats, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
