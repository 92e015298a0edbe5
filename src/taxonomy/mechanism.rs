use crate::foundation::math::hash_str;

/// Free-form mechanism label (e.g. "Metacognition", "Somatic Regulation").
///
/// The label is opaque: it is never parsed, only hashed. The hash is FNV-1a 64 over the exact
/// UTF-8 bytes, so `"Metacognition"` and `"metacognition"` nudge the palette differently.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Mechanism(String);

impl Mechanism {
    /// Wrap a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable 64-bit hash of the label.
    pub fn stable_hash(&self) -> u64 {
        hash_str(&self.0)
    }
}

impl From<&str> for Mechanism {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for Mechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
