//! Closed semantic input sets.
//!
//! Every enum here parses case-insensitively (with `-` and spaces folded to `_`) and rejects
//! anything outside its set with [`NaviCueError::UnknownVariant`]. There is no default value.

use crate::foundation::error::{NaviCueError, NaviCueResult};

pub(crate) mod axes;
pub(crate) mod form;
pub(crate) mod mechanism;
pub(crate) mod signature;

/// A closed enumeration of taxonomy labels.
pub trait ClosedSet: Sized + Copy + 'static {
    /// Axis name used in error messages.
    const AXIS: &'static str;

    /// Every member, in canonical order.
    fn all() -> &'static [Self];

    /// Canonical snake_case name.
    fn as_str(self) -> &'static str;

    /// Additional accepted spellings (already normalized).
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }
}

pub(crate) fn normalize_token(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Parse `s` into a member of `T`, failing loudly on unknown labels.
pub fn parse_closed<T: ClosedSet>(s: &str) -> NaviCueResult<T> {
    let token = normalize_token(s);
    T::all()
        .iter()
        .copied()
        .find(|v| v.as_str() == token || v.aliases().contains(&token.as_str()))
        .ok_or_else(|| {
            let expected: Vec<&str> = T::all().iter().map(|v| v.as_str()).collect();
            NaviCueError::unknown_variant(T::AXIS, s, &expected)
        })
}

macro_rules! closed_set_traits {
    ($ty:ty) => {
        impl std::str::FromStr for $ty {
            type Err = crate::foundation::error::NaviCueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                crate::taxonomy::parse_closed(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = crate::foundation::error::NaviCueError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                crate::taxonomy::parse_closed(&s)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(crate::taxonomy::ClosedSet::as_str(*self))
            }
        }
    };
}

pub(crate) use closed_set_traits;

#[cfg(test)]
#[path = "../../tests/unit/taxonomy/parse.rs"]
mod tests;
