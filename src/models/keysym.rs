//! Keysym value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named keyboard symbol (character, function key, dead key, ...).
///
/// A `Keysym` is an opaque symbolic name; equality is name equality. The
/// sentinel [`Keysym::no_symbol`] denotes "no symbol produced" at a level
/// slot and is how absent slots are padded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keysym(String);

impl Keysym {
    /// Name of the sentinel keysym.
    pub const NO_SYMBOL_NAME: &'static str = "NoSymbol";

    /// Creates a keysym from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `NoSymbol` sentinel.
    #[must_use]
    pub fn no_symbol() -> Self {
        Self(Self::NO_SYMBOL_NAME.to_owned())
    }

    /// Parses an optional raw name; `None` and the empty string map to
    /// `NoSymbol`.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::no_symbol(),
            Some(name) => Self::new(name),
        }
    }

    /// Checks whether this is the `NoSymbol` sentinel.
    #[must_use]
    pub fn is_no_symbol(&self) -> bool {
        self.0 == Self::NO_SYMBOL_NAME
    }

    /// The keysym name as written in symbols files.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Spelling on the C test surface (`XKB_KEY_` prefixed constant).
    #[must_use]
    pub fn c_name(&self) -> String {
        format!("XKB_KEY_{}", self.0)
    }
}

impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Keysym {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_no_symbol() {
        assert!(Keysym::parse(None).is_no_symbol());
        assert!(Keysym::parse(Some("")).is_no_symbol());
        assert!(!Keysym::parse(Some("a")).is_no_symbol());
    }

    #[test]
    fn test_c_name() {
        assert_eq!(Keysym::new("Greek_alpha").c_name(), "XKB_KEY_Greek_alpha");
        assert_eq!(Keysym::no_symbol().c_name(), "XKB_KEY_NoSymbol");
    }

    #[test]
    fn test_display_is_bare_name() {
        assert_eq!(Keysym::new("ch").to_string(), "ch");
    }
}
