//! Real modifier bitmask.

use bitflags::bitflags;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// The eight real modifiers of the core keyboard protocol.
    ///
    /// Only the bits named here may ever be set; an empty mask means
    /// "no modifier".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierMask: u8 {
        /// Shift modifier.
        const SHIFT = 1 << 0;
        /// Caps lock modifier.
        const LOCK = 1 << 1;
        /// Control modifier.
        const CONTROL = 1 << 2;
        /// Mod1 (conventionally Alt).
        const MOD1 = 1 << 3;
        /// Mod2 (conventionally Num Lock).
        const MOD2 = 1 << 4;
        /// Mod3.
        const MOD3 = 1 << 5;
        /// Mod4 (conventionally Super).
        const MOD4 = 1 << 6;
        /// Mod5.
        const MOD5 = 1 << 7;
        /// Conventional alias: `LevelThree` is bound to `Mod5`.
        const LEVEL_THREE = 1 << 7;
    }
}

/// Canonical spellings, in display order.
const NAMES: [(ModifierMask, &str); 8] = [
    (ModifierMask::SHIFT, "Shift"),
    (ModifierMask::LOCK, "Lock"),
    (ModifierMask::CONTROL, "Control"),
    (ModifierMask::MOD1, "Mod1"),
    (ModifierMask::MOD2, "Mod2"),
    (ModifierMask::MOD3, "Mod3"),
    (ModifierMask::MOD4, "Mod4"),
    (ModifierMask::MOD5, "Mod5"),
];

impl ModifierMask {
    /// Looks up a single modifier by its canonical name.
    ///
    /// Accepts `LevelThree` as an alias for `Mod5` and `NoModifier` for the
    /// empty mask.
    #[must_use]
    pub(crate) fn from_modifier_name(name: &str) -> Option<Self> {
        match name {
            "NoModifier" => return Some(Self::empty()),
            "LevelThree" => return Some(Self::MOD5),
            _ => {}
        }
        NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(mask, _)| *mask)
    }
}

impl fmt::Display for ModifierMask {
    /// Formats the mask as its `+`-joined flag names, `NoModifier` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NoModifier");
        }
        let mut first = true;
        for (mask, name) in NAMES {
            if self.contains(mask) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for ModifierMask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mask = Self::empty();
        for part in s.split('+') {
            mask |= Self::from_modifier_name(part)
                .ok_or_else(|| format!("unknown modifier: {part:?}"))?;
        }
        Ok(mask)
    }
}

impl Serialize for ModifierMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModifierMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joined_names() {
        let mask = ModifierMask::SHIFT | ModifierMask::CONTROL;
        assert_eq!(mask.to_string(), "Shift+Control");
        assert_eq!(ModifierMask::empty().to_string(), "NoModifier");
    }

    #[test]
    fn test_level_three_aliases_mod5() {
        assert_eq!(ModifierMask::LEVEL_THREE, ModifierMask::MOD5);
        assert_eq!(ModifierMask::LEVEL_THREE.to_string(), "Mod5");
    }

    #[test]
    fn test_from_str_round_trip() {
        let mask = ModifierMask::LOCK | ModifierMask::MOD4;
        assert_eq!(mask.to_string().parse::<ModifierMask>().unwrap(), mask);
        assert_eq!(
            "NoModifier".parse::<ModifierMask>().unwrap(),
            ModifierMask::empty()
        );
        assert_eq!(
            "LevelThree".parse::<ModifierMask>().unwrap(),
            ModifierMask::MOD5
        );
        assert!("Hyper".parse::<ModifierMask>().is_err());
    }
}
