//! Key action value type.

use crate::models::ModifierMask;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One action slot of a level.
///
/// Exactly one variant is active per instance. Both variants carry a no-op
/// encoding (`group == 0`, empty mask) because the symbols grammar spells
/// either as `NoAction()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Switch the active group (`SetGroup`); `group == 0` is a no-op.
    Group {
        /// Target group, 1-based; 0 means no switch.
        group: u8,
    },
    /// Set modifiers (`SetMods`); an empty mask is a no-op.
    Mods {
        /// Modifiers to set.
        mods: ModifierMask,
    },
}

impl Action {
    /// The canonical no-op action.
    pub const NONE: Self = Self::Group { group: 0 };

    /// Creates a group-switch action; 0 yields a no-op.
    #[must_use]
    pub const fn group(group: u8) -> Self {
        Self::Group { group }
    }

    /// Creates a set-modifiers action; an empty mask yields a no-op.
    #[must_use]
    pub const fn mods(mods: ModifierMask) -> Self {
        Self::Mods { mods }
    }

    /// Checks whether this action does nothing.
    #[must_use]
    pub fn is_no_op(self) -> bool {
        match self {
            Self::Group { group } => group == 0,
            Self::Mods { mods } => mods.is_empty(),
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Action {
    /// Formats the action in symbols-file syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group { group: 0 } => f.write_str("NoAction()"),
            Self::Group { group } => write!(f, "SetGroup(group={group})"),
            Self::Mods { mods } if mods.is_empty() => f.write_str("NoAction()"),
            Self::Mods { mods } => write!(f, "SetMods(mods={mods})"),
        }
    }
}
