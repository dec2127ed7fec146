//! Action-to-keysym projection.
//!
//! Maps an action to a representative keysym for a given slot/level
//! position, via fixed lookup tables. This exists purely to re-express
//! action-based fixtures as keysym-based ones, exercising the same merge
//! rules under the other surface representation.

use crate::merge::{MergeError, MergeResult};
use crate::models::{Action, KeyEntry, Keysym, Level, ModifierMask};

/// Representative keysyms for group-switch actions, keyed by
/// `(group mod 4, slot index mod 2, level mod 2)`.
fn group_keysym(group: u8, index: usize, level: usize) -> Option<&'static str> {
    match (group % 4, index % 2, level % 2) {
        (2, 0, 0) => Some("a"),
        (2, 0, 1) => Some("A"),
        (2, 1, 0) => Some("b"),
        (2, 1, 1) => Some("B"),
        (3, 0, 0) => Some("Greek_alpha"),
        (3, 0, 1) => Some("Greek_ALPHA"),
        (3, 1, 0) => Some("Greek_beta"),
        (3, 1, 1) => Some("Greek_BETA"),
        _ => None,
    }
}

/// Representative keysyms for set-modifier actions, keyed by
/// `(mask, slot index mod 2, level mod 2)`.
fn mod_keysym(mods: ModifierMask, index: usize, level: usize) -> Option<&'static str> {
    let position = (index % 2, level % 2);
    if mods == ModifierMask::CONTROL {
        match position {
            (0, 0) => Some("x"),
            (0, 1) => Some("X"),
            (1, 0) => Some("y"),
            _ => Some("Y"),
        }
    } else if mods == ModifierMask::MOD5 {
        match position {
            (0, 0) => Some("Greek_xi"),
            (0, 1) => Some("Greek_XI"),
            (1, 0) => Some("Greek_upsilon"),
            _ => Some("Greek_UPSILON"),
        }
    } else {
        None
    }
}

impl Action {
    /// Projects this action to its representative keysym at the given slot
    /// and level position. No-op actions project to `NoSymbol`.
    ///
    /// # Errors
    ///
    /// [`MergeError::UnmappedAction`] when the tables have no entry for the
    /// combination; the caller must not default it away.
    pub fn to_keysym(self, index: usize, level: usize) -> MergeResult<Keysym> {
        if self.is_no_op() {
            return Ok(Keysym::no_symbol());
        }
        let name = match self {
            Self::Group { group } => group_keysym(group, index, level),
            Self::Mods { mods } => mod_keysym(mods, index, level),
        };
        name.map(Keysym::from).ok_or(MergeError::UnmappedAction {
            action: self,
            index,
            level,
        })
    }
}

impl Level {
    /// Re-expresses this level's actions as keysyms.
    ///
    /// The keysym list is replaced by the projected action list; the
    /// actions are kept alongside only when `keep_actions` is set.
    pub fn project_keysyms(&self, keep_actions: bool, level: usize) -> MergeResult<Self> {
        let keysyms = self
            .actions
            .iter()
            .enumerate()
            .map(|(index, action)| action.to_keysym(index, level))
            .collect::<MergeResult<Vec<_>>>()?;
        Ok(Self {
            keysyms,
            actions: if keep_actions {
                self.actions.clone()
            } else {
                Vec::new()
            },
        })
    }
}

impl KeyEntry {
    /// Re-expresses every level's actions as keysyms; see
    /// [`Level::project_keysyms`].
    pub fn project_keysyms(&self, keep_actions: bool) -> MergeResult<Self> {
        Ok(Self {
            levels: self
                .levels
                .iter()
                .enumerate()
                .map(|(level, l)| l.project_keysyms(keep_actions, level))
                .collect::<MergeResult<_>>()?,
        })
    }
}
