//! Key entry data: a full symbol definition for one key.

use crate::models::Level;
use serde::{Deserialize, Serialize};

/// One physical key's symbol definition across shift levels, indexed
/// 0-based by level number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    /// Levels in order; may be empty.
    pub levels: Vec<Level>,
}

impl KeyEntry {
    /// Creates an entry from its levels.
    #[must_use]
    pub fn new(levels: impl IntoIterator<Item = Level>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }

    /// The entry with no levels at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { levels: Vec::new() }
    }

    /// Number of levels.
    #[must_use]
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// The level at `index`, if present.
    #[must_use]
    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Checks whether every level is empty (or there are none).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(Level::is_empty)
    }

    /// Renders the entry body in symbols-file syntax.
    ///
    /// Emits a `symbols=[..]` list when any level carries keysym data (or
    /// when keysym lists exist but no action carries data, so the keysym
    /// representation is the one in force), an `actions=[..]` list when any
    /// action carries data or no keysym list exists at all, and both when
    /// mixed. An entry with no levels renders as the empty string.
    #[must_use]
    pub fn xkb(&self) -> String {
        if self.levels.is_empty() {
            return String::new();
        }
        let has_keysyms = !self.levels.iter().all(Level::has_empty_keysyms);
        let no_keysym_lists = self.levels.iter().all(|l| l.keysyms.is_empty());
        let has_actions = !self.levels.iter().all(Level::has_empty_actions);

        let mut out = String::new();
        if has_keysyms || (!no_keysym_lists && !has_actions) {
            out.push_str("symbols=[");
            out.push_str(&self.join_levels(Level::keysyms_xkb));
            out.push(']');
        }
        if has_actions || no_keysym_lists {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str("actions=[");
            out.push_str(&self.join_levels(Level::actions_xkb));
            out.push(']');
        }
        out
    }

    fn join_levels(&self, f: impl FnMut(&Level) -> String) -> String {
        self.levels.iter().map(f).collect::<Vec<_>>().join(", ")
    }
}
