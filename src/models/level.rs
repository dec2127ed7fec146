//! Level data: what one key produces at one shift level.

use crate::models::{Action, Keysym};
use serde::{Deserialize, Serialize};

/// One shift level of a key definition: parallel keysym and action slot
/// lists.
///
/// A well-formed level is keysyms-only, actions-only, or mixed with equal
/// list lengths, but consumers must handle every shape: a level with both
/// components, or with neither (empty, implying `NoSymbol`/no-op padding).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Keysym slots, possibly empty.
    pub keysyms: Vec<Keysym>,
    /// Action slots, possibly empty.
    pub actions: Vec<Action>,
}

impl Level {
    /// Creates a keysyms-only level.
    #[must_use]
    pub fn from_keysyms(keysyms: impl IntoIterator<Item = Keysym>) -> Self {
        Self {
            keysyms: keysyms.into_iter().collect(),
            actions: Vec::new(),
        }
    }

    /// Creates an actions-only level.
    #[must_use]
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            keysyms: Vec::new(),
            actions: actions.into_iter().collect(),
        }
    }

    /// Creates a mixed level with both keysym and action slots.
    #[must_use]
    pub fn mix(
        keysyms: impl IntoIterator<Item = Keysym>,
        actions: impl IntoIterator<Item = Action>,
    ) -> Self {
        Self {
            keysyms: keysyms.into_iter().collect(),
            actions: actions.into_iter().collect(),
        }
    }

    /// Number of slots in this level.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.keysyms.len().max(self.actions.len())
    }

    /// Checks whether the keysym component carries no information
    /// (no slots, or all slots `NoSymbol`).
    #[must_use]
    pub fn has_empty_keysyms(&self) -> bool {
        self.keysyms.iter().all(Keysym::is_no_symbol)
    }

    /// Checks whether the action component carries no information
    /// (no slots, or all slots no-ops).
    #[must_use]
    pub fn has_empty_actions(&self) -> bool {
        self.actions.iter().all(|a| a.is_no_op())
    }

    /// Checks whether the level carries no information at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.has_empty_keysyms() && self.has_empty_actions()
    }

    /// Renders the keysym slots in symbols-file list syntax.
    ///
    /// Zero slots render as the bare `NoSymbol` default, one slot renders
    /// bare, and multiple slots render brace-wrapped.
    #[must_use]
    pub fn keysyms_xkb(&self) -> String {
        render_list(Keysym::NO_SYMBOL_NAME, &self.keysyms, |k| k.name().to_owned())
    }

    /// Renders the action slots in symbols-file list syntax.
    #[must_use]
    pub fn actions_xkb(&self) -> String {
        render_list("NoAction()", &self.actions, |a| a.to_string())
    }

    /// Renders the keysym slots as C `XKB_KEY_*` constants.
    ///
    /// An actions-only level renders as `NoSymbol` padding of the action
    /// slot count, since the C surface always consumes keysym arrays.
    #[must_use]
    pub fn keysyms_c(&self) -> String {
        if self.keysyms.is_empty() && !self.actions.is_empty() {
            let padding = vec![Keysym::no_symbol(); self.actions.len()];
            return render_each(&padding, Keysym::c_name);
        }
        if self.keysyms.is_empty() {
            return Keysym::no_symbol().c_name();
        }
        render_each(&self.keysyms, Keysym::c_name)
    }
}

/// Joins list items, or substitutes `default` for an empty list; multiple
/// items are brace-wrapped per the symbols grammar.
fn render_list<T>(default: &str, items: &[T], mut f: impl FnMut(&T) -> String) -> String {
    match items {
        [] => default.to_owned(),
        [single] => f(single),
        many => {
            let joined = many.iter().map(f).collect::<Vec<_>>().join(", ");
            format!("{{{joined}}}")
        }
    }
}

/// Comma-joins every item without a brace wrapper (C initializer surface).
fn render_each<T>(items: &[T], f: impl FnMut(&T) -> String) -> String {
    items.iter().map(f).collect::<Vec<_>>().join(", ")
}
