//! The merge engine: combining two key entries under a merge mode.
//!
//! This is the oracle the generated fixtures are checked against. The
//! engine is a pure function over immutable inputs; there is no state
//! across calls.

pub mod error;
pub mod projection;

pub use error::{MergeError, MergeResult};

use crate::models::{KeyEntry, Keysym, Level};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy for combining a new key definition with an existing one when
/// symbol maps are composed via inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// The default include policy: the update wins wherever it provides a
    /// value. Combination rule identical to [`MergeMode::Override`]; the
    /// two are distinct because the symbols grammar spells them apart.
    Update,
    /// The base wins wherever it provides a value; the update only fills
    /// holes.
    Augment,
    /// The update wins wherever it provides a value.
    Override,
    /// The update replaces the base entirely.
    Replace,
}

impl MergeMode {
    /// All modes, in the order they appear in generated artifacts.
    pub const ALL: [Self; 4] = [Self::Update, Self::Augment, Self::Override, Self::Replace];

    /// The lowercase mode name used in symbols-file syntax.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Augment => "augment",
            Self::Override => "override",
            Self::Replace => "replace",
        }
    }

    /// The merge statement keyword for this mode.
    ///
    /// The default mode is spelled as a plain `include` statement; the
    /// others use their own keyword.
    #[must_use]
    pub const fn statement_keyword(self) -> &'static str {
        match self {
            Self::Update => "include",
            mode => mode.name(),
        }
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MergeMode {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| MergeError::UnknownMode(s.to_owned()))
    }
}

/// Computes the combination of `base` and `update` under `mode`.
///
/// Pure, deterministic, and total: every input combination has a defined
/// output, including entries with no levels. Levels are combined
/// index-by-index up to the longer entry's level count; a level absent on
/// one side is treated as empty.
#[must_use]
pub fn merge(base: &KeyEntry, update: &KeyEntry, mode: MergeMode) -> KeyEntry {
    if mode == MergeMode::Replace {
        return update.clone();
    }
    let count = base.num_levels().max(update.num_levels());
    KeyEntry::new((0..count).map(|i| merge_level(base.level(i), update.level(i), mode)))
}

/// Combines one level pair.
///
/// An empty side loses the level wholesale (both empty keeps the base,
/// preserving its slot shape). When both sides are populated but their
/// slot counts differ, representations cannot be lined up positionally, so
/// the mode's preferred side wins wholesale. Otherwise the keysym and
/// action components merge independently, slot by slot, which is what lets
/// an action win over a keysym at the same position and vice versa.
fn merge_level(base: Option<&Level>, update: Option<&Level>, mode: MergeMode) -> Level {
    let empty = Level::default();
    let base = base.unwrap_or(&empty);
    let update = update.unwrap_or(&empty);

    if update.is_empty() {
        return base.clone();
    }
    if base.is_empty() {
        return update.clone();
    }
    if base.slot_count() != update.slot_count() {
        return match mode {
            MergeMode::Augment => base.clone(),
            _ => update.clone(),
        };
    }
    Level {
        keysyms: merge_slots(&base.keysyms, &update.keysyms, mode, Keysym::is_no_symbol),
        actions: merge_slots(&base.actions, &update.actions, mode, |a| a.is_no_op()),
    }
}

/// Merges one component (the keysym list or the action list) of a level
/// pair with equal slot counts.
///
/// A component missing on one side is taken from the other verbatim.
/// Otherwise the mode's preferred side dictates the result length and each
/// populated slot of it wins; holes are filled positionally from the other
/// side, or kept as written when both sides have one.
fn merge_slots<T: Clone>(
    base: &[T],
    update: &[T],
    mode: MergeMode,
    is_hole: impl Fn(&T) -> bool,
) -> Vec<T> {
    if update.is_empty() {
        return base.to_vec();
    }
    if base.is_empty() {
        return update.to_vec();
    }
    let (preferred, fallback) = match mode {
        MergeMode::Augment => (base, update),
        _ => (update, base),
    };
    preferred
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            if is_hole(slot) {
                match fallback.get(i) {
                    Some(other) if !is_hole(other) => other.clone(),
                    _ => slot.clone(),
                }
            } else {
                slot.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, ModifierMask};

    fn sym(name: &str) -> Keysym {
        Keysym::new(name)
    }

    fn group_level(groups: &[u8]) -> Level {
        Level::from_actions(groups.iter().map(|&g| Action::group(g)))
    }

    #[test]
    fn test_update_fills_empty_base_slot() {
        let base = KeyEntry::new([Level::from_keysyms([Keysym::no_symbol()])]);
        let update = KeyEntry::new([Level::from_keysyms([sym("b")])]);
        let merged = merge(&base, &update, MergeMode::Update);
        assert_eq!(merged, update);
    }

    #[test]
    fn test_augment_keeps_populated_base_slot() {
        let base = KeyEntry::new([Level::from_keysyms([sym("a")])]);
        let update = KeyEntry::new([Level::from_keysyms([Keysym::no_symbol()])]);
        let merged = merge(&base, &update, MergeMode::Augment);
        assert_eq!(merged, base);
    }

    #[test]
    fn test_override_prefers_update_slot() {
        let base = KeyEntry::new([Level::from_keysyms([sym("a")])]);
        let update = KeyEntry::new([Level::from_keysyms([sym("b")])]);
        let merged = merge(&base, &update, MergeMode::Override);
        assert_eq!(merged, update);
    }

    #[test]
    fn test_update_with_shorter_base_follows_update_shape() {
        // Base has two one-slot levels; the update has one two-slot level.
        let base = KeyEntry::new([
            Level::from_keysyms([sym("a")]),
            Level::from_keysyms([sym("A")]),
        ]);
        let update = KeyEntry::new([Level::from_keysyms([sym("c"), Keysym::no_symbol()])]);
        let merged = merge(&base, &update, MergeMode::Update);
        // Slot counts differ at level 0, so the update level wins wholesale;
        // level 1 is untouched by the empty update side.
        assert_eq!(
            merged,
            KeyEntry::new([
                Level::from_keysyms([sym("c"), Keysym::no_symbol()]),
                Level::from_keysyms([sym("A")]),
            ])
        );
    }

    #[test]
    fn test_replace_discards_base() {
        let base = KeyEntry::new([group_level(&[2]), group_level(&[2])]);
        let update = KeyEntry::new([group_level(&[3])]);
        assert_eq!(merge(&base, &update, MergeMode::Replace), update);
    }

    #[test]
    fn test_level_count_mismatch_pads_with_empty_levels() {
        let base = KeyEntry::new([group_level(&[0]), group_level(&[2])]);
        let update = KeyEntry::new([group_level(&[3]), group_level(&[0]), group_level(&[0])]);
        let expected = KeyEntry::new([group_level(&[3]), group_level(&[2]), Level::default()]);
        assert_eq!(merge(&base, &update, MergeMode::Augment), expected);
        assert_eq!(merge(&base, &update, MergeMode::Override), expected);
    }

    #[test]
    fn test_both_empty_levels_keep_base_shape() {
        let base = KeyEntry::new([group_level(&[0, 0])]);
        let update = KeyEntry::new([group_level(&[0, 0, 0])]);
        assert_eq!(merge(&base, &update, MergeMode::Augment), base);
        assert_eq!(merge(&base, &update, MergeMode::Override), base);
    }

    #[test]
    fn test_slot_count_mismatch_resolves_wholesale() {
        let base = KeyEntry::new([group_level(&[2])]);
        let update = KeyEntry::new([group_level(&[3, 0])]);
        assert_eq!(merge(&base, &update, MergeMode::Augment), base);
        assert_eq!(merge(&base, &update, MergeMode::Override), update);
    }

    #[test]
    fn test_action_overrides_keysym_at_same_slot() {
        // Keysym component and action component are decided independently:
        // the update's action lands next to the base's surviving keysym.
        let base = KeyEntry::new([Level::from_keysyms([sym("a")])]);
        let update = KeyEntry::new([Level::from_actions([Action::group(3)])]);
        let merged = merge(&base, &update, MergeMode::Override);
        assert_eq!(merged, KeyEntry::new([Level::mix([sym("a")], [Action::group(3)])]));
    }

    #[test]
    fn test_mixed_slotwise_merge_across_representations() {
        let base = KeyEntry::new([
            Level::mix(
                [sym("a"), sym("b")],
                [Action::group(2), Action::mods(ModifierMask::CONTROL)],
            ),
            Level::mix([Keysym::no_symbol(), sym("B")], [Action::group(2), Action::NONE]),
        ]);
        let update = KeyEntry::new([
            Level::mix([Keysym::no_symbol(), sym("y")], [Action::group(3), Action::NONE]),
            Level::mix(
                [sym("X"), sym("Y")],
                [Action::group(3), Action::mods(ModifierMask::LEVEL_THREE)],
            ),
        ]);
        let augment = merge(&base, &update, MergeMode::Augment);
        assert_eq!(
            augment,
            KeyEntry::new([
                Level::mix(
                    [sym("a"), sym("b")],
                    [Action::group(2), Action::mods(ModifierMask::CONTROL)],
                ),
                Level::mix(
                    [sym("X"), sym("B")],
                    [Action::group(2), Action::mods(ModifierMask::LEVEL_THREE)],
                ),
            ])
        );
        let overridden = merge(&base, &update, MergeMode::Override);
        assert_eq!(
            overridden,
            KeyEntry::new([
                Level::mix(
                    [sym("a"), sym("y")],
                    [Action::group(3), Action::mods(ModifierMask::CONTROL)],
                ),
                Level::mix(
                    [sym("X"), sym("Y")],
                    [Action::group(3), Action::mods(ModifierMask::LEVEL_THREE)],
                ),
            ])
        );
    }

    #[test]
    fn test_merge_mode_parsing() {
        assert_eq!("augment".parse::<MergeMode>().unwrap(), MergeMode::Augment);
        assert_eq!("update".parse::<MergeMode>().unwrap(), MergeMode::Update);
        assert!(matches!(
            "merge".parse::<MergeMode>(),
            Err(MergeError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_statement_keyword() {
        assert_eq!(MergeMode::Update.statement_keyword(), "include");
        assert_eq!(MergeMode::Augment.statement_keyword(), "augment");
        assert_eq!(MergeMode::Replace.statement_keyword(), "replace");
    }
}
