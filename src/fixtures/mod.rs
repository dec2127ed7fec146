//! Test fixture model: keyed merge scenarios grouped into suites.
//!
//! This is the order-stable, enumerable form the renderers consume: suites
//! of named groups, each an ordered sequence of cases (and section
//! comments), deterministic across regenerations.

pub mod catalog;

use crate::merge::{merge, MergeMode, MergeResult};
use crate::models::KeyEntry;
use bitflags::bitflags;

bitflags! {
    /// Which derived representations a case participates in.
    ///
    /// An actions-only group is re-expressed as keysyms-only and
    /// keysyms-and-actions groups via projection; cases whose behavior
    /// diverges between dialects in one representation opt out of it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CaseKind: u8 {
        /// Participates in the keysyms-only derivation.
        const KEYSYMS_ONLY = 1 << 0;
        /// Participates in the actions-only group itself.
        const ACTIONS_ONLY = 1 << 1;
        /// Participates in the keysyms-and-actions derivation.
        const KEYSYMS_AND_ACTIONS = 1 << 2;
    }
}

impl CaseKind {
    /// Every representation.
    pub const ALL: Self = Self::all();
}

/// A key identity on both output surfaces: evdev name for the C tests,
/// XKB name for the symbols files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode {
    evdev: &'static str,
    xkb: &'static str,
}

impl KeyCode {
    /// Creates a key code from its evdev and XKB names.
    #[must_use]
    pub const fn new(evdev: &'static str, xkb: &'static str) -> Self {
        Self { evdev, xkb }
    }

    /// Spelling on the C test surface (`KEY_` prefixed constant).
    #[must_use]
    pub fn c_name(self) -> String {
        format!("KEY_{}", self.evdev)
    }

    /// Spelling in symbols files (`<...>` wrapped).
    #[must_use]
    pub fn xkb_name(self) -> String {
        format!("<{}>", self.xkb)
    }

    /// The bare XKB name, used for ordering.
    #[must_use]
    pub const fn xkb(self) -> &'static str {
        self.xkb
    }
}

/// One merge scenario: a base and an update entry for one key, plus which
/// representations it participates in and any dialect-pinned expectations.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The key under test.
    pub key: KeyCode,
    /// The pre-existing entry.
    pub base: KeyEntry,
    /// The entry being merged in.
    pub update: KeyEntry,
    /// Representations this case participates in.
    pub kinds: CaseKind,
    pinned_augment: Option<KeyEntry>,
    pinned_override: Option<KeyEntry>,
    pinned_replace: Option<KeyEntry>,
}

impl TestCase {
    /// Creates a case participating in every representation, with all
    /// expectations computed by the engine.
    #[must_use]
    pub fn new(key: KeyCode, base: KeyEntry, update: KeyEntry) -> Self {
        Self {
            key,
            base,
            update,
            kinds: CaseKind::ALL,
            pinned_augment: None,
            pinned_override: None,
            pinned_replace: None,
        }
    }

    /// Restricts the representations this case participates in.
    #[must_use]
    pub fn kinds(mut self, kinds: CaseKind) -> Self {
        self.kinds = kinds;
        self
    }

    /// Pins the Augment expectation to a dialect-specific value.
    #[must_use]
    pub fn pin_augment(mut self, entry: KeyEntry) -> Self {
        self.pinned_augment = Some(entry);
        self
    }

    /// Pins the Update/Override expectation to a dialect-specific value.
    #[must_use]
    pub fn pin_override(mut self, entry: KeyEntry) -> Self {
        self.pinned_override = Some(entry);
        self
    }

    /// Pins the Replace expectation to a dialect-specific value.
    #[must_use]
    pub fn pin_replace(mut self, entry: KeyEntry) -> Self {
        self.pinned_replace = Some(entry);
        self
    }

    /// Checks whether the expectation for `mode` is dialect-pinned rather
    /// than computed by the engine.
    #[must_use]
    pub fn is_pinned(&self, mode: MergeMode) -> bool {
        match mode {
            MergeMode::Augment => self.pinned_augment.is_some(),
            MergeMode::Update | MergeMode::Override => self.pinned_override.is_some(),
            MergeMode::Replace => self.pinned_replace.is_some(),
        }
    }

    /// The expected result of merging this case under `mode`.
    ///
    /// Pinned expectations win; otherwise the merge engine is the oracle.
    /// Replace without a pin is the update entry itself, never derived by
    /// a combination rule.
    #[must_use]
    pub fn expected(&self, mode: MergeMode) -> KeyEntry {
        let pinned = match mode {
            MergeMode::Augment => &self.pinned_augment,
            MergeMode::Update | MergeMode::Override => &self.pinned_override,
            MergeMode::Replace => &self.pinned_replace,
        };
        pinned
            .clone()
            .unwrap_or_else(|| merge(&self.base, &self.update, mode))
    }

    /// Re-expresses the case's entries (and pinned expectations) with
    /// projected keysyms; see [`KeyEntry::project_keysyms`].
    pub fn project_keysyms(&self, keep_actions: bool) -> MergeResult<Self> {
        let project_opt = |entry: &Option<KeyEntry>| -> MergeResult<Option<KeyEntry>> {
            entry
                .as_ref()
                .map(|e| e.project_keysyms(keep_actions))
                .transpose()
        };
        Ok(Self {
            key: self.key,
            base: self.base.project_keysyms(keep_actions)?,
            update: self.update.project_keysyms(keep_actions)?,
            kinds: self.kinds,
            pinned_augment: project_opt(&self.pinned_augment)?,
            pinned_override: project_opt(&self.pinned_override)?,
            pinned_replace: project_opt(&self.pinned_replace)?,
        })
    }
}

/// One item of a test group: a section comment or a case.
#[derive(Debug, Clone)]
pub enum GroupItem {
    /// A section comment carried into generated artifacts.
    Comment(&'static str),
    /// A merge scenario.
    Case(TestCase),
}

impl From<TestCase> for GroupItem {
    fn from(case: TestCase) -> Self {
        Self::Case(case)
    }
}

/// A named, ordered sequence of cases and section comments.
#[derive(Debug, Clone)]
pub struct TestGroup {
    /// Group name, used in section names of generated artifacts.
    pub name: String,
    /// Items in generation order.
    pub items: Vec<GroupItem>,
}

impl TestGroup {
    /// Creates a group from its items.
    #[must_use]
    pub fn new(name: impl Into<String>, items: impl IntoIterator<Item = GroupItem>) -> Self {
        Self {
            name: name.into(),
            items: items.into_iter().collect(),
        }
    }

    /// Iterates over the group's cases, skipping comments.
    pub fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.items.iter().filter_map(|item| match item {
            GroupItem::Case(case) => Some(case),
            GroupItem::Comment(_) => None,
        })
    }

    /// Derives a projected group under a new name.
    ///
    /// Cases not participating in the target representation are dropped;
    /// comments are carried through.
    pub fn project_keysyms(&self, name: &str, keep_actions: bool) -> MergeResult<Self> {
        let wanted = if keep_actions {
            CaseKind::KEYSYMS_AND_ACTIONS
        } else {
            CaseKind::KEYSYMS_ONLY
        };
        let mut items = Vec::with_capacity(self.items.len());
        for item in &self.items {
            match item {
                GroupItem::Comment(text) => items.push(GroupItem::Comment(*text)),
                GroupItem::Case(case) if case.kinds.contains(wanted) => {
                    items.push(GroupItem::Case(case.project_keysyms(keep_actions)?));
                }
                GroupItem::Case(_) => {}
            }
        }
        Ok(Self::new(name, items))
    }
}

/// A suite: the groups that share one pair of generated files.
#[derive(Debug, Clone)]
pub struct TestSuite {
    /// Short suite name for CLI selection.
    pub name: &'static str,
    /// File-name suffix of the suite's artifacts.
    pub suffix: &'static str,
    /// Groups in generation order.
    pub groups: Vec<TestGroup>,
}

impl TestSuite {
    /// Every key code referenced by the suite, sorted by XKB name and
    /// deduplicated.
    #[must_use]
    pub fn key_codes(&self) -> Vec<KeyCode> {
        let mut codes: Vec<KeyCode> = self
            .groups
            .iter()
            .flat_map(TestGroup::cases)
            .map(|case| case.key)
            .collect();
        codes.sort_by_key(|code| code.xkb());
        codes.dedup();
        codes
    }

    /// Iterates over every case of every group.
    pub fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.groups.iter().flat_map(TestGroup::cases)
    }
}

/// Keysyms for the alternate groups attached to every fixture key, so
/// group-switch actions have populated targets. Row per extra group,
/// column per level.
pub const ALT_GROUP_KEYSYMS: [[&str; 4]; 2] = [
    ["Ukrainian_i", "Ukrainian_I", "Ukrainian_yi", "Ukrainian_YI"],
    ["ch", "Ch", "c_h", "C_h"],
];
