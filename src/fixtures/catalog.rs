//! The fixture catalog: literal merge scenarios for every suite.
//!
//! Three suites are generated: `common` (behavior both consumer dialects
//! agree on), `x11` (xkbcomp discards trailing `NoSymbol` levels in
//! keysym-only maps, so its expectations are pinned), and `xkbcommon`.
//! Each suite is built fresh on request; nothing here is shared mutable
//! state.

use crate::fixtures::{CaseKind, GroupItem, KeyCode, TestCase, TestGroup, TestSuite};
use crate::merge::MergeResult;
use crate::models::{Action, KeyEntry, Keysym, Level, ModifierMask};

const KEY_NEW: KeyCode = KeyCode::new("NEW", "I189");
const KEY_COFFEE: KeyCode = KeyCode::new("COFFEE", "I160");
const KEY_QUESTION: KeyCode = KeyCode::new("QUESTION", "I222");
const KEY_REDO: KeyCode = KeyCode::new("REDO", "I190");
const KEY_Q: KeyCode = KeyCode::new("Q", "AD01");
const KEY_W: KeyCode = KeyCode::new("W", "AD02");
const KEY_E: KeyCode = KeyCode::new("E", "AD03");
const KEY_R: KeyCode = KeyCode::new("R", "AD04");
const KEY_T: KeyCode = KeyCode::new("T", "AD05");
const KEY_Y: KeyCode = KeyCode::new("Y", "AD06");
const KEY_U: KeyCode = KeyCode::new("U", "AD07");
const KEY_I: KeyCode = KeyCode::new("I", "AD08");
const KEY_O: KeyCode = KeyCode::new("O", "AD09");
const KEY_P: KeyCode = KeyCode::new("P", "AD10");
const KEY_LEFTBRACE: KeyCode = KeyCode::new("LEFTBRACE", "AD11");
const KEY_RIGHTBRACE: KeyCode = KeyCode::new("RIGHTBRACE", "AD12");
const KEY_A: KeyCode = KeyCode::new("A", "AC01");
const KEY_S: KeyCode = KeyCode::new("S", "AC02");
const KEY_F: KeyCode = KeyCode::new("F", "AC04");
const KEY_J: KeyCode = KeyCode::new("J", "AC07");
const KEY_K: KeyCode = KeyCode::new("K", "AC08");
const KEY_V: KeyCode = KeyCode::new("V", "AB04");
const KEY_B: KeyCode = KeyCode::new("B", "AB05");
const KEY_M: KeyCode = KeyCode::new("M", "AB07");
const KEY_COMMA: KeyCode = KeyCode::new("COMMA", "AB08");
const KEY_DOT: KeyCode = KeyCode::new("DOT", "AB09");
const KEY_SLASH: KeyCode = KeyCode::new("SLASH", "AB10");
const KEY_GRAVE: KeyCode = KeyCode::new("GRAVE", "TLDE");
const KEY_1: KeyCode = KeyCode::new("1", "AE01");
const KEY_2: KeyCode = KeyCode::new("2", "AE02");
const KEY_3: KeyCode = KeyCode::new("3", "AE03");
const KEY_4: KeyCode = KeyCode::new("4", "AE04");
const KEY_5: KeyCode = KeyCode::new("5", "AE05");
const KEY_7: KeyCode = KeyCode::new("7", "AE07");
const KEY_8: KeyCode = KeyCode::new("8", "AE08");
const KEY_9: KeyCode = KeyCode::new("9", "AE09");

const NO: Action = Action::NONE;
const CTRL: Action = Action::mods(ModifierMask::CONTROL);
const LVL3: Action = Action::mods(ModifierMask::LEVEL_THREE);

fn g(group: u8) -> Action {
    Action::group(group)
}

fn actions<const N: usize>(slots: [Action; N]) -> Level {
    Level::from_actions(slots)
}

fn keysyms<const N: usize>(names: [Option<&str>; N]) -> Level {
    Level::from_keysyms(names.map(Keysym::parse))
}

fn mix<const N: usize, const M: usize>(names: [Option<&str>; N], slots: [Action; M]) -> Level {
    Level::mix(names.map(Keysym::parse), slots)
}

fn entry<const N: usize>(levels: [Level; N]) -> KeyEntry {
    KeyEntry::new(levels)
}

fn note(text: &'static str) -> GroupItem {
    GroupItem::Comment(text)
}

fn case(key: KeyCode, base: KeyEntry, update: KeyEntry) -> GroupItem {
    GroupItem::Case(TestCase::new(key, base, update))
}

/// Cases whose keysym-only behavior diverges between dialects; they stay
/// out of the shared keysyms-only derivation.
const ACTIONS_AND_MIXED: CaseKind = CaseKind::ACTIONS_ONLY.union(CaseKind::KEYSYMS_AND_ACTIONS);

/// Actions-only scenarios both dialects agree on.
fn actions_only_common() -> TestGroup {
    TestGroup::new(
        "actions-only",
        [
            note("Trivial cases"),
            case(KEY_NEW, KeyEntry::empty(), KeyEntry::empty()),
            case(KEY_COFFEE, KeyEntry::empty(), entry([actions([g(3)])])),
            case(KEY_QUESTION, entry([actions([g(2)])]), KeyEntry::empty()),
            note("Same entry"),
            case(KEY_REDO, entry([actions([g(2)])]), entry([actions([g(2)])])),
            note("Level count mismatch"),
            TestCase::new(
                KEY_Q,
                entry([actions([NO]), actions([g(2)])]),
                entry([actions([g(3)]), actions([NO]), actions([NO])]),
            )
            .kinds(ACTIONS_AND_MIXED)
            .into(),
            TestCase::new(
                KEY_W,
                entry([actions([NO]), actions([g(2)]), actions([NO])]),
                entry([actions([g(3)]), actions([NO])]),
            )
            .kinds(ACTIONS_AND_MIXED)
            .into(),
            case(
                KEY_E,
                entry([actions([g(2)]), actions([g(2)])]),
                entry([actions([g(3)]), actions([g(3)]), actions([g(3)])]),
            ),
            case(
                KEY_R,
                entry([actions([g(2)]), actions([g(2)]), actions([g(2)])]),
                entry([actions([g(3)]), actions([g(3)])]),
            ),
            note("Single-slot levels"),
            case(
                KEY_T,
                entry([actions([NO]), actions([NO])]),
                entry([actions([NO]), actions([NO])]),
            ),
            TestCase::new(
                KEY_Y,
                entry([actions([NO]), actions([NO])]),
                entry([actions([g(3)]), actions([NO])]),
            )
            .kinds(ACTIONS_AND_MIXED)
            .into(),
            case(
                KEY_U,
                entry([actions([NO]), actions([NO])]),
                entry([actions([NO]), actions([g(3)])]),
            ),
            case(
                KEY_I,
                entry([actions([NO]), actions([NO])]),
                entry([actions([g(3)]), actions([g(3)])]),
            ),
            case(
                KEY_O,
                entry([actions([g(2)]), actions([g(2)])]),
                entry([actions([NO]), actions([NO])]),
            ),
            TestCase::new(
                KEY_P,
                entry([actions([g(2)]), actions([g(2)])]),
                entry([actions([g(3)]), actions([NO])]),
            )
            .kinds(ACTIONS_AND_MIXED)
            .into(),
            case(
                KEY_LEFTBRACE,
                entry([actions([g(2)]), actions([g(2)])]),
                entry([actions([NO]), actions([g(3)])]),
            ),
            case(
                KEY_RIGHTBRACE,
                entry([actions([g(2)]), actions([g(2)])]),
                entry([actions([g(3)]), actions([g(3)])]),
            ),
        ],
    )
}

/// Further mixes between keysyms and actions shared by both dialects.
fn extras_common() -> TestGroup {
    TestGroup::new(
        "keysyms-and-actions-extras",
        [case(
            KEY_GRAVE,
            entry([keysyms([Some("a")]), actions([g(2)])]),
            entry([actions([g(3)]), keysyms([Some("X")])]),
        )],
    )
}

/// The suite of scenarios both consumer dialects handle identically.
pub fn suite_common() -> MergeResult<TestSuite> {
    let actions = actions_only_common();
    let keysyms_only = actions.project_keysyms("keysyms-only", false)?;
    let with_actions = actions.project_keysyms("keysyms-and-actions", true)?;
    Ok(TestSuite {
        name: "common",
        suffix: "",
        groups: vec![keysyms_only, actions, with_actions, extras_common()],
    })
}

/// The X11 xkbcomp suite.
///
/// xkbcomp discards trailing `NoSymbol` levels in keysym-only maps, so the
/// level-count-mismatch scenarios carry pinned expectations instead of the
/// engine's results.
pub fn suite_x11() -> MergeResult<TestSuite> {
    let actions_group = TestGroup::new("actions-only", []);
    let staging = TestGroup::new(
        "keysyms-only",
        [
            note("Level count mismatch"),
            TestCase::new(
                KEY_Q,
                entry([actions([NO]), actions([g(2)])]),
                entry([actions([g(3)]), actions([NO]), actions([NO])]),
            )
            .kinds(CaseKind::KEYSYMS_ONLY)
            .pin_augment(entry([actions([g(3)]), actions([g(2)])]))
            .pin_override(entry([actions([g(3)]), actions([g(2)])]))
            .pin_replace(entry([actions([g(3)])]))
            .into(),
            TestCase::new(
                KEY_W,
                entry([actions([NO]), actions([g(2)]), actions([NO])]),
                entry([actions([g(3)]), actions([NO])]),
            )
            .kinds(CaseKind::KEYSYMS_ONLY)
            .pin_augment(entry([actions([g(3)]), actions([g(2)])]))
            .pin_override(entry([actions([g(3)]), actions([g(2)])]))
            .pin_replace(entry([actions([g(3)])]))
            .into(),
            note("Single-slot levels"),
            TestCase::new(
                KEY_Y,
                entry([actions([NO]), actions([NO])]),
                entry([actions([g(3)]), actions([NO])]),
            )
            .kinds(CaseKind::KEYSYMS_ONLY)
            .pin_augment(entry([actions([g(3)])]))
            .pin_override(entry([actions([g(3)])]))
            .pin_replace(entry([actions([g(3)])]))
            .into(),
            TestCase::new(
                KEY_P,
                entry([actions([g(2)]), actions([g(2)])]),
                entry([actions([g(3)]), actions([NO])]),
            )
            .kinds(CaseKind::KEYSYMS_ONLY)
            .pin_replace(entry([actions([g(3)])]))
            .into(),
        ],
    );
    let keysyms_only = staging.project_keysyms("keysyms-only", false)?;
    let with_actions = actions_group.project_keysyms("keysyms-and-actions", true)?;
    Ok(TestSuite {
        name: "x11",
        suffix: "_x11",
        groups: vec![keysyms_only, actions_group, with_actions],
    })
}

/// Actions-only scenarios specific to the xkbcommon dialect.
fn actions_only_xkbcommon() -> TestGroup {
    TestGroup::new(
        "actions-only",
        [
            note("Same entry"),
            case(
                KEY_REDO,
                entry([actions([g(2)]), actions([g(2), CTRL])]),
                entry([actions([g(2)]), actions([g(2), CTRL])]),
            ),
            note("Level count mismatch"),
            case(
                KEY_Q,
                entry([actions([NO]), actions([g(2)])]),
                entry([actions([g(3)]), actions([NO]), actions([NO])]),
            ),
            case(
                KEY_W,
                entry([actions([NO]), actions([g(2)]), actions([NO])]),
                entry([actions([g(3)]), actions([NO])]),
            ),
            note("Single slot to multiple slots"),
            case(
                KEY_A,
                entry([actions([NO]), actions([NO])]),
                entry([actions([g(3), NO]), actions([NO])]),
            ),
            case(
                KEY_S,
                entry([actions([NO]), actions([NO])]),
                entry([actions([g(3), NO]), actions([NO, NO])]),
            ),
            case(
                KEY_F,
                entry([actions([NO]), actions([NO])]),
                entry([actions([NO, NO]), actions([g(3), NO])]),
            ),
            case(
                KEY_J,
                entry([actions([g(2)]), actions([g(2)])]),
                entry([actions([g(3), NO]), actions([NO])]),
            ),
            case(
                KEY_K,
                entry([actions([g(2)]), actions([g(2)])]),
                entry([actions([g(3), NO]), actions([NO, NO])]),
            ),
            note("Multiple slots to multiple slots"),
            case(
                KEY_V,
                entry([actions([g(2), NO]), actions([NO, g(2)])]),
                entry([actions([g(3), NO]), actions([NO, g(3)])]),
            ),
            case(
                KEY_B,
                entry([actions([g(2), NO]), actions([NO, g(2)])]),
                entry([actions([g(3), LVL3]), actions([LVL3, g(3)])]),
            ),
            case(
                KEY_M,
                entry([actions([g(2), CTRL]), actions([CTRL, g(2)])]),
                entry([actions([g(3), NO]), actions([NO, g(3)])]),
            ),
            case(
                KEY_COMMA,
                entry([actions([NO, NO]), actions([NO, NO, NO])]),
                entry([actions([NO, NO, NO]), actions([NO, NO])]),
            ),
            case(
                KEY_DOT,
                entry([actions([NO, NO]), actions([NO, NO, NO])]),
                entry([actions([g(3), NO, LVL3]), actions([LVL3, g(3)])]),
            ),
            case(
                KEY_SLASH,
                entry([actions([g(2), CTRL]), actions([CTRL, NO, g(2)])]),
                entry([actions([NO, NO, NO]), actions([NO, NO])]),
            ),
            note("Multiple slots to single slot"),
            case(
                KEY_GRAVE,
                entry([actions([NO, NO]), actions([g(2), CTRL])]),
                entry([actions([NO]), actions([NO])]),
            ),
            case(
                KEY_1,
                entry([actions([NO, NO]), actions([g(2), CTRL])]),
                entry([actions([g(3)]), actions([g(3)])]),
            ),
            case(
                KEY_3,
                entry([actions([g(2), NO]), actions([NO, g(2)])]),
                entry([actions([g(3)]), actions([g(3)])]),
            ),
            note("Level and slot count mix"),
            case(
                KEY_4,
                entry([actions([g(2)])]),
                entry([actions([g(3), LVL3]), actions([g(3), LVL3])]),
            ),
            case(
                KEY_5,
                entry([actions([g(2), CTRL])]),
                entry([actions([g(3), LVL3]), actions([g(3)])]),
            ),
        ],
    )
}

/// Further keysym/action mixes specific to the xkbcommon dialect.
fn extras_xkbcommon() -> TestGroup {
    TestGroup::new(
        "keysyms-and-actions-extras",
        [
            case(
                KEY_1,
                entry([keysyms([Some("a")]), actions([g(2)])]),
                entry([actions([g(3), LVL3]), keysyms([Some("X"), Some("Y")])]),
            ),
            note("Multiple slots to a single keysym or action"),
            case(
                KEY_2,
                entry([keysyms([Some("a"), Some("b")]), actions([g(2), CTRL])]),
                entry([actions([g(3)]), keysyms([Some("X")])]),
            ),
            note("Keysyms on one side, actions on the other, equal counts"),
            case(
                KEY_3,
                entry([keysyms([Some("a"), Some("b")]), actions([g(2), CTRL])]),
                entry([actions([g(3), LVL3]), keysyms([Some("X"), Some("Y")])]),
            ),
            note("Mixed levels against keysym- or action-only levels"),
            case(
                KEY_4,
                entry([keysyms([Some("a"), None]), actions([g(2), NO])]),
                entry([
                    mix([Some("x"), Some("y")], [g(3), LVL3]),
                    mix([Some("X"), Some("Y")], [g(3), LVL3]),
                ]),
            ),
            case(
                KEY_5,
                entry([keysyms([Some("a"), Some("b")]), actions([g(2), CTRL])]),
                entry([
                    mix([Some("x"), None], [g(3), LVL3]),
                    mix([Some("X"), Some("Y")], [g(3), NO]),
                ]),
            ),
            case(
                KEY_7,
                entry([
                    mix([Some("a"), None], [g(2), CTRL]),
                    mix([Some("A"), Some("B")], [g(2), NO]),
                ]),
                entry([keysyms([Some("x"), Some("y")]), actions([g(3), LVL3])]),
            ),
            note("Mixed levels on both sides"),
            case(
                KEY_8,
                entry([
                    mix([Some("a"), Some("b")], [g(2), CTRL]),
                    mix([None, Some("B")], [g(2), NO]),
                ]),
                entry([
                    mix([None, Some("y")], [g(3), NO]),
                    mix([Some("X"), Some("Y")], [g(3), LVL3]),
                ]),
            ),
            case(
                KEY_9,
                entry([
                    mix([Some("a"), None], [g(2), NO]),
                    mix([None, Some("B")], [NO, CTRL]),
                ]),
                entry([
                    mix([None, Some("y")], [NO, LVL3]),
                    mix([Some("X"), None], [g(3), NO]),
                ]),
            ),
            note("Slot count mismatch with mixed levels"),
            case(
                KEY_Q,
                entry([keysyms([Some("a")]), keysyms([Some("A"), Some("B")])]),
                entry([actions([g(3), LVL3]), actions([g(3)])]),
            ),
            case(
                KEY_W,
                entry([actions([g(3)]), actions([g(3), LVL3])]),
                entry([keysyms([Some("A"), Some("B")]), keysyms([Some("a")])]),
            ),
            case(
                KEY_E,
                entry([
                    mix([Some("a")], [g(2)]),
                    mix([Some("A"), Some("B")], [g(2), CTRL]),
                ]),
                entry([
                    mix([Some("x"), Some("y")], [g(3), LVL3]),
                    mix([Some("X")], [g(3)]),
                ]),
            ),
            note("Regression: single keysym against a doubled mixed level"),
            case(
                KEY_A,
                entry([keysyms([Some("A")])]),
                entry([mix([Some("A"), Some("A")], [g(3), LVL3])]),
            ),
        ],
    )
}

/// The xkbcommon suite.
pub fn suite_xkbcommon() -> MergeResult<TestSuite> {
    let actions = actions_only_xkbcommon();
    let keysyms_only = actions.project_keysyms("keysyms-only", false)?;
    let with_actions = actions.project_keysyms("keysyms-and-actions", true)?;
    Ok(TestSuite {
        name: "xkbcommon",
        suffix: "_xkbcommon",
        groups: vec![keysyms_only, actions, with_actions, extras_xkbcommon()],
    })
}

/// Every suite, in generation order.
pub fn all_suites() -> MergeResult<Vec<TestSuite>> {
    Ok(vec![suite_common()?, suite_x11()?, suite_xkbcommon()?])
}

/// Looks up a single suite by name.
pub fn suite_by_name(name: &str) -> MergeResult<Option<TestSuite>> {
    let suite = match name {
        "common" => Some(suite_common()?),
        "x11" => Some(suite_x11()?),
        "xkbcommon" => Some(suite_xkbcommon()?),
        _ => None,
    };
    Ok(suite)
}
