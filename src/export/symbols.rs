//! Symbols data file rendering.
//!
//! Emits one symbols file per suite. Each group renders as a family of
//! sections: the `base` and `new` inputs, the expected result per merge
//! mode, and `new-<mode>` composition sections that stack `new` onto
//! `base` with the mode's merge statement. The consuming test harness
//! compiles a composition section and compares it against the matching
//! expected section.

use crate::constants::SYMBOLS_FILE_STEM;
use crate::fixtures::{GroupItem, TestCase, TestGroup, TestSuite, ALT_GROUP_KEYSYMS};
use crate::merge::MergeMode;
use crate::models::KeyEntry;
use anyhow::Result;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// The symbols file name for a suite.
#[must_use]
pub fn file_name(suite: &TestSuite) -> String {
    format!("{}{}", SYMBOLS_FILE_STEM, suite.suffix)
}

/// Renders a suite's symbols file.
///
/// With `debug` set, expected sections carry per-key provenance comments
/// telling computed and pinned expectations apart.
#[must_use]
pub fn render_suite(suite: &TestSuite, debug: bool) -> String {
    let mut out = String::new();
    let file = file_name(suite);

    let _ = writeln!(out, "// Generated by symforge generate. Do not edit.");
    let _ = writeln!(out, "//");
    let _ = writeln!(out, "// Merge-mode fixtures, suite \"{}\".", suite.name);
    out.push('\n');
    render_alt_groups(&mut out, suite);

    for group in &suite.groups {
        let _ = writeln!(out, "// Group: {}", group.name);
        render_data_section(&mut out, group, &format!("{}-base", group.name), |case| {
            &case.base
        });
        render_data_section(&mut out, group, &format!("{}-new", group.name), |case| {
            &case.update
        });
        for mode in MergeMode::ALL {
            render_expected_section(&mut out, group, mode, debug);
        }
        for mode in MergeMode::ALL {
            render_composition_section(&mut out, group, &file, mode);
        }
    }
    out
}

/// Writes a suite's symbols file into `dir` and returns its path.
pub fn write_suite(suite: &TestSuite, dir: &Path, debug: bool) -> Result<PathBuf> {
    let path = dir.join(file_name(suite));
    super::atomic_write(&path, &render_suite(suite, debug))?;
    Ok(path)
}

/// The alternate groups attached to every fixture key, so group-switch
/// actions land on populated targets.
fn render_alt_groups(out: &mut String, suite: &TestSuite) {
    let _ = writeln!(out, "xkb_symbols \"extra-groups\" {{");
    for code in suite.key_codes() {
        let _ = writeln!(out, "    key {} {{", code.xkb_name());
        for (row, keysyms) in ALT_GROUP_KEYSYMS.iter().enumerate() {
            let separator = if row + 1 == ALT_GROUP_KEYSYMS.len() {
                ""
            } else {
                ","
            };
            let _ = writeln!(
                out,
                "        symbols[Group{}]=[{}]{}",
                row + 2,
                keysyms.join(", "),
                separator
            );
        }
        let _ = writeln!(out, "    }};");
    }
    let _ = writeln!(out, "}};");
    out.push('\n');
}

/// A section holding one key line per case, selected by `pick`.
fn render_data_section<'a>(
    out: &mut String,
    group: &'a TestGroup,
    section: &str,
    pick: impl Fn(&'a TestCase) -> &'a KeyEntry,
) {
    let _ = writeln!(out, "xkb_symbols \"{section}\" {{");
    for item in &group.items {
        match item {
            GroupItem::Comment(text) => {
                let _ = writeln!(out, "    // {text}");
            }
            GroupItem::Case(case) => render_key(out, case, pick(case)),
        }
    }
    let _ = writeln!(out, "}};");
    out.push('\n');
}

/// The expected result of one merge mode, as a data section.
fn render_expected_section(out: &mut String, group: &TestGroup, mode: MergeMode, debug: bool) {
    let _ = writeln!(out, "xkb_symbols \"{}-{}\" {{", group.name, mode);
    for item in &group.items {
        match item {
            GroupItem::Comment(text) => {
                let _ = writeln!(out, "    // {text}");
            }
            GroupItem::Case(case) => {
                if debug {
                    let provenance = if case.is_pinned(mode) { "pinned" } else { "computed" };
                    let _ = writeln!(out, "    // {}: {}", case.key.xkb_name(), provenance);
                }
                render_key(out, case, &case.expected(mode));
            }
        }
    }
    let _ = writeln!(out, "}};");
    out.push('\n');
}

/// A section composing `base` and `new` with the mode's merge statement.
fn render_composition_section(out: &mut String, group: &TestGroup, file: &str, mode: MergeMode) {
    let _ = writeln!(out, "xkb_symbols \"{}-new-{}\" {{", group.name, mode);
    let _ = writeln!(out, "    include \"{}({}-base)\"", file, group.name);
    let _ = writeln!(
        out,
        "    {} \"{}({}-new)\"",
        mode.statement_keyword(),
        file,
        group.name
    );
    let _ = writeln!(out, "}};");
    out.push('\n');
}

fn render_key(out: &mut String, case: &TestCase, entry: &KeyEntry) {
    let body = entry.xkb();
    if body.is_empty() {
        let _ = writeln!(out, "    key {} {{ }};", case.key.xkb_name());
    } else {
        let _ = writeln!(out, "    key {} {{ {} }};", case.key.xkb_name(), body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::catalog;

    #[test]
    fn test_render_is_deterministic() {
        let suite = catalog::suite_common().unwrap();
        assert_eq!(render_suite(&suite, false), render_suite(&suite, false));
    }

    #[test]
    fn test_render_has_all_group_sections() {
        let suite = catalog::suite_common().unwrap();
        let rendered = render_suite(&suite, false);
        for group in &suite.groups {
            for section in ["base", "new", "augment", "replace", "new-override"] {
                let marker = format!("xkb_symbols \"{}-{}\" {{", group.name, section);
                assert!(rendered.contains(&marker), "missing section {marker:?}");
            }
        }
    }

    #[test]
    fn test_composition_uses_merge_statements() {
        let suite = catalog::suite_common().unwrap();
        let rendered = render_suite(&suite, false);
        assert!(rendered.contains("augment \"merge_modes(actions-only-new)\""));
        assert!(rendered.contains("override \"merge_modes(actions-only-new)\""));
        // The default mode is a plain include statement.
        assert!(rendered.contains("xkb_symbols \"actions-only-new-update\" {\n    include \"merge_modes(actions-only-base)\"\n    include \"merge_modes(actions-only-new)\"\n};"));
    }

    #[test]
    fn test_empty_entry_renders_empty_key() {
        let suite = catalog::suite_common().unwrap();
        let rendered = render_suite(&suite, false);
        assert!(rendered.contains("key <I189> { };"));
    }

    #[test]
    fn test_debug_marks_pinned_expectations() {
        let suite = catalog::suite_x11().unwrap();
        let rendered = render_suite(&suite, true);
        assert!(rendered.contains("// <AD01>: pinned"));
        assert!(rendered.contains("// <AD10>: computed"));
    }

    #[test]
    fn test_alt_groups_cover_every_key() {
        let suite = catalog::suite_xkbcommon().unwrap();
        let rendered = render_suite(&suite, false);
        for code in suite.key_codes() {
            let marker = format!("key {} {{\n        symbols[Group2]", code.xkb_name());
            assert!(rendered.contains(&marker), "missing alt groups for {}", code.xkb_name());
        }
    }
}
