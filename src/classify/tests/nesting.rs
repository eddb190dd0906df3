//! Terminators of nested conditionals, for every nesting depth from 0 to 5
//! and every assignment of symbol references to the nesting levels.

use super::block;
use crate::classify::{Classifier, FileKind, classify_lines};
use crate::logging::MemoryLog;

const MAX_DEPTH: usize = 5;

/// How one language spells a conditional block.
struct Dialect {
    kind: FileKind,
    path: &'static str,
    open_with_symbol: fn(usize) -> String,
    open_plain: fn(usize) -> String,
    else_line: &'static str,
    end_line: &'static str,
    body: &'static str,
}

fn dialects() -> [Dialect; 3] {
    [
        Dialect {
            kind: FileKind::Build,
            path: "drivers/Makefile",
            open_with_symbol: |level| format!("ifeq ($(CONFIG_LEVEL{}),y)", level),
            open_plain: |level| format!("ifeq ($(ARCH),arch{})", level),
            else_line: "else",
            end_line: "endif",
            body: "obj-y += work.o",
        },
        Dialect {
            kind: FileKind::Source,
            path: "drivers/work.c",
            open_with_symbol: |level| format!("#if defined(CONFIG_LEVEL{})", level),
            open_plain: |level| format!("#if defined(FEATURE_LEVEL{})", level),
            else_line: "#else",
            end_line: "#endif",
            body: "do_work();",
        },
        Dialect {
            kind: FileKind::Source,
            path: "drivers/work.c",
            open_with_symbol: |level| format!("if (IS_ENABLED(CONFIG_LEVEL{})) {{", level),
            open_plain: |level| format!("if (feature_level{}) {{", level),
            else_line: "} else {",
            end_line: "}",
            body: "do_work();",
        },
    ]
}

/// Emit the conditional of `level` with all deeper levels nested in its
/// first branch. Openings and bodies are context lines; both terminators
/// of every level are added lines whose expected verdict is pushed in the
/// order they appear.
fn nest(
    dialect: &Dialect,
    symbols: &[bool],
    level: usize,
    lines: &mut Vec<String>,
    expected: &mut Vec<bool>,
) {
    let Some(&has_symbol) = symbols.get(level) else {
        return;
    };

    let open = if has_symbol {
        (dialect.open_with_symbol)(level)
    } else {
        (dialect.open_plain)(level)
    };
    lines.push(format!(" {}", open));
    lines.push(format!(" {}", dialect.body));
    nest(dialect, symbols, level + 1, lines, expected);
    lines.push(format!("+{}", dialect.else_line));
    expected.push(has_symbol);
    lines.push(format!(" {}", dialect.body));
    lines.push(format!("+{}", dialect.end_line));
    expected.push(has_symbol);
}

fn symbol_assignments(levels: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1u32 << levels).map(move |mask| {
        (0..levels)
            .map(|level| mask & (1 << level) != 0)
            .collect()
    })
}

#[test]
fn test_terminators_follow_their_own_condition_at_any_depth() {
    for dialect in &dialects() {
        for depth in 0..=MAX_DEPTH {
            for symbols in symbol_assignments(depth + 1) {
                let mut lines = Vec::new();
                let mut expected = Vec::new();
                nest(dialect, &symbols, 0, &mut lines, &mut expected);

                let body: Vec<&str> = lines.iter().map(String::as_str).collect();
                let block = block(dialect.path, &body);
                let log = MemoryLog::new();
                let classifier = Classifier::for_kind(dialect.kind, &block, &log);

                let actual: Vec<bool> = classify_lines(&classifier)
                    .iter()
                    .map(|line| line.variability)
                    .collect();

                assert_eq!(
                    actual, expected,
                    "{} depth {} symbols {:?}",
                    dialect.end_line, depth, symbols
                );
            }
        }
    }
}

#[test]
fn test_outermost_terminator_at_depth_five() {
    let symbols = [true, false, false, false, false, false];
    let dialects = dialects();
    let dialect = &dialects[1];
    let mut lines = Vec::new();
    let mut expected = Vec::new();
    nest(dialect, &symbols, 0, &mut lines, &mut expected);

    assert_eq!(lines.last().map(String::as_str), Some("+#endif"));
    assert_eq!(expected.last(), Some(&true));
    assert_eq!(expected.iter().filter(|v| **v).count(), 2);
}
