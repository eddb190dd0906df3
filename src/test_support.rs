//! Test support utilities for building commit files.
//!
//! This module provides helpers for tests that need realistic commit text
//! or a directory of commit files.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Timestamp line of the sample commit.
pub const SAMPLE_DATE_LINE: &str = "2011-06-10 06:01:30 +0200";

/// SHA of the sample commit.
pub const SAMPLE_SHA: &str = "3f2a1c9e";

/// Build the text of a commit file from its timestamp line and blocks.
///
/// Each block is given as the changed path and its lines from the first
/// hunk marker on.
pub fn commit_text(date_line: &str, blocks: &[(&str, &[&str])]) -> String {
    let mut text = String::new();
    text.push_str(date_line);
    text.push('\n');

    for (path, body) in blocks {
        text.push_str(&format!("diff --git a/{} b/{}\n", path, path));
        text.push_str("index 1111111..2222222 100644\n");
        text.push_str(&format!("--- a/{}\n+++ b/{}\n", path, path));
        for line in body.iter() {
            text.push_str(line);
            text.push('\n');
        }
    }

    text
}

/// A commit touching one file of every kind, plus a binary file.
///
/// Expected counts (general / variability):
/// - model `drivers/net/Kconfig`: added 2 / 3
/// - source `drivers/net/foo.c`: added 6 / 2
/// - build `drivers/net/Makefile`: added 1 / 1, deleted 1 / 0
/// - other `Documentation/networking/foo.rst`: nothing
/// - `firmware/foo.bin` has no hunk and is skipped with a warning
pub fn sample_commit() -> String {
    let mut text = commit_text(
        SAMPLE_DATE_LINE,
        &[
            (
                "drivers/net/Kconfig",
                &[
                    "@@ -10,6 +10,12 @@ config NET_CORE",
                    " config NET_CORE",
                    " \tbool \"Core\"",
                    "+",
                    "+config NET_FOO",
                    "+\ttristate \"Foo driver\"",
                    "+\tdepends on PCI",
                    "+\thelp",
                    "+\t  Say Y here to enable foo.",
                ],
            ),
            (
                "drivers/net/foo.c",
                &[
                    "@@ -0,0 +1,11 @@",
                    "+/* Foo driver */",
                    "+#include <linux/module.h>",
                    "+",
                    "+#ifdef CONFIG_NET_FOO_DEBUG",
                    "+#define foo_dbg(x) pr_debug(x)",
                    "+#endif",
                    "+",
                    "+static int foo_probe(void)",
                    "+{",
                    "+\treturn 0;",
                    "+}",
                ],
            ),
            (
                "drivers/net/Makefile",
                &[
                    "@@ -1,3 +1,4 @@",
                    " obj-$(CONFIG_NET_CORE) += core.o",
                    "+obj-$(CONFIG_NET_FOO) += foo.o",
                    "-obj-y += legacy.o",
                    "+obj-y += compat.o",
                ],
            ),
            (
                "Documentation/networking/foo.rst",
                &["@@ -0,0 +1 @@", "+Foo driver for CONFIG_NET_FOO"],
            ),
        ],
    );
    text.push_str("diff --git a/firmware/foo.bin b/firmware/foo.bin\n");
    text.push_str("Binary files a/firmware/foo.bin and b/firmware/foo.bin differ\n");
    text
}

/// A commit that only changes help text.
pub fn help_only_commit() -> String {
    commit_text(
        "2012-01-02 10:00:00 +0000",
        &[(
            "drivers/net/Kconfig",
            &[
                "@@ -1,4 +1,4 @@",
                " config NET_CORE",
                " \thelp",
                "-\t  Old help.",
                "+\t  New help.",
            ],
        )],
    )
}

/// A commit that only adds a symbol reference.
pub fn variability_only_commit() -> String {
    commit_text(
        "2013-03-04 12:30:00 -0500",
        &[(
            "arch/arm/Makefile",
            &["@@ -1 +1,2 @@", " obj-y += core.o", "+obj-$(CONFIG_ARM_FOO) += foo.o"],
        )],
    )
}

/// A commit without any line-level change.
pub fn mode_change_commit() -> String {
    let mut text = String::from("2014-05-06 08:00:00 +0100\n");
    text.push_str("diff --git a/scripts/foo.sh b/scripts/foo.sh\n");
    text.push_str("old mode 100644\nnew mode 100755\n");
    text
}

/// Write `text` as `name` into `dir` and return its path.
pub fn write_commit(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("failed to write commit file");
    path
}

/// Create an input directory holding the given commit files.
pub fn commit_dir(commits: &[(&str, String)]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    for (name, text) in commits {
        write_commit(dir.path(), name, text);
    }
    dir
}
