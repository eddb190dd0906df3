//! Makefile classification.

use super::{counted, verdicts};
use crate::classify::FileKind;

fn makefile(body: &[&str]) -> Vec<(String, bool)> {
    counted(FileKind::Build, "arch/arm/boot/dts/Makefile", body)
}

#[test]
fn test_symbol_reference_is_variability() {
    let result = makefile(&["+obj-$(CONFIG_FOO) += foo.o", "+obj-y += bar.o"]);
    assert_eq!(
        result,
        verdicts(&[("obj-$(CONFIG_FOO) += foo.o", true), ("obj-y += bar.o", false)])
    );
}

#[test]
fn test_continued_file_names_are_general_changes() {
    let result = makefile(&[
        "+dtb-$(CONFIG_MACH_KIRKWOOD) += \\",
        "+\tkirkwood-b3.dtb \\",
        "+\tkirkwood-blackarmor-nas220.dtb",
    ]);

    assert_eq!(
        result,
        verdicts(&[
            ("dtb-$(CONFIG_MACH_KIRKWOOD) += \\", true),
            ("kirkwood-b3.dtb \\", false),
            ("kirkwood-blackarmor-nas220.dtb", false),
        ])
    );
}

#[test]
fn test_appended_file_name_in_guarded_rule() {
    let result = makefile(&[
        " dtb-$(CONFIG_MACH_KIRKWOOD) += \\",
        " \tkirkwood-b3.dtb \\",
        "+\tkirkwood-blackarmor-nas220.dtb",
    ]);
    assert_eq!(
        result,
        verdicts(&[("kirkwood-blackarmor-nas220.dtb", false)])
    );
}

#[test]
fn test_removed_else_and_endif_of_symbol_condition() {
    let result = makefile(&[
        " ifeq ($(CONFIG_PAYLOAD_ELF),y)",
        " \tobj-y += elf.o",
        "-else",
        "-\tobj-y += raw.o",
        "-endif",
    ]);

    assert_eq!(
        result,
        verdicts(&[("else", true), ("obj-y += raw.o", false), ("endif", true)])
    );
}

#[test]
fn test_terminators_of_plain_condition() {
    let result = makefile(&[
        " ifeq ($(ARCH),x86)",
        " \tobj-y += a.o",
        "+else",
        "+\tobj-y += b.o",
        "+endif",
    ]);

    assert_eq!(
        result,
        verdicts(&[("else", false), ("obj-y += b.o", false), ("endif", false)])
    );
}

#[test]
fn test_nested_condition_is_skipped() {
    let result = makefile(&[
        " ifneq ($(CONFIG_FOO),)",
        " ifeq ($(ARCH),arm)",
        " \tobj-y += a.o",
        " endif",
        "+endif",
    ]);
    assert_eq!(result, verdicts(&[("endif", true)]));
}

#[test]
fn test_inner_terminator_belongs_to_inner_condition() {
    let result = makefile(&[
        " ifneq ($(CONFIG_FOO),)",
        " ifeq ($(ARCH),arm)",
        " \tobj-y += a.o",
        "+endif",
        " endif",
    ]);
    assert_eq!(result, verdicts(&[("endif", false)]));
}

#[test]
fn test_symbol_on_condition_continuation() {
    let result = makefile(&[
        " ifeq ($(ARCH), \\",
        " \t$(CONFIG_ARCH_NAME))",
        " \tobj-y += a.o",
        "+endif",
    ]);
    assert_eq!(result, verdicts(&[("endif", true)]));
}

#[test]
fn test_continuation_of_commented_line_is_comment() {
    let result = makefile(&[" # disabled for now: \\", "+\tobj-$(CONFIG_FOO) += foo.o"]);
    assert!(result.is_empty());
}

#[test]
fn test_comment_chain_ignores_other_side_of_change() {
    let result = makefile(&["-# old comment \\", "+obj-y += a.o"]);
    assert_eq!(result, verdicts(&[("obj-y += a.o", false)]));
}

#[test]
fn test_trailing_comment_is_stripped() {
    let result = makefile(&["+obj-y += a.o # see $(CONFIG_FOO)"]);
    assert_eq!(result, verdicts(&[("obj-y += a.o", false)]));
}
