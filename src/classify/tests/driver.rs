//! The counting driver and the shared types.

use super::{BODY, block};
use crate::classify::{
    ChangeCounts, ChangeType, Classifier, FileKind, classify_lines, count_changes,
};
use crate::logging::{Level, MemoryLog};

const MIXED_SOURCE: &[&str] = &[
    " #ifdef CONFIG_NET",
    "+\tnet_init();",
    "+",
    "+   ",
    "-\t/* only a comment */",
    "-#endif",
    "+#endif /* CONFIG_NET */",
    "+\tif (IS_ENABLED(CONFIG_PM)) {",
    "+\t\tpm_init();",
    "+\t}",
    "-\told_call();",
];

#[test]
fn test_change_type_of_raw_lines() {
    assert_eq!(ChangeType::of("+x"), ChangeType::Added);
    assert_eq!(ChangeType::of("-x"), ChangeType::Deleted);
    assert_eq!(ChangeType::of(" x"), ChangeType::Context);
    assert_eq!(ChangeType::of("@@ -1 +1 @@"), ChangeType::Context);
    assert_eq!(ChangeType::of(""), ChangeType::Context);
    assert_eq!(ChangeType::Added.inverse(), Some(ChangeType::Deleted));
    assert_eq!(ChangeType::Context.inverse(), None);
}

#[test]
fn test_counts_record_and_sum() {
    let mut counts = ChangeCounts::default();
    counts.record(ChangeType::Added, false);
    counts.record(ChangeType::Added, true);
    counts.record(ChangeType::Added, true);
    counts.record(ChangeType::Deleted, false);
    counts.record(ChangeType::Context, true);

    assert_eq!(counts.all_added(), 3);
    assert_eq!(counts.all_deleted(), 1);
    assert_eq!(counts.artifact_lines(), 2);
    assert_eq!(counts.variability_lines(), 2);

    let mut total = ChangeCounts::default();
    total += counts;
    total += counts;
    assert_eq!(total.added_variability, 4);
    assert!(!total.is_empty());
    assert!(ChangeCounts::default().is_empty());
}

#[test]
fn test_file_kind_display() {
    assert_eq!(FileKind::Model.to_string(), "model");
    assert_eq!(FileKind::Source.to_string(), "source");
    assert_eq!(serde_json::to_string(&FileKind::Build).unwrap(), "\"build\"");
}

#[test]
fn test_mixed_source_counts() {
    let block = block("net/core/dev.c", MIXED_SOURCE);
    let log = MemoryLog::new();
    let classifier = Classifier::for_kind(FileKind::Source, &block, &log);

    let counts = count_changes(&classifier);

    // net_init, pm_init / #endif, if, } / old_call / #endif
    assert_eq!(
        counts,
        ChangeCounts {
            added: 2,
            added_variability: 3,
            deleted: 1,
            deleted_variability: 1,
        }
    );
}

#[test]
fn test_counters_partition_counted_lines() {
    let samples: [(FileKind, &str, &[&str]); 3] = [
        (FileKind::Source, "net/core/dev.c", MIXED_SOURCE),
        (
            FileKind::Build,
            "drivers/Makefile",
            &[
                "+obj-$(CONFIG_A) += a.o",
                "+ifeq ($(CONFIG_B),y)",
                "+obj-y += b.o",
                "+endif",
                "-# removed comment",
                "-obj-y += c.o",
            ],
        ),
        (
            FileKind::Model,
            "drivers/Kconfig",
            &[
                "+config A",
                "+\tbool \"A\"",
                "+\thelp",
                "+\t  Some help.",
                "-comment \"B\"",
                "-\tdepends on C",
            ],
        ),
    ];

    for (kind, path, body) in samples {
        let block = block(path, body);
        let log = MemoryLog::new();
        let classifier = Classifier::for_kind(kind, &block, &log);

        let lines = classify_lines(&classifier);
        let counts = count_changes(&classifier);

        let added = lines.iter().filter(|l| l.change == ChangeType::Added).count() as u64;
        let deleted = lines.iter().filter(|l| l.change == ChangeType::Deleted).count() as u64;
        assert_eq!(counts.all_added(), added, "{}", path);
        assert_eq!(counts.all_deleted(), deleted, "{}", path);
        assert!(lines.iter().all(|l| !l.text.trim().is_empty()), "{}", path);
    }
}

#[test]
fn test_only_changed_lines_after_hunk_marker_are_counted() {
    let block = block("drivers/Makefile", &[" obj-$(CONFIG_A) += a.o", "+obj-y += b.o"]);
    let log = MemoryLog::new();
    let classifier = Classifier::for_kind(FileKind::Build, &block, &log);

    let lines = classify_lines(&classifier);

    // "--- a/..." and "+++ b/..." precede the hunk marker
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].index, BODY + 1);
    assert_eq!(lines[0].change, ChangeType::Added);
}

#[test]
fn test_other_files_count_nothing() {
    let block = block("Documentation/foo.txt", &["+CONFIG_FOO enables foo", "-config BAR"]);
    let log = MemoryLog::new();
    let classifier = Classifier::for_kind(FileKind::Other, &block, &log);

    assert_eq!(classifier.kind(), FileKind::Other);
    assert!(count_changes(&classifier).is_empty());
    assert!(!classifier.is_variability_change("CONFIG_FOO", BODY));

    let ignored = log.at_level(Level::Debug);
    assert_eq!(ignored.len(), 1);
    assert_eq!(ignored[0].origin, "OtherClassifier");
}

#[test]
fn test_variability_matches_are_logged() {
    let block = block("drivers/Kconfig", &["+config FOO", "+\thelp"]);
    let log = MemoryLog::new();
    let classifier = Classifier::for_kind(FileKind::Model, &block, &log);

    count_changes(&classifier);

    let entries = log.at_level(Level::Debug);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].origin, "ModelClassifier");
    assert_eq!(entries[0].detail.as_deref(), Some("config FOO"));
}

#[test]
fn test_normalization_is_idempotent_on_clean_lines() {
    let cases: [(FileKind, &str, &str); 3] = [
        (FileKind::Model, "Kconfig", "\tdepends on NET && PCI"),
        (FileKind::Build, "Makefile", "obj-$(CONFIG_FOO)\t+= foo.o"),
        (FileKind::Source, "foo.c", "\treturn ioread32(base + REG_CTRL);"),
    ];

    for (kind, path, clean) in cases {
        let context = format!(" {}", clean);
        let block = block(path, &[context.as_str()]);
        let log = MemoryLog::new();
        let classifier = Classifier::for_kind(kind, &block, &log);

        let once = classifier.normalize(clean, BODY);
        assert_eq!(once, clean, "{}", path);
        assert_eq!(classifier.normalize(&once, BODY), once, "{}", path);
    }
}
