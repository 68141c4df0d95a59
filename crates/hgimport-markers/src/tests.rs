use super::*;

fn rename(from: &str, to: &str) -> Operation {
    Operation::Rename {
        from: from.to_string(),
        to: to.to_string(),
    }
}

fn commands(ops: &[Operation]) -> Vec<&Operation> {
    ops.iter().filter(|op| op.is_command()).collect()
}

#[test]
fn test_empty_input() {
    let ops = scan_diff("", Pairing::Strict).unwrap();
    assert!(ops.is_empty());
}

#[test]
fn test_deleted_file() {
    let diff = r#"Index: foo.txt
===================================================================
deleted file mode 100644
--- a/foo.txt
+++ /dev/null
@@ -1,2 +0,0 @@
-Line 1
-Line 2"#;

    let ops = scan_diff(diff, Pairing::Strict).unwrap();
    assert_eq!(
        ops,
        vec![
            Operation::Announce("foo.txt".to_string()),
            Operation::Remove("foo.txt".to_string()),
        ]
    );
}

#[test]
fn test_renamed_file() {
    let diff = r#"Index: b.txt
diff --git a/a.txt b/b.txt
similarity index 100%
rename from a.txt
rename to b.txt"#;

    let ops = scan_diff(diff, Pairing::Strict).unwrap();
    assert_eq!(commands(&ops), vec![&rename("a.txt", "b.txt")]);
}

#[test]
fn test_copied_file_reverts_source_after_copy() {
    let diff = r#"Index: c.txt
diff --git a/a.txt b/c.txt
similarity index 100%
copy from a.txt
copy to c.txt"#;

    let ops = scan_diff(diff, Pairing::Strict).unwrap();
    assert_eq!(
        commands(&ops),
        vec![
            &Operation::Copy {
                from: "a.txt".to_string(),
                to: "c.txt".to_string(),
            },
            &Operation::Revert("a.txt".to_string()),
        ]
    );
}

#[test]
fn test_modification_and_rename_scenario() {
    let diff = r#"Index: src/lib.rs
===================================================================
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,3 +1,3 @@
 fn main() {
-    old();
+    new();
 }
Index: docs/new.md
diff --git a/docs/old.md b/docs/new.md
similarity index 90%
rename from docs/old.md
rename to docs/new.md
--- a/docs/old.md
+++ b/docs/new.md
@@ -1 +1 @@
-Old title
+New title"#;

    let ops = scan_diff(diff, Pairing::Strict).unwrap();
    let announced: Vec<_> = ops
        .iter()
        .filter(|op| matches!(op, Operation::Announce(_)))
        .collect();
    assert_eq!(announced.len(), 2);
    assert_eq!(commands(&ops), vec![&rename("docs/old.md", "docs/new.md")]);
}

#[test]
fn test_pairs_do_not_leak_into_later_sections() {
    let diff = r#"Index: b.txt
rename from a.txt
rename to b.txt
Index: d.txt
rename from c.txt
rename to d.txt
Index: e.txt
deleted file mode 100644"#;

    let ops = scan_diff(diff, Pairing::Strict).unwrap();
    assert_eq!(
        commands(&ops),
        vec![
            &rename("a.txt", "b.txt"),
            &rename("c.txt", "d.txt"),
            &Operation::Remove("e.txt".to_string()),
        ]
    );
}

#[test]
fn test_rename_and_copy_track_sources_independently() {
    let diff = r#"Index: x
rename from r1
copy from c1
copy to c2
rename to r2"#;

    let ops = scan_diff(diff, Pairing::Strict).unwrap();
    assert_eq!(
        commands(&ops),
        vec![
            &Operation::Copy {
                from: "c1".to_string(),
                to: "c2".to_string(),
            },
            &Operation::Revert("c1".to_string()),
            &rename("r1", "r2"),
        ]
    );
}

#[test]
fn test_content_lines_mentioning_markers_are_ignored() {
    let diff = r#"Index: notes.txt
@@ -1 +1,2 @@
+rename from a.txt
 rename to b.txt and more"#;

    let ops = scan_diff(diff, Pairing::Strict).unwrap();
    assert!(commands(&ops).is_empty());
}

#[test]
fn test_strict_rejects_target_without_source() {
    let diff = "Index: b.txt\nrename to b.txt\n";
    let err = scan_diff(diff, Pairing::Strict).unwrap_err();
    assert_eq!(
        err,
        ScanError::UnpairedTarget {
            line: 2,
            kind: PairKind::Rename,
            target: "b.txt".to_string(),
        }
    );
}

#[test]
fn test_strict_rejects_reused_source() {
    let diff = r#"Index: b.txt
rename from a.txt
rename to b.txt
Index: c.txt
rename to c.txt"#;

    let err = scan_diff(diff, Pairing::Strict).unwrap_err();
    assert!(matches!(err, ScanError::UnpairedTarget { line: 5, .. }));
}

#[test]
fn test_strict_rejects_second_source() {
    let diff = "Index: x\ncopy from a\ncopy from b\ncopy to c\n";
    let err = scan_diff(diff, Pairing::Strict).unwrap_err();
    assert_eq!(
        err,
        ScanError::DuplicateSource {
            line: 3,
            kind: PairKind::Copy,
            pending: "a".to_string(),
            source_path: "b".to_string(),
        }
    );
}

#[test]
fn test_strict_rejects_source_left_at_next_section() {
    let diff = "Index: x\nrename from a\nIndex: y\nrename to b\n";
    let err = scan_diff(diff, Pairing::Strict).unwrap_err();
    assert_eq!(
        err,
        ScanError::DanglingSource {
            line: 2,
            kind: PairKind::Rename,
            source_path: "a".to_string(),
        }
    );
}

#[test]
fn test_strict_rejects_source_left_at_end() {
    let diff = "Index: x\ncopy from a\n";
    let err = scan_diff(diff, Pairing::Strict).unwrap_err();
    assert!(matches!(err, ScanError::DanglingSource { line: 2, .. }));
}

#[test]
fn test_lenient_reuses_stale_source() {
    let diff = r#"Index: b.txt
rename from a.txt
rename to b.txt
Index: c.txt
rename to c.txt"#;

    let ops = scan_diff(diff, Pairing::Lenient).unwrap();
    assert_eq!(
        commands(&ops),
        vec![&rename("a.txt", "b.txt"), &rename("a.txt", "c.txt")]
    );
}

#[test]
fn test_lenient_still_needs_some_source() {
    let diff = "Index: c.txt\ncopy to c.txt\n";
    let err = scan_diff(diff, Pairing::Lenient).unwrap_err();
    assert!(matches!(
        err,
        ScanError::UnpairedTarget {
            kind: PairKind::Copy,
            ..
        }
    ));
}

#[test]
fn test_lenient_does_not_share_sources_across_kinds() {
    let diff = "Index: b\nrename from a\nrename to b\nIndex: c\ncopy to c\n";
    let err = scan_diff(diff, Pairing::Lenient).unwrap_err();
    assert_eq!(
        err,
        ScanError::UnpairedTarget {
            line: 5,
            kind: PairKind::Copy,
            target: "c".to_string(),
        }
    );
}

#[test]
fn test_lenient_allows_dangling_source() {
    let diff = "Index: x\nrename from a\nIndex: y\n";
    let ops = scan_diff(diff, Pairing::Lenient).unwrap();
    assert_eq!(ops.len(), 2);
    assert!(commands(&ops).is_empty());
}

#[test]
fn test_delete_before_index_is_rejected() {
    for pairing in [Pairing::Strict, Pairing::Lenient] {
        let err = scan_diff("deleted file mode 100644\n", pairing).unwrap_err();
        assert_eq!(err, ScanError::DeleteWithoutIndex { line: 1 });
    }
}

#[test]
fn test_scanner_tracks_current_file() {
    let mut scanner = Scanner::new(Pairing::Strict);
    assert_eq!(scanner.current_file(), None);
    scanner.feed("Index: one.rs").unwrap();
    scanner.feed("+content").unwrap();
    assert_eq!(scanner.current_file(), Some("one.rs"));
    scanner.feed("Index: two.rs").unwrap();
    assert_eq!(scanner.current_file(), Some("two.rs"));
    assert_eq!(scanner.finish().unwrap().len(), 2);
}

#[test]
fn test_crlf_diff() {
    let diff = "Index: foo.txt\r\ndeleted file mode 100644\r\n";
    let ops = scan_diff(diff, Pairing::Strict).unwrap();
    assert_eq!(commands(&ops), vec![&Operation::Remove("foo.txt".to_string())]);
}

#[test]
fn test_pairing_from_str() {
    assert_eq!("strict".parse::<Pairing>().unwrap(), Pairing::Strict);
    assert_eq!("Lenient".parse::<Pairing>().unwrap(), Pairing::Lenient);
    assert!(matches!(
        "loose".parse::<Pairing>(),
        Err(ScanError::UnknownPairing(_))
    ));
}

#[test]
fn test_operation_display() {
    assert_eq!(rename("a", "b").to_string(), "rename a b");
    assert_eq!(Operation::Remove("x".to_string()).to_string(), "remove x");
    assert_eq!(Operation::Announce("x".to_string()).kind(), "announce");
}
