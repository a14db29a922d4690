use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use area_sort::config::{Action, Config};
use area_sort::workflow::{RunSummary, classify_files, run};

// Snapshot of every file below `root`: relative path -> content
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                out.insert(relative, fs::read(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_invoice_and_notes_end_to_end() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "Invoice - 042-Q1.pdf", "invoice");
    write(temp_dir.path(), "Notes.pdf", "notes");

    let config = Config::builder(temp_dir.path())
        .action(Action::Move)
        .allowed_extensions(&[".pdf"])
        .build()
        .unwrap();
    let summary = classify_files(&config).unwrap();

    assert_eq!(summary.to_string(), "Processed: 2 | Moved/Copied: 2 | No match: 1");
    let files = snapshot(temp_dir.path());
    assert_eq!(
        files.keys().cloned().collect::<Vec<_>>(),
        vec![
            PathBuf::from("042").join("Invoice - 042-Q1.pdf"),
            PathBuf::from("_NO_CLASIFICADO").join("Notes.pdf"),
        ]
    );
}

#[test]
fn test_same_named_files_are_numbered() {
    let temp_dir = tempdir().unwrap();
    for (i, sub) in ["a", "b", "c", "d"].iter().enumerate() {
        write(temp_dir.path(), &format!("{sub}/memo - 042-x.pdf"), &i.to_string());
    }

    let config = Config::builder(temp_dir.path())
        .recursive(true)
        .build()
        .unwrap();
    let summary = classify_files(&config).unwrap();
    assert_eq!(summary.moved_or_copied, 4);

    let folder = config.base_dir.join("042");
    let mut names: Vec<String> = fs::read_dir(&folder)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "memo - 042-x (1).pdf",
            "memo - 042-x (2).pdf",
            "memo - 042-x (3).pdf",
            "memo - 042-x.pdf",
        ]
    );

    // No content was lost
    let mut contents: Vec<String> = names
        .iter()
        .map(|n| fs::read_to_string(folder.join(n)).unwrap())
        .collect();
    contents.sort();
    assert_eq!(contents, vec!["0", "1", "2", "3"]);
}

#[test]
fn test_later_run_does_not_overwrite_earlier_results() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "scan - 100-a.pdf", "first");

    let config = Config::builder(temp_dir.path()).build().unwrap();
    classify_files(&config).unwrap();

    write(temp_dir.path(), "scan - 100-a.pdf", "second");
    classify_files(&config).unwrap();

    let folder = config.base_dir.join("100");
    assert_eq!(fs::read_to_string(folder.join("scan - 100-a.pdf")).unwrap(), "first");
    assert_eq!(fs::read_to_string(folder.join("scan - 100-a (1).pdf")).unwrap(), "second");
}

#[test]
fn test_dry_run_leaves_tree_untouched() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "Invoice - 042-Q1.pdf", "invoice");
    write(temp_dir.path(), "Notes.pdf", "notes");
    write(temp_dir.path(), "nested/Budget - 315-2024.pdf", "budget");
    write(temp_dir.path(), "readme.txt", "text");

    let before = snapshot(temp_dir.path());

    for action in [Action::Move, Action::Copy] {
        let config = Config::builder(temp_dir.path())
            .dry_run(true)
            .recursive(true)
            .action(action)
            .build()
            .unwrap();
        let context = run(&config).unwrap();

        assert_eq!(context.summary.processed, 3);
        assert_eq!(context.summary.moved_or_copied, 0);
        assert_eq!(context.summary.no_match, 1);
        assert_eq!(context.operations.len(), 3);
    }

    assert_eq!(snapshot(temp_dir.path()), before);
    assert!(!temp_dir.path().join("042").exists());
    assert!(!temp_dir.path().join("_NO_CLASIFICADO").exists());
}

#[test]
fn test_dry_run_plans_distinct_names() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "a/memo - 042-x.pdf", "a");
    write(temp_dir.path(), "b/memo - 042-x.pdf", "b");

    let config = Config::builder(temp_dir.path())
        .dry_run(true)
        .recursive(true)
        .build()
        .unwrap();
    let context = run(&config).unwrap();

    let folder = config.base_dir.join("042");
    let destinations: Vec<PathBuf> = context
        .operations
        .iter()
        .map(|op| op.destination.clone())
        .collect();
    assert_eq!(
        destinations,
        vec![
            folder.join("memo - 042-x.pdf"),
            folder.join("memo - 042-x (1).pdf"),
        ]
    );
}

#[test]
fn test_copy_preserves_sources() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "Invoice - 042-Q1.pdf", "invoice");
    write(temp_dir.path(), "Notes.pdf", "notes");

    let config = Config::builder(temp_dir.path())
        .action(Action::Copy)
        .build()
        .unwrap();
    let summary = classify_files(&config).unwrap();
    assert_eq!(summary.moved_or_copied, 2);

    let base = &config.base_dir;
    assert_eq!(fs::read_to_string(base.join("Invoice - 042-Q1.pdf")).unwrap(), "invoice");
    assert_eq!(fs::read_to_string(base.join("Notes.pdf")).unwrap(), "notes");
    assert_eq!(
        fs::read_to_string(base.join("042").join("Invoice - 042-Q1.pdf")).unwrap(),
        "invoice"
    );
    assert_eq!(
        fs::read_to_string(base.join("_NO_CLASIFICADO").join("Notes.pdf")).unwrap(),
        "notes"
    );
}

#[test]
fn test_move_removes_sources() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "Invoice - 042-Q1.pdf", "invoice");

    let config = Config::builder(temp_dir.path()).build().unwrap();
    classify_files(&config).unwrap();

    assert!(!config.base_dir.join("Invoice - 042-Q1.pdf").exists());
    assert!(config.base_dir.join("042").join("Invoice - 042-Q1.pdf").exists());
}

#[test]
fn test_extension_filter() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "x.TXT", "x");
    write(temp_dir.path(), "Report - 200-a.PDF", "r");
    write(temp_dir.path(), "Memo - 201-b.docx", "m");
    write(temp_dir.path(), "Makefile", "m");

    let config = Config::builder(temp_dir.path())
        .allowed_extensions(&[".pdf", ".docx"])
        .build()
        .unwrap();
    let summary = classify_files(&config).unwrap();

    assert_eq!(summary.processed, 2);
    assert!(config.base_dir.join("x.TXT").exists());
    assert!(config.base_dir.join("Makefile").exists());
    assert!(config.base_dir.join("200").join("Report - 200-a.PDF").exists());
    assert!(config.base_dir.join("201").join("Memo - 201-b.docx").exists());
}

#[test]
fn test_wildcard_accepts_every_file() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "x.TXT", "x");
    write(temp_dir.path(), "Makefile", "m");
    write(temp_dir.path(), "Report - 200-a.pdf", "r");

    let config = Config::builder(temp_dir.path())
        .allowed_extensions(&["*"])
        .build()
        .unwrap();
    let summary = classify_files(&config).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            processed: 3,
            moved_or_copied: 3,
            no_match: 2,
            already_in_place: 0,
        }
    );
}

#[test]
fn test_non_recursive_ignores_subfolders() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "inbox/Report - 200-a.pdf", "r");

    let config = Config::builder(temp_dir.path()).build().unwrap();
    let summary = classify_files(&config).unwrap();

    assert_eq!(summary, RunSummary::default());
    assert!(config.base_dir.join("inbox").join("Report - 200-a.pdf").exists());
}

#[test]
fn test_recursive_rerun_is_idempotent() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "Invoice - 042-Q1.pdf", "invoice");
    write(temp_dir.path(), "Notes.pdf", "notes");
    write(temp_dir.path(), "inbox/Budget - 315-2024.pdf", "budget");

    let config = Config::builder(temp_dir.path())
        .recursive(true)
        .build()
        .unwrap();

    let first = classify_files(&config).unwrap();
    assert_eq!(first.moved_or_copied, 3);
    let after_first = snapshot(temp_dir.path());

    let second = classify_files(&config).unwrap();
    assert_eq!(
        second,
        RunSummary {
            processed: 3,
            moved_or_copied: 0,
            no_match: 1,
            already_in_place: 3,
        }
    );
    assert_eq!(snapshot(temp_dir.path()), after_first);
}

#[test]
fn test_custom_pattern_and_fallback() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "HR_contract.pdf", "hr");
    write(temp_dir.path(), "fin_report.pdf", "fin");
    write(temp_dir.path(), "untagged.pdf", "u");

    let config = Config::builder(temp_dir.path())
        .area_regex(r"^([a-z]+)_")
        .case_insensitive(true)
        .no_match_dest("unsorted")
        .build()
        .unwrap();
    let summary = classify_files(&config).unwrap();
    assert_eq!(summary.no_match, 1);

    let base = &config.base_dir;
    assert!(base.join("HR").join("HR_contract.pdf").exists());
    assert!(base.join("fin").join("fin_report.pdf").exists());
    assert!(base.join("unsorted").join("untagged.pdf").exists());
}

#[test]
fn test_filesystem_error_aborts_run() {
    let temp_dir = tempdir().unwrap();
    // A plain file where the area folder has to go
    write(temp_dir.path(), "042", "not a folder");
    write(temp_dir.path(), "Invoice - 042-Q1.pdf", "invoice");

    let config = Config::builder(temp_dir.path()).build().unwrap();
    let result = classify_files(&config);

    assert!(result.is_err());
    assert!(config.base_dir.join("Invoice - 042-Q1.pdf").exists());
}

#[cfg(unix)]
#[test]
fn test_recursive_run_ignores_linked_directories() {
    let outside = tempdir().unwrap();
    write(outside.path(), "Ext - 099-a.pdf", "external");

    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "Notes.pdf", "notes");
    std::os::unix::fs::symlink(temp_dir.path(), temp_dir.path().join("loop")).unwrap();
    std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("ext")).unwrap();

    let config = Config::builder(temp_dir.path())
        .recursive(true)
        .build()
        .unwrap();
    let summary = classify_files(&config).unwrap();

    assert_eq!(summary.to_string(), "Processed: 1 | Moved/Copied: 1 | No match: 1");
    assert!(config.base_dir.join("_NO_CLASIFICADO").join("Notes.pdf").exists());
    assert!(outside.path().join("Ext - 099-a.pdf").exists());
    assert!(!config.base_dir.join("099").exists());
}
