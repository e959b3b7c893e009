//! Hygiene: source-level standards checked at test time.
//!
//! Scans the production files under `src/` (sibling `*_test.rs` files are
//! skipped) for patterns the crate does not allow. Every budget is zero; a
//! new hit means fixing the code, not raising the budget.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    // Panics.
    Rule { pattern: ".unwrap()", budget: 0, why: "propagate with ? or handle the None/Err" },
    Rule { pattern: ".expect(", budget: 0, why: "propagate with ? or handle the None/Err" },
    Rule { pattern: "panic!(", budget: 0, why: "return an error instead" },
    Rule { pattern: "unreachable!(", budget: 0, why: "make the state unrepresentable" },
    Rule { pattern: "todo!(", budget: 0, why: "finish the stub" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "finish the stub" },
    // Silent loss.
    Rule { pattern: "let _ =", budget: 0, why: "inspect or log the discarded result" },
    Rule { pattern: ".ok()", budget: 0, why: "inspect or log the discarded error" },
    // Output goes through the log facade.
    Rule { pattern: "println!(", budget: 0, why: "use log::info!/debug!" },
    Rule { pattern: "eprintln!(", budget: 0, why: "use log::warn!/error!" },
    Rule { pattern: "dbg!(", budget: 0, why: "remove debugging output" },
    // Structure.
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "delete the dead code" },
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn finds_source_files() {
    let files = source_files();
    assert!(files.iter().any(|file| file.path.ends_with("lib.rs")), "src/lib.rs not scanned");
    assert!(files.iter().all(|file| !file.path.ends_with("_test.rs")));
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut report = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > rule.budget {
            report.push(format!("`{}`: found {count}, max {} ({})", rule.pattern, rule.budget, rule.why));
            report.extend(found.iter().map(|(path, n)| format!("  {path}: {n}")));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}
