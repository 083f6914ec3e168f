//! Hygiene: scans the board crate's production sources for patterns the
//! project bans. Every budget is zero; a new hit must be fixed, not budgeted.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    // Panics: a malformed case file or a stray event must never crash the host.
    Rule { pattern: ".unwrap()", budget: 0, why: "panics" },
    Rule { pattern: ".expect(", budget: 0, why: "panics" },
    Rule { pattern: "panic!(", budget: 0, why: "panics" },
    Rule { pattern: "unreachable!(", budget: 0, why: "panics" },
    Rule { pattern: "todo!(", budget: 0, why: "unfinished stub" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "unfinished stub" },
    // Silent loss: errors must be logged or returned.
    Rule { pattern: "let _ =", budget: 0, why: "discards a result" },
    Rule { pattern: ".ok()", budget: 0, why: "discards an error" },
    // Output belongs to the host; the library logs through tracing.
    Rule { pattern: "println!(", budget: 0, why: "writes to stdout" },
    Rule { pattern: "eprintln!(", budget: 0, why: "writes to stderr" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "hides dead code" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
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
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            let detail =
                found.iter().map(|(path, c)| format!("    {path}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("`{}` ({}): found {count}, max {}\n{detail}", rule.pattern, rule.why, rule.budget));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
