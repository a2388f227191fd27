//! Build-graph direction: kernel ← search ← harness, never the reverse.
//!
//! The kernel knows nothing about search, and search knows nothing about
//! the harness. Checked on both `Cargo.toml` dependencies and `use` lines.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn walk(dir: &Path, forbidden: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, forbidden, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            for (line_no, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                // Skip comments.
                if trimmed.starts_with("//") {
                    continue;
                }
                if forbidden.iter().any(|p| trimmed.contains(p)) {
                    violations.push((path.display().to_string(), line_no + 1, line.to_string()));
                }
            }
        }
    }
}

fn assert_no_references(krate: &str, forbidden_crates: &[&str]) {
    let root = workspace_root().join(krate);

    let manifest = fs::read_to_string(root.join("Cargo.toml"))
        .unwrap_or_else(|e| panic!("{krate}/Cargo.toml must exist: {e}"));
    for (line_no, line) in manifest.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        for dep in forbidden_crates {
            assert!(
                !trimmed.starts_with(dep),
                "{krate}/Cargo.toml line {}: depends on {dep}",
                line_no + 1
            );
        }
    }

    let paths: Vec<String> = forbidden_crates.iter().map(|c| c.replace('-', "_")).collect();
    let patterns: Vec<&str> = paths.iter().map(String::as_str).collect();
    let mut violations = Vec::new();
    walk(&root.join("src"), &patterns, &mut violations);
    if !violations.is_empty() {
        let mut msg = format!("{krate} source references a downstream crate:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn kernel_depends_on_neither_search_nor_harness() {
    assert_no_references("kernel", &["octile-search", "octile-harness"]);
}

#[test]
fn search_does_not_depend_on_harness() {
    assert_no_references("search", &["octile-harness"]);
}
