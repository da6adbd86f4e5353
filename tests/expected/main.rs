//! Test runner that compares highlighter output against .expected.html files
//!
//! Run with: cargo test --test expected

use libtest_mimic::{Arguments, Failed, Trial};
use playground_highlight::render::check_coverage;
use playground_highlight::{classify, highlight, source_from_bytes};
use std::fs;
use std::path::{Path, PathBuf};

/// Collect all .rs cases under tests/cases
fn collect_cases() -> Vec<PathBuf> {
    let pattern = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cases/*.rs");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .expect("valid glob pattern")
        .filter_map(Result::ok)
        .collect();
    files.sort();
    files
}

/// Cases are read as bytes so a case may hold invalid UTF-8
fn read_case(path: &Path) -> Result<String, Failed> {
    let bytes = fs::read(path).map_err(|err| err.to_string())?;
    Ok(source_from_bytes(bytes))
}

fn case_name(path: &Path) -> String {
    path.file_stem().unwrap_or_default().to_string_lossy().into_owned()
}

fn check_expected(path: &Path) -> Result<(), Failed> {
    let expected_path = path.with_extension("expected.html");
    let expected = fs::read_to_string(&expected_path)
        .map_err(|err| format!("Missing expected file {}: {}", expected_path.display(), err))?;
    let source = read_case(path)?;

    let actual = highlight(&source);
    if actual != expected {
        return Err(format!(
            "Output mismatch: {}\n--- expected ---\n{}\n--- actual ---\n{}",
            path.display(),
            expected,
            actual
        )
        .into());
    }
    Ok(())
}

fn check_covered(path: &Path) -> Result<(), Failed> {
    let source = read_case(path)?;
    check_coverage(&source, &classify(&source)).map_err(|err| err.to_string())?;
    Ok(())
}

fn main() {
    let args = Arguments::from_args();

    let mut trials = Vec::new();
    for path in collect_cases() {
        let name = case_name(&path);
        let expected_path = path.clone();
        trials.push(Trial::test(format!("expected::{}", name), move || {
            check_expected(&expected_path)
        }));
        trials.push(Trial::test(format!("coverage::{}", name), move || check_covered(&path)));
    }

    libtest_mimic::run(&args, trials).exit();
}
