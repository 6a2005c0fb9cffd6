//! Custom assertion macros for contract tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List the entries of a directory (for debugging)
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

/// Assert that a generated file exists in the project directory.
///
/// # Example
/// ```ignore
/// assert_generated!(env, "prod.hosts");
/// ```
#[macro_export]
macro_rules! assert_generated {
    ($env:expr, $path:expr) => {
        assert!(
            $env.project_path($path).exists(),
            "Expected '{}' to be generated.\nFiles found: {:?}",
            $path,
            $crate::common::list_files($env.project_root.path())
        );
    };
}

/// Assert that a file was NOT generated in the project directory.
#[macro_export]
macro_rules! assert_not_generated {
    ($env:expr, $path:expr) => {
        assert!(
            !$env.project_path($path).exists(),
            "Expected '{}' to NOT exist, but it does.",
            $path
        );
    };
}

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Missing group brain");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
