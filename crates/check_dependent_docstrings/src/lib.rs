// crates/check_dependent_docstrings/src/lib.rs

/// Suffixes that always mark a path as interesting.
pub const INTERESTING_SUFFIXES: [&str; 2] = [".cry", ".tex"];

/// Markdown suffix, accepted unless the path is a README.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Markdown files ending with this are never interesting.
pub const README_SUFFIX: &str = "README.md";

/// Returns true if `path` probably belongs to the Cryptol sources or docs.
///
/// Only literal, case-sensitive suffixes are checked:
///   - anything ending in `.cry` or `.tex`
///   - anything ending in `.md`, except when it ends in `README.md`
pub fn is_interesting(path: &str) -> bool {
    INTERESTING_SUFFIXES
        .iter()
        .any(|suffix| path.ends_with(suffix))
        || (path.ends_with(MARKDOWN_SUFFIX) && !path.ends_with(README_SUFFIX))
}

/// Splits a whitespace-separated list of paths and lazily yields the
/// interesting ones, in input order.
///
/// # Arguments
///
/// * `files` - The raw list, e.g. the value of `--files`.
///
/// # Returns
///
/// An iterator borrowing from `files`. Nothing is evaluated until it is consumed.
pub fn interesting_files(files: &str) -> impl Iterator<Item = &str> {
    files.split_whitespace().filter(|f| is_interesting(f))
}
