use std::path::Path;

use crate::check::check_source;
use crate::diagnostic::Diagnostic;
use crate::options::{Blacklist, BlacklistOption};

/// Test utility running the blacklist rule over an in-memory stylesheet.
pub fn lint_source(text: &str, blacklist: &[&str]) -> Vec<Diagnostic> {
    let option = BlacklistOption::Many(blacklist.iter().map(|s| s.to_string()).collect());
    let blacklist = Blacklist::parse(&option).expect("invalid blacklist in test");
    check_source(text, Path::new("test.scss"), &blacklist)
}

/// Asserts that the given stylesheet yields a diagnostic for `word`.
pub fn expect_lint(text: &str, word: &str, blacklist: &[&str]) {
    let diagnostics = lint_source(text, blacklist);
    assert!(
        diagnostics.iter().any(|d| d.word == word),
        "expected a diagnostic for `{word}` in `{text}`, got {diagnostics:?}"
    );
}

/// Asserts that the given stylesheet yields no diagnostic at all.
pub fn expect_no_lint(text: &str, blacklist: &[&str]) {
    let diagnostics = lint_source(text, blacklist);
    assert!(
        diagnostics.is_empty(),
        "expected no diagnostics in `{text}`, got {diagnostics:?}"
    );
}
