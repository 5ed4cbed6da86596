use regex::Regex;
use std::sync::OnceLock;

use crate::diagnostic::{Diagnostic, Violation};
use crate::location::TextRange;
use crate::options::Blacklist;
use crate::stylesheet::AtRule;
use crate::utils::{extname, namespace};

pub struct AtImportPartialExtensionBlacklist {
    /// The offending extension, in its original case.
    extension: String,
}

/// ## What it does
///
/// Checks `@import` statements for imported partial names whose extension
/// is blacklisted.
///
/// ## Why is this bad?
///
/// Writing the extension ties every import site to the preprocessor file
/// type, so renaming a partial from `.sass` to `.scss` means touching all
/// of its importers. Projects that leave the extension implicit avoid
/// that churn.
///
/// ## Example
///
/// ```scss
/// @import "foo.scss";
/// ```
///
/// Use instead:
/// ```scss
/// @import "foo";
/// ```
impl Violation for AtImportPartialExtensionBlacklist {
    fn name(&self) -> String {
        namespace("at-import-partial-extension-blacklist")
    }
    fn body(&self) -> String {
        format!(
            "Unexpected extension \".{}\" in imported partial name",
            self.extension
        )
    }
}

// Detects a trailing qualifier after the path, such as a media query in
// `@import "foo.scss" screen`. The word characters are the ASCII set.
fn trailing_qualifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?:\s|[,)"'])[0-9A-Za-z_]+$"#).unwrap())
}

/// Runs the blacklist check over one `@import` statement, emitting one
/// diagnostic per violating extension.
pub fn check_at_import(at_rule: &AtRule, blacklist: &Blacklist) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    // Comma-separated lists of import paths. Commas inside quoted paths
    // are split points too.
    let mut offset = at_rule.params_start;
    for fragment in at_rule.params.split(',') {
        check_fragment(fragment, offset, blacklist, &mut diagnostics);
        offset += fragment.len() + 1;
    }

    diagnostics
}

fn check_fragment(
    fragment: &str,
    offset: usize,
    blacklist: &Blacklist,
    diagnostics: &mut Vec<Diagnostic>,
) {
    // Stripping surrounding quotes and whitespaces, if any
    let (start, end) = strip_quotes(fragment);
    let stripped = &fragment[start..end];

    let Some((ext_start, extension)) = extname(stripped) else {
        return;
    };

    // If the extension is empty
    if extension.is_empty() {
        return;
    }

    // Keep the original case to report it; compare the lowercased form.
    let normalized = extension.to_lowercase();

    // Skipping importing CSS: url(), ".css", URI with a protocol, media
    if stripped.starts_with("url(")
        || stripped.ends_with(".css")
        || stripped.contains("//")
        || trailing_qualifier_re().is_match(stripped)
    {
        return;
    }

    let word_start = offset + start + ext_start;
    for matcher in blacklist.iter() {
        if matcher.matches(&normalized) {
            diagnostics.push(Diagnostic::new(
                AtImportPartialExtensionBlacklist {
                    extension: extension.to_string(),
                },
                TextRange::new(word_start, word_start + extension.len()),
                extension.to_string(),
            ));
        }
    }
}

/// Removes a single leading and a single trailing quote from the fragment,
/// together with the whitespace around them, returning the byte range that
/// remains. A side without a quote keeps its whitespace.
fn strip_quotes(fragment: &str) -> (usize, usize) {
    let mut start = 0;
    let mut end = fragment.len();

    let after_ws = fragment.len() - fragment.trim_start().len();
    if fragment[after_ws..].starts_with(['"', '\'']) {
        let after_quote = after_ws + 1;
        let inner = &fragment[after_quote..];
        start = after_quote + (inner.len() - inner.trim_start().len());
    }

    let before_ws = fragment.trim_end().len();
    if fragment[..before_ws].ends_with(['"', '\'']) {
        let before_quote = before_ws - 1;
        end = fragment[..before_quote].trim_end().len();
    }

    // A lone quote is consumed by the leading strip only.
    if start > end {
        end = start;
    }
    (start, end)
}
