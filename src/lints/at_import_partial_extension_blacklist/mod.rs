pub mod at_import_partial_extension_blacklist;

pub use at_import_partial_extension_blacklist::check_at_import;

#[cfg(test)]
mod tests {
    use crate::location::TextRange;
    use crate::utils_test::*;

    #[test]
    fn test_lint_blacklisted_extension() {
        expect_lint("@import \"foo.scss\";", "scss", &["scss"]);
        expect_lint("@import 'foo.scss';", "scss", &["scss"]);
        expect_lint("@import \"_foo.sass\";", "sass", &["scss", "sass"]);
        expect_lint("@import \"path/to/foo.scss\";", "scss", &["scss"]);
        expect_lint("@import \"foo.scss\"", "scss", &["scss"]);
    }

    #[test]
    fn test_no_lint_without_extension() {
        expect_no_lint("@import \"foo\";", &["scss"]);
        expect_no_lint("@import \"path/to/foo\";", &["scss"]);
        expect_no_lint("@import \"path.to/foo\";", &["scss", "to"]);
        expect_no_lint("@import \".hidden\";", &["hidden"]);
        expect_no_lint("@import \"foo.\";", &["scss"]);
    }

    #[test]
    fn test_no_lint_css_import() {
        expect_no_lint("@import \"foo.css\";", &["css"]);
        expect_no_lint("@import \"foo.css\";", &["scss", "css"]);
    }

    #[test]
    fn test_no_lint_url_import() {
        expect_no_lint("@import url(foo.scss);", &["scss"]);
        expect_no_lint("@import url(\"foo.scss\");", &["scss"]);
    }

    #[test]
    fn test_no_lint_uri_with_protocol() {
        expect_no_lint("@import \"http://example.com/foo.scss\";", &["scss"]);
        expect_no_lint("@import \"//example.com/foo.scss\";", &["scss"]);
    }

    #[test]
    fn test_no_lint_trailing_qualifier() {
        expect_no_lint("@import \"foo.scss\" screen;", &["scss"]);
        expect_no_lint("@import \"foo.scss\" screen and print;", &["scss"]);
        // The same path without the qualifier is flagged.
        expect_lint("@import \"foo.scss\";", "scss", &["scss"]);
    }

    #[test]
    fn test_lint_comma_separated_paths() {
        let diagnostics = lint_source("@import \"a.scss\", \"b.sass\";", &["scss", "sass"]);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].word, "scss");
        assert_eq!(diagnostics[1].word, "sass");
    }

    #[test]
    fn test_lint_pattern_matcher() {
        expect_lint("@import \"foo.scss\";", "scss", &["/s[ac]ss/"]);
        expect_lint("@import \"foo.sass\";", "sass", &["/s[ac]ss/"]);
        expect_no_lint("@import \"foo.styl\";", &["/s[ac]ss/"]);
        expect_no_lint("@import \"foo.less\";", &["/s[ac]ss/"]);
    }

    #[test]
    fn test_lint_case_insensitive_keeps_original_case() {
        let diagnostics = lint_source("@import \"foo.SCSS\";", &["scss"]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].word, "SCSS");
        assert!(
            diagnostics[0]
                .message
                .body
                .contains("Unexpected extension \".SCSS\" in imported partial name")
        );
    }

    #[test]
    fn test_lint_once_per_matching_matcher() {
        // Matchers are tested in order and do not short-circuit, so one
        // fragment can violate several of them.
        let diagnostics = lint_source("@import \"foo.scss\";", &["scss", "/^sc/"]);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_lint_word_attribution() {
        let diagnostics = lint_source("@import \"foo.scss\";", &["scss"]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range, TextRange::new(13, 17));
        let location = diagnostics[0].location.unwrap();
        assert_eq!(location.row, 1);

        let diagnostics = lint_source("\n\n@import \"foo.scss\";", &["scss"]);
        assert_eq!(diagnostics[0].location.unwrap().row, 3);
    }

    #[test]
    fn test_lint_is_idempotent() {
        let source = "@import \"a.scss\", \"b\";\n@import \"c.sass\" screen;\n";
        let first = lint_source(source, &["scss", "sass"]);
        let second = lint_source(source, &["scss", "sass"]);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }
}
