pub mod at_import_partial_extension_blacklist;

/// Names of all supported rules.
pub fn all_rules() -> Vec<String> {
    vec![crate::utils::namespace("at-import-partial-extension-blacklist")]
}
