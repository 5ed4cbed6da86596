use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;

/// A single blacklist entry: either a literal extension compared for
/// equality, or a pattern searched anywhere in the extension. Both are
/// tested against the lowercased extension.
#[derive(Debug, Clone)]
pub enum Matcher {
    Literal(String),
    Pattern(Regex),
}

impl Matcher {
    /// Parses one configuration token. A token wrapped in `/` delimiters
    /// compiles to a pattern, any other non-empty token is a literal.
    pub fn parse(token: &str) -> Result<Self> {
        if token.is_empty() {
            bail!("blacklist entries must be extensions or /patterns/");
        }
        if token.len() >= 2 && token.starts_with('/') && token.ends_with('/') {
            let inner = &token[1..token.len() - 1];
            let re = Regex::new(inner)
                .with_context(|| format!("invalid blacklist pattern: {token}"))?;
            return Ok(Self::Pattern(re));
        }
        Ok(Self::Literal(token.to_string()))
    }

    /// Whether the given lowercased extension violates this matcher.
    pub fn matches(&self, extension: &str) -> bool {
        match self {
            Self::Literal(ext) => extension == ext,
            Self::Pattern(re) => re.find(extension).is_some(),
        }
    }
}

/// The raw configuration value: a single matcher token or a sequence of
/// them. Normalized to a sequence when the blacklist is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BlacklistOption {
    Single(String),
    Many(Vec<String>),
}

/// An ordered, validated list of matchers. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    matchers: Vec<Matcher>,
}

impl Blacklist {
    pub fn parse(option: &BlacklistOption) -> Result<Self> {
        let tokens: Vec<&str> = match option {
            BlacklistOption::Single(token) => vec![token.as_str()],
            BlacklistOption::Many(tokens) => tokens.iter().map(String::as_str).collect(),
        };

        let matchers = tokens
            .iter()
            .map(|token| Matcher::parse(token))
            .collect::<Result<Vec<Matcher>>>()?;

        Ok(Self { matchers })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Matcher> {
        self.matchers.iter()
    }
}
