use regex::Regex;
use std::{borrow::Cow, fmt};
use thiserror::Error;

/// Which way a word is being inflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Plural,
    Singular,
}

impl Direction {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Plural => "plural",
            Direction::Singular => "singular",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a matching rule produces its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleMode {
    /// Expand the replacement (`${1}` etc.) into every match of the pattern.
    Replace,
    /// Keep the whole word and concatenate the replacement after it.
    Append,
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("{direction} rule #{index} has an invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        direction: Direction,
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// One compiled inflection rule.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    replacement: String,
    mode: RuleMode,
}

impl Rule {
    pub fn new(pattern: &str, replacement: &str, mode: RuleMode) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            replacement: replacement.to_owned(),
            mode,
        })
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    #[inline]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    #[inline]
    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    #[inline]
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    /// Apply the rule to a word it matches. The caller checks `is_match`.
    pub fn apply(&self, word: &str) -> String {
        match self.mode {
            RuleMode::Append => {
                let mut out = String::with_capacity(word.len() + self.replacement.len());
                out.push_str(word);
                out.push_str(&self.replacement);
                out
            }
            RuleMode::Replace => match self.regex.replace_all(word, self.replacement.as_str()) {
                Cow::Borrowed(unchanged) => unchanged.to_owned(),
                Cow::Owned(changed) => changed,
            },
        }
    }
}

/// Rules for one direction. Position is priority: the first match wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub(crate) fn compile(
        direction: Direction,
        pending: Vec<PendingRule>,
    ) -> Result<Self, RuleError> {
        let rules = pending
            .into_iter()
            .enumerate()
            .map(|(index, p)| {
                Rule::new(&p.pattern, &p.replacement, p.mode).map_err(|source| {
                    RuleError::InvalidPattern {
                        direction,
                        index,
                        pattern: p.pattern,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Index of the rule with exactly this pattern source.
    pub fn position(&self, pattern: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.pattern() == pattern)
    }

    /// The highest-priority rule matching `word`, with its index.
    #[inline]
    pub fn first_match(&self, word: &str) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, r)| r.is_match(word))
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// A rule registered on a builder, compiled in `build()`.
#[derive(Debug, Clone)]
pub(crate) struct PendingRule {
    pub(crate) pattern: String,
    pub(crate) replacement: String,
    pub(crate) mode: RuleMode,
}
