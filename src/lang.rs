pub mod data;
pub mod rule;

pub use data::{ENG, LANG_TABLE, all_langs, from_code, get_language};
pub use rule::{Direction, Rule, RuleError, RuleMode, RuleSet};

use rule::PendingRule;
use std::collections::{HashMap, HashSet};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Identifier of a built-in language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The compiled rule table. Compiled once, on first use.
    #[inline]
    pub fn language(&self) -> &'static Language {
        get_language(self.code).expect("language not present in LANG_TABLE – this is a bug")
    }
}

pub const DEFAULT_LANG: Lang = ENG;

/// Irregular singular/plural pairs, indexed both ways.
#[derive(Debug, Clone, Default)]
pub struct IrregularTable {
    to_plural: HashMap<String, String>,
    to_singular: HashMap<String, String>,
}

impl IrregularTable {
    fn insert(&mut self, singular: &str, plural: &str) {
        self.to_plural
            .insert(singular.to_owned(), plural.to_owned());
        self.to_singular
            .insert(plural.to_owned(), singular.to_owned());
    }

    /// The registered counterpart of `word` in `direction`.
    #[inline]
    pub fn counterpart(&self, word: &str, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Plural => self.to_plural.get(word),
            Direction::Singular => self.to_singular.get(word),
        }
        .map(String::as_str)
    }

    /// Is `word` already the `direction` form of a registered pair?
    #[inline]
    pub fn is_target(&self, word: &str, direction: Direction) -> bool {
        match direction {
            Direction::Plural => self.to_singular.contains_key(word),
            Direction::Singular => self.to_plural.contains_key(word),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.to_plural.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.to_plural.is_empty()
    }

    /// Every `(singular, plural)` pair, in no particular order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.to_plural.iter().map(|(s, p)| (s.as_str(), p.as_str()))
    }
}

/// How a word was resolved. `NoRuleMatched` is a normal outcome, each
/// direction has its own fallback for it.
#[derive(Debug, Clone, Copy)]
pub enum Inflection<'a> {
    Uncountable,
    Irregular(&'a str),
    AlreadyInflected,
    Rule { index: usize, rule: &'a Rule },
    NoRuleMatched,
}

/// A complete, immutable rule table for one language.
#[derive(Debug, Clone)]
pub struct Language {
    code: String,
    plurals: RuleSet,
    singulars: RuleSet,
    irregulars: IrregularTable,
    uncountables: HashSet<String>,
}

impl Language {
    pub fn builder(code: &str) -> LanguageBuilder {
        LanguageBuilder::new(code)
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn plurals(&self) -> &RuleSet {
        &self.plurals
    }

    #[inline]
    pub fn singulars(&self) -> &RuleSet {
        &self.singulars
    }

    #[inline]
    pub fn rules(&self, direction: Direction) -> &RuleSet {
        match direction {
            Direction::Plural => &self.plurals,
            Direction::Singular => &self.singulars,
        }
    }

    #[inline]
    pub fn irregulars(&self) -> &IrregularTable {
        &self.irregulars
    }

    #[inline]
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(word)
    }

    pub fn uncountables(&self) -> impl Iterator<Item = &str> {
        self.uncountables.iter().map(String::as_str)
    }

    /// Decide how `word` inflects in `direction`, without building the result.
    pub fn resolve<'a>(&'a self, word: &str, direction: Direction) -> Inflection<'a> {
        if self.is_uncountable(word) {
            return Inflection::Uncountable;
        }
        if let Some(counterpart) = self.irregulars.counterpart(word, direction) {
            return Inflection::Irregular(counterpart);
        }
        if self.irregulars.is_target(word, direction) {
            return Inflection::AlreadyInflected;
        }
        match self.rules(direction).first_match(word) {
            Some((index, rule)) => Inflection::Rule { index, rule },
            None => Inflection::NoRuleMatched,
        }
    }

    pub fn inflect(&self, word: &str, direction: Direction) -> String {
        if word.is_empty() {
            return String::new();
        }

        let inflection = self.resolve(word, direction);
        #[cfg(feature = "tracing")]
        trace!(
            lang = self.code.as_str(),
            word,
            direction = direction.as_str(),
            outcome = ?inflection,
            "inflect"
        );

        match inflection {
            Inflection::Uncountable | Inflection::AlreadyInflected => word.to_owned(),
            Inflection::Irregular(counterpart) => counterpart.to_owned(),
            Inflection::Rule { rule, .. } => rule.apply(word),
            Inflection::NoRuleMatched => match direction {
                Direction::Plural => format!("{word}s"),
                Direction::Singular => word.to_owned(),
            },
        }
    }

    /// ```
    /// let en = inflect::ENG.language();
    /// assert_eq!(en.pluralize("city"), "cities");
    /// assert_eq!(en.pluralize("fish"), "fish");
    /// ```
    #[inline]
    pub fn pluralize(&self, word: &str) -> String {
        self.inflect(word, Direction::Plural)
    }

    #[inline]
    pub fn singularize(&self, word: &str) -> String {
        self.inflect(word, Direction::Singular)
    }
}

/// Fluent construction of a [`Language`]. Patterns are compiled, in
/// registration order, by [`build`](LanguageBuilder::build).
#[derive(Debug, Clone)]
pub struct LanguageBuilder {
    code: String,
    plurals: Vec<PendingRule>,
    singulars: Vec<PendingRule>,
    irregulars: IrregularTable,
    uncountables: HashSet<String>,
}

impl LanguageBuilder {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_owned(),
            plurals: Vec::new(),
            singulars: Vec::new(),
            irregulars: IrregularTable::default(),
            uncountables: HashSet::new(),
        }
    }

    pub fn with_plural_rule(mut self, mode: RuleMode, pattern: &str, replacement: &str) -> Self {
        self.plurals.push(PendingRule {
            pattern: pattern.to_owned(),
            replacement: replacement.to_owned(),
            mode,
        });
        self
    }

    pub fn with_singular_rule(mut self, mode: RuleMode, pattern: &str, replacement: &str) -> Self {
        self.singulars.push(PendingRule {
            pattern: pattern.to_owned(),
            replacement: replacement.to_owned(),
            mode,
        });
        self
    }

    #[inline]
    pub fn with_plural(self, pattern: &str, replacement: &str) -> Self {
        self.with_plural_rule(RuleMode::Replace, pattern, replacement)
    }

    #[inline]
    pub fn with_plural_suffix(self, pattern: &str, suffix: &str) -> Self {
        self.with_plural_rule(RuleMode::Append, pattern, suffix)
    }

    #[inline]
    pub fn with_singular(self, pattern: &str, replacement: &str) -> Self {
        self.with_singular_rule(RuleMode::Replace, pattern, replacement)
    }

    #[inline]
    pub fn with_singular_suffix(self, pattern: &str, suffix: &str) -> Self {
        self.with_singular_rule(RuleMode::Append, pattern, suffix)
    }

    pub fn with_irregular(mut self, singular: &str, plural: &str) -> Self {
        self.irregulars.insert(singular, plural);
        self
    }

    pub fn with_uncountable(mut self, word: &str) -> Self {
        self.uncountables.insert(word.to_owned());
        self
    }

    pub fn build(self) -> Result<Language, RuleError> {
        let language = Language {
            plurals: RuleSet::compile(Direction::Plural, self.plurals)?,
            singulars: RuleSet::compile(Direction::Singular, self.singulars)?,
            code: self.code,
            irregulars: self.irregulars,
            uncountables: self.uncountables,
        };

        #[cfg(feature = "tracing")]
        debug!(
            lang = language.code.as_str(),
            plurals = language.plurals.len(),
            singulars = language.singulars.len(),
            irregulars = language.irregulars.len(),
            uncountables = language.uncountables.len(),
            "language built"
        );

        Ok(language)
    }
}
