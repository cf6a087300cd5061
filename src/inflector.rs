use thiserror::Error;

use crate::{
    case::{
        Case, CaseError, Constantize, Humanize, Hyphenate, LowerCamelCase, Titleize, Underscore,
        UpperCamelCase,
    },
    lang::{DEFAULT_LANG, Lang, Language, RuleError, from_code},
};

#[derive(Debug, Error)]
pub enum InflectError {
    #[error("case error: {0}")]
    Case(#[from] CaseError),
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),
}

/// Inflection and re-casing bound to one [`Language`].
///
/// ```
/// use inflect::{ENG, Inflector};
///
/// let inflector = Inflector::builder().lang(ENG).build();
/// assert_eq!(inflector.pluralize("person"), "people");
/// assert_eq!(inflector.underscore("UpperCamelCase").unwrap(), "upper_camel_case");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Inflector<'l> {
    language: &'l Language,
}

impl Default for Inflector<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_LANG.language())
    }
}

impl Inflector<'static> {
    pub fn builder() -> InflectorBuilder<'static> {
        InflectorBuilder::default()
    }
}

impl<'l> Inflector<'l> {
    #[inline]
    pub fn new(language: &'l Language) -> Self {
        Self { language }
    }

    #[inline]
    pub fn language(&self) -> &'l Language {
        self.language
    }

    #[inline]
    pub fn pluralize(&self, word: &str) -> String {
        self.language.pluralize(word)
    }

    #[inline]
    pub fn singularize(&self, word: &str) -> String {
        self.language.singularize(word)
    }

    /// Re-case `word` with any convention, including user-defined ones.
    pub fn convert(&self, case: &dyn Case, word: &str) -> Result<String, InflectError> {
        Ok(case.convert(word)?)
    }

    pub fn upper_camel_case(&self, word: &str) -> Result<String, InflectError> {
        self.convert(&UpperCamelCase, word)
    }

    pub fn lower_camel_case(&self, word: &str) -> Result<String, InflectError> {
        self.convert(&LowerCamelCase, word)
    }

    pub fn underscore(&self, word: &str) -> Result<String, InflectError> {
        self.convert(&Underscore, word)
    }

    pub fn hyphenate(&self, word: &str) -> Result<String, InflectError> {
        self.convert(&Hyphenate, word)
    }

    pub fn humanize(&self, word: &str) -> Result<String, InflectError> {
        self.convert(&Humanize, word)
    }

    pub fn titleize(&self, word: &str) -> Result<String, InflectError> {
        self.convert(&Titleize, word)
    }

    pub fn constantize(&self, word: &str) -> Result<String, InflectError> {
        self.convert(&Constantize, word)
    }
}

#[derive(Debug)]
pub struct InflectorBuilder<'l> {
    language: &'l Language,
}

impl Default for InflectorBuilder<'static> {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANG.language(),
        }
    }
}

impl<'l> InflectorBuilder<'l> {
    /// Use a built-in language.
    pub fn lang(self, lang: Lang) -> InflectorBuilder<'static> {
        InflectorBuilder {
            language: lang.language(),
        }
    }

    /// Use a built-in language by code (`"en"`).
    pub fn lang_code(self, code: &str) -> Result<InflectorBuilder<'static>, InflectError> {
        let lang = from_code(code).ok_or_else(|| InflectError::UnknownLanguage(code.to_owned()))?;
        Ok(self.lang(lang))
    }

    /// Use a caller-built language.
    pub fn language<'m>(self, language: &'m Language) -> InflectorBuilder<'m> {
        InflectorBuilder { language }
    }

    pub fn build(self) -> Inflector<'l> {
        Inflector::new(self.language)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free functions over the default language
// ─────────────────────────────────────────────────────────────────────────────

/// Plural form of `word` in the default language.
pub fn pluralize(word: &str) -> String {
    DEFAULT_LANG.language().pluralize(word)
}

/// Singular form of `word` in the default language.
pub fn singularize(word: &str) -> String {
    DEFAULT_LANG.language().singularize(word)
}

pub fn upper_camel_case(word: &str) -> Result<String, InflectError> {
    Ok(UpperCamelCase.convert(word)?)
}

pub fn lower_camel_case(word: &str) -> Result<String, InflectError> {
    Ok(LowerCamelCase.convert(word)?)
}

pub fn underscore(word: &str) -> Result<String, InflectError> {
    Ok(Underscore.convert(word)?)
}

pub fn hyphenate(word: &str) -> Result<String, InflectError> {
    Ok(Hyphenate.convert(word)?)
}

pub fn humanize(word: &str) -> Result<String, InflectError> {
    Ok(Humanize.convert(word)?)
}

pub fn titleize(word: &str) -> Result<String, InflectError> {
    Ok(Titleize.convert(word)?)
}

pub fn constantize(word: &str) -> Result<String, InflectError> {
    Ok(Constantize.convert(word)?)
}
