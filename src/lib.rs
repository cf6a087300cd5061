//! Rule-based word inflection and identifier re-casing.
//!
//! ```
//! use inflect::{Inflector, pluralize, underscore};
//!
//! assert_eq!(pluralize("city"), "cities");
//! assert_eq!(underscore("UpperCamelCase").unwrap(), "upper_camel_case");
//!
//! let en = Inflector::builder().lang_code("en").unwrap().build();
//! assert_eq!(en.singularize("children"), "child");
//! ```
pub mod case;
pub mod inflector;
pub mod lang;
pub mod split;

#[cfg(test)]
pub(crate) mod testing;

pub use case::{
    Case, CaseError, Constantize, Humanize, Hyphenate, LowerCamelCase, Titleize, Underscore,
    UpperCamelCase,
};
pub use inflector::{
    InflectError, Inflector, InflectorBuilder, constantize, humanize, hyphenate, lower_camel_case,
    pluralize, singularize, titleize, underscore, upper_camel_case,
};
pub use lang::{
    DEFAULT_LANG, Direction, ENG, Inflection, IrregularTable, Lang, Language, LanguageBuilder,
    Rule, RuleError, RuleMode, RuleSet,
};
pub use split::{SplitError, split};
