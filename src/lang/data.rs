use crate::lang::{Lang, Language, RuleError, RuleMode};

use paste::paste;
use phf::{Map, phf_map};
use std::sync::LazyLock;

#[cfg(feature = "tracing")]
use tracing::debug;

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $code:ident, $code_str:literal, $name:literal,
        uncountable: [ $($u:literal),* $(,)? ],
        irregular: [ $($is:literal => $ip:literal),* $(,)? ],
        plural: [ $($ppat:literal => $pmode:ident $prep:literal),* $(,)? ],
        singular: [ $($spat:literal => $smode:ident $srep:literal),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                pub mod [<$code:lower _data>] {
                    use super::*;

                    pub static UNCOUNTABLE: &[&str] = &[$($u),*];

                    pub static IRREGULAR: &[(&str, &str)] = &[$(($is, $ip)),*];

                    pub static PLURAL: &[(&str, RuleMode, &str)] = &[
                        $(($ppat, RuleMode::$pmode, $prep)),*
                    ];

                    pub static SINGULAR: &[(&str, RuleMode, &str)] = &[
                        $(($spat, RuleMode::$smode, $srep)),*
                    ];

                    static LANGUAGE: LazyLock<Language> = LazyLock::new(|| {
                        compile($code_str, UNCOUNTABLE, IRREGULAR, PLURAL, SINGULAR)
                            .expect(concat!("built-in `", $code_str, "` rule table is invalid – this is a bug"))
                    });

                    pub fn language() -> &'static Language {
                        &LANGUAGE
                    }
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, fn() -> &'static Language> = phf_map! {
                $(
                    $code_str => [<$code:lower _data>]::language,
                )*
            };
        }

        /// `Lang` for a code, ignoring ASCII case.
        pub fn from_code(code: &str) -> Option<Lang> {
            let lower = code.to_ascii_lowercase();
            match lower.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }

        pub fn all_langs() -> &'static [Lang] {
            &[$($code),*]
        }
    };
}

/// Compiled rule table for a code, ignoring ASCII case.
pub fn get_language(code: &str) -> Option<&'static Language> {
    let build = match LANG_TABLE.get(code) {
        Some(build) => build,
        None => LANG_TABLE.get(code.to_ascii_lowercase().as_str())?,
    };
    Some(build())
}

fn compile(
    code: &str,
    uncountable: &[&str],
    irregular: &[(&str, &str)],
    plural: &[(&str, RuleMode, &str)],
    singular: &[(&str, RuleMode, &str)],
) -> Result<Language, RuleError> {
    #[cfg(feature = "tracing")]
    debug!(lang = code, "compiling built-in language");

    let mut builder = Language::builder(code);
    for &word in uncountable {
        builder = builder.with_uncountable(word);
    }
    for &(singular, plural) in irregular {
        builder = builder.with_irregular(singular, plural);
    }
    for &(pattern, mode, replacement) in plural {
        builder = builder.with_plural_rule(mode, pattern, replacement);
    }
    for &(pattern, mode, replacement) in singular {
        builder = builder.with_singular_rule(mode, pattern, replacement);
    }
    builder.build()
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//
//    Rule order is priority: the first matching rule wins, so every specific
//    pattern sits above the general pattern that would shadow it.
//    `Append` concatenates to the whole word, `Replace` rewrites the match.
// ---------------------------------------------------------------------------
define_languages! {
    ENG, "en", "English",
        uncountable: [
            "advice", "deer", "equipment", "fish", "furniture", "gas",
            "information", "jeans", "luggage", "money", "moose", "music",
            "news", "police", "rice", "salmon", "series", "sheep", "species",
            "trout",
        ],
        irregular: [
            "person" => "people",
            "child" => "children",
            "man" => "men",
            "woman" => "women",
            "move" => "moves",
            "zombie" => "zombies",
        ],
        plural: [
            r"(quiz)$" => Append "zes",
            r"^(ox)$" => Append "en",
            r"(matr|vert|ind)(?:ix|ex)$" => Replace "${1}ices",
            r"(auto|avocado|casino|disco|ego|euro|hippo|kangaroo|kilo|logo|memo|photo|piano|pimento|pro|radio|solo|soprano|studio|tattoo|typo|video|zoo)$" => Append "s",
            r"(t|f|g)oo(th|t|se)$" => Replace "${1}ee${2}",
            r"(x|ch|ss|sh|o)$" => Append "es",
            r"([^aeiouy]|qu)y$" => Replace "${1}ies",
            r"^(m|l)ouse$" => Replace "${1}ice",
            r"(?:(kni|wi|^li)fe|(dwar|hal|^el|wol|cal|sel|shel)f)$" => Replace "${1}${2}ves",
            r"(lea|loa|shea|thie)f$" => Replace "${1}ves",
            r"^(ax|test)is$" => Replace "${1}es",
            r"sis$" => Replace "ses",
            r"(bacteri|curricul|dat|memorand|medi|millenni|strat|symposi)um$" => Replace "${1}a",
            r"(criteri|phenomen)on$" => Replace "${1}a",
            r"(octop|vir)us$" => Replace "${1}i",
            r"(bu)s$" => Append "es",
            r"(alias|status)$" => Append "es",
            r"(child)$" => Append "ren",
            r"(p)erson$" => Replace "${1}eople",
        ],
        singular: [
            r"(quiz)zes$" => Replace "${1}",
            r"(matr)ices$" => Replace "${1}ix",
            r"(vert|ind)ices$" => Replace "${1}ex",
            r"^(ox)en$" => Replace "${1}",
            r"(alias|status)es$" => Replace "${1}",
            r"(octop|vir)i$" => Replace "${1}us",
            r"(^ax|^test|cris)es$" => Replace "${1}is",
            r"(^ba|analy|diagno|parenthe|progno|synop|the)ses$" => Replace "${1}sis",
            r"(buffal|ech|her|potat|tomat|torped|vet|volcan)oes$" => Replace "${1}o",
            r"(bus)es$" => Replace "${1}",
            r"^(m|l)ice$" => Replace "${1}ouse",
            r"(x|ch|ss|sh)es$" => Replace "${1}",
            r"(m)ovies$" => Replace "${1}ovie",
            r"([^aeiouy]|qu)ies$" => Replace "${1}y",
            r"(lea|loa|shea|thie)ves$" => Replace "${1}f",
            r"(kni|wi|^li)ves$" => Replace "${1}fe",
            r"(dwar|hal|^el|wol|cal|sel|shel)ves$" => Replace "${1}f",
            r"(criteri|phenomen)a$" => Replace "${1}on",
            r"(bacteri|curricul|dat|memorand|medi|millenni|strat|symposi)a$" => Replace "${1}um",
            r"(t|f|g)ee(th|t|se)$" => Replace "${1}oo${2}",
            r"(child)ren$" => Replace "${1}",
            r"(p)eople$" => Replace "${1}erson",
            r"(ss|us|is)$" => Replace "${1}",
            r"s$" => Replace "",
        ],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Direction;

    fn en() -> &'static Language {
        ENG.language()
    }

    /// Asserts that `earlier` and `later` both match `word`, and that the
    /// earlier rule is the one applied.
    fn assert_shadows(direction: Direction, earlier: &str, later: &str, word: &str, want: &str) {
        let rules = en().rules(direction);
        let a = rules
            .position(earlier)
            .unwrap_or_else(|| panic!("missing rule `{earlier}`"));
        let b = rules
            .position(later)
            .unwrap_or_else(|| panic!("missing rule `{later}`"));
        assert!(a < b, "`{earlier}` (#{a}) must precede `{later}` (#{b})");
        assert!(
            rules.get(a).unwrap().is_match(word),
            "`{earlier}` should match `{word}`"
        );
        assert!(
            rules.get(b).unwrap().is_match(word),
            "`{later}` should match `{word}`"
        );
        assert_eq!(
            rules.first_match(word).map(|(i, _)| i),
            Some(a),
            "word: {word}"
        );
        assert_eq!(en().inflect(word, direction), want, "word: {word}");
    }

    #[test]
    fn built_in_table_compiles() {
        let en = en();
        assert_eq!(en.code(), "en");
        assert_eq!(en.plurals().len(), PLURAL_LEN);
        assert_eq!(en.singulars().len(), SINGULAR_LEN);
        assert_eq!(en.irregulars().len(), eng_data::IRREGULAR.len());
        assert_eq!(en.uncountables().count(), eng_data::UNCOUNTABLE.len());
    }

    const PLURAL_LEN: usize = 19;
    const SINGULAR_LEN: usize = 24;

    #[test]
    fn lookup_by_code() {
        assert_eq!(from_code("en"), Some(ENG));
        assert_eq!(from_code("EN"), Some(ENG));
        assert_eq!(from_code("xx"), None);
        assert!(get_language("En").is_some());
        assert!(get_language("zz").is_none());
        assert!(std::ptr::eq(get_language("en").unwrap(), ENG.language()));
        assert_eq!(all_langs(), &[ENG]);
        assert_eq!(ENG.name(), "English");
    }

    #[test]
    fn plural_overlaps_resolve_to_the_earlier_rule() {
        let p = Direction::Plural;
        assert_shadows(p, r"^(ox)$", r"(x|ch|ss|sh|o)$", "ox", "oxen");
        assert_shadows(
            p,
            r"(matr|vert|ind)(?:ix|ex)$",
            r"(x|ch|ss|sh|o)$",
            "index",
            "indices",
        );
        assert_shadows(
            p,
            r"(matr|vert|ind)(?:ix|ex)$",
            r"(x|ch|ss|sh|o)$",
            "matrix",
            "matrices",
        );
        let o_words = en().plurals().get(3).unwrap().pattern().to_owned();
        assert_shadows(p, &o_words, r"(x|ch|ss|sh|o)$", "photo", "photos");
        assert_shadows(p, &o_words, r"(x|ch|ss|sh|o)$", "zoo", "zoos");
        assert_shadows(p, &o_words, r"(x|ch|ss|sh|o)$", "kangaroo", "kangaroos");
    }

    #[test]
    fn singular_overlaps_resolve_to_the_earlier_rule() {
        let s = Direction::Singular;
        assert_shadows(s, r"(x|ch|ss|sh)es$", r"s$", "boxes", "box");
        assert_shadows(
            s,
            r"(^ax|^test|cris)es$",
            r"(x|ch|ss|sh)es$",
            "axes",
            "axis",
        );
        assert_shadows(s, r"(m)ovies$", r"([^aeiouy]|qu)ies$", "movies", "movie");
        assert_shadows(s, r"([^aeiouy]|qu)ies$", r"s$", "cities", "city");
        assert_shadows(s, r"(lea|loa|shea|thie)ves$", r"s$", "leaves", "leaf");
        assert_shadows(
            s,
            r"(dwar|hal|^el|wol|cal|sel|shel)ves$",
            r"s$",
            "wolves",
            "wolf",
        );
        assert_shadows(s, r"(kni|wi|^li)ves$", r"s$", "knives", "knife");
        assert_shadows(
            s,
            r"(buffal|ech|her|potat|tomat|torped|vet|volcan)oes$",
            r"s$",
            "heroes",
            "hero",
        );
        assert_shadows(s, r"(bus)es$", r"s$", "buses", "bus");
        assert_shadows(s, r"(alias|status)es$", r"s$", "statuses", "status");
        assert_shadows(s, r"(quiz)zes$", r"s$", "quizzes", "quiz");
        assert_shadows(s, r"(ss|us|is)$", r"s$", "class", "class");
        assert_shadows(s, r"(ss|us|is)$", r"s$", "virus", "virus");
    }

    #[test]
    fn oo_rule_sits_above_the_sibilant_rule() {
        let rules = en().plurals();
        let oo = rules.position(r"(t|f|g)oo(th|t|se)$").unwrap();
        let sibilant = rules.position(r"(x|ch|ss|sh|o)$").unwrap();
        assert!(oo < sibilant);
        assert_eq!(en().pluralize("foot"), "feet");
        assert_eq!(en().pluralize("tooth"), "teeth");
        assert_eq!(en().pluralize("goose"), "geese");
        assert_eq!(en().singularize("feet"), "foot");
        assert_eq!(en().singularize("teeth"), "tooth");
        assert_eq!(en().singularize("geese"), "goose");
    }

    #[test]
    fn anchored_stems_do_not_fire_inside_words() {
        // `^` anchors
        assert_eq!(en().pluralize("box"), "boxes");
        assert_eq!(en().singularize("taxes"), "tax");
        assert_eq!(en().singularize("databases"), "database");
        assert_eq!(en().pluralize("blouse"), "blouses");
        assert_eq!(en().singularize("olives"), "olive");
        assert_eq!(en().pluralize("cafe"), "cafes");
    }

    #[test]
    fn f_and_um_rules_only_fire_on_known_stems() {
        for (singular, plural) in [
            ("dwarf", "dwarves"),
            ("half", "halves"),
            ("elf", "elves"),
            ("wolf", "wolves"),
            ("calf", "calves"),
            ("self", "selves"),
            ("shelf", "shelves"),
            ("bacterium", "bacteria"),
            ("medium", "media"),
            ("stratum", "strata"),
        ] {
            assert_eq!(en().pluralize(singular), plural);
            assert_eq!(en().singularize(plural), singular);
        }
        for plural in ["valves", "curves", "nerves", "serves", "delves", "olives"] {
            assert_eq!(en().singularize(plural), plural.trim_end_matches('s'));
        }
        assert_eq!(en().pluralize("serf"), "serfs");
        assert_eq!(en().pluralize("gulf"), "gulfs");
        assert_eq!(en().pluralize("premium"), "premiums");
        assert_eq!(en().singularize("pasta"), "pasta");
        assert_eq!(en().singularize("sofa"), "sofa");
        assert_eq!(en().singularize("criteria"), "criterion");
    }

    #[test]
    fn every_irregular_and_uncountable_is_wired() {
        let en = en();
        for &(singular, plural) in eng_data::IRREGULAR {
            assert_eq!(en.pluralize(singular), plural);
            assert_eq!(en.singularize(plural), singular);
        }
        assert_eq!(en.irregulars().pairs().count(), eng_data::IRREGULAR.len());
        for (singular, plural) in en.irregulars().pairs() {
            assert_eq!(
                en.irregulars().counterpart(singular, Direction::Plural),
                Some(plural)
            );
            assert_eq!(
                en.irregulars().counterpart(plural, Direction::Singular),
                Some(singular)
            );
            assert!(en.irregulars().is_target(plural, Direction::Plural));
        }
        for &word in eng_data::UNCOUNTABLE {
            assert_eq!(en.pluralize(word), word);
            assert_eq!(en.singularize(word), word);
        }
    }
}
