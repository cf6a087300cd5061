use crate::{
    case::{Case, CaseError},
    split::SplitError,
};

/// Trait that converters implement to opt into the universal test suite.
pub trait CaseTestConfig: Case + Sized {
    /// General samples, one per source convention.
    fn samples() -> &'static [&'static str] {
        &[
            "single",
            "lowerCamelCase",
            "under_scored",
            "hyphen-ated",
            "UpperCamelCase",
            "spaced Out",
        ]
    }

    /// Input/output pairs that pin the converter's behavior.
    fn should_transform() -> &'static [(&'static str, &'static str)];
}

/// Assert that a converter satisfies every universal contract:
///
/// 1. `rejects_inputs_without_pieces` → empty and delimiter-only input is `InvalidInput`
/// 2. `transforms_known_samples` → `should_transform` pairs hold
/// 3. `is_deterministic` → same input, same output
/// 4. `is_idempotent_on_samples` → converting twice equals converting once
/// 5. `never_emits_empty_pieces` → no leading, trailing or doubled joiner
/// 6. `no_panic_on_mixed_scripts` → non-ASCII input converts
#[macro_export]
macro_rules! assert_case_contract {
    ($case:expr) => {
        $crate::testing::case_contract::rejects_inputs_without_pieces(&$case);
        $crate::testing::case_contract::transforms_known_samples(&$case);
        $crate::testing::case_contract::is_deterministic(&$case);
        $crate::testing::case_contract::is_idempotent_on_samples(&$case);
        $crate::testing::case_contract::never_emits_empty_pieces(&$case);
        $crate::testing::case_contract::no_panic_on_mixed_scripts(&$case);
    };
}

const MIXED_SCRIPTS: &[&str] = &[
    "naïve_façade",
    "größeZahl",
    "日本語 text",
    "Привет-мир",
    "emoji🎉Party",
    "x",
    "A",
    "_x_",
];

pub fn rejects_inputs_without_pieces<C: CaseTestConfig>(case: &C) {
    assert_eq!(
        case.convert(""),
        Err(CaseError::InvalidInput(case.name(), SplitError::Empty))
    );
    for input in ["_", "-", " ", "__--  "] {
        assert_eq!(
            case.convert(input),
            Err(CaseError::InvalidInput(
                case.name(),
                SplitError::OnlyDelimiters(input.to_owned())
            )),
            "{}: `{input}`",
            case.name()
        );
    }
}

pub fn transforms_known_samples<C: CaseTestConfig>(case: &C) {
    for &(input, expected) in C::should_transform() {
        assert_eq!(
            case.convert(input).unwrap(),
            expected,
            "{}: `{input}`",
            case.name()
        );
    }
}

pub fn is_deterministic<C: CaseTestConfig>(case: &C) {
    for &input in C::samples().iter().chain(MIXED_SCRIPTS) {
        assert_eq!(case.convert(input), case.convert(input));
    }
}

pub fn is_idempotent_on_samples<C: CaseTestConfig>(case: &C) {
    for &input in C::samples() {
        let once = case.convert(input).unwrap();
        let twice = case.convert(&once).unwrap();
        assert_eq!(once, twice, "{}: `{input}`", case.name());
    }
}

pub fn never_emits_empty_pieces<C: CaseTestConfig>(case: &C) {
    let joiner = case.joiner();
    if joiner.is_empty() {
        return;
    }
    let doubled = joiner.repeat(2);
    for &input in C::samples().iter().chain(MIXED_SCRIPTS) {
        let out = case.convert(input).unwrap();
        assert!(!out.starts_with(joiner), "{}: `{out}`", case.name());
        assert!(!out.ends_with(joiner), "{}: `{out}`", case.name());
        assert!(!out.contains(&doubled), "{}: `{out}`", case.name());
    }
}

pub fn no_panic_on_mixed_scripts<C: CaseTestConfig>(case: &C) {
    for &input in MIXED_SCRIPTS {
        let out = case.convert(input).unwrap();
        assert!(!out.is_empty(), "{}: `{input}`", case.name());
    }
}
