use crate::case::{Case, push_lowercase, push_uppercase};

/// `snake_case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Underscore;

impl Case for Underscore {
    fn name(&self) -> &'static str {
        "underscore"
    }

    fn joiner(&self) -> &'static str {
        "_"
    }

    #[inline]
    fn push_piece(&self, _index: usize, piece: &str, out: &mut String) {
        push_lowercase(piece, out);
    }
}

/// `kebab-case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyphenate;

impl Case for Hyphenate {
    fn name(&self) -> &'static str {
        "hyphenate"
    }

    fn joiner(&self) -> &'static str {
        "-"
    }

    #[inline]
    fn push_piece(&self, _index: usize, piece: &str, out: &mut String) {
        push_lowercase(piece, out);
    }
}

/// `SCREAMING_SNAKE_CASE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Constantize;

impl Case for Constantize {
    fn name(&self) -> &'static str {
        "constantize"
    }

    fn joiner(&self) -> &'static str {
        "_"
    }

    #[inline]
    fn push_piece(&self, _index: usize, piece: &str, out: &mut String) {
        push_uppercase(piece, out);
    }
}
