use crate::case::{Case, push_capitalized, push_lowercase};

/// `Humanized text`: first piece capitalized, later pieces lower-cased,
/// joined with spaces. The rest of the first piece keeps its casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Humanize;

impl Case for Humanize {
    fn name(&self) -> &'static str {
        "humanize"
    }

    fn joiner(&self) -> &'static str {
        " "
    }

    #[inline]
    fn push_piece(&self, index: usize, piece: &str, out: &mut String) {
        if index == 0 {
            push_capitalized(piece, out);
        } else {
            push_lowercase(piece, out);
        }
    }
}

/// `Title Text`: every piece capitalized, joined with spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Titleize;

impl Case for Titleize {
    fn name(&self) -> &'static str {
        "titleize"
    }

    fn joiner(&self) -> &'static str {
        " "
    }

    #[inline]
    fn push_piece(&self, _index: usize, piece: &str, out: &mut String) {
        push_capitalized(piece, out);
    }
}
