use crate::case::{Case, push_capitalized, push_decapitalized};

/// `UpperCamelCase`: every piece capitalized, no joiner.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCamelCase;

impl Case for UpperCamelCase {
    fn name(&self) -> &'static str {
        "upper_camel_case"
    }

    fn joiner(&self) -> &'static str {
        ""
    }

    #[inline]
    fn push_piece(&self, _index: usize, piece: &str, out: &mut String) {
        push_capitalized(piece, out);
    }
}

/// `lowerCamelCase`: first piece decapitalized, the rest capitalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCamelCase;

impl Case for LowerCamelCase {
    fn name(&self) -> &'static str {
        "lower_camel_case"
    }

    fn joiner(&self) -> &'static str {
        ""
    }

    #[inline]
    fn push_piece(&self, index: usize, piece: &str, out: &mut String) {
        if index == 0 {
            push_decapitalized(piece, out);
        } else {
            push_capitalized(piece, out);
        }
    }
}
