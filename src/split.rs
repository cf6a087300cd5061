//! Identifier tokenizer shared by every case converter.
//!
//! Boundaries come from two sources:
//! * an ASCII lower-case byte followed by an ASCII upper-case byte (`fooBar`)
//! * the delimiters `_`, `-` and space, which are dropped
//!
//! Pieces borrow from the input. Leading/trailing delimiters and runs of
//! delimiters never produce empty pieces.
use memchr::memchr3;
use smallvec::SmallVec;
use thiserror::Error;

/// Word fragments of one identifier, in input order. Never empty, and no
/// fragment is the empty string.
pub type Pieces<'a> = SmallVec<[&'a str; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("cannot split an empty string")]
    Empty,

    #[error("`{0}` contains only delimiters")]
    OnlyDelimiters(String),
}

#[inline(always)]
pub fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b'_' | b'-' | b' ')
}

#[inline(always)]
fn is_camel_boundary(current: u8, next: u8) -> bool {
    current.is_ascii_lowercase() && next.is_ascii_uppercase()
}

/// Fast pre-check: does `text` contain any word boundary at all?
#[inline]
pub fn has_boundary(text: &str) -> bool {
    let bytes = text.as_bytes();
    memchr3(b'_', b'-', b' ', bytes).is_some()
        || bytes.windows(2).any(|w| is_camel_boundary(w[0], w[1]))
}

/// Split an identifier into its word pieces.
///
/// ```
/// use inflect::split::split;
///
/// assert_eq!(split("lowerCamelCase").unwrap().as_slice(), ["lower", "Camel", "Case"]);
/// assert_eq!(split("__private--field ").unwrap().as_slice(), ["private", "field"]);
/// assert!(split("").is_err());
/// ```
pub fn split(text: &str) -> Result<Pieces<'_>, SplitError> {
    if text.is_empty() {
        return Err(SplitError::Empty);
    }

    let mut pieces = Pieces::new();
    if !has_boundary(text) {
        pieces.push(text);
        return Ok(pieces);
    }

    // Only ASCII bytes end a piece, so every slice lands on a char boundary.
    let bytes = text.as_bytes();
    let mut start = 0;
    for (current, &byte) in bytes.iter().enumerate() {
        if is_delimiter(byte) {
            push_piece(&mut pieces, &text[start..current]);
            start = current + 1;
        } else if bytes
            .get(current + 1)
            .is_some_and(|&next| is_camel_boundary(byte, next))
        {
            push_piece(&mut pieces, &text[start..=current]);
            start = current + 1;
        }
    }
    push_piece(&mut pieces, &text[start..]);

    if pieces.is_empty() {
        return Err(SplitError::OnlyDelimiters(text.to_owned()));
    }
    Ok(pieces)
}

#[inline(always)]
fn push_piece<'a>(pieces: &mut Pieces<'a>, piece: &'a str) {
    if !piece.is_empty() {
        pieces.push(piece);
    }
}
