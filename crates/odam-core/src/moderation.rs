//! Accept/reject gate for free-text feedback.
//!
//! Matching is a plain case-insensitive substring test against a fixed list.
//! It knows nothing about diacritics, word boundaries or obfuscation, and it
//! must stay that way: changing it changes which comments get through.

use crate::constants::{MAX_COMMENT_CHARS, MIN_COMMENT_CHARS};
use thiserror::Error;

pub const BANNED_TERMS: &[&str] = &[
    // vulgar or obscene
    "palabrota",
    "insulto",
    "groseria",
    "vulgar",
    "obsceno",
    // discrimination
    "racista",
    "sexista",
    "homofobico",
    "discriminatorio",
    // threats and violence
    "amenaza",
    "violencia",
    "odio",
    "daño",
    "atacar",
    // harassment
    "acoso",
    "difamacion",
    "humillacion",
    "abusivo",
    // spam and promotion
    "estafa",
    "phishing",
    "correo no deseado",
    "spam",
    "promoción",
    "marketing",
    "publicidad",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("disallowed content")]
    DisallowedContent,
    #[error("blank")]
    Blank,
    #[error("too short")]
    TooShort,
    #[error("too long")]
    TooLong,
}

impl Rejection {
    /// Message shown inline under the feedback form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Rejection::DisallowedContent => "El comentario contiene palabras no permitidas.",
            Rejection::Blank => "El comentario no puede contener solo espacios.",
            Rejection::TooShort => "Por favor, escribe al menos 10 caracteres.",
            Rejection::TooLong => "El comentario no puede superar los 500 caracteres.",
        }
    }
}

pub fn validate(comment: &str) -> Result<(), Rejection> {
    let lowered = comment.to_lowercase();
    if BANNED_TERMS
        .iter()
        .any(|term| lowered.contains(&term.to_lowercase()))
    {
        return Err(Rejection::DisallowedContent);
    }
    if comment.chars().all(char::is_whitespace) {
        return Err(Rejection::Blank);
    }
    let units = comment_length(comment.trim());
    if units < MIN_COMMENT_CHARS {
        return Err(Rejection::TooShort);
    }
    if units > MAX_COMMENT_CHARS {
        return Err(Rejection::TooLong);
    }
    Ok(())
}

/// Length as the browser counts it (UTF-16 code units), so the limits agree
/// with the textarea's `maxlength` and the live counter.
#[inline]
pub fn comment_length(comment: &str) -> usize {
    comment.encode_utf16().count()
}
