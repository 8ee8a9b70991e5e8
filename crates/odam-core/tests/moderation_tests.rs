// Host-side tests for feedback moderation.

use odam_core::moderation::BANNED_TERMS;
use odam_core::{comment_length, validate, Rejection};

#[test]
fn banned_term_is_rejected() {
    assert_eq!(
        validate("you are a estafa"),
        Err(Rejection::DisallowedContent)
    );
}

#[test]
fn banned_terms_match_case_insensitively_as_substrings() {
    assert_eq!(
        validate("Esto es pura PUBLICIDAD engañosa"),
        Err(Rejection::DisallowedContent)
    );
    // Substring match: "odio" inside "melodioso"
    assert_eq!(
        validate("Un arreglo muy melodioso y bonito"),
        Err(Rejection::DisallowedContent)
    );
}

#[test]
fn blocked_terms_take_precedence_over_length() {
    assert_eq!(validate("spam"), Err(Rejection::DisallowedContent));
}

#[test]
fn short_comment_is_rejected() {
    assert_eq!(validate("ok"), Err(Rejection::TooShort));
    assert_eq!(validate("   ok   "), Err(Rejection::TooShort));
}

#[test]
fn whitespace_only_is_blank() {
    assert_eq!(validate("      "), Err(Rejection::Blank));
    assert_eq!(validate("\t\n            \n"), Err(Rejection::Blank));
    assert_eq!(validate(""), Err(Rejection::Blank));
}

#[test]
fn overlong_comment_is_rejected() {
    let long = "a".repeat(501);
    assert_eq!(validate(&long), Err(Rejection::TooLong));
    assert!(validate(&"á".repeat(500)).is_ok());
}

#[test]
fn length_counts_utf16_units_like_the_textarea() {
    assert_eq!(comment_length("😀"), 2);
    assert!(validate("😀😀😀😀😀").is_ok());
    assert_eq!(validate("😀😀😀😀"), Err(Rejection::TooShort));
    assert!(validate(&"😀".repeat(250)).is_ok());
    assert_eq!(validate(&"😀".repeat(251)), Err(Rejection::TooLong));
}

#[test]
fn friendly_comment_passes() {
    assert!(validate("This service was wonderful, thank you!").is_ok());
}

#[test]
fn reasons_and_messages() {
    assert_eq!(Rejection::DisallowedContent.to_string(), "disallowed content");
    assert_eq!(Rejection::TooShort.to_string(), "too short");
    assert_eq!(Rejection::Blank.to_string(), "blank");
    assert!(Rejection::TooShort.user_message().contains("10"));
}

#[test]
fn every_banned_term_is_lowercase() {
    for term in BANNED_TERMS {
        assert_eq!(*term, term.to_lowercase());
    }
}
