//! Property-based tests for reference parsing
//!
//! Uses proptest to verify properties that should hold for all inputs.

use bankmatch::core::services::{ParseError, ReferenceParser};
use proptest::prelude::*;

/// Insert a space before every character whose mask bit is set
fn spread(text: &str, mask: &[bool]) -> String {
    let mut out = String::new();
    for (i, c) in text.chars().enumerate() {
        if mask.get(i).copied().unwrap_or(false) {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

proptest! {
    /// A slug-prefixed five character code is extracted exactly
    #[test]
    fn well_formed_reference_yields_code(
        slug in "[A-Za-z][A-Za-z0-9]{0,11}",
        code in "[A-Za-z0-9]{5}"
    ) {
        let parser = ReferenceParser::new(&slug).unwrap();
        prop_assert_eq!(parser.parse(&format!("{slug}-{code}")), Ok(code));
    }

    /// Whitespace anywhere in the reference does not change the result
    #[test]
    fn whitespace_is_ignored(
        slug in "[A-Za-z][A-Za-z0-9]{0,11}",
        code in "[A-Za-z0-9]{5}",
        mask in prop::collection::vec(any::<bool>(), 0..24),
        trailing in "[ \t\n]{0,3}"
    ) {
        let parser = ReferenceParser::new(&slug).unwrap();
        let reference = format!("{}{trailing}", spread(&format!("{slug}-{code}"), &mask));
        prop_assert_eq!(parser.parse(&reference), Ok(code));
    }

    /// The slug is compared without regard to case
    #[test]
    fn slug_case_does_not_matter(
        slug in "[a-z]{1,12}",
        code in "[A-Za-z0-9]{5}"
    ) {
        let parser = ReferenceParser::new(&slug).unwrap();
        let reference = format!("{}-{code}", slug.to_uppercase());
        prop_assert_eq!(parser.parse(&reference), Ok(code));
    }

    /// Codes of any other length are rejected
    #[test]
    fn wrong_code_length_is_rejected(
        slug in "[A-Za-z][A-Za-z0-9]{0,11}",
        code in "[A-Za-z0-9]{0,4}|[A-Za-z0-9]{6,12}"
    ) {
        let parser = ReferenceParser::new(&slug).unwrap();
        prop_assert_eq!(parser.parse(&format!("{slug}-{code}")), Err(ParseError::NoMatch));
    }

    /// A code containing a character outside ASCII letters and digits is rejected
    #[test]
    fn foreign_character_in_code_is_rejected(
        prefix in "[A-Za-z0-9]{0,4}",
        foreign in "[^A-Za-z0-9\\s]",
        position in 0usize..5
    ) {
        let mut code: Vec<char> = format!("{prefix}AAAAA").chars().take(4).collect();
        let foreign = foreign.chars().next().unwrap();
        code.insert(position.min(code.len()), foreign);
        let code: String = code.into_iter().collect();

        let parser = ReferenceParser::new("FEST").unwrap();
        prop_assert_eq!(parser.parse(&format!("FEST-{code}")), Err(ParseError::NoMatch));
    }

    /// Text around an otherwise valid reference is rejected
    #[test]
    fn surrounding_text_is_rejected(
        code in "[A-Za-z0-9]{5}",
        extra in "[A-Za-z0-9]{1,8}"
    ) {
        let parser = ReferenceParser::new("FEST").unwrap();
        prop_assert_eq!(parser.parse(&format!("{extra}FEST-{code}")), Err(ParseError::NoMatch));
        prop_assert_eq!(parser.parse(&format!("FEST-{code}{extra}")), Err(ParseError::NoMatch));
    }
}
