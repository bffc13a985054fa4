//! Remittance reference parsing
//!
//! Payers are asked to put `<EVENT-SLUG>-<ORDER-CODE>` into the transfer
//! reference. Banks frequently insert line breaks or spaces into the field,
//! so all whitespace is removed before matching.
//!
//! The whole normalized reference must consist of the slug and the code.
//! References with additional text are rejected rather than guessed at.
//!
//! # Examples
//!
//! ```
//! use bankmatch::core::services::ReferenceParser;
//!
//! let parser = ReferenceParser::new("FEST").unwrap();
//! assert_eq!(parser.parse("fest-A1B2C").unwrap(), "A1B2C");
//! assert_eq!(parser.parse("FEST - A1B2C ").unwrap(), "A1B2C");
//! assert!(parser.parse("rent march").is_err());
//! ```

use regex::Regex;
use thiserror::Error;

/// Length of a ticketing order code
pub const ORDER_CODE_LEN: usize = 5;

/// Errors that can occur when parsing a remittance reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Reference does not follow `<slug>-<code>`
    #[error("couldn't parse remittance info")]
    NoMatch,
}

/// Extracts order codes from remittance text for one event
#[derive(Debug, Clone)]
pub struct ReferenceParser {
    /// Event slug the codes are prefixed with
    event_slug: String,

    /// Compiled `^(?i:<slug>)-([A-Za-z0-9]{5})$`
    pattern: Regex,
}

impl ReferenceParser {
    /// Build a parser for references prefixed with `event_slug`
    ///
    /// The slug is matched literally and case-insensitively. The code must
    /// consist of ASCII letters and digits.
    pub fn new(event_slug: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            "^(?i:{})-([A-Za-z0-9]{{{ORDER_CODE_LEN}}})$",
            regex::escape(event_slug)
        );
        Ok(Self {
            event_slug: event_slug.to_string(),
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Event slug this parser was built for
    #[must_use]
    pub fn event_slug(&self) -> &str {
        &self.event_slug
    }

    /// Extract the order code from `remittance`
    ///
    /// The code is returned in the case it appears in the input.
    pub fn parse(&self, remittance: &str) -> Result<String, ParseError> {
        let normalized: String = remittance.chars().filter(|c| !c.is_whitespace()).collect();

        self.pattern
            .captures(&normalized)
            .and_then(|caps| caps.get(1))
            .map(|code| code.as_str().to_string())
            .ok_or(ParseError::NoMatch)
    }
}
