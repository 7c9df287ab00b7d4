//! Message normalization and classification
//!
//! A [`Message`] is the validated, uppercase form of the text a caller asked
//! to transmit. Construction trims the input, folds letters to uppercase,
//! collapses runs of whitespace and rejects anything outside the FT8
//! character set. Classification into a [`subtype::Subtype`] happens on the
//! normalized text and is deterministic.

use std::fmt::Display;

use snafu::Snafu;
use tracing::debug;

pub mod subtype;
pub mod tokens;

use subtype::Subtype;

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum MessageParseError {
    /// Empty string after trimming
    #[snafu(display("message text is empty"))]
    EmptyMessage,

    /// Character outside the FT8 alphabet
    #[snafu(display("message contains an invalid character {character:?}"))]
    InvalidCharacter { character: char },
}

/// A normalized FT8 message.
///
/// The text is uppercase ASCII over `{A-Z, 0-9, space, +, -, /, ., ?}` with
/// no leading, trailing or repeated whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<&str> for Message {
    type Error = MessageParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let mut text = String::with_capacity(trimmed.len());
        let mut last_was_space = false;
        for c in trimmed.chars() {
            let c = c.to_ascii_uppercase();
            if !(c.is_ascii_uppercase()
                || c.is_ascii_digit()
                || matches!(c, ' ' | '+' | '-' | '/' | '.' | '?'))
            {
                return Err(MessageParseError::InvalidCharacter { character: c });
            }
            if !(last_was_space && c == ' ') {
                text.push(c);
            }
            last_was_space = c == ' ';
        }

        debug!(%text, "normalized message");
        Ok(Message { text })
    }
}

impl TryFrom<String> for Message {
    type Error = MessageParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Message::try_from(value.as_str())
    }
}

impl Message {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    pub fn subtype(&self) -> Subtype {
        subtype::classify(&self.tokens())
    }

    /// Tokenized view used by the payload packer.
    pub fn view(&self) -> TokenView<'_> {
        TokenView::new(self.tokens())
    }
}

/// An immutable tokenization of a message plus a consumed-token bitmap.
///
/// Field codecs mark the tokens they encode as consumed so no token can
/// satisfy two payload fields. This replaces the original's practice of
/// erasing matched substrings from a working copy of the message.
#[derive(Debug)]
pub struct TokenView<'a> {
    tokens: Vec<&'a str>,
    consumed: Vec<bool>,
}

impl<'a> TokenView<'a> {
    pub fn new(tokens: Vec<&'a str>) -> Self {
        let consumed = vec![false; tokens.len()];
        TokenView { tokens, consumed }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    pub fn is_consumed(&self, index: usize) -> bool {
        self.consumed[index]
    }

    pub fn consume(&mut self, index: usize) {
        self.consumed[index] = true;
    }

    /// Unconsumed tokens with their indices, in message order.
    pub fn remaining(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.tokens
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| !self.consumed[*i])
    }

    /// Consume and return the first unconsumed token satisfying `pred`.
    pub fn take_first<P: Fn(&str) -> bool>(&mut self, pred: P) -> Option<(usize, &'a str)> {
        let found = self.remaining().find(|&(_, t)| pred(t));
        if let Some((i, t)) = found {
            self.consume(i);
            return Some((i, t));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalization {
        use super::*;

        #[test]
        fn uppercases_and_trims() {
            let m = Message::try_from("  cq k1abc fn42 ").unwrap();
            assert_eq!(m.text(), "CQ K1ABC FN42");
        }

        #[test]
        fn collapses_internal_whitespace() {
            let m = Message::try_from("CQ   K1ABC    FN42").unwrap();
            assert_eq!(m.text(), "CQ K1ABC FN42");
        }

        #[test]
        fn keeps_report_punctuation() {
            let m = Message::try_from("K1ABC W9XYZ +05").unwrap();
            assert_eq!(m.text(), "K1ABC W9XYZ +05");
        }

        #[test]
        fn empty_string_is_rejected() {
            assert_eq!(Message::try_from(""), Err(MessageParseError::EmptyMessage));
            assert_eq!(
                Message::try_from("   "),
                Err(MessageParseError::EmptyMessage)
            );
        }

        #[test]
        fn invalid_character_is_rejected() {
            assert_eq!(
                Message::try_from("CQ K1ABC #FN42"),
                Err(MessageParseError::InvalidCharacter { character: '#' })
            );
        }
    }

    mod token_view {
        use super::*;

        #[test]
        fn consumed_tokens_are_skipped() {
            let m = Message::try_from("CQ K1ABC FN42").unwrap();
            let mut view = m.view();
            assert_eq!(view.take_first(|t| t == "K1ABC"), Some((1, "K1ABC")));
            assert_eq!(view.take_first(|t| t == "K1ABC"), None);
            let rest: Vec<&str> = view.remaining().map(|(_, t)| t).collect();
            assert_eq!(rest, vec!["CQ", "FN42"]);
        }
    }
}
