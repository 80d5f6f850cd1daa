//! Textual representation of string-keyed tries.
//!
//! [`Display`] renders a trie as `{"key": value, ...}` in the trie's view
//! order; [`FromStr`] parses that shape back into an equal trie of the same
//! concrete variant. Keys are quoted with `"` and `\` backslash-escaped.
//! Values are taken verbatim up to the next `,` or `}`, so a value type whose
//! `Display` output contains either character is outside the round-trip
//! contract.

use std::fmt::{self, Write};
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::order::Order;
use crate::trie::Trie;

/// Failure to parse a trie's textual representation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError<E> {
    /// A different token was expected at this byte offset.
    #[error("expected {expected} at byte {at}")]
    Expected { expected: &'static str, at: usize },
    /// A key's closing quote is missing.
    #[error("unterminated key starting at byte {at}")]
    UnterminatedKey { at: usize },
    /// The text between `:` and the next `,` or `}` failed to parse.
    #[error("invalid value at byte {at}: {err}")]
    Value { at: usize, err: E },
}

impl<V: fmt::Display, O: Order> fmt::Display for Trie<String, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        write!(
            f,
            "{}",
            self.iter().format_with(", ", |(key, value), f| {
                f(&format_args!("\"{}\": {}", Escaped(&key), value))
            })
        )?;
        write!(f, "}}")
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                _ => f.write_char(ch)?,
            }
        }
        Ok(())
    }
}

impl<V: FromStr, O: Order> FromStr for Trie<String, V, O> {
    type Err = ParseError<V::Err>;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser { text, at: 0 };
        let mut trie = Trie::new();
        parser.skip_ws();
        parser.expect('{', "'{'")?;
        parser.skip_ws();
        if !parser.eat('}') {
            loop {
                let key = parser.key()?;
                parser.skip_ws();
                parser.expect(':', "':'")?;
                let (raw, at) = parser.value_text();
                let value = raw
                    .trim()
                    .parse()
                    .map_err(|err| ParseError::Value { at, err })?;
                trie.insert(key, value);
                if parser.eat(',') {
                    parser.skip_ws();
                    continue;
                }
                parser.expect('}', "',' or '}'")?;
                break;
            }
        }
        parser.skip_ws();
        if !parser.done() {
            return Err(ParseError::Expected {
                expected: "end of input",
                at: parser.at,
            });
        }
        Ok(trie)
    }
}

struct Parser<'a> {
    text: &'a str,
    at: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.at..]
    }

    fn done(&self) -> bool {
        self.at == self.text.len()
    }

    fn skip_ws(&mut self) {
        self.at += self.rest().len() - self.rest().trim_start().len();
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.at += ch.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect<E>(&mut self, ch: char, expected: &'static str) -> Result<(), ParseError<E>> {
        if self.eat(ch) {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected,
                at: self.at,
            })
        }
    }

    /// A quoted key, with `\"` and `\\` escapes undone.
    fn key<E>(&mut self) -> Result<String, ParseError<E>> {
        let start = self.at;
        self.expect('"', "'\"'")?;
        let mut key = String::new();
        loop {
            let Some(ch) = self.peek() else {
                return Err(ParseError::UnterminatedKey { at: start });
            };
            self.at += ch.len_utf8();
            match ch {
                '"' => return Ok(key),
                '\\' => {
                    let Some(escaped) = self.peek() else {
                        return Err(ParseError::UnterminatedKey { at: start });
                    };
                    match escaped {
                        '"' | '\\' => key.push(escaped),
                        _ => {
                            return Err(ParseError::Expected {
                                expected: "'\\\\' or '\\\"'",
                                at: self.at,
                            });
                        }
                    }
                    self.at += escaped.len_utf8();
                }
                _ => key.push(ch),
            }
        }
    }

    /// Raw value text up to, but not including, the next `,` or `}`.
    fn value_text(&mut self) -> (&'a str, usize) {
        let start = self.at;
        let end = self
            .rest()
            .find([',', '}'])
            .map_or(self.text.len(), |found| start + found);
        self.at = end;
        (&self.text[start..end], start)
    }
}
