
//! Hand-written lexer for unit expressions.

use crate::units::table::UnknownUnitError;

use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::iter::Peekable;
use std::str::Chars;

/// A single lexical token of a unit expression.
///
/// The boundary between adjacent tokens is purely lexical: a
/// transition between character classes ends the current token, so
/// `"m2"` lexes as a symbol followed by an integer with no whitespace
/// required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  /// A unit symbol, possibly carrying a prefix, such as `"km"`.
  Symbol(String),
  /// Any of `*`, `.`, `⋅` or `×`.
  Mul,
  /// Either `/` or `÷`.
  Div,
  /// The caret `^`.
  Exp,
  /// A plain decimal integer, used in exponents.
  Integer(i64),
  /// An integer written with superscript digits, such as `⁻¹`.
  SupInteger(i64),
  LParen,
  RParen,
}

/// An error produced while lexing or parsing a unit expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
  #[error("Unexpected end of unit expression")]
  UnexpectedEnd,
  #[error("Unexpected token '{0}' in unit expression")]
  UnexpectedToken(Token),
  #[error("Invalid integer '{0}' in unit expression")]
  InvalidInteger(String),
  #[error("Invalid numeric literal '{0}'")]
  InvalidNumber(String),
  #[error("Exponent '{0}' has a zero denominator")]
  ZeroDenominator(String),
  #[error("{0}")]
  UnknownUnit(#[from] UnknownUnitError),
}

/// Splits a unit expression into tokens. Whitespace separates tokens
/// and is never itself emitted. The input is expected to have had any
/// leading numeric literal stripped off already; integers lexed here
/// are exponents, not magnitudes.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
  let mut tokens = Vec::new();
  let mut chars = input.chars().peekable();
  while let Some(ch) = chars.peek().copied() {
    if ch.is_whitespace() {
      chars.next();
    } else if let Some(token) = operator_token(ch) {
      chars.next();
      tokens.push(token);
    } else if is_integer_char(ch) {
      tokens.push(read_integer(&mut chars)?);
    } else if is_superscript_char(ch) {
      tokens.push(read_superscript(&mut chars)?);
    } else {
      tokens.push(read_symbol(&mut chars));
    }
  }
  Ok(tokens)
}

fn operator_token(ch: char) -> Option<Token> {
  match ch {
    '*' | '.' | '⋅' | '×' => Some(Token::Mul),
    '/' | '÷' => Some(Token::Div),
    '^' => Some(Token::Exp),
    '(' => Some(Token::LParen),
    ')' => Some(Token::RParen),
    _ => None,
  }
}

fn is_integer_char(ch: char) -> bool {
  ch.is_ascii_digit() || ch == '+' || ch == '-'
}

/// The ASCII equivalent of a superscript digit or sign.
fn superscript_value(ch: char) -> Option<char> {
  match ch {
    '⁰' => Some('0'),
    '¹' => Some('1'),
    '²' => Some('2'),
    '³' => Some('3'),
    '⁴' => Some('4'),
    '⁵' => Some('5'),
    '⁶' => Some('6'),
    '⁷' => Some('7'),
    '⁸' => Some('8'),
    '⁹' => Some('9'),
    '⁺' => Some('+'),
    '⁻' => Some('-'),
    _ => None,
  }
}

fn is_superscript_char(ch: char) -> bool {
  superscript_value(ch).is_some()
}

fn read_integer(chars: &mut Peekable<Chars<'_>>) -> Result<Token, ParseError> {
  let mut text = String::new();
  while let Some(ch) = chars.peek().copied() {
    if !is_integer_char(ch) {
      break;
    }
    text.push(ch);
    chars.next();
  }
  match text.parse::<i64>() {
    Ok(value) => Ok(Token::Integer(value)),
    Err(_) => Err(ParseError::InvalidInteger(text)),
  }
}

fn read_superscript(chars: &mut Peekable<Chars<'_>>) -> Result<Token, ParseError> {
  let mut raw = String::new();
  let mut decoded = String::new();
  while let Some(ch) = chars.peek().copied() {
    match superscript_value(ch) {
      Some(ascii) => {
        raw.push(ch);
        decoded.push(ascii);
        chars.next();
      }
      None => break,
    }
  }
  match decoded.parse::<i64>() {
    Ok(value) => Ok(Token::SupInteger(value)),
    // The error carries the superscript text as written, not the
    // decoded form.
    Err(_) => Err(ParseError::InvalidInteger(raw)),
  }
}

fn read_symbol(chars: &mut Peekable<Chars<'_>>) -> Token {
  let mut text = String::new();
  while let Some(ch) = chars.peek().copied() {
    if ch.is_whitespace() || operator_token(ch).is_some() ||
       is_integer_char(ch) || is_superscript_char(ch) {
      break;
    }
    text.push(ch);
    chars.next();
  }
  Token::Symbol(text)
}

impl Display for Token {
  /// Superscript integers render in plain ASCII.
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Symbol(text) => write!(f, "{text}"),
      Token::Mul => write!(f, "*"),
      Token::Div => write!(f, "/"),
      Token::Exp => write!(f, "^"),
      Token::Integer(value) => write!(f, "{value}"),
      Token::SupInteger(value) => write!(f, "{value}"),
      Token::LParen => write!(f, "("),
      Token::RParen => write!(f, ")"),
    }
  }
}
