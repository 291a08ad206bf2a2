
//! Parsing of quantity strings: a leading numeric literal followed by
//! a compound unit expression.
//!
//! [`parse_quantity`] is the top-level entry point. It splits its
//! input into a numeric literal and a unit expression, evaluates the
//! unit expression against a [`UnitTable`], and multiplies the two.
//! The literal defaults to 1 when absent and the unit expression to a
//! dimensionless 1 when absent, so `"2.5"`, `"m"` and `"2.5 m"` all
//! parse.

pub mod lexer;
pub mod parser;

pub use lexer::{ParseError, Token, tokenize};
pub use parser::UnitExprParser;

use crate::error::Error;
use crate::quantity::dynamic::DynQuantity;
use crate::quantity::typed::{DimensionTag, Quantity};
use crate::units::dimension::{Dimension, DimensionError};
use crate::units::table::UnitTable;

use once_cell::sync::Lazy;
use regex::Regex;

/// Splits `text` into a leading numeric literal and the rest. A
/// missing literal defaults to 1, leaving the input untouched.
fn read_number_literal(text: &str) -> Result<(f64, &str), ParseError> {
  static RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?").unwrap()
  });
  let text = text.trim_start();
  match RE.find(text) {
    None => Ok((1.0, text)),
    Some(m) => {
      let value = m.as_str().parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(m.as_str().to_owned()))?;
      Ok((value, &text[m.end()..]))
    }
  }
}

/// Parses a quantity string such as `"2.5 g⋅L⁻¹"` or `"1 kg/(m.s^2)"`
/// against the given table.
///
/// The input is a numeric literal, a unit expression, or both. A bare
/// literal yields a dimensionless quantity, and a bare unit
/// expression has magnitude equal to its conversion factor.
pub fn parse_quantity(text: &str, table: &UnitTable) -> Result<DynQuantity, Error> {
  let (magnitude, rest) = read_number_literal(text)?;
  let rest = rest.trim();
  if rest.is_empty() {
    return Ok(DynQuantity::scalar(magnitude));
  }
  let tokens = tokenize(rest)?;
  let unit = UnitExprParser::new(table).parse(&tokens)?;
  Ok(unit * magnitude)
}

/// Parses a quantity and checks it against an expected dimension,
/// returning the bare magnitude.
pub fn parse_quantity_as(
  text: &str,
  table: &UnitTable,
  expected: &Dimension,
) -> Result<f64, Error> {
  let quantity = parse_quantity(text, table)?;
  match quantity.dimension() {
    Some(found) if found == expected => Ok(quantity.magnitude()),
    Some(found) => Err(DimensionError::Mismatch {
      expected: expected.clone(),
      found: found.clone(),
    }.into()),
    None => Err(DimensionError::Unbound.into()),
  }
}

/// Parses a quantity into a statically tagged [`Quantity`]. The
/// parsed dimension must equal the tag's dimension.
pub fn parse_quantity_typed<D: DimensionTag>(
  text: &str,
  table: &UnitTable,
) -> Result<Quantity<D>, Error> {
  let quantity = parse_quantity(text, table)?;
  Ok(Quantity::try_from(quantity)?)
}
