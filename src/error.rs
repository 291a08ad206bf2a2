
//! The crate-wide error type.

use crate::parsing::lexer::ParseError;
use crate::units::dimension::DimensionError;
use crate::units::table::UnknownUnitError;

use thiserror::Error;

/// Any error produced while parsing or combining quantities.
///
/// The two families stay disjoint: a [`ParseError`] means the input
/// text was malformed or mentioned an unknown symbol, while a
/// [`DimensionError`] means well-formed units combined into the wrong
/// dimension. Neither is ever reported as the other.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  Parse(#[from] ParseError),
  #[error("{0}")]
  Dimension(#[from] DimensionError),
}

impl From<UnknownUnitError> for Error {
  fn from(err: UnknownUnitError) -> Self {
    Self::Parse(err.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display_passes_through() {
    let err = Error::from(ParseError::UnexpectedEnd);
    assert_eq!(err.to_string(), "Unexpected end of unit expression");
    let err = Error::from(DimensionError::Unbound);
    assert_eq!(err.to_string(), "Quantity has not been bound to a dimension yet");
  }

  #[test]
  fn test_unknown_unit_routes_through_parse() {
    let err = Error::from(UnknownUnitError::new("parsecs"));
    assert!(matches!(err, Error::Parse(ParseError::UnknownUnit(_))));
    assert_eq!(err.to_string(), "Unknown unit 'parsecs'");
  }
}
