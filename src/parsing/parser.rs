
//! Recursive-descent parser for compound unit expressions.

use super::lexer::{ParseError, Token};
use crate::error::Error;
use crate::quantity::dynamic::DynQuantity;
use crate::units::rational::Rational;
use crate::units::table::UnitTable;

/// Parser evaluating a token stream against a unit table.
///
/// The grammar, with juxtaposition of two units acting as an implicit
/// `Mul`:
///
/// ```text
/// compound      := exponent_unit ((Mul | Div) exponent_unit)*
/// exponent_unit := unit ((Exp rational) | SupInteger)?
/// unit          := Symbol | LParen compound RParen
/// rational      := Integer (Div Integer)?
/// ```
///
/// A parser borrows its table and holds no other state; callers
/// construct one per parse, or share one across parses freely.
#[derive(Debug, Clone)]
pub struct UnitExprParser<'a> {
  table: &'a UnitTable,
}

/// Cursor over a borrowed token slice.
#[derive(Debug)]
struct Tokens<'t> {
  tokens: &'t [Token],
  position: usize,
}

impl<'t> Tokens<'t> {
  fn new(tokens: &'t [Token]) -> Self {
    Self { tokens, position: 0 }
  }

  fn peek(&self) -> Option<&'t Token> {
    self.tokens.get(self.position)
  }

  fn peek_at(&self, offset: usize) -> Option<&'t Token> {
    self.tokens.get(self.position + offset)
  }

  fn advance(&mut self) -> Option<&'t Token> {
    let token = self.tokens.get(self.position)?;
    self.position += 1;
    Some(token)
  }
}

impl<'a> UnitExprParser<'a> {
  pub fn new(table: &'a UnitTable) -> Self {
    Self { table }
  }

  /// Parses a whole token stream into a quantity. Fails if any tokens
  /// remain after the top-level compound unit has been read.
  pub fn parse(&self, tokens: &[Token]) -> Result<DynQuantity, Error> {
    let mut tokens = Tokens::new(tokens);
    let quantity = self.parse_compound(&mut tokens)?;
    match tokens.advance() {
      None => Ok(quantity),
      Some(token) => Err(ParseError::UnexpectedToken(token.clone()).into()),
    }
  }

  fn parse_compound(&self, tokens: &mut Tokens<'_>) -> Result<DynQuantity, Error> {
    let mut quantity = self.parse_exponent_unit(tokens)?;
    loop {
      match tokens.peek() {
        Some(Token::Mul) => {
          tokens.advance();
          quantity = quantity.try_mul(&self.parse_exponent_unit(tokens)?)?;
        }
        Some(Token::Div) => {
          tokens.advance();
          quantity = quantity.try_div(&self.parse_exponent_unit(tokens)?)?;
        }
        // Juxtaposition: "kg m" multiplies just like "kg*m".
        Some(Token::Symbol(_)) | Some(Token::LParen) => {
          quantity = quantity.try_mul(&self.parse_exponent_unit(tokens)?)?;
        }
        _ => {
          return Ok(quantity);
        }
      }
    }
  }

  fn parse_exponent_unit(&self, tokens: &mut Tokens<'_>) -> Result<DynQuantity, Error> {
    let quantity = self.parse_unit(tokens)?;
    match tokens.peek() {
      Some(Token::Exp) => {
        tokens.advance();
        let exponent = self.parse_rational(tokens)?;
        Ok(quantity.pow_dimension(exponent)?)
      }
      Some(Token::SupInteger(value)) => {
        // Note: A superscript is only an exponent on its own. After an
        // explicit caret, a plain integer is required, so "m^²" is a
        // parse error.
        let exponent = Rational::from(*value);
        tokens.advance();
        Ok(quantity.pow_dimension(exponent)?)
      }
      _ => Ok(quantity),
    }
  }

  fn parse_unit(&self, tokens: &mut Tokens<'_>) -> Result<DynQuantity, Error> {
    match tokens.advance() {
      Some(Token::Symbol(symbol)) => {
        let unit = self.table.resolve(symbol)?;
        Ok(DynQuantity::new(unit.factor(), unit.dimension().clone()))
      }
      Some(Token::LParen) => {
        let quantity = self.parse_compound(tokens)?;
        match tokens.advance() {
          Some(Token::RParen) => Ok(quantity),
          Some(token) => Err(ParseError::UnexpectedToken(token.clone()).into()),
          None => Err(ParseError::UnexpectedEnd.into()),
        }
      }
      Some(token) => Err(ParseError::UnexpectedToken(token.clone()).into()),
      None => Err(ParseError::UnexpectedEnd.into()),
    }
  }

  /// Parses a rational exponent. The `Div` in `m^2/3` binds to the
  /// exponent only when another integer follows; in `m^2/s` the
  /// division belongs to the enclosing compound unit.
  fn parse_rational(&self, tokens: &mut Tokens<'_>) -> Result<Rational, ParseError> {
    let numer = match tokens.advance() {
      Some(Token::Integer(value)) => *value,
      Some(token) => return Err(ParseError::UnexpectedToken(token.clone())),
      None => return Err(ParseError::UnexpectedEnd),
    };
    if let (Some(Token::Div), Some(Token::Integer(denom))) = (tokens.peek(), tokens.peek_at(1)) {
      let denom = *denom;
      if denom == 0 {
        return Err(ParseError::ZeroDenominator(format!("{numer}/{denom}")));
      }
      // Normalizing the sign of the exponent negates its components,
      // which overflows at i64::MIN.
      let exponent = Rational::checked_new(numer, denom)
        .ok_or_else(|| ParseError::InvalidInteger(format!("{numer}/{denom}")))?;
      tokens.advance();
      tokens.advance();
      Ok(exponent)
    } else {
      Ok(Rational::from(numer))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::lexer::tokenize;
  use crate::units::dimension::Dimension;
  use crate::units::table::test_utils::sample_table;

  fn parse_str(table: &UnitTable, text: &str) -> Result<DynQuantity, Error> {
    let tokens = tokenize(text)?;
    UnitExprParser::new(table).parse(&tokens)
  }

  #[test]
  fn test_parse_single_symbol() {
    let table = sample_table();
    let quantity = parse_str(&table, "m").unwrap();
    assert_eq!(quantity, DynQuantity::new(1.0, Dimension::base("L")));
  }

  #[test]
  fn test_parse_prefixed_symbol() {
    let table = sample_table();
    let quantity = parse_str(&table, "km").unwrap();
    assert_eq!(quantity, DynQuantity::new(1000.0, Dimension::base("L")));
  }

  #[test]
  fn test_parse_juxtaposition_is_multiplication() {
    let table = sample_table();
    assert_eq!(parse_str(&table, "g m").unwrap(), parse_str(&table, "g*m").unwrap());
    assert_eq!(parse_str(&table, "g (m)").unwrap(), parse_str(&table, "g⋅m").unwrap());
  }

  #[test]
  fn test_parse_rational_exponent_lookahead() {
    let table = sample_table();
    // The slash joins the exponent when an integer follows it and
    // stays a unit division otherwise.
    let halved = parse_str(&table, "m^2/2").unwrap();
    assert_eq!(halved.dimension(), Some(&Dimension::base("L")));
    let speed = parse_str(&table, "m^2/s").unwrap();
    assert_eq!(speed.dimension(), Some(&Dimension::from_iter([("L", 2), ("T", -1)])));
  }

  #[test]
  fn test_parse_caret_then_superscript_fails() {
    let table = sample_table();
    let err = parse_str(&table, "m^²").unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::UnexpectedToken(Token::SupInteger(2))));
  }

  #[test]
  fn test_parse_zero_denominator() {
    let table = sample_table();
    let err = parse_str(&table, "m^1/0").unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::ZeroDenominator("1/0".to_owned())));
  }

  #[test]
  fn test_parse_exponent_normalization_overflow() {
    let table = sample_table();
    let err = parse_str(&table, "m^-9223372036854775808/-1").unwrap_err();
    assert_eq!(
      err,
      Error::Parse(ParseError::InvalidInteger("-9223372036854775808/-1".to_owned())),
    );
    let err = parse_str(&table, "m^1/-9223372036854775808").unwrap_err();
    assert_eq!(
      err,
      Error::Parse(ParseError::InvalidInteger("1/-9223372036854775808".to_owned())),
    );
    // A plain i64::MIN exponent needs no normalization and stays fine.
    let quantity = parse_str(&table, "m^-9223372036854775808/2").unwrap();
    assert!(quantity.dimension().is_some());
  }

  #[test]
  fn test_parse_unclosed_paren() {
    let table = sample_table();
    let err = parse_str(&table, "(m*s").unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::UnexpectedEnd));
  }

  #[test]
  fn test_parse_leftover_tokens() {
    let table = sample_table();
    let err = parse_str(&table, "m )").unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::UnexpectedToken(Token::RParen)));
  }

  #[test]
  fn test_parse_leading_operator() {
    let table = sample_table();
    let err = parse_str(&table, "/s").unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::UnexpectedToken(Token::Div)));
  }

  #[test]
  fn test_parse_empty_stream() {
    let table = sample_table();
    let err = parse_str(&table, "").unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::UnexpectedEnd));
  }

  #[test]
  fn test_parse_unknown_symbol() {
    let table = sample_table();
    let err = parse_str(&table, "parsecs").unwrap_err();
    assert_eq!(err.to_string(), "Unknown unit 'parsecs'");
  }
}
