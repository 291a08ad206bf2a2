
use super::dimension::Dimension;

use std::fmt::{self, Formatter, Display};

/// A named unit: a symbol, the dimension it measures, and the linear
/// factor converting one of this unit into the base unit of that
/// dimension.
///
/// `Unit::new("km", Dimension::base("L"), 1000.0)` says that one
/// kilometer is one thousand of the length base unit. Only linear
/// conversions are representable; units with an offset (such as
/// degrees Celsius) are out of scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
  symbol: String,
  dimension: Dimension,
  /// The amount of the base unit that is equal to one of this unit.
  factor: f64,
}

impl Unit {
  /// Constructs a new unit from its symbol, its dimension, and its
  /// conversion factor to the base unit of that dimension.
  pub fn new(symbol: impl Into<String>, dimension: Dimension, factor: f64) -> Self {
    Self {
      symbol: symbol.into(),
      dimension,
      factor,
    }
  }

  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn dimension(&self) -> &Dimension {
    &self.dimension
  }

  /// The amount of the base unit equal to one of this unit.
  pub fn factor(&self) -> f64 {
    self.factor
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol)
  }
}
