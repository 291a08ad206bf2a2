
use super::unit::Unit;

use std::fmt::{self, Formatter, Display};

/// A unit prefix: a symbol which scales whatever unit it is attached
/// to by a fixed linear factor, such as `k` for one thousand.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
  symbol: String,
  factor: f64,
}

impl Prefix {
  pub fn new(symbol: impl Into<String>, factor: f64) -> Self {
    Self {
      symbol: symbol.into(),
      factor,
    }
  }

  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn factor(&self) -> f64 {
    self.factor
  }

  /// Attaches this prefix to a unit, producing the derived unit with
  /// the concatenated symbol and the scaled conversion factor.
  pub fn apply(&self, unit: &Unit) -> Unit {
    Unit::new(
      format!("{}{}", self.symbol, unit.symbol()),
      unit.dimension().clone(),
      self.factor * unit.factor(),
    )
  }

  /// The standard SI prefixes, quetta through quecto.
  pub fn si_prefixes() -> Vec<Prefix> {
    vec![
      Prefix::new("Q", 1e30),
      Prefix::new("R", 1e27),
      Prefix::new("Y", 1e24),
      Prefix::new("Z", 1e21),
      Prefix::new("E", 1e18),
      Prefix::new("P", 1e15),
      Prefix::new("T", 1e12),
      Prefix::new("G", 1e9),
      Prefix::new("M", 1e6),
      Prefix::new("k", 1e3),
      Prefix::new("h", 1e2),
      Prefix::new("da", 1e1),
      Prefix::new("d", 1e-1),
      Prefix::new("c", 1e-2),
      Prefix::new("m", 1e-3),
      // Note: Micro is accepted as plain-ASCII "u", as the micro sign,
      // and as the Greek small mu.
      Prefix::new("u", 1e-6),
      Prefix::new("µ", 1e-6),
      Prefix::new("μ", 1e-6),
      Prefix::new("n", 1e-9),
      Prefix::new("p", 1e-12),
      Prefix::new("f", 1e-15),
      Prefix::new("a", 1e-18),
      Prefix::new("z", 1e-21),
      Prefix::new("y", 1e-24),
      Prefix::new("r", 1e-27),
      Prefix::new("q", 1e-30),
    ]
  }

  /// The binary (IEC) prefixes, kibi through exbi.
  pub fn binary_prefixes() -> Vec<Prefix> {
    vec![
      Prefix::new("Ki", 1024f64.powi(1)),
      Prefix::new("Mi", 1024f64.powi(2)),
      Prefix::new("Gi", 1024f64.powi(3)),
      Prefix::new("Ti", 1024f64.powi(4)),
      Prefix::new("Pi", 1024f64.powi(5)),
      Prefix::new("Ei", 1024f64.powi(6)),
    ]
  }
}

impl Display for Prefix {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol)
  }
}
