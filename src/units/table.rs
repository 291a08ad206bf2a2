
use super::prefix::Prefix;
use super::unit::Unit;

use thiserror::Error;

use std::collections::HashMap;

/// The registry of unit symbols and prefix symbols that the parser
/// resolves against.
///
/// A table is built up front and treated as read-only afterwards;
/// there is no process-wide table, and the parser takes an explicit
/// reference to the table it should use. A fully built table can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct UnitTable {
  units: HashMap<String, Unit>,
  prefixes: HashMap<String, Prefix>,
  /// Length in bytes of the longest registered prefix symbol, which
  /// bounds the prefix scan in [`UnitTable::resolve`].
  longest_prefix_len: usize,
}

/// Error produced when a symbol resolves to no unit, with or without
/// a prefix.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown unit '{symbol}'")]
pub struct UnknownUnitError {
  pub symbol: String,
}

impl UnknownUnitError {
  pub fn new(symbol: impl Into<String>) -> Self {
    Self { symbol: symbol.into() }
  }
}

impl UnitTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a unit under its symbol. A later unit with the same
  /// symbol replaces the earlier one.
  pub fn insert_unit(&mut self, unit: Unit) {
    self.units.insert(unit.symbol().to_owned(), unit);
  }

  /// Registers a prefix under its symbol.
  pub fn insert_prefix(&mut self, prefix: Prefix) {
    self.longest_prefix_len = self.longest_prefix_len.max(prefix.symbol().len());
    self.prefixes.insert(prefix.symbol().to_owned(), prefix);
  }

  pub fn extend_units(&mut self, units: impl IntoIterator<Item = Unit>) {
    for unit in units {
      self.insert_unit(unit);
    }
  }

  pub fn extend_prefixes(&mut self, prefixes: impl IntoIterator<Item = Prefix>) {
    for prefix in prefixes {
      self.insert_prefix(prefix);
    }
  }

  pub fn get_unit(&self, symbol: &str) -> Option<&Unit> {
    self.units.get(symbol)
  }

  pub fn get_prefix(&self, symbol: &str) -> Option<&Prefix> {
    self.prefixes.get(symbol)
  }

  /// Resolves a symbol from a unit expression against this table.
  ///
  /// A symbol registered as a unit always resolves to that unit, even
  /// if it could also be read as a prefix plus a shorter unit ("cd"
  /// is candela, never centi-days). Otherwise the symbol is split
  /// after its longest candidate prefix first, and the first split
  /// whose prefix and (non-empty) remainder are both registered wins.
  /// Only one prefix may be attached, and there is no backtracking
  /// past the first matching split.
  pub fn resolve(&self, symbol: &str) -> Result<Unit, UnknownUnitError> {
    if let Some(unit) = self.units.get(symbol) {
      return Ok(unit.clone());
    }
    for i in (1..=self.longest_prefix_len).rev() {
      if i >= symbol.len() || !symbol.is_char_boundary(i) {
        continue;
      }
      let (prefix, rest) = symbol.split_at(i);
      if let (Some(prefix), Some(unit)) = (self.prefixes.get(prefix), self.units.get(rest)) {
        return Ok(prefix.apply(unit));
      }
    }
    Err(UnknownUnitError::new(symbol))
  }
}

impl FromIterator<Unit> for UnitTable {
  fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
    let mut table = UnitTable::new();
    table.extend_units(iter);
    table
  }
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;
  use crate::units::dimension::Dimension;

  /// A small table with a handful of units and the SI prefixes,
  /// enough to exercise symbol resolution in tests.
  pub(crate) fn sample_table() -> UnitTable {
    let mut table: UnitTable = vec![
      Unit::new("m", Dimension::base("L"), 1.0),
      Unit::new("s", Dimension::base("T"), 1.0),
      Unit::new("g", Dimension::base("M"), 1.0),
      Unit::new("min", Dimension::base("T"), 60.0),
      Unit::new("d", Dimension::base("T"), 86_400.0),
      Unit::new("cd", Dimension::base("J"), 1.0),
      Unit::new("L", Dimension::base("L").pow(3), 1e-3),
    ].into_iter().collect();
    table.extend_prefixes(Prefix::si_prefixes());
    table
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::test_utils::sample_table;
  use crate::units::dimension::Dimension;

  #[test]
  fn test_resolve_named() {
    let table = sample_table();
    assert_eq!(table.resolve("m"), Ok(Unit::new("m", Dimension::base("L"), 1.0)));
    assert_eq!(table.resolve("min"), Ok(Unit::new("min", Dimension::base("T"), 60.0)));
  }

  #[test]
  fn test_resolve_prefixed() {
    let table = sample_table();
    assert_eq!(table.resolve("km"), Ok(Unit::new("km", Dimension::base("L"), 1000.0)));
    assert_eq!(table.resolve("ms"), Ok(Unit::new("ms", Dimension::base("T"), 0.001)));
    // Centi-minutes: nobody measures in them, but the table can.
    assert_eq!(table.resolve("cmin"), Ok(Unit::new("cmin", Dimension::base("T"), 0.6)));
  }

  #[test]
  fn test_resolve_named_beats_prefix() {
    // "cd" could be read as centi-days (factor 864), but the named
    // unit must win.
    let table = sample_table();
    let unit = table.resolve("cd").unwrap();
    assert_eq!(unit.dimension(), &Dimension::base("J"));
    assert_eq!(unit.factor(), 1.0);
  }

  #[test]
  fn test_resolve_longest_prefix_first() {
    // "dam" splits both as deka + m and as d + am once "am" is a
    // registered unit; the longer prefix must win.
    let mut table = sample_table();
    table.insert_unit(Unit::new("am", Dimension::base("L"), 123.0));
    assert_eq!(table.resolve("dam").unwrap().factor(), 10.0);
  }

  #[test]
  fn test_resolve_multibyte() {
    let table = sample_table();
    assert_eq!(table.resolve("µm").unwrap().factor(), 1e-6);
    assert_eq!(table.resolve("μs").unwrap().factor(), 1e-6);
    table.resolve("😇😇😇").unwrap_err();
  }

  #[test]
  fn test_resolve_prefix_alone_is_not_a_unit() {
    let table = sample_table();
    table.resolve("µ").unwrap_err();
    table.resolve("da").unwrap_err();
  }

  #[test]
  fn test_resolve_invalid() {
    let table = sample_table();
    table.resolve("").unwrap_err();
    table.resolve("Km").unwrap_err();
    table.resolve("kkm").unwrap_err(); // Do not allow multiple prefixes.
    let err = table.resolve("parsecs").unwrap_err();
    assert_eq!(err, UnknownUnitError::new("parsecs"));
    assert_eq!(err.to_string(), "Unknown unit 'parsecs'");
  }

  #[test]
  fn test_replacement() {
    let mut table = sample_table();
    table.insert_unit(Unit::new("m", Dimension::base("L"), 2.0));
    assert_eq!(table.resolve("m").unwrap().factor(), 2.0);
  }
}
