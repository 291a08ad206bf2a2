
//! A ready-made SI unit table.
//!
//! The crate itself is agnostic about which base dimensions exist;
//! this module picks the conventional ISQ symbols (L, M, T, I, Θ, N,
//! J) and registers the SI units on top of them. Only units with
//! purely linear conversion factors appear here, so the Celsius and
//! Fahrenheit scales are deliberately absent.

use super::dimension::Dimension;
use super::prefix::Prefix;
use super::table::UnitTable;
use super::unit::Unit;

fn length() -> Dimension {
  Dimension::base("L")
}

fn mass() -> Dimension {
  Dimension::base("M")
}

fn time() -> Dimension {
  Dimension::base("T")
}

fn current() -> Dimension {
  Dimension::base("I")
}

fn temperature() -> Dimension {
  Dimension::base("Θ")
}

fn amount() -> Dimension {
  Dimension::base("N")
}

fn intensity() -> Dimension {
  Dimension::base("J")
}

/// Builds the default SI table: the seven base units, a selection of
/// derived units, and the standard SI prefixes.
///
/// The mass base unit is the gram rather than the kilogram, so that
/// prefixes compose cleanly ("kg" is parsed as kilo + gram). Derived
/// units defined against the kilogram therefore carry a factor of
/// 1000.
pub fn table() -> UnitTable {
  let units = vec![
    // Base units
    Unit::new("m", length(), 1.0),
    Unit::new("s", time(), 1.0),
    Unit::new("g", mass(), 1.0),
    Unit::new("A", current(), 1.0),
    Unit::new("K", temperature(), 1.0),
    Unit::new("mol", amount(), 1.0),
    Unit::new("cd", intensity(), 1.0),
    // Time units beyond the second
    Unit::new("min", time(), 60.0),
    Unit::new("h", time(), 3600.0),
    Unit::new("d", time(), 86_400.0),
    // Derived units
    Unit::new("Hz", time().pow(-1), 1.0), // Hertz
    Unit::new("N", mass() * length() / time().pow(2), 1000.0), // Newton
    Unit::new("Pa", mass() / (length() * time().pow(2)), 1000.0), // Pascal
    Unit::new("J", mass() * length().pow(2) / time().pow(2), 1000.0), // Joule
    Unit::new("W", mass() * length().pow(2) / time().pow(3), 1000.0), // Watt
    Unit::new("C", current() * time(), 1.0), // Coulomb
    Unit::new("V", mass() * length().pow(2) / (time().pow(3) * current()), 1000.0), // Volt
    Unit::new("L", length().pow(3), 1e-3), // Liter
    Unit::new("l", length().pow(3), 1e-3), // Liter (synonym)
    Unit::new("t", mass(), 1e6), // Metric ton
    Unit::new("Da", mass(), 1.660_539_068_92e-24), // Dalton
    Unit::new("eV", mass() * length().pow(2) / time().pow(2), 1.602_176_634e-16), // Electronvolt
  ];
  let mut table: UnitTable = units.into_iter().collect();
  table.extend_prefixes(Prefix::si_prefixes());
  table
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_units() {
    let table = table();
    assert_eq!(table.resolve("m").unwrap().dimension(), &length());
    assert_eq!(table.resolve("mol").unwrap().dimension(), &amount());
    assert_eq!(table.resolve("K").unwrap().dimension(), &temperature());
  }

  #[test]
  fn test_kilogram_is_prefixed_gram() {
    let table = table();
    let kg = table.resolve("kg").unwrap();
    assert_eq!(kg.dimension(), &mass());
    assert_eq!(kg.factor(), 1000.0);
  }

  #[test]
  fn test_newton_dimension() {
    let table = table();
    let newton = table.resolve("N").unwrap();
    let expected: Dimension = vec![("M", 1), ("L", 1), ("T", -2)].into_iter().collect();
    assert_eq!(newton.dimension(), &expected);
  }

  #[test]
  fn test_candela_is_not_centi_days() {
    let table = table();
    let cd = table.resolve("cd").unwrap();
    assert_eq!(cd.dimension(), &intensity());
    assert_eq!(cd.factor(), 1.0);
  }

  #[test]
  fn test_prefix_on_derived_unit() {
    let table = table();
    let hecto_liter = table.resolve("hL").unwrap();
    assert_eq!(hecto_liter.dimension(), &length().pow(3));
    assert_eq!(hecto_liter.factor(), 0.1);
    // "h" alone is still the hour, not a dangling prefix.
    assert_eq!(table.resolve("h").unwrap().factor(), 3600.0);
  }
}
