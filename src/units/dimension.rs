
use super::rational::Rational;

use itertools::Itertools;
use num::One;
use num::pow::Pow;
use thiserror::Error;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A dimension is a formal product and quotient of named base
/// dimensions, stored as a sparse map from base-dimension symbol to
/// its (nonzero) integer exponent.
///
/// The map never stores a zero exponent: any operation which would
/// produce one removes the entry instead, so `L / L` and the empty
/// dimension are the same value. Equality compares the symbol sets
/// and their exponents and does not depend on construction order. The
/// empty dimension is dimensionless and acts as the identity for
/// multiplication and division.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
  dims: BTreeMap<String, i64>,
}

/// Error arising from an operation which requires specific dimensions
/// on its operands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DimensionError {
  #[error("Dimension mismatch: expected {}, found {}", .expected.render(true), .found.render(true))]
  Mismatch { expected: Dimension, found: Dimension },
  #[error("Non-integral dimension: {} cannot be raised to the 1/{root} power", .dimension.render(true))]
  NonIntegral { dimension: Dimension, root: i64 },
  #[error("Exponent overflow: {} cannot be raised to the {power} power", .dimension.render(true))]
  ExponentOverflow { dimension: Dimension, power: i64 },
  #[error("Expected scalar value, found {}", .found.render(true))]
  ExpectedScalar { found: Dimension },
  #[error("Quantity has not been bound to a dimension yet")]
  Unbound,
}

impl Dimension {
  /// The dimensionless dimension, containing no base symbols.
  pub fn scalar() -> Self {
    Self::default()
  }

  /// A dimension consisting of a single base symbol raised to the
  /// first power.
  pub fn base(symbol: impl Into<String>) -> Self {
    let mut dims = BTreeMap::new();
    dims.insert(symbol.into(), 1);
    Self { dims }
  }

  /// The exponent of the given base symbol, or zero if the symbol
  /// does not appear in this dimension.
  pub fn get(&self, symbol: &str) -> i64 {
    self.dims.get(symbol).copied().unwrap_or(0)
  }

  pub fn is_scalar(&self) -> bool {
    self.dims.is_empty()
  }

  /// Iterates over the base symbols and their exponents, in
  /// lexicographic symbol order. Every yielded exponent is nonzero.
  pub fn components(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
    self.dims.iter().map(|(symbol, exponent)| (symbol.as_str(), *exponent))
  }

  /// Multiplies every exponent by the given power. A power of zero
  /// produces the scalar dimension.
  ///
  /// Panics if a scaled exponent overflows `i64`;
  /// [`Dimension::checked_pow`] reports that as `None` instead.
  pub fn pow(&self, power: i64) -> Self {
    match self.checked_pow(power) {
      Some(dimension) => dimension,
      None => panic!("Exponent overflow: {} cannot be raised to the {power} power", self.render(true)),
    }
  }

  /// Fallible form of [`Dimension::pow`].
  pub fn checked_pow(&self, power: i64) -> Option<Self> {
    if power == 0 {
      return Some(Self::scalar());
    }
    let mut dims = BTreeMap::new();
    for (symbol, exponent) in &self.dims {
      dims.insert(symbol.clone(), exponent.checked_mul(power)?);
    }
    Some(Self { dims })
  }

  /// The reciprocal dimension, with every exponent negated. Panics if
  /// an exponent is `i64::MIN`, which has no negation.
  pub fn recip(&self) -> Self {
    self.pow(-1)
  }

  /// Takes the `n`th root by dividing every exponent by `n`. Every
  /// exponent must be exactly divisible by `n`, and `n` must be
  /// positive; otherwise the dimension has no exact root and an error
  /// is produced.
  pub fn root(&self, n: i64) -> Result<Self, DimensionError> {
    if n <= 0 || self.dims.values().any(|exponent| exponent % n != 0) {
      return Err(DimensionError::NonIntegral { dimension: self.clone(), root: n });
    }
    let dims = self.dims.iter()
      .map(|(symbol, exponent)| (symbol.clone(), exponent / n))
      .collect();
    Ok(Self { dims })
  }

  /// Raises the dimension to a rational power: first the numerator
  /// via [`Dimension::checked_pow`], then the denominator via
  /// [`Dimension::root`]. An overflowing exponent is reported as
  /// [`DimensionError::ExponentOverflow`] rather than panicking.
  pub fn pow_rational(&self, power: Rational) -> Result<Self, DimensionError> {
    let raised = self.checked_pow(power.numer()).ok_or_else(|| {
      DimensionError::ExponentOverflow { dimension: self.clone(), power: power.numer() }
    })?;
    raised.root(power.denom())
  }

  /// Renders the dimension as space-separated `symbol^exponent`
  /// pairs in lexicographic symbol order, omitting `^1`. The scalar
  /// dimension renders as the empty string, or as `"scalar"` when
  /// `verbose` is set.
  pub fn render(&self, verbose: bool) -> String {
    if self.dims.is_empty() {
      return if verbose { String::from("scalar") } else { String::new() };
    }
    self.dims.iter()
      .map(|(symbol, exponent)| {
        if *exponent == 1 {
          symbol.clone()
        } else {
          format!("{symbol}^{exponent}")
        }
      })
      .join(" ")
  }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Dimension {
  /// Collects base symbols and exponents into a dimension, summing
  /// exponents of repeated symbols and dropping any symbol whose
  /// total is zero.
  fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
    let mut dims: BTreeMap<String, i64> = BTreeMap::new();
    for (symbol, exponent) in iter {
      *dims.entry(symbol.into()).or_insert(0) += exponent;
    }
    dims.retain(|_, exponent| *exponent != 0);
    Self { dims }
  }
}

impl Mul for Dimension {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    let mut dims = self.dims;
    for (symbol, exponent) in rhs.dims {
      match dims.entry(symbol) {
        Entry::Occupied(mut entry) => {
          *entry.get_mut() += exponent;
          if *entry.get() == 0 {
            entry.remove();
          }
        }
        Entry::Vacant(entry) => {
          entry.insert(exponent);
        }
      }
    }
    Self { dims }
  }
}

impl Div for Dimension {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    self * rhs.recip()
  }
}

impl Pow<i64> for &Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension::pow(self, power)
  }
}

impl One for Dimension {
  fn one() -> Self {
    Self::scalar()
  }

  fn is_one(&self) -> bool {
    self.dims.is_empty()
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.render(false))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dim(components: &[(&str, i64)]) -> Dimension {
    components.iter().copied().collect()
  }

  #[test]
  fn test_base() {
    let length = Dimension::base("L");
    assert_eq!(length.get("L"), 1);
    assert_eq!(length.get("M"), 0);
    assert!(!length.is_scalar());
  }

  #[test]
  fn test_scalar() {
    let scalar = Dimension::scalar();
    assert!(scalar.is_scalar());
    assert_eq!(scalar.get("L"), 0);
    assert_eq!(scalar, Dimension::one());
    assert!(Dimension::scalar().is_one());
  }

  #[test]
  fn test_equality_ignores_construction_order() {
    let a = dim(&[("L", 1), ("M", -3)]);
    let b = dim(&[("M", -3), ("L", 1)]);
    assert_eq!(a, b);
  }

  #[test]
  fn test_from_iter_merges_and_prunes() {
    let d = dim(&[("L", 2), ("L", -2), ("T", 1), ("T", 2)]);
    assert_eq!(d.get("L"), 0);
    assert_eq!(d.get("T"), 3);
    assert_eq!(d, dim(&[("T", 3)]));
  }

  #[test]
  fn test_mul() {
    let a = dim(&[("L", 1), ("T", -1)]);
    let b = dim(&[("L", 2), ("M", 1)]);
    assert_eq!(a * b, dim(&[("L", 3), ("M", 1), ("T", -1)]));
  }

  #[test]
  fn test_mul_commutes() {
    let a = dim(&[("L", 1), ("T", -2)]);
    let b = dim(&[("M", 2), ("T", 1)]);
    assert_eq!(a.clone() * b.clone(), b * a);
  }

  #[test]
  fn test_mul_cancels_to_scalar() {
    let a = dim(&[("L", 1), ("T", -2)]);
    let b = dim(&[("L", -1), ("T", 2)]);
    assert!((a * b).is_scalar());
  }

  #[test]
  fn test_div_undoes_mul() {
    let a = dim(&[("L", 2), ("M", -1)]);
    let b = dim(&[("M", 3), ("T", 1)]);
    assert_eq!((a.clone() * b.clone()) / b, a);
  }

  #[test]
  fn test_div() {
    let a = dim(&[("L", 1)]);
    let b = dim(&[("T", 1)]);
    assert_eq!(a / b, dim(&[("L", 1), ("T", -1)]));
    let c = dim(&[("L", 1)]);
    assert!((c.clone() / c).is_scalar());
  }

  #[test]
  fn test_pow() {
    let d = dim(&[("L", 1), ("T", -2)]);
    assert_eq!(d.pow(3), dim(&[("L", 3), ("T", -6)]));
    assert_eq!(d.pow(-1), dim(&[("L", -1), ("T", 2)]));
    assert!(d.pow(0).is_scalar());
  }

  #[test]
  fn test_pow_composes() {
    let d = dim(&[("L", 1), ("T", -2)]);
    assert_eq!(d.pow(3).pow(2), d.pow(6));
    assert_eq!(d.pow(-2).pow(2), d.pow(-4));
  }

  #[test]
  fn test_checked_pow() {
    let d = dim(&[("L", 2)]);
    assert_eq!(d.checked_pow(3), Some(dim(&[("L", 6)])));
    assert_eq!(d.checked_pow(0), Some(Dimension::scalar()));
    // 2 * 2^62 lands one past i64::MAX.
    assert_eq!(d.checked_pow(4_611_686_018_427_387_904), None);
    assert_eq!(dim(&[("L", 1)]).checked_pow(i64::MIN), Some(dim(&[("L", i64::MIN)])));
  }

  #[test]
  #[should_panic]
  fn test_pow_overflow_panics() {
    dim(&[("L", 2)]).pow(4_611_686_018_427_387_904);
  }

  #[test]
  fn test_recip() {
    let d = dim(&[("L", 2), ("M", -1)]);
    assert_eq!(d.recip(), dim(&[("L", -2), ("M", 1)]));
    assert!((d.clone() * d.recip()).is_scalar());
  }

  #[test]
  fn test_root() {
    let d = dim(&[("L", 4), ("T", -2)]);
    assert_eq!(d.root(2), Ok(dim(&[("L", 2), ("T", -1)])));
    assert_eq!(d.root(1), Ok(d.clone()));
    assert!(Dimension::scalar().root(5).is_ok());
  }

  #[test]
  fn test_root_not_divisible() {
    let d = dim(&[("L", 3)]);
    assert_eq!(
      d.root(2),
      Err(DimensionError::NonIntegral { dimension: d, root: 2 }),
    );
  }

  #[test]
  fn test_root_rejects_nonpositive() {
    let d = dim(&[("L", 2)]);
    assert!(d.root(0).is_err());
    assert!(d.root(-2).is_err());
  }

  #[test]
  fn test_pow_rational() {
    let d = dim(&[("L", 1)]);
    assert_eq!(d.pow_rational(Rational::new(4, 2)), Ok(dim(&[("L", 2)])));
    assert_eq!(d.pow_rational(Rational::new(2, 2)), Ok(d.clone()));
    assert!(d.pow_rational(Rational::new(-1, 2)).is_err());
  }

  #[test]
  fn test_pow_rational_overflow() {
    let d = dim(&[("L", 2)]);
    let err = d.pow_rational(Rational::from(4_611_686_018_427_387_904)).unwrap_err();
    assert_eq!(
      err,
      DimensionError::ExponentOverflow { dimension: d, power: 4_611_686_018_427_387_904 },
    );
  }

  #[test]
  fn test_pow_trait() {
    let d = dim(&[("L", 1), ("T", -1)]);
    assert_eq!(Pow::pow(&d, 2), dim(&[("L", 2), ("T", -2)]));
  }

  #[test]
  fn test_render() {
    assert_eq!(dim(&[("L", 1)]).render(false), "L");
    assert_eq!(dim(&[("L", 2)]).render(false), "L^2");
    assert_eq!(dim(&[("M", 1), ("L", -3)]).render(false), "L^-3 M");
    assert_eq!(dim(&[("T", -2), ("L", 1), ("M", 1)]).render(false), "L M T^-2");
  }

  #[test]
  fn test_render_scalar() {
    assert_eq!(Dimension::scalar().render(false), "");
    assert_eq!(Dimension::scalar().render(true), "scalar");
  }

  #[test]
  fn test_display() {
    assert_eq!(dim(&[("L", 1), ("T", -1)]).to_string(), "L T^-1");
    assert_eq!(Dimension::scalar().to_string(), "");
  }

  #[test]
  fn test_error_display() {
    let err = DimensionError::Mismatch {
      expected: dim(&[("L", 1)]),
      found: Dimension::scalar(),
    };
    assert_eq!(err.to_string(), "Dimension mismatch: expected L, found scalar");
    let err = DimensionError::NonIntegral { dimension: dim(&[("L", 3)]), root: 2 };
    assert_eq!(err.to_string(), "Non-integral dimension: L^3 cannot be raised to the 1/2 power");
    let err = DimensionError::ExponentOverflow { dimension: dim(&[("L", 2)]), power: 1 << 62 };
    assert_eq!(err.to_string(), "Exponent overflow: L^2 cannot be raised to the 4611686018427387904 power");
  }
}
