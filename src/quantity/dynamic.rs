
//! Quantities whose dimension is carried and checked at runtime.

use super::Dimensioned;
use crate::units::dimension::{Dimension, DimensionError};
use crate::units::rational::Rational;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul, Neg};

/// A numeric magnitude together with a runtime dimension.
///
/// A `DynQuantity` is either bound to a dimension or unbound. Unbound
/// quantities come from [`DynQuantity::unbound`] and acquire a
/// dimension on their first [`assign`](DynQuantity::assign); once
/// bound, the dimension never changes, and every operation which
/// combines two quantities checks that their dimensions line up.
///
/// The `try_*` methods report a failed check as a
/// [`DimensionError`]. The operator impls panic instead and are meant
/// for quantities already known to be bound, such as the output of
/// the unit parser.
#[derive(Debug, Clone, PartialEq)]
pub struct DynQuantity {
  magnitude: f64,
  dimension: Option<Dimension>,
}

impl DynQuantity {
  /// A quantity bound to the given dimension.
  pub fn new(magnitude: f64, dimension: Dimension) -> DynQuantity {
    DynQuantity { magnitude, dimension: Some(dimension) }
  }

  /// A dimensionless quantity.
  pub fn scalar(magnitude: f64) -> DynQuantity {
    DynQuantity::new(magnitude, Dimension::scalar())
  }

  /// A quantity with no dimension yet. The magnitude is zero until
  /// the first [`assign`](DynQuantity::assign).
  pub fn unbound() -> DynQuantity {
    DynQuantity { magnitude: 0.0, dimension: None }
  }

  pub fn magnitude(&self) -> f64 {
    self.magnitude
  }

  /// The dimension this quantity is bound to, if any.
  pub fn dimension(&self) -> Option<&Dimension> {
    self.dimension.as_ref()
  }

  pub fn is_bound(&self) -> bool {
    self.dimension.is_some()
  }

  fn require_dimension(&self) -> Result<&Dimension, DimensionError> {
    self.dimension.as_ref().ok_or(DimensionError::Unbound)
  }

  fn require_same_dimension(&self, other: &DynQuantity) -> Result<(), DimensionError> {
    let expected = self.require_dimension()?;
    let found = other.require_dimension()?;
    if expected == found {
      Ok(())
    } else {
      Err(DimensionError::Mismatch { expected: expected.clone(), found: found.clone() })
    }
  }

  /// Assigns `source` to `self`. An unbound `self` adopts the
  /// dimension of `source`; a bound `self` requires `source` to have
  /// the very same dimension. The source must itself be bound,
  /// whether or not the target is.
  pub fn assign(&mut self, source: &DynQuantity) -> Result<(), DimensionError> {
    match (&self.dimension, &source.dimension) {
      (Some(expected), Some(found)) if expected != found => {
        return Err(DimensionError::Mismatch { expected: expected.clone(), found: found.clone() });
      }
      (_, None) => {
        return Err(DimensionError::Unbound);
      }
      _ => {}
    }
    self.magnitude = source.magnitude;
    if self.dimension.is_none() {
      self.dimension = source.dimension.clone();
    }
    Ok(())
  }

  /// Adds two quantities of equal dimension.
  pub fn try_add(&self, other: &DynQuantity) -> Result<DynQuantity, DimensionError> {
    self.require_same_dimension(other)?;
    Ok(DynQuantity {
      magnitude: self.magnitude + other.magnitude,
      dimension: self.dimension.clone(),
    })
  }

  /// Subtracts two quantities of equal dimension.
  pub fn try_sub(&self, other: &DynQuantity) -> Result<DynQuantity, DimensionError> {
    self.require_same_dimension(other)?;
    Ok(DynQuantity {
      magnitude: self.magnitude - other.magnitude,
      dimension: self.dimension.clone(),
    })
  }

  /// Adds a bare number to a dimensionless quantity.
  pub fn try_add_scalar(&self, value: f64) -> Result<DynQuantity, DimensionError> {
    let dimension = self.require_dimension()?;
    if dimension.is_scalar() {
      Ok(DynQuantity::scalar(self.magnitude + value))
    } else {
      Err(DimensionError::ExpectedScalar { found: dimension.clone() })
    }
  }

  /// Subtracts a bare number from a dimensionless quantity.
  pub fn try_sub_scalar(&self, value: f64) -> Result<DynQuantity, DimensionError> {
    let dimension = self.require_dimension()?;
    if dimension.is_scalar() {
      Ok(DynQuantity::scalar(self.magnitude - value))
    } else {
      Err(DimensionError::ExpectedScalar { found: dimension.clone() })
    }
  }

  /// Multiplies two bound quantities. The dimensions multiply as
  /// well, so metres times metres is square metres.
  pub fn try_mul(&self, other: &DynQuantity) -> Result<DynQuantity, DimensionError> {
    let lhs = self.require_dimension()?;
    let rhs = other.require_dimension()?;
    Ok(DynQuantity {
      magnitude: self.magnitude * other.magnitude,
      dimension: Some(lhs.clone() * rhs.clone()),
    })
  }

  /// Divides two bound quantities. The dimensions divide as well.
  pub fn try_div(&self, other: &DynQuantity) -> Result<DynQuantity, DimensionError> {
    let lhs = self.require_dimension()?;
    let rhs = other.require_dimension()?;
    Ok(DynQuantity {
      magnitude: self.magnitude / other.magnitude,
      dimension: Some(lhs.clone() / rhs.clone()),
    })
  }

  /// Raises the dimension of this quantity to a rational power. The
  /// magnitude is left untouched: units are linear scale factors over
  /// base dimensions, so squaring a kilometre gives a quantity with
  /// magnitude 1000 and dimension length squared.
  pub fn pow_dimension(&self, exponent: Rational) -> Result<DynQuantity, DimensionError> {
    let dimension = self.require_dimension()?;
    Ok(DynQuantity {
      magnitude: self.magnitude,
      dimension: Some(dimension.pow_rational(exponent)?),
    })
  }

  /// Compares two quantities of equal dimension for numeric equality.
  pub fn try_eq(&self, other: &DynQuantity) -> Result<bool, DimensionError> {
    self.require_same_dimension(other)?;
    Ok(self.magnitude == other.magnitude)
  }

  /// Orders two quantities of equal dimension, using the IEEE 754
  /// total order on the magnitudes.
  pub fn try_cmp(&self, other: &DynQuantity) -> Result<Ordering, DimensionError> {
    self.require_same_dimension(other)?;
    Ok(self.magnitude.total_cmp(&other.magnitude))
  }
}

impl Dimensioned for DynQuantity {
  fn magnitude(&self) -> f64 {
    self.magnitude
  }

  fn dimension(&self) -> Option<Dimension> {
    self.dimension.clone()
  }
}

impl Mul for DynQuantity {
  type Output = DynQuantity;

  /// Panics if either operand is unbound. Use
  /// [`DynQuantity::try_mul`] to get the error as a value.
  fn mul(self, rhs: DynQuantity) -> DynQuantity {
    self.try_mul(&rhs).unwrap_or_else(|err| panic!("{err}"))
  }
}

impl Div for DynQuantity {
  type Output = DynQuantity;

  /// Panics if either operand is unbound. Use
  /// [`DynQuantity::try_div`] to get the error as a value.
  fn div(self, rhs: DynQuantity) -> DynQuantity {
    self.try_div(&rhs).unwrap_or_else(|err| panic!("{err}"))
  }
}

impl Mul<f64> for DynQuantity {
  type Output = DynQuantity;

  fn mul(self, rhs: f64) -> DynQuantity {
    DynQuantity { magnitude: self.magnitude * rhs, dimension: self.dimension }
  }
}

impl Div<f64> for DynQuantity {
  type Output = DynQuantity;

  fn div(self, rhs: f64) -> DynQuantity {
    DynQuantity { magnitude: self.magnitude / rhs, dimension: self.dimension }
  }
}

impl Mul<DynQuantity> for f64 {
  type Output = DynQuantity;

  fn mul(self, rhs: DynQuantity) -> DynQuantity {
    rhs * self
  }
}

impl Div<DynQuantity> for f64 {
  type Output = DynQuantity;

  /// Dividing a bare number by a quantity inverts the dimension.
  /// Panics if the divisor is unbound.
  fn div(self, rhs: DynQuantity) -> DynQuantity {
    let dimension = rhs.require_dimension().unwrap_or_else(|err| panic!("{err}")).recip();
    DynQuantity {
      magnitude: self / rhs.magnitude,
      dimension: Some(dimension),
    }
  }
}

impl Neg for DynQuantity {
  type Output = DynQuantity;

  fn neg(self) -> DynQuantity {
    DynQuantity { magnitude: - self.magnitude, dimension: self.dimension }
  }
}

impl PartialOrd for DynQuantity {
  /// Quantities of differing dimensions are unordered, as are
  /// quantities involving NaN magnitudes.
  fn partial_cmp(&self, other: &DynQuantity) -> Option<Ordering> {
    if self.dimension == other.dimension {
      self.magnitude.partial_cmp(&other.magnitude)
    } else {
      None
    }
  }
}

impl AbsDiffEq for DynQuantity {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    f64::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &DynQuantity, epsilon: f64) -> bool {
    self.dimension == other.dimension && self.magnitude.abs_diff_eq(&other.magnitude, epsilon)
  }
}

impl RelativeEq for DynQuantity {
  fn default_max_relative() -> f64 {
    f64::default_max_relative()
  }

  fn relative_eq(&self, other: &DynQuantity, epsilon: f64, max_relative: f64) -> bool {
    self.dimension == other.dimension &&
      self.magnitude.relative_eq(&other.magnitude, epsilon, max_relative)
  }
}

impl UlpsEq for DynQuantity {
  fn default_max_ulps() -> u32 {
    f64::default_max_ulps()
  }

  fn ulps_eq(&self, other: &DynQuantity, epsilon: f64, max_ulps: u32) -> bool {
    self.dimension == other.dimension &&
      self.magnitude.ulps_eq(&other.magnitude, epsilon, max_ulps)
  }
}

impl Display for DynQuantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match &self.dimension {
      Some(dimension) if !dimension.is_scalar() => {
        write!(f, "{} {}", self.magnitude, dimension)
      }
      _ => {
        write!(f, "{}", self.magnitude)
      }
    }
  }
}
