
//! Quantity values: a numeric magnitude paired with a dimension.
//!
//! Two concrete types share one arithmetic contract. [`DynQuantity`]
//! carries its dimension at runtime and reports mismatches as typed
//! errors; [`Quantity`] fixes its dimension at compile time through a
//! [`DimensionTag`], so mismatched sums simply do not type-check. The
//! [`Dimensioned`] trait covers the part of the contract the two
//! share. The arithmetic operators themselves live on each type,
//! since the dynamic type reports a dimension mismatch as an error
//! value while the static type rules it out before the program runs.

pub mod dynamic;
pub mod typed;

pub use dynamic::DynQuantity;
pub use typed::{DimensionTag, Quantity, Scalar};

use crate::units::dimension::{Dimension, DimensionError};

/// A value with a magnitude and a dimension.
pub trait Dimensioned {
  /// The numeric magnitude, measured in base units.
  fn magnitude(&self) -> f64;

  /// The dimension of this value, or `None` for a dynamically checked
  /// quantity which has not been bound to one yet. Statically tagged
  /// quantities always have a dimension.
  fn dimension(&self) -> Option<Dimension>;

  /// True if `self` and `other` have equal dimensions. This never
  /// fails: an unbound quantity is compatible with nothing, itself
  /// included.
  fn compatible_with<R: Dimensioned>(&self, other: &R) -> bool {
    match (self.dimension(), other.dimension()) {
      (Some(a), Some(b)) => a == b,
      _ => false,
    }
  }

  /// The magnitude of `self` measured in the given unit, which must
  /// have the same dimension. The unit is itself any quantity value,
  /// such as a parsed unit constant.
  fn value_in<U: Dimensioned>(&self, unit: &U) -> Result<f64, DimensionError> {
    let dimension = self.dimension().ok_or(DimensionError::Unbound)?;
    let unit_dimension = unit.dimension().ok_or(DimensionError::Unbound)?;
    if dimension == unit_dimension {
      Ok(self.magnitude() / unit.magnitude())
    } else {
      Err(DimensionError::Mismatch { expected: unit_dimension, found: dimension })
    }
  }

  /// Casts to a bare number. Fails unless the value is dimensionless.
  fn to_scalar(&self) -> Result<f64, DimensionError> {
    let dimension = self.dimension().ok_or(DimensionError::Unbound)?;
    if dimension.is_scalar() {
      Ok(self.magnitude())
    } else {
      Err(DimensionError::ExpectedScalar { found: dimension })
    }
  }
}
