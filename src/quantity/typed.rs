
//! Quantities whose dimension is fixed at compile time.
//!
//! A [`Quantity`] stores only its magnitude. Its dimension lives in a
//! type parameter implementing [`DimensionTag`], so adding metres to
//! seconds is a type error rather than a runtime failure. Operations
//! whose output dimension depends on the inputs, such as
//! multiplication of two differently tagged quantities, step down to
//! [`DynQuantity`] since their result has no compile-time tag.

use super::Dimensioned;
use super::dynamic::DynQuantity;
use crate::units::dimension::{Dimension, DimensionError};
use crate::units::rational::Rational;

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A marker type naming one fixed dimension. Implementors are
/// ordinarily uninhabited enums, used only at the type level.
pub trait DimensionTag {
  /// The dimension shared by every quantity carrying this tag.
  fn dimension() -> Dimension;
}

/// The tag for dimensionless quantities.
#[derive(Debug, Clone, Copy)]
pub enum Scalar {}

impl DimensionTag for Scalar {
  fn dimension() -> Dimension {
    Dimension::scalar()
  }
}

/// A numeric magnitude whose dimension is the tag `D`.
pub struct Quantity<D: DimensionTag> {
  magnitude: f64,
  tag: PhantomData<D>,
}

impl<D: DimensionTag> Quantity<D> {
  pub fn new(magnitude: f64) -> Quantity<D> {
    Quantity { magnitude, tag: PhantomData }
  }

  pub fn magnitude(&self) -> f64 {
    self.magnitude
  }

  /// The dimension shared by every quantity of this type.
  pub fn dimension() -> Dimension {
    D::dimension()
  }

  /// Converts to the dynamically checked representation, materializing
  /// the tag's dimension as a runtime value.
  pub fn into_dynamic(self) -> DynQuantity {
    DynQuantity::new(self.magnitude, D::dimension())
  }

  /// Raises the dimension to a rational power, leaving the magnitude
  /// untouched. The result is dynamically checked, since the output
  /// dimension depends on the exponent and has no tag of its own.
  pub fn pow_dimension(self, exponent: Rational) -> Result<DynQuantity, DimensionError> {
    self.into_dynamic().pow_dimension(exponent)
  }
}

// The impls below are written out by hand rather than derived, since
// a derive would demand the same bound of `D`, and tags are never
// themselves cloned or compared.

impl<D: DimensionTag> Clone for Quantity<D> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<D: DimensionTag> Copy for Quantity<D> {}

impl<D: DimensionTag> Debug for Quantity<D> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_struct("Quantity")
      .field("magnitude", &self.magnitude)
      .field("dimension", &D::dimension())
      .finish()
  }
}

impl<D: DimensionTag> PartialEq for Quantity<D> {
  fn eq(&self, other: &Quantity<D>) -> bool {
    self.magnitude == other.magnitude
  }
}

impl<D: DimensionTag> PartialOrd for Quantity<D> {
  fn partial_cmp(&self, other: &Quantity<D>) -> Option<Ordering> {
    self.magnitude.partial_cmp(&other.magnitude)
  }
}

impl<D: DimensionTag> Dimensioned for Quantity<D> {
  fn magnitude(&self) -> f64 {
    self.magnitude
  }

  fn dimension(&self) -> Option<Dimension> {
    Some(D::dimension())
  }
}

impl<D: DimensionTag> Add for Quantity<D> {
  type Output = Quantity<D>;

  fn add(self, rhs: Quantity<D>) -> Quantity<D> {
    Quantity::new(self.magnitude + rhs.magnitude)
  }
}

impl<D: DimensionTag> Sub for Quantity<D> {
  type Output = Quantity<D>;

  fn sub(self, rhs: Quantity<D>) -> Quantity<D> {
    Quantity::new(self.magnitude - rhs.magnitude)
  }
}

impl<D: DimensionTag> Neg for Quantity<D> {
  type Output = Quantity<D>;

  fn neg(self) -> Quantity<D> {
    Quantity::new(- self.magnitude)
  }
}

impl<D: DimensionTag> Mul<f64> for Quantity<D> {
  type Output = Quantity<D>;

  fn mul(self, rhs: f64) -> Quantity<D> {
    Quantity::new(self.magnitude * rhs)
  }
}

impl<D: DimensionTag> Div<f64> for Quantity<D> {
  type Output = Quantity<D>;

  fn div(self, rhs: f64) -> Quantity<D> {
    Quantity::new(self.magnitude / rhs)
  }
}

impl<D: DimensionTag> Mul<Quantity<D>> for f64 {
  type Output = Quantity<D>;

  fn mul(self, rhs: Quantity<D>) -> Quantity<D> {
    rhs * self
  }
}

/// Multiplying two tagged quantities produces a [`DynQuantity`],
/// since the product dimension is not named by any tag. This covers
/// same-tag products too: metres times metres is square metres.
impl<D: DimensionTag, E: DimensionTag> Mul<Quantity<E>> for Quantity<D> {
  type Output = DynQuantity;

  fn mul(self, rhs: Quantity<E>) -> DynQuantity {
    DynQuantity::new(self.magnitude * rhs.magnitude, D::dimension() * E::dimension())
  }
}

/// Dividing two tagged quantities produces a [`DynQuantity`], for the
/// same reason multiplication does.
impl<D: DimensionTag, E: DimensionTag> Div<Quantity<E>> for Quantity<D> {
  type Output = DynQuantity;

  fn div(self, rhs: Quantity<E>) -> DynQuantity {
    DynQuantity::new(self.magnitude / rhs.magnitude, D::dimension() / E::dimension())
  }
}

// Dimensionless quantities interchange freely with bare numbers.

impl Add<f64> for Quantity<Scalar> {
  type Output = Quantity<Scalar>;

  fn add(self, rhs: f64) -> Quantity<Scalar> {
    Quantity::new(self.magnitude + rhs)
  }
}

impl Sub<f64> for Quantity<Scalar> {
  type Output = Quantity<Scalar>;

  fn sub(self, rhs: f64) -> Quantity<Scalar> {
    Quantity::new(self.magnitude - rhs)
  }
}

impl From<f64> for Quantity<Scalar> {
  fn from(magnitude: f64) -> Quantity<Scalar> {
    Quantity::new(magnitude)
  }
}

impl From<Quantity<Scalar>> for f64 {
  fn from(quantity: Quantity<Scalar>) -> f64 {
    quantity.magnitude
  }
}

impl<D: DimensionTag> TryFrom<DynQuantity> for Quantity<D> {
  type Error = DimensionError;

  /// Checks the runtime dimension against the tag's dimension. An
  /// unbound quantity converts to no tag at all, the [`Scalar`] tag
  /// included.
  fn try_from(quantity: DynQuantity) -> Result<Quantity<D>, DimensionError> {
    let expected = D::dimension();
    match quantity.dimension() {
      Some(found) if *found == expected => Ok(Quantity::new(quantity.magnitude())),
      Some(found) => Err(DimensionError::Mismatch { expected, found: found.clone() }),
      None => Err(DimensionError::Unbound),
    }
  }
}

impl<D: DimensionTag> Display for Quantity<D> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let dimension = D::dimension();
    if dimension.is_scalar() {
      write!(f, "{}", self.magnitude)
    } else {
      write!(f, "{} {}", self.magnitude, dimension)
    }
  }
}
