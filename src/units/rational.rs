
use std::fmt::{self, Formatter, Display};

/// An exponent in a unit expression, written either as a plain
/// integer or as a ratio of two integers such as `2/3`.
///
/// The denominator is always positive; the sign of the value lives in
/// the numerator. The fraction is deliberately not reduced to lowest
/// terms, so `2/4` keeps both components exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
  numer: i64,
  denom: i64,
}

impl Rational {
  /// Constructs a rational exponent. A negative denominator is
  /// normalized by moving the sign into the numerator.
  ///
  /// Panics if `denom` is zero or if the normalization overflows;
  /// [`Rational::checked_new`] reports both cases as `None` instead.
  pub fn new(numer: i64, denom: i64) -> Self {
    match Self::checked_new(numer, denom) {
      Some(rational) => rational,
      None => panic!("Rational exponent {numer}/{denom} cannot be normalized"),
    }
  }

  /// Fallible form of [`Rational::new`]: `None` when the denominator
  /// is zero, or when moving its sign into the numerator would
  /// overflow. Negating `i64::MIN` is the only such overflow.
  pub fn checked_new(numer: i64, denom: i64) -> Option<Self> {
    if denom == 0 {
      None
    } else if denom < 0 {
      Some(Self { numer: numer.checked_neg()?, denom: denom.checked_neg()? })
    } else {
      Some(Self { numer, denom })
    }
  }

  pub fn numer(&self) -> i64 {
    self.numer
  }

  pub fn denom(&self) -> i64 {
    self.denom
  }

  /// True if the denominator is literally one. Note that `2/2` is not
  /// integral by this definition, since the fraction is never reduced.
  pub fn is_integral(&self) -> bool {
    self.denom == 1
  }
}

impl From<i64> for Rational {
  fn from(numer: i64) -> Self {
    Self { numer, denom: 1 }
  }
}

impl Display for Rational {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.denom == 1 {
      write!(f, "{}", self.numer)
    } else {
      write!(f, "{}/{}", self.numer, self.denom)
    }
  }
}
