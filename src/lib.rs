
//! Dimensional quantity algebra and a parser for textual unit
//! expressions.
//!
//! The crate is built from three layers:
//!
//! - [`units`]: dimension vectors and their algebra, named units and
//!   prefixes, and the [`UnitTable`] that symbols resolve against.
//! - [`quantity`]: magnitudes paired with dimensions, checked either
//!   at runtime ([`DynQuantity`]) or at compile time ([`Quantity`]).
//! - [`parsing`]: the lexer and recursive-descent parser that turn
//!   strings like `"1 kg/(m.s^2)"` into quantities.
//!
//! ```
//! use metra::units::si;
//! use metra::parse_quantity;
//!
//! let table = si::table();
//! let distance = parse_quantity("2.5 km", &table).unwrap();
//! assert_eq!(distance.magnitude(), 2500.0);
//! ```

pub mod error;
pub mod parsing;
pub mod quantity;
pub mod units;

pub use error::Error;
pub use parsing::{ParseError, parse_quantity, parse_quantity_as, parse_quantity_typed};
pub use quantity::{DimensionTag, Dimensioned, DynQuantity, Quantity, Scalar};
pub use units::{Dimension, DimensionError, Prefix, Rational, Unit, UnitTable, UnknownUnitError};
