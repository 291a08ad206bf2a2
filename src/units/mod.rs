
//! Units of measurement: dimension vectors, named units and prefixes,
//! and the symbol table the parser resolves against.

pub mod dimension;
pub mod prefix;
pub mod rational;
pub mod si;
pub mod table;
pub mod unit;

pub use dimension::{Dimension, DimensionError};
pub use prefix::Prefix;
pub use rational::Rational;
pub use table::{UnitTable, UnknownUnitError};
pub use unit::Unit;
