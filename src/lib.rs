/*
    Top-level
*/

mod decimal;
mod error;
mod number;
mod round;

pub mod diagnostics;
pub mod ieee754;
pub use decimal::{Decimal, DecimalValue};
pub use error::*;
pub use number::*;
pub use round::*;
