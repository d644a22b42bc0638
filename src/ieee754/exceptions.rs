/*
    Exception flags
*/

use super::*;

// Builder and getter for one flag
macro_rules! flag {
    ($field:ident, $with:ident, $doc:literal) => {
        #[doc = concat!("Returns true if ", $doc, " was raised.")]
        pub fn $field(&self) -> bool {
            self.$field
        }

        #[doc = concat!("Raises (or lowers) the ", $doc, " flag.")]
        pub fn $with(mut self, raised: bool) -> Self {
            self.$field = raised;
            self
        }
    };
}

impl Exceptions {
    flag!(invalid, with_invalid, "an invalid operation");
    flag!(div_by_zero, with_div_by_zero, "a division by zero");
    flag!(overflow, with_overflow, "an overflow");
    flag!(underflow, with_underflow, "an underflow");
    flag!(inexact, with_inexact, "an inexact result");
    flag!(carry, with_carry, "a rounding increment");

    /// Lowers every flag.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if no flag is raised.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
