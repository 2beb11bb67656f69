use crate::{MAX_FIELD_NUMBER, RESERVED_FIELD_NUMBER_MAX, RESERVED_FIELD_NUMBER_MIN, prelude::*};
use derive_more::Display;

///
/// FieldNumber
///
/// A validated proto3 field number. In range, outside the reserved
/// block, immutable once constructed.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct FieldNumber(u32);

impl FieldNumber {
    #[allow(clippy::manual_range_contains)]
    pub const fn new(number: u32) -> Result<Self, SchemaError> {
        if number < 1 || number > MAX_FIELD_NUMBER {
            return Err(SchemaError::FieldNumberOutOfRange(number));
        }
        if number >= RESERVED_FIELD_NUMBER_MIN && number <= RESERVED_FIELD_NUMBER_MAX {
            return Err(SchemaError::FieldNumberReserved(number));
        }

        Ok(Self(number))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}
