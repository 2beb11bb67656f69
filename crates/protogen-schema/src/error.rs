use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Every construction rule violation, raised at the point of insertion.
/// A builder that returns one of these has not mutated its state.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum SchemaError {
    #[error("duplicate enum value name '{name}' in enum '{owner}'")]
    DuplicateEnumValue { owner: String, name: String },

    #[error("duplicate field name '{name}' in message '{owner}'")]
    DuplicateField { owner: String, name: String },

    #[error("duplicate field number {number} in message '{owner}'")]
    DuplicateFieldNumber { owner: String, number: u32 },

    #[error("duplicate nested message name '{name}' in message '{owner}'")]
    DuplicateNestedMessage { owner: String, name: String },

    #[error("duplicate root element name '{name}' in document")]
    DuplicateRootElement { name: String },

    #[error("duplicate rpc name '{name}' in service '{owner}'")]
    DuplicateRpc { owner: String, name: String },

    #[error("field number {0} out of range (1..=536870911)")]
    FieldNumberOutOfRange(u32),

    #[error("field number {0} falls in the reserved range (19000..=19999)")]
    FieldNumberReserved(u32),

    #[error("first value of enum '{owner}' must be zero, got {value}")]
    FirstEnumValueNotZero { owner: String, value: i32 },

    #[error("malformed full identifier '{0}'")]
    MalformedFullIdentifier(String),

    #[error("malformed identifier '{0}'")]
    MalformedIdentifier(String),
}
