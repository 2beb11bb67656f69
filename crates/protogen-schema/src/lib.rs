pub mod error;
pub mod manifest;
pub mod node;
pub mod types;
pub mod visit;

/// Highest field number representable on the proto3 wire (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = 536_870_911;

/// First field number of the range reserved by the wire format.
pub const RESERVED_FIELD_NUMBER_MIN: u32 = 19_000;

/// Last field number of the range reserved by the wire format.
pub const RESERVED_FIELD_NUMBER_MAX: u32 = 19_999;

/// The only syntax dialect the renderer emits.
pub const SYNTAX: &str = "proto3";

/// Dotted type name of the well-known Any type.
pub const ANY_TYPE_NAME: &str = "google.protobuf.Any";

/// Import path required whenever the Any type appears in a document.
pub const ANY_TYPE_IMPORT: &str = "google/protobuf/any.proto";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::SchemaError,
        node::*,
        types::{FieldType, ScalarType},
        visit::{VisitableNode, Visitor},
    };
    pub use serde::Serialize;
}

pub use error::SchemaError;
