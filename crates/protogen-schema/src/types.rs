use crate::{ANY_TYPE_NAME, prelude::*};
use derive_more::Display;
use std::fmt;

///
/// ScalarType
///
/// The fixed set of proto3 scalar value types.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    #[display("double")]
    Double,
    #[display("float")]
    Float,
    #[display("int32")]
    Int32,
    #[display("int64")]
    Int64,
    #[display("uint32")]
    UInt32,
    #[display("uint64")]
    UInt64,
    #[display("sint32")]
    SInt32,
    #[display("sint64")]
    SInt64,
    #[display("fixed32")]
    Fixed32,
    #[display("fixed64")]
    Fixed64,
    #[display("sfixed32")]
    SFixed32,
    #[display("sfixed64")]
    SFixed64,
    #[display("bool")]
    Bool,
    #[display("string")]
    String,
    #[display("bytes")]
    Bytes,
}

/// All scalar kinds, in wire-spec order.
pub const ALL_SCALAR_TYPES: [ScalarType; 15] = [
    ScalarType::Double,
    ScalarType::Float,
    ScalarType::Int32,
    ScalarType::Int64,
    ScalarType::UInt32,
    ScalarType::UInt64,
    ScalarType::SInt32,
    ScalarType::SInt64,
    ScalarType::Fixed32,
    ScalarType::Fixed64,
    ScalarType::SFixed32,
    ScalarType::SFixed64,
    ScalarType::Bool,
    ScalarType::String,
    ScalarType::Bytes,
];

impl ScalarType {
    /// Resolve a proto type name to a scalar kind, if it names one.
    #[must_use]
    pub fn from_proto_name(name: &str) -> Option<Self> {
        let ty = match name {
            "double" => Self::Double,
            "float" => Self::Float,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "uint32" => Self::UInt32,
            "uint64" => Self::UInt64,
            "sint32" => Self::SInt32,
            "sint64" => Self::SInt64,
            "fixed32" => Self::Fixed32,
            "fixed64" => Self::Fixed64,
            "sfixed32" => Self::SFixed32,
            "sfixed64" => Self::SFixed64,
            "bool" => Self::Bool,
            "string" => Self::String,
            "bytes" => Self::Bytes,
            _ => return None,
        };

        Some(ty)
    }
}

///
/// FieldType
///
/// Closed set of types a message field can carry. Message and enum
/// references hold the referenced aggregate's name, not the aggregate.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum FieldType {
    Scalar(ScalarType),
    Message(FullIdentifier),
    Enum(Identifier),
    Any,
}

impl FieldType {
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => scalar.fmt(f),
            Self::Message(name) => name.fmt(f),
            Self::Enum(name) => name.fmt(f),
            Self::Any => f.write_str(ANY_TYPE_NAME),
        }
    }
}

impl From<ScalarType> for FieldType {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&Message> for FieldType {
    fn from(message: &Message) -> Self {
        Self::Message(message.qualified_name())
    }
}

impl From<&Enum> for FieldType {
    fn from(enumeration: &Enum) -> Self {
        Self::Enum(enumeration.name().clone())
    }
}
