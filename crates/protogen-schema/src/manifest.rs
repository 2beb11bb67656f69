use crate::{ANY_TYPE_NAME, prelude::*};
use serde::Deserialize;
use std::collections::BTreeSet;

///
/// Manifest
///
/// A plain-data description of one document. Loading a manifest replays
/// it through the schema builders, so every construction rule applies
/// to manifest input exactly as it does to the programmatic API.
///

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub package: Option<String>,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub imports: Vec<ImportEntry>,

    #[serde(default)]
    pub messages: Vec<MessageEntry>,

    #[serde(default)]
    pub enums: Vec<EnumEntry>,

    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

impl Manifest {
    /// Build the validated document this manifest describes.
    pub fn into_spec(self) -> Result<ProtoSpec, SchemaError> {
        let enum_names: BTreeSet<String> = self.enums.iter().map(|e| e.name.clone()).collect();

        let mut builder = ProtoSpec::builder();
        if let Some(package) = &self.package {
            builder = builder.package(package)?;
        }
        if let Some(comment) = self.comment {
            builder = builder.comment(comment);
        }
        for entry in self.imports {
            let import = if entry.public {
                Import::public(entry.path)
            } else {
                Import::new(entry.path)
            };
            builder = builder.import(import);
        }
        for entry in self.messages {
            builder = builder.message(build_message(entry, &enum_names)?)?;
        }
        for entry in self.enums {
            builder = builder.enumeration(build_enum(entry)?)?;
        }
        for entry in self.services {
            builder = builder.service(build_service(entry)?)?;
        }

        Ok(builder.build())
    }
}

///
/// ImportEntry
///

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportEntry {
    pub path: String,

    #[serde(default)]
    pub public: bool,
}

///
/// MessageEntry
///

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageEntry {
    pub name: String,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldEntry>,

    #[serde(default)]
    pub nested: Vec<MessageEntry>,
}

///
/// FieldEntry
///

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub number: Option<u32>,

    #[serde(default)]
    pub repeated: bool,

    #[serde(default)]
    pub comment: Option<String>,
}

///
/// EnumEntry
///

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumEntry {
    pub name: String,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub values: Vec<ValueEntry>,
}

///
/// ValueEntry
///

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueEntry {
    pub name: String,

    #[serde(default)]
    pub value: Option<i32>,

    #[serde(default)]
    pub comment: Option<String>,
}

///
/// ServiceEntry
///

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntry {
    pub name: String,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub rpcs: Vec<RpcEntry>,
}

///
/// RpcEntry
///

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RpcEntry {
    pub name: String,
    pub input: String,
    pub output: String,

    #[serde(default)]
    pub stream_input: bool,

    #[serde(default)]
    pub stream_output: bool,

    #[serde(default)]
    pub comment: Option<String>,
}

fn build_message(entry: MessageEntry, enum_names: &BTreeSet<String>) -> Result<Message, SchemaError> {
    let mut builder = Message::builder(&entry.name)?;
    if let Some(comment) = entry.comment {
        builder = builder.comment(comment);
    }

    for field in entry.fields {
        let ty = resolve_type(&field.ty, enum_names)?;
        let number = field.number.unwrap_or_else(|| builder.next_field_number());
        let mut built = MessageField::new(ty, &field.name, number)?;
        if field.repeated {
            built = built.repeated();
        }
        if let Some(comment) = field.comment {
            built = built.with_comment(comment);
        }
        builder = builder.field_with(built)?;
    }

    for nested in entry.nested {
        builder = builder.nested(build_message(nested, enum_names)?)?;
    }

    Ok(builder.build())
}

fn build_enum(entry: EnumEntry) -> Result<Enum, SchemaError> {
    let mut builder = Enum::builder(&entry.name)?;
    if let Some(comment) = entry.comment {
        builder = builder.comment(comment);
    }

    for value in entry.values {
        let numeric = value.value.unwrap_or_else(|| builder.next_value());
        let mut built = EnumValue::new(&value.name, numeric)?;
        if let Some(comment) = value.comment {
            built = built.with_comment(comment);
        }
        builder = builder.value_with(built)?;
    }

    Ok(builder.build())
}

fn build_service(entry: ServiceEntry) -> Result<Service, SchemaError> {
    let mut builder = Service::builder(&entry.name)?;
    if let Some(comment) = entry.comment {
        builder = builder.comment(comment);
    }

    for rpc in entry.rpcs {
        let mut built = Rpc::with_names(&rpc.name, &rpc.input, &rpc.output)?;
        if rpc.stream_input {
            built = built.stream_input();
        }
        if rpc.stream_output {
            built = built.stream_output();
        }
        if let Some(comment) = rpc.comment {
            built = built.with_comment(comment);
        }
        builder = builder.rpc(built)?;
    }

    Ok(builder.build())
}

/// Resolve a manifest type name: scalar names first, then the
/// well-known Any, then the manifest's own enums, else a message
/// reference.
fn resolve_type(name: &str, enum_names: &BTreeSet<String>) -> Result<FieldType, SchemaError> {
    if let Some(scalar) = ScalarType::from_proto_name(name) {
        return Ok(FieldType::Scalar(scalar));
    }
    if name == ANY_TYPE_NAME {
        return Ok(FieldType::Any);
    }
    if enum_names.contains(name) {
        return Ok(FieldType::Enum(Identifier::new(name)?));
    }

    Ok(FieldType::Message(FullIdentifier::new(name)?))
}
