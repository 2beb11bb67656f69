use crate::{ANY_TYPE_IMPORT, SYNTAX, prelude::*};
use std::collections::BTreeSet;

///
/// ProtoSpec
///
/// One complete .proto document: the root aggregate owning every
/// message, enum, service, import, the optional package qualifier and
/// the document comment.
///

#[derive(Clone, Debug, Serialize)]
pub struct ProtoSpec {
    syntax: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    package: Option<FullIdentifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    imports: Vec<Import>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    messages: Vec<Message>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    enums: Vec<Enum>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    services: Vec<Service>,
}

impl ProtoSpec {
    #[must_use]
    pub fn builder() -> ProtoSpecBuilder {
        ProtoSpecBuilder::default()
    }

    #[must_use]
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    #[must_use]
    pub const fn package(&self) -> Option<&FullIdentifier> {
        self.package.as_ref()
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Imports in declaration order; a snapshot, not a live view.
    #[must_use]
    pub fn imports(&self) -> Vec<Import> {
        self.imports.clone()
    }

    /// Messages in addition order; a snapshot.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Enums in addition order; a snapshot.
    #[must_use]
    pub fn enums(&self) -> Vec<Enum> {
        self.enums.clone()
    }

    /// Services in addition order; a snapshot.
    #[must_use]
    pub fn services(&self) -> Vec<Service> {
        self.services.clone()
    }
}

impl VisitableNode for ProtoSpec {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for import in &self.imports {
            v.import(import);
        }
        for message in &self.messages {
            message.drive(v);
        }
        for enumeration in &self.enums {
            enumeration.drive(v);
        }
        for service in &self.services {
            service.drive(v);
        }
    }
}

///
/// ProtoSpecBuilder
///
/// Messages, enums and services share one root namespace; a name used
/// by any category is taken for all of them.
///

#[derive(Debug, Default)]
pub struct ProtoSpecBuilder {
    package: Option<FullIdentifier>,
    comment: Option<String>,
    imports: Vec<Import>,
    messages: Vec<Message>,
    enums: Vec<Enum>,
    services: Vec<Service>,
    root_names: BTreeSet<String>,
}

impl ProtoSpecBuilder {
    pub fn package(mut self, package: &str) -> Result<Self, SchemaError> {
        self.package = Some(FullIdentifier::new(package)?);
        Ok(self)
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn message(mut self, message: Message) -> Result<Self, SchemaError> {
        self.claim_root_name(message.simple_name())?;
        self.messages.push(message);
        Ok(self)
    }

    pub fn enumeration(mut self, enumeration: Enum) -> Result<Self, SchemaError> {
        self.claim_root_name(enumeration.name())?;
        self.enums.push(enumeration);
        Ok(self)
    }

    pub fn service(mut self, service: Service) -> Result<Self, SchemaError> {
        self.claim_root_name(service.name())?;
        self.services.push(service);
        Ok(self)
    }

    fn claim_root_name(&mut self, name: &Identifier) -> Result<(), SchemaError> {
        if self.root_names.insert(name.to_string()) {
            Ok(())
        } else {
            Err(SchemaError::DuplicateRootElement {
                name: name.to_string(),
            })
        }
    }

    /// Finish the document. When any field anywhere in the message tree
    /// uses the well-known Any type, the matching import is appended
    /// exactly once, unless an import with that path already exists.
    #[must_use]
    pub fn build(mut self) -> ProtoSpec {
        let mut scan = AnyScan::default();
        for message in &self.messages {
            message.drive(&mut scan);
        }
        if scan.found && !self.imports.iter().any(|i| i.path() == ANY_TYPE_IMPORT) {
            self.imports.push(Import::new(ANY_TYPE_IMPORT));
        }

        ProtoSpec {
            syntax: SYNTAX.to_string(),
            package: self.package,
            comment: self.comment,
            imports: self.imports,
            messages: self.messages,
            enums: self.enums,
            services: self.services,
        }
    }
}

///
/// AnyScan
/// Visitor that detects any use of the well-known Any type.
///

#[derive(Default)]
struct AnyScan {
    found: bool,
}

impl Visitor for AnyScan {
    fn field(&mut self, field: &MessageField) {
        if field.ty().is_any() {
            self.found = true;
        }
    }
}
