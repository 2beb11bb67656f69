use crate::prelude::*;
use std::{collections::BTreeMap, ops::Not};

///
/// Service
///
/// A named group of remote calls. Calls are keyed by name; iteration is
/// deterministic but carries no insertion-order contract.
///

#[derive(Clone, Debug, Serialize)]
pub struct Service {
    name: Identifier,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,

    rpcs: BTreeMap<String, Rpc>,
}

impl Service {
    /// Start building a service with the given name.
    pub fn builder(name: &str) -> Result<ServiceBuilder, SchemaError> {
        Ok(ServiceBuilder {
            name: Identifier::new(name)?,
            comment: None,
            rpcs: BTreeMap::new(),
        })
    }

    #[must_use]
    pub const fn name(&self) -> &Identifier {
        &self.name
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Calls in name order; a snapshot, not a live view.
    #[must_use]
    pub fn rpcs(&self) -> Vec<Rpc> {
        self.rpcs.values().cloned().collect()
    }
}

impl VisitableNode for Service {
    fn drive<V: Visitor>(&self, v: &mut V) {
        v.service(self);
        for rpc in self.rpcs.values() {
            v.rpc(rpc);
        }
    }
}

///
/// Rpc
///
/// One remote call: input and output capture the referenced message's
/// qualified name, with independent streaming flags per side.
///

#[derive(Clone, Debug, Serialize)]
pub struct Rpc {
    name: Identifier,
    input: FullIdentifier,
    output: FullIdentifier,

    #[serde(skip_serializing_if = "Not::not")]
    input_streamed: bool,

    #[serde(skip_serializing_if = "Not::not")]
    output_streamed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl Rpc {
    /// Construct a call between two built messages.
    pub fn new(name: &str, input: &Message, output: &Message) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Identifier::new(name)?,
            input: input.qualified_name(),
            output: output.qualified_name(),
            input_streamed: false,
            output_streamed: false,
            comment: None,
        })
    }

    /// Construct a call from message names.
    pub fn with_names(name: &str, input: &str, output: &str) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Identifier::new(name)?,
            input: FullIdentifier::new(input)?,
            output: FullIdentifier::new(output)?,
            input_streamed: false,
            output_streamed: false,
            comment: None,
        })
    }

    /// Mark the input side as a streamed sequence.
    #[must_use]
    pub const fn stream_input(mut self) -> Self {
        self.input_streamed = true;
        self
    }

    /// Mark the output side as a streamed sequence.
    #[must_use]
    pub const fn stream_output(mut self) -> Self {
        self.output_streamed = true;
        self
    }

    /// Attach a trailing comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub const fn name(&self) -> &Identifier {
        &self.name
    }

    #[must_use]
    pub const fn input(&self) -> &FullIdentifier {
        &self.input
    }

    #[must_use]
    pub const fn output(&self) -> &FullIdentifier {
        &self.output
    }

    #[must_use]
    pub const fn is_input_streamed(&self) -> bool {
        self.input_streamed
    }

    #[must_use]
    pub const fn is_output_streamed(&self) -> bool {
        self.output_streamed
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

///
/// ServiceBuilder
///

#[derive(Debug)]
pub struct ServiceBuilder {
    name: Identifier,
    comment: Option<String>,
    rpcs: BTreeMap<String, Rpc>,
}

impl ServiceBuilder {
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Add a call; call names are unique within the service.
    pub fn rpc(mut self, rpc: Rpc) -> Result<Self, SchemaError> {
        if self.rpcs.contains_key(rpc.name().as_str()) {
            return Err(SchemaError::DuplicateRpc {
                owner: self.name.to_string(),
                name: rpc.name().to_string(),
            });
        }

        self.rpcs.insert(rpc.name().to_string(), rpc);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Service {
        Service {
            name: self.name,
            comment: self.comment,
            rpcs: self.rpcs,
        }
    }
}
