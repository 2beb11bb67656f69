use crate::prelude::*;

///
/// Message
///
/// A named structured record, optionally containing nested messages to
/// unbounded depth. The ancestor path of every nested message is
/// stamped when the enclosing message is built and never changes
/// afterwards, so qualified names are stable.
///

#[derive(Clone, Debug, Serialize)]
pub struct Message {
    name: Identifier,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,

    fields: Vec<MessageField>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    nested: Vec<Message>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    ancestors: Vec<Identifier>,
}

impl Message {
    /// Start building a message with the given name.
    pub fn builder(name: &str) -> Result<MessageBuilder, SchemaError> {
        Ok(MessageBuilder {
            name: Identifier::new(name)?,
            comment: None,
            fields: Vec::new(),
            nested: Vec::new(),
        })
    }

    /// The message's own name, without ancestor qualification.
    #[must_use]
    pub const fn simple_name(&self) -> &Identifier {
        &self.name
    }

    /// The full dotted name, including ancestors for nested messages.
    #[must_use]
    pub fn qualified_name(&self) -> FullIdentifier {
        let mut path = String::new();
        for ancestor in &self.ancestors {
            path.push_str(ancestor.as_str());
            path.push('.');
        }
        path.push_str(self.name.as_str());

        FullIdentifier::from_validated(path)
    }

    #[must_use]
    pub fn is_nested(&self) -> bool {
        !self.ancestors.is_empty()
    }

    /// Qualified name of the enclosing message, if any.
    #[must_use]
    pub fn parent_qualified_name(&self) -> Option<FullIdentifier> {
        if self.ancestors.is_empty() {
            return None;
        }

        let path = self
            .ancestors
            .iter()
            .map(Identifier::as_str)
            .collect::<Vec<_>>()
            .join(".");

        Some(FullIdentifier::from_validated(path))
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Fields sorted ascending by number; a snapshot, not a live view.
    #[must_use]
    pub fn fields(&self) -> Vec<MessageField> {
        self.fields.clone()
    }

    /// Direct nested messages in insertion order; a snapshot.
    #[must_use]
    pub fn nested_messages(&self) -> Vec<Message> {
        self.nested.clone()
    }

    /// Look up a direct nested message by simple name.
    #[must_use]
    pub fn nested(&self, name: &str) -> Option<&Message> {
        self.nested.iter().find(|m| m.name.as_str() == name)
    }

    fn prepend_ancestors(&mut self, prefix: &[Identifier]) {
        let mut chain = prefix.to_vec();
        chain.append(&mut self.ancestors);
        self.ancestors = chain;

        for child in &mut self.nested {
            child.prepend_ancestors(prefix);
        }
    }
}

impl VisitableNode for Message {
    fn drive<V: Visitor>(&self, v: &mut V) {
        v.message(self);
        for field in &self.fields {
            v.field(field);
        }
        for child in &self.nested {
            child.drive(v);
        }
    }
}

///
/// MessageBuilder
///

#[derive(Debug)]
pub struct MessageBuilder {
    name: Identifier,
    comment: Option<String>,
    fields: Vec<MessageField>,
    nested: Vec<Message>,
}

impl MessageBuilder {
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The number the next auto-assigned field receives.
    #[must_use]
    pub fn next_field_number(&self) -> u32 {
        self.fields
            .iter()
            .map(|f| f.number().get())
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Add a field, auto-assigning the next free number.
    pub fn field(self, ty: impl Into<FieldType>, name: &str) -> Result<Self, SchemaError> {
        let field = MessageField::new(ty, name, self.next_field_number())?;
        self.field_with(field)
    }

    /// Add a fully specified field. Field names and field numbers are
    /// two independent uniqueness domains; either collision fails.
    pub fn field_with(mut self, field: MessageField) -> Result<Self, SchemaError> {
        if self.fields.iter().any(|f| f.name() == field.name()) {
            return Err(SchemaError::DuplicateField {
                owner: self.name.to_string(),
                name: field.name().to_string(),
            });
        }
        if self.fields.iter().any(|f| f.number() == field.number()) {
            return Err(SchemaError::DuplicateFieldNumber {
                owner: self.name.to_string(),
                number: field.number().get(),
            });
        }

        self.fields.push(field);
        Ok(self)
    }

    /// Nest a built message; sibling simple names must be unique.
    pub fn nested(mut self, message: Message) -> Result<Self, SchemaError> {
        if self.nested.iter().any(|m| m.simple_name() == message.simple_name()) {
            return Err(SchemaError::DuplicateNestedMessage {
                owner: self.name.to_string(),
                name: message.simple_name().to_string(),
            });
        }

        self.nested.push(message);
        Ok(self)
    }

    /// Finish the message. Fields sort by number and every nested
    /// descendant has this message prepended to its ancestor path.
    #[must_use]
    pub fn build(mut self) -> Message {
        self.fields.sort_by_key(MessageField::number);

        let prefix = [self.name.clone()];
        for child in &mut self.nested {
            child.prepend_ancestors(&prefix);
        }

        Message {
            name: self.name,
            comment: self.comment,
            fields: self.fields,
            nested: self.nested,
            ancestors: Vec::new(),
        }
    }
}
