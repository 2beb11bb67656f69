use crate::prelude::*;
use std::ops::Not;

///
/// MessageField
///
/// A named, numbered, typed slot within a message.
///

#[derive(Clone, Debug, Serialize)]
pub struct MessageField {
    name: Identifier,
    number: FieldNumber,
    ty: FieldType,

    #[serde(skip_serializing_if = "Not::not")]
    repeated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl MessageField {
    /// Construct a field with an explicit number.
    pub fn new(ty: impl Into<FieldType>, name: &str, number: u32) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Identifier::new(name)?,
            number: FieldNumber::new(number)?,
            ty: ty.into(),
            repeated: false,
            comment: None,
        })
    }

    /// Mark the field as a repeated sequence.
    #[must_use]
    pub const fn repeated(mut self) -> Self {
        self.repeated = true;
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
    pub const fn number(&self) -> FieldNumber {
        self.number
    }

    #[must_use]
    pub const fn ty(&self) -> &FieldType {
        &self.ty
    }

    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        self.repeated
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_name_and_number() {
        let field = MessageField::new(ScalarType::String, "msg", 1).unwrap();
        assert_eq!(field.name().as_str(), "msg");
        assert_eq!(field.number().get(), 1);
        assert!(!field.is_repeated());
        assert_eq!(field.comment(), None);

        assert!(matches!(
            MessageField::new(ScalarType::String, "9bad", 1),
            Err(SchemaError::MalformedIdentifier(_)),
        ));
        assert!(matches!(
            MessageField::new(ScalarType::String, "msg", 0),
            Err(SchemaError::FieldNumberOutOfRange(0)),
        ));
    }

    #[test]
    fn modifiers_set_flags_and_comment() {
        let field = MessageField::new(ScalarType::Int32, "ids", 3)
            .unwrap()
            .repeated()
            .with_comment("all known ids");

        assert!(field.is_repeated());
        assert_eq!(field.comment(), Some("all known ids"));
    }
}
