use crate::prelude::*;

///
/// Enum
///
/// A named closed set of (name, value) pairs. Value names are unique;
/// numeric values are not required to be.
///

#[derive(Clone, Debug, Serialize)]
pub struct Enum {
    name: Identifier,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,

    values: Vec<EnumValue>,
}

impl Enum {
    /// Start building an enum with the given name.
    pub fn builder(name: &str) -> Result<EnumBuilder, SchemaError> {
        Ok(EnumBuilder {
            name: Identifier::new(name)?,
            comment: None,
            values: Vec::new(),
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

    /// Values sorted ascending by numeric value; a snapshot, not a live view.
    #[must_use]
    pub fn values(&self) -> Vec<EnumValue> {
        self.values.clone()
    }
}

impl VisitableNode for Enum {
    fn drive<V: Visitor>(&self, v: &mut V) {
        v.enumeration(self);
        for value in &self.values {
            v.enum_value(value);
        }
    }
}

///
/// EnumValue
///

#[derive(Clone, Debug, Serialize)]
pub struct EnumValue {
    name: Identifier,
    value: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl EnumValue {
    pub fn new(name: &str, value: i32) -> Result<Self, SchemaError> {
        Ok(Self {
            name: Identifier::new(name)?,
            value,
            comment: None,
        })
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
    pub const fn value(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

///
/// EnumBuilder
///

#[derive(Debug)]
pub struct EnumBuilder {
    name: Identifier,
    comment: Option<String>,
    values: Vec<EnumValue>,
}

impl EnumBuilder {
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The numeric value the next auto-assigned insertion receives.
    #[must_use]
    pub fn next_value(&self) -> i32 {
        self.values
            .iter()
            .map(EnumValue::value)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Add a value, auto-assigning the next numeric value.
    pub fn value(self, name: &str) -> Result<Self, SchemaError> {
        let value = EnumValue::new(name, self.next_value())?;
        self.value_with(value)
    }

    /// Add a fully specified value. The first inserted value must be
    /// zero; names must be unique within the enum.
    pub fn value_with(mut self, value: EnumValue) -> Result<Self, SchemaError> {
        if self.values.is_empty() && value.value() != 0 {
            return Err(SchemaError::FirstEnumValueNotZero {
                owner: self.name.to_string(),
                value: value.value(),
            });
        }
        if self.values.iter().any(|v| v.name() == value.name()) {
            return Err(SchemaError::DuplicateEnumValue {
                owner: self.name.to_string(),
                name: value.name().to_string(),
            });
        }

        self.values.push(value);
        Ok(self)
    }

    /// Finish the enum; values sort ascending by numeric value, equal
    /// values keeping insertion order.
    #[must_use]
    pub fn build(mut self) -> Enum {
        self.values.sort_by_key(EnumValue::value);

        Enum {
            name: self.name,
            comment: self.comment,
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_must_be_zero() {
        let err = Enum::builder("PhoneType")
            .unwrap()
            .value_with(EnumValue::new("MOBILE", 3).unwrap())
            .unwrap_err();

        assert_eq!(
            err,
            SchemaError::FirstEnumValueNotZero {
                owner: "PhoneType".to_string(),
                value: 3,
            },
        );
    }

    #[test]
    fn auto_assignment_counts_up_from_zero() {
        let enumeration = Enum::builder("PhoneType")
            .unwrap()
            .value("MOBILE")
            .unwrap()
            .value("HOME")
            .unwrap()
            .value("WORK")
            .unwrap()
            .build();

        let values: Vec<(String, i32)> = enumeration
            .values()
            .iter()
            .map(|v| (v.name().to_string(), v.value()))
            .collect();
        assert_eq!(
            values,
            [
                ("MOBILE".to_string(), 0),
                ("HOME".to_string(), 1),
                ("WORK".to_string(), 2),
            ],
        );
    }

    #[test]
    fn auto_assignment_continues_past_explicit_values() {
        let builder = Enum::builder("Level")
            .unwrap()
            .value_with(EnumValue::new("LOW", 0).unwrap())
            .unwrap()
            .value_with(EnumValue::new("HIGH", 10).unwrap())
            .unwrap();
        assert_eq!(builder.next_value(), 11);
    }

    #[test]
    fn duplicate_value_names_are_rejected() {
        let err = Enum::builder("PhoneType")
            .unwrap()
            .value("MOBILE")
            .unwrap()
            .value_with(EnumValue::new("MOBILE", 5).unwrap())
            .unwrap_err();

        assert_eq!(
            err,
            SchemaError::DuplicateEnumValue {
                owner: "PhoneType".to_string(),
                name: "MOBILE".to_string(),
            },
        );
    }

    #[test]
    fn duplicate_numeric_values_are_allowed_and_sort_stably() {
        let enumeration = Enum::builder("Alias")
            .unwrap()
            .value_with(EnumValue::new("ZERO", 0).unwrap())
            .unwrap()
            .value_with(EnumValue::new("SECOND", 2).unwrap())
            .unwrap()
            .value_with(EnumValue::new("ALSO_ZERO", 0).unwrap())
            .unwrap()
            .build();

        let names: Vec<String> = enumeration
            .values()
            .iter()
            .map(|v| v.name().to_string())
            .collect();
        assert_eq!(names, ["ZERO", "ALSO_ZERO", "SECOND"]);
    }

    #[test]
    fn values_accessor_is_a_snapshot() {
        let enumeration = Enum::builder("Stage").unwrap().value("INIT").unwrap().build();

        let mut snapshot = enumeration.values();
        snapshot.clear();
        assert_eq!(enumeration.values().len(), 1);
    }
}
