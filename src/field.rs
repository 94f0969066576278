use crate::field_type::FieldType;

/// Defines one positional field of a record in a line oriented file.
///
/// Every field occupies exactly one line. A record is a fixed sequence of fields, see
/// [Record::fields](crate::record::Record::fields).
///
/// # Examples
/// ```
/// use text_record_sort::field::Field;
/// use text_record_sort::field_type::FieldType;
/// let field = Field::new("year", FieldType::Integer);
/// assert_eq!(field.name(), "year");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    field_type: FieldType,
}

impl Field {
    /// Create a new [Field]
    ///
    /// # Arguments
    /// * `name` - the name used in diagnostics
    /// * `field_type` - the type of the field. See [FieldType] for supported types
    pub fn new(name: &str, field_type: FieldType) -> Field {
        Field {
            name: name.to_string(),
            field_type,
        }
    }

    /// Get the name for this field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the [FieldType] for this field.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}
