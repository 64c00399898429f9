use super::Schema;

/// The key and value schemas of a record-form object schema.
///
/// Every key of matching data must satisfy [`keys`][RecordSchema::keys], and every value must
/// satisfy [`values`][RecordSchema::values].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordSchema {
    keys: Box<Schema>,
    values: Box<Schema>,
}

impl RecordSchema {
    pub(crate) fn new(keys: Schema, values: Schema) -> Self {
        Self {
            keys: Box::new(keys),
            values: Box::new(values),
        }
    }

    pub fn keys(&self) -> &Schema {
        &self.keys
    }

    pub fn values(&self) -> &Schema {
        &self.values
    }
}
