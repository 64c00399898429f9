use super::Schema;
use indexmap::map::{self, IndexMap};

/// The properties of an object schema, in declaration order.
///
/// A property is optional when its schema has the optional flag set; there is no separate list of
/// required names. Equality ignores the order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectSchema {
    properties: IndexMap<String, Schema>,
}

impl ObjectSchema {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the schema previously stored under `name`, if any. A replaced property keeps its
    /// original position.
    pub(crate) fn insert(&mut self, name: String, schema: Schema) -> Option<Schema> {
        self.properties.insert(name, schema)
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|k| k.as_str())
    }

    /// Iterate over the names of properties that must be present.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, schema)| !schema.is_optional())
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> map::Iter<'_, String, Schema> {
        self.properties.iter()
    }
}

impl<'a> IntoIterator for &'a ObjectSchema {
    type Item = (&'a String, &'a Schema);
    type IntoIter = map::Iter<'a, String, Schema>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn declaration_order() {
        let mut object = ObjectSchema::new();
        object.insert("zeta".into(), Schema::NUMBER);
        object.insert("alpha".into(), Schema::STRING.optional());
        object.insert("mid".into(), Schema::BOOLEAN);
        assert_eq!(object.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(object.required().collect::<Vec<_>>(), vec!["zeta", "mid"]);
        assert!(object.contains("alpha"));
        assert!(!object.contains("beta"));
    }

    #[test]
    fn insert_replaces() {
        let mut object = ObjectSchema::new();
        assert!(object.insert("x".into(), Schema::STRING).is_none());
        assert_eq!(object.insert("x".into(), Schema::NUMBER), Some(Schema::STRING));
        assert_eq!(object.len(), 1);
        assert_eq!(object.iter().next(), Some((&"x".to_string(), &Schema::NUMBER)));

        object.insert("y".into(), Schema::BOOLEAN);
        object.insert("x".into(), Schema::BIGINT);
        assert_eq!(object.names().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn equality_ignores_order() {
        let mut first = ObjectSchema::new();
        first.insert("a".into(), Schema::STRING);
        first.insert("b".into(), Schema::NUMBER);
        let mut second = ObjectSchema::new();
        second.insert("b".into(), Schema::NUMBER);
        second.insert("a".into(), Schema::STRING);
        assert_eq!(first, second);
    }
}
