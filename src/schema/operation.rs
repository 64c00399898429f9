use super::Schema;
use std::fmt;

/// The operator of an operation schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperation {
    /// Data must match at least one child.
    Union,
    /// Data must match every child.
    Intersection,
}

impl TypeOperation {
    /// The operator as written between types: `|` or `&`.
    pub fn symbol(&self) -> &'static str {
        match self {
            TypeOperation::Union => "|",
            TypeOperation::Intersection => "&",
        }
    }
}

impl fmt::Display for TypeOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeOperation::Union => f.write_str("union"),
            TypeOperation::Intersection => f.write_str("intersection"),
        }
    }
}

/// A union or intersection of child schemas.
///
/// Children keep the order they were given in. The order carries no meaning for matching; it only
/// keeps rendering and projection deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationSchema {
    op: TypeOperation,
    items: Vec<Schema>,
}

impl OperationSchema {
    pub(crate) fn new(op: TypeOperation, items: Vec<Schema>) -> Self {
        Self { op, items }
    }

    pub fn op(&self) -> TypeOperation {
        self.op
    }

    pub fn items(&self) -> &[Schema] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for operations built through this crate.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Schema> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a OperationSchema {
    type Item = &'a Schema;
    type IntoIter = std::slice::Iter<'a, Schema>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
