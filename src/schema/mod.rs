//! The runtime schema model.
//!
//! A [`Schema`] is a plain, immutable value: a tagged [`Node`] describing what kind of data is
//! accepted, plus a set of orthogonal [`Modifiers`] (array, optional, nullable). Schemas are
//! usually built through the typed builders in [`t`][crate::t], which also carry the statically
//! projected data type, but they can be assembled dynamically with the constructors here as well.
//!
//! Nothing at this layer checks data against a schema. It only records the description, and lets
//! it be taken apart again through one accessor per tag:
//!
//! - [`Schema::kind`] - the [`Kind`] tag, or `None` for union/intersection schemas.
//! - [`Schema::modifiers`] - the modifier flags.
//! - [`Schema::properties`] - the per-property children of an object schema.
//! - [`Schema::record_parts`] - the key and value children of a record schema.
//! - [`Schema::exact_value`] - the literal held by an exact-value schema.
//! - [`Schema::operation`] - the operator and children of a union/intersection schema.
//!
//! # Examples
//!
//! ```
//! # use typed_schema::*;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = Schema::object([
//!     ("value", Schema::union([Schema::STRING, Schema::NUMBER, Schema::BOOLEAN])?),
//!     ("record", Schema::record(Schema::STRING, Schema::UNKNOWN)),
//! ]);
//! assert_eq!(schema.kind(), Some(Kind::Object));
//! assert_eq!(
//!     schema.to_string(),
//!     "{ value: string | number | boolean; record: { [key: string]: unknown } }"
//! );
//! # Ok(())
//! # }
//! ```

mod display;
mod object;
mod operation;
mod record;

pub use self::object::*;
pub use self::operation::*;
pub use self::record::*;

use crate::error::{Error, Result};
use crate::value::Value;
use educe::Educe;
use std::fmt;

/// The fixed tag distinguishing the non-operation schema varieties.
///
/// Both object forms (per-property and record) share [`Kind::Object`]; use
/// [`Schema::properties`] or [`Schema::record`] to tell them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    String,
    Number,
    Boolean,
    BigInt,
    Null,
    Undefined,
    Unknown,
    Object,
    ExactValue,
}

impl Kind {
    /// The tag name, in upper case.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::String => "STRING",
            Kind::Number => "NUMBER",
            Kind::Boolean => "BOOLEAN",
            Kind::BigInt => "BIGINT",
            Kind::Null => "NULL",
            Kind::Undefined => "UNDEFINED",
            Kind::Unknown => "UNKNOWN",
            Kind::Object => "OBJECT",
            Kind::ExactValue => "EXACT_VALUE",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The modifier flags of a schema.
///
/// Each flag changes how the accepted type is read without touching the node itself:
///
/// - `array`: the schema describes a sequence of the element type.
/// - `optional`: the value may be absent (`undefined`).
/// - `nullable`: the value may be `null`.
///
/// Flags are plain booleans, so setting one twice is the same as setting it once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub array: bool,
    pub optional: bool,
    pub nullable: bool,
}

impl Modifiers {
    /// No modifiers set.
    pub const NONE: Modifiers = Modifiers {
        array: false,
        optional: false,
        nullable: false,
    };

    /// Check if no modifier is set.
    pub fn is_empty(&self) -> bool {
        !(self.array || self.optional || self.nullable)
    }
}

/// The literal held by an exact-value schema.
#[derive(Clone, Debug, PartialEq)]
pub struct ExactSchema {
    value: Value,
}

impl ExactSchema {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// The tagged payload of a [`Schema`].
///
/// Leaf variants carry nothing. The two object forms are distinct variants, so a schema can never
/// mix per-property children with a key/value pair.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    String,
    Number,
    Boolean,
    BigInt,
    Null,
    Undefined,
    Unknown,
    /// Object with a fixed set of named properties.
    Object(ObjectSchema),
    /// Object used as a map from keys of one schema to values of another.
    Record(RecordSchema),
    /// Matches only a deep-equal value.
    Exact(ExactSchema),
    /// Union or intersection of child schemas.
    Operation(OperationSchema),
}

impl Node {
    /// Get the kind tag for this node. Operation nodes have no kind.
    pub fn kind(&self) -> Option<Kind> {
        let kind = match self {
            Node::String => Kind::String,
            Node::Number => Kind::Number,
            Node::Boolean => Kind::Boolean,
            Node::BigInt => Kind::BigInt,
            Node::Null => Kind::Null,
            Node::Undefined => Kind::Undefined,
            Node::Unknown => Kind::Unknown,
            Node::Object(_) | Node::Record(_) => Kind::Object,
            Node::Exact(_) => Kind::ExactValue,
            Node::Operation(_) => return None,
        };
        Some(kind)
    }
}

/// A schema: an immutable description of the shape of acceptable data.
///
/// Every constructor and modifier returns a new schema; nothing mutates an existing one in place.
/// Schemas compare structurally. The free-form [`comment`][Schema::comment] is documentation only
/// and is ignored by equality.
///
/// # Defaults
///
/// The default schema is [`Schema::UNKNOWN`], with no modifiers and an empty comment.
#[derive(Clone, Debug, Educe)]
#[educe(PartialEq, Default)]
pub struct Schema {
    #[educe(Default(expression = Node::Unknown))]
    node: Node,
    modifiers: Modifiers,
    #[educe(PartialEq(ignore))]
    comment: String,
}

impl Schema {
    const fn leaf(node: Node) -> Self {
        Self {
            node,
            modifiers: Modifiers::NONE,
            comment: String::new(),
        }
    }

    pub const STRING: Schema = Schema::leaf(Node::String);
    pub const NUMBER: Schema = Schema::leaf(Node::Number);
    pub const BOOLEAN: Schema = Schema::leaf(Node::Boolean);
    pub const BIGINT: Schema = Schema::leaf(Node::BigInt);
    pub const NULL: Schema = Schema::leaf(Node::Null);
    pub const UNDEFINED: Schema = Schema::leaf(Node::Undefined);
    pub const UNKNOWN: Schema = Schema::leaf(Node::Unknown);

    /// Make a schema from a node, with no modifiers set.
    pub fn new(node: Node) -> Self {
        Self::leaf(node)
    }

    /// Make a schema that only matches a value deep-equal to `value`.
    ///
    /// Exactness is type-sensitive: `exact(5)` and `exact("5")` are different schemas.
    pub fn exact(value: impl Into<Value>) -> Self {
        Self::leaf(Node::Exact(ExactSchema {
            value: value.into(),
        }))
    }

    /// Make an object schema from `(name, schema)` pairs.
    ///
    /// Properties are kept in the order given. If a name appears more than once, the last schema
    /// given for it wins, in the position of the first.
    pub fn object<N, I>(properties: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Schema)>,
    {
        let mut object = ObjectSchema::new();
        for (name, schema) in properties {
            let name = name.into();
            if object.contains(&name) {
                log::warn!("object schema property \"{}\" was given more than once", name);
            }
            object.insert(name, schema);
        }
        Self::leaf(Node::Object(object))
    }

    /// Make a record schema: an object whose keys all match `keys` and whose values all match
    /// `values`.
    pub fn record(keys: Schema, values: Schema) -> Self {
        Self::leaf(Node::Record(RecordSchema::new(keys, values)))
    }

    /// Make a union schema. Data matches if it matches at least one of the given schemas.
    ///
    /// Fails if `items` is empty.
    pub fn union<I: IntoIterator<Item = Schema>>(items: I) -> Result<Self> {
        Self::operation_from(TypeOperation::Union, items.into_iter().collect())
    }

    /// Make an intersection schema. Data matches if it matches all of the given schemas.
    ///
    /// Fails if `items` is empty.
    pub fn intersection<I: IntoIterator<Item = Schema>>(items: I) -> Result<Self> {
        Self::operation_from(TypeOperation::Intersection, items.into_iter().collect())
    }

    fn operation_from(op: TypeOperation, items: Vec<Schema>) -> Result<Self> {
        if items.is_empty() {
            log::debug!("rejected {} schema with no children", op);
            return Err(Error::EmptyOperation(op));
        }
        Ok(Self::operation_unchecked(op, items))
    }

    /// Callers guarantee `items` is non-empty.
    pub(crate) fn operation_unchecked(op: TypeOperation, items: Vec<Schema>) -> Self {
        Self::leaf(Node::Operation(OperationSchema::new(op, items)))
    }

    /// Set the array flag: the schema now describes a sequence of its former type.
    pub fn array(mut self) -> Self {
        if self.modifiers.array {
            log::trace!("array modifier already set on {}", self);
        }
        self.modifiers.array = true;
        self
    }

    /// Set the optional flag: the value may also be absent.
    pub fn optional(mut self) -> Self {
        if self.modifiers.optional {
            log::trace!("optional modifier already set on {}", self);
        }
        self.modifiers.optional = true;
        self
    }

    /// Set the nullable flag: the value may also be null.
    pub fn nullable(mut self) -> Self {
        if self.modifiers.nullable {
            log::trace!("nullable modifier already set on {}", self);
        }
        self.modifiers.nullable = true;
        self
    }

    /// Attach a free-form comment. Comments don't participate in equality.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn into_node(self) -> Node {
        self.node
    }

    /// Get the kind tag, or `None` if this is a union or intersection schema.
    pub fn kind(&self) -> Option<Kind> {
        self.node.kind()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn is_array(&self) -> bool {
        self.modifiers.array
    }

    pub fn is_optional(&self) -> bool {
        self.modifiers.optional
    }

    pub fn is_nullable(&self) -> bool {
        self.modifiers.nullable
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Get the properties, if this is an object schema in per-property form.
    pub fn properties(&self) -> Option<&ObjectSchema> {
        match &self.node {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Get the key and value schemas, if this is an object schema in record form.
    pub fn record_parts(&self) -> Option<&RecordSchema> {
        match &self.node {
            Node::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Get the held literal, if this is an exact-value schema.
    pub fn exact_value(&self) -> Option<&Value> {
        match &self.node {
            Node::Exact(exact) => Some(exact.value()),
            _ => None,
        }
    }

    /// Get the operator and children, if this is a union or intersection schema.
    pub fn operation(&self) -> Option<&OperationSchema> {
        match &self.node {
            Node::Operation(operation) => Some(operation),
            _ => None,
        }
    }

    pub fn is_operation(&self) -> bool {
        matches!(self.node, Node::Operation(_))
    }
}

impl From<Node> for Schema {
    fn from(node: Node) -> Self {
        Self::new(node)
    }
}
