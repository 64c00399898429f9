//! Typed schema builders.
//!
//! Each builder returns a [`Typed<S>`]: a runtime [`Schema`] paired with the shape type `S` that
//! names the data it accepts (see [`shape`][crate::shape]). Builders compose freely, and the shape
//! follows along, so the accepted type of any schema is always available as
//! [`Infer<S>`][crate::shape::Infer].
//!
//! This module is re-exported as [`t`][crate::t], and reads best through that name:
//!
//! ```
//! use typed_schema::{t, shape::*, Typed};
//!
//! let tags: Typed<Array<Str>> = t::array(t::string());
//! let id = t::union((t::string(), t::number()));
//! let maybe_id = t::optional(id.clone());
//!
//! let _: Infer<Optional<Union<(Str, Num)>>> = Some(AnyOf2::B(1.0));
//! assert_eq!(tags.to_string(), "string[]");
//! assert_eq!(maybe_id.to_string(), "string | number | undefined");
//! ```
//!
//! Objects are declared with [`object_shape!`][crate::object_shape] and built with
//! [`object`], since Rust needs a named struct to hold the projected fields.

use crate::schema::{Schema, TypeOperation};
use crate::shape::*;
use crate::value::Value;
use std::fmt;
use std::marker::PhantomData;

/// A schema together with its static shape.
///
/// The shape is purely type-level. `Typed<S>` is just a [`Schema`] at runtime, and can be turned
/// into one with [`into_schema`][Typed::into_schema] or `Schema::from`.
pub struct Typed<S> {
    schema: Schema,
    _shape: PhantomData<fn() -> S>,
}

impl<S> Typed<S> {
    const fn from_schema(schema: Schema) -> Self {
        Self {
            schema,
            _shape: PhantomData,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn into_schema(self) -> Schema {
        self.schema
    }

    /// Attach a free-form comment to the schema.
    pub fn with_comment(self, comment: impl Into<String>) -> Self {
        Self::from_schema(self.schema.with_comment(comment))
    }
}

impl<S: Modify> Typed<S> {
    /// Same as [`array`].
    pub fn array(self) -> Typed<Array<S>> {
        array(self)
    }

    /// Same as [`optional`].
    pub fn optional(self) -> Typed<Optional<S>> {
        optional(self)
    }

    /// Same as [`nullable`].
    pub fn nullable(self) -> Typed<Nullable<S>> {
        nullable(self)
    }
}

impl<S> Clone for Typed<S> {
    fn clone(&self) -> Self {
        Self::from_schema(self.schema.clone())
    }
}

impl<S> PartialEq for Typed<S> {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema
    }
}

impl<S> fmt::Debug for Typed<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Typed")
            .field("shape", &std::any::type_name::<S>())
            .field("schema", &self.schema)
            .finish()
    }
}

impl<S> fmt::Display for Typed<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.schema, f)
    }
}

impl<S: StaticShape> Default for Typed<S> {
    fn default() -> Self {
        shape()
    }
}

impl<S> AsRef<Schema> for Typed<S> {
    fn as_ref(&self) -> &Schema {
        &self.schema
    }
}

impl<S> From<Typed<S>> for Schema {
    fn from(typed: Typed<S>) -> Self {
        typed.schema
    }
}

pub const fn string() -> Typed<Str> {
    Typed::from_schema(Schema::STRING)
}

pub const fn number() -> Typed<Num> {
    Typed::from_schema(Schema::NUMBER)
}

pub const fn boolean() -> Typed<Bool> {
    Typed::from_schema(Schema::BOOLEAN)
}

pub const fn bigint() -> Typed<BigInt> {
    Typed::from_schema(Schema::BIGINT)
}

pub const fn null() -> Typed<Null> {
    Typed::from_schema(Schema::NULL)
}

pub const fn undefined() -> Typed<Undefined> {
    Typed::from_schema(Schema::UNDEFINED)
}

/// Accepts anything. Projects to [`Value`].
pub const fn unknown() -> Typed<Unknown> {
    Typed::from_schema(Schema::UNKNOWN)
}

/// A schema matching only values deep-equal to `value`.
///
/// ```
/// # use typed_schema::{t, Value};
/// let five = t::exact(5);
/// assert_eq!(five.schema().exact_value(), Some(&Value::Number(5.0)));
/// assert_ne!(five.into_schema(), t::exact("5").into_schema());
/// ```
pub fn exact<T: Into<Value>>(value: T) -> Typed<Exact<T>> {
    Typed::from_schema(Schema::exact(value))
}

/// A schema matching only values deep-equal to `value`, converted through its `Serialize`
/// implementation.
///
/// Fails if `value` has no [`Value`] form; see [`to_value`][crate::to_value].
#[cfg(feature = "serde")]
pub fn try_exact<T: serde::Serialize>(value: &T) -> crate::Result<Typed<Exact<T>>> {
    let value = crate::ser::to_value(value)?;
    Ok(Typed::from_schema(Schema::exact(value)))
}

/// An object schema with the properties declared on `P`.
///
/// `P` is usually declared with [`object_shape!`][crate::object_shape].
pub fn object<P: Properties>() -> Typed<Object<P>> {
    Typed::from_schema(Schema::object(P::properties()))
}

/// A record schema: an object with keys matching `keys` and values matching `values`.
pub fn record<K: KeyShape, V: Shape>(keys: Typed<K>, values: Typed<V>) -> Typed<Record<K, V>> {
    Typed::from_schema(Schema::record(keys.schema, values.schema))
}

/// Mark the schema as describing a sequence of its elements. Applying it twice changes nothing.
pub fn array<S: Modify>(schema: Typed<S>) -> Typed<Array<S>> {
    Typed::from_schema(schema.schema.array())
}

/// Let the value be absent. Applying it twice changes nothing.
pub fn optional<S: Modify>(schema: Typed<S>) -> Typed<Optional<S>> {
    Typed::from_schema(schema.schema.optional())
}

/// Let the value be null. Applying it twice changes nothing.
pub fn nullable<S: Modify>(schema: Typed<S>) -> Typed<Nullable<S>> {
    Typed::from_schema(schema.schema.nullable())
}

/// A union of the schemas in the tuple `items`. Data must match at least one of them.
///
/// See also [`union!`][crate::union], which skips the tuple parentheses.
pub fn union<L: TypedList>(items: L) -> Typed<Union<L::Shapes>> {
    Typed::from_schema(Schema::operation_unchecked(
        TypeOperation::Union,
        items.into_schemas(),
    ))
}

/// An intersection of the schemas in the tuple `items`. Data must match all of them.
///
/// See also [`intersection!`][crate::intersection], which skips the tuple parentheses.
pub fn intersection<L: TypedList>(items: L) -> Typed<Intersection<L::Shapes>> {
    Typed::from_schema(Schema::operation_unchecked(
        TypeOperation::Intersection,
        items.into_schemas(),
    ))
}

/// Build the schema for a shape given only its type.
///
/// ```
/// use typed_schema::{t, shape::*};
///
/// let built = t::shape::<Array<Union<(Str, Null)>>>();
/// assert_eq!(built, t::array(t::union((t::string(), t::null()))));
/// ```
pub fn shape<S: StaticShape>() -> Typed<S> {
    Typed::from_schema(S::schema())
}

/// A non-empty tuple of typed schemas.
///
/// Implemented for tuples of one to eight [`Typed`] values. The empty tuple has no
/// implementation, so an empty union or intersection can't be built through [`t`][crate::t].
pub trait TypedList {
    type Shapes: ShapeList;
    fn into_schemas(self) -> Vec<Schema>;
}

macro_rules! typed_list {
    ($($name:ident $var:ident),+) => {
        impl<$($name: Shape),+> TypedList for ($(Typed<$name>,)+) {
            type Shapes = ($($name,)+);

            fn into_schemas(self) -> Vec<Schema> {
                let ($($var,)+) = self;
                vec![$($var.schema),+]
            }
        }
    };
}

typed_list!(A a);
typed_list!(A a, B b);
typed_list!(A a, B b, C c);
typed_list!(A a, B b, C c, D d);
typed_list!(A a, B b, C c, D d, E e);
typed_list!(A a, B b, C c, D d, E e, F f);
typed_list!(A a, B b, C c, D d, E e, F f, G g);
typed_list!(A a, B b, C c, D d, E e, F f, G g, H h);

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::Kind;

    fn projects<S: Shape<Output = T>, T>(_: &Typed<S>) {}

    #[test]
    fn leaves_are_stable() {
        assert_eq!(string(), string());
        assert_eq!(string().schema().kind(), Some(Kind::String));
        assert_eq!(number().schema().kind(), Some(Kind::Number));
        assert_eq!(boolean().schema().kind(), Some(Kind::Boolean));
        assert_eq!(bigint().schema().kind(), Some(Kind::BigInt));
        assert_eq!(null().schema().kind(), Some(Kind::Null));
        assert_eq!(undefined().schema().kind(), Some(Kind::Undefined));
        assert_eq!(unknown().schema().kind(), Some(Kind::Unknown));
    }

    #[test]
    fn modifiers() {
        let once = array(string());
        let twice = array(array(string()));
        projects::<_, Vec<String>>(&twice);
        assert_eq!(once, twice);

        let maybe = optional(optional(nullable(number())));
        projects::<_, Option<Option<f64>>>(&maybe);
        assert!(maybe.schema().is_optional());
        assert!(maybe.schema().is_nullable());

        let chained = number().nullable().optional().nullable();
        assert_eq!(chained, maybe);
    }

    #[test]
    fn operations() {
        let value = union((string(), number(), boolean()));
        projects::<_, AnyOf3<String, f64, bool>>(&value);
        assert_eq!(value.schema().kind(), None);
        assert_eq!(value.to_string(), "string | number | boolean");

        let both = intersection((unknown(), string()));
        projects::<_, AllOf2<Value, String>>(&both);
        assert_eq!(
            both.schema().operation().map(|o| o.op()),
            Some(TypeOperation::Intersection)
        );

        let single = union((exact(1),));
        projects::<_, i32>(&single);
    }

    #[test]
    fn records() {
        let map = record(string(), unknown());
        projects::<_, std::collections::BTreeMap<String, Value>>(&map);
        let record = map.schema().record_parts().unwrap();
        assert_eq!(record.keys(), &Schema::STRING);
        assert_eq!(record.values(), &Schema::UNKNOWN);
    }

    #[test]
    fn literal_record_keys() {
        let single = record(exact("a"), number());
        projects::<_, std::collections::BTreeMap<String, f64>>(&single);
        assert_eq!(single.to_string(), "{ [key: \"a\"]: number }");

        let flags = record(union((exact("a"), exact("b"))), boolean());
        projects::<_, std::collections::BTreeMap<String, bool>>(&flags);
        assert_eq!(flags.to_string(), "{ [key: \"a\" | \"b\"]: boolean }");

        let slots = record(union((exact(1), exact(2))), string());
        projects::<_, std::collections::BTreeMap<i64, String>>(&slots);
    }

    #[test]
    fn shape_matches_builders() {
        assert_eq!(shape::<Record<Str, Array<Num>>>(), record(string(), array(number())));
        assert_eq!(
            shape::<Optional<Intersection<(Str, Unknown)>>>(),
            optional(intersection((string(), unknown())))
        );
        assert_eq!(Typed::<Str>::default(), string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn try_exact_values() {
        let on = try_exact(&vec!["a", "b"]).unwrap();
        projects::<_, Vec<&str>>(&on);
        assert_eq!(on.to_string(), "[\"a\", \"b\"]");

        let mut bad = std::collections::HashMap::new();
        bad.insert(1u8, 2u8);
        assert!(try_exact(&bad).is_err());
    }

    #[test]
    fn comments() {
        let name = string().with_comment("Display name");
        assert_eq!(name.schema().comment(), "Display name");
        assert_eq!(name, string());
    }
}
