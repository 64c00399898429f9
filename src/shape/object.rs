use super::{BaseShape, Exact, ExactInt, Num, Shape, StaticShape, Str, Union};
use crate::schema::Schema;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// A struct whose fields are the properties of an object schema.
///
/// Implemented by [`object_shape!`][crate::object_shape], which declares the struct with each
/// field typed as the data its property accepts.
pub trait Properties {
    /// The schema of every property, in declaration order.
    fn properties() -> Vec<(&'static str, Schema)>;
}

/// Shape of an object schema with the properties of `P`.
pub struct Object<P>(PhantomData<fn() -> P>);

impl<P: Properties> Shape for Object<P> {
    type Output = P;
}

impl<P: Properties> BaseShape for Object<P> {}

impl<P: Properties> StaticShape for Object<P> {
    fn schema() -> Schema {
        Schema::object(P::properties())
    }
}

/// A shape that can constrain the keys of a record.
pub trait KeyShape: Shape {
    /// The map key type used in the projected record.
    type Key: Ord;
}

impl KeyShape for Str {
    type Key = String;
}

/// Numeric record keys project to integers, so they can be ordered map keys.
impl KeyShape for Num {
    type Key = i64;
}

impl KeyShape for super::BigInt {
    type Key = i128;
}

impl<const N: i64> KeyShape for ExactInt<N> {
    type Key = i64;
}

impl KeyShape for Exact<&'static str> {
    type Key = String;
}

impl KeyShape for Exact<String> {
    type Key = String;
}

impl KeyShape for Exact<i32> {
    type Key = i64;
}

impl KeyShape for Exact<i64> {
    type Key = i64;
}

/// A union of key shapes is a key shape when every member maps to the same key type.
impl<A: KeyShape> KeyShape for Union<(A,)> {
    type Key = A::Key;
}

macro_rules! union_key {
    ($first:ident $(, $rest:ident)+) => {
        impl<$first: KeyShape, $($rest: KeyShape<Key = $first::Key>),+> KeyShape
            for Union<($first, $($rest),+)>
        {
            type Key = $first::Key;
        }
    };
}

union_key!(A, B);
union_key!(A, B, C);
union_key!(A, B, C, D);
union_key!(A, B, C, D, E);
union_key!(A, B, C, D, E, F);
union_key!(A, B, C, D, E, F, G);
union_key!(A, B, C, D, E, F, G, H);

/// Shape of a record schema: keys matching `K`, values matching `V`.
pub struct Record<K, V>(PhantomData<fn() -> (K, V)>);

impl<K: KeyShape, V: Shape> Shape for Record<K, V> {
    type Output = BTreeMap<K::Key, V::Output>;
}

impl<K: KeyShape, V: Shape> BaseShape for Record<K, V> {}

impl<K, V> StaticShape for Record<K, V>
where
    K: KeyShape + StaticShape,
    V: StaticShape,
{
    fn schema() -> Schema {
        Schema::record(K::schema(), V::schema())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::Kind;
    use crate::shape::{BigInt, Optional, Unknown};
    use crate::value::Value;

    fn projects<S: Shape<Output = T>, T>() {}

    struct Point;

    impl Properties for Point {
        fn properties() -> Vec<(&'static str, Schema)> {
            vec![("x", Schema::NUMBER), ("y", Schema::NUMBER.optional())]
        }
    }

    #[test]
    fn object() {
        projects::<Object<Point>, Point>();
        let schema = <Object<Point>>::schema();
        let properties = schema.properties().unwrap();
        assert_eq!(properties.len(), 2);
        assert!(properties.get("y").unwrap().is_optional());
    }

    #[test]
    fn record() {
        projects::<Record<Str, Unknown>, BTreeMap<String, Value>>();
        projects::<Record<Num, Optional<Str>>, BTreeMap<i64, Option<String>>>();
        projects::<Record<BigInt, Num>, BTreeMap<i128, f64>>();
        projects::<Record<Exact<&'static str>, Num>, BTreeMap<String, f64>>();
        let schema = <Record<Str, Num>>::schema();
        let record = schema.record_parts().unwrap();
        assert_eq!(record.keys().kind(), Some(Kind::String));
        assert_eq!(record.values().kind(), Some(Kind::Number));
    }

    #[test]
    fn literal_keys() {
        projects::<Record<Union<(ExactInt<1>, ExactInt<2>)>, Str>, BTreeMap<i64, String>>();
        projects::<Record<Union<(Str, Exact<String>)>, Num>, BTreeMap<String, f64>>();
        let schema = <Record<Union<(ExactInt<1>, ExactInt<2>)>, Str>>::schema();
        assert_eq!(schema.to_string(), "{ [key: 1 | 2]: string }");
    }
}
