use super::{BaseShape, Shape, StaticShape};
use crate::schema::Schema;
use crate::value::{Value, MAX_SAFE_INTEGER};
use std::marker::PhantomData;

/// Shape of an exact-value schema holding a `T`.
///
/// The literal itself lives only in the runtime schema, so this shape is not a [`StaticShape`].
/// A string literal projects to `&'static str`; pass an owned `String` to project to `String`.
pub struct Exact<T>(PhantomData<fn() -> T>);

impl<T> Shape for Exact<T> {
    type Output = T;
}

impl<T> BaseShape for Exact<T> {}

/// Shape of an exact integral number, with the literal carried in the type.
///
/// The runtime schema holds the literal as a [`Value::Number`] when an `f64` represents it
/// exactly (magnitude up to 2^53 - 1), and as a [`Value::BigInt`] otherwise, so distinct literals
/// always give distinct schemas.
pub struct ExactInt<const N: i64>;

impl<const N: i64> Shape for ExactInt<N> {
    type Output = i64;
}

impl<const N: i64> BaseShape for ExactInt<N> {}

impl<const N: i64> StaticShape for ExactInt<N> {
    fn schema() -> Schema {
        if N.unsigned_abs() <= MAX_SAFE_INTEGER {
            Schema::exact(Value::Number(N as f64))
        } else {
            Schema::exact(Value::BigInt(N as i128))
        }
    }
}

/// Shape of an exact boolean, with the literal carried in the type.
pub struct ExactBool<const B: bool>;

impl<const B: bool> Shape for ExactBool<B> {
    type Output = bool;
}

impl<const B: bool> BaseShape for ExactBool<B> {}

impl<const B: bool> StaticShape for ExactBool<B> {
    fn schema() -> Schema {
        Schema::exact(B)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn const_literals() {
        assert_eq!(ExactInt::<5>::schema(), Schema::exact(5));
        assert_ne!(ExactInt::<5>::schema(), Schema::exact(6));
        assert_eq!(ExactInt::<{ -2 }>::schema().exact_value(), Some(&Value::Number(-2.0)));
        assert_eq!(ExactBool::<true>::schema(), Schema::exact(true));
    }

    #[test]
    fn wide_literals_stay_distinct() {
        assert_ne!(
            ExactInt::<9007199254740993>::schema(),
            ExactInt::<9007199254740992>::schema()
        );
        assert_eq!(
            ExactInt::<9007199254740991>::schema().exact_value(),
            Some(&Value::Number(9007199254740991.0))
        );
        assert_eq!(
            ExactInt::<9007199254740992>::schema().exact_value(),
            Some(&Value::BigInt(9007199254740992))
        );
        assert_eq!(
            ExactInt::<{ i64::MIN }>::schema().exact_value(),
            Some(&Value::BigInt(i64::MIN as i128))
        );
        assert_eq!(ExactInt::<{ i64::MAX }>::schema().to_string(), "9223372036854775807n");
    }
}
