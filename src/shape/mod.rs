//! Compile-time projection of schemas to the data types they accept.
//!
//! Every typed schema ([`Typed<S>`][crate::Typed]) carries a zero-sized *shape* type `S`. Shapes
//! mirror the runtime [`Schema`] tags one-to-one, and each one names the Rust type of data it
//! accepts through [`Shape::Output`]. [`Infer<S>`] is shorthand for that type.
//!
//! | shape | accepted data |
//! |---|---|
//! | [`Str`] | `String` |
//! | [`Num`] | `f64` |
//! | [`Bool`] | `bool` |
//! | [`BigInt`] | `i128` |
//! | [`Null`], [`Undefined`] | `()` |
//! | [`Unknown`] | [`Value`][crate::Value] |
//! | [`Exact<T>`] | `T` |
//! | [`ExactInt<N>`], [`ExactBool<B>`] | `i64`, `bool` |
//! | [`Object<P>`] | `P`, a struct declared with [`object_shape!`][crate::object_shape] |
//! | [`Record<K, V>`] | `BTreeMap<K::Key, Infer<V>>` |
//! | [`Union<(A, B, ..)>`][Union] | [`AnyOf2<Infer<A>, Infer<B>>`][AnyOf2], ... |
//! | [`Intersection<(A, B, ..)>`][Intersection] | [`AllOf2<Infer<A>, Infer<B>>`][AllOf2], ... |
//! | [`Array<S>`] | `Vec<Infer<S>>` |
//! | [`Nullable<S>`] | `Option<Infer<S>>` |
//! | [`Optional<S>`] | `Option<Infer<S>>` |
//!
//! Modifiers combine from the inside out: nullable, then array, then optional. A nullable array
//! accepts `Vec<Option<T>>`; a null-or-array value is `Union<(Array<S>, Null)>`.
//!
//! Rust has no literal types, so exact values project to the type of the literal itself rather
//! than to the single value.
//!
//! # Examples
//!
//! ```
//! use typed_schema::shape::*;
//! use std::collections::BTreeMap;
//!
//! fn projects<S: Shape<Output = T>, T>() {}
//!
//! projects::<Array<Optional<Num>>, Option<Vec<f64>>>();
//! projects::<Record<Str, Unknown>, BTreeMap<String, typed_schema::Value>>();
//! projects::<Union<(Str, Num)>, AnyOf2<String, f64>>();
//! projects::<Array<Nullable<Str>>, Vec<Option<String>>>();
//! ```

mod exact;
mod leaf;
mod modifier;
mod object;
mod operation;

pub use self::exact::*;
pub use self::leaf::*;
pub use self::modifier::*;
pub use self::object::*;
pub use self::operation::*;

use crate::schema::Schema;

/// A type-level description of a schema.
pub trait Shape {
    /// The type of data the schema accepts.
    type Output;
}

/// The data type accepted by the shape `S`.
pub type Infer<S> = <S as Shape>::Output;

/// A shape without any modifier applied.
///
/// Modifiers only ever wrap a base shape once; see [`Modify`].
pub trait BaseShape: Shape {}

/// A shape that fully determines its runtime schema.
///
/// Every shape except the value-carrying [`Exact<T>`] is static.
pub trait StaticShape: Shape {
    fn schema() -> Schema;
}
