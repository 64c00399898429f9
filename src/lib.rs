//! typed-schema describes the shape of data by composing small schema builders, and derives the
//! Rust type of that data at compile time from the same description.
//!
//! A schema built here is two things at once:
//!
//! - A runtime value, [`Schema`]: a tagged description of scalars, objects, records, exact
//!     values, unions, and intersections, with array/optional/nullable modifier flags. It can be
//!     inspected and handed to whatever interprets schemas.
//! - A type-level *shape* (see [`shape`]), carried alongside the runtime value in [`Typed<S>`].
//!     [`Infer<S>`][shape::Infer] is the type of data the schema accepts.
//!
//! The typed builders live in [`t`]:
//!
//! | builder | accepted data |
//! |---|---|
//! | [`t::string`], [`t::number`], [`t::boolean`], [`t::bigint`] | `String`, `f64`, `bool`, `i128` |
//! | [`t::null`], [`t::undefined`] | `()` |
//! | [`t::unknown`] | [`Value`] |
//! | [`t::exact`] | the literal's type |
//! | [`t::object`] | a struct declared with [`object_shape!`] |
//! | [`t::record`] | `BTreeMap<K, V>` |
//! | [`t::array`], [`t::optional`], [`t::nullable`] | `Vec<T>`, `Option<T>`, `Option<T>` |
//! | [`t::union`], [`t::intersection`] | [`AnyOf2<A, B>`][shape::AnyOf2], [`AllOf2<A, B>`][shape::AllOf2], ... |
//!
//! This crate doesn't check data against schemas. It only builds and describes them.
//!
//! # Examples
//!
//! ```
//! use typed_schema::{object_shape, t, shape::*, union};
//! use std::collections::BTreeMap;
//!
//! object_shape! {
//!     struct Entry {
//!         value: Union<(Str, Num, Bool)> = union![t::string(), t::number(), t::boolean()],
//!         record: Record<Str, Unknown> = t::record(t::string(), t::unknown()),
//!     }
//! }
//!
//! let schema = t::object::<Entry>();
//! assert_eq!(
//!     schema.to_string(),
//!     "{ value: string | number | boolean; record: { [key: string]: unknown } }"
//! );
//!
//! // The projected struct, checked by the compiler
//! let entry = Entry {
//!     value: AnyOf3::B(5.0),
//!     record: BTreeMap::new(),
//! };
//! # let _ = (entry.value, entry.record);
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`Value`], [`to_value`], and
//!     [`t::try_exact`] for building exact schemas from any serializable value.

#[macro_use]
mod macros;

pub mod builder;
mod error;
pub mod schema;
#[cfg(feature = "serde")]
mod ser;
pub mod shape;
mod value;

pub use self::builder as t;
pub use self::builder::{Typed, TypedList};
pub use self::error::{Error, Result};
pub use self::schema::{Kind, Modifiers, Node, Schema, TypeOperation};
#[cfg(feature = "serde")]
pub use self::ser::to_value;
pub use self::value::Value;
