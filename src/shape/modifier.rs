use super::{BaseShape, Shape, StaticShape};
use crate::schema::Schema;
use std::marker::PhantomData;

/// Type-level `true` for a modifier flag.
pub enum Yes {}

/// Type-level `false` for a modifier flag.
pub enum No {}

/// A container a set flag wraps the accepted type in.
pub trait Wrap {
    type Wrapped<T>;
}

/// Wraps in a `Vec`. Used by the array flag.
pub enum AsVec {}

impl Wrap for AsVec {
    type Wrapped<T> = Vec<T>;
}

/// Wraps in an `Option`. Used by the optional and nullable flags.
pub enum AsOption {}

impl Wrap for AsOption {
    type Wrapped<T> = Option<T>;
}

/// A type-level boolean: [`Yes`] applies the wrapper, [`No`] leaves the type alone.
pub trait Flag {
    const SET: bool;
    type Apply<T, W: Wrap>;
}

impl Flag for Yes {
    const SET: bool = true;
    type Apply<T, W: Wrap> = W::Wrapped<T>;
}

impl Flag for No {
    const SET: bool = false;
    type Apply<T, W: Wrap> = T;
}

/// A base shape `B` with the array (`A`), optional (`O`), and nullable (`N`) flags.
///
/// Not usually named directly; use [`Array`], [`Optional`], and [`Nullable`]. The accepted type
/// is built outward from the base: `Option` for nullable, then `Vec` for array, then `Option` for
/// optional. Nullable applies to the elements of an array, so `Array<Nullable<Str>>` accepts
/// `Vec<Option<String>>`; a null-or-array value is a union with [`Null`][super::Null]. Optional
/// stays outermost, and an optional nullable field projects to `Option<Option<T>>`, keeping
/// "absent" and "null" apart.
pub struct Modified<B, A = No, O = No, N = No>(PhantomData<fn() -> (B, A, O, N)>);

impl<B: BaseShape, A: Flag, O: Flag, N: Flag> Shape for Modified<B, A, O, N> {
    type Output = O::Apply<A::Apply<N::Apply<B::Output, AsOption>, AsVec>, AsOption>;
}

impl<B, A, O, N> StaticShape for Modified<B, A, O, N>
where
    B: BaseShape + StaticShape,
    A: Flag,
    O: Flag,
    N: Flag,
{
    fn schema() -> Schema {
        let mut schema = B::schema();
        if A::SET {
            schema = schema.array();
        }
        if O::SET {
            schema = schema.optional();
        }
        if N::SET {
            schema = schema.nullable();
        }
        schema
    }
}

/// Applying a modifier to a shape.
///
/// Base shapes gain a [`Modified`] wrapper; already-modified shapes just set the flag. Applying
/// the same modifier twice therefore yields the same type as applying it once.
pub trait Modify: Shape {
    type WithArray: Shape;
    type WithOptional: Shape;
    type WithNullable: Shape;
}

impl<B: BaseShape> Modify for B {
    type WithArray = Modified<B, Yes, No, No>;
    type WithOptional = Modified<B, No, Yes, No>;
    type WithNullable = Modified<B, No, No, Yes>;
}

impl<B: BaseShape, A: Flag, O: Flag, N: Flag> Modify for Modified<B, A, O, N> {
    type WithArray = Modified<B, Yes, O, N>;
    type WithOptional = Modified<B, A, Yes, N>;
    type WithNullable = Modified<B, A, O, Yes>;
}

/// `S` as a sequence of its elements.
pub type Array<S> = <S as Modify>::WithArray;

/// `S`, or absent.
pub type Optional<S> = <S as Modify>::WithOptional;

/// `S`, or null.
pub type Nullable<S> = <S as Modify>::WithNullable;
