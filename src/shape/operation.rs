use super::{BaseShape, Shape, StaticShape};
use crate::schema::{Schema, TypeOperation};
use std::marker::PhantomData;

/// A tuple of shapes, combined by [`Union`] or [`Intersection`].
///
/// Implemented for tuples of one to eight shapes.
pub trait ShapeList {
    /// Accepted type when the shapes are unioned.
    type AnyOf;
    /// Accepted type when the shapes are intersected.
    type AllOf;
}

/// A tuple of static shapes.
pub trait StaticShapeList: ShapeList {
    fn schemas() -> Vec<Schema>;
}

/// Shape of a union schema over the tuple of shapes `L`.
pub struct Union<L>(PhantomData<fn() -> L>);

impl<L: ShapeList> Shape for Union<L> {
    type Output = L::AnyOf;
}

impl<L: ShapeList> BaseShape for Union<L> {}

impl<L: StaticShapeList> StaticShape for Union<L> {
    fn schema() -> Schema {
        Schema::operation_unchecked(TypeOperation::Union, L::schemas())
    }
}

/// Shape of an intersection schema over the tuple of shapes `L`.
pub struct Intersection<L>(PhantomData<fn() -> L>);

impl<L: ShapeList> Shape for Intersection<L> {
    type Output = L::AllOf;
}

impl<L: ShapeList> BaseShape for Intersection<L> {}

impl<L: StaticShapeList> StaticShape for Intersection<L> {
    fn schema() -> Schema {
        Schema::operation_unchecked(TypeOperation::Intersection, L::schemas())
    }
}

impl<A: Shape> ShapeList for (A,) {
    type AnyOf = A::Output;
    type AllOf = A::Output;
}

impl<A: StaticShape> StaticShapeList for (A,) {
    fn schemas() -> Vec<Schema> {
        vec![A::schema()]
    }
}

macro_rules! shape_list {
    ($any:ident, $all:ident; $($name:ident),+) => {
        /// Data accepted by a union: exactly one of the alternatives, in declaration order.
        #[derive(Clone, Debug, PartialEq)]
        pub enum $any<$($name),+> {
            $($name($name)),+
        }

        /// Data accepted by an intersection: one value per intersected schema.
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $all<$($name),+>($(pub $name),+);

        impl<$($name: Shape),+> ShapeList for ($($name,)+) {
            type AnyOf = $any<$($name::Output),+>;
            type AllOf = $all<$($name::Output),+>;
        }

        impl<$($name: StaticShape),+> StaticShapeList for ($($name,)+) {
            fn schemas() -> Vec<Schema> {
                vec![$($name::schema()),+]
            }
        }
    };
}

shape_list!(AnyOf2, AllOf2; A, B);
shape_list!(AnyOf3, AllOf3; A, B, C);
shape_list!(AnyOf4, AllOf4; A, B, C, D);
shape_list!(AnyOf5, AllOf5; A, B, C, D, E);
shape_list!(AnyOf6, AllOf6; A, B, C, D, E, F);
shape_list!(AnyOf7, AllOf7; A, B, C, D, E, F, G);
shape_list!(AnyOf8, AllOf8; A, B, C, D, E, F, G, H);
