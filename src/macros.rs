/// Build a union schema from a list of typed schemas.
///
/// Shorthand for [`t::union`][crate::t::union] without the tuple parentheses.
///
/// ```
/// # use typed_schema::{t, union};
/// let id = union![t::string(), t::number()];
/// assert_eq!(id, t::union((t::string(), t::number())));
/// ```
#[macro_export]
macro_rules! union {
    ($($item:expr),+ $(,)?) => {
        $crate::t::union(($($item,)+))
    };
}

/// Build an intersection schema from a list of typed schemas.
///
/// Shorthand for [`t::intersection`][crate::t::intersection] without the tuple parentheses.
#[macro_export]
macro_rules! intersection {
    ($($item:expr),+ $(,)?) => {
        $crate::t::intersection(($($item,)+))
    };
}

/// Declare an object shape: a struct holding the projected data, and the schema of each property.
///
/// Each field is declared with its *shape*; the struct field gets the type that shape accepts.
/// A field may also be given a typed schema expression with `= expr`, which is required for
/// shapes that carry runtime data (like [`Exact`][crate::shape::Exact]). The expression must have
/// exactly the declared shape, so the struct and the schema can't drift apart.
///
/// Build the schema with [`t::object`][crate::t::object].
///
/// ```
/// use typed_schema::{object_shape, t, shape::*};
///
/// object_shape! {
///     #[derive(Debug)]
///     pub struct Person {
///         pub name: Str,
///         pub nickname: Optional<Str>,
///         pub tags: Array<Str>,
///         pub kind: Exact<&'static str> = t::exact("person"),
///     }
/// }
///
/// let schema = t::object::<Person>();
/// assert_eq!(
///     schema.to_string(),
///     "{ name: string; nickname?: string; tags: string[]; kind: \"person\" }"
/// );
///
/// let person = Person {
///     name: "Ada".into(),
///     nickname: None,
///     tags: vec![],
///     kind: "person",
/// };
/// assert_eq!(person.name, "Ada");
/// ```
#[macro_export]
macro_rules! object_shape {
    (@schema $shape:ty) => {
        <$shape as $crate::shape::StaticShape>::schema()
    };
    (@schema $shape:ty, $value:expr) => {
        $crate::Typed::<$shape>::into_schema($value)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $shape:ty $(= $value:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $crate::shape::Infer<$shape>,
            )*
        }

        impl $crate::shape::Properties for $name {
            fn properties() -> ::std::vec::Vec<(&'static str, $crate::Schema)> {
                ::std::vec![
                    $(
                        (
                            ::std::stringify!($field),
                            $crate::object_shape!(@schema $shape $(, $value)?),
                        ),
                    )*
                ]
            }
        }
    };
}
