use super::{BaseShape, Shape, StaticShape};
use crate::schema::Schema;
use crate::value::Value;

macro_rules! leaf_shape {
    ($(#[$meta:meta])* $name:ident => $output:ty, $schema:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Shape for $name {
            type Output = $output;
        }

        impl BaseShape for $name {}

        impl StaticShape for $name {
            fn schema() -> Schema {
                $schema
            }
        }
    };
}

leaf_shape!(
    /// Shape of [`t::string`][crate::t::string].
    Str => String, Schema::STRING
);
leaf_shape!(
    /// Shape of [`t::number`][crate::t::number].
    Num => f64, Schema::NUMBER
);
leaf_shape!(
    /// Shape of [`t::boolean`][crate::t::boolean].
    Bool => bool, Schema::BOOLEAN
);
leaf_shape!(
    /// Shape of [`t::bigint`][crate::t::bigint].
    BigInt => i128, Schema::BIGINT
);
leaf_shape!(
    /// Shape of [`t::null`][crate::t::null].
    Null => (), Schema::NULL
);
leaf_shape!(
    /// Shape of [`t::undefined`][crate::t::undefined].
    Undefined => (), Schema::UNDEFINED
);
leaf_shape!(
    /// Shape of [`t::unknown`][crate::t::unknown]. Accepts any [`Value`].
    Unknown => Value, Schema::UNKNOWN
);
