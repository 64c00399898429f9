//! Rendering of the accepted type, in TypeScript-like notation.
//!
//! Modifiers apply outward from the node: `| null` first, then the array suffix, then
//! `| undefined`. A nullable array is thus an array of nullable elements, `(T | null)[]`. Optional object properties are written as `name?: T` instead of carrying
//! `| undefined`.

use super::{Node, Schema, TypeOperation};
use crate::value::write_property_name;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    Top,
    Property,
    UnionMember,
    IntersectionMember,
    ArrayElement,
}

fn write_schema(f: &mut fmt::Formatter, schema: &Schema, pos: Position) -> fmt::Result {
    let modifiers = schema.modifiers();
    let optional = modifiers.optional && pos != Position::Property;
    // Nullable on an array applies to its elements and stays inside the brackets.
    let outer_union = optional || (modifiers.nullable && !modifiers.array);
    let wrap = outer_union && matches!(pos, Position::IntersectionMember | Position::ArrayElement);

    if wrap {
        f.write_str("(")?;
    }
    if modifiers.array {
        if modifiers.nullable {
            f.write_str("(")?;
            write_node(f, schema.node(), Position::UnionMember)?;
            f.write_str(" | null)")?;
        } else {
            write_node(f, schema.node(), Position::ArrayElement)?;
        }
        f.write_str("[]")?;
    } else if outer_union {
        write_node(f, schema.node(), Position::UnionMember)?;
        if modifiers.nullable {
            f.write_str(" | null")?;
        }
    } else {
        write_node(f, schema.node(), pos)?;
    }
    if optional {
        f.write_str(" | undefined")?;
    }
    if wrap {
        f.write_str(")")?;
    }
    Ok(())
}

fn write_node(f: &mut fmt::Formatter, node: &Node, pos: Position) -> fmt::Result {
    match node {
        Node::String => f.write_str("string"),
        Node::Number => f.write_str("number"),
        Node::Boolean => f.write_str("boolean"),
        Node::BigInt => f.write_str("bigint"),
        Node::Null => f.write_str("null"),
        Node::Undefined => f.write_str("undefined"),
        Node::Unknown => f.write_str("unknown"),
        Node::Exact(exact) => write!(f, "{}", exact.value()),
        Node::Object(object) => {
            if object.is_empty() {
                return f.write_str("{}");
            }
            f.write_str("{ ")?;
            for (i, (name, child)) in object.iter().enumerate() {
                if i > 0 {
                    f.write_str("; ")?;
                }
                write_property_name(f, name)?;
                f.write_str(if child.is_optional() { "?: " } else { ": " })?;
                write_schema(f, child, Position::Property)?;
            }
            f.write_str(" }")
        }
        Node::Record(record) => {
            f.write_str("{ [key: ")?;
            write_schema(f, record.keys(), Position::Top)?;
            f.write_str("]: ")?;
            write_schema(f, record.values(), Position::Top)?;
            f.write_str(" }")
        }
        Node::Operation(operation) => {
            if let [only] = operation.items() {
                return write_schema(f, only, pos);
            }
            let (member, wrap) = match operation.op() {
                TypeOperation::Union => (
                    Position::UnionMember,
                    matches!(pos, Position::IntersectionMember | Position::ArrayElement),
                ),
                TypeOperation::Intersection => {
                    (Position::IntersectionMember, pos == Position::ArrayElement)
                }
            };
            if wrap {
                f.write_str("(")?;
            }
            for (i, item) in operation.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", operation.op().symbol())?;
                }
                write_schema(f, item, member)?;
            }
            if wrap {
                f.write_str(")")?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_schema(f, self, Position::Top)
    }
}
