//! The end-to-end object scenario: a union-valued property next to a record-valued one, checked
//! both through the runtime tags and through the projected type.

use std::collections::BTreeMap;
use typed_schema::shape::*;
use typed_schema::*;

object_shape! {
    #[derive(Debug, PartialEq)]
    struct Entry {
        value: Union<(Str, Num, Bool)> = union![t::string(), t::number(), t::boolean()],
        record: Record<Str, Unknown> = t::record(t::string(), t::unknown()),
    }
}

object_shape! {
    #[derive(Debug)]
    pub struct Post {
        pub title: Str,
        pub views: Optional<Num>,
        pub tags: Array<Str>,
        pub author: Nullable<Object<Author>>,
        pub status: Union<(Exact<&'static str>, Exact<&'static str>)> =
            union![t::exact("draft"), t::exact("published")],
        pub version: ExactInt<2>,
    }
}

object_shape! {
    #[derive(Debug, Default)]
    pub struct Author {
        pub name: Str,
    }
}

fn projects<S: Shape<Output = T>, T>(_: &Typed<S>) {}

#[test]
fn runtime_tags() {
    let schema = t::object::<Entry>().into_schema();
    assert_eq!(schema.kind(), Some(Kind::Object));

    let properties = schema.properties().unwrap();
    assert_eq!(properties.len(), 2);

    let value = properties.get("value").unwrap();
    let operation = value.operation().unwrap();
    assert_eq!(operation.op(), TypeOperation::Union);
    let kinds: Vec<_> = operation.iter().map(Schema::kind).collect();
    assert_eq!(
        kinds,
        vec![Some(Kind::String), Some(Kind::Number), Some(Kind::Boolean)]
    );

    let record = properties.get("record").unwrap().record_parts().unwrap();
    assert_eq!(record.keys().kind(), Some(Kind::String));
    assert_eq!(record.values().kind(), Some(Kind::Unknown));

    assert_eq!(
        schema.to_string(),
        "{ value: string | number | boolean; record: { [key: string]: unknown } }"
    );
}

#[test]
fn projected_type() {
    let schema = t::object::<Entry>();
    projects::<_, Entry>(&schema);

    let mut record = BTreeMap::new();
    record.insert("anything".to_string(), Value::from(vec![Value::Null]));
    let entry = Entry {
        value: AnyOf3::C(true),
        record,
    };
    assert_eq!(entry.value, AnyOf3::C(true));
    assert_eq!(entry.record["anything"][0], Value::Null);
}

#[test]
fn same_schema_untyped() {
    let untyped = Schema::object([
        (
            "value",
            Schema::union([Schema::STRING, Schema::NUMBER, Schema::BOOLEAN]).unwrap(),
        ),
        ("record", Schema::record(Schema::STRING, Schema::UNKNOWN)),
    ]);
    assert_eq!(untyped, t::object::<Entry>().into_schema());
    assert_eq!(untyped, <Object<Entry> as StaticShape>::schema());
}

#[test]
fn nested_objects() {
    let schema = t::object::<Post>();
    assert_eq!(
        schema.to_string(),
        "{ title: string; views?: number; tags: string[]; \
         author: { name: string } | null; status: \"draft\" | \"published\"; version: 2 }"
    );

    let properties = schema.schema().properties().unwrap();
    assert_eq!(
        properties.required().collect::<Vec<_>>(),
        vec!["title", "tags", "author", "status", "version"]
    );

    let post = Post {
        title: "Hello".into(),
        views: None,
        tags: vec!["intro".into()],
        author: Some(Author::default()),
        status: AnyOf2::B("published"),
        version: 2,
    };
    assert_eq!(post.author.map(|a| a.name), Some(String::new()));
}
