use typed_schema::shape::*;
use typed_schema::*;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn projects<S: Shape<Output = T>, T>(_: &Typed<S>) {}

#[test]
fn leaf_kinds_are_stable() {
    let leaves = [
        (t::string().into_schema(), Kind::String),
        (t::number().into_schema(), Kind::Number),
        (t::boolean().into_schema(), Kind::Boolean),
        (t::bigint().into_schema(), Kind::BigInt),
        (t::null().into_schema(), Kind::Null),
        (t::undefined().into_schema(), Kind::Undefined),
        (t::unknown().into_schema(), Kind::Unknown),
    ];
    for (schema, kind) in leaves {
        assert_eq!(schema.kind(), Some(kind));
        assert!(schema.modifiers().is_empty());
    }
    assert_eq!(t::string(), t::string());
}

#[test]
fn leaves_in_const_position() {
    const NAME: Typed<Str> = t::string();
    static COUNT: Typed<Num> = t::number();
    assert_eq!(NAME.schema(), &Schema::STRING);
    assert_eq!(COUNT.schema(), &Schema::NUMBER);
}

#[test]
fn array_is_a_flag() {
    init_logs();
    let nested = t::array(t::array(t::string()));
    projects::<_, Vec<String>>(&nested);
    assert!(nested.schema().is_array());
    assert_eq!(nested.schema().node(), &Node::String);
    assert_eq!(nested.to_string(), "string[]");
}

#[test]
fn optional_and_nullable_once() {
    init_logs();
    let optional = t::optional(t::optional(t::number()));
    projects::<_, Option<f64>>(&optional);
    assert_eq!(optional, t::optional(t::number()));

    let nullable = t::nullable(t::nullable(t::number()));
    projects::<_, Option<f64>>(&nullable);
    assert_eq!(nullable, t::nullable(t::number()));
    assert_eq!(nullable.to_string(), "number | null");
}

#[test]
fn nullable_array_elements() {
    let maybe_names = t::array(t::nullable(t::string()));
    projects::<_, Vec<Option<String>>>(&maybe_names);
    assert_eq!(maybe_names.to_string(), "(string | null)[]");
    assert_eq!(maybe_names, t::nullable(t::array(t::string())));

    let names_or_null = union![t::array(t::string()), t::null()];
    projects::<_, AnyOf2<Vec<String>, ()>>(&names_or_null);
    assert_eq!(names_or_null.to_string(), "string[] | null");
    assert_ne!(maybe_names.to_string(), names_or_null.to_string());
}

#[test]
fn modifiers_keep_original() {
    let base = t::record(t::string(), t::number());
    let optional = base.clone().optional();
    assert!(!base.schema().is_optional());
    assert!(optional.schema().is_optional());
    assert_eq!(base.schema().node(), optional.schema().node());
}

#[test]
fn union_and_intersection() {
    let either = union![t::string(), t::number()];
    projects::<_, AnyOf2<String, f64>>(&either);
    let items = either.schema().operation().unwrap().items();
    assert_eq!(items, &[Schema::STRING, Schema::NUMBER]);

    let both = intersection![t::record(t::string(), t::unknown()), t::record(t::string(), t::string())];
    projects::<_, AllOf2<std::collections::BTreeMap<String, Value>, std::collections::BTreeMap<String, String>>>(&both);
    assert_eq!(
        both.to_string(),
        "{ [key: string]: unknown } & { [key: string]: string }"
    );

    // Trailing commas and single items
    let single = union![t::boolean(),];
    projects::<_, bool>(&single);
    assert_eq!(single.schema().operation().unwrap().len(), 1);
}

#[test]
fn null_and_undefined_are_leaves() {
    let nullable = t::nullable(t::string());
    let union = union![t::string(), t::null()];
    projects::<_, Option<String>>(&nullable);
    projects::<_, AnyOf2<String, ()>>(&union);
    assert_eq!(nullable.to_string(), union.to_string());
    assert_ne!(nullable.into_schema(), union.into_schema());
}

#[test]
fn exact_values() {
    let five = t::exact(5);
    projects::<_, i32>(&five);
    assert_eq!(five.schema().exact_value(), Some(&Value::from(5)));
    assert_ne!(five.schema(), t::exact(6).schema());
    assert_ne!(five.schema(), t::exact("5").schema());
    assert_ne!(five.schema(), t::exact(5i64).schema());

    let list = t::exact(vec![Value::from(1), Value::from("a")]);
    assert_eq!(list.to_string(), "[1, \"a\"]");

    let pair = t::exact(vec![1, 2]);
    projects::<_, Vec<i32>>(&pair);
    assert_eq!(pair.to_string(), "[1, 2]");
    let lookup = t::exact(std::collections::BTreeMap::from([("on".to_string(), true)]));
    assert_eq!(lookup.to_string(), "{ on: true }");
}

#[test]
fn untyped_empty_operations() {
    init_logs();
    assert_eq!(
        Schema::union(std::iter::empty()).unwrap_err(),
        Error::EmptyOperation(TypeOperation::Union)
    );
    let err = Schema::intersection(Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "intersection needs at least one schema");
}

#[test]
fn untyped_duplicate_property() {
    init_logs();
    let schema = Schema::object([("id", Schema::STRING), ("id", Schema::BIGINT)]);
    assert_eq!(schema.to_string(), "{ id: bigint }");
}

#[test]
fn into_schema_conversions() {
    let typed = t::array(t::boolean()).with_comment("Flags");
    let schema: Schema = typed.clone().into();
    assert_eq!(&schema, typed.as_ref());
    assert_eq!(schema.comment(), "Flags");
}
