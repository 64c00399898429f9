use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typed_schema::shape::*;
use typed_schema::*;

object_shape! {
    struct Post {
        text: Str,
        time: BigInt,
        tags: Optional<Array<Str>>,
        reactions: Record<Str, Num>,
        status: Union<(ExactInt<0>, ExactInt<1>, ExactInt<2>)>,
    }
}

fn untyped_post() -> Schema {
    Schema::object([
        ("text", Schema::STRING),
        ("time", Schema::BIGINT),
        ("tags", Schema::STRING.array().optional()),
        ("reactions", Schema::record(Schema::STRING, Schema::NUMBER)),
        (
            "status",
            Schema::union([Schema::exact(0), Schema::exact(1), Schema::exact(2)])
                .unwrap_or_default(),
        ),
    ])
}

fn build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.bench_function("typed_object", |b| b.iter(|| black_box(t::object::<Post>())));
    group.bench_function("untyped_object", |b| b.iter(|| black_box(untyped_post())));
    group.bench_function("modifiers", |b| {
        b.iter(|| black_box(t::string().array().nullable().optional().array()))
    });
    group.finish();

    let schema = t::object::<Post>();
    c.bench_function("display", |b| b.iter(|| black_box(schema.to_string())));
}

criterion_group!(benches, build);
criterion_main!(benches);
