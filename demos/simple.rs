use std::collections::BTreeMap;
use typed_schema::shape::*;
use typed_schema::*;

object_shape! {
    #[derive(Debug)]
    struct Post {
        text: Str,
        time: BigInt,
        tags: Optional<Array<Str>>,
        reactions: Record<Str, Num>,
        visibility: Union<(Exact<&'static str>, Exact<&'static str>)> =
            union![t::exact("public"), t::exact("followers")],
    }
}

object_shape! {
    #[derive(Debug)]
    struct Feed {
        name: Str,
        posts: Array<Object<Post>>,
        pinned: Nullable<Object<Post>>,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Declare the schema for a feed of text posts
    let schema = t::object::<Feed>().with_comment("A feed of short text posts");
    log::info!("feed schema: {}", schema);

    // The runtime description can be taken apart again
    let properties = schema.schema().properties().expect("feed is an object schema");
    for (name, child) in properties {
        log::info!("  {} -> kind {:?}, {:?}", name, child.kind(), child.modifiers());
    }

    // And the compiler knows what data it describes
    let feed: Infer<Object<Feed>> = Feed {
        name: "My Text Posts".into(),
        posts: vec![Post {
            text: "This is my very first post.".into(),
            time: 1_700_000_000,
            tags: None,
            reactions: BTreeMap::from([("like".to_string(), 3.0)]),
            visibility: AnyOf2::A("public"),
        }],
        pinned: None,
    };
    println!("{:#?}", feed);

    // Dynamically assembled schemas work too, with the emptiness check done at runtime
    match Schema::union(Vec::new()) {
        Ok(schema) => println!("unexpected schema: {}", schema),
        Err(e) => println!("rejected: {}", e),
    }
}
