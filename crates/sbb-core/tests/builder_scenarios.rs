//! End-to-end usage scenarios for the builder

use sbb_core::{sbb, shown, Builder, Enclosure};
use std::fmt;
use std::thread;

#[test]
fn empty_builder_builds_empty_text() {
    assert_eq!(Builder::new().build(), "");
}

#[test]
fn seeded_builder_builds_seed() {
    assert_eq!(sbb("Hello").build(), "Hello");
}

#[test]
fn words_joined_with_space() {
    let text = Builder::new().append("Hello").space().append("World").build();
    assert_eq!(text, "Hello World");
}

#[test]
fn double_quoted_value() {
    assert_eq!(Builder::new().double_quote("text").build(), "\"text\"");
}

#[test]
fn absent_value_between_fragments() {
    assert_eq!(sbb("a").append(None::<&str>).append("b").build(), "ab");
}

#[test]
fn builder_is_reusable_after_build() {
    let mut builder = sbb("first");
    assert_eq!(builder.build(), "first");
    assert_eq!(builder.build(), "");
    assert_eq!(builder.append("second").build(), "second");
}

#[test]
fn mixed_value_types() {
    let text = sbb(1)
        .append(2.5)
        .append(true)
        .append('c')
        .append(String::from("s"))
        .build();
    assert_eq!(text, "12.5truecs");
}

#[test]
fn sql_like_statement() {
    let table = "users";
    let column = "name";
    let value = "John";

    let text = sbb("SELECT")
        .w()
        .append("*")
        .w()
        .append("FROM")
        .w()
        .append(table)
        .w()
        .append("WHERE")
        .w()
        .append(column)
        .w()
        .append("=")
        .w()
        .sq(value)
        .build();

    assert_eq!(text, "SELECT * FROM users WHERE name = 'John'");
}

#[test]
fn json_like_text() {
    let text = Builder::new()
        .append("{")
        .dq("key")
        .append(":")
        .w()
        .dq("value")
        .append("}")
        .build();
    assert_eq!(text, "{\"key\": \"value\"}");
}

#[test]
fn html_like_tags() {
    let text = Builder::new()
        .ab("div")
        .append("content")
        .ab("/div")
        .build();
    assert_eq!(text, "<div>content</div>");
}

#[test]
fn multiline_log_entry() {
    let text = sbb("Line1")
        .n()
        .t()
        .append("indented")
        .coma()
        .w()
        .append("done")
        .dot()
        .build();
    assert_eq!(text, "Line1\n\tindented, done.");
}

#[test]
fn nested_builders() {
    let inner = sbb("inner").w().p("nested").build();
    let outer = sbb("outer").w().sb(inner.as_str()).build();
    assert_eq!(outer, "outer [inner (nested)]");
}

#[test]
fn wrap_every_enclosure_without_escaping() {
    for enclosure in Enclosure::ALL {
        let value = format!("a{}b{}c", enclosure.open(), enclosure.close());
        let text = Builder::new().wrap(enclosure, value.as_str()).build();
        assert_eq!(
            text,
            format!("{}{}{}", enclosure.open(), value, enclosure.close())
        );
    }
}

#[test]
fn custom_display_type() {
    struct Version {
        major: u32,
        minor: u32,
    }

    impl fmt::Display for Version {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "v{}.{}", self.major, self.minor)
        }
    }

    let version = Version { major: 1, minor: 4 };
    let text = sbb("release").w().p(shown(&version)).build();
    assert_eq!(text, "release (v1.4)");
}

#[test]
fn independent_builders_across_threads() {
    let results: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                scope.spawn(move || {
                    let mut builder = sbb("thread");
                    builder.space().sb(i);
                    for j in 0..100 {
                        builder.append(j % 10);
                    }
                    builder.build()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let digits: String = (0..100).map(|j| char::from(b'0' + (j % 10) as u8)).collect();
    for (i, text) in results.iter().enumerate() {
        assert_eq!(text, &format!("thread [{}]{}", i, digits));
    }
}

#[test]
fn builder_moves_between_threads() {
    let mut builder = sbb("started");
    builder.space();

    let handle = thread::spawn(move || {
        builder.append("finished");
        builder
    });

    let mut builder = handle.join().unwrap();
    assert_eq!(builder.build(), "started finished");
}
