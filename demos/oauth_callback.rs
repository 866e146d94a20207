//! Handling an OAuth redirect delivered through a custom URL scheme.
//!
//! Run with: `cargo run --example oauth_callback -- 'myapp://oauth?code=abc&state=xyz'`
use uriparts::handle::{create, destroy};
use uriparts::{Component, UriBase};

fn handle_redirect(value: &str) {
    println!("{value}");
    let mut handle = create(value);
    let Some(uri) = handle.as_ref() else {
        println!("ignoring malformed callback");
        return;
    };
    if uri.host() != "oauth" {
        println!("ignoring callback for host {:?}", uri.c_str(Component::Host));
        destroy(&mut handle);
        return;
    }
    for (key, value) in uri.query_pairs() {
        if key == "code" {
            println!("authorization code: {value}");
        }
    }
    destroy(&mut handle);
}

fn main() {
    let value = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "myapp://oauth?code=def502&state=s3cr3t".to_string());
    handle_redirect(&value);
}
