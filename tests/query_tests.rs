#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

//! Query pair tests
//!
//! Pairs are split on `&` and `=` and returned verbatim.

use uriparts::{QueryPairs, Uri, UriBase, UriRef};

#[test]
fn test_oauth_redirect() {
    let uri = Uri::parse("myapp://oauth?code=def502&state=s3cr3t").unwrap();
    assert_eq!(uri.host(), "oauth");
    assert_eq!(uri.query_param("code"), Some("def502"));
    assert_eq!(uri.query_param("state"), Some("s3cr3t"));
    assert_eq!(uri.query_param("missing"), None);
}

#[test]
fn test_pairs_in_order() {
    let uri = UriRef::parse("s://h/p?a=1&b=2&a=3#a=4").unwrap();
    let pairs: Vec<_> = uri.query_pairs().collect();
    assert_eq!(pairs, [("a", "1"), ("b", "2"), ("a", "3")]);
    assert_eq!(uri.query_param("a"), Some("1"));
}

#[test]
fn test_no_query() {
    let uri = Uri::parse("s://h/p#x=1").unwrap();
    assert_eq!(uri.query_pairs().count(), 0);

    let uri = Uri::parse("s://h/p?").unwrap();
    assert!(uri.has_query());
    assert_eq!(uri.query_pairs().count(), 0);
}

#[test]
fn test_pairs_are_not_decoded() {
    let uri = Uri::parse("s:?name=a+b%26c&x%3D=1").unwrap();
    let pairs: Vec<_> = uri.query_pairs().collect();
    assert_eq!(pairs, [("name", "a+b%26c"), ("x%3D", "1")]);
}

#[test]
fn test_standalone_iterator() {
    let pairs: Vec<_> = QueryPairs::new("?k&=v&&k2=").collect();
    assert_eq!(pairs, [("k", ""), ("", "v"), ("k2", "")]);
}
