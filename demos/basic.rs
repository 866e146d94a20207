use uriparts::{Uri, UriBase};

fn main() -> Result<(), uriparts::ParseError> {
    // Parse a simple URI
    let uri = Uri::parse("https://user@example.com:8080/path?query=value#hash")?;

    println!("URI: {}", uri.as_str()); // https://user@example.com:8080/path?query=value#hash
    println!("Scheme: {}", uri.scheme()); // https
    println!("Userinfo: {}", uri.userinfo()); // user
    println!("Host: {}", uri.host()); // example.com
    println!("Port: {}", uri.port()); // 8080
    println!("Path: {}", uri.path()); // /path
    println!("Query: {}", uri.query()); // query=value
    println!("Fragment: {}", uri.fragment()); // hash
    Ok(())
}
