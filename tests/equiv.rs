use http_url::Url;

fn equivalent(a: &str, b: &str) -> bool {
    Url::parse(a).unwrap().equivalent(&Url::parse(b).unwrap())
}

#[test]
fn equal_by_content() {
    assert!(equivalent("https://www.example.com", "https://www.example.com"));
}

#[test]
fn equal_with_default_https_port() {
    assert!(equivalent("https://www.example.com:443", "www.example.com"));
}

#[test]
fn equal_with_default_http_port() {
    assert!(equivalent("http://www.example.com:80", "http://www.example.com"));
}

#[test]
fn equal_with_same_explicit_port() {
    assert!(equivalent("http://www.example.com:8080", "http://www.example.com:8080"));
}

#[test]
fn equal_with_trailing_slash() {
    assert!(equivalent("https://www.example.com/", "https://www.example.com"));
    assert!(equivalent("https://www.example.com/a/b/c/", "https://www.example.com/a/b/c"));
}

#[test]
fn equal_with_escaped_path() {
    assert!(equivalent("https://www.example.com/a b", "https://www.example.com/a%20b"));
}

#[test]
fn equal_with_escaped_query() {
    assert!(equivalent("https://www.example.com?a= &b", "https://www.example.com?a=%20&b"));
}

#[test]
fn equal_with_escaped_fragment() {
    assert!(equivalent("https://www.example.com#anchor#", "https://www.example.com#anchor%23"));
}

#[test]
fn unequal_protocols() {
    assert!(!equivalent("http://www.example.com", "https://www.example.com"));
}

#[test]
fn unequal_hostnames() {
    assert!(!equivalent("https://example.com", "https://www.example.com"));
}

#[test]
fn unequal_ports() {
    assert!(!equivalent("https://www.example.com:8080", "https://www.example.com"));
    assert!(!equivalent("http://www.example.com:443", "http://www.example.com"));
}

#[test]
fn unequal_paths() {
    assert!(!equivalent("https://www.example.com/a", "https://www.example.com/b"));
    assert!(!equivalent("https://www.example.com/a", "https://www.example.com"));
}

#[test]
fn query_parameter_order_matters() {
    // Canonical comparison does not reorder or deduplicate.
    assert!(!equivalent("https://www.example.com?a=1&b=2", "https://www.example.com?b=2&a=1"));
}

#[test]
fn absent_and_empty_query_differ() {
    assert!(!equivalent("https://www.example.com?", "https://www.example.com"));
}

#[test]
fn absent_and_empty_fragment_differ() {
    assert!(!equivalent("https://www.example.com#", "https://www.example.com"));
}

#[test]
fn dot_segments_are_not_resolved() {
    assert!(!equivalent("https://www.example.com/a/../b", "https://www.example.com/b"));
}
