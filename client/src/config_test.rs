use super::*;

#[test]
fn join_url_inserts_single_slash() {
    assert_eq!(join_url("http://api.test", "/auth/login"), "http://api.test/auth/login");
    assert_eq!(join_url("http://api.test/", "auth/login"), "http://api.test/auth/login");
    assert_eq!(join_url("http://api.test/", "/movies/"), "http://api.test/movies/");
}

#[test]
fn normalize_base_trims_and_defaults() {
    assert_eq!(normalize_base(" https://reviews.example.com/ "), "https://reviews.example.com");
    assert_eq!(normalize_base(""), DEFAULT_API_BASE_URL);
    assert_eq!(normalize_base("///"), DEFAULT_API_BASE_URL);
}

#[test]
fn api_url_has_no_double_slash_after_origin() {
    let url = api_url("/auth/register");
    assert!(url.ends_with("/auth/register"));
    assert!(!url.ends_with("//auth/register"));
}
