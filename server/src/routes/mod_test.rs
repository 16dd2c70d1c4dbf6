use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn route_list_covers_every_page() {
    let routes = generate_route_list(client::app::App);
    let paths: Vec<String> = routes.iter().map(|route| route.path().to_string()).collect();
    for expected in ["/login", "/register", "/dashboard", "/movies"] {
        assert!(paths.iter().any(|p| p == expected), "missing route {expected}: {paths:?}");
    }
}
