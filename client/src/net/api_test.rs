use super::*;

#[test]
fn interpret_response_decodes_token_on_success() {
    let token: TokenResponse =
        interpret_response(200, r#"{"access_token":"jwt-abc","token_type":"bearer"}"#).unwrap();
    assert_eq!(token.access_token, "jwt-abc");
}

#[test]
fn interpret_response_rejects_non_success_status_with_detail() {
    let err = interpret_response::<TokenResponse>(401, r#"{"detail":"Invalid username or password"}"#)
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected { status: 401, detail: Some("Invalid username or password".to_owned()) }
    );
}

#[test]
fn interpret_response_rejects_redirect_and_server_errors() {
    assert!(matches!(
        interpret_response::<RegisteredUser>(302, ""),
        Err(ApiError::Rejected { status: 302, detail: None })
    ));
    assert!(matches!(
        interpret_response::<RegisteredUser>(503, "Service Unavailable"),
        Err(ApiError::Rejected { status: 503, detail: None })
    ));
}

#[test]
fn interpret_response_treats_undecodable_success_body_as_network_error() {
    let err = interpret_response::<TokenResponse>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn interpret_response_accepts_any_json_object_for_registration() {
    let user: RegisteredUser = interpret_response(201, "{}").unwrap();
    assert_eq!(user, RegisteredUser::default());
}

#[test]
fn unreadable_body_is_a_network_error_even_on_rejection() {
    let err = interpret_read::<TokenResponse>(401, Err(ApiError::Network("body stream aborted".to_owned())))
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message("Login failed"), "Network error. Please try again.");
}

#[test]
fn readable_body_is_interpreted_as_usual() {
    let err = interpret_read::<RegisteredUser>(400, Ok(r#"{"detail":"Username taken"}"#.to_owned())).unwrap_err();
    assert_eq!(err.user_message("Registration failed"), "Username taken");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn endpoint_paths_match_api_routes() {
    assert_eq!(LOGIN_PATH, "/auth/login");
    assert_eq!(REGISTER_PATH, "/auth/register");
    assert_eq!(LOGOUT_PATH, "/auth/logout");
    assert_eq!(MOVIES_PATH, "/movies/");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_fail_as_network_errors_outside_the_browser() {
    let result = futures::executor::block_on(login(&LoginForm::default()));
    assert!(matches!(result, Err(ApiError::Network(_))));

    let result = futures::executor::block_on(fetch_movies());
    assert!(matches!(result, Err(ApiError::Network(_))));
}
