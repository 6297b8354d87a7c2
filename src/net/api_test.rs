use super::*;

#[test]
fn bearer_value_prefixes_token() {
    assert_eq!(bearer_value("abc"), "Bearer abc");
}

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status("me", 200), Ok(()));
    assert_eq!(check_status("logout", 204), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    assert_eq!(check_status("me", 401), Err(ApiError::Status { operation: "me", status: 401 }));
    assert_eq!(check_status("login", 302), Err(ApiError::Status { operation: "login", status: 302 }));
    assert_eq!(check_status("refresh", 500), Err(ApiError::Status { operation: "refresh", status: 500 }));
}

#[test]
fn http_api_keeps_config() {
    let api = HttpAuthApi::new(ApiConfig::new("https://ops.example.com/"));
    assert_eq!(api.config().base_url(), "https://ops.example.com");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn every_call_is_unavailable_outside_browser() {
    use futures::executor::block_on;

    let api = HttpAuthApi::default();
    assert_eq!(block_on(api.fetch_current_user()), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.login("u", "p")), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.logout()), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.refresh_session()), Err(ApiError::Unavailable));
}
