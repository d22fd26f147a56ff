mod common;

use axum::http::{StatusCode, header::COOKIE};
use common::{ACCESS_TOKEN, create_test_server, session_cookie, test_config};

/// Pulls the session id out of a `Set-Cookie` header value.
fn session_id_from(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("dashboard_session="))
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_login_sets_cookie_and_redirects_home() {
    let (server, _state) = create_test_server(&test_config());

    let response = server
        .post("/session")
        .form(&[("token", ACCESS_TOKEN)])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard");

    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Max-Age=3600"));
    assert!(!set_cookie.contains("Secure"));
    assert_eq!(session_id_from(set_cookie).len(), 48);
}

#[tokio::test]
async fn test_secure_cookie_when_configured() {
    let mut config = test_config();
    config.session_cookie_secure = true;
    let (server, _state) = create_test_server(&config);

    let response = server
        .post("/session")
        .form(&[("token", ACCESS_TOKEN)])
        .await;

    let set_cookie = response.header("set-cookie");
    assert!(set_cookie.to_str().unwrap().ends_with("; Secure"));
}

#[tokio::test]
async fn test_invalid_token_rerenders_login() {
    let (server, state) = create_test_server(&test_config());

    let response = server
        .post("/session")
        .form(&[("token", "wrong-token")])
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.text().contains("Invalid access token"));
    assert_eq!(state.sessions.active_sessions().await.unwrap(), 0);
}

#[tokio::test]
async fn test_full_login_logout_flow() {
    let (server, state) = create_test_server(&test_config());

    let login = server
        .post("/session")
        .form(&[("token", ACCESS_TOKEN)])
        .await;
    let set_cookie = login.header("set-cookie");
    let session_id = session_id_from(set_cookie.to_str().unwrap());

    let dashboard = server
        .get("/dashboard")
        .add_header(COOKIE, session_cookie(&session_id))
        .await;
    dashboard.assert_status_ok();

    let logout = server
        .post("/logout")
        .add_header(COOKIE, session_cookie(&session_id))
        .await;
    logout.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(logout.header("location"), "/login");
    assert!(
        logout
            .header("set-cookie")
            .to_str()
            .unwrap()
            .contains("Max-Age=0")
    );
    assert_eq!(state.sessions.active_sessions().await.unwrap(), 0);

    let after = server
        .get("/dashboard")
        .add_header(COOKIE, session_cookie(&session_id))
        .await;
    after.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(after.header("location"), "/login");
}

#[tokio::test]
async fn test_logout_without_session_still_redirects() {
    let (server, _state) = create_test_server(&test_config());

    let response = server.post("/logout").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[tokio::test]
async fn test_expired_session_is_denied() {
    let mut config = test_config();
    config.session_ttl_seconds = 1;
    let (server, state) = create_test_server(&config);
    let issued = state.sessions.login(ACCESS_TOKEN).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let response = server
        .get("/accounts")
        .add_header(COOKIE, session_cookie(&issued.id))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
    assert_eq!(state.sessions.active_sessions().await.unwrap(), 0);
}
