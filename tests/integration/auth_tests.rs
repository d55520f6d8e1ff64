use crate::common::{self, API_KEY, PASSWORD, SECRET, USERNAME};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::time::Duration;
use voat_client::constants::{FORM_CONTENT_TYPE, HTML_CONTENT_TYPE};
use voat_client::prelude::*;

async fn mock_password_grant(server: &mut ServerGuard, access_token: &str, expires_in: u64) -> Mock {
    server
        .mock("POST", "/oauth/token")
        .match_header("voat-apikey", API_KEY)
        .match_header("content-type", FORM_CONTENT_TYPE)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "password".into()),
            Matcher::UrlEncoded("username".into(), USERNAME.into()),
            Matcher::UrlEncoded("password".into(), PASSWORD.into()),
            Matcher::UrlEncoded("client_id".into(), API_KEY.into()),
            Matcher::UrlEncoded("client_secret".into(), SECRET.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::token_body(access_token, "refresh-1", expires_in))
        .create_async()
        .await
}

async fn mock_refresh_grant(
    server: &mut ServerGuard,
    refresh_token: &str,
    access_token: &str,
    hits: usize,
) -> Mock {
    server
        .mock("POST", "/oauth/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), refresh_token.into()),
            Matcher::UrlEncoded("client_id".into(), API_KEY.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::token_body(access_token, "refresh-2", 3600))
        .expect(hits)
        .create_async()
        .await
}

async fn mock_authorize_page(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("GET", "/oauth/authorize")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("response_type".into(), "code".into()),
            Matcher::UrlEncoded("scope".into(), "account".into()),
            Matcher::UrlEncoded("client_id".into(), API_KEY.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await
}

async fn mock_sign_in(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("POST", "/oauth/authorize")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), USERNAME.into()),
            Matcher::UrlEncoded("password".into(), PASSWORD.into()),
            Matcher::UrlEncoded("submit.Signin".into(), "Sign In".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await
}

async fn mock_grant(server: &mut ServerGuard, location: &str) -> Mock {
    server
        .mock("POST", "/oauth/authorize")
        .match_body(Matcher::UrlEncoded("submit.Grant".into(), "Grant".into()))
        .with_status(302)
        .with_header("location", location)
        .create_async()
        .await
}

const SIGN_IN_PAGE: &str = r#"<form><input type="submit" name="submit.Signin" value="Sign In"/></form>"#;
const GRANT_PAGE: &str = r#"<form><input type="submit" name="submit.Grant" value="Grant"/></form>"#;

fn third_party_config(server: &ServerGuard) -> Config {
    let mut config = common::test_config(server);
    config.third_party = true;
    config
}

fn log_in_kind(error: AppError) -> LogInErrorKind {
    match error {
        AppError::LogIn { kind, .. } => kind,
        other => panic!("Unexpected error: {:?}", other),
    }
}

fn token_kind(error: AppError) -> TokenErrorKind {
    match error {
        AppError::Token { kind, .. } => kind,
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_password_login() {
    let mut server = Server::new_async().await;
    let token = mock_password_grant(&mut server, "access-1", 3600).await;

    let client = VoatClient::new(common::test_config(&server))
        .await
        .expect("login");

    assert!(client.is_authenticated().await);
    assert!(client.auth().has_refresh_task());
    let data = client.auth_data().await.expect("auth data");
    assert_eq!(data.access_token, "access-1");
    assert_eq!(data.user_name.as_deref(), Some(USERNAME));
    token.assert_async().await;
}

#[tokio::test]
async fn test_login_sends_bearer_on_api_calls() {
    let mut server = Server::new_async().await;
    mock_password_grant(&mut server, "access-1", 3600).await;
    let status = server
        .mock("GET", "/api/v1/system/status")
        .match_header("voat-apikey", API_KEY)
        .match_header("authorization", "Bearer access-1")
        .with_body(r#"{"success": true, "data": {"online": true}}"#)
        .create_async()
        .await;

    let client = VoatClient::new(common::test_config(&server))
        .await
        .expect("login");
    let response = client.get_system_status().await.expect("status");

    assert_eq!(response.data["online"], true);
    status.assert_async().await;
}

#[tokio::test]
async fn test_third_party_login() {
    let mut server = Server::new_async().await;
    let authorize = mock_authorize_page(&mut server, SIGN_IN_PAGE).await;
    let sign_in = mock_sign_in(&mut server, GRANT_PAGE).await;
    let grant = mock_grant(&mut server, "https://example.com/callback?code=abc123").await;
    let token = server
        .mock("POST", "/oauth/token")
        .match_header("content-type", HTML_CONTENT_TYPE)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("code".into(), "abc123".into()),
            Matcher::UrlEncoded("client_secret".into(), SECRET.into()),
        ]))
        .with_body(common::token_body("access-tp", "refresh-tp", 3600))
        .create_async()
        .await;

    let client = VoatClient::new(third_party_config(&server))
        .await
        .expect("login");

    assert!(client.is_authenticated().await);
    assert_eq!(
        client.auth_data().await.expect("auth data").access_token,
        "access-tp"
    );
    authorize.assert_async().await;
    sign_in.assert_async().await;
    grant.assert_async().await;
    token.assert_async().await;
}

#[tokio::test]
async fn test_third_party_login_invalid_key() {
    let mut server = Server::new_async().await;
    mock_authorize_page(&mut server, "<html>Unknown client</html>").await;

    let error = VoatClient::new(third_party_config(&server))
        .await
        .err()
        .expect("should be Err");
    assert_eq!(log_in_kind(error), LogInErrorKind::InvalidKey);
}

#[tokio::test]
async fn test_third_party_login_invalid_password() {
    let mut server = Server::new_async().await;
    mock_authorize_page(&mut server, SIGN_IN_PAGE).await;
    mock_sign_in(&mut server, SIGN_IN_PAGE).await;

    let error = VoatClient::new(third_party_config(&server))
        .await
        .err()
        .expect("should be Err");
    assert_eq!(log_in_kind(error), LogInErrorKind::InvalidPassword);
}

#[tokio::test]
async fn test_third_party_login_invalid_redirection() {
    let mut server = Server::new_async().await;
    mock_authorize_page(&mut server, SIGN_IN_PAGE).await;
    mock_sign_in(&mut server, GRANT_PAGE).await;
    mock_grant(&mut server, "https://example.com/callback?error=access_denied").await;

    let error = VoatClient::new(third_party_config(&server))
        .await
        .err()
        .expect("should be Err");
    assert_eq!(log_in_kind(error), LogInErrorKind::InvalidRedirection);
}

#[tokio::test]
async fn test_token_endpoint_error_field() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/oauth/token")
        .with_status(400)
        .with_body(r#"{"error": "invalid_grant", "error_description": "bad password"}"#)
        .create_async()
        .await;

    let client = VoatClient::anonymous(common::test_config(&server)).expect("client");
    let error = client.login().await.unwrap_err();

    assert_eq!(token_kind(error), TokenErrorKind::ApiCallFailure);
    assert!(!client.is_authenticated().await);
    assert!(!client.auth().has_refresh_task());
}

#[tokio::test]
async fn test_token_endpoint_html_answer() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/oauth/token")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let client = VoatClient::anonymous(common::test_config(&server)).expect("client");
    let error = client.login().await.unwrap_err();

    assert_eq!(token_kind(error), TokenErrorKind::AccessTokenNotFound);
}

#[tokio::test]
async fn test_refresh_token() {
    let mut server = Server::new_async().await;
    mock_password_grant(&mut server, "access-1", 3600).await;
    let refresh = mock_refresh_grant(&mut server, "refresh-1", "access-2", 1).await;

    let client = VoatClient::new(common::test_config(&server))
        .await
        .expect("login");
    let data = client.refresh_token(None).await.expect("refresh");

    assert_eq!(data.access_token, "access-2");
    assert_eq!(
        client.auth_data().await.expect("auth data").refresh_token.as_deref(),
        Some("refresh-2")
    );
    assert!(client.auth().has_refresh_task());
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_with_auth_data_refreshes_with_saved_token() {
    let mut server = Server::new_async().await;
    let refresh = mock_refresh_grant(&mut server, "saved-refresh", "access-3", 1).await;
    let saved = AuthData::new("stale-access", Some("saved-refresh".to_string()), 3600);

    let client = VoatClient::with_auth_data(common::test_config(&server), saved)
        .await
        .expect("bypass");

    assert!(client.is_authenticated().await);
    assert_eq!(
        client.auth_data().await.expect("auth data").access_token,
        "access-3"
    );
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_with_auth_data_without_refresh_token() {
    let server = Server::new_async().await;
    let saved = AuthData::new("stale-access", None, 3600);

    let error = VoatClient::with_auth_data(common::test_config(&server), saved)
        .await
        .err()
        .expect("should be Err");
    assert_eq!(token_kind(error), TokenErrorKind::NotAuthenticated);
}

#[tokio::test]
async fn test_background_refresh() {
    let mut server = Server::new_async().await;
    mock_password_grant(&mut server, "access-1", 1).await;
    let refresh = mock_refresh_grant(&mut server, "refresh-1", "access-timer", 1).await;

    let client = VoatClient::new(common::test_config(&server))
        .await
        .expect("login");
    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert_eq!(
        client.auth_data().await.expect("auth data").access_token,
        "access-timer"
    );
    assert!(client.is_authenticated().await);
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_explicit_refresh_replaces_timer() {
    let mut server = Server::new_async().await;
    mock_password_grant(&mut server, "access-1", 1).await;
    let refresh = mock_refresh_grant(&mut server, "refresh-1", "access-2", 1).await;

    let client = VoatClient::new(common::test_config(&server))
        .await
        .expect("login");
    client.refresh_token(None).await.expect("refresh");
    tokio::time::sleep(Duration::from_millis(1500)).await;

    refresh.assert_async().await;
}

#[tokio::test]
async fn test_dropping_client_stops_refresh() {
    let mut server = Server::new_async().await;
    mock_password_grant(&mut server, "access-1", 1).await;
    let refresh = mock_refresh_grant(&mut server, "refresh-1", "access-2", 0).await;

    let client = VoatClient::new(common::test_config(&server))
        .await
        .expect("login");
    drop(client);
    tokio::time::sleep(Duration::from_millis(1500)).await;

    refresh.assert_async().await;
}

#[tokio::test]
async fn test_logout() {
    let mut server = Server::new_async().await;
    mock_password_grant(&mut server, "access-1", 3600).await;

    let client = VoatClient::new(common::test_config(&server))
        .await
        .expect("login");
    client.logout().await;

    assert!(!client.is_authenticated().await);
    assert!(client.auth_data().await.is_none());
    assert!(!client.auth().has_refresh_task());
    let error = client.refresh_token(None).await.unwrap_err();
    assert_eq!(token_kind(error), TokenErrorKind::NotAuthenticated);
}
