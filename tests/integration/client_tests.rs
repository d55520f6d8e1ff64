use crate::common::{self, API_KEY};
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use serde_json::json;
use voat_client::prelude::*;

fn client(server: &mockito::ServerGuard) -> VoatClient {
    VoatClient::anonymous(common::anonymous_config(server)).expect("client")
}

#[tokio::test]
async fn test_anonymous_calls_send_api_key_only() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/system/time")
        .match_header("voat-apikey", API_KEY)
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", "application/json; charset=UTF-8")
        .with_body(r#"{"success": true, "data": "2018-01-01T00:00:00"}"#)
        .create_async()
        .await;

    let response = client(&server).get_system_time().await.expect("time");

    assert_eq!(response.data, json!("2018-01-01T00:00:00"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_submissions_with_search_options() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/v/_front")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sort".into(), "top".into()),
            Matcher::UrlEncoded("span".into(), "day".into()),
            Matcher::UrlEncoded("count".into(), "10".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_body(r#"{"success": true, "data": [{"id": 1}]}"#)
        .create_async()
        .await;

    let options = SearchOptions::new()
        .with_sort(SearchSort::Top)
        .with_span(SearchSpan::Day)
        .with_count(10)
        .with_page(2);
    let response = client(&server)
        .get_submissions("_front", Some(&options))
        .await
        .expect("submissions");

    assert_eq!(response.data[0]["id"], 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_submission_cleans_title() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/v/test")
        .match_body(Matcher::Json(json!({
            "title": "fine tuning",
            "isAdult": false,
            "isAnonymized": false,
            "url": "https://example.com"
        })))
        .with_body(r#"{"success": true, "data": {"id": 7}}"#)
        .create_async()
        .await;

    let submission = NewSubmission::link("  ﬁne\u{200b}   tuning ", "https://example.com");
    client(&server)
        .post_submission("test", &submission)
        .await
        .expect("submission");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_submission_without_autoclean_sends_title_as_is() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/v/test")
        .match_body(Matcher::PartialJson(json!({"title": "ﬁne  tuning"})))
        .with_body(r#"{"success": true, "data": {"id": 8}}"#)
        .create_async()
        .await;

    let mut config = common::anonymous_config(&server);
    config.autoclean_titles = false;
    let client = VoatClient::anonymous(config).expect("client");
    client
        .post_submission("test", &NewSubmission::text("ﬁne  tuning", "body"))
        .await
        .expect("submission");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_submission_paths_with_and_without_subverse() {
    let mut server = Server::new_async().await;
    let by_subverse = common::mock_success(&mut server, "GET", "/api/v1/v/news/5", json!({})).await;
    let by_id = common::mock_success(&mut server, "DELETE", "/api/v1/submissions/5", json!({})).await;
    let edit = server
        .mock("PUT", "/api/v1/submissions/5")
        .match_body(Matcher::Json(json!({
            "isAdult": false,
            "isAnonymized": false,
            "title": "New title",
            "content": "edited"
        })))
        .with_body(r#"{"success": true, "data": {}}"#)
        .create_async()
        .await;

    let client = client(&server);
    client.get_submission(5, Some("news")).await.expect("get");
    client.delete_submission(5, None).await.expect("delete");
    let change = SubmissionEdit::new()
        .with_title("New  title")
        .with_content("edited");
    client.put_submission(5, None, &change).await.expect("put");

    by_subverse.assert_async().await;
    by_id.assert_async().await;
    edit.assert_async().await;
}

#[tokio::test]
async fn test_comment_paths() {
    let mut server = Server::new_async().await;
    let tree = common::mock_success(&mut server, "GET", "/api/v1/v/news/5/comments", json!([])).await;
    let branch =
        common::mock_success(&mut server, "GET", "/api/v1/v/news/5/comments/9/3", json!([])).await;
    let reply = server
        .mock("POST", "/api/v1/v/news/5/comment/9")
        .match_body(Matcher::Json(json!({"value": "agreed"})))
        .with_body(r#"{"success": true, "data": {}}"#)
        .create_async()
        .await;
    let saved = common::mock_success(&mut server, "POST", "/api/v1/comments/9/save", json!({})).await;

    let client = client(&server);
    // index alone is ignored without a parent
    client
        .get_comments("news", 5, None, Some(3), None)
        .await
        .expect("tree");
    client
        .get_comments("news", 5, Some(9), Some(3), None)
        .await
        .expect("branch");
    let target = CommentTarget::Reply {
        subverse: "news".to_string(),
        submission_id: 5,
        comment_id: 9,
    };
    client.post_comment(&target, "agreed").await.expect("reply");
    client.post_comments_save(9).await.expect("save");

    tree.assert_async().await;
    branch.assert_async().await;
    reply.assert_async().await;
    saved.assert_async().await;
}

#[tokio::test]
async fn test_vote_path_and_revoke_flag() {
    let mut server = Server::new_async().await;
    let down = server
        .mock("POST", "/api/v1/vote/comment/12/-1")
        .match_query(Matcher::UrlEncoded("revokeOnRevote".into(), "false".into()))
        .with_body(r#"{"success": true, "data": {}}"#)
        .create_async()
        .await;
    let up = server
        .mock("POST", "/api/v1/vote/submission/13/1")
        .with_body(r#"{"success": true, "data": {}}"#)
        .create_async()
        .await;

    let client = client(&server);
    client
        .post_vote(VoteType::Comment, 12, Vote::Down, Some(false))
        .await
        .expect("down");
    client
        .post_vote(VoteType::Submission, 13, Vote::Up, None)
        .await
        .expect("up");

    down.assert_async().await;
    up.assert_async().await;
}

#[tokio::test]
async fn test_user_and_message_endpoints() {
    let mut server = Server::new_async().await;
    let subscriptions =
        common::mock_success(&mut server, "GET", "/api/v1/u/subscriptions", json!([])).await;
    let user_subscriptions =
        common::mock_success(&mut server, "GET", "/api/v1/u/atko/subscriptions", json!([])).await;
    let inbox =
        common::mock_success(&mut server, "GET", "/api/v1/u/messages/inbox/unread", json!([])).await;
    let send = server
        .mock("POST", "/api/v1/u/messages")
        .match_body(Matcher::Json(json!({
            "message": "hello",
            "recipient": "atko",
            "subject": "hi"
        })))
        .with_body(r#"{"success": true, "data": {}}"#)
        .create_async()
        .await;
    let preferences = server
        .mock("PUT", "/api/v1/u/preferences")
        .match_body(Matcher::Json(json!({"disableCSS": true})))
        .with_body(r#"{"success": true, "data": {}}"#)
        .create_async()
        .await;

    let client = client(&server);
    client.get_user_subscriptions(None).await.expect("own");
    client
        .get_user_subscriptions(Some("atko"))
        .await
        .expect("user");
    client
        .get_messages(MessageType::Inbox, MessageState::Unread)
        .await
        .expect("inbox");
    client
        .post_messages(&NewMessage::new("hello", "atko", "hi"))
        .await
        .expect("send");
    client
        .put_preferences(&json!({"disableCSS": true}))
        .await
        .expect("preferences");

    subscriptions.assert_async().await;
    user_subscriptions.assert_async().await;
    inbox.assert_async().await;
    send.assert_async().await;
    preferences.assert_async().await;
}

#[tokio::test]
async fn test_user_submissions_accept_search_options() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/u/atko/submissions")
        .match_query(Matcher::UrlEncoded("sort".into(), "new".into()))
        .with_body(r#"{"success": true, "data": []}"#)
        .create_async()
        .await;

    let options = SearchOptions::new().with_sort(SearchSort::New);
    client(&server)
        .get_user_submissions("atko", Some(&options))
        .await
        .expect("submissions");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_subverse_and_stream_endpoints() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/api/v1/subverse/search")
        .match_query(Matcher::UrlEncoded("phrase".into(), "rust lang".into()))
        .with_body(r#"{"success": true, "data": []}"#)
        .create_async()
        .await;
    let block = common::mock_success(&mut server, "DELETE", "/api/v1/v/news/block", json!({})).await;
    let stream = common::mock_success(&mut server, "GET", "/api/v1/stream/comments", json!([])).await;

    let client = client(&server);
    client.get_subverse_search("rust lang").await.expect("search");
    client.delete_subverse_block("news").await.expect("unblock");
    client.get_stream_comments().await.expect("stream");

    search.assert_async().await;
    block.assert_async().await;
    stream.assert_async().await;
}

#[tokio::test]
async fn test_unsuccessful_envelope_is_api_call_error() {
    let mut server = Server::new_async().await;
    let document = json!({
        "success": false,
        "error": {"type": "NotFound", "message": "Subverse 'nope' does not exist"}
    });
    server
        .mock("GET", "/api/v1/v/nope/info")
        .with_status(404)
        .with_body(document.to_string())
        .create_async()
        .await;

    match client(&server).get_subverse_info("nope").await {
        Err(AppError::ApiCall { message, data }) => {
            assert_eq!(message, "Subverse 'nope' does not exist");
            assert_json_eq!(data, document);
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_answer_is_connection_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/subverse/defaults")
        .with_status(520)
        .with_header("content-type", "text/html")
        .with_body("<html>Web server is returning an unknown error</html>")
        .create_async()
        .await;

    match client(&server).get_subverse_defaults().await {
        Err(AppError::Connection { status, .. }) => assert_eq!(status.as_u16(), 520),
        other => panic!("Unexpected result: {:?}", other),
    }
}
