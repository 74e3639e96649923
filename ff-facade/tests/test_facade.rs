//! Integration tests for the facade over a stub Graph client.
//!
//! Covers user lookup, friends extraction, profile URLs, every picture call
//! shape, and forwarding of unknown operations.

mod common;

use common::{facade, StubGraph};
use ff_core::error::FbError;
use ff_facade::{PictureArg, PictureSpec};
use serde_json::{json, Value};

// ---- get_user ----

#[tokio::test]
async fn get_user_without_session_is_none() {
    let fb = facade(StubGraph::new());
    assert!(fb.get_user(None).await.unwrap().is_none());
    // Only the session check, no /me fetch.
    assert_eq!(fb.client().calls(), vec!["session"]);
}

#[tokio::test]
async fn get_user_with_session_fetches_me() {
    let fb = facade(StubGraph::new().logged_in("100"));
    let me = fb.get_user(None).await.unwrap().unwrap();
    assert_eq!(me["id"], "100");
    assert_eq!(fb.client().calls(), vec!["session", "GET /me"]);
}

#[tokio::test]
async fn get_user_by_id() {
    let fb = facade(StubGraph::new().respond("/4", json!({"id": "4", "name": "Mark"})));
    let user = fb.get_user(Some("4")).await.unwrap().unwrap();
    assert_eq!(user["name"], "Mark");
}

#[tokio::test]
async fn get_user_by_id_propagates_client_errors() {
    let fb = facade(StubGraph::new());
    let err = fb.get_user(Some("does-not-exist")).await.unwrap_err();
    assert!(matches!(err, FbError::GraphApi { code: 803, .. }));
}

// ---- get_friends ----

#[tokio::test]
async fn get_friends_returns_data() {
    let fb = facade(StubGraph::new().respond(
        "/me/friends",
        json!({
            "data": [{"id": "1", "name": "A"}, {"id": "2", "name": "B"}],
            "paging": {"next": "https://graph.facebook.com/me/friends?after=xyz"}
        }),
    ));
    let friends = fb.get_friends().await.unwrap();
    assert_eq!(friends.len(), 2);
    assert_eq!(friends[1]["name"], "B");
}

#[tokio::test]
async fn get_friends_empty_list() {
    let fb = facade(StubGraph::new().respond("/me/friends", json!({"data": []})));
    assert!(fb.get_friends().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_friends_missing_data() {
    let fb = facade(StubGraph::new().respond("/me/friends", json!({"paging": {}})));
    let err = fb.get_friends().await.unwrap_err();
    assert!(matches!(err, FbError::MissingField(ref f) if f == "data"));
}

#[tokio::test]
async fn get_friends_rejects_non_list_data() {
    let fb = facade(StubGraph::new().respond("/me/friends", json!({"data": "nope"})));
    let err = fb.get_friends().await.unwrap_err();
    assert!(matches!(err, FbError::Serialization(_)));
}

// ---- get_profile_url ----

#[test]
fn profile_url_is_verbatim() {
    let fb = facade(StubGraph::new());
    assert_eq!(fb.get_profile_url("42"), "http://facebook.com/profile.php?id=42");
    assert_eq!(fb.get_profile_url(""), "http://facebook.com/profile.php?id=");
    assert_eq!(fb.get_profile_url("%%garbage"), "http://facebook.com/profile.php?id=%%garbage");
}

// ---- get_profile_picture_url ----

#[tokio::test]
async fn picture_no_args_is_square_of_current_user() {
    let fb = facade(StubGraph::new().logged_in("100"));
    let url = fb.get_profile_picture_url_from_args(&[]).await.unwrap();
    assert_eq!(url, "https://graph.facebook.com/100/picture?type=square");
}

#[tokio::test]
async fn picture_no_args_without_session_fails() {
    let fb = facade(StubGraph::new());
    let err = fb.get_profile_picture_url_from_args(&[]).await.unwrap_err();
    assert!(matches!(err, FbError::NoCurrentUser));
}

#[tokio::test]
async fn picture_numeric_strings_are_ids() {
    let fb = facade(StubGraph::new().logged_in("100"));
    for id in ["123", "4", "100001234567890", " 42"] {
        let url = fb
            .get_profile_picture_url_from_args(&[id.into()])
            .await
            .unwrap();
        assert_eq!(url, format!("https://graph.facebook.com/{id}/picture?type=square"));
    }
    assert_eq!(fb.client().session_lookups(), 0);
}

#[tokio::test]
async fn picture_non_numeric_strings_are_types_of_current_user() {
    let fb = facade(StubGraph::new().logged_in("100"));
    for picture_type in ["square", "large", "small", "normal"] {
        let url = fb
            .get_profile_picture_url_from_args(&[picture_type.into()])
            .await
            .unwrap();
        assert_eq!(url, format!("https://graph.facebook.com/100/picture?type={picture_type}"));
    }
}

#[tokio::test]
async fn picture_type_without_session_fails() {
    let fb = facade(StubGraph::new());
    let err = fb
        .get_profile_picture_url_from_args(&["large".into()])
        .await
        .unwrap_err();
    assert!(err.is_no_current_user());
}

#[tokio::test]
async fn picture_dims_of_current_user() {
    let fb = facade(StubGraph::new().logged_in("100"));
    let url = fb
        .get_profile_picture_url_from_args(&[40.into(), 40.into()])
        .await
        .unwrap();
    assert_eq!(url, "https://graph.facebook.com/100/picture?width=40&height=40");
}

#[tokio::test]
async fn picture_type_of_given_user_skips_lookup() {
    let fb = facade(StubGraph::new().logged_in("100"));
    let url = fb
        .get_profile_picture_url_from_args(&["200".into(), "large".into()])
        .await
        .unwrap();
    assert_eq!(url, "https://graph.facebook.com/200/picture?type=large");
    assert!(fb.client().calls().is_empty());
}

#[tokio::test]
async fn picture_dims_of_given_user() {
    let fb = facade(StubGraph::new());
    let url = fb
        .get_profile_picture_url_from_args(&["200".into(), 40.into(), 40.into()])
        .await
        .unwrap();
    assert_eq!(url, "https://graph.facebook.com/200/picture?width=40&height=40");
    assert!(fb.client().calls().is_empty());
}

#[tokio::test]
async fn picture_invalid_shapes() {
    let fb = facade(StubGraph::new().logged_in("100"));
    let shapes: Vec<Vec<PictureArg>> = vec![
        vec![123.into()],
        vec![40.into(), "large".into()],
        vec!["large".into(), 40.into()],
        vec!["200".into(), 40.into(), 40.into(), 40.into()],
    ];
    for shape in shapes {
        let err = fb.get_profile_picture_url_from_args(&shape).await.unwrap_err();
        assert!(matches!(err, FbError::InvalidArguments(_)), "{shape:?}");
    }
    assert!(fb.client().calls().is_empty());
}

#[tokio::test]
async fn picture_named_constructors() {
    let fb = facade(StubGraph::new().logged_in("100"));
    let cases = [
        (PictureSpec::square_current_user(), "100/picture?type=square"),
        (PictureSpec::square_user("7"), "7/picture?type=square"),
        (PictureSpec::type_current_user("large"), "100/picture?type=large"),
        (PictureSpec::type_user("7", "small"), "7/picture?type=small"),
        (PictureSpec::dims_current_user(10, 20), "100/picture?width=10&height=20"),
        (PictureSpec::dims_user("7", 10, 20), "7/picture?width=10&height=20"),
    ];
    for (spec, tail) in cases {
        let url = fb.get_profile_picture_url(&spec).await.unwrap();
        assert_eq!(url, format!("https://graph.facebook.com/{tail}"));
    }
}

#[tokio::test]
async fn picture_current_user_without_id_field() {
    let fb = facade(StubGraph::new().logged_in("100").respond("/me", json!({"name": "No Id"})));
    let err = fb
        .get_profile_picture_url(&PictureSpec::square_current_user())
        .await
        .unwrap_err();
    assert!(matches!(err, FbError::MissingField(ref f) if f == "id"));
}

#[tokio::test]
async fn picture_numeric_current_user_id() {
    let fb = facade(StubGraph::new().logged_in("100").respond("/me", json!({"id": 100})));
    let url = fb
        .get_profile_picture_url(&PictureSpec::square_current_user())
        .await
        .unwrap();
    assert_eq!(url, "https://graph.facebook.com/100/picture?type=square");
}

// ---- forwarding ----

#[tokio::test]
async fn unknown_operation_fails() {
    let fb = facade(StubGraph::new());
    let err = fb.call_raw("getFooBar", &[json!(1)]).await.unwrap_err();
    assert!(matches!(err, FbError::UnknownOperation(ref name) if name == "getFooBar"));
}

#[tokio::test]
async fn client_operation_is_forwarded_unchanged() {
    let fb = facade(StubGraph::new().respond("/cocacola", json!({"id": "40796308305", "likes": 1})));

    assert_eq!(fb.call_raw("app_id", &[]).await.unwrap(), json!("123"));

    let body = fb
        .call_raw("api", &[json!("/cocacola"), json!("GET")])
        .await
        .unwrap();
    assert_eq!(body, json!({"id": "40796308305", "likes": 1}));

    fb.call_raw("set_access_token", &[json!("tok")]).await.unwrap();
    assert_eq!(fb.user_access_token().await.as_deref(), Some("tok"));
}

#[tokio::test]
async fn client_errors_pass_through_forwarding() {
    let fb = facade(StubGraph::new());
    let err = fb.call_raw("set_extended_access_token", &[]).await.unwrap_err();
    assert!(matches!(err, FbError::AuthFailed(_)));

    let err = fb.call_raw("set_access_token", &[]).await.unwrap_err();
    assert!(matches!(err, FbError::InvalidArguments(_)));
}

#[tokio::test]
async fn facade_operations_by_name() {
    let fb = facade(
        StubGraph::new()
            .logged_in("100")
            .respond("/me/friends", json!({"data": [{"id": "1"}]})),
    );

    let me = fb.call_raw("get_user", &[]).await.unwrap();
    assert_eq!(me["id"], "100");

    let friends = fb.call_raw("get_friends", &[]).await.unwrap();
    assert_eq!(friends, json!([{"id": "1"}]));

    let url = fb.call_raw("get_profile_url", &[json!("42")]).await.unwrap();
    assert_eq!(url, json!("http://facebook.com/profile.php?id=42"));

    let pic = fb
        .call_raw("get_profile_picture_url", &[json!(40), json!(40)])
        .await
        .unwrap();
    assert_eq!(pic, json!("https://graph.facebook.com/100/picture?width=40&height=40"));

    let err = fb
        .call_raw("get_profile_picture_url", &[json!(true)])
        .await
        .unwrap_err();
    assert!(matches!(err, FbError::InvalidArguments(_)));
}

#[tokio::test]
async fn get_user_by_name_without_session_is_null() {
    let fb = facade(StubGraph::new());
    assert_eq!(fb.call_raw("get_user", &[]).await.unwrap(), Value::Null);
}

#[tokio::test]
async fn typed_forwarding_reaches_client() {
    let fb = facade(StubGraph::new());
    fb.set_app_id("999").await;
    assert_eq!(fb.app_id().await, "999");
    assert_eq!(fb.access_token().await, "999|abc");
    assert_eq!(
        fb.login_url(&[]).await,
        "https://www.facebook.com/dialog/oauth?client_id=999"
    );
    fb.set_access_token("short").await;
    fb.set_extended_access_token().await.unwrap();
    assert_eq!(fb.user_access_token().await.as_deref(), Some("short-long"));
    fb.destroy_session().await;
    assert!(fb.user_access_token().await.is_none());
}
