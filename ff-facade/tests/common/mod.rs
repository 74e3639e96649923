//! Shared test utilities for facade integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use ff_core::error::{FbError, FbResult};
use ff_facade::{Facade, GraphApi, HttpMethod};

/// In-memory Graph client. Records every Graph call it receives.
#[derive(Default)]
pub struct StubGraph {
    /// Id returned for the current-user session, if any.
    pub current_user: Mutex<Option<String>>,
    /// Canned bodies keyed by Graph path.
    pub responses: HashMap<String, Value>,
    /// Log of calls as "<METHOD> <path>" or "session".
    pub calls: Mutex<Vec<String>>,
    app_id: Mutex<String>,
    app_secret: Mutex<String>,
    access_token: Mutex<Option<String>>,
    file_upload: Mutex<bool>,
    signed_request: Mutex<Option<String>>,
}

impl StubGraph {
    pub fn new() -> Self {
        Self {
            app_id: Mutex::new("123".into()),
            app_secret: Mutex::new("abc".into()),
            ..Self::default()
        }
    }

    /// Log in as `id` and serve a matching `/me` record.
    pub fn logged_in(mut self, id: &str) -> Self {
        *self.current_user.lock().unwrap() = Some(id.to_string());
        self.responses
            .insert("/me".into(), json!({"id": id, "name": "Current User"}));
        self
    }

    pub fn respond(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), body);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of logged calls that touched the current-user session.
    pub fn session_lookups(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.as_str() == "session" || c.ends_with(" /me"))
            .count()
    }
}

#[async_trait]
impl GraphApi for StubGraph {
    async fn app_id(&self) -> String {
        self.app_id.lock().unwrap().clone()
    }

    async fn set_app_id(&self, app_id: &str) {
        *self.app_id.lock().unwrap() = app_id.to_string();
    }

    async fn app_secret(&self) -> String {
        self.app_secret.lock().unwrap().clone()
    }

    async fn set_app_secret(&self, app_secret: &str) {
        *self.app_secret.lock().unwrap() = app_secret.to_string();
    }

    async fn file_upload_support(&self) -> bool {
        *self.file_upload.lock().unwrap()
    }

    async fn set_file_upload_support(&self, enabled: bool) {
        *self.file_upload.lock().unwrap() = enabled;
    }

    async fn access_token(&self) -> String {
        let user = self.access_token.lock().unwrap().clone();
        user.unwrap_or_else(|| format!("{}|{}", self.app_id.lock().unwrap(), self.app_secret.lock().unwrap()))
    }

    async fn user_access_token(&self) -> Option<String> {
        self.access_token.lock().unwrap().clone()
    }

    async fn set_access_token(&self, token: &str) {
        *self.access_token.lock().unwrap() = Some(token.to_string());
    }

    async fn set_extended_access_token(&self) -> FbResult<()> {
        let mut token = self.access_token.lock().unwrap();
        match token.as_mut() {
            Some(t) => {
                t.push_str("-long");
                Ok(())
            }
            None => Err(FbError::AuthFailed("no user access token to extend".into())),
        }
    }

    async fn signed_request(&self) -> Option<String> {
        self.signed_request.lock().unwrap().clone()
    }

    async fn set_signed_request(&self, raw: &str) {
        *self.signed_request.lock().unwrap() = Some(raw.to_string());
    }

    async fn login_url(&self, _params: &[(String, String)]) -> String {
        format!("https://www.facebook.com/dialog/oauth?client_id={}", self.app_id.lock().unwrap())
    }

    async fn logout_url(&self, _params: &[(String, String)]) -> String {
        "https://www.facebook.com/logout.php".into()
    }

    async fn login_status_url(&self, _params: &[(String, String)]) -> String {
        "https://www.facebook.com/extern/login_status.php".into()
    }

    async fn current_user_id(&self) -> FbResult<Option<String>> {
        self.calls.lock().unwrap().push("session".into());
        Ok(self.current_user.lock().unwrap().clone())
    }

    async fn destroy_session(&self) {
        *self.current_user.lock().unwrap() = None;
        *self.access_token.lock().unwrap() = None;
    }

    async fn api(
        &self,
        method: HttpMethod,
        path: &str,
        _params: &[(String, String)],
    ) -> FbResult<Value> {
        self.calls.lock().unwrap().push(format!("{method} {path}"));
        self.responses.get(path).cloned().ok_or_else(|| FbError::GraphApi {
            code: 803,
            error_type: "OAuthException".into(),
            message: format!("Some of the aliases you requested do not exist: {path}"),
        })
    }
}

pub fn facade(stub: StubGraph) -> Facade<StubGraph> {
    Facade::with_client(stub)
}
