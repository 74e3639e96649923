//! HTTP implementation of [`GraphApi`].
//!
//! Handles access-token injection, request encoding (query, form or
//! multipart), response decoding, Graph error envelopes and session
//! invalidation on dead tokens.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use ff_core::config::GraphConfig;
use ff_core::constants::paths;
use ff_core::error::{FbError, FbResult};

use crate::api::{id_of, GraphApi, HttpMethod};
use crate::response::{GraphErrorBody, TokenResponse};
use crate::session::Session;
use crate::urls;

/// HTTP client for the Graph API.
///
/// Cloning is cheap; clones share the same session state.
#[derive(Clone)]
pub struct GraphClient {
    inner: Client,
    /// Graph API origin (e.g. "https://graph.facebook.com").
    graph_url: String,
    /// Web origin for dialog URLs.
    www_url: String,
    state: Arc<RwLock<Session>>,
}

impl GraphClient {
    /// Create a new client from configuration.
    pub fn new(config: &GraphConfig) -> FbResult<Self> {
        let inner = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| FbError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            graph_url: GraphConfig::sanitize_origin(&config.graph_url),
            www_url: GraphConfig::sanitize_origin(&config.www_url),
            state: Arc::new(RwLock::new(Session::from_config(config))),
        })
    }

    /// Create a client with default settings for the given credentials.
    pub fn with_credentials(app_id: &str, app_secret: &str) -> FbResult<Self> {
        Self::new(&GraphConfig::new(app_id, app_secret))
    }

    /// Get the Graph API origin.
    pub fn graph_url(&self) -> &str {
        &self.graph_url
    }

    /// Get the web origin.
    pub fn www_url(&self) -> &str {
        &self.www_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.graph_url, path.trim_start_matches('/'))
    }

    /// Build the request for a Graph call. Params go in the query string for
    /// GET/DELETE and in the body for POST.
    async fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: &[(String, String)],
    ) -> FbResult<RequestBuilder> {
        let (token, upload) = {
            let session = self.state.read().await;
            (session.effective_access_token(), session.file_upload_support)
        };

        let mut params = params.to_vec();
        if !params.iter().any(|(k, _)| k == "access_token") {
            params.push(("access_token".into(), token));
        }

        let url = self.endpoint(path);
        let builder = match method {
            HttpMethod::Get => self.inner.get(&url).query(&params),
            HttpMethod::Delete => self.inner.delete(&url).query(&params),
            HttpMethod::Post if upload && params.iter().any(|(_, v)| v.starts_with('@')) => {
                self.inner.post(&url).multipart(Self::multipart_form(params).await?)
            }
            HttpMethod::Post => self.inner.post(&url).form(&params),
        };
        Ok(builder)
    }

    /// Values of the form `@/path/to/file` become file parts.
    async fn multipart_form(params: Vec<(String, String)>) -> FbResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (key, value) in params {
            form = match value.strip_prefix('@') {
                Some(file) => {
                    let bytes = tokio::fs::read(file).await?;
                    let file_name = std::path::Path::new(file)
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "upload".into());
                    form.part(key, reqwest::multipart::Part::bytes(bytes).file_name(file_name))
                }
                None => form.text(key, value),
            };
        }
        Ok(form)
    }

    /// Decode a response body. Error envelopes are returned as values so the
    /// caller can inspect them; other failures become `FbError`s.
    async fn decode(response: Response) -> FbResult<Value> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FbError::Http(format!("failed to read response body: {e}")))?;

        match serde_json::from_str::<Value>(&text) {
            Ok(body) if status.is_success() || GraphErrorBody::from_body(&body).is_some() => Ok(body),
            _ if status.is_success() => Ok(Value::String(text)),
            _ if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN => {
                Err(FbError::AuthFailed(format!("server returned {status}")))
            }
            _ => Err(FbError::ServerError {
                status: status.as_u16(),
                message: text,
            }),
        }
    }

    /// Classify a reqwest error into an FbError variant.
    fn classify_error(e: reqwest::Error) -> FbError {
        if e.is_timeout() {
            FbError::Timeout(e.to_string())
        } else if e.is_connect() {
            FbError::Http(format!("connection failed: {e}"))
        } else {
            FbError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl GraphApi for GraphClient {
    async fn app_id(&self) -> String {
        self.state.read().await.app_id.clone()
    }

    async fn set_app_id(&self, app_id: &str) {
        self.state.write().await.app_id = app_id.to_string();
    }

    async fn app_secret(&self) -> String {
        self.state.read().await.app_secret.clone()
    }

    async fn set_app_secret(&self, app_secret: &str) {
        self.state.write().await.app_secret = app_secret.to_string();
    }

    async fn file_upload_support(&self) -> bool {
        self.state.read().await.file_upload_support
    }

    async fn set_file_upload_support(&self, enabled: bool) {
        self.state.write().await.file_upload_support = enabled;
    }

    async fn access_token(&self) -> String {
        self.state.read().await.effective_access_token()
    }

    async fn user_access_token(&self) -> Option<String> {
        self.state.read().await.access_token.clone()
    }

    async fn set_access_token(&self, token: &str) {
        self.state.write().await.set_access_token(token);
    }

    async fn set_extended_access_token(&self) -> FbResult<()> {
        let (app_id, app_secret, token) = {
            let session = self.state.read().await;
            let token = session
                .access_token
                .clone()
                .ok_or_else(|| FbError::AuthFailed("no user access token to extend".into()))?;
            (session.app_id.clone(), session.app_secret.clone(), token)
        };

        debug!("GET {}", paths::OAUTH_ACCESS_TOKEN);
        let response = self
            .inner
            .get(self.endpoint(paths::OAUTH_ACCESS_TOKEN))
            .query(&[
                ("client_id", app_id.as_str()),
                ("client_secret", app_secret.as_str()),
                ("grant_type", "fb_exchange_token"),
                ("fb_exchange_token", token.as_str()),
            ])
            .send()
            .await
            .map_err(Self::classify_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FbError::Http(format!("failed to read response body: {e}")))?;

        if let Ok(body) = serde_json::from_str::<Value>(&text) {
            if let Some(err) = GraphErrorBody::from_body(&body) {
                return Err(err.into());
            }
        }
        if !status.is_success() {
            return Err(FbError::ServerError {
                status: status.as_u16(),
                message: text,
            });
        }

        let exchanged = TokenResponse::parse(&text)
            .ok_or_else(|| FbError::MissingField("access_token".into()))?;
        // Same user, longer-lived token: keep the cached user id.
        self.state.write().await.access_token = Some(exchanged.access_token);
        Ok(())
    }

    async fn signed_request(&self) -> Option<String> {
        self.state.read().await.signed_request.clone()
    }

    async fn set_signed_request(&self, raw: &str) {
        self.state.write().await.signed_request = Some(raw.to_string());
    }

    async fn login_url(&self, params: &[(String, String)]) -> String {
        let app_id = self.app_id().await;
        urls::login_url(&self.www_url, &app_id, params)
    }

    async fn logout_url(&self, params: &[(String, String)]) -> String {
        let token = self.user_access_token().await;
        urls::logout_url(&self.www_url, token.as_deref(), params)
    }

    async fn login_status_url(&self, params: &[(String, String)]) -> String {
        let app_id = self.app_id().await;
        urls::login_status_url(&self.www_url, &app_id, params)
    }

    async fn current_user_id(&self) -> FbResult<Option<String>> {
        let token = {
            let session = self.state.read().await;
            if let Some(id) = &session.user_id {
                return Ok(Some(id.clone()));
            }
            match &session.access_token {
                Some(token) => token.clone(),
                None => return Ok(None),
            }
        };

        let params = [("fields".to_string(), "id".to_string())];
        let id = match self.api(HttpMethod::Get, paths::ME, &params).await {
            Ok(body) => body.get("id").and_then(id_of),
            // A rejected token simply means nobody is logged in.
            Err(FbError::GraphApi { .. }) | Err(FbError::AuthFailed(_)) => None,
            Err(e) => return Err(e),
        };

        if let Some(id) = &id {
            let mut session = self.state.write().await;
            if session.access_token.as_deref() == Some(token.as_str()) {
                session.user_id = Some(id.clone());
            }
        }
        Ok(id)
    }

    async fn destroy_session(&self) {
        self.state.write().await.clear();
        debug!("session destroyed");
    }

    async fn api(
        &self,
        method: HttpMethod,
        path: &str,
        params: &[(String, String)],
    ) -> FbResult<Value> {
        debug!("{} {}", method, path);
        let request = self.build_request(method, path, params).await?;
        let response = request.send().await.map_err(Self::classify_error)?;
        let body = Self::decode(response).await?;

        if let Some(err) = GraphErrorBody::from_body(&body) {
            if err.invalidates_session() {
                warn!("access token rejected ({}), destroying session", err.code);
                self.destroy_session().await;
            }
            return Err(err.into());
        }
        Ok(body)
    }
}
