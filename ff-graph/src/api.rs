//! The typed interface of the Graph client.

use async_trait::async_trait;
use serde_json::Value;

use ff_core::error::{FbError, FbResult};

/// A user object as returned by the Graph API. The shape is platform-defined.
pub type UserRecord = serde_json::Map<String, Value>;

/// Read a Graph object id, which may arrive as a string or a number.
pub fn id_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// HTTP verb of a Graph API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Parse a case-insensitive verb name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every operation supported by the Graph client.
///
/// Setters take `&self`; implementations keep their mutable state behind a
/// lock. `params` slices are ordered key/value pairs, later keys override
/// earlier ones when merged with defaults.
#[async_trait]
pub trait GraphApi: Send + Sync {
    // --- Application credentials ---

    async fn app_id(&self) -> String;
    async fn set_app_id(&self, app_id: &str);
    async fn app_secret(&self) -> String;
    async fn set_app_secret(&self, app_secret: &str);
    async fn file_upload_support(&self) -> bool;
    async fn set_file_upload_support(&self, enabled: bool);

    // --- Access tokens ---

    /// The user access token if one is set, otherwise the application
    /// access token `"<app_id>|<app_secret>"`.
    async fn access_token(&self) -> String;

    /// The user access token, if any.
    async fn user_access_token(&self) -> Option<String>;

    /// Replace the user access token. Forgets the cached current user.
    async fn set_access_token(&self, token: &str);

    /// Exchange the current short-lived user token for a long-lived one.
    async fn set_extended_access_token(&self) -> FbResult<()>;

    // --- Signed request ---

    async fn signed_request(&self) -> Option<String>;
    async fn set_signed_request(&self, raw: &str);

    // --- Dialog URLs ---

    async fn login_url(&self, params: &[(String, String)]) -> String;
    async fn logout_url(&self, params: &[(String, String)]) -> String;
    async fn login_status_url(&self, params: &[(String, String)]) -> String;

    // --- Session ---

    /// Id of the user tied to the active session, if any.
    async fn current_user_id(&self) -> FbResult<Option<String>>;

    /// Whether a logged-in user session exists.
    async fn has_current_user_session(&self) -> FbResult<bool> {
        Ok(self.current_user_id().await?.is_some())
    }

    /// Forget the access token, current user and signed request.
    async fn destroy_session(&self);

    // --- Graph calls ---

    /// Raw Graph API call returning the decoded JSON body.
    async fn api(&self, method: HttpMethod, path: &str, params: &[(String, String)])
        -> FbResult<Value>;

    /// GET `path` and return the body as an object.
    async fn fetch(&self, path: &str) -> FbResult<UserRecord> {
        match self.api(HttpMethod::Get, path, &[]).await? {
            Value::Object(map) => Ok(map),
            other => Err(FbError::Serialization(format!(
                "expected an object from {path}, got {other}"
            ))),
        }
    }

    /// Invoke an operation by name with JSON arguments.
    ///
    /// Fails with `UnknownMethod` when `name` is not an operation of this
    /// interface.
    async fn call(&self, name: &str, args: &[Value]) -> FbResult<Value> {
        crate::dispatch::call_by_name(self, name, args).await
    }
}
