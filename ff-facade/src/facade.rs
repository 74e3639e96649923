//! The facade over a [`GraphApi`] client.
//!
//! Convenience operations (users, friends, profile and picture URLs) are
//! implemented here. Everything else is forwarded to the client: through a
//! typed method per client operation, or by name through
//! [`Facade::call_raw`].

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use ff_core::config::GraphConfig;
use ff_core::constants::{paths, PROFILE_URL_PREFIX};
use ff_core::error::{FbError, FbResult};
use ff_graph::{id_of, GraphApi, GraphClient, HttpMethod, UserRecord};

use crate::picture::{CurrentUserResolver, PictureArg, PictureSpec};

/// `http://facebook.com/profile.php?id=<id>`, with `id` taken verbatim.
pub fn profile_url(id: &str) -> String {
    format!("{PROFILE_URL_PREFIX}{id}")
}

/// Convenience facade owning a Graph client.
///
/// The client is created once and lives exactly as long as the facade.
/// Operations run one request at a time; the facade itself keeps no state.
pub struct Facade<C: GraphApi = GraphClient> {
    client: C,
}

impl Facade<GraphClient> {
    /// Build a facade over a fresh HTTP client for the given application.
    pub fn new(app_id: &str, app_secret: &str) -> FbResult<Self> {
        Ok(Self::with_client(GraphClient::with_credentials(app_id, app_secret)?))
    }

    /// Build a facade over an HTTP client configured from `config`.
    pub fn from_config(config: &GraphConfig) -> FbResult<Self> {
        if !config.is_app_configured() {
            return Err(FbError::MissingConfig("graph.app_id and graph.app_secret".into()));
        }
        Ok(Self::with_client(GraphClient::new(config)?))
    }
}

impl<C: GraphApi> Facade<C> {
    /// Wrap an existing client.
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    /// Borrow the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    // --- Convenience operations ---

    /// Fetch a user record.
    ///
    /// With `id == None` this returns the current user, or `Ok(None)` when
    /// nobody is logged in. With an id, client errors propagate unchanged.
    pub async fn get_user(&self, id: Option<&str>) -> FbResult<Option<UserRecord>> {
        match id {
            None => {
                if self.client.has_current_user_session().await? {
                    Ok(Some(self.client.fetch(paths::ME).await?))
                } else {
                    Ok(None)
                }
            }
            Some(id) => Ok(Some(self.client.fetch(&format!("/{id}")).await?)),
        }
    }

    /// The `data` list of the current user's friends.
    pub async fn get_friends(&self) -> FbResult<Vec<UserRecord>> {
        let mut response = self.client.fetch(paths::MY_FRIENDS).await?;
        let data = response
            .remove("data")
            .ok_or_else(|| FbError::MissingField("data".into()))?;

        match data {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => Ok(record),
                    other => Err(FbError::Serialization(format!(
                        "friend entry is not an object: {other}"
                    ))),
                })
                .collect(),
            other => Err(FbError::Serialization(format!(
                "friends data is not a list: {other}"
            ))),
        }
    }

    /// Public profile link for `id`. No validation.
    pub fn get_profile_url(&self, id: &str) -> String {
        profile_url(id)
    }

    /// Picture URL for an explicitly shaped request.
    pub async fn get_profile_picture_url(&self, spec: &PictureSpec) -> FbResult<String> {
        Ok(spec.resolve(self).await?.url())
    }

    /// Picture URL for a positional argument list; see
    /// [`PictureSpec::from_args`] for the accepted shapes.
    pub async fn get_profile_picture_url_from_args(&self, args: &[PictureArg]) -> FbResult<String> {
        let spec = PictureSpec::from_args(args)?;
        self.get_profile_picture_url(&spec).await
    }

    // --- Forwarding ---

    /// Invoke any operation by name.
    ///
    /// The facade's own operations (`get_user`, `get_friends`,
    /// `get_profile_url`, `get_profile_picture_url`) are handled here; every
    /// other name goes to the client. A name the client does not know fails
    /// with `UnknownOperation`.
    pub async fn call_raw(&self, name: &str, args: &[Value]) -> FbResult<Value> {
        match name {
            "get_user" => {
                let id = match args {
                    [] | [Value::Null] => None,
                    [Value::String(id)] => Some(id.as_str()),
                    _ => return Err(FbError::InvalidArguments(format!("{name}: expects an optional id string"))),
                };
                Ok(self.get_user(id).await?.map(Value::Object).unwrap_or(Value::Null))
            }
            "get_friends" => {
                if !args.is_empty() {
                    return Err(FbError::InvalidArguments(format!("{name}: takes no arguments")));
                }
                let friends = self.get_friends().await?;
                Ok(Value::Array(friends.into_iter().map(Value::Object).collect()))
            }
            "get_profile_url" => match args {
                [Value::String(id)] => Ok(Value::String(self.get_profile_url(id))),
                [other] => Ok(Value::String(self.get_profile_url(&other.to_string()))),
                _ => Err(FbError::InvalidArguments(format!("{name}: expects exactly one id"))),
            },
            "get_profile_picture_url" => {
                let args: Vec<PictureArg> = args.iter().cloned().map(PictureArg::from).collect();
                Ok(Value::String(self.get_profile_picture_url_from_args(&args).await?))
            }
            _ => {
                debug!(operation = name, "forwarding to client");
                match self.client.call(name, args).await {
                    Err(FbError::UnknownMethod(_)) => Err(FbError::UnknownOperation(name.to_string())),
                    result => result,
                }
            }
        }
    }

    // --- Typed forwarding, one method per client operation ---

    pub async fn app_id(&self) -> String {
        self.client.app_id().await
    }

    pub async fn set_app_id(&self, app_id: &str) {
        self.client.set_app_id(app_id).await
    }

    pub async fn app_secret(&self) -> String {
        self.client.app_secret().await
    }

    pub async fn set_app_secret(&self, app_secret: &str) {
        self.client.set_app_secret(app_secret).await
    }

    pub async fn file_upload_support(&self) -> bool {
        self.client.file_upload_support().await
    }

    pub async fn set_file_upload_support(&self, enabled: bool) {
        self.client.set_file_upload_support(enabled).await
    }

    pub async fn access_token(&self) -> String {
        self.client.access_token().await
    }

    pub async fn user_access_token(&self) -> Option<String> {
        self.client.user_access_token().await
    }

    pub async fn set_access_token(&self, token: &str) {
        self.client.set_access_token(token).await
    }

    pub async fn set_extended_access_token(&self) -> FbResult<()> {
        self.client.set_extended_access_token().await
    }

    pub async fn signed_request(&self) -> Option<String> {
        self.client.signed_request().await
    }

    pub async fn set_signed_request(&self, raw: &str) {
        self.client.set_signed_request(raw).await
    }

    pub async fn login_url(&self, params: &[(String, String)]) -> String {
        self.client.login_url(params).await
    }

    pub async fn logout_url(&self, params: &[(String, String)]) -> String {
        self.client.logout_url(params).await
    }

    pub async fn login_status_url(&self, params: &[(String, String)]) -> String {
        self.client.login_status_url(params).await
    }

    pub async fn current_user_id(&self) -> FbResult<Option<String>> {
        self.client.current_user_id().await
    }

    pub async fn has_current_user_session(&self) -> FbResult<bool> {
        self.client.has_current_user_session().await
    }

    pub async fn destroy_session(&self) {
        self.client.destroy_session().await
    }

    pub async fn api(
        &self,
        method: HttpMethod,
        path: &str,
        params: &[(String, String)],
    ) -> FbResult<Value> {
        self.client.api(method, path, params).await
    }

    pub async fn fetch(&self, path: &str) -> FbResult<UserRecord> {
        self.client.fetch(path).await
    }
}

/// The current user is whoever [`Facade::get_user`] returns for no id.
#[async_trait]
impl<C: GraphApi> CurrentUserResolver for Facade<C> {
    async fn resolve_current_user_id(&self) -> FbResult<Option<String>> {
        match self.get_user(None).await? {
            None => Ok(None),
            Some(record) => record
                .get("id")
                .and_then(id_of)
                .map(Some)
                .ok_or_else(|| FbError::MissingField("id".into())),
        }
    }
}
