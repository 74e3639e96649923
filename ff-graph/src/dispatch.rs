//! Invoke [`GraphApi`] operations by name.
//!
//! Arguments arrive as JSON values. Strings map to `&str` parameters,
//! booleans to `bool`, and objects to ordered param lists. Unknown names
//! yield `FbError::UnknownMethod`, wrongly shaped arguments
//! `FbError::InvalidArguments`.

use serde_json::Value;
use tracing::debug;

use ff_core::error::{FbError, FbResult};

use crate::api::{GraphApi, HttpMethod};

/// Names accepted by [`call_by_name`].
pub const METHODS: &[&str] = &[
    "app_id",
    "set_app_id",
    "app_secret",
    "set_app_secret",
    "file_upload_support",
    "set_file_upload_support",
    "access_token",
    "user_access_token",
    "set_access_token",
    "set_extended_access_token",
    "signed_request",
    "set_signed_request",
    "login_url",
    "logout_url",
    "login_status_url",
    "current_user_id",
    "has_current_user_session",
    "destroy_session",
    "api",
    "fetch",
];

/// Positional argument accessor for one call.
struct Args<'a> {
    name: &'a str,
    args: &'a [Value],
}

impl<'a> Args<'a> {
    fn arity(&self, min: usize, max: usize) -> FbResult<()> {
        let n = self.args.len();
        if n < min || n > max {
            return Err(self.invalid(format!("expects {min}..={max} arguments, got {n}")));
        }
        Ok(())
    }

    fn str(&self, idx: usize) -> FbResult<&'a str> {
        match self.args.get(idx) {
            Some(Value::String(s)) => Ok(s),
            other => Err(self.invalid(format!("argument {idx} must be a string, got {other:?}"))),
        }
    }

    fn bool(&self, idx: usize) -> FbResult<bool> {
        match self.args.get(idx) {
            Some(Value::Bool(b)) => Ok(*b),
            other => Err(self.invalid(format!("argument {idx} must be a boolean, got {other:?}"))),
        }
    }

    /// Optional params object; absent means empty.
    fn params(&self, idx: usize) -> FbResult<Vec<(String, String)>> {
        match self.args.get(idx) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => params_of(value).map_err(|msg| self.invalid(msg)),
        }
    }

    fn invalid(&self, msg: String) -> FbError {
        FbError::InvalidArguments(format!("{}: {msg}", self.name))
    }
}

/// Flatten a JSON object into ordered string pairs. Arrays are joined with
/// commas (`"scope": ["email", "user_friends"]` -> `email,user_friends`)
/// and nulls are skipped.
pub fn params_of(value: &Value) -> Result<Vec<(String, String)>, String> {
    let map = value
        .as_object()
        .ok_or_else(|| format!("params must be an object, got {value}"))?;
    Ok(map
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), scalar_string(v)))
        .collect())
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(scalar_string).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn opt_string(value: Option<String>) -> Value {
    value.map(Value::String).unwrap_or(Value::Null)
}

/// Dispatch `name` to the matching [`GraphApi`] operation.
pub async fn call_by_name<C>(client: &C, name: &str, args: &[Value]) -> FbResult<Value>
where
    C: GraphApi + ?Sized,
{
    debug!(method = name, argc = args.len(), "client call by name");
    let a = Args { name, args };

    match name {
        "app_id" => {
            a.arity(0, 0)?;
            Ok(Value::String(client.app_id().await))
        }
        "set_app_id" => {
            a.arity(1, 1)?;
            client.set_app_id(a.str(0)?).await;
            Ok(Value::Null)
        }
        "app_secret" => {
            a.arity(0, 0)?;
            Ok(Value::String(client.app_secret().await))
        }
        "set_app_secret" => {
            a.arity(1, 1)?;
            client.set_app_secret(a.str(0)?).await;
            Ok(Value::Null)
        }
        "file_upload_support" => {
            a.arity(0, 0)?;
            Ok(Value::Bool(client.file_upload_support().await))
        }
        "set_file_upload_support" => {
            a.arity(1, 1)?;
            client.set_file_upload_support(a.bool(0)?).await;
            Ok(Value::Null)
        }
        "access_token" => {
            a.arity(0, 0)?;
            Ok(Value::String(client.access_token().await))
        }
        "user_access_token" => {
            a.arity(0, 0)?;
            Ok(opt_string(client.user_access_token().await))
        }
        "set_access_token" => {
            a.arity(1, 1)?;
            client.set_access_token(a.str(0)?).await;
            Ok(Value::Null)
        }
        "set_extended_access_token" => {
            a.arity(0, 0)?;
            client.set_extended_access_token().await?;
            Ok(Value::Null)
        }
        "signed_request" => {
            a.arity(0, 0)?;
            Ok(opt_string(client.signed_request().await))
        }
        "set_signed_request" => {
            a.arity(1, 1)?;
            client.set_signed_request(a.str(0)?).await;
            Ok(Value::Null)
        }
        "login_url" => {
            a.arity(0, 1)?;
            Ok(Value::String(client.login_url(&a.params(0)?).await))
        }
        "logout_url" => {
            a.arity(0, 1)?;
            Ok(Value::String(client.logout_url(&a.params(0)?).await))
        }
        "login_status_url" => {
            a.arity(0, 1)?;
            Ok(Value::String(client.login_status_url(&a.params(0)?).await))
        }
        "current_user_id" => {
            a.arity(0, 0)?;
            Ok(opt_string(client.current_user_id().await?))
        }
        "has_current_user_session" => {
            a.arity(0, 0)?;
            Ok(Value::Bool(client.has_current_user_session().await?))
        }
        "destroy_session" => {
            a.arity(0, 0)?;
            client.destroy_session().await;
            Ok(Value::Null)
        }
        "fetch" => {
            a.arity(1, 1)?;
            Ok(Value::Object(client.fetch(a.str(0)?).await?))
        }
        // api(path), api(path, method), api(path, params), api(path, method, params)
        "api" => {
            a.arity(1, 3)?;
            let path = a.str(0)?;
            let (method, params) = match args.get(1) {
                None => (HttpMethod::Get, Vec::new()),
                Some(Value::String(m)) => {
                    let method = HttpMethod::parse(m)
                        .ok_or_else(|| a.invalid(format!("unsupported HTTP method {m}")))?;
                    (method, a.params(2)?)
                }
                Some(Value::Object(_)) if args.len() == 2 => (HttpMethod::Get, a.params(1)?),
                Some(other) => {
                    return Err(a.invalid(format!("argument 1 must be a method or params, got {other}")))
                }
            };
            client.api(method, path, &params).await
        }
        _ => Err(FbError::UnknownMethod(name.to_string())),
    }
}
