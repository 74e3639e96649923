//! CLI command implementations.

pub mod call;
pub mod friends;
pub mod login_url;
pub mod picture;
pub mod profile_url;
pub mod user;

use serde_json::Value;
use tracing::debug;

use ff_core::config::AppConfig;
use ff_core::error::FbResult;
use ff_facade::{Facade, PictureArg};

/// Helper to create a facade from config, optionally acting as a user.
pub async fn create_facade(config: &AppConfig, access_token: Option<&str>) -> FbResult<Facade> {
    let facade = Facade::from_config(&config.graph)?;
    if let Some(token) = access_token {
        debug!("using access token from command line");
        facade.set_access_token(token).await;
    }
    Ok(facade)
}

/// Print a JSON value the way every `--format json` command does.
pub fn print_json(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Map command-line tokens onto picture arguments.
///
/// Only the width/height slots (`W H` and the last two of `ID W H`) are read
/// as integers, so a lone numeric token stays a user id.
pub fn parse_picture_args(raw: &[String]) -> Vec<PictureArg> {
    let dims_from = match raw.len() {
        2 if raw.iter().all(|t| as_int(t).is_some()) => 0,
        3 => 1,
        _ => raw.len(),
    };
    raw.iter()
        .enumerate()
        .map(|(i, token)| match as_int(token) {
            Some(n) if i >= dims_from => PictureArg::Int(n),
            _ => PictureArg::Str(token.clone()),
        })
        .collect()
}

fn as_int(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// A JSON literal if it parses, else the raw text as a string.
pub fn parse_call_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Render a scalar for text output without JSON quoting.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
