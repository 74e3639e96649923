//! Login URL command.

use serde_json::json;

use ff_core::error::FbResult;
use ff_facade::Facade;
use crate::OutputFormat;

pub async fn run(
    facade: &Facade,
    scope: Option<String>,
    redirect_uri: Option<String>,
    format: OutputFormat,
) -> FbResult<()> {
    let mut params = Vec::new();
    if let Some(scope) = scope {
        params.push(("scope".to_string(), scope));
    }
    if let Some(uri) = redirect_uri {
        params.push(("redirect_uri".to_string(), uri));
    }

    let url = facade.login_url(&params).await;
    match format {
        OutputFormat::Json => super::print_json(&json!({ "url": url })),
        OutputFormat::Text => println!("{url}"),
    }
    Ok(())
}
