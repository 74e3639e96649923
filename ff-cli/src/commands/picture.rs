//! Picture command - resolve a profile picture URL.

use serde_json::json;

use ff_core::error::FbResult;
use ff_facade::Facade;
use crate::OutputFormat;

pub async fn run(facade: &Facade, raw: &[String], format: OutputFormat) -> FbResult<()> {
    let args = super::parse_picture_args(raw);
    let url = facade.get_profile_picture_url_from_args(&args).await?;

    match format {
        OutputFormat::Json => super::print_json(&json!({ "url": url })),
        OutputFormat::Text => println!("{url}"),
    }
    Ok(())
}
