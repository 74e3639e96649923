//! User command - show a user record.

use console::style;
use serde_json::Value;

use ff_core::error::FbResult;
use ff_facade::Facade;
use crate::OutputFormat;

pub async fn run(facade: &Facade, id: Option<String>, format: OutputFormat) -> FbResult<()> {
    let user = facade.get_user(id.as_deref()).await?;

    match format {
        OutputFormat::Json => {
            super::print_json(&user.map(Value::Object).unwrap_or(Value::Null));
        }
        OutputFormat::Text => match user {
            None => println!("No current user. Pass --access-token to act as a user."),
            Some(record) => {
                let title = record
                    .get("name")
                    .map(super::display_value)
                    .unwrap_or_else(|| "User".to_string());
                println!("{}", style(title).bold().underlined());
                let width = record.keys().map(String::len).max().unwrap_or(0);
                for (key, value) in &record {
                    println!("  {key:<width$}  {}", super::display_value(value));
                }
            }
        },
    }

    Ok(())
}
