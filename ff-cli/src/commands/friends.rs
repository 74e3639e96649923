//! Friends command.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde_json::Value;

use ff_core::error::FbResult;
use ff_facade::Facade;
use crate::OutputFormat;

pub async fn run(facade: &Facade, format: OutputFormat) -> FbResult<()> {
    let friends = facade.get_friends().await?;

    match format {
        OutputFormat::Json => {
            super::print_json(&Value::Array(friends.into_iter().map(Value::Object).collect()));
        }
        OutputFormat::Text => {
            if friends.is_empty() {
                println!("No friends returned.");
                return Ok(());
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(vec!["ID", "Name", "Profile"]);

            for friend in &friends {
                let id = friend.get("id").and_then(ff_graph::id_of);
                table.add_row(vec![
                    id.clone().unwrap_or_else(|| "-".to_string()),
                    friend.get("name").map(super::display_value).unwrap_or_else(|| "-".to_string()),
                    id.map(|id| facade.get_profile_url(&id)).unwrap_or_else(|| "-".to_string()),
                ]);
            }

            println!("{table}");
            println!("\n{} friend(s)", friends.len());
        }
    }

    Ok(())
}
