//! Profile URL command. Pure formatting, so it needs no app credentials.

use serde_json::{json, Value};

use ff_core::error::FbResult;
use ff_facade::profile_url;
use crate::OutputFormat;

pub fn run(id: &str, format: OutputFormat) -> FbResult<()> {
    match render(id, format) {
        Value::String(url) => println!("{url}"),
        other => super::print_json(&other),
    }
    Ok(())
}

fn render(id: &str, format: OutputFormat) -> Value {
    let url = profile_url(id);
    match format {
        OutputFormat::Json => json!({ "id": id, "url": url }),
        OutputFormat::Text => Value::String(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_facade() {
        assert_eq!(
            render("42", OutputFormat::Text),
            json!("http://facebook.com/profile.php?id=42")
        );
        assert_eq!(
            render("", OutputFormat::Json),
            json!({ "id": "", "url": "http://facebook.com/profile.php?id=" })
        );
    }
}
