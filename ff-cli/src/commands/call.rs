//! Call command - raw forwarding by operation name.

use serde_json::Value;
use tracing::debug;

use ff_core::error::FbResult;
use ff_facade::Facade;
use crate::OutputFormat;

pub async fn run(facade: &Facade, name: &str, raw: &[String], format: OutputFormat) -> FbResult<()> {
    let args: Vec<Value> = raw.iter().map(|a| super::parse_call_arg(a)).collect();
    debug!(operation = name, args = args.len(), "calling by name");

    let result = facade.call_raw(name, &args).await?;
    match (format, &result) {
        (OutputFormat::Json, _) | (_, Value::Object(_) | Value::Array(_)) => super::print_json(&result),
        (OutputFormat::Text, scalar) => println!("{}", super::display_value(scalar)),
    }
    Ok(())
}
