use crate::input::required_str;
use crate::tools::{ToolContext, error_result, success_result};
use serde_json::{Value, json};

pub fn call(ctx: &ToolContext, args: &Value) -> Value {
    let query = match required_str(args, "query") {
        Ok(query) => query,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    let hits = ctx.store.search(query);
    let summary = hits
        .iter()
        .map(|hit| format!("{}: {}", hit.id, hit.title.as_deref().unwrap_or("(untitled)")))
        .collect::<Vec<_>>()
        .join("\n");

    success_result(summary, json!({ "results": hits }))
}
