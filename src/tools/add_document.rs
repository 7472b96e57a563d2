use crate::input::load_document;
use crate::tools::{ToolContext, error_result, success_result};
use serde_json::{Value, json};
use tracing::info;

pub fn call(ctx: &ToolContext, args: &Value) -> Value {
    let document = match load_document(args) {
        Ok(document) => document,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    let id = ctx.store.insert(document);
    info!(%id, documents = ctx.store.len(), "document added");

    let message = format!("Document added with ID: {id}");
    success_result(
        message.clone(),
        json!({
            "id": id.to_string(),
            "message": message
        }),
    )
}
