use crate::input::required_str;
use crate::mcp::errors;
use crate::tools::{ToolContext, error_result, success_result};
use serde_json::{Value, json};

pub fn call(ctx: &ToolContext, args: &Value) -> Value {
    let text = match required_str(args, "text") {
        Ok(text) => text,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    match ctx.analyzer.sentiment(text) {
        Ok(sentiment) => success_result(sentiment.as_str(), json!({ "sentiment": sentiment })),
        Err(err) => error_result(errors::SCORER_FAILED, err.to_string(), Some(err.scorer)),
    }
}
