use crate::input::{optional_limit, required_str};
use crate::tools::{ToolContext, error_result, success_result};
use serde_json::{Value, json};

pub fn call(ctx: &ToolContext, args: &Value) -> Value {
    let text = match required_str(args, "text") {
        Ok(text) => text,
        Err(err) => return error_result(err.kind, err.message, None),
    };
    let limit = match optional_limit(args, "limit", ctx.default_keyword_limit) {
        Ok(limit) => limit,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    let keywords = ctx.analyzer.keywords(text, limit);
    success_result(keywords.join(", "), json!({ "keywords": keywords }))
}
