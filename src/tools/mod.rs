use crate::analysis::Analyzer;
use crate::config::Config;
use crate::mcp::{contracts, errors};
use crate::store::DocumentStore;
use serde_json::{Value, json};

pub mod add_document;
pub mod analyze_document;
pub mod extract_keywords;
pub mod get_sentiment;
pub mod search_documents;

/// Everything a tool call may touch. One context lives for the whole server
/// process, so documents added by one call are visible to the next.
pub struct ToolContext {
    pub store: DocumentStore,
    pub analyzer: Analyzer,
    pub default_keyword_limit: usize,
}

impl ToolContext {
    pub fn new(config: &Config) -> Self {
        Self {
            store: DocumentStore::new(),
            analyzer: Analyzer::with_keyword_limit(contracts::ANALYSIS_KEYWORD_LIMIT),
            default_keyword_limit: config.default_keyword_limit,
        }
    }
}

pub fn call(ctx: &ToolContext, name: &str, args: &Value) -> Value {
    match name {
        contracts::TOOL_ADD_DOCUMENT => add_document::call(ctx, args),
        contracts::TOOL_GET_SENTIMENT => get_sentiment::call(ctx, args),
        contracts::TOOL_EXTRACT_KEYWORDS => extract_keywords::call(ctx, args),
        contracts::TOOL_ANALYZE_DOCUMENT => analyze_document::call(ctx, args),
        contracts::TOOL_SEARCH_DOCUMENTS => search_documents::call(ctx, args),
        _ => error_result(
            errors::INVALID_INPUT,
            format!("tool not implemented: {name}"),
            Some(name),
        ),
    }
}

pub fn success_result(text: impl Into<String>, structured: Value) -> Value {
    json!({
        "content": [{"type": "text", "text": text.into()}],
        "structuredContent": structured,
        "isError": false
    })
}

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}
