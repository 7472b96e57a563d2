use serde_json::json;

pub const TOOL_ADD_DOCUMENT: &str = "add_document";
pub const TOOL_GET_SENTIMENT: &str = "get_sentiment";
pub const TOOL_EXTRACT_KEYWORDS: &str = "extract_keywords";
pub const TOOL_ANALYZE_DOCUMENT: &str = "analyze_document";
pub const TOOL_SEARCH_DOCUMENTS: &str = "search_documents";

pub const PROTOCOL_VERSION: &str = "2025-11-25";

pub const DEFAULT_KEYWORD_LIMIT: usize = 5;
pub const ANALYSIS_KEYWORD_LIMIT: usize = 5;
pub const MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

pub fn add_document_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "document_data": {
                "type": "object",
                "properties": {
                    "title": { "type": ["string", "null"] },
                    "author": { "type": ["string", "null"] },
                    "content": { "type": ["string", "null"] }
                },
                "additionalProperties": true
            }
        },
        "required": ["document_data"],
        "additionalProperties": false
    })
}

pub fn get_sentiment_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn extract_keywords_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "limit": { "type": "integer", "minimum": 0, "default": DEFAULT_KEYWORD_LIMIT }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn analyze_document_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "document_id": { "type": "string" }
        },
        "required": ["document_id"],
        "additionalProperties": false
    })
}

pub fn search_documents_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "query": { "type": "string" }
        },
        "required": ["query"],
        "additionalProperties": false
    })
}
