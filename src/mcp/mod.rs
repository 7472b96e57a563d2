use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![
        json!({
            "name": contracts::TOOL_ADD_DOCUMENT,
            "description": "Add a new document with metadata (title, author, content).",
            "inputSchema": contracts::add_document_schema()
        }),
        json!({
            "name": contracts::TOOL_GET_SENTIMENT,
            "description": "Analyze sentiment of given text: positive, negative, or neutral.",
            "inputSchema": contracts::get_sentiment_schema()
        }),
        json!({
            "name": contracts::TOOL_EXTRACT_KEYWORDS,
            "description": "Extract top keywords from text.",
            "inputSchema": contracts::extract_keywords_schema()
        }),
        json!({
            "name": contracts::TOOL_ANALYZE_DOCUMENT,
            "description": "Full analysis of a stored document: sentiment, keywords, readability, and stats.",
            "inputSchema": contracts::analyze_document_schema()
        }),
        json!({
            "name": contracts::TOOL_SEARCH_DOCUMENTS,
            "description": "Search stored documents by content substring.",
            "inputSchema": contracts::search_documents_schema()
        }),
    ]
}
