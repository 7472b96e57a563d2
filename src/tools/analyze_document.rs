use crate::analysis::AnalysisError;
use crate::input::required_str;
use crate::mcp::errors;
use crate::tools::{ToolContext, error_result, success_result};
use serde_json::Value;
use tracing::warn;

pub fn call(ctx: &ToolContext, args: &Value) -> Value {
    let document_id = match required_str(args, "document_id") {
        Ok(document_id) => document_id,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    let analysis = match ctx.analyzer.analyze(&ctx.store, document_id) {
        Ok(analysis) => analysis,
        Err(AnalysisError::NotFound { id }) => {
            return error_result(errors::NOT_FOUND, "Document not found", Some(id.as_str()));
        }
        Err(AnalysisError::Scorer(err)) => {
            warn!(document_id, error = %err, "analysis failed");
            return error_result(errors::SCORER_FAILED, err.to_string(), Some(err.scorer));
        }
    };

    let structured = match serde_json::to_value(&analysis) {
        Ok(structured) => structured,
        Err(err) => {
            return error_result(
                errors::INTERNAL_ERROR,
                format!("failed to serialize analysis: {err}"),
                Some(document_id),
            );
        }
    };
    let text = serde_json::to_string_pretty(&structured).unwrap_or_default();
    success_result(text, structured)
}
