pub const INVALID_INPUT: &str = "invalid_input";
pub const NOT_FOUND: &str = "not_found";
pub const SCORER_FAILED: &str = "scorer_failed";
pub const INTERNAL_ERROR: &str = "internal_error";
