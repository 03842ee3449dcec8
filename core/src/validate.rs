//! Input checks applied by the front ends before touching the store.

use crate::error::TodoError;

/// Trim `raw` and reject it if nothing is left.
pub fn validate_task(raw: &str) -> Result<String, TodoError> {
    let task = raw.trim();
    if task.is_empty() {
        return Err(TodoError::EmptyTask);
    }
    Ok(task.to_string())
}

/// Parse a todo id as a signed decimal integer.
///
/// A leading `+` or `-` is accepted. Zero and negative values parse fine and
/// simply never match a live item, so they surface as "not found".
pub fn parse_id(raw: &str) -> Result<i64, TodoError> {
    raw.trim()
        .parse()
        .map_err(|_| TodoError::InvalidId(raw.to_string()))
}
