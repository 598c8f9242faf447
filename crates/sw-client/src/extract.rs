//! Recover a JSON payload from raw model text.

use serde_json::Value;

const FENCE_OPEN:  &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Parse `text` as JSON, falling back to the first ```` ```json ```` fenced
/// block.  The error string is what a corrective re-prompt will quote.
pub fn extract_json(text: &str) -> Result<Value, String> {
    let text = text.trim();
    let direct = match serde_json::from_str::<Value>(text) {
        Ok(v) => return Ok(v),
        Err(e) => e,
    };

    match fenced_block(text) {
        Some(block) => serde_json::from_str::<Value>(block)
            .map_err(|e| format!("invalid JSON in fenced block: {e}")),
        None => Err(format!("invalid JSON: {direct}")),
    }
}

/// Body of the first ```` ```json ```` fence.  An unterminated fence runs to
/// the end of the text.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let rest = &text[start..];
    let end = rest.find(FENCE_CLOSE).unwrap_or(rest.len());
    Some(rest[..end].trim())
}
