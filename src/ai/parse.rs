use serde_json::Value;

use crate::error::ProviderError;

/// Extract a 1-indexed column from a model reply.
///
/// The first `{...}` object in the text is parsed as JSON and its `move`
/// field read (integer or numeric string). If there is no usable object,
/// a bare `"move": <digits>` fragment is accepted instead.
pub fn parse_move(text: &str) -> Result<usize, ProviderError> {
    if let Some(column) = first_json_object(text).and_then(move_from_json) {
        return Ok(column);
    }
    move_from_fragment(text)
        .ok_or_else(|| ProviderError::Malformed(format!("no move found in reply: {}", text.trim())))
}

/// Shortest `{...}` span starting at the first opening brace
fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = start + text[start..].find('}')?;
    Some(&text[start..=end])
}

fn move_from_json(object: &str) -> Option<usize> {
    let value: Value = serde_json::from_str(object).ok()?;
    match value.get("move")? {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn move_from_fragment(text: &str) -> Option<usize> {
    let key = "\"move\"";
    let mut rest = text;
    while let Some(pos) = rest.find(key) {
        rest = &rest[pos + key.len()..];
        let Some(value) = rest.trim_start().strip_prefix(':') else {
            continue;
        };
        let digits: String = value.trim_start().chars().take_while(char::is_ascii_digit).collect();
        if !digits.is_empty() {
            return digits.parse().ok();
        }
    }
    None
}
