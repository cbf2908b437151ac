use std::path::Path;

use crate::error::ProviderError;

/// Look up an API key: the environment variable first, then an
/// `export VAR=value` line in a dotenv file.
pub fn resolve_api_key(var: &str, dotenv: &Path) -> Result<String, ProviderError> {
    if let Ok(key) = std::env::var(var) {
        if !key.trim().is_empty() {
            return Ok(key.trim().to_string());
        }
    }

    let missing = || ProviderError::MissingApiKey {
        var: var.to_string(),
        dotenv: dotenv.to_path_buf(),
    };

    if !dotenv.exists() {
        return Err(missing());
    }
    let contents = std::fs::read_to_string(dotenv)?;
    key_from_dotenv(&contents, var).ok_or_else(missing)
}

/// Accepts `export VAR=value` and `VAR=value`, with optional single or
/// double quotes around the value.
fn key_from_dotenv(contents: &str, var: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        let line = line.trim();
        let line = line.strip_prefix("export ").unwrap_or(line).trim_start();
        let value = line.strip_prefix(var)?.strip_prefix('=')?.trim();
        let value = value.trim_matches(|c: char| c == '\'' || c == '"');
        (!value.is_empty()).then(|| value.to_string())
    })
}
