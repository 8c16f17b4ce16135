use super::LoadError;
use std::io::Read;

/// Read a token piped on standard input.
pub fn load() -> Result<String, LoadError> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;

    let token = content.trim();
    if token.is_empty() {
        return Err(LoadError::EmptyInput("standard input".to_string()));
    }

    tracing::info!(len = token.len(), "loaded token from stdin");
    Ok(token.to_string())
}
