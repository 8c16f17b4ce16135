use super::LoadError;
use std::path::Path;

/// Read a token from a file, trimming surrounding whitespace.
pub fn load(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let token = content.trim();

    if token.is_empty() {
        return Err(LoadError::EmptyInput(path.display().to_string()));
    }

    tracing::info!(path = %path.display(), len = token.len(), "loaded token from file");
    Ok(token.to_string())
}
