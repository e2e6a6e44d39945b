//! Host-script text construction.
//!
//! Everything here produces MAXScript source; nothing is executed.

use std::path::Path;

use crate::domain::AppError;

/// Wrap `body` so that a runtime fault inside it is printed to the host
/// listener instead of propagating.
///
/// The body sits on its own lines so a trailing line comment cannot swallow
/// the closing parenthesis.
pub fn protect(body: &str) -> String {
    format!("try (\n{}\n) catch (print (getCurrentException()))", body)
}

/// Escape `text` for use inside a double-quoted host string literal.
pub fn escape_string_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render `path` as a verbatim (`@"..."`) host string literal.
///
/// Verbatim literals have no escape sequences, so a path containing a double
/// quote cannot be represented.
pub fn verbatim_path_literal(path: &Path) -> Result<String, AppError> {
    let text = path.to_string_lossy();
    if text.contains('"') {
        return Err(AppError::InvalidFilePath(text.into_owned()));
    }
    Ok(format!("@\"{}\"", text))
}

/// `python.execute` call carrying the code as an escaped string literal.
pub fn python_execute_inline(code: &str) -> String {
    format!("python.execute \"{}\"", escape_string_literal(code))
}

/// `python.executeFile` call for a staged script.
pub fn python_execute_file(path: &Path) -> Result<String, AppError> {
    Ok(format!("python.executeFile {}", verbatim_path_literal(path)?))
}

/// Strip surrounding whitespace and, when the whole reply is one markdown
/// code fence, the fence lines.
pub fn normalize_code(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // The opening line may carry a language tag.
    let Some((_, body)) = inner.split_once('\n') else {
        return trimmed;
    };
    if body.contains("```") {
        return trimmed;
    }
    body.trim()
}
