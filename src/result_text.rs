//! Turning raw inference output (or an inference error) into the text of a result node.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// First `{` through last `}`, across lines.
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Unwraps structured answers.
///
/// If the text contains a JSON object with a non-empty string `image` field, that string (a
/// URL) is the result. Any other JSON object is pretty-printed. Otherwise the raw text is kept.
pub fn interpret_result(raw: &str) -> String {
  let Some(m) = JSON_OBJECT.find(raw) else {
    return raw.to_string();
  };
  match serde_json::from_str::<serde_json::Value>(m.as_str()) {
    Ok(value) => {
      if let Some(image) = value
        .get("image")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
      {
        return image.to_string();
      }
      serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string())
    }
    Err(e) => {
      trace!(error = %e, "embedded JSON did not parse; keeping raw text");
      raw.to_string()
    }
  }
}

/// Human-readable error text written into the result node when inference fails.
pub fn error_text(message: &str) -> String {
  format!(
    "Error: {message}\n\nPlease check:\n- API key is valid\n- Network connection\n- Input data format"
  )
}
