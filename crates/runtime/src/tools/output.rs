//! Normalization of heterogeneous `tools/call` results.

use super::ToolError;
use rmcp::model::{CallToolResult, Content, RawContent};
use serde_json::Value;

/// The shapes a remote tool result can take.
#[derive(Debug, Clone)]
pub enum RemoteOutput {
    /// The MCP content wrapper.
    Content { items: Vec<Content>, is_error: bool },
    /// A bare string.
    Text(String),
    /// Anything else.
    Other(Value),
}

impl From<CallToolResult> for RemoteOutput {
    /// Results that only carry structured content are classified by that
    /// value; everything else keeps the content wrapper.
    fn from(result: CallToolResult) -> Self {
        let is_error = result.is_error.unwrap_or(false);
        match result.structured_content {
            Some(Value::String(text)) if result.content.is_empty() && !is_error => Self::Text(text),
            Some(value) if result.content.is_empty() && !is_error => Self::Other(value),
            _ => Self::Content {
                items: result.content,
                is_error,
            },
        }
    }
}

impl RemoteOutput {
    /// Reduce the result to the plain value handed to the model.
    ///
    /// Only the first content item is kept. Text items holding JSON are
    /// decoded; a tool-side error flag becomes [`ToolError::Reported`].
    pub fn normalize(self) -> Result<Value, ToolError> {
        match self {
            Self::Content {
                items,
                is_error: true,
            } => {
                let text = items
                    .iter()
                    .filter_map(|item| match &item.raw {
                        RawContent::Text(text) => Some(text.text.as_str()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                Err(ToolError::Reported(text))
            }
            Self::Content { items, .. } => Ok(match items.into_iter().next() {
                None => Value::Array(Vec::new()),
                Some(item) => match item.raw {
                    RawContent::Text(text) => {
                        serde_json::from_str(&text.text).unwrap_or(Value::String(text.text))
                    }
                    raw => Value::String(serde_json::to_string(&raw).unwrap_or_default()),
                },
            }),
            Self::Text(text) => Ok(Value::String(text)),
            Self::Other(value) => Ok(Value::String(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(result: Value) -> Result<Value, ToolError> {
        let result: CallToolResult = serde_json::from_value(result).unwrap();
        RemoteOutput::from(result).normalize()
    }

    #[test]
    fn json_text_is_decoded() {
        let raw = json!({
            "content": [{"type": "text", "text": "{\"ciudad\":\"Madrid\",\"temperatura_c\":\"20\"}"}],
            "isError": false
        });
        assert_eq!(
            normalize(raw).unwrap(),
            json!({"ciudad": "Madrid", "temperatura_c": "20"})
        );
    }

    #[test]
    fn plain_text_is_kept() {
        let raw = json!({"content": [{"type": "text", "text": "sunny"}]});
        assert_eq!(normalize(raw).unwrap(), json!("sunny"));
    }

    #[test]
    fn only_first_item_is_used() {
        let raw = json!({"content": [
            {"type": "text", "text": "1"},
            {"type": "text", "text": "2"}
        ]});
        assert_eq!(normalize(raw).unwrap(), json!(1));
    }

    #[test]
    fn non_text_item_is_stringified() {
        let raw = json!({"content": [{"type": "image", "data": "AAAA", "mimeType": "image/png"}]});
        let value = normalize(raw).unwrap();
        let text = value.as_str().unwrap();
        assert!(text.contains("\"type\":\"image\""));
        assert!(text.contains("\"mimeType\":\"image/png\""));
    }

    #[test]
    fn empty_content_is_empty_list() {
        assert_eq!(normalize(json!({"content": []})).unwrap(), json!([]));
    }

    #[test]
    fn error_flag_becomes_error() {
        let raw = json!({
            "content": [{"type": "text", "text": "city not found"}],
            "isError": true
        });
        let err = normalize(raw).unwrap_err();
        assert_eq!(err.to_string(), "tool reported an error: city not found");
    }

    #[test]
    fn structured_only_results() {
        let text = json!({"content": [], "structuredContent": "bare"});
        assert_eq!(normalize(text).unwrap(), json!("bare"));

        let other = json!({"content": [], "structuredContent": {"temp": 20}});
        assert_eq!(normalize(other).unwrap(), json!("{\"temp\":20}"));
    }

    #[test]
    fn content_wins_over_structured_content() {
        let raw = json!({
            "content": [{"type": "text", "text": "{\"temp\":20}"}],
            "structuredContent": {"temp": 20}
        });
        assert_eq!(normalize(raw).unwrap(), json!({"temp": 20}));
    }
}
