//! Tool-call directives embedded in model output.
//!
//! The model is prompted to request a tool with two lines:
//!
//! ```text
//! USE_TOOL: obtener_clima
//! ARGS: {"ciudad": "Madrid"}
//! ```
//!
//! Model output is untrusted text, so parsing never fails: a missing or
//! malformed directive degrades to [`Directive::None`] or to empty arguments.

use serde_json::{Map, Value};

/// Marker that introduces a tool call.
pub const TOOL_MARKER: &str = "USE_TOOL:";
/// Marker that introduces the tool arguments.
pub const ARGS_MARKER: &str = "ARGS:";

/// The outcome of scanning a model response.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// No tool call; the response is a final answer.
    None,
    /// The model asked for a tool.
    Call {
        name: String,
        arguments: Map<String, Value>,
    },
}

impl Directive {
    /// Scan `text` for the first tool directive.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines().map(str::trim_start);

        let Some(name) = lines.find_map(|line| line.strip_prefix(TOOL_MARKER)) else {
            return Self::None;
        };
        let name = name.trim();
        if name.is_empty() {
            return Self::None;
        }

        let arguments = lines
            .find_map(|line| line.strip_prefix(ARGS_MARKER))
            .map(parse_arguments)
            .unwrap_or_default();

        Self::Call {
            name: name.to_string(),
            arguments,
        }
    }
}

fn parse_arguments(raw: &str) -> Map<String, Value> {
    match serde_json::from_str(raw.trim()) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(name: &str, arguments: Value) -> Directive {
        let Value::Object(arguments) = arguments else {
            panic!("arguments must be an object");
        };
        Directive::Call {
            name: name.to_string(),
            arguments,
        }
    }

    #[test]
    fn plain_answer_has_no_directive() {
        assert_eq!(Directive::parse("Hace sol en Madrid."), Directive::None);
        assert_eq!(Directive::parse(""), Directive::None);
    }

    #[test]
    fn parses_name_and_arguments() {
        let text = "USE_TOOL: obtener_clima\nARGS: {\"ciudad\": \"Madrid\"}";
        assert_eq!(
            Directive::parse(text),
            call("obtener_clima", json!({"ciudad": "Madrid"}))
        );
    }

    #[test]
    fn directive_may_follow_other_text() {
        let text = "Let me check.\r\n\r\n  USE_TOOL:  obtener_clima \r\nsome noise\r\nARGS: {\"ciudad\": \"Lima\"}\r\n";
        assert_eq!(
            Directive::parse(text),
            call("obtener_clima", json!({"ciudad": "Lima"}))
        );
    }

    #[test]
    fn malformed_arguments_become_empty() {
        let text = "USE_TOOL: obtener_clima\nARGS: {ciudad: Madrid";
        assert_eq!(Directive::parse(text), call("obtener_clima", json!({})));
    }

    #[test]
    fn non_object_arguments_become_empty() {
        let text = "USE_TOOL: obtener_clima\nARGS: [\"Madrid\"]";
        assert_eq!(Directive::parse(text), call("obtener_clima", json!({})));
    }

    #[test]
    fn missing_arguments_line_gives_empty_arguments() {
        assert_eq!(
            Directive::parse("USE_TOOL: obtener_clima"),
            call("obtener_clima", json!({}))
        );
    }

    #[test]
    fn first_occurrence_wins() {
        let text = "USE_TOOL: first\nARGS: {\"n\": 1}\nUSE_TOOL: second\nARGS: {\"n\": 2}";
        assert_eq!(Directive::parse(text), call("first", json!({"n": 1})));
    }

    #[test]
    fn arguments_before_marker_are_ignored() {
        let text = "ARGS: {\"n\": 1}\nUSE_TOOL: tool\nARGS: {\"n\": 2}";
        assert_eq!(Directive::parse(text), call("tool", json!({"n": 2})));
    }

    #[test]
    fn empty_tool_name_is_not_a_directive() {
        assert_eq!(
            Directive::parse("USE_TOOL:   \nARGS: {}"),
            Directive::None
        );
    }

    #[test]
    fn marker_must_start_the_line() {
        let text = "You could say USE_TOOL: obtener_clima here.";
        assert_eq!(Directive::parse(text), Directive::None);
    }
}
