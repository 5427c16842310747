use super::errors::ModelError;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Trait for completion backends.
///
/// A backend takes the full conversation, system directive first, and
/// returns the text of the model's reply. Each call is independent.
pub trait Backend: Send + Sync {
    fn complete(
        &self,
        messages: &[Message],
    ) -> impl Future<Output = Result<String, ModelError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let msg = Message::assistant("hola");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "hola"}));
    }

    #[test]
    fn history_entries_deserialize() {
        let json = r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]"#;
        let history: Vec<Message> = serde_json::from_str(json).unwrap();
        assert_eq!(history, vec![Message::user("hi"), Message::assistant("hello")]);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let json = r#"{"role":"tool","content":"x"}"#;
        assert!(serde_json::from_str::<Message>(json).is_err());
    }
}
