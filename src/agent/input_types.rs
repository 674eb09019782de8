use serde::{Deserialize, Serialize};

/// Role of a chat message author. Only user turns are ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single role-tagged chat message
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
}

/// Chat request handed to a stateless LLM.
///
/// Built fresh for every call and dropped once the reply text has been
/// extracted; no conversation state outlives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier understood by the serving process
    pub model: String,
    /// Ordered conversation
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// A new conversation holding one user message
    pub fn single_user(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(content)],
        }
    }
}
