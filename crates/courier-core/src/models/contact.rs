use serde::{Deserialize, Serialize};

/// A conversation peer. Identity is `id`, fixed at seed time; `last_message`
/// and `last_active` are derived fields, rewritten whenever a message touches
/// this contact's conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub last_active: String,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
}

impl Contact {
    pub fn new(id: u32, name: impl Into<String>, last_active: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            last_active: last_active.into(),
            avatar: "/placeholder-user.jpg".to_string(),
            last_message: None,
        }
    }

    /// First two characters of the name, uppercased. Shown where no avatar
    /// image can be rendered.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}
