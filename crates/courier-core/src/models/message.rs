use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

/// Id the server assigns to this client. The wire protocol identifies the
/// local user as sender 1 on outbound messages.
pub const LOCAL_USER_ID: u32 = 1;

/// One chat message. Immutable once created; its position in a conversation
/// log is its identity on the wire. `client_id` is a local strengthening of
/// that identity: outbound messages carry a generated UUID so a server echo
/// of our own send can be recognized and dropped. It is omitted from JSON
/// when absent, keeping the wire format a superset of the original protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub sender_id: u32,
    pub receiver_id: u32,
    pub message_text: String,
    /// ISO-8601 creation time, as produced by the sending client.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl Message {
    /// Build an outbound message from the local user to `receiver_id`,
    /// stamped with the current time and a fresh client id.
    pub fn outbound(receiver_id: u32, message_text: impl Into<String>) -> Self {
        Self {
            sender_id: LOCAL_USER_ID,
            receiver_id,
            message_text: message_text.into(),
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            client_id: Some(uuid::Uuid::new_v4().to_string()),
        }
    }

    pub fn is_from_local_user(&self) -> bool {
        self.sender_id == LOCAL_USER_ID
    }

    /// The contact id this message belongs to: the peer on the other side,
    /// regardless of direction.
    pub fn conversation_id(&self) -> u32 {
        if self.is_from_local_user() {
            self.receiver_id
        } else {
            self.sender_id
        }
    }
}
