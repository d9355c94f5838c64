//! Event channel client.
//!
//! The server is an external collaborator reachable over a single persistent
//! WebSocket carrying named JSON events: outbound `sendMessage`, inbound
//! `message`, each with a Message payload. The connection is process-wide,
//! established once at startup, with no reconnect, no send buffering, and no
//! delivery acknowledgment.

mod worker;

pub use worker::{ChannelCommand, ChannelHandle, ChannelWorker};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Message;

pub const EVENT_SEND_MESSAGE: &str = "sendMessage";
pub const EVENT_MESSAGE: &str = "message";

/// Wire envelope: `{"event": "<name>", "data": <payload>}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub event: String,
    pub data: Value,
}

impl Envelope {
    /// Wrap an outbound message in a `sendMessage` envelope.
    pub fn send_message(message: &Message) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event: EVENT_SEND_MESSAGE.to_string(),
            data: serde_json::to_value(message)?,
        })
    }

    /// Extract the message from an inbound `message` envelope. Returns None
    /// for other event names or payloads that are not Message-shaped.
    pub fn into_inbound_message(self) -> Option<Message> {
        if self.event != EVENT_MESSAGE {
            return None;
        }
        serde_json::from_value(self.data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_envelope_shape() {
        let msg = Message {
            sender_id: 1,
            receiver_id: 2,
            message_text: "hi".to_string(),
            timestamp: "2024-05-01T14:05:00Z".to_string(),
            client_id: None,
        };
        let envelope = Envelope::send_message(&msg).unwrap();
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["event"], "sendMessage");
        assert_eq!(json["data"]["senderId"], 1);
        assert_eq!(json["data"]["messageText"], "hi");
    }

    #[test]
    fn test_inbound_message_parsed() {
        let raw = r#"{"event":"message","data":{"senderId":2,"receiverId":1,"messageText":"hello","timestamp":"T2"}}"#;
        let envelope: Envelope = serde_json::from_str(raw).unwrap();
        let msg = envelope.into_inbound_message().unwrap();
        assert_eq!(msg.sender_id, 2);
        assert_eq!(msg.message_text, "hello");
    }

    #[test]
    fn test_unknown_event_ignored() {
        let raw = r#"{"event":"typing","data":{"senderId":2}}"#;
        let envelope: Envelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.into_inbound_message().is_none());
    }

    #[test]
    fn test_malformed_payload_ignored() {
        let raw = r#"{"event":"message","data":{"bogus":true}}"#;
        let envelope: Envelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.into_inbound_message().is_none());
    }
}
