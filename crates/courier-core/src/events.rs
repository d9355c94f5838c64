use crate::models::Message;

/// Events delivered by the channel worker to whoever holds the inbound
/// receiver. Exactly one receiver exists per runtime; dropping it stops
/// delivery without closing the underlying connection.
#[derive(Debug)]
pub enum ChannelEvent {
    /// The connection to the event channel server is up.
    Connected,
    /// The connection dropped. No reconnect is attempted.
    Disconnected,
    /// An inbound `message` event.
    Message(Message),
}
