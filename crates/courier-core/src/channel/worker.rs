use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use super::Envelope;
use crate::events::ChannelEvent;
use crate::models::Message;

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Why `pump` returned: a shutdown command terminates the worker outright,
/// a lost link leaves it draining commands.
enum PumpExit {
    Shutdown,
    LinkLost,
}

#[derive(Debug)]
pub enum ChannelCommand {
    /// Fire-and-forget send. No acknowledgment, no retry, no timeout.
    Send(Message),
    Shutdown,
}

/// Clonable handle for issuing commands to the channel worker. The worker is
/// owned by the runtime; views get a handle, never the connection itself.
#[derive(Clone)]
pub struct ChannelHandle {
    command_tx: mpsc::UnboundedSender<ChannelCommand>,
}

impl ChannelHandle {
    /// Create a handle and the command receiver its worker will consume.
    /// Tests pair a handle with their own receiver to observe commands.
    pub fn pair() -> (Self, mpsc::UnboundedReceiver<ChannelCommand>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        (Self { command_tx }, command_rx)
    }

    /// Queue a command for the worker. Failure means the worker is gone,
    /// which callers treat the same as a dead link: silently.
    pub fn send(&self, command: ChannelCommand) {
        if self.command_tx.send(command).is_err() {
            tracing::debug!("channel worker gone, command dropped");
        }
    }
}

pub struct ChannelWorker {
    url: String,
    command_rx: mpsc::UnboundedReceiver<ChannelCommand>,
    event_tx: mpsc::UnboundedSender<ChannelEvent>,
}

impl ChannelWorker {
    pub fn new(
        url: String,
        command_rx: mpsc::UnboundedReceiver<ChannelCommand>,
        event_tx: mpsc::UnboundedSender<ChannelEvent>,
    ) -> Self {
        Self {
            url,
            command_rx,
            event_tx,
        }
    }

    /// Connect once and pump frames until shutdown or the link drops.
    /// There is no reconnect: a failed or lost connection leaves the worker
    /// draining commands so sends stay fire-and-forget instead of erroring.
    pub async fn run(mut self) {
        match connect_async(self.url.as_str()).await {
            Ok((stream, _)) => {
                tracing::info!(url = %self.url, "event channel connected");
                let _ = self.event_tx.send(ChannelEvent::Connected);
                let exit = self.pump(stream).await;
                tracing::info!("event channel closed");
                let _ = self.event_tx.send(ChannelEvent::Disconnected);
                // A shutdown already consumed its command; waiting for
                // another one here would hang the runtime's join.
                if matches!(exit, PumpExit::Shutdown) {
                    return;
                }
            }
            Err(e) => {
                tracing::warn!(url = %self.url, "event channel connect failed: {}", e);
                let _ = self.event_tx.send(ChannelEvent::Disconnected);
            }
        }

        self.drain_commands().await;
    }

    async fn pump(&mut self, stream: WsStream) -> PumpExit {
        let (mut sink, mut source) = stream.split();

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(ChannelCommand::Send(message)) => {
                        send_message(&mut sink, &message).await;
                    }
                    Some(ChannelCommand::Shutdown) | None => {
                        let _ = sink.close().await;
                        return PumpExit::Shutdown;
                    }
                },
                frame = source.next() => match frame {
                    Some(Ok(WsMessage::Text(text))) => {
                        handle_frame(&self.event_tx, text.as_str());
                    }
                    Some(Ok(WsMessage::Close(_))) | None => return PumpExit::LinkLost,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!("event channel read error: {}", e);
                        return PumpExit::LinkLost;
                    }
                },
            }
        }
    }

    /// With no link, consume commands so handles never block or error.
    async fn drain_commands(&mut self) {
        while let Some(command) = self.command_rx.recv().await {
            match command {
                ChannelCommand::Shutdown => return,
                ChannelCommand::Send(_) => {
                    tracing::debug!("no connection, outbound message dropped");
                }
            }
        }
    }
}

async fn send_message(sink: &mut SplitSink<WsStream, WsMessage>, message: &Message) {
    let envelope = match Envelope::send_message(message) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::debug!("message encode failed: {}", e);
            return;
        }
    };
    let text = match serde_json::to_string(&envelope) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("envelope encode failed: {}", e);
            return;
        }
    };
    if let Err(e) = sink.send(WsMessage::Text(text.into())).await {
        tracing::debug!("send failed, message dropped: {}", e);
    }
}

fn handle_frame(event_tx: &mpsc::UnboundedSender<ChannelEvent>, text: &str) {
    let envelope: Envelope = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::debug!("unparseable frame dropped: {}", e);
            return;
        }
    };
    if let Some(message) = envelope.into_inbound_message() {
        if event_tx.send(ChannelEvent::Message(message)).is_err() {
            tracing::debug!("event receiver dropped, inbound message discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_worker_terminates_on_shutdown_while_connected() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
            // Hold the link open until the client closes it.
            while let Some(Ok(_)) = ws.next().await {}
        });

        let (handle, command_rx) = ChannelHandle::pair();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let worker = ChannelWorker::new(format!("ws://{}", addr), command_rx, event_tx);
        let join = tokio::spawn(worker.run());

        match event_rx.recv().await {
            Some(ChannelEvent::Connected) => {}
            other => panic!("expected Connected, got {:?}", other),
        }

        handle.send(ChannelCommand::Shutdown);
        // One Shutdown must suffice even though the sender stays alive.
        tokio::time::timeout(Duration::from_secs(2), join)
            .await
            .expect("worker kept running after shutdown")
            .unwrap();

        match event_rx.recv().await {
            Some(ChannelEvent::Disconnected) => {}
            other => panic!("expected Disconnected, got {:?}", other),
        }

        server.abort();
    }

    #[tokio::test]
    async fn test_worker_without_connection_exits_on_shutdown() {
        let (handle, command_rx) = ChannelHandle::pair();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        // Nothing listens on port 9; connect fails fast.
        let worker = ChannelWorker::new("ws://127.0.0.1:9/ws".to_string(), command_rx, event_tx);
        let join = tokio::spawn(worker.run());

        match event_rx.recv().await {
            Some(ChannelEvent::Disconnected) => {}
            other => panic!("expected Disconnected, got {:?}", other),
        }

        handle.send(ChannelCommand::Send(Message::outbound(2, "dropped")));
        handle.send(ChannelCommand::Shutdown);
        tokio::time::timeout(Duration::from_secs(2), join)
            .await
            .expect("worker kept running after shutdown")
            .unwrap();
    }
}
