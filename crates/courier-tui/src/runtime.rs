use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

use courier_core::events::ChannelEvent;
use courier_core::runtime::CoreRuntime;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

pub(crate) async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    core_runtime: &mut CoreRuntime,
    mut event_rx: mpsc::UnboundedReceiver<ChannelEvent>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    // Tick keeps relative labels and the status bar fresh even when idle.
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.quit();
                            } else {
                                handle_key(app, key);
                            }
                        }
                        Event::Mouse(mouse) => match mouse.kind {
                            MouseEventKind::ScrollUp => app.scroll_up(3),
                            MouseEventKind::ScrollDown => app.scroll_down(3),
                            _ => {}
                        },
                        Event::Paste(text) => app.handle_paste(&text),
                        _ => {}
                    }
                }
            }

            Some(event) = event_rx.recv() => {
                handle_channel_event(app, core_runtime, event);
            }

            _ = tick_interval.tick() => {}
        }
    }
    Ok(())
}

fn handle_channel_event(app: &mut App, core_runtime: &CoreRuntime, event: ChannelEvent) {
    match event {
        ChannelEvent::Connected => app.connected = true,
        ChannelEvent::Disconnected => app.connected = false,
        ChannelEvent::Message(message) => {
            let conversation_id = message.conversation_id();
            core_runtime.apply_inbound(message);
            // Pin the view to the newest message when the active conversation
            // grew; other conversations only update their sidebar summary.
            app.on_conversation_updated(conversation_id);
        }
    }
}
