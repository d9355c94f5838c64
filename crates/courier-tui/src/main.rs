mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use courier_core::config::{CoreConfig, DEFAULT_SERVER_URL};
use courier_core::logging;
use courier_core::runtime::CoreRuntime;

use crate::runtime::run_app;
use crate::ui::App;

#[derive(Parser)]
#[command(name = "courier-tui", about = "Terminal messenger client")]
struct Args {
    /// Directory for the local message cache.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// WebSocket endpoint of the event channel server.
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Restore the terminal before the panic message prints, or it is lost
    // inside the alternate screen.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));

    logging::init_logging();

    let args = Args::parse();
    let config = CoreConfig::new(
        args.data_dir.unwrap_or_else(CoreConfig::default_data_dir),
        args.server,
    );

    let mut core_runtime = CoreRuntime::new(config)?;
    let mut app = App::new(core_runtime.store(), core_runtime.handle());
    let event_rx = core_runtime
        .take_event_rx()
        .ok_or_else(|| anyhow::anyhow!("Core runtime already has an active event receiver"))?;

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, &mut core_runtime, event_rx).await;

    core_runtime.shutdown().await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
