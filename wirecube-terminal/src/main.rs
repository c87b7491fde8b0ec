/// Wirecube Terminal Demo - Rotating Cube
///
/// Renders a tumbling wireframe cube in the terminal with a live FPS
/// readout. Press Q or ESC to quit.

use anyhow::Context;
use clap::Parser;
use wirecube_terminal::TerminalApp;

#[derive(Parser, Debug)]
#[command(version, about = "Rotating wireframe cube demo")]
struct Args {
    /// Nominal driver interval in milliseconds (16 ms is ~60 Hz)
    #[arg(long, default_value_t = 16)]
    interval_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(interval_ms = args.interval_ms, "starting terminal renderer");

    let mut app =
        TerminalApp::new(args.interval_ms).context("failed to initialize the terminal")?;
    app.run().context("renderer loop failed")?;

    tracing::info!("terminal renderer stopped");
    Ok(())
}
