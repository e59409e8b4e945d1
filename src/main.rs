use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use pasteboard_dialog::bootstrap::{self, tracing::init_tracing_subscriber};
use pd_core::Want;
use pd_platform::HeadlessDisplay;

/// Drive the pasteboard consent dialog through one host session.
#[derive(Parser, Debug)]
#[command(name = "pasteboard-dialog", version, about)]
struct Cli {
    /// TOML configuration file; built-in defaults otherwise.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the application requesting paste access.
    #[arg(long)]
    app_name: Option<String>,

    /// Kind of device the request originates from.
    #[arg(long)]
    device_type: Option<String>,

    /// Display width in pixels.
    #[arg(long, default_value_t = 1080)]
    width: u32,

    /// Display height in pixels.
    #[arg(long, default_value_t = 2340)]
    height: u32,

    /// Press cancel once the dialog is on screen.
    #[arg(long)]
    cancel: bool,

    /// How long the dialog stays up before the host destroys it.
    #[arg(long, default_value_t = 0)]
    linger_ms: u64,
}

impl Cli {
    fn want(&self) -> Want {
        let mut want = Want::new();
        if let Some(app_name) = &self.app_name {
            want = want.with_param("appName", app_name.as_str());
        }
        if let Some(device_type) = &self.device_type {
            want = want.with_param("deviceType", device_type.as_str());
        }
        want
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = bootstrap::resolve_config(cli.config.clone())?;
    let mut host = bootstrap::wire_headless(config, HeadlessDisplay::new(cli.width, cli.height));
    let want = cli.want();

    host.ability.on_create(&want);
    let stub = host.ability.on_connect(&want);
    info!(descriptor = stub.descriptor(), stub_id = %stub.id(), "connected");

    for outcome in host.ability.wait_idle().await {
        if !outcome.is_shown() {
            warn!(?outcome, "dialog was not shown");
        }
    }

    if cli.cancel && !host.ability.cancel_current().await {
        warn!("nothing to cancel");
    }

    tokio::time::sleep(Duration::from_millis(cli.linger_ms)).await;
    host.ability.on_destroy().await;

    while let Ok(message) = host.native_rx.try_recv() {
        println!("{}", serde_json::to_string(&message)?);
    }
    for text in host.toast.history() {
        println!("toast: {text}");
    }

    Ok(())
}
