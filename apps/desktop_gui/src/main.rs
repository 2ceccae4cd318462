mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::WorkbenchApp;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const SERVER_URL_ENV: &str = "CIPHER_WORKBENCH_SERVER_URL";

/// Desktop client for the remote text transform service.
#[derive(Debug, Parser)]
#[command(name = "cipher-workbench")]
struct Args {
    /// Base URL of the transform service; falls back to
    /// CIPHER_WORKBENCH_SERVER_URL, then the local default.
    #[arg(long)]
    server_url: Option<String>,
}

impl Args {
    fn resolve_server_url(&self) -> String {
        self.server_url
            .clone()
            .or_else(|| {
                std::env::var(SERVER_URL_ENV)
                    .ok()
                    .filter(|value| !value.trim().is_empty())
            })
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let raw_url = args.resolve_server_url();
    let server_url =
        url::Url::parse(&raw_url).with_context(|| format!("invalid server url '{raw_url}'"))?;
    tracing::info!(server_url = %server_url, "starting cipher workbench");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(
        server_url.as_str().trim_end_matches('/').to_string(),
        cmd_rx,
        ui_tx,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cipher Workbench")
            .with_inner_size([920.0, 760.0])
            .with_min_inner_size([640.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Cipher Workbench",
        options,
        Box::new(|_cc| Ok(Box::new(WorkbenchApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop shell failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::Args;

    #[test]
    fn explicit_flag_wins_over_environment_and_default() {
        let args = Args {
            server_url: Some("http://transform.example:9000".to_string()),
        };
        assert_eq!(args.resolve_server_url(), "http://transform.example:9000");
    }
}
