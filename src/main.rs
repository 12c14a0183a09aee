//! Vaani - voice agent session console
//!
//! Opens the session window by default. `connect`, `config` and `serve`
//! cover the headless paths.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use vaani::config::{LoggingConfig, ThemeChoice};
use vaani::session::SessionTransport;
use vaani::ui::{AppState, Theme, VaaniApp};
use vaani::{AppConfig, CostEstimate, HttpSessionTransport, SessionConfig, SessionRunner, ViewMode};

#[derive(Parser)]
#[command(name = "vaani")]
#[command(about = "Voice agent session console")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the session window (default)
    Gui {
        /// Tab to open on
        #[arg(short, long, value_enum)]
        mode: Option<ViewMode>,

        /// Use the light color scheme
        #[arg(long)]
        light: bool,
    },
    /// Request a session once and print the backend reply
    Connect,
    /// Show the session configuration and cost estimate
    Config,
    /// Run the development backend
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<std::net::IpAddr>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    init_tracing(&config.logging);

    match cli.command.unwrap_or(Command::Gui {
        mode: None,
        light: false,
    }) {
        Command::Gui { mode, light } => run_gui(config, mode, light),
        Command::Connect => run_connect(&config),
        Command::Config => {
            print_config(&config);
            Ok(())
        }
        Command::Serve { host, port } => run_server(config, host, port),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.clone().into());

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!logging.json).then(tracing_subscriber::fmt::layer))
        .init();
}

fn run_gui(mut config: AppConfig, mode: Option<ViewMode>, light: bool) -> Result<()> {
    if let Some(mode) = mode {
        config.ui.mode = mode;
    }
    if light {
        config.ui.theme = ThemeChoice::Light;
    }

    info!("Starting Vaani, backend {}", config.backend_url);

    let transport = HttpSessionTransport::from_config(&config)?;
    let worker = SessionRunner::new(Arc::new(transport), SessionConfig::default()).start_worker()?;
    let state = AppState::from_config(&config).with_worker(worker);
    let theme = Theme::from_choice(config.ui.theme);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title("Vaani Voice AI Platform"),
        ..Default::default()
    };

    eframe::run_native(
        "Vaani",
        options,
        Box::new(move |cc| Ok(Box::new(VaaniApp::new(cc, state, theme)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {}", e))
}

fn run_connect(config: &AppConfig) -> Result<()> {
    let transport = HttpSessionTransport::from_config(config)?;
    let session_config = SessionConfig::default();

    let runtime = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    let handle = runtime
        .block_on(transport.start_session(Uuid::new_v4(), &session_config))
        .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))?;

    println!("{}", serde_json::to_string_pretty(&handle.payload)?);
    Ok(())
}

fn print_config(config: &AppConfig) {
    let session_config = SessionConfig::default();
    println!("Backend: {}", config.backend_url);
    println!();
    println!("Current Configuration:");
    for (label, value) in session_config.display_rows() {
        println!("  {:<9} {}", format!("{}:", label), value);
    }

    let cost = CostEstimate::default();
    println!();
    println!("{}", cost.title());
    println!("  {}", cost.summary());
}

fn run_server(
    mut config: AppConfig,
    host: Option<std::net::IpAddr>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    runtime.block_on(vaani::server::serve(&config.server))?;
    Ok(())
}
