//! # Marquee Server
//!
//! Answers "when is it out and is it on Plex yet?" for movies and shows,
//! using an Overseerr instance as the source of truth.
//!
//! - `marquee-server [--host HOST] [--port PORT]` runs the HTTP endpoint
//! - `marquee-server movie <TITLE>` / `show <TITLE>` print a single reply

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use marquee_core::{Commands, MediaKind, OverseerrProvider};
use marquee_server::{
    AppState, build_router,
    infra::{
        config::{Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions},
        telemetry::init_tracing,
    },
};
use tracing::{info, warn};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "marquee-server")]
#[command(about = "Movie and show release lookups backed by Overseerr")]
struct Cli {
    /// Path to marquee.toml
    #[arg(long, global = true, env = "MARQUEE_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone, Default)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a movie and print the reply
    Movie {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Look up a show and print the reply
    Show {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_runtime_config(&cli)?;
    let commands = build_commands(&config)?;

    match cli.command {
        Some(Command::Movie { title }) => {
            print_reply(&commands, MediaKind::Movie, &title.join(" ")).await
        }
        Some(Command::Show { title }) => {
            print_reply(&commands, MediaKind::Show, &title.join(" ")).await
        }
        None => run_server(with_overrides(config, &cli.serve), commands).await,
    }
}

fn load_runtime_config(cli: &Cli) -> anyhow::Result<Config> {
    let ConfigLoad { config, warnings } =
        ConfigLoader::with_options(ConfigLoaderOptions {
            config_path: cli.config.clone(),
            env_file: cli.env_file.clone(),
        })
        .load()
        .context("failed to load configuration")?;

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    for warning in warnings.items {
        match warning.hint {
            Some(hint) => warn!(%hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }

    Ok(config)
}

fn with_overrides(mut config: Config, args: &ServeArgs) -> Config {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    config
}

fn build_commands(config: &Config) -> anyhow::Result<Arc<Commands>> {
    let provider = OverseerrProvider::new(
        config.overseerr.base_url.clone(),
        &config.overseerr.api_key,
        config.overseerr.timeout,
    )
    .context("failed to build Overseerr client")?;
    info!(
        base_url = %config.overseerr.base_url,
        home_region = %config.release.home_region,
        "Overseerr client ready"
    );

    Ok(Arc::new(Commands::new(
        Arc::new(provider),
        config.release.home_region.clone(),
    )))
}

async fn print_reply(
    commands: &Commands,
    kind: MediaKind,
    title: &str,
) -> anyhow::Result<()> {
    let reply = commands
        .execute(kind, title)
        .await
        .with_context(|| format!("{kind} lookup failed"))?;
    println!("{}", reply.to_markdown());
    Ok(())
}

async fn run_server(
    config: Config,
    commands: Arc<Commands>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .server
        .bind_address()
        .parse()
        .with_context(|| {
            format!("invalid bind address {}", config.server.bind_address())
        })?;

    let app = build_router(AppState::new(commands));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Marquee server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("Marquee server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for shutdown signal");
    }
}
