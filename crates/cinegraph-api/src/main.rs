//! CLI entry point for the cinegraph GraphQL server.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use cinegraph_api::{build_schema, server};
use cinegraph_core::Settings;
use cinegraph_graph::{GraphClient, GraphConfig, MemoryStore};

#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(about = "GraphQL API over a Neo4j movie graph")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file prefix (default: cinegraph).
    #[arg(short, long, default_value = "cinegraph", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the GraphQL API (the default).
    Serve {
        /// Override the listen host.
        #[arg(long)]
        host: Option<String>,

        /// Override the listen port.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the GraphQL schema (SDL) and exit.
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Schema => {
            // The SDL does not depend on the store, so no connection is made.
            let schema = build_schema(Arc::new(MemoryStore::new()));
            println!("{}", schema.sdl());
        }
        Command::Serve { host, port } => {
            let mut settings = Settings::load(&cli.config)?;
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }

            let graph = GraphClient::connect(&GraphConfig::from(&settings.neo4j)).await?;
            let schema = build_schema(Arc::new(graph));
            server::run(schema, &settings.server).await?;
        }
    }

    Ok(())
}
