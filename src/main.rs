use clap::Parser;
use tracing_subscriber::EnvFilter;

use mcp_codeforces_server::client::CodeforcesApi;
use mcp_codeforces_server::config::{ServerConfig, TransportKind};
use mcp_codeforces_server::http;
use mcp_codeforces_server::server::McpServer;

/// Codeforces API tools over the Model Context Protocol.
#[derive(Parser, Debug)]
#[command(name = "mcp-codeforces-server", version)]
struct Cli {
    /// Transport to serve on (overrides MCP_TRANSPORT)
    #[arg(long, value_enum)]
    transport: Option<TransportKind>,

    /// HTTP bind host (overrides MCP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// HTTP bind port (overrides MCP_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries the stdio transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config = match ServerConfig::from_env() {
        Ok(c) => c.with_overrides(cli.transport, cli.host, cli.port),
        Err(e) => {
            eprintln!("mcp-codeforces-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let api = CodeforcesApi::from_config(&config);

    let outcome = match config.transport {
        TransportKind::Stdio => McpServer::new(api).run().await,
        TransportKind::Http => http::serve(&config.host, config.port, api)
            .await
            .map_err(Into::into),
    };

    if let Err(e) = outcome {
        eprintln!("mcp-codeforces-server: fatal error: {e}");
        std::process::exit(1);
    }
}
