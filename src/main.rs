//! Entry point: parse CLI, build the client and print the payload.

use clap::Parser;
use tmapi::{
    cli::Tmapi,
    commands::{render, run},
    Result, TmClient,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let app = Tmapi::parse();

    let client = TmClient::new(app.client.to_config())?;
    let payload = run(&client, app.command).await?;
    println!("{}", render(payload.as_ref(), app.compact)?);

    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON. `RUST_LOG` overrides the level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tmapi=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
