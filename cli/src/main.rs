use clap::Parser;
use todo_cli::{Cli, Command, UreqTransport};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = todo_cli::resolve_config(&cli);
    tracing::debug!(base_url = %config.base_url, "resolved config");

    let command = cli.command.unwrap_or(Command::List);
    let stdout = std::io::stdout();
    todo_cli::run(command, &config, UreqTransport::new(), &mut stdout.lock())
}
