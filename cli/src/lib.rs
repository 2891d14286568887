//! Terminal front-end for the todo client core.
//!
//! Every invocation loads the list once, runs at most one command and
//! prints the resulting snapshot. Failed operations show up as the banner
//! line; they never turn into a non-zero exit.

pub mod args;
pub mod render;
pub mod transport;

use std::io::Write;

use todo_core::{ClientConfig, TodoClient, TodoId, Transport};

pub use args::{Cli, Command};
pub use render::render;
pub use transport::UreqTransport;

/// `--api-url` wins over the environment.
pub fn resolve_config(cli: &Cli) -> ClientConfig {
    match &cli.api_url {
        Some(url) => ClientConfig::new(url.clone()),
        None => ClientConfig::from_env(),
    }
}

/// Run one command against `transport` and write what the user sees to `out`.
pub fn run<T: Transport>(
    command: Command,
    config: &ClientConfig,
    transport: T,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut client = TodoClient::new(config, transport);

    if command == Command::Health {
        writeln!(out, "{}", client.health_probe())?;
        return Ok(());
    }

    client.list();
    match command {
        Command::List | Command::Health => {}
        Command::Add { text } => {
            client.create(&text.join(" "));
        }
        Command::Toggle { id } => client.toggle(&TodoId::new(id)),
        Command::Delete { id } => client.delete(&TodoId::new(id)),
    }

    write!(out, "{}", render(client.state()))?;
    Ok(())
}
