//! CLI argument parsing for the todo front-end.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    about = "Keep a remote todo list from the terminal",
    version,
    after_help = "The API location comes from --api-url, then TODO_API_URL, then http://localhost:3000/api"
)]
pub struct Cli {
    /// Base URL of the todo API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show all todos (the default)
    List,

    /// Add a todo; words are joined with spaces
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Flip a todo between pending and completed
    Toggle {
        /// Todo ID
        id: String,
    },

    /// Delete a todo
    Delete {
        /// Todo ID
        id: String,
    },

    /// Ask the backend for its status
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn add_collects_words() {
        let cli = Cli::try_parse_from(["todo", "add", "buy", "milk"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Add {
                text: vec!["buy".to_string(), "milk".to_string()]
            })
        );
    }

    #[test]
    fn add_requires_text() {
        assert!(Cli::try_parse_from(["todo", "add"]).is_err());
    }

    #[test]
    fn api_url_is_global() {
        let cli = Cli::try_parse_from(["todo", "toggle", "3", "--api-url", "http://h/api"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://h/api"));
        assert_eq!(cli.command, Some(Command::Toggle { id: "3".to_string() }));
    }
}
