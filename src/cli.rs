use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tapcounter", version, about = "Tap counter with a timestamped history")]
pub struct Cli {
    /// Config file (default: platform config dir/tapcounter/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Preferences file holding the count and history
    #[arg(long, value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive counter (default)
    Run,
    /// Increment once and print the recorded entry
    Tap,
    /// Subtract one from a positive count
    Minus {
        /// Confirm the decrement
        #[arg(long)]
        yes: bool,
    },
    /// Reset the count and erase the history
    Clear {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Print the count and history
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy the history to the clipboard
    Copy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["tapcounter"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.store.is_none());
    }

    #[test]
    fn global_store_after_subcommand() {
        let cli = Cli::try_parse_from(["tapcounter", "minus", "--yes", "--store", "/tmp/p.json"])
            .unwrap();
        assert_eq!(cli.command, Some(Command::Minus { yes: true }));
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/p.json")));
    }
}
