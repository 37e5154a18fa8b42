//! Command-line configuration
//!
//! Argument parsing with clap. The CLI only selects what to run and what to
//! show; every stage behaves the same whichever flags are given.

use clap::Parser as CliParser;
use std::path::PathBuf;

/// CLI interface using clap
#[derive(CliParser, Debug)]
#[command(
    name = "tacfront",
    version,
    about = "Parse a small C-family program and lower assignments to three-address code"
)]
pub struct Cli {
    /// Source file to compile
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Build the equation tree from TEXT and lower it instead of the program
    #[arg(short, long, value_name = "TEXT")]
    pub equation: Option<String>,

    /// Print the source after comment removal
    #[arg(long)]
    pub cleaned: bool,

    /// Print the classified token list
    #[arg(long)]
    pub tokens: bool,

    /// Print the parse tree outline
    #[arg(long)]
    pub tree: bool,

    /// Browse the results in the terminal UI instead of printing them
    #[arg(long)]
    pub tui: bool,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter when RUST_LOG is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let cli = Cli::try_parse_from(["tacfront", "main.cpp"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("main.cpp"));
        assert!(cli.equation.is_none());
        assert!(!cli.tui);
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "tacfront", "-e", "x=a*b+3", "--cleaned", "--tokens", "--tree", "--tui", "-v",
            "main.cpp",
        ])
        .unwrap();
        assert_eq!(cli.equation.as_deref(), Some("x=a*b+3"));
        assert!(cli.cleaned && cli.tokens && cli.tree && cli.tui);
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["tacfront"]).is_err());
    }
}
