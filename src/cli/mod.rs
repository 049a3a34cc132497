//! CLI module for marketx.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//!
//! # Usage
//!
//! ```ignore
//! use marketx::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! // Symbols given, continue with the lookups
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_version_command, version_line, VERSION};

/// Symbols suggested in the usage text.
pub const POPULAR_SYMBOLS: [&str; 6] = ["AAPL", "GOOGL", "MSFT", "TSLA", "NVDA", "AMZN"];

/// Usage text shown for `--help` and when no symbol is given.
pub fn usage() -> String {
    format!(
        "Usage: marketx [OPTIONS] <SYMBOL>...\n\
         \n\
         Look up stock quotes and stream an AI analysis for each symbol.\n\
         \n\
         Options:\n\
         \x20 -q, --quote-only  Print quote cards only, skip the analysis\n\
         \x20 -V, --version     Print version\n\
         \x20 -h, --help        Print this help\n\
         \n\
         Popular: {}",
        POPULAR_SYMBOLS.join(" ")
    )
}

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `Analyze` (lookups should run)
/// * `Some(code)` - The process exit code for an informational command
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(0)
        }
        CliCommand::Help => {
            println!("{}", usage());
            Some(0)
        }
        CliCommand::Unknown(flag) => {
            eprintln!("error: unknown option '{}'\n\n{}", flag, usage());
            Some(2)
        }
        CliCommand::Analyze { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_returns_none() {
        let command = CliCommand::Analyze {
            symbols: vec!["AAPL".to_string()],
            quote_only: false,
        };
        assert!(run_cli_command(&command).is_none());
    }

    #[test]
    fn test_unknown_exit_code() {
        assert_eq!(run_cli_command(&CliCommand::Unknown("--x".to_string())), Some(2));
    }

    #[test]
    fn test_usage_lists_popular_symbols() {
        let text = usage();
        assert!(text.contains("--quote-only"));
        assert!(text.contains("AAPL GOOGL MSFT TSLA NVDA AMZN"));
    }
}
