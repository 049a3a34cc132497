//! Command-line argument parsing for marketx.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Look up the given symbols in order
    Analyze {
        symbols: Vec<String>,
        /// Print quote cards only, skip the streamed analysis
        quote_only: bool,
    },
    /// Show version information
    Version,
    /// Show usage (also the default when no symbol is given)
    Help,
    /// An option that is not recognised
    Unknown(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use marketx::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["marketx".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut symbols = Vec::new();
    let mut quote_only = false;

    for arg in args.skip(1) {
        // Skip the program name
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--quote-only" | "-q" => quote_only = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return CliCommand::Unknown(flag.to_string())
            }
            _ => {
                if !arg.trim().is_empty() {
                    symbols.push(arg);
                }
            }
        }
    }

    if symbols.is_empty() {
        CliCommand::Help
    } else {
        CliCommand::Analyze {
            symbols,
            quote_only,
        }
    }
}
