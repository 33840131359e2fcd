use crate::error::QuoteError;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clipboard-quotes", version)]
#[command(about = "Copy a random quote from a text file to the clipboard", long_about = None)]
pub struct Cli {
    /// Quote file, one quote per line (defaults to ../Quotes.txt)
    pub quote_file: Option<PathBuf>,

    /// Seed the random pick with this value instead of the current time
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the quote to standard output instead of the clipboard
    #[arg(long)]
    pub stdout: bool,
}

/// Help and version requests are reported through clap's error type but are not failures.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

pub fn usage_error(err: &clap::Error) -> QuoteError {
    let rendered = err.render().to_string();
    QuoteError::Usage(rendered.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["clipboard-quotes"]).unwrap();
        assert_eq!(cli.quote_file, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.stdout);
    }

    #[test]
    fn test_path_argument() {
        let cli = Cli::try_parse_from(["clipboard-quotes", "my/quotes.txt"]).unwrap();
        assert_eq!(cli.quote_file, Some(PathBuf::from("my/quotes.txt")));
    }

    #[test]
    fn test_flags() {
        let cli =
            Cli::try_parse_from(["clipboard-quotes", "--seed", "12", "--stdout", "q.txt"]).unwrap();
        assert_eq!(cli.seed, Some(12));
        assert!(cli.stdout);
        assert_eq!(cli.quote_file, Some(PathBuf::from("q.txt")));
    }

    #[test]
    fn test_extra_argument_is_usage_error() {
        let err = Cli::try_parse_from(["clipboard-quotes", "a.txt", "b.txt"]).unwrap_err();
        assert!(!is_informational(&err));

        let quote_err = usage_error(&err);
        assert_eq!(quote_err.exit_code(), -3);
        assert!(quote_err.to_string().contains("Usage:"));
    }

    #[test]
    fn test_help_is_informational() {
        let err = Cli::try_parse_from(["clipboard-quotes", "--help"]).unwrap_err();
        assert!(is_informational(&err));

        let err = Cli::try_parse_from(["clipboard-quotes", "--version"]).unwrap_err();
        assert!(is_informational(&err));
    }

    #[test]
    fn test_invalid_seed_is_usage_error() {
        let err = Cli::try_parse_from(["clipboard-quotes", "--seed", "soon"]).unwrap_err();
        assert!(!is_informational(&err));
        assert_eq!(usage_error(&err).exit_code(), -3);
    }
}
