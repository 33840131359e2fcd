use clap::Parser;
use clipboard_quotes::app;
use clipboard_quotes::cli::{self, Cli};
use clipboard_quotes::clipboard::{ClipboardPublisher, StdoutPublisher, SystemClipboard};
use clipboard_quotes::config::{Config, OutputTarget};
use clipboard_quotes::error::{EXIT_SUCCESS, Result};
use clipboard_quotes::quotes::QuoteSelector;
use std::io;
use std::process;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            err.exit_code()
        }
    };

    process::exit(code);
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if cli::is_informational(&err) => err.exit(),
        Err(err) => return Err(cli::usage_error(&err)),
    };
    let config = Config::from_cli(cli);

    // Seeded once for the whole process.
    let seed = config.resolve_seed();
    debug!(seed, path = %config.quote_file.display(), "Starting");
    let mut selector = QuoteSelector::from_seed(seed);

    let mut publisher: Box<dyn ClipboardPublisher> = match config.output {
        OutputTarget::Clipboard => Box::new(SystemClipboard),
        OutputTarget::Stdout => Box::new(StdoutPublisher::new(io::stdout())),
    };

    app::run(&config.quote_file, &mut selector, publisher.as_mut())?;
    Ok(())
}
