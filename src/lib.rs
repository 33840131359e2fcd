pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod quotes;
pub mod utils;

pub use clipboard::{ClipboardPublisher, StdoutPublisher, SystemClipboard};
pub use error::{QuoteError, Result};
pub use quotes::{QuoteCollection, QuoteSelector, SelectedQuote};
