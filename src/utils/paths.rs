use std::path::PathBuf;

/// Quote file used when none is given, relative to the working directory.
pub const DEFAULT_QUOTE_FILE: &str = "../Quotes.txt";

pub fn get_default_quote_path() -> PathBuf {
    PathBuf::from(DEFAULT_QUOTE_FILE)
}
