use rand::Rng;
use std::path::Path;
use tracing::{debug, info};

use crate::clipboard::ClipboardPublisher;
use crate::error::{QuoteError, Result};
use crate::quotes::{QuoteCollection, QuoteSelector};

/// Loads the quote file, picks one quote and hands it to the publisher.
///
/// Returns the formatted quote that was published.
pub fn run<R, P>(path: &Path, selector: &mut QuoteSelector<R>, publisher: &mut P) -> Result<String>
where
    R: Rng,
    P: ClipboardPublisher + ?Sized,
{
    let quotes = QuoteCollection::from_file(path)?;

    if quotes.is_empty() {
        return Err(QuoteError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    let selected = selector.select(&quotes)?;
    debug!(index = selected.index, total = quotes.len(), "Picked quote");

    let formatted = selected.formatted();
    publisher
        .publish(&formatted)
        .map_err(|e| QuoteError::ClipboardUnavailable(format!("{e:#}")))?;

    info!(path = %path.display(), index = selected.index, "Published quote");
    Ok(formatted)
}
