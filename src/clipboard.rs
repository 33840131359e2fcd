use anyhow::{Context, Result};
use arboard::Clipboard;
use std::io::Write;
use tracing::debug;

/// Something that can take the selected quote and make it available to the user.
pub trait ClipboardPublisher {
    fn publish(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened fresh for every publish.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardPublisher for SystemClipboard {
    fn publish(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Copy text to the system clipboard.
///
/// Returns Ok(()) on success, or an error if clipboard is unavailable.
/// On Linux the clipboard handle is held only for the duration of this call;
/// arboard hands the contents to a running clipboard manager when it is dropped.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy text to clipboard")?;
    debug!(chars = text.chars().count(), "Copied text to clipboard");
    Ok(())
}

/// Writes the quote to a stream instead of the clipboard.
pub struct StdoutPublisher<W: Write> {
    writer: W,
}

impl<W: Write> StdoutPublisher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClipboardPublisher for StdoutPublisher<W> {
    fn publish(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text).context("Failed to write quote to output")?;
        self.writer.flush().context("Failed to flush output")?;
        Ok(())
    }
}
