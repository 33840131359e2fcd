pub mod collection;
pub mod selector;

pub use collection::QuoteCollection;
pub use selector::{QuoteSelector, SelectedQuote};
