//! Volatile history of saved quotes.
//!
//! [`QuoteStore`] is a plain owned list: mutation needs `&mut`, so a single
//! owner is the only writer. [`SharedQuoteStore`] wraps one in a mutex for
//! callers that hand the store to more than one thread. Nothing here is
//! written to disk; the history ends with the process.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::models::SavedQuote;

/// Ordered list of saved quotes, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteStore {
    quotes: Vec<SavedQuote>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a quote to the end of the history.
    pub fn add(
        &mut self,
        quote: SavedQuote,
    ) {
        self.quotes.push(quote);
    }

    /// Removes and returns the quote at `index`, shifting later quotes down.
    ///
    /// An out-of-range index leaves the store untouched and returns `None`.
    pub fn remove(
        &mut self,
        index: usize,
    ) -> Option<SavedQuote> {
        if index >= self.quotes.len() {
            debug!(index, len = self.quotes.len(), "ignoring out-of-range quote removal");
            return None;
        }
        Some(self.quotes.remove(index))
    }

    /// Saved quotes in insertion order.
    pub fn quotes(&self) -> &[SavedQuote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Cloneable, thread-safe handle to one [`QuoteStore`].
///
/// Every clone refers to the same list. Create one per process and pass it
/// to whoever needs the history.
#[derive(Debug, Clone, Default)]
pub struct SharedQuoteStore {
    inner: Arc<Mutex<QuoteStore>>,
}

impl SharedQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &self,
        quote: SavedQuote,
    ) {
        self.lock().add(quote);
    }

    /// See [`QuoteStore::remove`].
    pub fn remove(
        &self,
        index: usize,
    ) -> Option<SavedQuote> {
        self.lock().remove(index)
    }

    /// Copy of the current history in insertion order.
    pub fn snapshot(&self) -> Vec<SavedQuote> {
        self.lock().quotes().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every operation is a single push/remove/read, so a panicking holder
    // cannot leave the list half-updated.
    fn lock(&self) -> MutexGuard<'_, QuoteStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
