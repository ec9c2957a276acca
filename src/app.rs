//! Application state: the published entry list, the live query, and the
//! re-render-on-change contract.
//!
//! `App` is the single state container the UI loop owns. The feed loader is
//! its only writer (via [`AppEvent::FeedLoaded`], handled on the UI task)
//! and the render path its only reader, so no locking is needed.

use crate::feed::AppEntry;
use crate::search;

/// Events sent from background tasks to the UI task.
///
/// Crossing this channel is the "marshal to the UI context" step: state is
/// only ever mutated while handling an event on the UI task.
#[derive(Debug)]
pub enum AppEvent {
    /// The one-shot feed load finished successfully. Replaces the published
    /// list wholesale, preserving the feed's ranking order.
    FeedLoaded(Vec<AppEntry>),
}

/// State for the grid view.
pub struct App {
    /// The published entry list, empty until a load succeeds.
    entries: Vec<AppEntry>,
    /// Current search text.
    query: String,
    /// Set whenever state changed in a way the next render should reflect.
    pub needs_redraw: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the initial state: empty list, empty query, one render due.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            query: String::new(),
            needs_redraw: true,
        }
    }

    /// Applies a background event to the state.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FeedLoaded(entries) => {
                tracing::debug!(count = entries.len(), "Publishing loaded entries");
                self.entries = entries;
                self.needs_redraw = true;
            }
        }
    }

    /// Replaces the search text. The filtered view is derived on read, so
    /// this only marks the state dirty.
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.needs_redraw = true;
        }
    }

    /// The full published list, in feed ranking order.
    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The filtered view: entries whose name contains the current query,
    /// recomputed synchronously on each call.
    pub fn visible(&self) -> Vec<&AppEntry> {
        search::filter(&self.entries, &self.query)
    }
}
