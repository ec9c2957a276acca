//! appgrid: fetch Apple's top free iOS apps feed once and browse it as a
//! text grid with live name filtering.
//!
//! The flow is a straight line: [`feed::load_in_background`] issues one GET
//! and decodes the JSON ranking, the result is marshaled to the UI task as an
//! [`app::AppEvent`], [`app::App`] holds the published list, and
//! [`search::filter`] derives the visible subsequence for the current query.
//! Failures of any kind are logged and leave the list empty; there is no
//! retry and no user-facing error surface.

pub mod app;
pub mod feed;
pub mod search;
pub mod ui;
pub mod util;
