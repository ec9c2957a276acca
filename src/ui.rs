//! Terminal presentation: a fixed-column text grid and the event loop that
//! re-renders it on change.
//!
//! The loop multiplexes two event sources with `tokio::select!`:
//!
//! - **Background load**: the one-shot [`AppEvent`] from the feed fetcher
//! - **Query input**: lines read from stdin; each line replaces the filter
//!
//! Every state change marks the app dirty and the next loop iteration
//! re-renders the filtered grid. EOF on stdin exits.

use crate::app::{App, AppEvent};
use crate::util::pad_to_width;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Number of grid columns.
const GRID_COLUMNS: usize = 3;
/// Display width of one grid cell in terminal columns.
const CELL_WIDTH: usize = 28;

/// Renders the filtered entry grid as text.
///
/// A header line with the visible/total counts and the active filter, then
/// the surviving entries laid out three cells per row in ranking order.
pub fn render_grid(app: &App) -> String {
    let visible = app.visible();
    let mut out = String::new();

    if app.query().is_empty() {
        out.push_str(&format!("{} of {} apps\n", visible.len(), app.entries().len()));
    } else {
        out.push_str(&format!(
            "{} of {} apps (filter: {:?})\n",
            visible.len(),
            app.entries().len(),
            app.query()
        ));
    }

    for row in visible.chunks(GRID_COLUMNS) {
        let mut line = String::new();
        for entry in row {
            line.push_str(&pad_to_width(&entry.name, CELL_WIDTH));
            line.push_str("  ");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Runs the grid event loop until stdin reaches EOF.
///
/// Each stdin line becomes the new query; the loader's completion event
/// publishes the entry list. Both are handled on this task, so all state
/// mutation happens in one place.
pub async fn run(app: &mut App, mut event_rx: mpsc::Receiver<AppEvent>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut events_open = true;

    loop {
        if app.needs_redraw {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(render_grid(app).as_bytes())?;
            stdout.flush()?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event = event_rx.recv(), if events_open => match event {
                Some(event) => app.handle_event(event),
                // Loader finished (or failed); stop polling the closed channel.
                None => events_open = false,
            },
            line = lines.next_line() => match line? {
                Some(line) => app.set_query(&line),
                None => break,
            },
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::AppEntry;
    use pretty_assertions::assert_eq;

    fn entry(name: &str) -> AppEntry {
        AppEntry {
            copyright: "C".to_string(),
            name: name.to_string(),
            artwork_icon_url: "http://x/i.png".to_string(),
            release_date: "2020-01-01".to_string(),
        }
    }

    fn loaded_app(names: &[&str]) -> App {
        let mut app = App::new();
        app.handle_event(AppEvent::FeedLoaded(
            names.iter().map(|n| entry(n)).collect(),
        ));
        app
    }

    #[test]
    fn test_render_empty_state() {
        let app = App::new();
        assert_eq!(render_grid(&app), "0 of 0 apps\n");
    }

    #[test]
    fn test_render_wraps_rows_at_three_columns() {
        let app = loaded_app(&["One", "Two", "Three", "Four"]);
        let rendered = render_grid(&app);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "4 of 4 apps");
        assert!(lines[1].starts_with("One"));
        assert!(lines[1].contains("Three"));
        assert!(!lines[1].contains("Four"));
        assert!(lines[2].starts_with("Four"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_render_shows_filtered_view_and_query() {
        let mut app = loaded_app(&["Maps", "Camera", "Mail"]);
        app.set_query("Ma");
        let rendered = render_grid(&app);
        assert!(rendered.starts_with("2 of 3 apps (filter: \"Ma\")"));
        assert!(rendered.contains("Maps"));
        assert!(rendered.contains("Mail"));
        assert!(!rendered.contains("Camera"));
    }

    #[test]
    fn test_render_order_follows_ranking() {
        let app = loaded_app(&["Zeta", "Alpha"]);
        let rendered = render_grid(&app);
        let zeta = rendered.find("Zeta").unwrap();
        let alpha = rendered.find("Alpha").unwrap();
        assert!(zeta < alpha);
    }
}
