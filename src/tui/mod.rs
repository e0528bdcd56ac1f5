//! TUI mode for popchat
//!
//! A message list, a text input, and one outbound request per submission.

mod app;
mod event;
mod request;
mod theme;
mod ui;
mod widgets;

pub use app::App;

use anyhow::Result;

use crate::config::Settings;

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    let mut app = App::new(settings)?;
    app.run().await
}
