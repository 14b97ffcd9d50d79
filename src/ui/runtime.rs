use std::sync::Arc;

use crate::chain::FallbackChain;
use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::share::ShareLink;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::action_for;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::view::TerminalView;

/// Run the interactive widget until the user quits.
///
/// Everything runs on the caller's runtime; fetches are spawned tasks whose
/// results come back through the event queue.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let chain = Arc::new(FallbackChain::from_config(config)?);
    tracing::info!(providers = ?chain.provider_names(), "starting quote widget");

    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(config.ui.tick_rate())?;
    let mut app = App::new(
        chain,
        ClipboardWriter::system(),
        ShareLink::system(&config.share),
        TerminalView::new(config.ui.notification_duration()),
        events.sender(),
    );

    // First quote on startup.
    app.request_quote();

    loop {
        terminal.draw(|frame| draw(frame, app.view()))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => {
                if let Some(action) = action_for(key) {
                    app.handle_action(action);
                }
            }
            Some(AppEvent::Tick) => app.on_tick(),
            Some(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Some(AppEvent::QuoteFetched(done)) => app.on_fetch_done(done),
            Some(AppEvent::InputClosed) => {
                tracing::warn!("terminal input closed, exiting");
                break;
            }
            Some(AppEvent::Terminated) | None => break,
        }
    }

    drop(guard);
    Ok(())
}
