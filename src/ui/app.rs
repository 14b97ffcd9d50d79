use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::chain::FallbackChain;
use crate::clipboard::ClipboardWriter;
use crate::share::ShareLink;
use crate::ui::controller::{QuoteWidget, SessionToken};
use crate::ui::events::{AppEvent, FetchDone};
use crate::ui::input::InputAction;
use crate::ui::view::TerminalView;

/// Terminal application: the quote widget plus its copy and share actions.
pub struct App {
    widget: QuoteWidget<TerminalView>,
    chain: Arc<FallbackChain>,
    clipboard: ClipboardWriter,
    share: ShareLink,
    events: UnboundedSender<AppEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(
        chain: Arc<FallbackChain>,
        clipboard: ClipboardWriter,
        share: ShareLink,
        view: TerminalView,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            widget: QuoteWidget::new(view),
            chain,
            clipboard,
            share,
            events,
            should_quit: false,
        }
    }

    pub fn view(&self) -> &TerminalView {
        self.widget.renderer()
    }

    pub fn widget(&self) -> &QuoteWidget<TerminalView> {
        &self.widget
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::NewQuote => {
                self.request_quote();
            }
            InputAction::Copy => {
                self.widget.copy_current(&mut self.clipboard);
            }
            InputAction::Share => {
                self.widget.share_current(&self.share);
            }
            InputAction::Quit => self.request_quit(),
        }
    }

    /// Start a fetch session in the background.
    ///
    /// Returns `false` when a session is already loading.
    pub fn request_quote(&mut self) -> bool {
        let Some(token) = self.widget.begin_refresh() else {
            return false;
        };
        spawn_fetch(Arc::clone(&self.chain), token, self.events.clone());
        true
    }

    pub fn on_fetch_done(&mut self, done: FetchDone) {
        match done.result {
            Ok(quote) => {
                self.widget.resolve(done.token, quote);
            }
            Err(reason) => {
                self.widget.fail(done.token, &reason);
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.widget.renderer_mut().on_tick();
    }
}

/// Run one chain session off the UI loop and post the result back.
///
/// The chain runs in its own task so a panicking provider surfaces as a
/// failed session instead of taking the UI down.
fn spawn_fetch(chain: Arc<FallbackChain>, token: SessionToken, events: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let task = tokio::spawn(async move { chain.fetch_session().await });
        let result = match task.await {
            Ok((quote, session)) => {
                tracing::info!(
                    session = token.id(),
                    outcome = ?session.outcome(),
                    attempted = ?session.attempted(),
                    "fetch session finished"
                );
                Ok(quote)
            }
            Err(err) => Err(err.to_string()),
        };
        let _ = events.send(AppEvent::QuoteFetched(FetchDone { token, result }));
    });
}
