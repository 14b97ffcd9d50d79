//! Drives the widget state machine and mirrors every transition onto a
//! [`Renderer`].

use crate::chain::FallbackChain;
use crate::clipboard::{ClipboardWriter, CopyOutcome};
use crate::quote::Quote;
use crate::share::ShareLink;
use crate::ui::mvi::Reducer;
use crate::ui::renderer::Renderer;
use crate::ui::widget::{Phase, WidgetIntent, WidgetReducer, WidgetState};

/// Fixed text shown when a fetch session fails.
pub const FETCH_ERROR_MESSAGE: &str = "Error: Could not load quote. Please check your connection.";
pub const NOTHING_TO_COPY_MESSAGE: &str = "No quote to copy yet";
pub const NOTHING_TO_SHARE_MESSAGE: &str = "No quote to share yet";
pub const SHARE_FAILED_MESSAGE: &str = "Could not open the share link";

/// Identifies one fetch session. Results carrying an outdated token are
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken(u64);

impl SessionToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

pub struct QuoteWidget<R: Renderer> {
    state: WidgetState,
    renderer: R,
}

impl<R: Renderer> QuoteWidget<R> {
    /// Wrap `renderer` and paint the idle state.
    pub fn new(mut renderer: R) -> Self {
        let state = WidgetState::default();
        renderer.set_loading(false);
        renderer.set_counter(state.counter);
        Self { state, renderer }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Start a fetch session.
    ///
    /// Returns `None` while a session is already loading, so a trigger that
    /// bypasses the disabled control cannot start an overlapping session.
    pub fn begin_refresh(&mut self) -> Option<SessionToken> {
        if !self.dispatch(WidgetIntent::Trigger) {
            tracing::debug!(session = self.state.session, "refresh ignored while loading");
            return None;
        }
        Some(SessionToken(self.state.session))
    }

    /// Apply a fetched quote. Returns `false` if the session was superseded.
    pub fn resolve(&mut self, token: SessionToken, quote: Quote) -> bool {
        let applied = self.dispatch(WidgetIntent::Resolved {
            session: token.0,
            quote,
        });
        if !applied {
            tracing::debug!(session = token.0, "discarding stale quote");
        }
        applied
    }

    /// Mark the session failed. `reason` is logged, never shown.
    pub fn fail(&mut self, token: SessionToken, reason: &str) -> bool {
        tracing::error!(session = token.0, reason, "quote fetch failed");
        self.dispatch(WidgetIntent::Failed {
            session: token.0,
            message: FETCH_ERROR_MESSAGE.to_string(),
        })
    }

    /// Run one complete session against `chain` in place.
    pub async fn refresh(&mut self, chain: &FallbackChain) -> bool {
        let Some(token) = self.begin_refresh() else {
            return false;
        };
        let quote = chain.fetch_quote().await;
        self.resolve(token, quote)
    }

    /// Copy the rendered quote with its attribution.
    pub fn copy_current(&mut self, writer: &mut ClipboardWriter) -> Option<CopyOutcome> {
        let Some(text) = self.state.quote().map(Quote::attribution) else {
            self.renderer.notify(NOTHING_TO_COPY_MESSAGE);
            return None;
        };
        Some(writer.copy(&text, &mut self.renderer))
    }

    /// Open a share intent for the rendered quote. Returns the URL opened.
    pub fn share_current(&mut self, share: &ShareLink) -> Option<String> {
        let Some(quote) = self.state.quote() else {
            self.renderer.notify(NOTHING_TO_SHARE_MESSAGE);
            return None;
        };
        match share.open(quote) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(error = %err, "share failed");
                self.renderer.notify(SHARE_FAILED_MESSAGE);
                None
            }
        }
    }

    /// Reduce `intent`; render and store the result if anything changed.
    fn dispatch(&mut self, intent: WidgetIntent) -> bool {
        let next = WidgetReducer::reduce(self.state.clone(), intent);
        if next == self.state {
            return false;
        }
        let previous = std::mem::replace(&mut self.state, next);
        self.paint(&previous);
        true
    }

    fn paint(&mut self, previous: &WidgetState) {
        let renderer = &mut self.renderer;
        match &self.state.phase {
            Phase::Idle => {}
            Phase::Loading => {
                renderer.set_loading(true);
                renderer.set_quote("", None);
            }
            Phase::Rendered(quote) => {
                renderer.set_quote(quote.content(), Some(quote.author()));
                if self.state.counter != previous.counter {
                    renderer.set_counter(self.state.counter);
                }
                renderer.set_loading(false);
            }
            Phase::Failed(message) => {
                renderer.set_quote(message, None);
                renderer.set_loading(false);
            }
        }
    }
}
