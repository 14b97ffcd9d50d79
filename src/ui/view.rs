//! Terminal-side state written through the [`Renderer`] boundary.

use std::time::Duration;

use crate::ui::renderer::Renderer;
use crate::ui::toast::Toast;

pub const IDLE_LABEL: &str = "New Quote";
pub const LOADING_LABEL: &str = "Loading...";

pub struct TerminalView {
    quote_text: String,
    author: Option<String>,
    loading: bool,
    counter: u64,
    toast: Option<Toast>,
    notification_duration: Duration,
    animation_tick: u8,
}

impl TerminalView {
    pub fn new(notification_duration: Duration) -> Self {
        Self {
            quote_text: String::new(),
            author: None,
            loading: false,
            counter: 0,
            toast: None,
            notification_duration,
            animation_tick: 0,
        }
    }

    pub fn quote_text(&self) -> &str {
        &self.quote_text
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.loading
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Advance the spinner and drop an expired notification.
    pub fn on_tick(&mut self) {
        if self.loading {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

impl Renderer for TerminalView {
    fn set_quote(&mut self, text: &str, author: Option<&str>) {
        self.quote_text = text.to_string();
        self.author = author.map(String::from);
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.animation_tick = 0;
    }

    fn set_counter(&mut self, count: u64) {
        self.counter = count;
    }

    fn notify(&mut self, message: &str) {
        self.toast = Some(Toast::new(message, self.notification_duration));
    }
}
