//! Render boundary between the widget core and whatever displays it.

/// Presentation capability written to by the core, never read from.
pub trait Renderer {
    /// Quote text region and author line. `None` clears the author line.
    fn set_quote(&mut self, text: &str, author: Option<&str>);

    /// Loading indicator, refresh trigger state and trigger label.
    /// `true` disables the trigger.
    fn set_loading(&mut self, loading: bool);

    /// Session counter region.
    fn set_counter(&mut self, count: u64);

    /// Transient notification. A newer message replaces an older one.
    fn notify(&mut self, message: &str);
}

/// One call made on a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Quote { text: String, author: Option<String> },
    Loading(bool),
    Counter(u64),
    Notify(String),
}

/// Headless renderer that records every call, for tests and diagnostics.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn notifications(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Notify(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Last text written to the quote region.
    pub fn quote_text(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Quote { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Last value written to the author line.
    pub fn author(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Quote { author, .. } => Some(author.as_deref()),
            _ => None,
        })?
    }

    /// Whether the trigger is currently enabled (enabled until told otherwise).
    pub fn trigger_enabled(&self) -> bool {
        !self
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::Loading(loading) => Some(*loading),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn counter(&self) -> Option<u64> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Counter(count) => Some(*count),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn set_quote(&mut self, text: &str, author: Option<&str>) {
        self.calls.push(RenderCall::Quote {
            text: text.to_string(),
            author: author.map(String::from),
        });
    }

    fn set_loading(&mut self, loading: bool) {
        self.calls.push(RenderCall::Loading(loading));
    }

    fn set_counter(&mut self, count: u64) {
        self.calls.push(RenderCall::Counter(count));
    }

    fn notify(&mut self, message: &str) {
        self.calls.push(RenderCall::Notify(message.to_string()));
    }
}
