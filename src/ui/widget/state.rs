use crate::quote::Quote;
use crate::ui::mvi::UiState;

/// Display phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Rendered(Quote),
    Failed(String),
}

/// Complete widget state.
///
/// `counter` counts rendered quotes for the life of the process and only
/// ever grows. `session` is the token of the latest triggered fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    pub phase: Phase,
    pub counter: u64,
    pub session: u64,
}

impl WidgetState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// The refresh trigger is disabled exactly while loading.
    pub fn trigger_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn quote(&self) -> Option<&Quote> {
        match &self.phase {
            Phase::Rendered(quote) => Some(quote),
            _ => None,
        }
    }
}

impl UiState for WidgetState {}
