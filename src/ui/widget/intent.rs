use crate::quote::Quote;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum WidgetIntent {
    /// User or startup asked for a new quote.
    Trigger,

    /// The fetch for `session` produced a quote.
    Resolved { session: u64, quote: Quote },

    /// The fetch for `session` could not produce a quote.
    Failed { session: u64, message: String },
}

impl Intent for WidgetIntent {}
