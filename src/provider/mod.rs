//! Quote providers.
//!
//! Every provider resolves to a fully formed [`Quote`] or a
//! [`ProviderError`]; nothing is ever partially populated. Remote providers
//! share one `reqwest::Client` built by [`build_client`].

mod anonymous;
mod error;
mod http;
mod keyed;
mod picker;
mod quotable;
mod static_list;

use async_trait::async_trait;

use crate::quote::Quote;

pub use anonymous::AnonymousRestProvider;
pub use error::ProviderError;
pub use http::build_client;
pub use keyed::KeyedRestProvider;
pub use picker::RandomPicker;
pub use quotable::QuotableProvider;
pub use static_list::{builtin_quotes, EmptyQuoteList, StaticProvider};

/// Outcome of one provider attempt.
pub type ProviderResult = Result<Quote, ProviderError>;

/// A source capable of producing a quote.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Short name used in logs and fetch diagnostics.
    fn name(&self) -> &str;

    /// Produce one quote. Takes no input beyond provider-held configuration.
    async fn fetch(&self) -> ProviderResult;
}
