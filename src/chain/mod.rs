//! Ordered fallback across quote providers.
//!
//! Providers are tried strictly one after another in priority order; the
//! first success ends the session. The static provider is held separately
//! as the terminal step, which makes [`FallbackChain::fetch_quote`] total.

mod session;

use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

use crate::config::Config;
use crate::provider::{
    build_client, builtin_quotes, AnonymousRestProvider, EmptyQuoteList, KeyedRestProvider,
    ProviderError, QuotableProvider, QuoteProvider, StaticProvider,
};
use crate::quote::Quote;

pub use session::{Attempt, FetchSession, SessionOutcome};

/// Errors raised while assembling a chain at startup.
#[derive(Debug, Error)]
pub enum ChainBuildError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    EmptyStaticList(#[from] EmptyQuoteList),
}

pub struct FallbackChain {
    remote: Vec<Box<dyn QuoteProvider>>,
    terminal: StaticProvider,
    provider_timeout: Duration,
}

impl FallbackChain {
    pub fn new(
        remote: Vec<Box<dyn QuoteProvider>>,
        terminal: StaticProvider,
        provider_timeout: Duration,
    ) -> Self {
        Self {
            remote,
            terminal,
            provider_timeout,
        }
    }

    /// Assemble keyed → anonymous → quotable → static from config.
    ///
    /// Disabled providers are left out. An explicitly empty static list is
    /// rejected here rather than at fetch time.
    pub fn from_config(config: &Config) -> Result<Self, ChainBuildError> {
        let client = build_client(&config.fetch)?;
        let mut remote: Vec<Box<dyn QuoteProvider>> = Vec::new();

        if config.keyed.enabled {
            remote.push(Box::new(KeyedRestProvider::from_config(
                client.clone(),
                &config.keyed,
            )));
        }
        if config.anonymous.enabled {
            remote.push(Box::new(AnonymousRestProvider::new(
                client.clone(),
                config.anonymous.endpoint.clone(),
            )));
        }
        if config.quotable.enabled {
            remote.push(Box::new(QuotableProvider::new(
                client,
                config.quotable.endpoint.clone(),
            )));
        }

        let quotes = config
            .static_quotes
            .quotes
            .clone()
            .unwrap_or_else(builtin_quotes);
        let terminal = StaticProvider::new(quotes)?;

        Ok(Self::new(remote, terminal, config.fetch.timeout()))
    }

    /// Names of all providers in the order they are tried.
    pub fn provider_names(&self) -> Vec<&str> {
        self.remote
            .iter()
            .map(|p| p.name())
            .chain(std::iter::once(self.terminal.name()))
            .collect()
    }

    /// Fetch one quote. Never fails.
    pub async fn fetch_quote(&self) -> Quote {
        self.fetch_session().await.0
    }

    /// Fetch one quote and return the diagnostic record of the session.
    pub async fn fetch_session(&self) -> (Quote, FetchSession) {
        let mut session = FetchSession::new();

        if let Some(quote) = first_success(&self.remote, self.provider_timeout, &mut session).await
        {
            return (quote, session);
        }

        let quote = self.terminal.pick();
        session.exhausted(self.terminal.name());
        tracing::info!(
            attempts = session.attempts().len(),
            "remote providers exhausted, using static quote"
        );
        (quote, session)
    }
}

/// Try `providers` in order and return the first quote produced.
///
/// A provider is only started after the previous one has resolved. Each
/// attempt is bounded by `per_provider`; every failure is recorded in
/// `session`.
pub async fn first_success(
    providers: &[Box<dyn QuoteProvider>],
    per_provider: Duration,
    session: &mut FetchSession,
) -> Option<Quote> {
    for provider in providers {
        let name = provider.name();
        let result = match timeout(per_provider, provider.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                millis: per_provider.as_millis() as u64,
            }),
        };

        match result {
            Ok(quote) => {
                tracing::debug!(provider = name, "provider returned a quote");
                session.succeeded(name);
                return Some(quote);
            }
            Err(err) => {
                tracing::warn!(provider = name, kind = err.kind(), error = %err, "provider failed");
                session.failed(name, err);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderResult, RandomPicker};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Scripted {
        name: &'static str,
        calls: Arc<AtomicUsize>,
        quote: Option<Quote>,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl QuoteProvider for Scripted {
        fn name(&self) -> &str {
            self.name
        }

        async fn fetch(&self) -> ProviderResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.quote.clone().ok_or(ProviderError::HttpStatus { status: 500 })
        }
    }

    fn scripted(name: &'static str, quote: Option<Quote>) -> (Box<dyn QuoteProvider>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Scripted {
            name,
            calls: Arc::clone(&calls),
            quote,
            delay: None,
        };
        (Box::new(provider), calls)
    }

    fn quote(text: &str) -> Quote {
        Quote::new(text, "Tester", None).unwrap()
    }

    fn terminal() -> StaticProvider {
        StaticProvider::with_picker(vec![quote("static")], RandomPicker::seeded(3)).unwrap()
    }

    #[tokio::test]
    async fn first_success_stops_the_chain() {
        let (first, first_calls) = scripted("first", Some(quote("one")));
        let (second, second_calls) = scripted("second", Some(quote("two")));
        let chain = FallbackChain::new(vec![first, second], terminal(), Duration::from_secs(1));

        let (result, session) = chain.fetch_session().await;

        assert_eq!(result.content(), "one");
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.outcome(), &SessionOutcome::Succeeded("first".to_string()));
    }

    #[tokio::test]
    async fn failure_moves_to_next_provider() {
        let (first, _) = scripted("first", None);
        let (second, second_calls) = scripted("second", Some(quote("two")));
        let chain = FallbackChain::new(vec![first, second], terminal(), Duration::from_secs(1));

        let (result, session) = chain.fetch_session().await;

        assert_eq!(result.content(), "two");
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.attempted(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn all_remote_failures_fall_back_to_static() {
        let (first, _) = scripted("first", None);
        let (second, _) = scripted("second", None);
        let chain = FallbackChain::new(vec![first, second], terminal(), Duration::from_secs(1));

        let (result, session) = chain.fetch_session().await;

        assert_eq!(result.content(), "static");
        assert_eq!(session.outcome(), &SessionOutcome::Exhausted);
        assert_eq!(session.attempted(), vec!["first", "second", "static"]);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_provider_times_out() {
        let calls = Arc::new(AtomicUsize::new(0));
        let stalled = Box::new(Scripted {
            name: "stalled",
            calls: Arc::clone(&calls),
            quote: Some(quote("late")),
            delay: Some(Duration::from_secs(60)),
        });
        let chain = FallbackChain::new(vec![stalled], terminal(), Duration::from_millis(100));

        let (result, session) = chain.fetch_session().await;

        assert_eq!(result.content(), "static");
        assert!(matches!(
            session.attempts()[0].failure,
            Some(ProviderError::Timeout { millis: 100 })
        ));
    }

    #[tokio::test]
    async fn empty_remote_list_uses_static() {
        let chain = FallbackChain::new(Vec::new(), terminal(), Duration::from_secs(1));
        assert_eq!(chain.fetch_quote().await.content(), "static");
        assert_eq!(chain.provider_names(), vec!["static"]);
    }

    #[test]
    fn from_config_rejects_empty_static_list() {
        let mut config = Config::default();
        config.static_quotes.quotes = Some(Vec::new());
        assert!(matches!(
            FallbackChain::from_config(&config),
            Err(ChainBuildError::EmptyStaticList(_))
        ));
    }

    #[test]
    fn from_config_orders_providers() {
        let mut config = Config::default();
        config.quotable.enabled = true;
        let chain = FallbackChain::from_config(&config).unwrap();
        assert_eq!(
            chain.provider_names(),
            vec!["keyed", "anonymous", "quotable", "static"]
        );
    }
}
