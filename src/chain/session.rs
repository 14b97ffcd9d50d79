use crate::provider::ProviderError;

/// Where a fetch session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Pending,
    /// A remote provider, named here, produced the quote.
    Succeeded(String),
    /// Every remote provider failed and the static list was used.
    Exhausted,
}

/// One provider attempt. `failure` is `None` for the attempt that succeeded.
#[derive(Debug)]
pub struct Attempt {
    pub provider: String,
    pub failure: Option<ProviderError>,
}

/// Diagnostic record of a single fetch, discarded once rendered.
#[derive(Debug)]
pub struct FetchSession {
    attempts: Vec<Attempt>,
    outcome: SessionOutcome,
}

impl FetchSession {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
            outcome: SessionOutcome::Pending,
        }
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Provider names in the order they were tried.
    pub fn attempted(&self) -> Vec<&str> {
        self.attempts.iter().map(|a| a.provider.as_str()).collect()
    }

    pub fn outcome(&self) -> &SessionOutcome {
        &self.outcome
    }

    pub(super) fn failed(&mut self, provider: &str, error: ProviderError) {
        self.attempts.push(Attempt {
            provider: provider.to_string(),
            failure: Some(error),
        });
    }

    pub(super) fn succeeded(&mut self, provider: &str) {
        self.attempts.push(Attempt {
            provider: provider.to_string(),
            failure: None,
        });
        self.outcome = SessionOutcome::Succeeded(provider.to_string());
    }

    pub(super) fn exhausted(&mut self, terminal: &str) {
        self.attempts.push(Attempt {
            provider: terminal.to_string(),
            failure: None,
        });
        self.outcome = SessionOutcome::Exhausted;
    }
}

impl Default for FetchSession {
    fn default() -> Self {
        Self::new()
    }
}
