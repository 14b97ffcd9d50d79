use async_trait::async_trait;
use thiserror::Error;

use crate::quote::Quote;

use super::picker::RandomPicker;
use super::{ProviderResult, QuoteProvider};

const BUILTIN: [(&str, &str); 8] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "In the middle of every difficulty lies opportunity.",
        "Albert Einstein",
    ),
    (
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
    ),
    (
        "Whether you think you can or you think you can't, you're right.",
        "Henry Ford",
    ),
    (
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
    ),
    (
        "What you do today can improve all your tomorrows.",
        "Ralph Marston",
    ),
    (
        "Act as if what you do makes a difference. It does.",
        "William James",
    ),
    (
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
    ),
];

/// Returned when a static provider is built from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("static quote list is empty")]
pub struct EmptyQuoteList;

/// The quotes compiled into the binary.
pub fn builtin_quotes() -> Vec<Quote> {
    BUILTIN
        .iter()
        .filter_map(|(content, author)| Quote::new(*content, *author, None).ok())
        .collect()
}

/// In-memory provider that always succeeds.
///
/// The list is checked for emptiness at construction, so `fetch` is total
/// and this provider terminates every fallback chain.
pub struct StaticProvider {
    quotes: Vec<Quote>,
    picker: RandomPicker,
}

impl StaticProvider {
    pub fn new(quotes: Vec<Quote>) -> Result<Self, EmptyQuoteList> {
        Self::with_picker(quotes, RandomPicker::new())
    }

    pub fn with_picker(quotes: Vec<Quote>, picker: RandomPicker) -> Result<Self, EmptyQuoteList> {
        if quotes.is_empty() {
            return Err(EmptyQuoteList);
        }
        Ok(Self { quotes, picker })
    }

    /// Provider over [`builtin_quotes`].
    pub fn builtin() -> Self {
        Self {
            quotes: builtin_quotes(),
            picker: RandomPicker::new(),
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Draw one quote uniformly at random.
    pub fn pick(&self) -> Quote {
        // Non-empty by construction; index 0 only guards the impossible case.
        self.picker
            .pick(&self.quotes)
            .unwrap_or(&self.quotes[0])
            .clone()
    }
}

#[async_trait]
impl QuoteProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> ProviderResult {
        Ok(self.pick())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_has_eight_valid_quotes() {
        assert_eq!(builtin_quotes().len(), 8);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(StaticProvider::new(Vec::new()), Err(EmptyQuoteList)));
    }

    #[test]
    fn selection_is_uniform_with_seed() {
        let quotes = builtin_quotes();
        let provider = StaticProvider::with_picker(quotes.clone(), RandomPicker::seeded(7)).unwrap();

        let trials = 10_000;
        let mut counts = vec![0usize; quotes.len()];
        for _ in 0..trials {
            let picked = provider.pick();
            let index = quotes.iter().position(|q| *q == picked).unwrap();
            counts[index] += 1;
        }

        // Expected 1250 per entry; sd is about 33, so +/-200 is six sigma.
        let expected = trials / quotes.len();
        for count in counts {
            assert!(
                count.abs_diff(expected) < 200,
                "count {} outside tolerance of {}",
                count,
                expected
            );
        }
    }

    #[tokio::test]
    async fn fetch_always_succeeds() {
        let provider = StaticProvider::builtin();
        for _ in 0..50 {
            let quote = provider.fetch().await.unwrap();
            assert!(provider.quotes().contains(&quote));
        }
    }
}
