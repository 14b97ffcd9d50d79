//! The quote value shared by providers, the chain and the UI.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised when building a [`Quote`] from incomplete data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("quote content is empty")]
    EmptyContent,

    #[error("quote author is empty")]
    EmptyAuthor,
}

/// A single quote. Content and author are never blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawQuote")]
pub struct Quote {
    content: String,
    author: String,
    category: Option<String>,
}

impl Quote {
    /// Build a quote, trimming surrounding whitespace.
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        category: Option<String>,
    ) -> Result<Self, QuoteError> {
        let content = content.into().trim().to_string();
        let author = author.into().trim().to_string();
        if content.is_empty() {
            return Err(QuoteError::EmptyContent);
        }
        if author.is_empty() {
            return Err(QuoteError::EmptyAuthor);
        }
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Ok(Self {
            content,
            author,
            category,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Quoted text followed by the author, as copied and shared.
    pub fn attribution(&self) -> String {
        format!("\"{}\" — {}", self.content, self.author)
    }
}

/// Wire shape used when quotes are read from config files.
#[derive(Deserialize)]
struct RawQuote {
    content: String,
    author: String,
    #[serde(default)]
    category: Option<String>,
}

impl TryFrom<RawQuote> for Quote {
    type Error = QuoteError;

    fn try_from(raw: RawQuote) -> Result<Self, Self::Error> {
        Quote::new(raw.content, raw.author, raw.category)
    }
}
