//! Share-intent links for the rendered quote.

use std::process::{Command, Stdio};

use thiserror::Error;

use crate::config::ShareConfig;
use crate::quote::Quote;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no URL opener available on this platform")]
    Unsupported,
}

/// Build the share-intent URL for `quote`.
///
/// The `text` parameter is the percent-encoded attribution, so decoding it
/// yields exactly `"<content>" — <author>`.
pub fn share_url(intent_url: &str, quote: &Quote) -> String {
    let separator = if intent_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}text={}",
        intent_url,
        separator,
        urlencoding::encode(&quote.attribution())
    )
}

/// Opens a URL in a new browsing context.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), ShareError>;
}

/// Hands URLs to the desktop's default browser.
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Option<Command> {
        let mut command = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(windows) {
            let mut command = Command::new("rundll32");
            command.arg("url.dll,FileProtocolHandler");
            command
        } else if cfg!(unix) {
            Command::new("xdg-open")
        } else {
            return None;
        };
        command.arg(url);
        Some(command)
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), ShareError> {
        let mut command = Self::command(url).ok_or(ShareError::Unsupported)?;
        let program = command.get_program().to_string_lossy().into_owned();
        let child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ShareError::Launch { program, source })?;
        tracing::debug!(pid = child.id(), "opened share link");
        Ok(())
    }
}

pub struct ShareLink {
    intent_url: String,
    opener: Box<dyn UrlOpener>,
}

impl ShareLink {
    pub fn new(intent_url: impl Into<String>, opener: Box<dyn UrlOpener>) -> Self {
        Self {
            intent_url: intent_url.into(),
            opener,
        }
    }

    pub fn system(config: &ShareConfig) -> Self {
        Self::new(config.intent_url.clone(), Box::new(SystemOpener))
    }

    pub fn url_for(&self, quote: &Quote) -> String {
        share_url(&self.intent_url, quote)
    }

    /// Open the share intent for `quote` and return the URL used.
    pub fn open(&self, quote: &Quote) -> Result<String, ShareError> {
        let url = self.url_for(quote);
        self.opener.open(&url)?;
        Ok(url)
    }
}
