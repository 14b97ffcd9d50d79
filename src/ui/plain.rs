//! Line-oriented renderer for `--print` mode.

use std::io::Write;

use crate::chain::FallbackChain;
use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::share::ShareLink;
use crate::ui::controller::QuoteWidget;
use crate::ui::renderer::Renderer;

/// Writes the quote to `out` and notifications to `diag`.
pub struct PlainRenderer<O: Write, D: Write> {
    out: O,
    diag: D,
}

impl<O: Write, D: Write> PlainRenderer<O, D> {
    pub fn new(out: O, diag: D) -> Self {
        Self { out, diag }
    }

    pub fn into_inner(self) -> (O, D) {
        (self.out, self.diag)
    }
}

impl<O: Write, D: Write> Renderer for PlainRenderer<O, D> {
    fn set_quote(&mut self, text: &str, author: Option<&str>) {
        if text.is_empty() {
            return;
        }
        let result = match author {
            Some(author) => writeln!(self.out, "\"{}\"\n  — {}", text, author),
            None => writeln!(self.out, "{}", text),
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to write quote");
        }
    }

    fn set_loading(&mut self, _loading: bool) {}

    fn set_counter(&mut self, _count: u64) {}

    fn notify(&mut self, message: &str) {
        if let Err(err) = writeln!(self.diag, "{}", message) {
            tracing::warn!(error = %err, "failed to write notification");
        }
    }
}

/// Fetch one quote, print it, then optionally copy and share it.
pub async fn print_once(config: &Config, copy: bool, share: bool) -> anyhow::Result<()> {
    let chain = FallbackChain::from_config(config)?;
    let renderer = PlainRenderer::new(std::io::stdout(), std::io::stderr());
    let mut widget = QuoteWidget::new(renderer);

    widget.refresh(&chain).await;

    if copy {
        let mut writer = ClipboardWriter::system();
        widget.copy_current(&mut writer);
    }
    if share {
        if let Some(url) = widget.share_current(&ShareLink::system(&config.share)) {
            tracing::info!(%url, "opened share link");
        }
    }
    Ok(())
}
