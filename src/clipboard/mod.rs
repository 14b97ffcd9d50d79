//! Clipboard access for copying the current quote.
//!
//! The platform clipboard (`arboard`) is tried first. When it is missing or
//! rejects the write, the text goes through a [`LegacyCopier`]: staged in a
//! temporary surface, selected, copied with a synchronous command, and the
//! surface is removed again no matter how the copy ends.

mod command;

use thiserror::Error;

use crate::ui::Renderer;

pub use command::CommandCopier;

pub const COPIED_MESSAGE: &str = "Quote copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy quote";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard backend error: {0}")]
    Backend(#[from] arboard::Error),

    #[error("clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no copy command available on this platform")]
    Unavailable,

    #[error("nothing staged for copy")]
    NotStaged,

    #[error("copy command '{program}' not found")]
    NoCommand { program: String },

    #[error("copy command '{program}' failed: {status}")]
    CommandFailed { program: String, status: String },
}

/// Platform clipboard capability.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard handle backed by `arboard`.
pub struct ArboardBackend {
    clipboard: arboard::Clipboard,
}

impl ArboardBackend {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = arboard::Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ClipboardBackend for ArboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

/// Fallback copy surface used when the platform clipboard fails.
///
/// `remove` is called exactly once after every successful `stage`, even if
/// `select_all` or `exec_copy` fails or panics.
pub trait LegacyCopier {
    /// Materialize `text` in a temporary surface.
    fn stage(&mut self, text: &str) -> Result<(), ClipboardError>;
    /// Select the full staged contents.
    fn select_all(&mut self) -> Result<(), ClipboardError>;
    /// Run the synchronous copy command on the selection.
    fn exec_copy(&mut self) -> Result<(), ClipboardError>;
    /// Discard the temporary surface.
    fn remove(&mut self);
}

/// Which path delivered the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    Failed,
}

pub struct ClipboardWriter {
    primary: Option<Box<dyn ClipboardBackend>>,
    legacy: Box<dyn LegacyCopier>,
}

impl ClipboardWriter {
    pub fn new(primary: Option<Box<dyn ClipboardBackend>>, legacy: Box<dyn LegacyCopier>) -> Self {
        Self { primary, legacy }
    }

    /// Writer over the system clipboard with the platform copy command as
    /// fallback. A clipboard that cannot be opened is treated as absent.
    pub fn system() -> Self {
        let primary = match ArboardBackend::new() {
            Ok(backend) => Some(Box::new(backend) as Box<dyn ClipboardBackend>),
            Err(err) => {
                tracing::info!(error = %err, "system clipboard unavailable, using copy command");
                None
            }
        };
        Self::new(primary, Box::new(CommandCopier::detect()))
    }

    /// Copy `text` and report the result through `notifier`.
    pub fn copy(&mut self, text: &str, notifier: &mut dyn Renderer) -> CopyOutcome {
        match self.try_copy(text) {
            Ok(path) => {
                tracing::debug!(?path, "quote copied");
                notifier.notify(COPIED_MESSAGE);
                CopyOutcome::Copied(path)
            }
            Err(err) => {
                tracing::warn!(error = %err, "copy failed on every path");
                notifier.notify(COPY_FAILED_MESSAGE);
                CopyOutcome::Failed
            }
        }
    }

    /// Copy `text`, returning the error of the last path tried.
    pub fn try_copy(&mut self, text: &str) -> Result<CopyPath, ClipboardError> {
        if let Some(primary) = self.primary.as_mut() {
            match primary.set_text(text) {
                Ok(()) => return Ok(CopyPath::Primary),
                Err(err) => {
                    tracing::debug!(error = %err, "clipboard write rejected, trying legacy copy");
                }
            }
        }

        self.copy_legacy(text)?;
        Ok(CopyPath::Legacy)
    }

    fn copy_legacy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.legacy.stage(text)?;
        let mut surface = scopeguard::guard(&mut self.legacy, |legacy| legacy.remove());
        surface.select_all()?;
        surface.exec_copy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::RecordingRenderer;
    use parking_lot::Mutex;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;

    type Log = Arc<Mutex<Vec<String>>>;

    #[derive(Clone, Copy)]
    enum ExecBehavior {
        Succeed,
        Fail,
        Panic,
    }

    struct FakeSurface {
        log: Log,
        exec: ExecBehavior,
    }

    impl LegacyCopier for FakeSurface {
        fn stage(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.log.lock().push(format!("stage:{}", text));
            Ok(())
        }

        fn select_all(&mut self) -> Result<(), ClipboardError> {
            self.log.lock().push("select".to_string());
            Ok(())
        }

        fn exec_copy(&mut self) -> Result<(), ClipboardError> {
            self.log.lock().push("exec".to_string());
            match self.exec {
                ExecBehavior::Succeed => Ok(()),
                ExecBehavior::Fail => Err(ClipboardError::CommandFailed {
                    program: "fake".to_string(),
                    status: "exit status: 1".to_string(),
                }),
                ExecBehavior::Panic => panic!("copy command blew up"),
            }
        }

        fn remove(&mut self) {
            self.log.lock().push("remove".to_string());
        }
    }

    struct FakeBackend {
        accept: bool,
        writes: Log,
    }

    impl ClipboardBackend for FakeBackend {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.lock().push(text.to_string());
            if self.accept {
                Ok(())
            } else {
                Err(ClipboardError::Unavailable)
            }
        }
    }

    fn legacy_only(exec: ExecBehavior) -> (ClipboardWriter, Log) {
        let log: Log = Arc::default();
        let surface = FakeSurface {
            log: Arc::clone(&log),
            exec,
        };
        (ClipboardWriter::new(None, Box::new(surface)), log)
    }

    #[test]
    fn primary_success_skips_legacy() {
        let writes: Log = Arc::default();
        let log: Log = Arc::default();
        let backend = FakeBackend {
            accept: true,
            writes: Arc::clone(&writes),
        };
        let surface = FakeSurface {
            log: Arc::clone(&log),
            exec: ExecBehavior::Succeed,
        };
        let mut writer = ClipboardWriter::new(Some(Box::new(backend)), Box::new(surface));
        let mut renderer = RecordingRenderer::default();

        let outcome = writer.copy("hello", &mut renderer);

        assert_eq!(outcome, CopyOutcome::Copied(CopyPath::Primary));
        assert_eq!(*writes.lock(), vec!["hello".to_string()]);
        assert!(log.lock().is_empty());
        assert_eq!(renderer.notifications(), vec![COPIED_MESSAGE]);
    }

    #[test]
    fn rejected_primary_falls_through_to_legacy() {
        let log: Log = Arc::default();
        let backend = FakeBackend {
            accept: false,
            writes: Arc::default(),
        };
        let surface = FakeSurface {
            log: Arc::clone(&log),
            exec: ExecBehavior::Succeed,
        };
        let mut writer = ClipboardWriter::new(Some(Box::new(backend)), Box::new(surface));

        assert_eq!(writer.try_copy("hi").unwrap(), CopyPath::Legacy);
        assert_eq!(*log.lock(), vec!["stage:hi", "select", "exec", "remove"]);
    }

    #[test]
    fn absent_primary_uses_legacy_once_and_removes() {
        let (mut writer, log) = legacy_only(ExecBehavior::Succeed);
        let mut renderer = RecordingRenderer::default();

        let outcome = writer.copy("text", &mut renderer);

        assert_eq!(outcome, CopyOutcome::Copied(CopyPath::Legacy));
        let log = log.lock();
        assert_eq!(log.iter().filter(|e| e.starts_with("stage")).count(), 1);
        assert_eq!(log.last().map(String::as_str), Some("remove"));
    }

    #[test]
    fn failed_exec_still_removes_and_notifies() {
        let (mut writer, log) = legacy_only(ExecBehavior::Fail);
        let mut renderer = RecordingRenderer::default();

        let outcome = writer.copy("text", &mut renderer);

        assert_eq!(outcome, CopyOutcome::Failed);
        assert_eq!(log.lock().last().map(String::as_str), Some("remove"));
        assert_eq!(renderer.notifications(), vec![COPY_FAILED_MESSAGE]);
    }

    #[test]
    fn panicking_exec_still_removes() {
        let (mut writer, log) = legacy_only(ExecBehavior::Panic);

        let result = catch_unwind(AssertUnwindSafe(|| writer.try_copy("text")));

        assert!(result.is_err());
        assert_eq!(
            *log.lock(),
            vec!["stage:text", "select", "exec", "remove"]
        );
    }
}
