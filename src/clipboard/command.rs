use std::io::{Seek, SeekFrom, Write};
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use super::{ClipboardError, LegacyCopier};

/// External program that reads text on stdin and puts it on the clipboard.
#[derive(Debug, Clone)]
struct CopyProgram {
    program: String,
    args: Vec<String>,
}

/// Legacy copy path: stage the text in a temporary file and pipe it into
/// the platform's copy command.
pub struct CommandCopier {
    program: Option<CopyProgram>,
    staged: Option<NamedTempFile>,
}

impl CommandCopier {
    /// Pick the copy command for the current platform.
    pub fn detect() -> Self {
        let program = if cfg!(target_os = "macos") {
            Some(("pbcopy", vec![]))
        } else if cfg!(windows) {
            Some(("clip", vec![]))
        } else if cfg!(unix) {
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                Some(("wl-copy", vec![]))
            } else {
                Some(("xclip", vec!["-selection", "clipboard"]))
            }
        } else {
            None
        };

        Self {
            program: program.map(|(program, args)| CopyProgram {
                program: program.to_string(),
                args: args.into_iter().map(String::from).collect(),
            }),
            staged: None,
        }
    }

    /// Copier running an explicit command.
    pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: Some(CopyProgram {
                program: program.into(),
                args,
            }),
            staged: None,
        }
    }

    /// Path of the staged file, if any.
    pub fn staged_path(&self) -> Option<&std::path::Path> {
        self.staged.as_ref().map(|f| f.path())
    }
}

impl LegacyCopier for CommandCopier {
    fn stage(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut file = NamedTempFile::new()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        self.staged = Some(file);
        Ok(())
    }

    fn select_all(&mut self) -> Result<(), ClipboardError> {
        let file = self.staged.as_mut().ok_or(ClipboardError::NotStaged)?;
        file.as_file_mut().seek(SeekFrom::Start(0))?;
        Ok(())
    }

    fn exec_copy(&mut self) -> Result<(), ClipboardError> {
        let copy = self.program.as_ref().ok_or(ClipboardError::Unavailable)?;
        let staged = self.staged.as_ref().ok_or(ClipboardError::NotStaged)?;
        let input = staged.as_file().try_clone()?;

        let status = Command::new(&copy.program)
            .args(&copy.args)
            .stdin(Stdio::from(input))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => ClipboardError::NoCommand {
                    program: copy.program.clone(),
                },
                _ => ClipboardError::Io(err),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed {
                program: copy.program.clone(),
                status: status.to_string(),
            })
        }
    }

    fn remove(&mut self) {
        if let Some(file) = self.staged.take() {
            if let Err(err) = file.close() {
                tracing::warn!(error = %err, "failed to remove staged clipboard file");
            }
        }
    }
}
