//! Editor integration for writing entry drafts

use crate::error::{ReflectError, Result};
use std::path::Path;
use std::process::Command;

/// Session for editing a file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and wait until the editor exits
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        tracing::debug!(editor = %program, file = %file_path.display(), "launching editor");

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            ReflectError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(ReflectError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        let Some((program, rest)) = parts.split_first() else {
            return (Self::fallback_program().to_string(), vec![]);
        };

        (
            program.to_string(),
            rest.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn fallback_program() -> &'static str {
        if cfg!(windows) {
            "notepad"
        } else {
            "nano"
        }
    }
}
