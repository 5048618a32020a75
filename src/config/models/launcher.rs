//! OS launch configuration

use serde::{Deserialize, Serialize};

/// Commands used to open resources on the host desktop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Command that opens a URL or path with the OS default handler
    #[serde(default = "default_handler_command")]
    pub default_handler: String,
    /// Command that opens a path in a plain-text editor
    #[serde(default = "default_text_editor_command")]
    pub text_editor: String,
    /// Upper bound on concurrent launches within one batch (unbounded when unset).
    ///
    /// Each batch gets its own limit; single opens are never limited.
    #[serde(default)]
    pub max_concurrent_launches: Option<usize>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            default_handler: default_handler_command(),
            text_editor: default_text_editor_command(),
            max_concurrent_launches: None,
        }
    }
}

impl LauncherConfig {
    /// Validate launcher configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_handler.trim().is_empty() {
            return Err("default_handler cannot be empty".to_string());
        }
        if self.text_editor.trim().is_empty() {
            return Err("text_editor cannot be empty".to_string());
        }
        if self.max_concurrent_launches == Some(0) {
            return Err("max_concurrent_launches must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn default_handler_command() -> String {
    r#"start """#.to_string()
}

#[cfg(target_os = "macos")]
fn default_handler_command() -> String {
    "open".to_string()
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn default_handler_command() -> String {
    "xdg-open".to_string()
}

#[cfg(target_os = "windows")]
fn default_text_editor_command() -> String {
    "notepad".to_string()
}

#[cfg(target_os = "macos")]
fn default_text_editor_command() -> String {
    "open -t".to_string()
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn default_text_editor_command() -> String {
    "xdg-open".to_string()
}
