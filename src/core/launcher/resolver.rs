//! Maps a category tag and a resource item to the command line that opens it
//!
//! Nothing in here touches the OS; resolution is pure data transformation.

use super::types::LaunchCategory;
use crate::config::LauncherConfig;
use crate::core::resources::ResourceItem;
use std::path::Path;
use thiserror::Error;

/// Which program ends up opening the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// The OS default handler for the URL or file type
    DefaultHandler,
    /// A plain-text editor
    TextEditor,
    /// The target is itself the command line
    Verbatim,
}

/// Extensions with a dedicated handler; anything else uses the default handler
const EXTENSION_HANDLERS: &[(&str, HandlerKind)] = &[
    ("pdf", HandlerKind::DefaultHandler),
    ("doc", HandlerKind::DefaultHandler),
    ("docx", HandlerKind::DefaultHandler),
    ("html", HandlerKind::DefaultHandler),
    ("htm", HandlerKind::DefaultHandler),
    ("txt", HandlerKind::TextEditor),
];

/// Why an item produced no command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unsupported category: {0}")]
    UnsupportedCategory(String),

    #[error("no {category} target in any of {fields:?}")]
    MissingTarget {
        category: LaunchCategory,
        fields: &'static [&'static str],
    },
}

/// A resolved launch, not yet rendered into a shell command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub kind: HandlerKind,
    pub target: String,
}

impl LaunchCommand {
    /// Render the command line using the configured handler programs
    pub fn render(&self, config: &LauncherConfig) -> String {
        match self.kind {
            HandlerKind::Verbatim => self.target.clone(),
            HandlerKind::DefaultHandler => {
                format!("{} {}", config.default_handler, quote_target(&self.target))
            }
            HandlerKind::TextEditor => {
                format!("{} {}", config.text_editor, quote_target(&self.target))
            }
        }
    }
}

/// Resolve a category tag and an item into a launch command
pub fn resolve(category: &str, item: &ResourceItem) -> Result<LaunchCommand, ResolveError> {
    let category: LaunchCategory = category
        .parse()
        .map_err(|_| ResolveError::UnsupportedCategory(category.to_string()))?;
    resolve_category(category, item)
}

/// Resolve an item for an already-parsed category
pub fn resolve_category(
    category: LaunchCategory,
    item: &ResourceItem,
) -> Result<LaunchCommand, ResolveError> {
    let fields = category.target_fields();
    let target = item
        .first_text(fields)
        .ok_or(ResolveError::MissingTarget { category, fields })?;

    Ok(match category {
        LaunchCategory::Websites => LaunchCommand {
            kind: HandlerKind::DefaultHandler,
            target: normalize_url(target.trim()),
        },
        // Program command lines run exactly as stored.
        LaunchCategory::Programs => LaunchCommand {
            kind: HandlerKind::Verbatim,
            target: target.to_string(),
        },
        LaunchCategory::Files => resolve_path(target.trim()),
    })
}

/// Pick the handler for a document path by its extension
pub fn resolve_path(path: &str) -> LaunchCommand {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    LaunchCommand {
        kind: handler_for_extension(extension.as_deref()),
        target: path.to_string(),
    }
}

/// Handler for a lowercase extension without the leading dot
pub fn handler_for_extension(extension: Option<&str>) -> HandlerKind {
    extension
        .and_then(|ext| {
            EXTENSION_HANDLERS
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, kind)| *kind)
        })
        .unwrap_or(HandlerKind::DefaultHandler)
}

/// Prefix `https://` when the URL carries no http(s) scheme
fn normalize_url(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

#[cfg(windows)]
fn quote_target(target: &str) -> String {
    format!("\"{}\"", target.replace('"', ""))
}

#[cfg(not(windows))]
fn quote_target(target: &str) -> String {
    format!("'{}'", target.replace('\'', r"'\''"))
}
