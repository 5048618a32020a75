/// Command tool entity module
pub mod cmd_tool;
/// Prompt tool entity module
pub mod prompt_tool;
/// Website entity module
pub mod web_site;
/// Program shortcut entity module
pub mod win_program;

pub use cmd_tool::Entity as CmdTool;
pub use prompt_tool::Entity as PromptTool;
pub use web_site::Entity as WebSite;
pub use win_program::Entity as WinProgram;

use serde_json::Value;

/// Nullable text column as an item field; NULL becomes ""
pub(crate) fn text(value: Option<String>) -> Value {
    Value::String(value.unwrap_or_default())
}

/// Nullable integer column as an item field; NULL becomes ""
pub(crate) fn number(value: Option<i32>) -> Value {
    value.map_or_else(|| Value::String(String::new()), Value::from)
}
