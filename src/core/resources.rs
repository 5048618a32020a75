//! Resource items and the tables they come from

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Key of the store-assigned sequence number present on every row
pub const SEQ_NO_FIELD: &str = "iSeqNo";

/// Key fragments whose values are masked in logs
const SENSITIVE_KEY_FRAGMENTS: &[&str] = &["password", "secret", "token"];

/// One row from a tool table, kept as an opaque JSON record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceItem(Value);

impl ResourceItem {
    /// Wrap an arbitrary JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Build an item from key/value pairs
    pub fn from_fields<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let map: Map<String, Value> = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self(Value::Object(map))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Raw field value; `None` for missing keys or non-object items
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }

    /// First of `keys` holding a non-blank string, returned as stored
    pub fn first_text(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.field(key)?.as_str())
            .find(|value| !value.trim().is_empty())
    }

    /// Sequence number, accepting either a JSON number or numeric text
    pub fn seq_no(&self) -> Option<i64> {
        match self.field(SEQ_NO_FIELD)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Case-insensitive substring match over every field value.
    ///
    /// `needle` must already be lowercase. A blank needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.trim().is_empty() {
            return true;
        }
        match &self.0 {
            Value::Object(map) => map
                .values()
                .any(|value| field_text(value).to_lowercase().contains(needle)),
            other => field_text(other).to_lowercase().contains(needle),
        }
    }

    /// Copy of the item with credential-like values masked
    pub fn redacted(&self) -> Value {
        match &self.0 {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| {
                        let lower = key.to_lowercase();
                        if SENSITIVE_KEY_FRAGMENTS.iter().any(|f| lower.contains(f)) {
                            (key.clone(), Value::String("***".to_string()))
                        } else {
                            (key.clone(), value.clone())
                        }
                    })
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

impl From<Value> for ResourceItem {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The four tool tables exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceTable {
    CmdTools,
    PromptTools,
    WinPrograms,
    Websites,
}

impl ResourceTable {
    pub const ALL: [ResourceTable; 4] = [
        ResourceTable::CmdTools,
        ResourceTable::PromptTools,
        ResourceTable::WinPrograms,
        ResourceTable::Websites,
    ];

    /// Path segment used by the listing routes
    pub fn slug(&self) -> &'static str {
        match self {
            Self::CmdTools => "cmd-tools",
            Self::PromptTools => "prompt-tools",
            Self::WinPrograms => "win-programs",
            Self::Websites => "websites",
        }
    }

    /// Table name in the data store
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::CmdTools => "CmdTools",
            Self::PromptTools => "PromptTools",
            Self::WinPrograms => "WinProgram",
            Self::Websites => "WebSite",
        }
    }

    /// Key under which the table appears in the combined `/api/data` payload
    pub fn data_key(&self) -> &'static str {
        match self {
            Self::CmdTools => "cmd_tools",
            Self::PromptTools => "prompt_tools",
            Self::WinPrograms => "win_programs",
            Self::Websites => "websites",
        }
    }
}

impl fmt::Display for ResourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ResourceTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|table| {
                [table.slug(), table.table_name(), table.data_key()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(wanted))
            })
            .or_else(|| wanted.eq_ignore_ascii_case("programs").then_some(Self::WinPrograms))
            .ok_or_else(|| format!("Unsupported table: {}", wanted))
    }
}
