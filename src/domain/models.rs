use serde::{Deserialize, Serialize};

/// Envelope for `--json` output.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Static declarative definition of a tool's command-building menu.
/// Loaded from `<id>_config.json`; immutable at runtime.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ToolDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub command: String,
    #[serde(default)]
    pub categories: Vec<FlagCategory>,
    #[serde(default)]
    pub required: Vec<RequiredParam>,
}

/// Named group of selectable flags, shown as one menu page.
/// Order in the file is menu order.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FlagCategory {
    pub label: String,
    #[serde(default)]
    pub options: Vec<FlagOption>,
}

/// One selectable switch. A boolean flag emits its token verbatim; a
/// value flag (`variable: true`) emits `flag "value"` when a non-empty
/// value is supplied, and nothing otherwise.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FlagOption {
    pub flag: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub variable: bool,
    pub prompt_text: Option<String>,
}

/// Parameter that must be collected before assembly. Descriptor order is
/// prompt order.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RequiredParam {
    pub key: String,
    pub prompt: String,
    #[serde(default)]
    pub description: String,
}

/// Catalog listing entry: descriptor header fields plus the id derived
/// from the filename.
#[derive(Debug, Serialize, Clone)]
pub struct ToolSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A persisted, previously assembled command. The `command` field is the
/// flat assembled string and is never re-parsed.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Template {
    pub name: String,
    pub tool: String,
    pub command: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created: String,
}

/// A freshly assembled (or reloaded) command moving through the
/// post-build menu. Passed explicitly through the call chain.
#[derive(Debug, Clone)]
pub struct BuiltCommand {
    pub tool_id: String,
    pub tool_name: String,
    pub command: String,
}
