use crate::domain::models::{ToolDescriptor, ToolSummary};
use std::fs;
use std::path::{Path, PathBuf};

/// Descriptor files are named `<id>_config.json`; the id is the stem.
pub const CONFIG_SUFFIX: &str = "_config.json";

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("no such tool: {0}")]
    NotFound(String),
    #[error("invalid descriptor for {id}")]
    Invalid {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view over a directory of tool descriptor files.
pub struct Catalog {
    dir: PathBuf,
}

impl Catalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Scan the config directory and return one summary per parseable
    /// descriptor, sorted by display name. Files that fail to read or
    /// parse are dropped from the listing; an absent directory yields an
    /// empty list rather than an error.
    pub fn list_tools(&self) -> Vec<ToolSummary> {
        let mut tools = Vec::new();
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return tools,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let id = match path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(CONFIG_SUFFIX))
            {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => continue,
            };
            let raw = match fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(_) => continue,
            };
            let descriptor: ToolDescriptor = match serde_json::from_str(&raw) {
                Ok(descriptor) => descriptor,
                Err(_) => continue,
            };
            tools.push(ToolSummary {
                id,
                name: descriptor.name,
                description: descriptor.description,
            });
        }
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Load the full descriptor for one tool. A missing file and a
    /// malformed one are distinct errors; callers that want the legacy
    /// "could not load" behavior collapse them at the display layer.
    pub fn load_tool(&self, id: &str) -> Result<ToolDescriptor, CatalogError> {
        let path = self.dir.join(format!("{}{}", id, CONFIG_SUFFIX));
        let raw =
            fs::read_to_string(&path).map_err(|_| CatalogError::NotFound(id.to_string()))?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::Invalid {
            id: id.to_string(),
            source,
        })
    }
}
