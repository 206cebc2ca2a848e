use crate::domain::models::Template;
use chrono::{Local, Utc};
use std::fs;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum TemplateError {
    #[error("no such template: {0}")]
    NotFound(String),
    #[error("template name must be a plain file name")]
    InvalidName,
}

/// Owns the on-disk template directory: one JSON file per template,
/// named after the template. No other component touches these files.
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn template_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Persist a template, overwriting any existing one of the same name.
    pub fn save(
        &self,
        name: &str,
        tool: &str,
        command: &str,
        description: &str,
    ) -> anyhow::Result<PathBuf> {
        if !is_safe_name(name) {
            return Err(TemplateError::InvalidName.into());
        }
        fs::create_dir_all(&self.dir)?;
        let template = Template {
            name: name.to_string(),
            tool: tool.to_string(),
            command: command.to_string(),
            description: description.to_string(),
            created: Utc::now().to_rfc3339(),
        };
        let path = self.template_path(name);
        fs::write(&path, serde_json::to_string_pretty(&template)?)?;
        Ok(path)
    }

    /// All templates sorted by name. The listing name comes from the
    /// filename, so a renamed file lists under its new name. Files that
    /// fail to parse are dropped.
    pub fn list(&self) -> Vec<Template> {
        let mut templates = Vec::new();
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return templates,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let raw = match fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(_) => continue,
            };
            let mut template: Template = match serde_json::from_str(&raw) {
                Ok(template) => template,
                Err(_) => continue,
            };
            template.name = stem;
            templates.push(template);
        }
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        templates
    }

    pub fn load(&self, name: &str) -> anyhow::Result<Template> {
        let path = self.template_path(name);
        if !path.exists() {
            return Err(TemplateError::NotFound(name.to_string()).into());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Remove a template. A missing template and a failed removal are
    /// observably identical: both return false.
    pub fn delete(&self, name: &str) -> bool {
        let path = self.template_path(name);
        path.exists() && fs::remove_file(&path).is_ok()
    }

    /// Delete every listed template, returning how many were removed.
    pub fn clear(&self) -> usize {
        self.list()
            .iter()
            .filter(|t| self.delete(&t.name))
            .count()
    }

    /// Write the command as an executable shell script. A missing
    /// filename gets a timestamped default; extensions other than
    /// `.sh`/`.txt` are normalized to `.sh`.
    pub fn save_script(
        &self,
        command: &str,
        filename: Option<&str>,
    ) -> anyhow::Result<PathBuf> {
        let mut file = match filename {
            Some(name) if !name.is_empty() => {
                if !is_safe_name(name) {
                    return Err(TemplateError::InvalidName.into());
                }
                name.to_string()
            }
            _ => format!("command_{}.sh", Local::now().format("%Y%m%d_%H%M%S")),
        };
        if !file.ends_with(".sh") && !file.ends_with(".txt") {
            file.push_str(".sh");
        }
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);
        let body = format!(
            "#!/bin/bash\n# Generated command - always review before executing\n\n{}\n",
            command
        );
        fs::write(&path, body)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }
        Ok(path)
    }
}

fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && name != "."
        && name != ".."
}
