use crate::domain::models::{FlagCategory, ToolDescriptor};
use crate::services::display;
use crate::services::prompt::{MenuEntry, Prompter};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("missing required parameter: {0}")]
    MissingRequired(String),
    #[error("interactive session failed")]
    Interaction(#[from] std::io::Error),
}

/// Required parameter values in collection order.
#[derive(Debug, Default)]
pub struct RequiredValues(Vec<(String, String)>);

impl RequiredValues {
    pub fn insert(&mut self, key: String, value: String) {
        self.0.push((key, value));
    }

    /// Value for `key`, or the empty string when it was never collected.
    pub fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

type RequiredTokensFn = fn(&RequiredValues) -> Vec<String>;

/// Per-tool assembly behavior: how collected required values become
/// trailing command tokens, and which category (if any) leads the
/// optional phase with its tokens emitted ahead of all other flags.
pub struct ToolProfile {
    pub required_tokens: RequiredTokensFn,
    pub lead_category: Option<&'static str>,
}

impl Default for ToolProfile {
    fn default() -> Self {
        Self {
            required_tokens: no_tokens,
            lead_category: None,
        }
    }
}

/// Strategy table keyed by tool id. Unknown ids fall back to emitting no
/// required-value tokens.
pub fn profile_for(tool_id: &str) -> ToolProfile {
    match tool_id {
        "nmap" => ToolProfile {
            required_tokens: bare_target,
            ..Default::default()
        },
        "hydra" => ToolProfile {
            required_tokens: service_then_target,
            ..Default::default()
        },
        "sqlmap" => ToolProfile {
            required_tokens: short_url_flag,
            ..Default::default()
        },
        "wpscan" => ToolProfile {
            required_tokens: long_url_flag,
            ..Default::default()
        },
        "gobuster" => ToolProfile {
            required_tokens: no_tokens,
            lead_category: Some("Mode"),
        },
        "aircrack" => ToolProfile {
            required_tokens: bare_capture,
            ..Default::default()
        },
        _ => ToolProfile::default(),
    }
}

fn no_tokens(_: &RequiredValues) -> Vec<String> {
    Vec::new()
}

fn bare_target(values: &RequiredValues) -> Vec<String> {
    let target = values.get("target");
    if target.is_empty() {
        Vec::new()
    } else {
        vec![target.to_string()]
    }
}

fn service_then_target(values: &RequiredValues) -> Vec<String> {
    let mut parts = Vec::new();
    let service = values.get("service");
    let target = values.get("target");
    if !service.is_empty() {
        parts.push(service.to_string());
    }
    if !target.is_empty() {
        parts.push(target.to_string());
    }
    parts
}

fn short_url_flag(values: &RequiredValues) -> Vec<String> {
    let url = values.get("url");
    if url.is_empty() {
        Vec::new()
    } else {
        vec![format!("-u \"{}\"", url)]
    }
}

fn long_url_flag(values: &RequiredValues) -> Vec<String> {
    let url = values.get("url");
    if url.is_empty() {
        Vec::new()
    } else {
        vec![format!("--url \"{}\"", url)]
    }
}

fn bare_capture(values: &RequiredValues) -> Vec<String> {
    let capture = values.get("capture");
    if capture.is_empty() {
        Vec::new()
    } else {
        vec![capture.to_string()]
    }
}

/// One in-progress interactive assembly. Single pass: required
/// parameters, then optional flag categories, then the final join.
/// Any interaction failure aborts the session. There is no retry;
/// redoing a choice means starting a fresh session.
pub struct BuildSession<'a> {
    descriptor: &'a ToolDescriptor,
    profile: ToolProfile,
    hint_mode: bool,
    required_values: RequiredValues,
    selected_flags: Vec<String>,
}

impl<'a> BuildSession<'a> {
    pub fn new(descriptor: &'a ToolDescriptor, profile: ToolProfile, hint_mode: bool) -> Self {
        Self {
            descriptor,
            profile,
            hint_mode,
            required_values: RequiredValues::default(),
            selected_flags: Vec::new(),
        }
    }

    pub fn run(mut self, ui: &mut dyn Prompter) -> Result<String, BuildError> {
        self.collect_required(ui)?;
        self.collect_optional(ui)?;
        Ok(self.assemble())
    }

    fn collect_required(&mut self, ui: &mut dyn Prompter) -> Result<(), BuildError> {
        if self.descriptor.required.is_empty() {
            return Ok(());
        }
        display::subheader(&format!(
            "Required parameters for {}",
            self.descriptor.name
        ));
        for param in &self.descriptor.required {
            if self.hint_mode && !param.description.is_empty() {
                display::info(&param.description);
            }
            let value = ui.text(&param.prompt, true)?;
            if value.is_empty() {
                return Err(BuildError::MissingRequired(param.key.clone()));
            }
            self.required_values.insert(param.key.clone(), value);
        }
        Ok(())
    }

    fn collect_optional(&mut self, ui: &mut dyn Prompter) -> Result<(), BuildError> {
        if self.descriptor.categories.is_empty() {
            return Ok(());
        }

        // The lead category (e.g. a mode selector) is offered first so
        // its tokens land ahead of every other flag.
        if let Some(lead) = self.profile.lead_category {
            if let Some(category) = self.descriptor.categories.iter().find(|c| c.label == lead) {
                display::subheader(&format!("{} selection", category.label));
                self.pick_options(ui, category)?;
            }
        }

        let rest: Vec<&FlagCategory> = self
            .descriptor
            .categories
            .iter()
            .filter(|c| Some(c.label.as_str()) != self.profile.lead_category)
            .collect();
        if rest.is_empty() {
            return Ok(());
        }

        display::subheader(&format!(
            "Optional parameters for {}",
            self.descriptor.name
        ));
        let entries: Vec<MenuEntry> = rest
            .iter()
            .map(|c| MenuEntry::new(&c.label, ""))
            .collect();
        let picked = ui.multi_select("Select categories to configure", &entries)?;
        for index in picked {
            self.pick_options(ui, rest[index])?;
        }
        Ok(())
    }

    fn pick_options(
        &mut self,
        ui: &mut dyn Prompter,
        category: &FlagCategory,
    ) -> Result<(), BuildError> {
        if category.options.is_empty() {
            return Ok(());
        }
        let entries: Vec<MenuEntry> = category
            .options
            .iter()
            .map(|o| MenuEntry::new(&o.flag, &o.description))
            .collect();
        let picked =
            ui.multi_select(&format!("Options in {}", category.label), &entries)?;
        for index in picked {
            let option = &category.options[index];
            if self.hint_mode && !option.description.is_empty() {
                display::info(&option.description);
            }
            if option.variable {
                let prompt = option
                    .prompt_text
                    .clone()
                    .unwrap_or_else(|| format!("Enter value for {}: ", option.flag));
                let value = ui.text(&prompt, false)?;
                // An empty value means the flag is skipped, not emitted bare.
                if !value.is_empty() {
                    self.selected_flags
                        .push(format!("{} \"{}\"", option.flag, value));
                }
            } else {
                self.selected_flags.push(option.flag.clone());
            }
        }
        Ok(())
    }

    fn assemble(&self) -> String {
        let mut parts = vec![self.descriptor.command.clone()];
        parts.extend(self.selected_flags.iter().cloned());
        parts.extend((self.profile.required_tokens)(&self.required_values));
        parts.join(" ")
    }
}
