use std::path::PathBuf;

/// `$HOME/.config/armory` — templates and the audit log live under here
/// unless overridden on the command line.
pub fn config_base_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config").join("armory"))
}

pub fn default_templates_dir() -> anyhow::Result<PathBuf> {
    Ok(config_base_dir()?.join("templates"))
}

/// Best-effort JSONL audit trail of state-changing actions. Failures to
/// write are swallowed: the audit log must never break the wizard.
pub fn audit(action: &str, data: serde_json::Value) {
    let base = match config_base_dir() {
        Ok(base) => base,
        Err(_) => return,
    };
    let _ = std::fs::create_dir_all(&base);
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data,
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(base.join("audit.jsonl"))
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}
