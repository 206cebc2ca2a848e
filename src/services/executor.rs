use std::process::{Command, ExitStatus};

/// Run the assembled command line verbatim through the shell. No
/// escaping, no sandboxing: the caller has already confirmed the
/// execution with the user.
pub fn run_shell(command: &str) -> anyhow::Result<ExitStatus> {
    let status = Command::new("sh").arg("-c").arg(command).status()?;
    Ok(status)
}
