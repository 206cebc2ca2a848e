use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard writers probed in order; first one present on PATH wins.
const CANDIDATES: &[(&str, &[&str])] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

#[derive(thiserror::Error, Debug)]
pub enum ClipboardError {
    #[error("no clipboard utility found (install xclip, xsel, or pbcopy)")]
    Unavailable,
    #[error("clipboard write failed")]
    Io(#[from] std::io::Error),
}

fn available(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Pipe `text` into the first available clipboard utility.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    for (program, args) in CANDIDATES {
        if !available(program) {
            continue;
        }
        let mut child = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .spawn()?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        child.wait()?;
        return Ok(());
    }
    Err(ClipboardError::Unavailable)
}
