use crate::services::display;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Route SIGINT into a flag the prompt loop can observe, so an interrupt
/// during a prompt surfaces at the outer menu loop instead of killing
/// the process mid-session.
pub fn install_interrupt_handler() {
    let _ = ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst));
}

fn take_interrupt() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

fn interrupted() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "interrupted")
}

/// One selectable row in a menu.
pub struct MenuEntry {
    pub label: String,
    pub detail: String,
}

impl MenuEntry {
    pub fn new(label: &str, detail: &str) -> Self {
        Self {
            label: label.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Narrow interface the wizard blocks on. Implemented for the terminal
/// below; tests drive the assembler with a scripted implementation.
pub trait Prompter {
    fn select(&mut self, title: &str, entries: &[MenuEntry]) -> io::Result<usize>;
    fn multi_select(&mut self, title: &str, entries: &[MenuEntry]) -> io::Result<Vec<usize>>;
    fn text(&mut self, prompt: &str, required: bool) -> io::Result<String>;
    fn confirm(&mut self, message: &str) -> io::Result<bool>;
    fn pause(&mut self) -> io::Result<()>;
}

/// Line-oriented prompter over stdin/stdout. Invalid input retries;
/// SIGINT and end-of-input both map to `ErrorKind::Interrupted`.
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line(&self, prompt: &str) -> io::Result<String> {
        if take_interrupt() {
            return Err(interrupted());
        }
        display::prompt(prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if take_interrupt() {
            return Err(interrupted());
        }
        if read == 0 {
            return Err(interrupted());
        }
        Ok(line.trim().to_string())
    }

    fn render(&self, title: &str, entries: &[MenuEntry]) {
        display::subheader(title);
        for (index, entry) in entries.iter().enumerate() {
            display::menu_entry(index + 1, &entry.label, &entry.detail);
        }
        println!();
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, title: &str, entries: &[MenuEntry]) -> io::Result<usize> {
        self.render(title, entries);
        loop {
            let line = self.read_line(&format!("Select an option [1-{}]: ", entries.len()))?;
            match line.parse::<usize>() {
                Ok(choice) if (1..=entries.len()).contains(&choice) => return Ok(choice - 1),
                _ => display::error_msg("Invalid selection. Please try again."),
            }
        }
    }

    fn multi_select(&mut self, title: &str, entries: &[MenuEntry]) -> io::Result<Vec<usize>> {
        self.render(title, entries);
        loop {
            let line = self.read_line(&format!(
                "Select options (comma-separated, e.g. 1,3) [1-{}, Enter to skip]: ",
                entries.len()
            ))?;
            if line.is_empty() {
                return Ok(Vec::new());
            }
            let parsed: Result<Vec<usize>, _> = line
                .split(',')
                .map(|part| part.trim().parse::<usize>())
                .collect();
            match parsed {
                Ok(choices)
                    if choices
                        .iter()
                        .all(|c| (1..=entries.len()).contains(c)) =>
                {
                    return Ok(choices.into_iter().map(|c| c - 1).collect());
                }
                _ => display::error_msg("Invalid selection. Please try again."),
            }
        }
    }

    fn text(&mut self, prompt: &str, required: bool) -> io::Result<String> {
        loop {
            let value = self.read_line(prompt)?;
            if value.is_empty() && required {
                display::error_msg("This field is required.");
                continue;
            }
            return Ok(value);
        }
    }

    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.read_line(&format!("{} [y/N]: ", message))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    fn pause(&mut self) -> io::Result<()> {
        self.read_line("Press Enter to continue...")?;
        Ok(())
    }
}
