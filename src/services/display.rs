use colored::Colorize;

const BANNER: &str = r#"
    ___    ____  __  _______  ______  __
   /   |  / __ \/  |/  / __ \/ __ \ \/ /
  / /| | / /_/ / /|_/ / / / / /_/ /\  /
 / ___ |/ _, _/ /  / / /_/ / _, _/ / /
/_/  |_/_/ |_/_/  /_/\____/_/ |_| /_/
"#;

pub fn banner() {
    println!("{}", BANNER.red().bold());
    println!(
        "{}",
        "Interactive command builder for security tooling".cyan().bold()
    );
    println!(
        "{}",
        "Assemble, save, and reuse tool invocations safely".yellow()
    );
    println!();
}

pub fn clear_screen() {
    // ANSI clear + cursor home; good enough for the terminals we target.
    print!("\x1b[2J\x1b[1;1H");
}

pub fn header(text: &str) {
    let rule = "=".repeat(60);
    println!("\n{}", rule.cyan().bold());
    println!("{}", format!("{:^60}", text).cyan().bold());
    println!("{}\n", rule.cyan().bold());
}

pub fn subheader(text: &str) {
    println!("\n{}", format!("▸ {}", text).blue().bold());
    println!("{}\n", "-".repeat(55).bright_black());
}

pub fn menu_entry(number: usize, label: &str, detail: &str) {
    println!("  {}. {}", number.to_string().bold(), label.cyan());
    if !detail.is_empty() {
        println!("     {}", detail.bright_black());
    }
}

pub fn prompt(text: &str) {
    print!("{}", text.bold());
}

pub fn info(text: &str) {
    println!("{}", format!("ℹ {}", text).cyan());
}

pub fn success(text: &str) {
    println!("{}", format!("✓ {}", text).green());
}

pub fn error_msg(text: &str) {
    println!("{}", format!("✗ {}", text).red());
}

pub fn warning(text: &str) {
    println!("{}", format!("⚠ {}", text).yellow());
}

pub fn command(command: &str) {
    println!("\n{}", "Command:".green().bold());
    println!("{}\n", command.yellow());
}
