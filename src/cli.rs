use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "armory",
    version,
    about = "Interactive command builder for security tooling"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = "configs",
        help = "Directory containing tool descriptor files"
    )]
    pub configs: PathBuf,
    #[arg(long, global = true, help = "Directory for saved templates")]
    pub templates: Option<PathBuf>,
    #[arg(long, help = "Show parameter hints while prompting")]
    pub hints: bool,
    /// With no subcommand, armory starts the interactive wizard.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the configured tools
    Tools,
    /// Show one tool's descriptor
    Show { tool: String },
    /// Inspect or prune saved templates
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    List,
    Show { name: String },
    Delete { name: String },
}
