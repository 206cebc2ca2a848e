use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::catalog::Catalog;
use services::storage::default_templates_dir;
use services::templates::TemplateStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let catalog = Catalog::new(&cli.configs);
    let templates_dir = match &cli.templates {
        Some(dir) => dir.clone(),
        None => default_templates_dir()?,
    };
    let store = TemplateStore::new(templates_dir);

    match &cli.command {
        Some(command) => commands::handle_direct(&cli, &catalog, &store, command),
        None => commands::interactive::run(&catalog, &store, cli.hints),
    }
}
