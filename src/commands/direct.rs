use crate::cli::{Cli, Commands, TemplateCommands};
use crate::domain::models::JsonOut;
use crate::services::catalog::Catalog;
use crate::services::storage::audit;
use crate::services::templates::TemplateStore;
use serde::Serialize;

pub fn handle_direct(
    cli: &Cli,
    catalog: &Catalog,
    store: &TemplateStore,
    command: &Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Tools => {
            let tools = catalog.list_tools();
            rows(cli.json, &tools, |t| {
                format!("{}\t{}\t{}", t.id, t.name, t.description)
            })?;
        }
        Commands::Show { tool } => {
            let descriptor = catalog.load_tool(tool)?;
            if cli.json {
                emit(&descriptor)?;
            } else {
                println!("name: {}", descriptor.name);
                println!("description: {}", descriptor.description);
                println!("command: {}", descriptor.command);
                for param in &descriptor.required {
                    println!("required: {}\t{}", param.key, param.description);
                }
                for category in &descriptor.categories {
                    println!(
                        "category: {}\t{} options",
                        category.label,
                        category.options.len()
                    );
                }
            }
        }
        Commands::Template { command } => match command {
            TemplateCommands::List => {
                let templates = store.list();
                rows(cli.json, &templates, |t| {
                    format!("{}\t{}\t{}", t.name, t.tool, t.description)
                })?;
            }
            TemplateCommands::Show { name } => {
                let template = store.load(name)?;
                if cli.json {
                    emit(&template)?;
                } else {
                    println!("name: {}", template.name);
                    println!("tool: {}", template.tool);
                    println!("description: {}", template.description);
                    println!("created: {}", template.created);
                    println!("command: {}", template.command);
                }
            }
            TemplateCommands::Delete { name } => {
                let removed = store.delete(name);
                if removed {
                    audit("template_delete", serde_json::json!({ "name": name }));
                }
                if cli.json {
                    emit(&removed)?;
                } else if removed {
                    println!("deleted {}", name);
                } else {
                    println!("no such template: {}", name);
                }
            }
        },
    }
    Ok(())
}

fn emit<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

fn rows<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        emit(&data)?;
    } else {
        for item in data {
            println!("{}", row(item));
        }
    }
    Ok(())
}
