use crate::domain::models::BuiltCommand;
use crate::services::assembler::{profile_for, BuildError, BuildSession};
use crate::services::catalog::Catalog;
use crate::services::display;
use crate::services::prompt::{install_interrupt_handler, MenuEntry, Prompter, TerminalPrompter};
use crate::services::storage::audit;
use crate::services::templates::TemplateStore;
use crate::services::{clipboard, executor};
use std::io;

/// Wizard-wide state carried explicitly through the menu call chain.
pub struct Session {
    pub hint_mode: bool,
}

enum MenuOutcome {
    Continue,
    Exit,
}

enum PostBuild {
    Done,
    BuildAnother,
}

pub fn run(catalog: &Catalog, store: &TemplateStore, hints: bool) -> anyhow::Result<()> {
    install_interrupt_handler();
    let mut ui = TerminalPrompter;
    let mut session = Session { hint_mode: hints };

    display::banner();
    loop {
        match main_menu_round(catalog, store, &mut session, &mut ui) {
            Ok(MenuOutcome::Exit) => {
                display::success("Goodbye!");
                break;
            }
            Ok(MenuOutcome::Continue) => {}
            Err(err) if is_interrupted(&err) => {
                display::warning("Interrupted");
                match ui.confirm("Exit armory?") {
                    Ok(false) => {}
                    // Confirmed, or the terminal is gone: either way, out.
                    Ok(true) | Err(_) => {
                        display::success("Goodbye!");
                        break;
                    }
                }
            }
            Err(err) => {
                display::error_msg(&format!("An error occurred: {:#}", err));
                if ui.pause().is_err() {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Every failure below the main menu is recovered here; nothing short of
/// a dead terminal ends the loop.
fn main_menu_round(
    catalog: &Catalog,
    store: &TemplateStore,
    session: &mut Session,
    ui: &mut dyn Prompter,
) -> anyhow::Result<MenuOutcome> {
    display::header("Armory - Main Menu");
    let entries = [
        MenuEntry::new("Build New Command", "Interactively assemble a tool invocation"),
        MenuEntry::new("Load Template", "Reuse a previously saved command"),
        MenuEntry::new("Manage Templates", "View or delete saved templates"),
        MenuEntry::new("Settings", "Hints and template housekeeping"),
        MenuEntry::new("Exit", "Quit armory"),
    ];
    match ui.select("Main Menu", &entries)? {
        0 => build_command(catalog, store, session, ui)?,
        1 => load_template(catalog, store, session, ui)?,
        2 => manage_templates(catalog, store, session, ui)?,
        3 => settings(store, session, ui)?,
        _ => return Ok(MenuOutcome::Exit),
    }
    Ok(MenuOutcome::Continue)
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map(|io_err| io_err.kind() == io::ErrorKind::Interrupted)
            .unwrap_or(false)
    })
}

fn build_command(
    catalog: &Catalog,
    store: &TemplateStore,
    session: &mut Session,
    ui: &mut dyn Prompter,
) -> anyhow::Result<()> {
    loop {
        let tools = catalog.list_tools();
        if tools.is_empty() {
            display::error_msg(&format!(
                "No tools configured. Check {}",
                catalog.dir().display()
            ));
            ui.pause()?;
            return Ok(());
        }

        display::subheader("Available tools");
        let entries: Vec<MenuEntry> = tools
            .iter()
            .map(|t| MenuEntry::new(&t.name, &t.description))
            .collect();
        let picked = &tools[ui.select("Select a tool", &entries)?];

        // NotFound and Invalid stay distinct in the error type; the
        // wizard reports them with one message.
        let descriptor = match catalog.load_tool(&picked.id) {
            Ok(descriptor) => descriptor,
            Err(_) => {
                display::error_msg(&format!(
                    "Could not load configuration for {}",
                    picked.name
                ));
                ui.pause()?;
                return Ok(());
            }
        };

        let build = BuildSession::new(&descriptor, profile_for(&picked.id), session.hint_mode);
        let command = match build.run(ui) {
            Ok(command) => command,
            Err(BuildError::MissingRequired(key)) => {
                display::error_msg(&format!(
                    "Command building failed: missing required parameter '{}'",
                    key
                ));
                ui.pause()?;
                return Ok(());
            }
            Err(BuildError::Interaction(err)) => return Err(err.into()),
        };

        let built = BuiltCommand {
            tool_id: picked.id.clone(),
            tool_name: descriptor.name.clone(),
            command,
        };
        match command_options(store, &built, ui)? {
            PostBuild::BuildAnother => continue,
            PostBuild::Done => return Ok(()),
        }
    }
}

/// Post-build menu: everything the user can do with a finished command.
fn command_options(
    store: &TemplateStore,
    built: &BuiltCommand,
    ui: &mut dyn Prompter,
) -> anyhow::Result<PostBuild> {
    loop {
        display::clear_screen();
        display::header(&format!("{} - Command Ready", built.tool_name));
        display::command(&built.command);

        let entries = [
            MenuEntry::new("Preview Command", "Display the command in detail"),
            MenuEntry::new("Copy to Clipboard", "Copy command to the system clipboard"),
            MenuEntry::new("Save to File", "Save command as an executable script"),
            MenuEntry::new("Save as Template", "Save command as a reusable template"),
            MenuEntry::new("Execute Command", "Run the command (with confirmation)"),
            MenuEntry::new("Build Another", "Start a new command"),
            MenuEntry::new("Back to Main Menu", ""),
        ];
        match ui.select("Command Options", &entries)? {
            0 => {
                display::clear_screen();
                display::header(&format!("{} Command Preview", built.tool_name));
                display::command(&built.command);
                ui.pause()?;
            }
            1 => {
                match clipboard::copy(&built.command) {
                    Ok(()) => display::success("Command copied to clipboard!"),
                    Err(err) => display::error_msg(&format!("Copy failed: {}", err)),
                }
                ui.pause()?;
            }
            2 => {
                let filename = ui.text("Enter filename (optional): ", false)?;
                let filename = if filename.is_empty() {
                    None
                } else {
                    Some(filename)
                };
                match store.save_script(&built.command, filename.as_deref()) {
                    Ok(path) => {
                        audit(
                            "script_save",
                            serde_json::json!({ "path": path.to_string_lossy() }),
                        );
                        display::success(&format!("Command saved to: {}", path.display()));
                    }
                    Err(err) => display::error_msg(&format!("Failed to save command: {}", err)),
                }
                ui.pause()?;
            }
            3 => {
                let name = ui.text("Enter template name: ", true)?;
                let description = ui.text("Enter description (optional): ", false)?;
                match store.save(&name, &built.tool_id, &built.command, &description) {
                    Ok(_) => {
                        audit(
                            "template_save",
                            serde_json::json!({ "name": name, "tool": built.tool_id }),
                        );
                        display::success(&format!("Template saved: {}", name));
                    }
                    Err(err) => display::error_msg(&format!("Failed to save template: {}", err)),
                }
                ui.pause()?;
            }
            4 => {
                execute_with_confirmation(built, ui)?;
                ui.pause()?;
            }
            5 => return Ok(PostBuild::BuildAnother),
            _ => return Ok(PostBuild::Done),
        }
    }
}

fn execute_with_confirmation(built: &BuiltCommand, ui: &mut dyn Prompter) -> anyhow::Result<()> {
    display::clear_screen();
    display::warning("EXECUTION WARNING");
    println!("You are about to execute a system command. Make sure you:");
    println!("  * Understand what this command does");
    println!("  * Have proper authorization");
    println!("  * Are in an appropriate testing environment\n");

    if !ui.confirm("Are you sure you want to execute this command?")? {
        display::info("Command execution cancelled.");
        return Ok(());
    }
    match executor::run_shell(&built.command) {
        Ok(status) => {
            audit(
                "execute",
                serde_json::json!({ "tool": built.tool_id, "command": built.command }),
            );
            if status.success() {
                display::success("Command executed successfully");
            } else {
                display::warning(&format!("Command exited with {}", status));
            }
        }
        Err(err) => display::error_msg(&format!("Error executing command: {}", err)),
    }
    Ok(())
}

fn load_template(
    catalog: &Catalog,
    store: &TemplateStore,
    session: &mut Session,
    ui: &mut dyn Prompter,
) -> anyhow::Result<()> {
    let templates = store.list();
    if templates.is_empty() {
        display::info("No saved templates found");
        ui.pause()?;
        return Ok(());
    }

    display::subheader("Saved templates");
    let entries: Vec<MenuEntry> = templates
        .iter()
        .map(|t| MenuEntry::new(&t.name, &format!("{}: {}", t.tool, t.description)))
        .collect();
    let template = &templates[ui.select("Select a template", &entries)?];

    let built = BuiltCommand {
        tool_id: template.tool.clone(),
        tool_name: template.tool.clone(),
        command: template.command.clone(),
    };
    if let PostBuild::BuildAnother = command_options(store, &built, ui)? {
        build_command(catalog, store, session, ui)?;
    }
    Ok(())
}

fn manage_templates(
    catalog: &Catalog,
    store: &TemplateStore,
    session: &mut Session,
    ui: &mut dyn Prompter,
) -> anyhow::Result<()> {
    loop {
        let templates = store.list();
        if templates.is_empty() {
            display::info("No saved templates found");
            ui.pause()?;
            return Ok(());
        }

        display::subheader("Template management");
        let mut entries: Vec<MenuEntry> = templates
            .iter()
            .map(|t| MenuEntry::new(&t.name, &format!("{}: {}", t.tool, t.description)))
            .collect();
        entries.push(MenuEntry::new("Back to Main Menu", ""));

        let choice = ui.select("Select a template", &entries)?;
        if choice == templates.len() {
            return Ok(());
        }
        let template = templates[choice].clone();

        display::clear_screen();
        display::header(&format!("Template: {}", template.name));
        display::info(&format!("Tool: {}", template.tool));
        display::info(&format!("Description: {}", template.description));
        display::command(&template.command);

        let actions = [
            MenuEntry::new("Use This Template", "Load and prepare this command"),
            MenuEntry::new("Delete Template", "Remove this template"),
            MenuEntry::new("Back", ""),
        ];
        match ui.select("Template Actions", &actions)? {
            0 => {
                let built = BuiltCommand {
                    tool_id: template.tool.clone(),
                    tool_name: template.tool.clone(),
                    command: template.command.clone(),
                };
                if let PostBuild::BuildAnother = command_options(store, &built, ui)? {
                    build_command(catalog, store, session, ui)?;
                }
                return Ok(());
            }
            1 => {
                if ui.confirm("Delete this template?")? {
                    if store.delete(&template.name) {
                        audit(
                            "template_delete",
                            serde_json::json!({ "name": template.name }),
                        );
                        display::success("Template deleted");
                    } else {
                        display::error_msg("Failed to delete template");
                    }
                    ui.pause()?;
                }
            }
            _ => {}
        }
    }
}

fn settings(
    store: &TemplateStore,
    session: &mut Session,
    ui: &mut dyn Prompter,
) -> anyhow::Result<()> {
    display::subheader("Settings");
    let entries = [
        MenuEntry::new(
            "Toggle Hint Mode",
            &format!(
                "Currently: {}",
                if session.hint_mode { "ON" } else { "OFF" }
            ),
        ),
        MenuEntry::new("Clear All Templates", "Delete all saved templates"),
        MenuEntry::new("Back to Main Menu", ""),
    ];
    match ui.select("Settings", &entries)? {
        0 => {
            session.hint_mode = !session.hint_mode;
            display::success(&format!(
                "Hint mode turned {}",
                if session.hint_mode { "ON" } else { "OFF" }
            ));
            ui.pause()?;
        }
        1 => {
            if ui.confirm("Are you sure you want to delete all templates?")? {
                let removed = store.clear();
                audit("templates_clear", serde_json::json!({ "removed": removed }));
                display::success(&format!("Deleted {} templates", removed));
            }
            ui.pause()?;
        }
        _ => {}
    }
    Ok(())
}
