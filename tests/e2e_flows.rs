use predicates::str::contains;
use std::fs;

mod common;
use common::TestEnv;

// Each flow drives the wizard over piped stdin: one line per prompt, in
// the order the menus appear.

#[test]
fn build_command_and_save_template() {
    let env = TestEnv::new();
    let script = [
        "1",               // main menu: Build New Command
        "2",               // tool: Nmap (sorted after Hydra)
        "192.168.1.100",   // required target
        "",                // categories: skip
        "4",               // post-build: Save as Template
        "smoke",           // template name
        "",                // description: none
        "",                // press enter
        "7",               // post-build: Back to Main Menu
        "5",               // main menu: Exit
    ]
    .join("\n");

    env.cmd()
        .write_stdin(format!("{}\n", script))
        .assert()
        .success()
        .stdout(contains("nmap 192.168.1.100"))
        .stdout(contains("Template saved: smoke"))
        .stdout(contains("Goodbye!"));

    let raw = fs::read_to_string(env.templates_dir().join("smoke.json"))
        .expect("template file written");
    let template: serde_json::Value = serde_json::from_str(&raw).expect("template json");
    assert_eq!(template["tool"], "nmap");
    assert_eq!(template["command"], "nmap 192.168.1.100");
    assert!(!template["created"].as_str().unwrap().is_empty());
}

#[test]
fn flags_keep_selection_order_and_value_flags_are_quoted() {
    let env = TestEnv::new();
    let script = [
        "1",             // Build New Command
        "2",             // Nmap
        "192.168.1.100", // target
        "1",             // configure category 1
        "1,2,3",         // -sS, -p (value), -T4
        "80,443",        // value for -p
        "3",             // Save to File
        "sweep",         // filename
        "",              // press enter
        "7",             // back
        "5",             // exit
    ]
    .join("\n");

    env.cmd()
        .write_stdin(format!("{}\n", script))
        .assert()
        .success()
        .stdout(contains("nmap -sS -p \"80,443\" -T4 192.168.1.100"));

    let body = fs::read_to_string(env.templates_dir().join("sweep.sh"))
        .expect("script artifact written");
    assert!(body.starts_with("#!/bin/bash\n"));
    assert!(body.contains("nmap -sS -p \"80,443\" -T4 192.168.1.100"));
}

#[test]
fn hydra_emits_service_before_target() {
    let env = TestEnv::new();
    let script = [
        "1",        // Build New Command
        "1",        // Hydra
        "ssh",      // service
        "10.0.0.5", // target
        "",         // categories: skip
        "4",        // Save as Template
        "spray",    // name
        "",         // description
        "",         // press enter
        "7",        // back
        "5",        // exit
    ]
    .join("\n");

    env.cmd()
        .write_stdin(format!("{}\n", script))
        .assert()
        .success()
        .stdout(contains("hydra ssh 10.0.0.5"));

    let out = env.run_json(&["template", "show", "spray"]);
    assert_eq!(out["data"]["command"], "hydra ssh 10.0.0.5");
}

#[test]
fn load_template_flow_previews_saved_command() {
    let env = TestEnv::new();
    env.seed_template("recon", "nmap", "nmap -sV 172.16.0.1");
    let script = [
        "2", // main menu: Load Template
        "1", // select the only template
        "1", // post-build: Preview
        "",  // press enter
        "7", // back
        "5", // exit
    ]
    .join("\n");

    env.cmd()
        .write_stdin(format!("{}\n", script))
        .assert()
        .success()
        .stdout(contains("nmap -sV 172.16.0.1"));
}

#[test]
fn settings_toggle_hints_and_clear_templates() {
    let env = TestEnv::new();
    env.seed_template("old", "nmap", "nmap 10.0.0.9");
    let script = [
        "4", // Settings
        "1", // Toggle Hint Mode
        "",  // press enter
        "4", // Settings again
        "2", // Clear All Templates
        "y", // confirm
        "",  // press enter
        "5", // exit
    ]
    .join("\n");

    env.cmd()
        .write_stdin(format!("{}\n", script))
        .assert()
        .success()
        .stdout(contains("Hint mode turned ON"))
        .stdout(contains("Deleted 1 templates"));

    assert!(!env.templates_dir().join("old.json").exists());
}

#[test]
fn invalid_menu_input_retries_instead_of_crashing() {
    let env = TestEnv::new();
    let script = [
        "banana", // not a number
        "99",     // out of range
        "5",      // exit
    ]
    .join("\n");

    env.cmd()
        .write_stdin(format!("{}\n", script))
        .assert()
        .success()
        .stdout(contains("Invalid selection"))
        .stdout(contains("Goodbye!"));
}

#[test]
fn truncated_input_exits_gracefully() {
    let env = TestEnv::new();
    // Input ends while the wizard is waiting for a tool choice; the
    // session winds down instead of crashing.
    env.cmd().write_stdin("1\n").assert().success();
}

#[test]
fn missing_configs_directory_degrades_to_no_tools() {
    let env = TestEnv::new();
    let script = ["1", "", "5"].join("\n");

    let mut cmd = assert_cmd::Command::cargo_bin("armory").expect("armory binary");
    cmd.env("HOME", &env.home)
        .args(["--configs", "/nonexistent/armory-configs"])
        .write_stdin(format!("{}\n", script))
        .assert()
        .success()
        .stdout(contains("No tools configured"));
}
