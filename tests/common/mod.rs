use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub configs: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let configs = make_fixture_configs(tmp.path());

        Self {
            _tmp: tmp,
            home,
            configs,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("armory").expect("armory binary");
        cmd.env("HOME", &self.home)
            .arg("--configs")
            .arg(&self.configs);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.home.join(".config").join("armory").join("templates")
    }

    pub fn seed_template(&self, name: &str, tool: &str, command: &str) {
        let dir = self.templates_dir();
        fs::create_dir_all(&dir).expect("create templates dir");
        let body = serde_json::json!({
            "name": name,
            "tool": tool,
            "command": command,
            "description": "seeded fixture",
            "created": "2026-01-01T00:00:00+00:00"
        });
        fs::write(
            dir.join(format!("{}.json", name)),
            serde_json::to_string_pretty(&body).expect("serialize template"),
        )
        .expect("write template fixture");
    }
}

fn make_fixture_configs(base: &Path) -> PathBuf {
    let configs = base.join("configs");
    fs::create_dir_all(&configs).expect("create fixture configs dir");

    let nmap = serde_json::json!({
        "name": "Nmap",
        "description": "Network scanner",
        "command": "nmap",
        "categories": [
            {
                "label": "Scan options",
                "options": [
                    { "flag": "-sS", "description": "SYN scan", "variable": false },
                    { "flag": "-p", "description": "Port list", "variable": true,
                      "prompt_text": "Ports to scan: " },
                    { "flag": "-T4", "description": "Aggressive timing", "variable": false }
                ]
            }
        ],
        "required": [
            { "key": "target", "prompt": "Enter target: ", "description": "Host to scan" }
        ]
    });
    fs::write(
        configs.join("nmap_config.json"),
        serde_json::to_string_pretty(&nmap).expect("serialize nmap fixture"),
    )
    .expect("write nmap fixture");

    let hydra = serde_json::json!({
        "name": "Hydra",
        "description": "Login brute-forcer",
        "command": "hydra",
        "categories": [
            {
                "label": "Tuning",
                "options": [
                    { "flag": "-V", "description": "Verbose attempts", "variable": false }
                ]
            }
        ],
        "required": [
            { "key": "service", "prompt": "Enter service: ", "description": "Protocol module" },
            { "key": "target", "prompt": "Enter target: ", "description": "Target host" }
        ]
    });
    fs::write(
        configs.join("hydra_config.json"),
        serde_json::to_string_pretty(&hydra).expect("serialize hydra fixture"),
    )
    .expect("write hydra fixture");

    configs
}
