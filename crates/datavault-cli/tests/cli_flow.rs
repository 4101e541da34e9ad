use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use rusqlite::Connection;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_datavault"))
}

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("c")).expect("create config dir");
        std::fs::create_dir_all(dir.path().join("d")).expect("create data dir");
        Self { dir }
    }

    fn db(&self) -> PathBuf {
        self.dir.path().join("vault.db")
    }

    fn command(&self, passphrase: Option<&str>) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join("c"))
            .env("XDG_DATA_HOME", self.dir.path().join("d"))
            .env_remove("DATAVAULT_DB")
            .env_remove("DATAVAULT_CONFIG")
            .env_remove("DATAVAULT_LOG")
            .env_remove("DATAVAULT_PASSPHRASE")
            .stdin(Stdio::null());
        if let Some(value) = passphrase {
            cmd.env("DATAVAULT_PASSPHRASE", value);
        }
        cmd
    }

    fn run(&self, passphrase: Option<&str>, args: &[&str]) -> Output {
        let db = self.db();
        self.command(passphrase)
            .arg("--db")
            .arg(&db)
            .args(args)
            .output()
            .expect("run datavault")
    }

    fn add_alice(&self, passphrase: &str) {
        let output = self.run(
            Some(passphrase),
            &[
                "add",
                "--name",
                "Alice",
                "--id-number",
                "1234567890123456",
                "--address",
                "Jl. Merdeka",
                "--phone",
                "0811111111",
                "--no-input",
            ],
        );
        assert_success(&output);
    }
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: status={:?}\nstdout={}\nstderr={}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert_success(output);
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn stored_names(db: &Path) -> Vec<String> {
    let conn = Connection::open(db).expect("open sqlite");
    let mut stmt = conn
        .prepare("SELECT name FROM records ORDER BY id")
        .expect("prepare");
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .expect("query");
    rows.map(|r| r.expect("row")).collect()
}

#[test]
fn test_add_stores_only_ciphertext() {
    let sandbox = Sandbox::new();
    sandbox.add_alice("secret");

    let names = stored_names(&sandbox.db());
    assert_eq!(names.len(), 1);
    assert_ne!(names[0], "Alice");
    assert!(!names[0].contains("Alice"));

    let listed = stdout_json(&sandbox.run(None, &["list", "--json"]));
    let records = listed.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["name"], names[0].as_str());
}

#[test]
fn test_show_with_correct_passphrase() {
    let sandbox = Sandbox::new();
    sandbox.add_alice("secret");

    let shown = stdout_json(&sandbox.run(Some("secret"), &["show", "1", "--json", "--no-input"]));
    assert_eq!(shown["name"], "Alice");
    assert_eq!(shown["id_number"], "1234567890123456");
    assert_eq!(shown["address"], "Jl. Merdeka");
    assert_eq!(shown["phone"], "0811111111");

    let text = sandbox.run(Some("secret"), &["show", "1", "--no-input"]);
    assert_success(&text);
    let stdout = String::from_utf8_lossy(&text.stdout);
    assert!(stdout.contains("Name: Alice"));
}

#[test]
fn test_show_with_wrong_passphrase_fails() {
    let sandbox = Sandbox::new();
    sandbox.add_alice("secret");

    let output = sandbox.run(Some("wrong"), &["show", "1", "--no-input"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Alice"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to decrypt"));
}

#[test]
fn test_edit_replaces_fields() {
    let sandbox = Sandbox::new();
    sandbox.add_alice("secret");
    let before = stored_names(&sandbox.db());

    let output = sandbox.run(
        Some("secret"),
        &["edit", "1", "--address", "Jl. Thamrin", "--no-input"],
    );
    assert_success(&output);

    let shown = stdout_json(&sandbox.run(Some("secret"), &["show", "1", "--json", "--no-input"]));
    assert_eq!(shown["name"], "Alice");
    assert_eq!(shown["address"], "Jl. Thamrin");

    // Every field is re-encrypted, including unchanged ones.
    assert_ne!(stored_names(&sandbox.db()), before);
}

#[test]
fn test_edit_with_wrong_passphrase_changes_nothing() {
    let sandbox = Sandbox::new();
    sandbox.add_alice("secret");
    let before = stored_names(&sandbox.db());

    let output = sandbox.run(
        Some("wrong"),
        &["edit", "1", "--name", "Mallory", "--no-input"],
    );
    assert_eq!(output.status.code(), Some(5));
    assert_eq!(stored_names(&sandbox.db()), before);
}

#[test]
fn test_delete_then_edit_not_found() {
    let sandbox = Sandbox::new();
    sandbox.add_alice("secret");

    assert_success(&sandbox.run(None, &["delete", "1"]));

    let output = sandbox.run(
        Some("secret"),
        &["edit", "1", "--name", "Bob", "--no-input"],
    );
    assert_eq!(output.status.code(), Some(3));

    let output = sandbox.run(None, &["delete", "1"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_decrypt_all_reports_each_record() {
    let sandbox = Sandbox::new();
    sandbox.add_alice("secret");
    sandbox.add_alice("another");

    let outcomes = stdout_json(&sandbox.run(Some("secret"), &["decrypt", "--json", "--no-input"]));
    let outcomes = outcomes.as_array().expect("array");
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["ok"], true);
    assert_eq!(outcomes[0]["name"], "Alice");
    assert_eq!(outcomes[1]["ok"], false);
    assert_eq!(outcomes[1]["id"], 2);
}

#[test]
fn test_add_missing_field_without_input() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(
        Some("secret"),
        &["add", "--name", "Alice", "--no-input"],
    );
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--id-number"));
}

#[test]
fn test_show_without_passphrase_without_input() {
    let sandbox = Sandbox::new();
    sandbox.add_alice("secret");

    let output = sandbox.run(None, &["show", "1", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("DATAVAULT_PASSPHRASE"));
}

#[test]
fn test_init_writes_config_used_by_later_commands() {
    let sandbox = Sandbox::new();
    let vault = sandbox.dir.path().join("from-config.db");

    let output = sandbox
        .command(None)
        .arg("init")
        .arg(&vault)
        .output()
        .expect("run init");
    assert_success(&output);
    assert!(vault.exists());
    assert!(sandbox
        .dir
        .path()
        .join("c")
        .join("datavault")
        .join("config.toml")
        .exists());

    let output = sandbox
        .command(Some("secret"))
        .args([
            "add",
            "--name",
            "Alice",
            "--id-number",
            "1",
            "--address",
            "Jl. Merdeka",
            "--phone",
            "0811",
            "--no-input",
        ])
        .output()
        .expect("run add");
    assert_success(&output);

    assert_eq!(stored_names(&vault).len(), 1);
}
