use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_init_and_config_commands() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_esm-complete"))
        .current_dir(temp_dir.path())
        .arg("init")
        .output()
        .expect("Failed to run init command");
    assert!(output.status.success());

    let config_path = temp_dir.path().join(".esm-complete/settings.toml");
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[completion]"));
    assert!(content.contains("import_lookahead = 1000"));

    std::fs::write(&config_path, "[completion]\nimport_lookahead = 42\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_esm-complete"))
        .current_dir(temp_dir.path())
        .arg("config")
        .output()
        .expect("Failed to run config command");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("import_lookahead = 42"));

    // A second init without --force refuses to overwrite
    let output = Command::new(env!("CARGO_BIN_EXE_esm-complete"))
        .current_dir(temp_dir.path())
        .arg("init")
        .output()
        .expect("Failed to run init command");
    assert!(!output.status.success());
}
