use esm_complete::Settings;
use std::env;
use tempfile::TempDir;

#[test]
fn test_env_override_with_nested_keys() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        "[completion]\nimport_lookahead = 250\nambient_enabled = true\n",
    )
    .unwrap();

    unsafe {
        // Double underscore separates nested levels
        env::set_var("ESM_COMPLETION__IMPORT_LOOKAHEAD", "4000");
        env::set_var("ESM_COMPLETION__AMBIENT_ENABLED", "false");
        env::set_var("ESM_LOGGING__DEFAULT", "debug");
    }

    let settings = Settings::load_from(&config_path).unwrap();

    unsafe {
        env::remove_var("ESM_COMPLETION__IMPORT_LOOKAHEAD");
        env::remove_var("ESM_COMPLETION__AMBIENT_ENABLED");
        env::remove_var("ESM_LOGGING__DEFAULT");
    }

    // Environment wins over the file
    assert_eq!(settings.completion.import_lookahead, 4000);
    assert!(!settings.completion.ambient_enabled);
    assert_eq!(settings.logging.default, "debug");
}
