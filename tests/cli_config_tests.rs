//! End-to-end tests for `mystic-catalog config` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let dir = temp_config_dir();
    let output = isolated_command(&["config", "show"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Theme Mode: auto"));
    assert!(stdout.contains("(not set)"));
}

#[test]
fn test_config_show_json_format() {
    let dir = temp_config_dir();
    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");

    assert!(result["ui"].is_object(), "Should have ui object");
    assert!(result["profile"].is_object(), "Should have profile object");
    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["show_help_on_startup"], true);
    assert!(result["config_file"]
        .as_str()
        .unwrap()
        .starts_with(dir.path().to_str().unwrap()));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists() {
    let dir = temp_config_dir();

    for (key, value) in [
        ("ui.theme_mode", "light"),
        ("ui.show_help_on_startup", "false"),
        ("profile.display_name", "Asha"),
        ("profile.sun_sign", "Leo"),
    ] {
        let output = isolated_command(&["config", "set", key, value], dir.path())
            .output()
            .expect("Failed to execute command");
        assert_eq!(
            output.status.code(),
            Some(0),
            "Setting {key} should succeed. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    assert!(dir.path().join("config.toml").exists());

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["ui"]["theme"], "light");
    assert_eq!(result["ui"]["show_help_on_startup"], false);
    assert_eq!(result["profile"]["display_name"], "Asha");
    assert_eq!(result["profile"]["sun_sign"], "Leo");
}

#[test]
fn test_config_set_empty_clears_profile_field() {
    let dir = temp_config_dir();
    isolated_command(&["config", "set", "profile.sun_sign", "Virgo"], dir.path())
        .output()
        .expect("Failed to execute command");
    let output = isolated_command(&["config", "set", "profile.sun_sign", ""], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(result["profile"].get("sun_sign").is_none());
}

#[test]
fn test_config_set_unknown_key() {
    let dir = temp_config_dir();
    let output = isolated_command(&["config", "set", "ui.colour", "red"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown configuration key"));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_invalid_theme() {
    let dir = temp_config_dir();
    let output = isolated_command(&["config", "set", "ui.theme_mode", "sepia"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid theme mode"));
}

#[test]
fn test_config_show_rejects_corrupt_file() {
    let dir = temp_config_dir();
    std::fs::write(dir.path().join("config.toml"), "[ui\nbroken").unwrap();

    let output = isolated_command(&["config", "show"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_keeps_invalid_file_untouched() {
    let dir = temp_config_dir();
    let path = dir.path().join("config.toml");
    let original = format!(
        "[ui]\ntheme_mode = \"Light\"\nshow_help_on_startup = false\n\n[profile]\ndisplay_name = \"{}\"\n",
        "x".repeat(51)
    );
    std::fs::write(&path, &original).unwrap();

    let output = isolated_command(&["config", "set", "profile.sun_sign", "Leo"], dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}
