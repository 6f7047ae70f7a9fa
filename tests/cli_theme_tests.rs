//! End-to-end tests for `shell-themes list`, `show`, and `categories`.

use std::process::Command;

/// Path to the shell-themes binary (set by cargo at compile time)
fn shell_themes_bin() -> &'static str {
    env!("CARGO_BIN_EXE_shell-themes")
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(shell_themes_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_stock_themes() {
    let output = run(&["list"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "List should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("deepBlue"));
    assert!(stdout.contains("Deep Blue"));
    assert!(!stdout.contains("cat-mauve"));
}

#[test]
fn test_list_json_format() {
    let output = run(&["list", "--light", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["mode"], "light");
    assert_eq!(result["count"].as_u64().unwrap(), 10);
    assert_eq!(result["themes"][0]["id"], "blue");
    assert_eq!(result["themes"][0]["name"], "Blue Light");
}

#[test]
fn test_list_catppuccin_json() {
    let output = run(&["list", "--catppuccin", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["count"].as_u64().unwrap(), 14);
    assert_eq!(result["themes"][3]["id"], "cat-mauve");
    assert_eq!(result["themes"][3]["name"], "Mauve");
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_catppuccin_json() {
    let output = run(&["show", "cat-mauve", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let palette: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(palette["name"], "Mauve");
    assert_eq!(palette["primary"], "#cba6f7");
    assert_eq!(palette["background"], "#1e1e2e");
    assert!(palette.get("matugen_type").is_none());
}

#[test]
fn test_show_light_json() {
    let output = run(&["show", "cat-mauve", "--light", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let palette: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(palette["name"], "Mauve Light");
    assert_eq!(palette["primary"], "#8839ef");
    assert_eq!(palette["primaryText"], "#ffffff");
}

#[test]
fn test_show_unknown_stock_falls_back_to_blue() {
    let output = run(&["show", "no-such-theme", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let palette: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(palette["name"], "Blue");
    assert_eq!(palette["primary"], "#42a5f5");
}

#[test]
fn test_show_unknown_catppuccin_fails() {
    let output = run(&["show", "cat-does-not-exist"]);

    assert_eq!(
        output.status.code(),
        Some(1),
        "Unknown Catppuccin variant should be a validation error"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cat-does-not-exist"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_show_human_readable() {
    let output = run(&["show", "coral"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Coral\n"));
    assert!(stdout.contains("surfaceContainerHigh"));
    assert!(stdout.contains("#ffb4ab"));
    assert!(stdout.contains("rgb(255, 180, 171)"));
    // Output is piped, so no escape sequences
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_show_requires_id() {
    let output = run(&["show"]);
    assert_ne!(output.status.code(), Some(0));
}

// ============================================================================
// Categories Command Tests
// ============================================================================

#[test]
fn test_categories_json() {
    let output = run(&["categories", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["count"].as_u64().unwrap(), 2);
    assert_eq!(result["categories"][0]["name"], "Generic");
    assert_eq!(result["categories"][0]["variants"].as_array().unwrap().len(), 10);
    assert_eq!(result["categories"][1]["id"], "CATPPUCCIN");
    assert_eq!(result["categories"][1]["variants"][0], "cat-rosewater");
}

#[test]
fn test_categories_human_readable() {
    let output = run(&["categories"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generic (10):"));
    assert!(stdout.contains("Catppuccin (14):"));
}
