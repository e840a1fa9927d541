// Integration tests for Prism

use std::path::Path;
use std::process::Command;

#[test]
fn test_version_display() {
    let output = Command::new("cargo")
        .args(&["run", "--release", "--", "--version"])
        .output()
        .expect("Failed to run prism --version");

    assert!(output.status.success(), "Version command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("prism"), "Expected 'prism' in version output");
}

#[test]
fn test_help_display() {
    let output = Command::new("cargo")
        .args(&["run", "--release", "--", "--help"])
        .output()
        .expect("Failed to run prism --help");

    assert!(output.status.success(), "Help command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("explain") && stdout.contains("dashboard"),
            "Expected explain and dashboard in help output");
}

#[test]
fn test_clean_empty_directory() {
    let dir = std::env::temp_dir().join(format!("prism-clean-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");

    let output = Command::new("cargo")
        .args(&["run", "--release", "--", "clean", "-y", "-d"])
        .arg(&dir)
        .output()
        .expect("Failed to run prism clean");

    assert!(output.status.success(), "Clean command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No reports found"),
            "Expected clean to report an empty directory");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_explain_with_model() {
    // Runs only when a model directory is available (CI provides one)
    let models = Path::new("models");

    if !models.exists() && std::env::var("PRISM_MODELS_DIR").is_err() {
        eprintln!("Skipping test: no models directory found");
        return;
    }

    let dir = std::env::temp_dir().join(format!("prism-explain-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");

    let output = Command::new("cargo")
        .args(&[
            "run", "--release", "--",
            "explain", "A genuinely wonderful film",
            "-m", "occlusion",
            "-d",
        ])
        .arg(&dir)
        .output()
        .expect("Failed to run prism explain");

    assert!(output.status.success(), "Explain command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("occlusion"), "Expected occlusion section in output");

    // Check that a report was written
    let prism_dir = dir.join(".prism");
    assert!(prism_dir.exists(), "Expected .prism directory to be created");

    let reports: Vec<_> = std::fs::read_dir(&prism_dir)
        .expect("Failed to read .prism directory")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("msgpack"))
        .collect();

    assert!(!reports.is_empty(), "Expected a report file to be created");

    let _ = std::fs::remove_dir_all(&dir);
}
