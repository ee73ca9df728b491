/*!
 * CLI Integration Tests
 *
 * Invokes the `generate_test_images` binary the way a developer would.
 */

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const FIXTURE_VARS: [&str; 6] = [
    "FIXTURE_OUTPUT_DIR",
    "FIXTURE_CANVAS_SIZE",
    "FIXTURE_STROKE_WIDTH",
    "FIXTURE_NAMING",
    "FIXTURE_SHAPES",
    "FIXTURE_CONCURRENCY",
];

fn run_cli(home: &Path, args: &[&str]) -> Output {
    run_cli_with_env(home, args, &[])
}

fn run_cli_with_env(home: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_generate_test_images"));
    command
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("RUST_LOG");
    for var in FIXTURE_VARS {
        command.env_remove(var);
    }
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().expect("failed to run generate_test_images")
}

#[test]
fn test_no_arguments_writes_to_default_directory() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let unsorted = home.path().join("Documents").join("ImageStore").join("unsorted");
    assert!(stdout.starts_with("Created 8 images in "), "stdout: {}", stdout);
    assert!(stdout.contains("circle_light.png"));
    assert!(stdout.contains("diamond_dark.png"));
    assert!(unsorted.join("circle_light.png").is_file());
    assert!(unsorted.join("triangle_dark.png").is_file());
}

#[test]
fn test_split_naming_and_output_dir_flags() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("fixtures");
    let out_str = out.to_string_lossy().to_string();

    let output = run_cli(home.path(), &["--output-dir", &out_str, "--naming", "split", "--jobs", "4"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("test-img/circle.png"));
    assert!(stdout.contains("test-inverse-img/circle.png"));
    assert!(out.join("test-img").join("square.png").is_file());
    assert!(out.join("test-inverse-img").join("square.png").is_file());
}

#[test]
fn test_json_report() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("json");
    let out_str = out.to_string_lossy().to_string();

    let output = run_cli(
        home.path(),
        &["-o", &out_str, "--shapes", "circle", "--size", "100", "--stroke", "2", "--json"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fixtures = report["fixtures"].as_array().unwrap();
    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures[0]["shape"], "circle");
    assert_eq!(fixtures[0]["variant"], "light");
    assert_eq!(fixtures[1]["file_name"], "circle_dark.png");

    let image = image::open(out.join("circle_light.png")).unwrap();
    assert_eq!((image.width(), image.height()), (100, 100));
}

#[test]
fn test_unknown_shape_fails_without_writing() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("never");
    let out_str = out.to_string_lossy().to_string();

    let output = run_cli(home.path(), &["-o", &out_str, "--shapes", "circle,hexagon"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("hexagon"));
    assert!(!out.exists());
}

#[test]
fn test_unwritable_destination_exits_nonzero() {
    let home = TempDir::new().unwrap();
    let blocker = home.path().join("blocker");
    std::fs::write(&blocker, b"file").unwrap();
    let out_str = blocker.join("fixtures").to_string_lossy().to_string();

    let output = run_cli(home.path(), &["-o", &out_str]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_flags_override_invalid_environment_values() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("override");
    let out_str = out.to_string_lossy().to_string();
    let vars = [("FIXTURE_NAMING", "bogus"), ("FIXTURE_SHAPES", "hexagon")];

    let output = run_cli_with_env(
        home.path(),
        &["-o", &out_str, "--naming", "split", "--shapes", "circle", "--size", "64"],
        &vars,
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(out.join("test-img").join("circle.png").is_file());
    assert!(out.join("test-inverse-img").join("circle.png").is_file());

    let output = run_cli_with_env(home.path(), &["-o", &out_str, "--shapes", "circle"], &vars);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("bogus"));
}
