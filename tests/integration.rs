use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn run_bin(args: &[&str]) -> Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_randstats"));

    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command")
}

fn run_bin_ok(args: &[&str]) -> String {
    let output = run_bin(args);

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );

    stdout_str.to_string()
}

fn test_dir(name: &str) -> PathBuf {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    test_dir
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("failed to convert path to string")
}

fn parse_value(line: &str, label: &str) -> f64 {
    line.strip_prefix(label)
        .unwrap_or_else(|| panic!("line {line:?} does not start with {label:?}"))
        .parse()
        .expect("failed to parse value")
}

#[derive(Debug, Deserialize)]
struct GridSummary {
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

#[test]
fn stats_report_prints_four_lines() {
    let stdout = run_bin_ok(&["--seed", "42", "stats-report"]);
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(lines.len(), 4, "unexpected output:\n{stdout}");
    assert_eq!(lines[0], "Generated 1000 random numbers");

    let mean = parse_value(lines[1], "Mean: ");
    let median = parse_value(lines[2], "Median: ");
    let std_dev = parse_value(lines[3], "Standard Deviation: ");

    assert!((mean - 0.5).abs() < 0.05);
    assert!((median - mean).abs() < 0.05);
    assert!((std_dev - 1.0 / 12.0_f64.sqrt()).abs() < 0.02);
}

#[test]
fn seed_42_report_matches_golden_output() {
    let stdout = run_bin_ok(&["--seed", "42", "stats-report"]);

    assert_eq!(
        stdout,
        "Generated 1000 random numbers\n\
         Mean: 0.5017727299690432\n\
         Median: 0.5069064644941864\n\
         Standard Deviation: 0.28302814748789257\n"
    );
}

#[test]
fn seeded_output_is_reproducible() {
    let stdout_a = run_bin_ok(&["--seed", "42", "stats-report"]);
    let stdout_b = run_bin_ok(&["--seed", "42", "stats-report"]);
    let stdout_c = run_bin_ok(&["--seed", "43", "stats-report"]);

    assert_eq!(stdout_a, stdout_b);
    assert_ne!(stdout_a, stdout_c);
}

#[test]
fn unseeded_run_succeeds() {
    let stdout = run_bin_ok(&["stats-report"]);
    assert!(stdout.starts_with("Generated 1000 random numbers\n"));
}

#[test]
fn array_stats_is_silent_and_saves_summary() {
    let test_dir = test_dir("array_stats");
    let output_path = test_dir.join("summary.msgpack");

    let stdout = run_bin_ok(&[
        "--seed",
        "42",
        "array-stats",
        "--output",
        path_str(&output_path),
    ]);
    assert!(stdout.is_empty());

    let bytes = fs::read(&output_path).expect("failed to read summary file");
    let summary: GridSummary = rmp_serde::from_slice(&bytes).expect("failed to decode summary");

    assert!((summary.mean - 10.0).abs() < 0.05, "{summary:?}");
    assert!((summary.std_dev - 1.0).abs() < 0.05, "{summary:?}");
    assert!(summary.min <= summary.mean && summary.mean <= summary.max);

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn config_file_overrides_defaults() {
    let test_dir = test_dir("config_file");
    let config_path = test_dir.join("config.toml");
    let output_path = test_dir.join("summary.msgpack");

    let config_contents = String::new()
        + "[report]\n"
        + "n_points = 250\n"
        + "\n"
        + "[array]\n"
        + "n_rows = 50\n"
        + "n_cols = 4\n"
        + "mean = -3.0\n"
        + "std_dev = 0.0\n";

    fs::write(&config_path, config_contents).expect("failed to write config file");

    let stdout = run_bin_ok(&["--config", path_str(&config_path), "stats-report"]);
    assert!(stdout.starts_with("Generated 250 random numbers\n"));

    run_bin_ok(&[
        "--config",
        path_str(&config_path),
        "array-stats",
        "--output",
        path_str(&output_path),
    ]);

    let bytes = fs::read(&output_path).expect("failed to read summary file");
    let summary: GridSummary = rmp_serde::from_slice(&bytes).expect("failed to decode summary");

    assert_eq!(summary.mean, -3.0);
    assert_eq!(summary.std_dev, 0.0);
    assert_eq!((summary.min, summary.max), (-3.0, -3.0));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn invalid_config_fails() {
    let test_dir = test_dir("invalid_config");
    let config_path = test_dir.join("config.toml");

    fs::write(&config_path, "[report]\nn_points = 0\n").expect("failed to write config file");

    let output = run_bin(&["--config", path_str(&config_path), "stats-report"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let missing_path = test_dir.join("missing.toml");
    let output = run_bin(&["--config", path_str(&missing_path), "stats-report"]);
    assert_eq!(output.status.code(), Some(1));

    fs::remove_dir_all(&test_dir).ok();
}
