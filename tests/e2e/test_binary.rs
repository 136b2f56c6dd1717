//! Integration tests for the mic-chart binary.
//!
//! These tests run the compiled binary on the demo table and check the
//! structure of the generated HTML/SVG documents.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled binary (built by `cargo test`).
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mic-chart"))
}

/// Get the demos directory.
fn demos_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path
}

fn demo_csv() -> String {
    let path = demos_dir().join("data.csv");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Cannot read {:?}: {}", path, e))
}

/// Run the binary with the given stdin input and extra CLI args.
fn run(input: &str, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run and require success. Returns stdout.
fn run_binary(input: &str, extra_args: &[&str]) -> String {
    let output = run(input, extra_args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

// ─── Output documents ───────────────────────────────────────────────────────

#[test]
fn test_html_has_one_panel_per_bacterium() {
    let html = run_binary(&demo_csv(), &[]);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<div id="attempt1">"#));
    assert_eq!(html.matches(r#"<svg class="viz-entry""#).count(), 16);
    assert!(html.contains(">Salmonella (Eberthella) typhosa</text>"));
    assert!(!html.contains("<table>"));
}

#[test]
fn test_panels_follow_table_order() {
    let html = run_binary(&demo_csv(), &[]);
    let first = html.find(">Aerobacter aerogenes</text>").unwrap();
    let last = html.find(">Streptococcus viridans</text>").unwrap();
    assert!(first < last);
}

#[test]
fn test_input_file_argument() {
    let path = demos_dir().join("data.csv");
    let html = run_binary("", &[path.to_str().unwrap()]);
    assert_eq!(html.matches(r#"class="viz-entry""#).count(), 16);
}

#[test]
fn test_svg_format() {
    let svg = run_binary(&demo_csv(), &["--format", "svg"]);
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" id="attempt1" width="400" height="1920""#));
    assert_eq!(svg.matches(r#"class="viz-entry""#).count(), 16);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_table_flag() {
    let html = run_binary(&demo_csv(), &["--table"]);
    assert!(html.contains(r#"<div id="table">"#));
    assert_eq!(html.matches("<tr>").count(), 16);
}

#[test]
fn test_container_flag() {
    let html = run_binary(&demo_csv(), &["--container", "charts"]);
    assert!(html.contains(r#"<div id="charts">"#));
    assert!(!html.contains(r#"<div id="attempt1">"#));
}

#[test]
fn test_layout_file() {
    let layout = demos_dir().join("layout.json");
    let html = run_binary(&demo_csv(), &["--layout", layout.to_str().unwrap()]);
    assert!(html.contains(r#"<svg class="viz-entry" width="520" height="120">"#));
    assert!(html.contains(">MIC (µg/mL)</text>"));
}

#[test]
fn test_output_file() {
    let out = std::env::temp_dir().join(format!("mic-chart-e2e-{}.html", std::process::id()));
    let stdout = run_binary(&demo_csv(), &["-o", out.to_str().unwrap()]);
    assert!(stdout.is_empty());
    let written = fs::read_to_string(&out).unwrap();
    fs::remove_file(&out).ok();
    assert_eq!(written.matches(r#"class="viz-entry""#).count(), 16);
}

// ─── Edge cases ─────────────────────────────────────────────────────────────

#[test]
fn test_non_numeric_cell_keeps_rendering() {
    let src = "Bacteria ,Penicilin,Streptomycin ,Neomycin,Gram Staining \n\
               B1,n/a,10,100,positive\n\
               B2,1,10,100,negative\n";
    let html = run_binary(src, &[]);
    assert_eq!(html.matches(r#"class="viz-entry""#).count(), 2);
    assert!(!html.contains("NaN"));
}

#[test]
fn test_reject_invalid_drops_panel() {
    let src = "Bacteria ,Penicilin,Streptomycin ,Neomycin,Gram Staining \n\
               B1,0,10,100,positive\n\
               B2,1,10,100,negative\n";
    let html = run_binary(src, &["--reject-invalid"]);
    assert_eq!(html.matches(r#"class="viz-entry""#).count(), 1);
    assert!(html.contains(">B2</text>"));
}

#[test]
fn test_missing_column_fails() {
    let output = run("Bacteria ,Penicilin\nB1,1\n", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: missing required column"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_file_fails() {
    let output = run("", &["/nonexistent/mic-chart/data.csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn test_version_flag() {
    let out = run_binary("", &["--version"]);
    assert!(out.starts_with("mic-chart "));
}
