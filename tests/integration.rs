//! Integration tests for linechart CLI

mod common;

use common::{final_line, run_linechart, series_arg};
use tempfile::TempDir;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// Basic functionality tests
// =============================================================================

#[test]
fn test_help_flag() {
    let output = run_linechart(&["--help"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Line chart interaction core"));
    assert!(stdout.contains("--drag"));
    assert!(stdout.contains("--specifier"));
    assert!(stdout.contains("--image"));
}

#[test]
fn test_version_flag() {
    let output = run_linechart(&["--version"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("linechart"));
}

#[test]
fn test_missing_series_fails() {
    let output = run_linechart(&[]);
    assert!(!output.status.success());
}

// =============================================================================
// Summary mode
// =============================================================================

#[test]
fn test_summary_two_series() {
    let output = run_linechart(&["1,2,3", "4,5,6"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Series: 2"));
    assert!(stdout.contains("Merged range: 1 .. 6"));
    assert!(stdout.contains("[Series]"));
    assert!(stdout.contains("[A]"));
    assert!(stdout.contains("[B]"));
    assert!(stdout.contains("blue"));
    assert!(stdout.contains("purple"));
}

#[test]
fn test_summary_reports_line_frame_offset() {
    let output = run_linechart(&["--width", "136", "1,5,3"]);
    assert!(output.status.success());
    assert!(
        stdout_of(&output).contains("Plot: 100 x 240 px, line frame offset (28.0, -20.0)")
    );
}

#[test]
fn test_summary_quiet_hides_explanations() {
    let output = run_linechart(&["-q", "8,23,54,32,12,37,7,23,43"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("[Series]"));
    assert!(!stdout.contains("Merged range"));
}

#[test]
fn test_summary_endpoints_span_line_width() {
    // Frame 136 px wide draws lines 100 px wide
    let output = run_linechart(&["-q", "--width", "136", "--height", "40", "1,5,3"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("(0.0, 40.0)"), "first point: {}", stdout);
    assert!(stdout.contains("(100.0, 20.0)"), "last point: {}", stdout);
}

#[test]
fn test_summary_all_empty_series_warns() {
    let output = run_linechart(&["-q", ""]);
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("warning"));
}

#[test]
fn test_too_many_series() {
    let output = run_linechart(&["1", "2", "3", "4", "5"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Too many series"));
}

#[test]
fn test_invalid_value() {
    let output = run_linechart(&["1,x,3"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("invalid value: 'x'"));
}

#[test]
fn test_non_positive_width() {
    let output = run_linechart(&["--width", "0", "1,2,3"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Width must be positive"));
}

// =============================================================================
// Drag mode
// =============================================================================

fn ramp() -> (String, String) {
    (
        series_arg(&[1.0, 2.0, 3.0, 4.0, 5.0]),
        series_arg(&[10.0, 20.0, 30.0, 40.0, 50.0]),
    )
}

#[test]
fn test_drag_reports_values_under_pointer() {
    let (a, b) = ramp();
    // (40 - 15) / 10 -> index 2
    let output = run_linechart(&[
        "-q",
        "--width",
        "40",
        "-d",
        "40",
        a.as_str(),
        b.as_str(),
    ]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("[Drag]"));
    assert!(stdout.contains("dragging"));
    assert!(stdout.contains("idle"));
    assert_eq!(
        final_line(&stdout),
        "Final: 3 / 30 (Date), closest point (20.0, 120.0)"
    );
}

#[test]
fn test_drag_outside_plot_holds_values() {
    let (a, b) = ramp();
    let output = run_linechart(&[
        "-q",
        "--width",
        "40",
        "-d",
        "40",
        "-d",
        "1000",
        a.as_str(),
        b.as_str(),
    ]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("(hold)"));
    assert!(final_line(&stdout).starts_with("Final: 3 / 30 (Date)"));
}

#[test]
fn test_drag_negative_pointer_before_any_hit() {
    let (a, b) = ramp();
    let output = run_linechart(&[
        "-q",
        "--width",
        "40",
        "-d",
        "-100",
        a.as_str(),
        b.as_str(),
    ]);
    assert!(output.status.success());
    assert!(final_line(&stdout_of(&output)).starts_with("Final: 0 / 0"));
}

#[test]
fn test_drag_shows_label_at_index() {
    let output = run_linechart(&[
        "-q",
        "--width",
        "40",
        "--labels",
        "Mon,Tue,Wed",
        "-d",
        "20",
        "1,2,3",
    ]);
    assert!(output.status.success());
    assert!(final_line(&stdout_of(&output)).starts_with("Final: 1 / 1 (Mon)"));
}

#[test]
fn test_drag_custom_specifier() {
    let (a, b) = ramp();
    let output = run_linechart(&[
        "-q",
        "--width",
        "40",
        "--specifier",
        "%.2f",
        "-d",
        "40",
        a.as_str(),
        b.as_str(),
    ]);
    assert!(output.status.success());
    assert!(final_line(&stdout_of(&output)).starts_with("Final: 3.00 / 30.00"));
}

#[test]
fn test_drag_oversized_specifier_is_rejected() {
    let output = run_linechart(&["--specifier", "%.70000f", "-d", "20", "1,2,3"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("field too wide"));
}

#[test]
fn test_drag_indicator_dots_on_leading_series() {
    let output = run_linechart(&[
        "-q", "--width", "40", "-d", "20", "1,2,3", "4,5,6", "7,8,9",
    ]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    let move_row = stdout.lines().find(|l| l.starts_with("move")).unwrap();
    assert!(move_row.contains("[A][B]"), "move row: {}", move_row);
    assert!(!move_row.contains("[C]"), "move row: {}", move_row);

    let up_row = stdout.lines().find(|l| l.starts_with("up")).unwrap();
    assert!(!up_row.contains("[A]"), "up row: {}", up_row);
}

#[test]
fn test_drag_corrected_scale_moves_indicator_onto_line() {
    let (a, b) = ramp();
    // (55 - 15) / 10 -> index 4, value 5
    let default = run_linechart(&[
        "-q",
        "--width",
        "40",
        "-d",
        "55",
        a.as_str(),
        b.as_str(),
    ]);
    let corrected = run_linechart(&[
        "-q",
        "--width",
        "40",
        "--corrected-scale",
        "-d",
        "55",
        a.as_str(),
        b.as_str(),
    ]);

    assert!(final_line(&stdout_of(&default)).ends_with("closest point (40.0, 200.0)"));
    assert!(final_line(&stdout_of(&corrected)).ends_with("closest point (40.0, 0.0)"));
}

#[test]
fn test_drag_empty_first_series_falls_back() {
    let output = run_linechart(&["-q", "--width", "40", "-d", "35", "", "7,8,9"]);
    assert!(output.status.success());
    assert!(final_line(&stdout_of(&output)).starts_with("Final: 8 / 8"));
}

#[test]
fn test_drag_single_point_series() {
    let output = run_linechart(&["-q", "-d", "500", "5", "6"]);
    assert!(output.status.success());
    assert!(final_line(&stdout_of(&output)).starts_with("Final: 5 / 6"));
}

// =============================================================================
// Image output
// =============================================================================

#[test]
fn test_svg_image() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("chart.svg");

    let output = run_linechart(&[
        "-q",
        "--title",
        "Full chart",
        "1,2,3",
        "4,5,6",
        "--image",
        image_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let svg = std::fs::read_to_string(&image_path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(stderr_of(&output).contains("Chart saved to"));
}

#[test]
fn test_png_image() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("chart.png");

    let output = run_linechart(&[
        "-q",
        "8,23,54,32,12,37,7,23,43",
        "--image",
        image_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(image_path.exists(), "Image file should be created");
    assert!(
        std::fs::metadata(&image_path).unwrap().len() > 0,
        "Image file should not be empty"
    );
}

#[test]
fn test_image_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("missing").join("chart.svg");

    let output = run_linechart(&["1,2,3", "--image", image_path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Directory does not exist"));
}
