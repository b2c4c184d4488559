//! Common test utilities

use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the linechart binary
pub fn linechart_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("linechart");
    path
}

/// Run linechart with the given arguments (colors always off)
pub fn run_linechart(args: &[&str]) -> Output {
    Command::new(linechart_bin())
        .arg("--no-color")
        .args(args)
        .output()
        .expect("failed to execute linechart")
}

/// Join values into a series argument ("1,2,3")
pub fn series_arg(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// The `Final: ...` line printed after a drag replay
pub fn final_line(stdout: &str) -> &str {
    stdout
        .lines()
        .find(|l| l.starts_with("Final:"))
        .expect("no Final line in output")
}
