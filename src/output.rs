use colored::*;
use linechart::chart::series_name;
use linechart::readout::MagnifierReadout;
use linechart::{DragState, MagnifierFrame, Point};

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub(crate) fn format_point(p: Point) -> String {
    format!("({:.1}, {:.1})", p.x, p.y)
}

// Labels are padded before styling so escape codes don't break alignment
fn format_state(state: DragState) -> ColoredString {
    match state {
        DragState::Idle => format!("{:<8}", "idle").as_str().dimmed(),
        DragState::Dragging => format!("{:<8}", "dragging").as_str().green(),
    }
}

pub(crate) fn print_series_header() {
    println!(
        "{:<6}{:>5} {:>9} {:>9}  {:<8} {:<16} {:<16}",
        "", "N", "MIN", "MAX", "GRADIENT", "FIRST", "LAST"
    );
}

pub(crate) fn print_series_row(
    label: &str,
    count: usize,
    min: Option<String>,
    max: Option<String>,
    gradient: &str,
    first: Option<Point>,
    last: Option<Point>,
) {
    let dash = || "-".to_string();
    print!("{}", style_label(&format!("{:<6}", label)));
    println!(
        "{:>5} {:>9} {:>9}  {:<8} {:<16} {:<16}",
        count,
        min.unwrap_or_else(dash),
        max.unwrap_or_else(dash),
        gradient,
        first.map(format_point).unwrap_or_else(dash),
        last.map(format_point).unwrap_or_else(dash),
    );
}

pub(crate) fn print_frame_header() {
    println!(
        "{:<6}{:>8}  {:<9}{:>4}  {:<16} {:<16} {:>3}  {:<8} {}",
        "EVENT", "X", "STATE", "IDX", "INDICATOR", "MAGNIFIER", "OP", "DOTS", "VALUES"
    );
}

pub(crate) fn print_frame_row(
    event: &str,
    pointer_x: Option<f64>,
    frame: &MagnifierFrame,
    readout: &MagnifierReadout,
) {
    let x = pointer_x
        .map(|x| format!("{:.1}", x))
        .unwrap_or_else(|| "-".to_string());
    let index = frame
        .index
        .map(|i| i.to_string())
        .unwrap_or_else(|| "-".to_string());
    let dots: String = frame
        .indicators
        .iter()
        .enumerate()
        .filter(|(_, shown)| **shown)
        .map(|(i, _)| series_name(i))
        .collect();

    print!("{}{:>8}  ", style_label(&format!("{:<6}", event)), x);
    print!("{} ", format_state(frame.state));
    print!(
        "{:>4}  {:<16} {:<16} {:>3}  {:<8} ",
        index,
        format_point(frame.indicator),
        format_point(frame.magnifier_offset),
        frame.opacity,
        if dots.is_empty() { "-" } else { dots.as_str() }
    );
    let values = format!("{} / {}  {}", readout.first, readout.second, readout.date);
    if frame.hit || frame.state == DragState::Idle {
        println!("{}", values);
    } else {
        println!("{} {}", values, "(hold)".yellow());
    }
}
