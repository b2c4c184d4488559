//! Drag replay mode

use linechart::readout::MagnifierReadout;
use linechart::{DragSession, Point};

use crate::output::{format_point, print_frame_header, print_frame_row, print_separator};

use super::ChartInput;

/// Feed pointer moves through a drag session, then release it
pub fn run_drag(input: &ChartInput, pointer_xs: &[f64]) {
    let mut session = DragSession::new(input.layout, input.scale);

    if !input.quiet {
        println!(
            "Drag: {} move(s), frame width {:.0} px, locator inset {:.0} px",
            pointer_xs.len(),
            input.frame_width,
            session.locator().inset
        );
        println!();
    }

    println!("[Drag]");
    print_frame_header();
    print_separator(95);

    for &x in pointer_xs {
        let frame = session.pointer_moved(
            Point::new(x, input.layout.plot_height / 2.0),
            input.frame_width,
            &input.collection,
        );
        let readout = MagnifierReadout::new(&frame, &input.specifier, &input.labels);
        print_frame_row("move", Some(x), &frame, &readout);
    }

    let frame = session.pointer_up();
    let readout = MagnifierReadout::new(&frame, &input.specifier, &input.labels);
    print_frame_row("up", None, &frame, &readout);

    println!();
    println!(
        "Final: {} / {} ({}), closest point {}",
        readout.first,
        readout.second,
        readout.date,
        format_point(frame.closest_point)
    );
}
