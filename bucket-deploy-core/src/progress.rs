//! Textual progress bar for the upload and prune phases.
//!
//! Rendering is a pure function of a fraction; [`ProgressReporter`] only erases the
//! current line and redraws it, keeping no state between calls.

use std::io::{self, Write};

/// Number of positions in every bar the reporter draws.
pub const BAR_WIDTH: usize = 30;

const FILLED: char = '=';
const EMPTY: char = '-';

/// Erase the whole line, then return the cursor to column 0.
const CLEAR_LINE: &str = "\x1b[2K\r";

/// Renders `[====------]`: position `i` is filled when `i / width <= fraction`.
pub fn render_bar(fraction: f64, width: usize) -> String {
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        let filled = (i as f64) / (width as f64) <= fraction;
        bar.push(if filled { FILLED } else { EMPTY });
    }
    bar.push(']');
    bar
}

/// Percentage label, rounded up to the nearest integer.
pub fn percent_label(fraction: f64) -> u32 {
    (fraction * 100.0).ceil() as u32
}

/// `index / (count - 1)`, reaching exactly 1.0 on the last step.
///
/// A single step has no interval to divide, so it counts as complete.
pub fn inclusive_fraction(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 1.0;
    }
    index as f64 / (count - 1) as f64
}

/// Redraws a labelled bar on the current line of `out`.
pub struct ProgressReporter<W: Write> {
    out: W,
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(out: W) -> Self {
        ProgressReporter { out }
    }

    /// Erase the line and draw `<label> [bar] <pct>%`.
    pub fn redraw(&mut self, label: &str, fraction: f64) -> io::Result<()> {
        write!(
            self.out,
            "{CLEAR_LINE}{label} {} {}%",
            render_bar(fraction, BAR_WIDTH),
            percent_label(fraction)
        )?;
        self.out.flush()
    }

    /// Plain text passthrough for the messages around the bars.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
