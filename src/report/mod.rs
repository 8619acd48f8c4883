//! Console rendering of run results and their analysis.

pub mod terminal;

pub use terminal::render_terminal_report;
