
pub mod printer;

pub use printer::{format_printed, Printer, RecordingPrinter, StdoutPrinter};
