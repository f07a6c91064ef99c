
use std::io::{stdout, Write};
use std::sync::Mutex;

use common::asm::Word;

use log::error;

// Receives every word the running program writes to the print sink.
pub trait Printer: Send + Sync {
    fn write(&self, val: Word);
}

// One line per printed word: bits, then the unsigned value.
pub fn format_printed(val: Word) -> String {
    format!("{val} {:3}", val.val())
}

#[derive(Default, Clone, Copy)]
pub struct StdoutPrinter();

impl Printer for StdoutPrinter {
    fn write(&self, val: Word) {
        let mut out = stdout().lock();
        if let Err(e) = writeln!(out, "{}", format_printed(val)).and_then(|_| out.flush()) {
            error!("Failed to print {val}: {e}");
        }
    }
}


// Keeps everything printed, in order, for inspection after a run.
#[derive(Default)]
pub struct RecordingPrinter {
    history: Mutex<Vec<Word>>,
}

impl Printer for RecordingPrinter {
    fn write(&self, val: Word) {
        self.history.lock().unwrap().push(val);
    }
}

impl RecordingPrinter {
    pub fn words(&self) -> Vec<Word> {
        self.history.lock().unwrap().clone()
    }

    pub fn values(&self) -> Vec<u8> {
        self.history.lock().unwrap().iter().map(|w| w.val()).collect()
    }

    pub fn last(&self) -> Option<Word> {
        self.history.lock().unwrap().last().copied()
    }

    pub fn len(&self) -> usize {
        self.history.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The history as it would have appeared on stdout.
    pub fn lines(&self) -> Vec<String> {
        self.history.lock().unwrap().iter().copied().map(format_printed).collect()
    }

    pub fn clear(&self) {
        self.history.lock().unwrap().clear();
    }
}
