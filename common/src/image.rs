
use crate::asm::{AddrSpace, Word};
use crate::constants::{RAM_SIZE, WORD_SIZE};
use crate::mem::Ram;

use std::fmt::Write;

use thiserror::Error;

// One word per line as binary digits, CODE first and then DATA. `#` starts a
// comment. Words not given are empty.

const COMMENT: char = '#';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("Line {line}: invalid digit {digit:?}")]
    InvalidDigit { line: usize, digit: char },

    #[error("Line {line}: expected {} bits, found {found}", WORD_SIZE)]
    WrongWidth { line: usize, found: usize },

    #[error("Image holds more than {} words", 2 * RAM_SIZE)]
    TooManyWords,
}

fn parse_word(text: &str, line: usize) -> Result<Word, ImageError> {
    let found = text.chars().count();
    if found != WORD_SIZE {
        return Err(ImageError::WrongWidth{line, found});
    }

    let mut word = Word::EMPTY;
    for (idx, digit) in text.chars().enumerate() {
        let bit = match digit {
            '0' => false,
            '1' => true,
            digit => return Err(ImageError::InvalidDigit{line, digit}),
        };
        word = word.with_bit(idx, bit);
    }
    Ok(word)
}

pub fn parse_image(input: &str) -> Result<Ram, ImageError> {
    let mut words = vec![];
    for (idx, raw) in input.lines().enumerate() {
        let text = raw.split(COMMENT).next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        if words.len() == 2 * RAM_SIZE {
            return Err(ImageError::TooManyWords);
        }
        words.push(parse_word(text, idx + 1)?);
    }

    let mut ram = Ram::new();
    let split = usize::min(words.len(), RAM_SIZE);
    ram.load(AddrSpace::Code, 0, &words[..split]);
    ram.load(AddrSpace::Data, 0, &words[split..]);
    Ok(ram)
}

impl Ram {
    pub fn to_image(&self) -> String {
        let mut out = String::new();
        for space in [AddrSpace::Code, AddrSpace::Data] {
            writeln!(out, "{COMMENT} {space}").unwrap();
            for word in self.bank(space) {
                writeln!(out, "{word}").unwrap();
            }
        }
        out
    }
}
