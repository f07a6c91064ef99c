
use common::asm::{AddrSpace, Word};
use common::decoder::decode;
use common::mem::Ram;

use std::fmt;

pub struct Disassembled {
    pub addr: u8,
    pub repr: Word,
    pub interp: Option<String>,
}

impl fmt::Display for Disassembled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:2}:\t{}", self.addr, self.repr)?;
        if let Some(interp) = &self.interp {
            write!(f, "\t{interp}")?;
        }
        Ok(())
    }
}

// Empty words are left uninterpreted: they read as `read [0]`, but are
// almost always just unused.
pub fn disassemble(ram: &Ram) -> Vec<Disassembled> {
    ram.bank(AddrSpace::Code)
        .iter()
        .enumerate()
        .map(|(addr, word)| Disassembled{
            addr: addr as u8,
            repr: *word,
            interp: (!word.is_empty()).then(|| decode(*word).to_string()),
        })
        .collect()
}


// A listing row: one word, or a run of empty words left out.
pub enum Line {
    Word(Disassembled),
    Elided(usize),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Line::Word(dis) => fmt::Display::fmt(dis, f),
            Line::Elided(_) => write!(f, "..."),
        }
    }
}

// Empty runs longer than this keep only their ends.
pub const MAX_EMPTY_RUN: usize = 3;

pub fn listing(disassembly: Vec<Disassembled>) -> Vec<Line> {
    let mut lines = Vec::with_capacity(disassembly.len());
    let mut rest = disassembly.into_iter().peekable();
    while let Some(first) = rest.next() {
        let empty = first.repr.is_empty();
        let mut run = vec![first];
        while let Some(dis) = rest.next_if(|d| d.repr.is_empty() == empty) {
            run.push(dis);
        }

        if !empty || run.len() <= MAX_EMPTY_RUN {
            lines.extend(run.into_iter().map(Line::Word));
            continue;
        }
        let elided = run.len() - 2;
        let last = run.pop();
        let mut run = run.into_iter();
        lines.extend(run.next().map(Line::Word));
        lines.push(Line::Elided(elided));
        lines.extend(last.map(Line::Word));
    }
    lines
}
