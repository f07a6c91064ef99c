use common::asm::{AddrSpace, Word};
use common::constants::RAM_SIZE;
use common::mem::Ram;

use log::trace;

// This is separate so the editor can borrow the memory without the engine.
pub struct EmulatorState {
    cycle: usize,
    ram: Ram,
    reg: Word,
    // Runs off the end (== RAM_SIZE) to halt.
    pc: u8,
}

impl EmulatorState {
    pub fn new() -> Self {
        Self::with_ram(Ram::new())
    }

    pub fn with_ram(ram: Ram) -> Self {
        EmulatorState {
            cycle: 0,
            ram,
            reg: Word::EMPTY,
            pc: 0,
        }
    }

    pub fn inc_cycle(&mut self) {
        self.cycle += 1;
    }

    pub fn cycle(&self) -> usize {
        self.cycle
    }

    pub fn mem_read(&self, space: AddrSpace, addr: u8) -> Word {
        self.ram.get(space, addr)
    }

    pub fn mem_write(&mut self, space: AddrSpace, addr: u8, val: Word) {
        trace!("Mem: writing {val} to {space}:{addr}");
        self.ram.set(space, addr, val);
    }

    pub fn reg_read(&self) -> Word {
        self.reg
    }

    pub fn reg_write(&mut self, val: Word) {
        trace!("Reg: writing {val}");
        self.reg = val;
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u8) {
        assert!((pc as usize) <= RAM_SIZE, "PC {pc} out of range");
        trace!("PC: {} -> {pc}", self.pc);
        self.pc = pc;
    }

    pub fn advance_pc(&mut self) {
        self.set_pc(self.pc + 1);
    }

    pub fn is_halted(&self) -> bool {
        (self.pc as usize) >= RAM_SIZE
    }

    // None once the PC has run off the end of CODE.
    pub fn next_ins(&self) -> Option<Word> {
        if self.is_halted() {
            return None;
        }
        Some(self.ram.get(AddrSpace::Code, self.pc))
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    pub fn ram_mut(&mut self) -> &mut Ram {
        &mut self.ram
    }

    // Back to power-on, memory kept.
    pub fn reset(&mut self) {
        self.cycle = 0;
        self.reg = Word::EMPTY;
        self.pc = 0;
    }
}

impl Default for EmulatorState {
    fn default() -> Self {
        Self::new()
    }
}
