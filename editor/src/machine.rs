
use common::asm::{AddrSpace, Address, Ins, Word};
use common::decoder::decode;
use common::mem::Ram;
use emu_lib::{Emulator, ExecRet, Printer};
use crate::cursor::{Cursor, EditError};

use std::sync::Arc;

use delegate::delegate;


// One complete machine: the engine, the memory it owns, and the editor's
// cursor over that memory. Independent machines share nothing.
pub struct Machine {
    emu: Emulator,
    cursor: Cursor,
}

impl Machine {
    pub fn new() -> Machine {
        Self::with_ram(Ram::new())
    }

    pub fn with_ram(ram: Ram) -> Machine {
        Machine {
            emu: Emulator::with_ram(ram),
            cursor: Cursor::new(),
        }
    }

    delegate! {
        to self.emu {
            pub fn step(&mut self) -> bool;
            pub fn run(&mut self, limit: usize) -> ExecRet;
            pub fn cycle(&self) -> usize;
            pub fn register(&self) -> Word;
            pub fn pc(&self) -> u8;
            pub fn is_halted(&self) -> bool;
            pub fn current_ins(&self) -> Option<Ins>;
            pub fn current_target(&self) -> Option<Address>;
            pub fn set_printer(&mut self, printer: Arc<dyn Printer>);
            pub fn ram(&self) -> &Ram;
            pub fn reset(&mut self);
        }
    }

    pub fn emulator(&self) -> &Emulator {
        &self.emu
    }

    pub fn emulator_mut(&mut self) -> &mut Emulator {
        &mut self.emu
    }

    // A machine that hasn't stepped yet is being edited.
    pub fn is_started(&self) -> bool {
        self.emu.cycle() > 0
    }

    // Started and not yet run off the end of CODE.
    pub fn is_active(&self) -> bool {
        self.is_started() && !self.emu.is_halted()
    }

    pub fn get(&self, space: AddrSpace, addr: u8) -> Word {
        self.emu.ram().get(space, addr)
    }

    pub fn set(&mut self, space: AddrSpace, addr: u8, val: Word) {
        self.emu.ram_mut().set(space, addr, val);
    }

    // The address to highlight: what the current instruction touches while
    // running, or what the code word under the cursor targets otherwise
    // (before the first step and after a halt).
    pub fn pointed_address(&self) -> Option<Address> {
        if self.is_active() {
            return self.emu.current_target();
        }
        if self.cursor.space() == AddrSpace::Data {
            return None;
        }
        decode(self.cursor.get_word(self.emu.ram())).target.address()
    }

    ///////////////////////////////////////////////////////////////////////////
    // Editing
    ///////////////////////////////////////////////////////////////////////////

    // Navigation doesn't touch memory.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub fn get_word(&self) -> Word {
        self.cursor.get_word(self.emu.ram())
    }

    pub fn get_bit(&self) -> bool {
        self.cursor.get_bit(self.emu.ram())
    }

    pub fn set_bit(&mut self, val: bool) {
        self.cursor.set_bit(self.emu.ram_mut(), val);
    }

    pub fn switch_bit(&mut self) {
        self.cursor.switch_bit(self.emu.ram_mut());
    }

    pub fn erase_byte(&mut self) {
        self.cursor.erase_byte(self.emu.ram_mut());
    }

    pub fn move_byte_up(&mut self) {
        self.cursor.move_byte_up(self.emu.ram_mut());
    }

    pub fn move_byte_down(&mut self) {
        self.cursor.move_byte_down(self.emu.ram_mut());
    }

    pub fn go_to_instructions_address(&mut self) {
        self.cursor.go_to_instructions_address(self.emu.ram());
    }

    pub fn try_insert_byte(&mut self) -> Result<(), EditError> {
        self.cursor.try_insert_byte(self.emu.ram_mut())
    }

    pub fn try_delete_byte(&mut self) -> Result<(), EditError> {
        self.cursor.try_delete_byte(self.emu.ram_mut())
    }

    pub fn insert_byte_and_move_rest_down(&mut self) -> bool {
        self.cursor.insert_byte_and_move_rest_down(self.emu.ram_mut())
    }

    pub fn delete_byte_and_move_rest_up(&mut self) -> bool {
        self.cursor.delete_byte_and_move_rest_up(self.emu.ram_mut())
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
