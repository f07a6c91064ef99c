
use common::asm::*;
use common::constants::*;
use common::decoder::decode;
use common::mem::Ram;

use log::debug;
use thiserror::Error;


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub byte: u8,
    pub bit: usize,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("Words can only be inserted or deleted in code")]
    NotCode,

    #[error("Last code word isn't empty")]
    LastWordOccupied,

    #[error("{0} is the target of an instruction")]
    Referenced(Address),
}


////////////////////////////////////////////////////////////////////////////////
// Integrity
////////////////////////////////////////////////////////////////////////////////

fn code_targets(ram: &Ram) -> impl Iterator<Item = u8> + '_ {
    ram.bank(AddrSpace::Code)
        .iter()
        .filter_map(|word| decode(*word).target.code_address())
}

fn check_unreferenced(ram: &Ram, addr: u8) -> Result<(), EditError> {
    if code_targets(ram).any(|target| target == addr) {
        return Err(EditError::Referenced(Address::code(addr)));
    }
    Ok(())
}

// Moves every code target at or past `index` by one. Targets of the last
// address are left alone. Only the operand nibble of a word is rewritten.
fn shift_targets(ram: &mut Ram, index: u8, down: bool) {
    for word in ram.bank_mut(AddrSpace::Code).iter_mut() {
        let Some(target) = decode(*word).target.code_address() else {
            continue;
        };
        if target < index || target == LAST_ADDRESS {
            continue;
        }
        let new = if down { target + 1 } else { target - 1 };
        *word = word.with_second_nibble(new);
    }
}


////////////////////////////////////////////////////////////////////////////////


// Each address space keeps its own position; only the active one moves.
#[derive(Debug, Clone)]
pub struct Cursor {
    space: AddrSpace,
    positions: [Position; NUM_SPACES],
}

impl Cursor {
    const LAST_BIT: usize = WORD_SIZE - 1;

    pub fn new() -> Cursor {
        Cursor {
            space: AddrSpace::Code,
            positions: [Position::default(); NUM_SPACES],
        }
    }

    pub fn space(&self) -> AddrSpace {
        self.space
    }

    pub fn switch_address_space(&mut self) {
        self.space = self.space.other();
    }

    pub fn position(&self) -> Position {
        self.positions[self.space.index()]
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.positions[self.space.index()]
    }

    pub fn x(&self) -> usize {
        self.position().bit
    }

    pub fn y(&self) -> u8 {
        self.position().byte
    }

    pub fn address(&self) -> Address {
        Address::new(self.space, self.y())
    }

    pub fn absolute_bit_index(&self) -> usize {
        (self.y() as usize) * WORD_SIZE + self.x()
    }

    ///////////////////////////////////////////////////////////////////////////
    // Navigation. Moving past an edge does nothing.
    ///////////////////////////////////////////////////////////////////////////

    pub fn increase_x(&mut self) {
        if self.x() < Self::LAST_BIT {
            self.position_mut().bit += 1;
        }
    }

    pub fn decrease_x(&mut self) {
        if self.x() > 0 {
            self.position_mut().bit -= 1;
        }
    }

    pub fn increase_y(&mut self) {
        if self.y() < LAST_ADDRESS {
            self.position_mut().byte += 1;
        }
    }

    pub fn decrease_y(&mut self) {
        if self.y() > 0 {
            self.position_mut().byte -= 1;
        }
    }

    pub fn go_to_address(&mut self, addr: Address) {
        self.space = addr.space;
        *self.position_mut() = Position{byte: addr.val, bit: 0};
    }

    pub fn go_to_end_of_word(&mut self) {
        if self.x() == Self::LAST_BIT {
            self.increase_y();
        }
        self.position_mut().bit = Self::LAST_BIT;
    }

    pub fn go_to_beginning_of_word(&mut self) {
        if self.x() == 0 {
            self.decrease_y();
        }
        self.position_mut().bit = 0;
    }

    pub fn go_to_beginning_of_next_word(&mut self) {
        if self.y() == LAST_ADDRESS {
            self.position_mut().bit = Self::LAST_BIT;
        } else {
            self.increase_y();
            self.position_mut().bit = 0;
        }
    }

    // Follows the code word under the cursor to whatever it targets.
    pub fn go_to_instructions_address(&mut self, ram: &Ram) {
        if self.space == AddrSpace::Data {
            return;
        }
        if let Some(addr) = decode(self.get_word(ram)).target.address() {
            self.go_to_address(addr);
        }
    }

    ///////////////////////////////////////////////////////////////////////////
    // Memory
    ///////////////////////////////////////////////////////////////////////////

    pub fn get_word(&self, ram: &Ram) -> Word {
        ram.get(self.space, self.y())
    }

    pub fn set_word(&self, ram: &mut Ram, word: Word) {
        ram.set(self.space, self.y(), word);
    }

    pub fn get_bit(&self, ram: &Ram) -> bool {
        self.get_word(ram).bit(self.x())
    }

    pub fn set_bit(&self, ram: &mut Ram, val: bool) {
        let word = self.get_word(ram).with_bit(self.x(), val);
        self.set_word(ram, word);
    }

    pub fn switch_bit(&self, ram: &mut Ram) {
        let word = self.get_word(ram).toggled(self.x());
        self.set_word(ram, word);
    }

    pub fn erase_byte(&self, ram: &mut Ram) {
        self.set_word(ram, Word::EMPTY);
    }

    // The cursor follows the moved word.
    pub fn move_byte_up(&mut self, ram: &mut Ram) {
        let addr = self.y();
        if addr == 0 {
            return;
        }
        ram.bank_mut(self.space).swap(addr as usize, addr as usize - 1);
        self.decrease_y();
    }

    pub fn move_byte_down(&mut self, ram: &mut Ram) {
        let addr = self.y();
        if addr == LAST_ADDRESS {
            return;
        }
        ram.bank_mut(self.space).swap(addr as usize, addr as usize + 1);
        self.increase_y();
    }

    ///////////////////////////////////////////////////////////////////////////
    // Structural edits. Checked fully before anything is written.
    ///////////////////////////////////////////////////////////////////////////

    pub fn try_insert_byte(&self, ram: &mut Ram) -> Result<(), EditError> {
        if self.space != AddrSpace::Code {
            return Err(EditError::NotCode);
        }
        if !ram.is_empty(AddrSpace::Code, LAST_ADDRESS) {
            return Err(EditError::LastWordOccupied);
        }
        check_unreferenced(ram, LAST_ADDRESS)?;

        let index = self.y();
        shift_targets(ram, index, true);
        let bank = ram.bank_mut(AddrSpace::Code);
        bank[index as usize..].rotate_right(1);
        bank[index as usize] = Word::EMPTY;
        Ok(())
    }

    pub fn try_delete_byte(&self, ram: &mut Ram) -> Result<(), EditError> {
        if self.space != AddrSpace::Code {
            return Err(EditError::NotCode);
        }
        let index = self.y();
        check_unreferenced(ram, index)?;

        shift_targets(ram, index, false);
        let bank = ram.bank_mut(AddrSpace::Code);
        bank[index as usize..].rotate_left(1);
        bank[LAST_ADDRESS as usize] = Word::EMPTY;
        Ok(())
    }

    // Returns whether the word was inserted.
    pub fn insert_byte_and_move_rest_down(&self, ram: &mut Ram) -> bool {
        match self.try_insert_byte(ram) {
            Ok(()) => true,
            Err(e) => {
                debug!("Insert at {} rejected: {e}", self.address());
                false
            }
        }
    }

    // Returns whether the word was deleted.
    pub fn delete_byte_and_move_rest_up(&self, ram: &mut Ram) -> bool {
        match self.try_delete_byte(ram) {
            Ok(()) => true,
            Err(e) => {
                debug!("Delete at {} rejected: {e}", self.address());
                false
            }
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
