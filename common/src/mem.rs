
use crate::asm::{AddrSpace, Address, NUM_SPACES, Word};
use crate::constants::RAM_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    banks: [[Word; RAM_SIZE]; NUM_SPACES],
}

impl Ram {
    pub fn new() -> Ram {
        Ram {
            banks: [[Word::EMPTY; RAM_SIZE]; NUM_SPACES],
        }
    }

    // Addresses come out of four bit fields, so they can't overflow a bank.
    fn index(addr: u8) -> usize {
        debug_assert!((addr as usize) < RAM_SIZE, "Address {addr} out of range");
        (addr as usize) & (RAM_SIZE - 1)
    }

    pub fn get(&self, space: AddrSpace, addr: u8) -> Word {
        self.banks[space.index()][Self::index(addr)]
    }

    pub fn set(&mut self, space: AddrSpace, addr: u8, val: Word) {
        self.banks[space.index()][Self::index(addr)] = val;
    }

    pub fn read(&self, addr: Address) -> Word {
        self.get(addr.space, addr.val)
    }

    pub fn write(&mut self, addr: Address, val: Word) {
        self.set(addr.space, addr.val, val);
    }

    pub fn is_empty(&self, space: AddrSpace, addr: u8) -> bool {
        self.get(space, addr).is_empty()
    }

    pub fn bank(&self, space: AddrSpace) -> &[Word; RAM_SIZE] {
        &self.banks[space.index()]
    }

    pub fn bank_mut(&mut self, space: AddrSpace) -> &mut [Word; RAM_SIZE] {
        &mut self.banks[space.index()]
    }

    pub fn load(&mut self, space: AddrSpace, start: u8, words: &[Word]) {
        let start = start as usize;
        assert!(start + words.len() <= RAM_SIZE, "Image doesn't fit in {space}");
        self.bank_mut(space)[start..start + words.len()].copy_from_slice(words);
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}
