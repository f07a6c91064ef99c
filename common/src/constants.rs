
pub const WORD_SIZE: usize = 8; // Bits
pub const NIBBLE_SIZE: usize = WORD_SIZE / 2;
pub const ADDR_SIZE: usize = NIBBLE_SIZE;

pub const RAM_SIZE: usize = 1 << ADDR_SIZE; // Words per bank
pub const WORD_MAX: u8 = u8::MAX;

// Fixed second operand of the and/or/equals logic ops.
pub const FIRST_ADDRESS: u8 = 0;
// Print sink in DATA.
pub const LAST_ADDRESS: u8 = (RAM_SIZE - 1) as u8;
