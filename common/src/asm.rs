
use crate::constants::*;

use std::fmt;

use derive_more::{IsVariant, Unwrap};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;


// Bit 0 is the most significant bit, matching the order a word is shown and
// edited in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Word(u8);

impl Word {
    pub const EMPTY: Word = Word(0);
    pub const MAX: Word = Word(WORD_MAX);

    pub const NIBBLE_MASK: u8 = (1u8 << NIBBLE_SIZE) - 1;

    pub const fn new(val: u8) -> Word {
        Word(val)
    }

    pub fn from_nibbles(upper: u8, lower: u8) -> Word {
        assert!(upper <= Self::NIBBLE_MASK && lower <= Self::NIBBLE_MASK);
        Word((upper << NIBBLE_SIZE) | lower)
    }

    pub fn val(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    pub fn first_nibble(self) -> u8 {
        self.0 >> NIBBLE_SIZE
    }

    pub fn second_nibble(self) -> u8 {
        self.0 & Self::NIBBLE_MASK
    }

    // Only the lower four bits change.
    pub fn with_second_nibble(self, val: u8) -> Word {
        assert!(val <= Self::NIBBLE_MASK);
        Word((self.0 & !Self::NIBBLE_MASK) | val)
    }

    fn bit_mask(idx: usize) -> u8 {
        assert!(idx < WORD_SIZE, "Bit index {idx} out of range");
        1u8 << (WORD_SIZE - 1 - idx)
    }

    pub fn bit(self, idx: usize) -> bool {
        self.0 & Self::bit_mask(idx) != 0
    }

    pub fn with_bit(self, idx: usize, val: bool) -> Word {
        let mask = Self::bit_mask(idx);
        if val {
            Word(self.0 | mask)
        } else {
            Word(self.0 & !mask)
        }
    }

    pub fn toggled(self, idx: usize) -> Word {
        Word(self.0 ^ Self::bit_mask(idx))
    }

    pub fn bits(self) -> [bool; WORD_SIZE] {
        std::array::from_fn(|i| self.bit(i))
    }
}

impl From<u8> for Word {
    fn from(val: u8) -> Word {
        Word(val)
    }
}

impl From<Word> for u8 {
    fn from(word: Word) -> u8 {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0width$b}", self.0, width = WORD_SIZE)
    }
}

impl fmt::Binary for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}


////////////////////////////////////////////////////////////////////////////////


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrSpace {
    Code = 0,
    Data,
}

pub const NUM_SPACES: usize = 2;

impl AddrSpace {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn other(self) -> AddrSpace {
        match self {
            AddrSpace::Code => AddrSpace::Data,
            AddrSpace::Data => AddrSpace::Code,
        }
    }
}

impl fmt::Display for AddrSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub space: AddrSpace,
    pub val: u8,
}

impl Address {
    pub fn new(space: AddrSpace, val: u8) -> Address {
        assert!((val as usize) < RAM_SIZE, "Address {val} out of range");
        Address{space, val}
    }

    pub fn code(val: u8) -> Address {
        Self::new(AddrSpace::Code, val)
    }

    pub fn data(val: u8) -> Address {
        Self::new(AddrSpace::Data, val)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.space, self.val)
    }
}


////////////////////////////////////////////////////////////////////////////////


#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum Opcode {
    Read = 0,
    Write,
    Add,
    Sub,
    Jump,
    IfMax,
    IfMin,
    Logic,
    ReadPtr,
    WritePtr,
    IncDec,
    Print,
    // 12 unassigned
    IfNotMax = 13,
    IfNotMin,
    // 15 unassigned
}

impl Opcode {
    pub const NUM_BITS: usize = NIBBLE_SIZE;

    pub fn is_assigned(raw: u8) -> bool {
        Opcode::from_u8(raw).is_some()
    }

    // Unassigned codes execute as a read.
    pub fn decode(raw: u8) -> Opcode {
        Opcode::from_u8(raw).unwrap_or(Opcode::Read)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}


// Sub-operations of Opcode::Logic, selected by the operand.
#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum LogicOp {
    Shl = 0,
    Shr,
    And,
    Or,
    Not,
    Eq,
    JumpReg,
    ReadReg,
}

impl LogicOp {
    pub fn decode(operand: u8) -> Option<LogicOp> {
        LogicOp::from_u8(operand)
    }
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}


////////////////////////////////////////////////////////////////////////////////


#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant, Unwrap)]
pub enum Target {
    None,
    Code(u8),
    Data(u8),
    // Top operand bit forced to 0: low half of DATA only.
    DataReduced(u8),
}

impl Target {
    pub fn address(&self) -> Option<Address> {
        match *self {
            Target::None => None,
            Target::Code(val) => Some(Address::code(val)),
            Target::Data(val) | Target::DataReduced(val) => Some(Address::data(val)),
        }
    }

    pub fn code_address(&self) -> Option<u8> {
        match *self {
            Target::Code(val) => Some(val),
            _ => None,
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ins {
    pub word: Word,
    pub op: Opcode,
    pub operand: u8,
    pub target: Target,
}

impl Ins {
    pub const REDUCED_ADDR_MASK: u8 = 0b0111;
    pub const DECREMENT_MASK: u8 = 0b1000;

    pub fn encode(op: Opcode, operand: u8) -> Word {
        Word::from_nibbles(op as u8, operand)
    }

    // The raw first nibble; differs from `op` for the unassigned codes.
    pub fn opcode(&self) -> u8 {
        self.word.first_nibble()
    }

    pub fn is_assigned(&self) -> bool {
        Opcode::is_assigned(self.opcode())
    }

    pub fn logic_op(&self) -> Option<LogicOp> {
        if self.op != Opcode::Logic {
            return None;
        }
        LogicOp::decode(self.operand)
    }

    pub fn is_decrement(&self) -> bool {
        self.operand & Self::DECREMENT_MASK != 0
    }

    pub fn reduced_addr(&self) -> u8 {
        self.operand & Self::REDUCED_ADDR_MASK
    }
}

impl fmt::Display for Ins {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Opcode::*;
        if !self.is_assigned() {
            return write!(f, "read\t[{}]", self.operand);
        }
        match self.op {
            Logic => match self.logic_op() {
                Some(op) => write!(f, "logic\t{op}"),
                None => write!(f, "logic\t?{}", self.operand),
            },
            ReadPtr | WritePtr => write!(f, "{}\t[[{}]]", self.op, self.operand),
            IncDec => {
                let op = if self.is_decrement() { "dec" } else { "inc" };
                write!(f, "{op}\t[{}]", self.reduced_addr())
            },
            _ => match self.target {
                Target::Code(addr) => write!(f, "{}\t{addr}", self.op),
                Target::Data(addr) | Target::DataReduced(addr) => write!(f, "{}\t[{addr}]", self.op),
                Target::None => write!(f, "{}", self.op),
            },
        }
    }
}
