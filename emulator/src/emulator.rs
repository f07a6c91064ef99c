
use common::asm::*;
use common::constants::*;
use common::decoder::{decode, resolve};
use common::mem::Ram;
use crate::EmulatorState;
use crate::io::Printer;

use std::sync::Arc;

use delegate::delegate;
use log::{debug, error};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecRet {
    Ok,
    Halt,
}


pub struct Emulator {
    state: EmulatorState,
    printer: Option<Arc<dyn Printer>>,
}

impl Emulator {
    pub fn new() -> Emulator {
        Self::with_ram(Ram::new())
    }

    pub fn with_ram(ram: Ram) -> Emulator {
        Emulator {
            state: EmulatorState::with_ram(ram),
            printer: None,
        }
    }

    pub fn set_printer(&mut self, printer: Arc<dyn Printer>) {
        self.printer = Some(printer);
    }

    delegate! {
        to self.state {
            pub fn cycle(&self) -> usize;
            pub fn pc(&self) -> u8;
            pub fn is_halted(&self) -> bool;
            pub fn ram(&self) -> &Ram;
            pub fn ram_mut(&mut self) -> &mut Ram;
            pub fn reset(&mut self);
            #[call(reg_read)]
            pub fn register(&self) -> Word;
        }
    }

    // Run until a halt or until `limit` cycles have been spent.
    pub fn run(&mut self, limit: usize) -> ExecRet {
        for _ in 0..limit {
            if self.run_ins() == ExecRet::Halt {
                return ExecRet::Halt;
            }
        }
        ExecRet::Ok
    }

    // Returns false once the PC has run off the end of CODE.
    pub fn step(&mut self) -> bool {
        self.run_ins() != ExecRet::Halt
    }

    pub fn run_ins(&mut self) -> ExecRet {
        // Counted even when halted.
        self.state.inc_cycle();

        let Some(word) = self.state.next_ins() else {
            return ExecRet::Halt;
        };
        let ins = decode(word);
        debug!("PC: {}: {}", self.state.pc(), ins);
        self.state.advance_pc();

        self.exec(&ins);
        ExecRet::Ok
    }

    // The instruction at the PC, if not halted.
    pub fn current_ins(&self) -> Option<Ins> {
        self.state.next_ins().map(decode)
    }

    // Where the current instruction will read, write or jump to.
    pub fn current_target(&self) -> Option<Address> {
        let ins = self.current_ins()?;
        resolve(&ins, self.state.reg_read(), self.state.ram())
    }

    pub fn load_image(&mut self, space: AddrSpace, data: &[Word], start: u8) {
        self.state.ram_mut().load(space, start, data);
    }

    pub fn get_state(&self) -> &EmulatorState {
        &self.state
    }

    pub fn get_state_mut(&mut self) -> &mut EmulatorState {
        &mut self.state
    }

    fn data_read(&self, addr: u8) -> Word {
        self.state.mem_read(AddrSpace::Data, addr)
    }

    // Writes to the last address also go to the printer.
    fn data_write(&mut self, addr: u8, val: Word) {
        self.state.mem_write(AddrSpace::Data, addr, val);
        if addr == LAST_ADDRESS {
            if let Some(printer) = &self.printer {
                printer.write(val);
            }
        }
    }


    ///////////////////////////////////////////////////////////////////////////
    // Execute
    ///////////////////////////////////////////////////////////////////////////

    // Unassigned opcodes have no decoded target but still read their operand.
    fn data_addr(ins: &Ins) -> u8 {
        match ins.target {
            Target::Data(addr) | Target::DataReduced(addr) => addr,
            _ => ins.operand,
        }
    }

    fn branch_if(&mut self, taken: bool, target: u8) {
        if taken {
            self.state.set_pc(target);
        }
    }

    fn do_add_sub(&mut self, addr: u8, op: fn(u8, u8) -> u8) {
        let reg = self.state.reg_read().val();
        let val = self.data_read(addr).val();
        self.state.reg_write(Word::new(op(reg, val)));
    }

    fn do_inc_dec(&mut self, ins: &Ins) {
        let addr = ins.reduced_addr();
        let val = self.data_read(addr).val();
        let res = if ins.is_decrement() {
            val.wrapping_sub(1)
        } else {
            val.wrapping_add(1)
        };
        self.data_write(addr, Word::new(res));
        self.state.reg_write(Word::new(res));
    }

    fn deref(&self, addr: u8) -> u8 {
        self.data_read(addr).second_nibble()
    }

    fn exec_logic_ins(&mut self, ins: &Ins) {
        let Some(op) = ins.logic_op() else {
            error!("Invalid logic operand {} in {}, skipping", ins.operand, ins.word);
            return;
        };

        let reg = self.state.reg_read();
        let res = match op {
            LogicOp::Shl => reg.val() << 1,
            LogicOp::Shr => reg.val() >> 1,
            LogicOp::And => reg.val() & self.data_read(FIRST_ADDRESS).val(),
            LogicOp::Or => reg.val() | self.data_read(FIRST_ADDRESS).val(),
            LogicOp::Not => !reg.val(),
            LogicOp::Eq => {
                if reg == self.data_read(FIRST_ADDRESS) { WORD_MAX } else { 0 }
            },
            LogicOp::JumpReg => {
                self.state.set_pc(reg.second_nibble());
                return;
            },
            LogicOp::ReadReg => self.data_read(reg.second_nibble()).val(),
        };
        self.state.reg_write(Word::new(res));
    }

    // The PC has already been advanced.
    fn exec(&mut self, ins: &Ins) {
        use Opcode::*;
        let reg = self.state.reg_read();
        match ins.op {
            Read => {
                let val = self.data_read(Self::data_addr(ins));
                self.state.reg_write(val);
            },
            Write => self.data_write(Self::data_addr(ins), reg),
            Add => self.do_add_sub(Self::data_addr(ins), u8::wrapping_add),
            Sub => self.do_add_sub(Self::data_addr(ins), u8::wrapping_sub),

            Jump => self.branch_if(true, ins.target.unwrap_code()),
            IfMax => self.branch_if(reg == Word::MAX, ins.target.unwrap_code()),
            IfMin => self.branch_if(reg == Word::EMPTY, ins.target.unwrap_code()),
            IfNotMax => self.branch_if(reg != Word::MAX, ins.target.unwrap_code()),
            IfNotMin => self.branch_if(reg != Word::EMPTY, ins.target.unwrap_code()),

            Logic => self.exec_logic_ins(ins),

            ReadPtr => {
                let val = self.data_read(self.deref(ins.operand));
                self.state.reg_write(val);
            },
            WritePtr => self.data_write(self.deref(ins.operand), reg),

            IncDec => self.do_inc_dec(ins),
            Print => {
                let val = self.data_read(Self::data_addr(ins));
                self.data_write(LAST_ADDRESS, val);
            },
        }
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
