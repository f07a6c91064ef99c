
use crate::asm::*;
use crate::constants::FIRST_ADDRESS;
use crate::mem::Ram;

fn decode_target(op: Opcode, operand: u8) -> Target {
    use Opcode::*;
    match op {
        Jump | IfMax | IfMin | IfNotMax | IfNotMin => Target::Code(operand),
        Read | Write | ReadPtr | WritePtr | IncDec => Target::Data(operand),
        Add | Sub | Print => Target::DataReduced(operand & Ins::REDUCED_ADDR_MASK),
        Logic => Target::None,
    }
}


// Every word decodes to something.
pub fn decode(word: Word) -> Ins {
    let raw = word.first_nibble();
    let operand = word.second_nibble();
    let op = Opcode::decode(raw);
    let target = if Opcode::is_assigned(raw) {
        decode_target(op, operand)
    } else {
        Target::None
    };

    Ins{word, op, operand, target}
}


// The address the instruction actually touches when executed with the given
// register and memory: follows pointers and register-held addresses, which
// `decode` alone can't see.
pub fn resolve(ins: &Ins, reg: Word, ram: &Ram) -> Option<Address> {
    if !ins.is_assigned() {
        return Some(Address::data(ins.operand));
    }

    match ins.op {
        Opcode::ReadPtr | Opcode::WritePtr => {
            let ptr = ram.get(AddrSpace::Data, ins.operand);
            Some(Address::data(ptr.second_nibble()))
        },
        Opcode::IncDec => Some(Address::data(ins.reduced_addr())),
        Opcode::Logic => match ins.logic_op()? {
            LogicOp::And | LogicOp::Or | LogicOp::Eq => Some(Address::data(FIRST_ADDRESS)),
            LogicOp::JumpReg => Some(Address::code(reg.second_nibble())),
            LogicOp::ReadReg => Some(Address::data(reg.second_nibble())),
            LogicOp::Shl | LogicOp::Shr | LogicOp::Not => None,
        },
        _ => ins.target.address(),
    }
}
