use common::asm::Opcode::*;
use common::constants::LAST_ADDRESS;
use emu_lib::ExecRet;
use emu_lib::io::RecordingPrinter;
use crate::prog::{data, ins, load};

use std::sync::Arc;

#[test]
fn add_loop_never_halts() {
    let code = &[
        ins(Read, 0),
        ins(Add, 1),
        ins(Write, 2),
        ins(Jump, 0),
    ];
    let mut emu = load(code, &[3, 4]);
    emu.run(4);
    assert_eq!(emu.register().val(), 7);
    assert_eq!(data(&emu, 2), 7);
    assert_eq!(emu.pc(), 0);

    assert_eq!(emu.run(1000), ExecRet::Ok);
    assert_eq!(data(&emu, 2), 7);
    assert_eq!(emu.cycle(), 1004);
}

#[test]
fn countdown() {
    let code = &[
        ins(IncDec, 0b1001), // dec [1]
        ins(Print, 1),
        ins(IfNotMin, 0),
    ];
    let mut emu = load(code, &[0, 3]);
    let printer = Arc::new(RecordingPrinter::default());
    emu.set_printer(printer.clone());

    assert_eq!(emu.run(100), ExecRet::Halt);
    assert_eq!(printer.values(), [2, 1, 0]);
    assert_eq!(data(&emu, LAST_ADDRESS), 0);
}

#[test]
fn sum_through_pointer() {
    // DATA[1] points into DATA[4..=6]; sum lands in DATA[2].
    let code = &[
        ins(Read, 2),      // 0: reg = sum
        ins(Write, 3),     // 1: scratch = sum
        ins(ReadPtr, 1),   // 2: reg = *ptr
        ins(Add, 3),       // 3: reg += scratch
        ins(Write, 2),     // 4: sum = reg
        ins(IncDec, 1),    // 5: ptr += 1
        ins(Read, 1),      // 6: reg = ptr
        ins(Logic, 5),     // 7: reg = ptr == DATA[0]
        ins(IfNotMax, 0),  // 8: loop until the end
    ];
    let mut emu = load(code, &[7, 4, 0, 0, 10, 20, 30]);
    assert_eq!(emu.run(200), ExecRet::Halt);
    assert_eq!(data(&emu, 2), 60);
    assert_eq!(data(&emu, 1), 7);
}
