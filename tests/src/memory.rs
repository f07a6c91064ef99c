use common::asm::{AddrSpace, Opcode::*, Word};
use common::constants::{LAST_ADDRESS, RAM_SIZE};
use emu_lib::io::RecordingPrinter;
use crate::prog::{data, ins, load, words};

use std::sync::Arc;

#[test]
fn read_write_full_address() {
    let code = &[ins(Read, 14), ins(Write, 9)];
    let mut vals = [0u8; RAM_SIZE];
    vals[14] = 123;
    let mut emu = load(code, &vals);
    emu.run(2);
    assert_eq!(data(&emu, 9), 123);
}

#[test]
fn unassigned_opcodes_read() {
    let code = &[ins(Read, 0), Word::from_nibbles(12, 2)];
    let mut emu = load(code, &[1, 0, 55]);
    emu.run(2);
    assert_eq!(emu.register().val(), 55);
    assert_eq!(emu.pc(), 2);

    let code = &[Word::from_nibbles(15, 1)];
    let mut emu = load(code, &[1, 66]);
    emu.run(1);
    assert_eq!(emu.register().val(), 66);
}

#[test]
fn read_pointer() {
    // DATA[2] holds 0xf5; only its low nibble is an address.
    let code = &[ins(ReadPtr, 2)];
    let mut emu = load(code, &[0, 0, 0xf5, 0, 0, 88]);
    emu.run(1);
    assert_eq!(emu.register().val(), 88);
}

#[test]
fn write_pointer() {
    let code = &[ins(Read, 0), ins(WritePtr, 1)];
    let mut emu = load(code, &[31, 12]);
    emu.run(2);
    assert_eq!(data(&emu, 12), 31);
    assert_eq!(data(&emu, 1), 12);
}

#[test]
fn print_copies_to_sink() {
    let code = &[ins(Print, 0b1011)];
    let mut vals = [0u8; RAM_SIZE];
    vals[3] = 0x5a;
    vals[11] = 0x11;
    let mut emu = load(code, &vals);

    let printer = Arc::new(RecordingPrinter::default());
    emu.set_printer(printer.clone());

    let before = emu.ram().clone();
    emu.run(1);

    assert_eq!(data(&emu, LAST_ADDRESS), 0x5a);
    for addr in 0..LAST_ADDRESS {
        assert_eq!(emu.ram().get(AddrSpace::Data, addr), before.get(AddrSpace::Data, addr));
    }
    assert_eq!(printer.words(), [Word::new(0x5a)]);
}

#[test]
fn writes_to_sink_are_printed() {
    let code = &[
        ins(Read, 0),
        ins(Write, LAST_ADDRESS),
        ins(Read, 1),
        ins(Write, LAST_ADDRESS),
        ins(Write, 2),
    ];
    let mut emu = load(code, &[1, 2]);
    let printer = Arc::new(RecordingPrinter::default());
    emu.set_printer(printer.clone());
    emu.run(5);

    // The plain write to DATA[2] isn't printed.
    assert_eq!(printer.values(), [1, 2]);
    assert_eq!(printer.last(), Some(Word::new(2)));
    assert_eq!(data(&emu, LAST_ADDRESS), 2);
}

#[test]
fn halted_machine_is_frozen() {
    let code = words(&[0x01; RAM_SIZE]);
    let mut emu = load(&code, &[0, 9]);
    while emu.step() {}
    let cycle = emu.cycle();
    assert_eq!(cycle, RAM_SIZE + 1);
    assert_eq!(emu.pc() as usize, RAM_SIZE);

    for i in 1..=5 {
        assert!(!emu.step());
        assert_eq!(emu.cycle(), cycle + i);
        assert_eq!(emu.pc() as usize, RAM_SIZE);
        assert_eq!(emu.register().val(), 9);
    }
}
