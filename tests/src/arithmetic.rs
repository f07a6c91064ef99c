use common::asm::{Opcode::*, Word};
use crate::prog::{data, ins, load};

fn add_then_sub(reg: u8, val: u8) -> u8 {
    let code = &[
        ins(Read, 0),
        ins(Add, 1),
        ins(Sub, 1),
    ];
    let mut emu = load(code, &[reg, val]);
    emu.run(3);
    emu.register().val()
}

#[test]
fn add_sub_restores_register() {
    for (reg, val) in [(0, 0), (0, 1), (1, 255), (255, 1), (200, 100), (17, 239), (255, 255)] {
        assert_eq!(add_then_sub(reg, val), reg, "reg {reg} val {val}");
    }
}

#[test]
fn add_wraps_past_max() {
    let code = &[ins(Read, 0), ins(Add, 1)];
    let mut emu = load(code, &[255, 1]);
    emu.run(2);
    assert_eq!(emu.register(), Word::EMPTY);
}

#[test]
fn sub_wraps_below_zero() {
    let code = &[ins(Read, 0), ins(Sub, 1)];
    let mut emu = load(code, &[0, 1]);
    emu.run(2);
    assert_eq!(emu.register(), Word::MAX);
}

#[test]
fn sub_uses_reduced_address() {
    // Operand 0b1010 reads DATA[2].
    let code = &[ins(Read, 0), ins(Sub, 0b1010)];
    let mut emu = load(code, &[10, 0, 3, 0, 0, 0, 0, 0, 0, 0, 99]);
    emu.run(2);
    assert_eq!(emu.register().val(), 7);
}

#[test]
fn increment() {
    let code = &[ins(IncDec, 0b0011)];
    let mut emu = load(code, &[0, 0, 0, 41]);
    emu.run(1);
    assert_eq!(data(&emu, 3), 42);
    assert_eq!(emu.register().val(), 42);
}

#[test]
fn decrement() {
    // Top operand bit selects decrement; the rest is the address.
    let code = &[ins(IncDec, 0b1011)];
    let mut emu = load(code, &[0, 0, 0, 41]);
    emu.run(1);
    assert_eq!(data(&emu, 3), 40);
    assert_eq!(emu.register().val(), 40);
}

#[test]
fn inc_dec_wrap() {
    let code = &[ins(IncDec, 0b0000), ins(IncDec, 0b1001)];
    let mut emu = load(code, &[255, 0]);
    emu.run(2);
    assert_eq!(data(&emu, 0), 0);
    assert_eq!(data(&emu, 1), 255);
    assert_eq!(emu.register(), Word::MAX);
}
