use common::asm::Opcode::{self, *};
use crate::prog::{ins, load};

// Register loaded from DATA[0], then the branch at CODE[1] to 9.
fn run(op: Opcode, reg: u8, should_take: bool) {
    let code = &[ins(Read, 0), ins(op, 9)];
    let mut emu = load(code, &[reg]);
    emu.run(2);
    let taken = match emu.pc() {
        9 => true,
        2 => false,
        pc => panic!("Invalid pc: {pc}"),
    };
    assert_eq!(taken, should_take, "{op} with register {reg}");
}

#[test]
fn jump() {
    run(Jump, 0, true);
    run(Jump, 128, true);
    run(Jump, 255, true);
}

#[test]
fn if_max() {
    run(IfMax, 255, true);
    run(IfMax, 254, false);
    run(IfMax, 0, false);
    run(IfMax, 127, false);
}

#[test]
fn if_min() {
    run(IfMin, 0, true);
    run(IfMin, 1, false);
    run(IfMin, 255, false);
}

#[test]
fn if_not_max() {
    run(IfNotMax, 255, false);
    run(IfNotMax, 254, true);
    run(IfNotMax, 0, true);
}

#[test]
fn if_not_min() {
    run(IfNotMin, 0, false);
    run(IfNotMin, 1, true);
    run(IfNotMin, 255, true);
}

#[test]
fn not_branches_invert_plain_ones() {
    for reg in [0, 1, 128, 254, 255] {
        for (op, not_op) in [(IfMax, IfNotMax), (IfMin, IfNotMin)] {
            let code = &[ins(Read, 0), ins(op, 9)];
            let mut plain = load(code, &[reg]);
            plain.run(2);

            let code = &[ins(Read, 0), ins(not_op, 9)];
            let mut not = load(code, &[reg]);
            not.run(2);

            assert_ne!(plain.pc(), not.pc(), "{op}/{not_op} with register {reg}");
        }
    }
}

#[test]
fn jump_to_last_then_off_the_end() {
    let mut code = vec![ins(Jump, 15)];
    code.resize(16, ins(Read, 0));
    let mut emu = load(&code, &[]);
    assert!(emu.step());
    assert_eq!(emu.pc(), 15);
    assert!(emu.step());
    assert_eq!(emu.pc(), 16);
    assert!(!emu.step());
}
