
use emu_lib::{Emulator, ExecRet};
use emu_lib::io::StdoutPrinter;
use common::asm::AddrSpace;
use common::image::parse_image;

use std::sync::Arc;

use clap::Parser;
use clap_stdin::FileOrStdin;


/// Nibble machine emulator
#[derive(Parser)]
#[command(about)]
struct Args {
    /// Image to execute, one word of binary digits per line (code, then data)
    image: FileOrStdin,

    /// Give up after this many cycles.
    #[arg(long, default_value_t=1000)]
    max_cycles: usize,

    /// Dump the machine once stopped.
    #[arg(long)]
    dump: bool,
}


fn dump(emu: &Emulator) {
    eprintln!("cycle: {}\tpc: {}\treg: {}", emu.cycle(), emu.pc(), emu.register());
    for space in [AddrSpace::Code, AddrSpace::Data] {
        eprintln!("{space}:");
        for (addr, word) in emu.ram().bank(space).iter().enumerate() {
            eprintln!("  {addr:2}  {word}");
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let input = args.image.contents().unwrap();
    let ram = parse_image(&input).unwrap_or_else(|e| panic!("Invalid image: {e}"));

    let mut emu = Emulator::with_ram(ram);
    emu.set_printer(Arc::new(StdoutPrinter::default()));

    if emu.run(args.max_cycles) != ExecRet::Halt {
        eprintln!("Still running after {} cycles", args.max_cycles);
    }

    if args.dump {
        dump(&emu);
    }
}
