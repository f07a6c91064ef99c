
use disassembler::{disassemble, listing};
use common::image::parse_image;

use clap::Parser;
use clap_stdin::FileOrStdin;

/// Nibble machine disassembler
#[derive(Parser)]
struct Args {
    /// Image to disassemble
    image: FileOrStdin,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let input = args.image.contents().unwrap();
    let ram = parse_image(&input).unwrap_or_else(|e| panic!("Invalid image: {e}"));
    for line in listing(disassemble(&ram)) {
        println!("{line}");
    }
}
