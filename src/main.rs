//! LS-8 Emulator - CLI entry point
//!
//! Commands:
//! - `ls8-emu run <program>` - Run an `.ls8` image or `.asm` source
//! - `ls8-emu asm <source>` - Assemble to an `.ls8` image
//! - `ls8-emu disasm <image>` - Disassemble an image to readable text

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ls8-emu")]
#[command(version = "0.1.0")]
#[command(about = "An emulator for the LS-8 8-bit register machine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program until it halts
    Run {
        /// Path to the .ls8 image or .asm file to execute
        program: String,
        /// Maximum number of cycles to run
        #[arg(short, long, default_value = "100000")]
        max_cycles: u64,
        /// Show a trace of executed instructions
        #[arg(short, long)]
        trace: bool,
    },
    /// Assemble source to an .ls8 image
    Asm {
        /// Path to the source file
        source: String,
        /// Output image file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Disassemble an .ls8 image to readable text
    Disasm {
        /// Path to the image file
        image: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            max_cycles,
            trace,
        } => {
            run_program(&program, max_cycles, trace);
        }
        Commands::Asm { source, output } => {
            assemble_file(&source, output);
        }
        Commands::Disasm { image } => {
            disassemble_file(&image);
        }
    }
}

/// Load program bytes from either an `.asm` source or an `.ls8` image.
fn load_bytes(path: &str) -> Vec<u8> {
    use ls8::{assemble, load_image};

    if path.ends_with(".asm") {
        let source = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("failed to read {}: {}", path, e);
                std::process::exit(1);
            }
        };

        match assemble(&source) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("assembly error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match load_image(path) {
            Ok(image) => image.bytes,
            Err(e) => {
                eprintln!("failed to load image: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_program(path: &str, max_cycles: u64, trace: bool) {
    use ls8::asm::disassemble_instruction;
    use ls8::Cpu;

    let bytes = load_bytes(path);

    if bytes.is_empty() {
        eprintln!("no instructions to execute");
        std::process::exit(1);
    }

    let mut cpu = Cpu::new();
    if let Err(e) = cpu.load_program(&bytes) {
        eprintln!("failed to load program: {}", e);
        std::process::exit(1);
    }

    while cpu.is_running() && cpu.cycles < max_cycles {
        let pc = cpu.regs.pc;

        match cpu.step() {
            Ok(instr) => {
                if trace {
                    eprintln!(
                        "{:03}: {:<12} FL={:03b} SP={:#04x}",
                        pc,
                        disassemble_instruction(&instr),
                        cpu.regs.fl.bits(),
                        cpu.regs.sp()
                    );
                }
            }
            Err(e) => {
                eprintln!("CPU error at PC={}: {}", pc, e);
                std::process::exit(1);
            }
        }
    }

    if cpu.is_running() {
        eprintln!(
            "reached max cycles limit ({}); use --max-cycles to increase",
            max_cycles
        );
        std::process::exit(1);
    }

    if trace {
        eprintln!("halted after {} cycles", cpu.cycles);
    }
}

fn assemble_file(source_path: &str, output: Option<String>) {
    use ls8::{assemble, save_image};

    let out_path = output.unwrap_or_else(|| source_path.replace(".asm", ".ls8"));

    let source = match std::fs::read_to_string(source_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to read {}: {}", source_path, e);
            std::process::exit(1);
        }
    };

    let bytes = match assemble(&source) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("assembly error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = save_image(&out_path, &bytes) {
        eprintln!("failed to save image: {}", e);
        std::process::exit(1);
    }

    println!("assembled {} bytes to {}", bytes.len(), out_path);
}

fn disassemble_file(image_path: &str) {
    use ls8::{disassemble, load_image};

    let image = match load_image(image_path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("failed to load image: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", disassemble(&image.bytes));
}
