use std::env;
use std::error::Error;
use std::path::Path;
use std::process;
use stm32hex::{file, write_hex};

fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");

    println!(" --------------------------------");
    println!("|  BIN to Intel HEX  | v{version}  |");
    println!(" --------------------------------");
    println!("\nUsage:");
    println!("  bin2hex <address> <bin-file> <hex-file>");
    println!("\nArguments:");
    println!("  <address>    Base address of the binary (hex, optional 0x prefix)");
    println!("\nExamples:");
    println!("  bin2hex 0x08000000 firmware.bin firmware.hex");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if matches!(
        args.get(1).map(String::as_str),
        Some("help" | "-h" | "--help")
    ) {
        print_usage();
        return;
    }

    if args.len() < 4 {
        print_usage();
        process::exit(1);
    }

    if let Err(e) = run_convert(&args[1], Path::new(&args[2]), Path::new(&args[3])) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_convert(addr_str: &str, bin_path: &Path, hex_path: &Path) -> Result<(), Box<dyn Error>> {
    let address = parse_hex_str(addr_str).map_err(|_e| format!("Invalid address: {addr_str}"))?;

    println!(
        "Converting {} (base address 0x{address:08X}) -> {}",
        bin_path.display(),
        hex_path.display()
    );

    let binary = file::load(bin_path)
        .map_err(|e| format!("Cannot read {}: {e}", bin_path.display()))?;

    let mut writer = file::create(hex_path)
        .map_err(|e| format!("Cannot open {}: {e}", hex_path.display()))?;
    write_hex(address, &binary, &mut writer)?;

    println!("Wrote {} bytes to {}", binary.len(), hex_path.display());
    Ok(())
}

/// Parse a string as a hex number (with optional 0x prefix)
fn parse_hex_str(s: &str) -> Result<u32, std::num::ParseIntError> {
    let s = s.trim();

    // Handle explicit 0x prefix
    if let Some(hex_str) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(hex_str, 16);
    }

    // Parse as hex without prefix
    u32::from_str_radix(s, 16)
}
