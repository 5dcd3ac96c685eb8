use std::env;
use std::error::Error;
use std::path::Path;
use std::process;
use stm32hex::{file, report};

fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");

    println!(" ----------------------------");
    println!("|  Intel HEX Info  | v{version} |");
    println!(" ----------------------------");
    println!("\nUsage:");
    println!("  hexinfo <hex-file>");
    println!("\nExamples:");
    println!("  hexinfo firmware.hex");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let Some(path_str) = args.get(1) else {
        print_usage();
        process::exit(1);
    };

    if matches!(path_str.as_str(), "help" | "-h" | "--help") {
        print_usage();
        return;
    }

    if let Err(e) = run_info(Path::new(path_str)) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_info(path: &Path) -> Result<(), Box<dyn Error>> {
    let buffer = file::load(path).map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    let lines = report(&buffer);

    println!("File Path:   {}", path.display());
    println!("File Size:   {} bytes", buffer.len());
    println!("Records:     {}", lines.len());
    println!();

    for line in lines {
        println!("{line}");
    }
    Ok(())
}
