use std::env;
use std::error::Error;
use std::path::Path;
use std::process;
use stm32hex::{file, merge};

fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");

    println!(" -----------------------------");
    println!("|  Intel HEX Merge  | v{version} |");
    println!(" -----------------------------");
    println!("\nUsage:");
    println!("  hexmerge <output> <input1> ... <inputN>");
    println!("\nInputs that cannot be read are skipped with a warning.");
    println!("\nExamples:");
    println!("  hexmerge final.hex bootloader.hex application.hex");
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

    if args.len() < 3 {
        print_usage();
        process::exit(1);
    }

    if let Err(e) = run_merge(Path::new(&args[1]), &args[2..]) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_merge(out_path: &Path, inputs: &[String]) -> Result<(), Box<dyn Error>> {
    // Output is opened first, a bad output path fails before any input is read
    let mut writer =
        file::create(out_path).map_err(|e| format!("Cannot open {}: {e}", out_path.display()))?;

    let mut streams = Vec::with_capacity(inputs.len());
    for path_str in inputs {
        match file::load(path_str) {
            Ok(buffer) => {
                println!("Loaded {path_str} ({} bytes)", buffer.len());
                streams.push(buffer);
            }
            Err(e) => eprintln!("Warning: skipping {path_str}: {e}"),
        }
    }

    let count = merge(streams.iter().map(Vec::as_slice), &mut writer)?;

    println!(
        "Merged {count} records from {} file(s) into {}",
        streams.len(),
        out_path.display()
    );
    Ok(())
}
