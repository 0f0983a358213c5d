use clap::Parser;
use icgem_reader::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("icgem - ICGEM gravity field model reader");
    println!("========================================");
    println!();
    println!("Inspect gravity potential models in the ICGEM format and extract");
    println!("their spherical-harmonic coefficients.");
    println!();
    println!("USAGE:");
    println!("    icgem <COMMAND> <FILE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect     Report header, degree/order bounds and periodic-term periods");
    println!("    extract     Extract static coefficients up to a degree/order");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Inspect a model:");
    println!("    icgem inspect EGM2008.gfc");
    println!();
    println!("    # Extract coefficients up to degree/order 120 as CSV:");
    println!("    icgem extract EGM2008.gfc --degree 120 --format csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    icgem <COMMAND> --help");
}
