//! pcmp-cli - Command-line interface for pcmplib
//!
//! A command-line tool for packing raw data into PCMP containers and
//! unpacking them back.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use pcmplib::{compress_container_with_progress, decompress_bytes, ContainerHeader, FILE_ALIGNMENT};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pcmp-cli")]
#[command(about = "A CLI tool for PCMP texture container compression and decompression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a PCMP container
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output container (defaults to the input with a .pcmp extension)
        output: Option<PathBuf>,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress a PCMP container
    Decompress {
        /// Input container
        input: PathBuf,

        /// Output file (defaults to the input with a .bin extension)
        output: Option<PathBuf>,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Get information about a PCMP container
    Info {
        /// Container to analyze
        input: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            force,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension("pcmp"));
            compress_file(&input, &output, force, cli.verbose, cli.quiet)
        }
        Commands::Decompress {
            input,
            output,
            force,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension("bin"));
            decompress_file(&input, &output, force, cli.verbose, cli.quiet)
        }
        Commands::Info { input } => show_file_info(&input, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn check_paths(input: &Path, output: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }
    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        )
        .into());
    }
    Ok(())
}

fn compress_file(
    input: &Path,
    output: &Path,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Compressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();

    let input_data = fs::read(input)?;
    let input_size = input_data.len();

    if verbose {
        println!("Input size: {} bytes", input_size);
    }

    // Show progress bar for large files
    let progress = if !quiet && input_size > 1024 * 1024 {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}% {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Compressing...");
        Some(pb)
    } else {
        None
    };

    let container = compress_container_with_progress(&input_data, |done, total| {
        if let Some(ref pb) = progress {
            pb.set_position((done * 100 / total) as u64);
        }
    });

    if let Some(ref pb) = progress {
        pb.finish_with_message("Compression complete");
    }

    fs::write(output, &container)?;

    let compression_time = start_time.elapsed();
    let output_size = container.len();

    if !quiet {
        println!("✓ Compression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes (sector-aligned container)", output_size);
        if input_size > 0 {
            let ratio = (output_size as f64 / input_size as f64) * 100.0;
            println!("  Ratio:  {:.1}%", ratio);
        }
        println!("  Time:   {:.2?}", compression_time);
    }

    Ok(())
}

fn decompress_file(
    input: &Path,
    output: &Path,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Decompressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();

    let file_data = fs::read(input)?;
    let input_size = file_data.len();

    let decompressed =
        decompress_bytes(&file_data).map_err(|e| format!("Decompression failed: {}", e))?;

    fs::write(output, &decompressed)?;

    let decompression_time = start_time.elapsed();
    let output_size = decompressed.len();

    if !quiet {
        println!("✓ Decompression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        println!("  Time:   {:.2?}", decompression_time);
    }

    Ok(())
}

fn show_file_info(input: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let data = fs::read(input)?;
    let file_size = data.len();

    let header = ContainerHeader::parse(&data).map_err(|e| format!("Invalid container: {}", e))?;

    println!("PCMP Container Information:");
    println!("  File: {}", input.display());
    println!("  Size: {} bytes", file_size);
    println!("  Uncompressed Size: {} bytes", header.uncompressed_size);
    println!("  Compressed Stream: {} bytes", header.compressed_size);
    println!(
        "  Sector Aligned:    {}",
        if file_size % FILE_ALIGNMENT == 0 {
            "yes"
        } else {
            "no"
        }
    );

    if verbose {
        println!(
            "  Header bytes: {:02x} {:02x} {:02x} {:02x}",
            data[0], data[1], data[2], data[3]
        );
    }

    // Verify the stream by decoding it
    match decompress_bytes(&data) {
        Ok(decompressed) => {
            println!("  Decoded Size: {} bytes", decompressed.len());
            if header.uncompressed_size > 0 {
                let ratio = (header.compressed_size as f64 / header.uncompressed_size as f64) * 100.0;
                println!("  Compression Ratio: {:.1}%", ratio);
            }
            println!("  Status: ✓ Valid PCMP container");
        }
        Err(e) => {
            println!("  Status: ✗ Invalid or corrupted PCMP container");
            if verbose {
                println!("  Error: {}", e);
            }
        }
    }

    Ok(())
}
