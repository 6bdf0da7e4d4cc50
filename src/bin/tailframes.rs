use std::io::{stdin, stdout};

use clap::Parser;
use colored::Colorize;
use tailframes::{extract_final_frames, scan_directory, select_video};

const CLI_AFTER_HELP: &str = "Requires the `ffmpeg` and `ffprobe` binaries on PATH:\n  macOS:   brew install ffmpeg\n  Linux:   apt-get install ffmpeg (or your distribution's package manager)\n  Windows: download from https://ffmpeg.org/download.html and add to PATH";

#[derive(Debug, Parser)]
#[command(
    name = "tailframes",
    version,
    about = "Pick a video file in the current directory and extract its final frames as PNG images",
    after_help = CLI_AFTER_HELP
)]
struct Cli {}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = Cli::parse();

    let current_directory = std::env::current_dir()?;
    let files = scan_directory(&current_directory)?;

    let stdin = stdin();
    let selected = select_video(&files, stdin.lock(), stdout())?;

    let report = extract_final_frames(&selected.path)?;

    println!(
        "{} {}",
        "success:".green().bold(),
        format!(
            "Extracted {} frame(s) to {}",
            report.frames.len(),
            report.output_directory.display()
        )
        .green()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
