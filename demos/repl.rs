//! Interactive Calculator
//!
//! Reads whitespace-separated keys from stdin (or a script file) and prints
//! the display after each line.
//!
//! Run with: cargo run --example repl -- --deg
//!
//! Lines starting with `:` are commands: `:tape`, `:save`, `:quit`.

use clap::Parser;
use scicalc::core::AngleMode;
use scicalc::logging::init_tracing;
use scicalc::{CalculatorBuilder, CalculatorConfig, Checkpoint, DisplaySnapshot};
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Keypad calculator driven from the terminal
#[derive(Parser, Debug)]
#[command(name = "repl")]
#[command(about = "Keypad calculator with left-to-right evaluation")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start in degree mode, overriding the configuration.
    #[arg(long)]
    deg: bool,

    /// Read keys from this file instead of stdin.
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,
}

fn render(snapshot: &DisplaySnapshot) -> String {
    let memory = if snapshot.memory_flag { "M" } else { " " };
    format!(
        "{:<20} {:>20}  {} {}",
        snapshot.expression_text, snapshot.primary_text, memory, snapshot.angle_mode
    )
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match CalculatorConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => CalculatorConfig::default(),
    };
    if args.verbose {
        config.log_level = scicalc::LogLevel::Debug;
    }
    init_tracing(config.log_level);

    let checkpoint_path = config.checkpoint.clone();
    let mut builder = CalculatorBuilder::new().config(config);
    if args.deg {
        builder = builder.angle_mode(AngleMode::Deg);
    }
    if let Some(path) = checkpoint_path.as_deref().filter(|p| p.exists()) {
        match Checkpoint::load(path) {
            Ok(checkpoint) => {
                info!(path = %path.display(), "resuming session");
                builder = builder.resume(checkpoint);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "ignoring checkpoint"),
        }
    }

    let mut calc = match builder.build() {
        Ok(calc) => calc,
        Err(e) => {
            error!(error = %e, "cannot start calculator");
            return ExitCode::FAILURE;
        }
    };

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => match fs::File::open(path) {
            Ok(file) => Box::new(io::BufReader::new(file)),
            Err(e) => {
                error!(path = %path.display(), error = %e, "cannot open script");
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    println!("{}", render(&calc.snapshot()));
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "read failed");
                return ExitCode::FAILURE;
            }
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":tape" => {
                for entry in calc.tape().entries() {
                    println!("  {entry}");
                }
                if let Some(span) = calc.tape().duration() {
                    println!("  ({} entries over {:.1}s)", calc.tape().len(), span.as_secs_f64());
                }
            }
            ":save" => match &checkpoint_path {
                Some(path) => match calc.checkpoint().save(path) {
                    Ok(()) => println!("saved to {}", path.display()),
                    Err(e) => eprintln!("{e}"),
                },
                None => eprintln!("no checkpoint path configured"),
            },
            keys => match calc.press_keys(keys) {
                Ok(snapshot) => println!("{}", render(&snapshot)),
                Err(e) => eprintln!("{e}"),
            },
        }
    }

    if let Some(path) = &checkpoint_path {
        if let Err(e) = calc.checkpoint().save(path) {
            error!(path = %path.display(), error = %e, "failed to save session");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
