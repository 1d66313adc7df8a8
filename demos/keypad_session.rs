//! Keypad Session
//!
//! This example walks through a calculator session key by key.
//!
//! Key concepts:
//! - Every key press is one pure transition returning a display snapshot
//! - Operators chain left to right without precedence
//! - Errors show as `Error` and the next digit starts fresh
//! - Completed calculations land on the tape
//!
//! Run with: cargo run --example keypad_session

use scicalc::{BuildError, Calculator, CalculatorBuilder, Checkpoint, DisplaySnapshot};
use std::fs;

fn show(keys: &str, snapshot: &DisplaySnapshot) {
    let memory = if snapshot.memory_flag { "M" } else { " " };
    println!(
        "  {:<14} | {:<12} {:>16}  {} {}",
        keys, snapshot.expression_text, snapshot.primary_text, memory, snapshot.angle_mode
    );
}

fn play(calc: &mut Calculator, sequence: &str) {
    for key in sequence.split_whitespace() {
        match calc.press_keys(key) {
            Ok(snapshot) => show(key, &snapshot),
            Err(e) => println!("  {key:<14} | rejected: {e}"),
        }
    }
}

fn main() {
    println!("=== Keypad Session Example ===\n");

    let mut calc = Calculator::new();

    println!("Chaining without precedence:");
    play(&mut calc, "5 + 3 * 2 =");
    println!();

    println!("Division by zero and recovery:");
    play(&mut calc, "c 10 / 0 = 7");
    println!();

    println!("Degree mode trigonometry:");
    play(&mut calc, "c deg 30 sin c 1 atan rad");
    println!();

    println!("Memory register:");
    play(&mut calc, "c 12 ms c 3 m- c 2 * mr = mc");
    println!();

    println!("Unknown keys are rejected before they reach the state machine:");
    play(&mut calc, "tau");
    println!();

    println!("Tape:");
    for entry in calc.tape().entries() {
        println!("  {entry}");
    }
    println!();

    println!("Checkpoint and resume:");
    let dir = std::env::temp_dir().join("scicalc-demo");
    fs::create_dir_all(&dir).ok();
    let path = dir.join("session.json");

    play(&mut calc, "c 6 *");
    match calc.checkpoint().save(&path) {
        Ok(()) => println!("  [Checkpoint] Saved to {}", path.display()),
        Err(e) => println!("  [Checkpoint] Save failed: {e}"),
    }

    let resumed = Checkpoint::load(&path)
        .map_err(BuildError::from)
        .and_then(|checkpoint| CalculatorBuilder::new().resume(checkpoint).build());
    match resumed {
        Ok(mut resumed) => {
            println!("  [Checkpoint] Resumed");
            play(&mut resumed, "7 =");
        }
        Err(e) => println!("  [Checkpoint] Resume failed: {e}"),
    }

    fs::remove_dir_all(&dir).ok();

    println!("\n=== Example Complete ===");
}
