//! Keypad Session
//!
//! This example drives a calculator session from standard input, the way a
//! presentation layer would forward button presses and key events.
//!
//! Each whitespace-separated token is a keyboard key name (`7`, `*`, `Enter`,
//! `Escape`, `Backspace`) or a keypad label (`AC`, `+/-`, `×`, `÷`). Two extra
//! commands are understood: `history` prints the history panel and
//! `clear-history` empties it.
//!
//! Run with: echo "1 2 + 5 Enter history" | cargo run --example keypad
//! Set RUST_LOG=deskcalc=debug to watch every transition.

use deskcalc::{Calculator, Key};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("=== Keypad Session ===\n");

    let mut calc = Calculator::new();
    for line in io::stdin().lock().lines() {
        for token in line?.split_whitespace() {
            match token {
                "history" => print_history(&calc),
                "clear-history" => calc.clear_history(),
                _ => {
                    if !calc.press_keyboard(token) {
                        match token.parse::<Key>() {
                            Ok(key) => {
                                calc.press(key);
                            }
                            Err(err) => {
                                eprintln!("skipping {token}: {err}");
                                continue;
                            }
                        }
                    }
                    println!(
                        "{token:>10} | {:>20} | {}",
                        calc.formatted_display(),
                        calc.expression()
                    );
                }
            }
        }
    }

    println!("\n=== Session Complete ===");
    Ok(())
}

fn print_history(calc: &Calculator) {
    if calc.history().is_empty() {
        println!("  (no history)");
        return;
    }
    for record in calc.history().list() {
        println!(
            "  {} = {}    [{}]",
            record.expression,
            record.result,
            record.recorded_at.format("%H:%M:%S")
        );
    }
}
