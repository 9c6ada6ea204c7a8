//! Pattern: Decorator
//!
//! Run with: cargo run --bin p8_decorator

use colored::Colorize;
use design_model::structural::decorator;

fn main() {
    design_model::logging::init();
    if let Err(err) = decorator::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
