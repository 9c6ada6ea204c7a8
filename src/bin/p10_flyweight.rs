//! Pattern: Flyweight
//!
//! Run with: cargo run --bin p10_flyweight

use colored::Colorize;
use design_model::structural::flyweight;

fn main() {
    design_model::logging::init();
    if let Err(err) = flyweight::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
