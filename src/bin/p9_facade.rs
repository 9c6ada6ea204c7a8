//! Pattern: Facade
//!
//! Run with: cargo run --bin p9_facade

use colored::Colorize;
use design_model::structural::facade;

fn main() {
    design_model::logging::init();
    if let Err(err) = facade::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
