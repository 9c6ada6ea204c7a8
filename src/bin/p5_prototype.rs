//! Pattern: Prototype
//!
//! Run with: cargo run --bin p5_prototype

use colored::Colorize;
use design_model::creational::prototype;

fn main() {
    design_model::logging::init();
    if let Err(err) = prototype::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
