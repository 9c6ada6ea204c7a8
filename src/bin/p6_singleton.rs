//! Pattern: Singleton
//!
//! Run with: cargo run --bin p6_singleton

use colored::Colorize;
use design_model::creational::singleton;

fn main() {
    design_model::logging::init();
    if let Err(err) = singleton::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
