//! Pattern: Builder
//!
//! Run with: cargo run --bin p4_builder

use colored::Colorize;
use design_model::creational::builder;

fn main() {
    design_model::logging::init();
    if let Err(err) = builder::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
