//! Pattern: Simple Factory
//!
//! Run with: cargo run --bin p1_simple_factory

use colored::Colorize;
use design_model::creational::simple_factory;

fn main() {
    design_model::logging::init();
    if let Err(err) = simple_factory::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
