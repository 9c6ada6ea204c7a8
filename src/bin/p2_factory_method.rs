//! Pattern: Factory Method
//!
//! Run with: cargo run --bin p2_factory_method

use colored::Colorize;
use design_model::creational::factory_method;

fn main() {
    design_model::logging::init();
    if let Err(err) = factory_method::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
