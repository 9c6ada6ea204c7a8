//! Pattern: Abstract Factory
//!
//! Run with: cargo run --bin p3_abstract_factory

use colored::Colorize;
use design_model::creational::abstract_factory;

fn main() {
    design_model::logging::init();
    if let Err(err) = abstract_factory::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
