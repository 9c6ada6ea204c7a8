//! Pattern: Adapter
//!
//! Run with: cargo run --bin p7_adapter

use colored::Colorize;
use design_model::structural::adapter;

fn main() {
    design_model::logging::init();
    if let Err(err) = adapter::run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
