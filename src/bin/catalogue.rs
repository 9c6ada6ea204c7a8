//! Run every pattern demo, or one by name.
//!
//! Run with:
//!   cargo run --bin catalogue
//!   cargo run --bin catalogue decorator

use std::env;

use colored::Colorize;
use design_model::{catalogue, PatternError};

fn main() {
    design_model::logging::init();

    let result = match env::args().nth(1) {
        Some(name) => catalogue::find(&name).and_then(|demo| demo()),
        None => catalogue::run_all(),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        if let PatternError::UnknownPattern(_) = err {
            let known: Vec<_> = catalogue::names().collect();
            eprintln!("known patterns: {}", known.join(", "));
        }
        std::process::exit(1);
    }
}
