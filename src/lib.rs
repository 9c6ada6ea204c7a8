//! # Design Patterns: Creational & Structural
//!
//! Every pattern lives in its own module with a `run()` driver that prints
//! the demonstration to stdout. The modules never depend on each other.
//!
//! ## Creational Patterns
//! - Simple Factory (one factory, string discriminator)
//! - Factory Method (one factory per product)
//! - Abstract Factory (matched product families)
//! - Builder (chained setters, immutable result)
//! - Prototype (deep vs shallow copies)
//! - Singleton (double-checked locking, eager, holder, enum)
//!
//! ## Structural Patterns
//! - Adapter (newtype vs borrowed adaptee)
//! - Decorator (recursive price/remark wrapping)
//! - Facade (fixed sequence with short-circuit)
//! - Flyweight (shared instances keyed by intrinsic state)
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_simple_factory
//! cargo run --bin p8_decorator
//! cargo run --bin catalogue            # every demo, in order
//! cargo run --bin catalogue flyweight  # one demo by name
//! ```

pub mod catalogue;
pub mod creational;
pub mod error;
pub mod logging;
pub mod structural;

pub use error::{PatternError, Result};
