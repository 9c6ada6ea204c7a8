//! Name → demo lookup used by the `catalogue` binary.

use crate::creational::{abstract_factory, builder, factory_method, prototype, simple_factory, singleton};
use crate::error::{PatternError, Result};
use crate::structural::{adapter, decorator, facade, flyweight};

pub type Demo = fn() -> Result<()>;

/// Every pattern in presentation order.
pub const PATTERNS: [(&str, Demo); 10] = [
    ("simple-factory", simple_factory::run),
    ("factory-method", factory_method::run),
    ("abstract-factory", abstract_factory::run),
    ("builder", builder::run),
    ("prototype", prototype::run),
    ("singleton", singleton::run),
    ("adapter", adapter::run),
    ("decorator", decorator::run),
    ("facade", facade::run),
    ("flyweight", flyweight::run),
];

pub fn find(name: &str) -> Result<Demo> {
    PATTERNS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, demo)| *demo)
        .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|(name, _)| *name)
}

pub fn run_all() -> Result<()> {
    for (_, demo) in PATTERNS {
        demo()?;
        println!();
    }
    Ok(())
}
