//! Creational patterns: how objects get made.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod simple_factory;
pub mod singleton;
