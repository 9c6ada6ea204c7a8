//! Structural patterns: how objects are composed into larger ones.

pub mod adapter;
pub mod decorator;
pub mod facade;
pub mod flyweight;
