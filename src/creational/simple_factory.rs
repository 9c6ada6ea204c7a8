//! Simple Factory
//!
//! Strictly speaking not one of the classic patterns, but the usual first
//! step towards them: a single factory object decides which concrete type to
//! create. The caller passes a discriminator and never names the product type.
//!
//! Advantages:
//! - The concrete products are pulled out of client code.
//!
//! Drawbacks:
//! - The factory carries every product; adding one means editing the
//!   factory, which breaks the open/closed principle.

use colored::Colorize;
use tracing::debug;

use crate::error::{PatternError, Result};

pub trait Fruit {
    fn name(&self) -> &'static str;
    fn eat(&self) -> String;
}

pub struct Apple;

impl Fruit for Apple {
    fn name(&self) -> &'static str {
        "apple"
    }

    fn eat(&self) -> String {
        "吃苹果".to_string()
    }
}

pub struct Banana;

impl Fruit for Banana {
    fn name(&self) -> &'static str {
        "banana"
    }

    fn eat(&self) -> String {
        "吃香蕉".to_string()
    }
}

pub struct FruitFactory;

impl FruitFactory {
    /// Names are matched exactly; `"Apple"` is not `"apple"`.
    pub fn produce(&self, name: &str) -> Result<Box<dyn Fruit>> {
        debug!(name, "producing fruit");
        match name {
            "apple" => Ok(Box::new(Apple)),
            "banana" => Ok(Box::new(Banana)),
            other => Err(PatternError::UnknownProduct(other.to_string())),
        }
    }
}

pub fn run() -> Result<()> {
    println!("{}", "=== Simple Factory ===".bold());
    let factory = FruitFactory;

    let apple = factory.produce("apple")?;
    println!("{}", apple.eat());

    let banana = factory.produce("banana")?;
    println!("{}", banana.eat());

    // The caller decides what to do with an unknown discriminator.
    match factory.produce("durian") {
        Ok(fruit) => println!("{}", fruit.eat()),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produce_known_fruits() {
        let factory = FruitFactory;
        let apple = factory.produce("apple").unwrap();
        let banana = factory.produce("banana").unwrap();

        assert_eq!(apple.name(), "apple");
        assert_eq!(apple.eat(), "吃苹果");
        assert_eq!(banana.name(), "banana");
    }

    #[test]
    fn test_unknown_fruit_is_an_error() {
        let factory = FruitFactory;
        let err = factory.produce("durian").err().unwrap();
        assert!(matches!(err, PatternError::UnknownProduct(ref name) if name == "durian"));
    }

    #[test]
    fn test_discriminator_is_case_sensitive() {
        let factory = FruitFactory;
        assert!(factory.produce("Apple").is_err());
    }
}
