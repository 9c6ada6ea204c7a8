//! Factory Method
//!
//! Fixes the simple factory's main weakness. Creation goes through a trait,
//! and each implementation decides which concrete product to instantiate:
//! instantiation is deferred to the implementor.
//!
//! Advantages:
//! - Concrete products stay out of client code.
//! - A new product needs a new factory, not an edit to an existing one.
//!
//! Drawbacks:
//! - The number of types grows quickly.

use colored::Colorize;

use crate::error::Result;

pub trait Animal {
    fn jump(&self) -> String;
}

pub struct Dog;

impl Animal for Dog {
    fn jump(&self) -> String {
        "狗在跳".to_string()
    }
}

pub struct Cat;

impl Animal for Cat {
    fn jump(&self) -> String {
        "猫在跳".to_string()
    }
}

pub trait AnimalFactory {
    fn produce(&self) -> Box<dyn Animal>;
}

pub struct DogFactory;

impl AnimalFactory for DogFactory {
    fn produce(&self) -> Box<dyn Animal> {
        Box::new(Dog)
    }
}

pub struct CatFactory;

impl AnimalFactory for CatFactory {
    fn produce(&self) -> Box<dyn Animal> {
        Box::new(Cat)
    }
}

// Client code only ever sees the factory trait.
fn exercise(factory: &dyn AnimalFactory) -> String {
    factory.produce().jump()
}

pub fn run() -> Result<()> {
    println!("{}", "=== Factory Method ===".bold());
    let factories: Vec<Box<dyn AnimalFactory>> = vec![Box::new(DogFactory), Box::new(CatFactory)];
    for factory in &factories {
        println!("{}", exercise(factory.as_ref()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_factory_produces_its_own_animal() {
        assert_eq!(exercise(&DogFactory), "狗在跳");
        assert_eq!(exercise(&CatFactory), "猫在跳");
    }

    #[test]
    fn test_factory_yields_fresh_products() {
        let factory = DogFactory;
        let first = factory.produce();
        let second = factory.produce();
        assert_eq!(first.jump(), second.jump());
    }
}
