//! Adapter
//!
//! Converts the interface of an existing type into the interface a client
//! expects, so types that were never designed together can cooperate.
//! Useful when an existing type already does the right work but its methods
//! have the wrong shape.
//!
//! Advantages:
//! - The existing type is reused unchanged.
//! - Target and adaptee stay decoupled; new adapters extend the system
//!   without touching either.
//!
//! Drawbacks:
//! - One more layer of indirection to read through.
//!
//! Two flavours:
//! - "Class" adapter: [`ApplePieAdapter`] owns the adaptee and derefs to it,
//!   so the adaptee's own methods stay callable on the adapter. This is the
//!   closest Rust gets to "extends the adaptee, implements the target".
//! - Object adapter: [`ApplePieObjectAdapter`] holds a borrowed adaptee.

use std::ops::Deref;

use colored::Colorize;

use crate::error::Result;

/// The existing type: knows how to add apples, knows nothing about pies.
#[derive(Debug, Default)]
pub struct Apple;

impl Apple {
    pub fn add_apple(&self) -> &'static str {
        "添加点苹果"
    }
}

/// The interface the pie production line expects.
pub trait Pie {
    fn make(&self) -> Vec<String>;
}

const PRODUCTION_LINE: &str = "制作一个苹果派产线";

#[derive(Debug, Default)]
pub struct ApplePieAdapter(Apple);

impl ApplePieAdapter {
    pub fn new(apple: Apple) -> Self {
        Self(apple)
    }
}

impl Deref for ApplePieAdapter {
    type Target = Apple;

    fn deref(&self) -> &Apple {
        &self.0
    }
}

impl Pie for ApplePieAdapter {
    fn make(&self) -> Vec<String> {
        vec![PRODUCTION_LINE.to_string(), self.add_apple().to_string()]
    }
}

#[derive(Debug)]
pub struct ApplePieObjectAdapter<'a> {
    apple: &'a Apple,
}

impl<'a> ApplePieObjectAdapter<'a> {
    pub fn new(apple: &'a Apple) -> Self {
        Self { apple }
    }
}

impl Pie for ApplePieObjectAdapter<'_> {
    fn make(&self) -> Vec<String> {
        vec![PRODUCTION_LINE.to_string(), self.apple.add_apple().to_string()]
    }
}

fn bake(pie: &dyn Pie) {
    for step in pie.make() {
        println!("  {}", step);
    }
}

pub fn run() -> Result<()> {
    println!("{}", "=== Adapter ===".bold());

    println!("Class adapter:");
    let adapter = ApplePieAdapter::new(Apple);
    bake(&adapter);

    println!("Object adapter:");
    let apple = Apple;
    let adapter = ApplePieObjectAdapter::new(&apple);
    bake(&adapter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_adapters_make_the_same_pie() {
        let apple = Apple;
        let by_value = ApplePieAdapter::default();
        let by_ref = ApplePieObjectAdapter::new(&apple);

        assert_eq!(by_value.make(), vec!["制作一个苹果派产线", "添加点苹果"]);
        assert_eq!(by_value.make(), by_ref.make());
    }

    #[test]
    fn test_class_adapter_still_exposes_adaptee() {
        let adapter = ApplePieAdapter::new(Apple);
        assert_eq!(adapter.add_apple(), "添加点苹果");
    }

    #[test]
    fn test_adapters_usable_as_trait_objects() {
        let apple = Apple;
        let pies: Vec<Box<dyn Pie + '_>> = vec![
            Box::new(ApplePieAdapter::default()),
            Box::new(ApplePieObjectAdapter::new(&apple)),
        ];
        assert!(pies.iter().all(|pie| pie.make().len() == 2));
    }
}
