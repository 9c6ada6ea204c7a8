//! Decorator
//!
//! Attaches behaviour to an object without changing it: each decorator owns
//! exactly one inner component, forwards both operations to it and adds its
//! own contribution. A more flexible alternative to subclassing.
//!
//! The running example is a fruit salad order. Toppings can be combined
//! freely and the price follows along.
//!
//! - `price()` is the base price plus every layer's increment, so the wrap
//!   order does not change it.
//! - `remark()` is the inner remark followed by the layer's own line, so the
//!   wrap order (innermost first) is the print order.
//!
//! Decorators work both as trait objects (`Box<dyn FruitSalad>`, built up at
//! runtime) and as plain generics (`KiwiDecorator<StandardSalad>`, fixed at
//! compile time).

use colored::Colorize;

use crate::error::Result;

pub trait FruitSalad {
    fn remark(&self) -> String;
    fn price(&self) -> u32;
}

impl FruitSalad for Box<dyn FruitSalad> {
    fn remark(&self) -> String {
        (**self).remark()
    }

    fn price(&self) -> u32 {
        (**self).price()
    }
}

#[derive(Debug, Default)]
pub struct StandardSalad;

impl FruitSalad for StandardSalad {
    fn remark(&self) -> String {
        "水果（标准）\n".to_string()
    }

    fn price(&self) -> u32 {
        9
    }
}

pub struct KiwiDecorator<S = Box<dyn FruitSalad>> {
    inner: S,
}

impl<S: FruitSalad> KiwiDecorator<S> {
    pub const PRICE: u32 = 2;

    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: FruitSalad> FruitSalad for KiwiDecorator<S> {
    fn remark(&self) -> String {
        self.inner.remark() + "加份猕猴桃\n"
    }

    fn price(&self) -> u32 {
        self.inner.price() + Self::PRICE
    }
}

pub struct WatermelonDecorator<S = Box<dyn FruitSalad>> {
    inner: S,
}

impl<S: FruitSalad> WatermelonDecorator<S> {
    pub const PRICE: u32 = 3;

    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: FruitSalad> FruitSalad for WatermelonDecorator<S> {
    fn remark(&self) -> String {
        self.inner.remark() + "加份西瓜\n"
    }

    fn price(&self) -> u32 {
        self.inner.price() + Self::PRICE
    }
}

/// Fluent wrapping: `StandardSalad.with_kiwi().with_watermelon()`.
pub trait SaladExt: FruitSalad + Sized {
    fn with_kiwi(self) -> KiwiDecorator<Self> {
        KiwiDecorator::new(self)
    }

    fn with_watermelon(self) -> WatermelonDecorator<Self> {
        WatermelonDecorator::new(self)
    }
}

impl<S: FruitSalad> SaladExt for S {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topping {
    Kiwi,
    Watermelon,
}

/// Wrap a standard salad in `toppings`, first element innermost.
pub fn order(toppings: &[Topping]) -> Box<dyn FruitSalad> {
    let base: Box<dyn FruitSalad> = Box::new(StandardSalad);
    toppings
        .iter()
        .fold(base, |salad, topping| -> Box<dyn FruitSalad> {
            match topping {
                Topping::Kiwi => Box::new(KiwiDecorator::new(salad)),
                Topping::Watermelon => Box::new(WatermelonDecorator::new(salad)),
            }
        })
}

fn describe(salad: &dyn FruitSalad) -> String {
    format!("{}价格是：{}", salad.remark(), salad.price())
}

pub fn run() -> Result<()> {
    println!("{}", "=== Decorator ===".bold());

    // A salad with two extra kiwi and one extra watermelon.
    let salad = WatermelonDecorator::new(KiwiDecorator::new(KiwiDecorator::new(StandardSalad)));
    println!("{}", describe(&salad));

    println!("{}", "--- Same toppings, built at runtime in another order ---".dimmed());
    let salad = order(&[Topping::Watermelon, Topping::Kiwi, Topping::Kiwi]);
    println!("{}", describe(salad.as_ref()));
    Ok(())
}
