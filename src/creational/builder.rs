//! Builder
//!
//! Separates assembling a value from the value itself: the same sequence of
//! setter calls can produce differently configured products. Each setter
//! consumes the builder and hands it back, and `build()` produces a snapshot
//! that can only be read.
//!
//! Suits types with many fields, or when construction should be kept apart
//! from use. The cost is an extra builder type that has to follow every
//! change to the product.
//!
//! No field is required; anything not set stays at its zero value.

use std::fmt;

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Product {
    name: String,
    price: f64,
    address: String,
}

impl Product {
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{name='{}', price='{}', address='{}'}}",
            self.name, self.price, self.address
        )
    }
}

#[derive(Debug, Default)]
pub struct ProductBuilder {
    name: String,
    price: f64,
    address: String,
}

impl ProductBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn build(self) -> Product {
        Product {
            name: self.name,
            price: self.price,
            address: self.address,
        }
    }
}

pub fn run() -> Result<()> {
    println!("{}", "=== Builder ===".bold());
    let product = Product::builder()
        .name("苹果")
        .price(5.98)
        .address("深圳")
        .build();
    println!("{}", product);

    let partial = Product::builder().name("香蕉").build();
    println!("{}", partial);

    match serde_json::to_string(&product) {
        Ok(json) => println!("as JSON: {}", json),
        Err(err) => println!("as JSON: <{}>", err),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_builder_sets_all_fields() {
        let product = Product::builder()
            .name("苹果")
            .price(5.98)
            .address("深圳")
            .build();

        assert_eq!(product.name(), "苹果");
        assert_eq!(product.price(), 5.98);
        assert_eq!(product.address(), "深圳");
    }

    #[test]
    fn test_omitted_setters_leave_zero_values() {
        let product = Product::builder().price(1.5).build();
        assert_eq!(product.name(), "");
        assert_eq!(product.address(), "");
        assert_eq!(product, Product { price: 1.5, ..Product::default() });
    }

    #[test]
    fn test_display_format() {
        let product = Product::builder().name("苹果").price(5.98).address("深圳").build();
        assert_eq!(
            product.to_string(),
            "Product{name='苹果', price='5.98', address='深圳'}"
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let product = Product::builder().name("a").price(2.0).address("b").build();
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"name":"a","price":2.0,"address":"b"}"#);
    }

    proptest! {
        #[test]
        fn test_setter_order_does_not_matter(
            name in "[a-z]{0,8}",
            price in 0.0f64..1000.0,
            address in "[a-z]{0,8}",
        ) {
            let forward = Product::builder()
                .name(name.clone())
                .price(price)
                .address(address.clone())
                .build();
            let backward = Product::builder()
                .address(address.clone())
                .price(price)
                .name(name.clone())
                .build();

            prop_assert_eq!(&forward, &backward);
            prop_assert_eq!(forward.name(), name.as_str());
            prop_assert_eq!(forward.address(), address.as_str());
        }
    }
}
