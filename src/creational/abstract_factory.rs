//! Abstract Factory
//!
//! Provides an interface for creating a *family* of related products. The
//! associated types on [`PhoneFactory`] tie both products to one factory, so
//! a flagship factory can never hand out a budget phone.
//!
//! Advantages:
//! - Concrete products stay out of client code.
//! - A whole product family is created in one place.
//!
//! Drawbacks:
//! - Adding a new kind of product means changing the factory trait and
//!   every implementation, so it suits families whose shape is stable.

use colored::Colorize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Flagship,
    Budget,
}

pub trait Phone {
    fn model(&self) -> &'static str;
    fn series(&self) -> Series;

    fn call(&self) -> String {
        format!("{} call", self.model())
    }
}

/// Brand marker traits; a factory must produce one of each.
pub trait HuaWei: Phone {}
pub trait XiaoMi: Phone {}

pub struct HuaWeiP40;

impl Phone for HuaWeiP40 {
    fn model(&self) -> &'static str {
        "HuaWeiP40"
    }
    fn series(&self) -> Series {
        Series::Flagship
    }
}
impl HuaWei for HuaWeiP40 {}

pub struct XiaoMi8;

impl Phone for XiaoMi8 {
    fn model(&self) -> &'static str {
        "XiaoMi8"
    }
    fn series(&self) -> Series {
        Series::Flagship
    }
}
impl XiaoMi for XiaoMi8 {}

pub struct HuaWeiEnjoy10;

impl Phone for HuaWeiEnjoy10 {
    fn model(&self) -> &'static str {
        "HuaWeiEnjoy10"
    }
    fn series(&self) -> Series {
        Series::Budget
    }
}
impl HuaWei for HuaWeiEnjoy10 {}

pub struct Redmi9;

impl Phone for Redmi9 {
    fn model(&self) -> &'static str {
        "Redmi9"
    }
    fn series(&self) -> Series {
        Series::Budget
    }
}
impl XiaoMi for Redmi9 {}

pub trait PhoneFactory {
    type HuaWei: HuaWei;
    type XiaoMi: XiaoMi;

    fn huawei(&self) -> Self::HuaWei;
    fn xiaomi(&self) -> Self::XiaoMi;
}

pub struct FlagshipPhoneFactory;

impl PhoneFactory for FlagshipPhoneFactory {
    type HuaWei = HuaWeiP40;
    type XiaoMi = XiaoMi8;

    fn huawei(&self) -> HuaWeiP40 {
        HuaWeiP40
    }
    fn xiaomi(&self) -> XiaoMi8 {
        XiaoMi8
    }
}

pub struct BudgetPhoneFactory;

impl PhoneFactory for BudgetPhoneFactory {
    type HuaWei = HuaWeiEnjoy10;
    type XiaoMi = Redmi9;

    fn huawei(&self) -> HuaWeiEnjoy10 {
        HuaWeiEnjoy10
    }
    fn xiaomi(&self) -> Redmi9 {
        Redmi9
    }
}

/// Exercise one factory without knowing which family it builds.
pub fn make_calls<F: PhoneFactory>(factory: &F) -> Vec<String> {
    let huawei = factory.huawei();
    let xiaomi = factory.xiaomi();
    vec![huawei.call(), xiaomi.call()]
}

pub fn run() -> Result<()> {
    println!("{}", "=== Abstract Factory ===".bold());

    println!("Flagship factory:");
    for line in make_calls(&FlagshipPhoneFactory) {
        println!("  {}", line);
    }

    println!("Budget factory:");
    for line in make_calls(&BudgetPhoneFactory) {
        println!("  {}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family_of<F: PhoneFactory>(factory: &F) -> (Series, Series) {
        (factory.huawei().series(), factory.xiaomi().series())
    }

    #[test]
    fn test_factories_produce_matched_families() {
        assert_eq!(family_of(&FlagshipPhoneFactory), (Series::Flagship, Series::Flagship));
        assert_eq!(family_of(&BudgetPhoneFactory), (Series::Budget, Series::Budget));
    }

    #[test]
    fn test_make_calls() {
        assert_eq!(
            make_calls(&FlagshipPhoneFactory),
            vec!["HuaWeiP40 call".to_string(), "XiaoMi8 call".to_string()]
        );
        assert_eq!(
            make_calls(&BudgetPhoneFactory),
            vec!["HuaWeiEnjoy10 call".to_string(), "Redmi9 call".to_string()]
        );
    }
}
