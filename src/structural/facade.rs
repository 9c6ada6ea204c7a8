//! Facade
//!
//! One simple entry point in front of a group of subsystems. Ordering a
//! takeaway touches three services (order, payment, delivery), but the
//! client only calls [`TakeawayService::take_order`].
//!
//! Advantages:
//! - Callers no longer need to know the subsystems or their order.
//! - Lower coupling and clearer layering between client and subsystems.
//!
//! Drawbacks:
//! - Growing a subsystem means touching the facade as well.
//!
//! Steps run in a fixed order and the first failure stops the sequence; no
//! completed step is rolled back.

use colored::Colorize;
use tracing::{debug, warn};

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Takeaway {
    name: String,
}

impl Takeaway {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub trait OrderService {
    fn place_order(&self, takeaway: &Takeaway) -> Result<String>;
}

pub trait PayService {
    fn pay(&self, takeaway: &Takeaway) -> Result<String>;
}

pub trait DeliveryService {
    fn deliver(&self, takeaway: &Takeaway) -> String;
}

#[derive(Debug, Default)]
pub struct KitchenOrderService;

impl OrderService for KitchenOrderService {
    fn place_order(&self, takeaway: &Takeaway) -> Result<String> {
        Ok(format!("{}下单成功", takeaway.name()))
    }
}

#[derive(Debug, Default)]
pub struct WalletPayService;

impl PayService for WalletPayService {
    fn pay(&self, takeaway: &Takeaway) -> Result<String> {
        Ok(format!("商品{}支付成功", takeaway.name()))
    }
}

#[derive(Debug, Default)]
pub struct RiderDeliveryService;

impl DeliveryService for RiderDeliveryService {
    fn deliver(&self, takeaway: &Takeaway) -> String {
        format!("{}已由骑手XX接单，订单派送中", takeaway.name())
    }
}

#[derive(Debug, Default)]
pub struct TakeawayService<
    O = KitchenOrderService,
    P = WalletPayService,
    D = RiderDeliveryService,
> {
    orders: O,
    payments: P,
    delivery: D,
}

impl<O: OrderService, P: PayService, D: DeliveryService> TakeawayService<O, P, D> {
    pub fn new(orders: O, payments: P, delivery: D) -> Self {
        Self {
            orders,
            payments,
            delivery,
        }
    }

    /// Order, pay, deliver. Returns each step's message in order.
    pub fn take_order(&self, takeaway: &Takeaway) -> Result<Vec<String>> {
        let mut steps = Vec::with_capacity(3);

        steps.push(self.orders.place_order(takeaway).inspect_err(|err| {
            warn!(item = takeaway.name(), %err, "order step failed");
        })?);
        debug!(item = takeaway.name(), "order placed");

        steps.push(self.payments.pay(takeaway).inspect_err(|err| {
            warn!(item = takeaway.name(), %err, "payment step failed");
        })?);
        debug!(item = takeaway.name(), "payment taken");

        steps.push(self.delivery.deliver(takeaway));
        Ok(steps)
    }
}

/// Order service that refuses everything; shows the short-circuit.
#[derive(Debug, Default)]
pub struct ClosedKitchen;

impl OrderService for ClosedKitchen {
    fn place_order(&self, takeaway: &Takeaway) -> Result<String> {
        Err(PatternError::order_rejected(takeaway.name()))
    }
}

pub fn run() -> Result<()> {
    println!("{}", "=== Facade ===".bold());
    let takeaway = Takeaway::new("泡椒");

    let service: TakeawayService = TakeawayService::default();
    for step in service.take_order(&takeaway)? {
        println!("  {}", step);
    }

    println!("{}", "--- When the kitchen is closed ---".dimmed());
    let closed = TakeawayService::new(ClosedKitchen, WalletPayService, RiderDeliveryService);
    match closed.take_order(&takeaway) {
        Ok(steps) => steps.iter().for_each(|step| println!("  {}", step)),
        Err(err) => println!("  {} (payment and delivery skipped)", err),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingOrders {
        calls: Cell<usize>,
        reject: bool,
    }

    impl OrderService for CountingOrders {
        fn place_order(&self, takeaway: &Takeaway) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            if self.reject {
                Err(PatternError::order_rejected(takeaway.name()))
            } else {
                Ok("ordered".to_string())
            }
        }
    }

    #[derive(Default)]
    struct CountingPayments {
        calls: Cell<usize>,
        decline: bool,
    }

    impl PayService for CountingPayments {
        fn pay(&self, takeaway: &Takeaway) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            if self.decline {
                Err(PatternError::payment_declined(takeaway.name()))
            } else {
                Ok("paid".to_string())
            }
        }
    }

    #[derive(Default)]
    struct CountingDelivery {
        calls: Cell<usize>,
    }

    impl DeliveryService for CountingDelivery {
        fn deliver(&self, _takeaway: &Takeaway) -> String {
            self.calls.set(self.calls.get() + 1);
            "delivered".to_string()
        }
    }

    #[test]
    fn test_all_steps_run_in_order() {
        let service: TakeawayService = TakeawayService::default();
        let steps = service.take_order(&Takeaway::new("泡椒")).unwrap();
        assert_eq!(
            steps,
            vec!["泡椒下单成功", "商品泡椒支付成功", "泡椒已由骑手XX接单，订单派送中"]
        );
    }

    #[test]
    fn test_failed_order_skips_payment_and_delivery() {
        let service = TakeawayService::new(
            CountingOrders { reject: true, ..Default::default() },
            CountingPayments::default(),
            CountingDelivery::default(),
        );

        let err = service.take_order(&Takeaway::new("泡椒")).unwrap_err();
        assert!(matches!(err, PatternError::OrderRejected { .. }));
        assert_eq!(service.orders.calls.get(), 1);
        assert_eq!(service.payments.calls.get(), 0);
        assert_eq!(service.delivery.calls.get(), 0);
    }

    #[test]
    fn test_declined_payment_skips_delivery() {
        let service = TakeawayService::new(
            CountingOrders::default(),
            CountingPayments { decline: true, ..Default::default() },
            CountingDelivery::default(),
        );

        let err = service.take_order(&Takeaway::new("泡椒")).unwrap_err();
        assert!(matches!(err, PatternError::PaymentDeclined { ref item } if item == "泡椒"));
        assert_eq!(service.orders.calls.get(), 1);
        assert_eq!(service.payments.calls.get(), 1);
        assert_eq!(service.delivery.calls.get(), 0);
    }

    #[test]
    fn test_success_calls_each_service_once() {
        let service = TakeawayService::new(
            CountingOrders::default(),
            CountingPayments::default(),
            CountingDelivery::default(),
        );
        let steps = service.take_order(&Takeaway::new("x")).unwrap();
        assert_eq!(steps, vec!["ordered", "paid", "delivered"]);
        assert_eq!(service.delivery.calls.get(), 1);
    }
}
