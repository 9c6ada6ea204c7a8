//! Flyweight
//!
//! Supports large numbers of fine-grained objects by sharing the ones that
//! already exist instead of creating new ones. String interning, connection
//! pools and buffer pools are all flyweights underneath.
//!
//! - Intrinsic state (the key) lives on the shared instance and never
//!   changes.
//! - Extrinsic state ([`UnsharedState`]) is passed into each call and never
//!   stored.
//!
//! Advantages:
//! - Fewer objects, less memory.
//!
//! Drawbacks:
//! - State has to be split into intrinsic and extrinsic, and the shared
//!   registry has to be thread-safe.

use std::sync::Arc;

use colored::Colorize;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::error::Result;

/// Caller-specific data handed to a flyweight for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsharedState {
    info: String,
}

impl UnsharedState {
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }

    pub fn info(&self) -> &str {
        &self.info
    }
}

pub trait Flyweight: Send + Sync {
    fn key(&self) -> &str;
    fn operation(&self, state: &UnsharedState) -> String;
}

#[derive(Debug)]
pub struct ConcreteFlyweight {
    key: String,
}

impl ConcreteFlyweight {
    fn new(key: &str) -> Self {
        debug!(key, "creating flyweight");
        Self { key: key.to_string() }
    }
}

impl Flyweight for ConcreteFlyweight {
    fn key(&self) -> &str {
        &self.key
    }

    fn operation(&self, state: &UnsharedState) -> String {
        format!("具体享元{}被调用，非享元信息是:{}", self.key, state.info())
    }
}

/// Result of a registry lookup.
pub struct Fetched {
    pub flyweight: Arc<dyn Flyweight>,
    /// `true` when this lookup created the instance.
    pub created: bool,
}

#[derive(Default)]
pub struct FlyweightFactory {
    flyweights: DashMap<String, Arc<dyn Flyweight>>,
}

impl FlyweightFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Arc<dyn Flyweight> {
        self.fetch(key).flyweight
    }

    /// Insert-if-absent; concurrent callers asking for the same new key all
    /// end up with the one instance that won the insert.
    pub fn fetch(&self, key: &str) -> Fetched {
        match self.flyweights.entry(key.to_string()) {
            Entry::Occupied(entry) => {
                debug!(key, "reusing flyweight");
                Fetched {
                    flyweight: Arc::clone(entry.get()),
                    created: false,
                }
            }
            Entry::Vacant(entry) => {
                let flyweight: Arc<dyn Flyweight> = Arc::new(ConcreteFlyweight::new(key));
                entry.insert(Arc::clone(&flyweight));
                Fetched {
                    flyweight,
                    created: true,
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.flyweights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flyweights.is_empty()
    }
}

const CALLS: [(&str, &str); 5] = [
    ("a", "第1次调用a。"),
    ("a", "第2次调用a。"),
    ("a", "第3次调用a。"),
    ("b", "第1次调用b。"),
    ("b", "第2次调用b。"),
];

pub fn run() -> Result<()> {
    println!("{}", "=== Flyweight ===".bold());
    let factory = FlyweightFactory::new();

    let mut handles = Vec::with_capacity(CALLS.len());
    for (key, _) in CALLS {
        let fetched = factory.fetch(key);
        if fetched.created {
            println!("  具体享元{}被创建！", key);
        } else {
            println!("  具体享元{}已经存在，被成功获取！", key);
        }
        handles.push(fetched.flyweight);
    }

    for (flyweight, (_, info)) in handles.iter().zip(CALLS) {
        println!("  {}", flyweight.operation(&UnsharedState::new(info)));
    }
    println!("  shared instances: {}", factory.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_key_returns_same_instance() {
        let factory = FlyweightFactory::new();
        let f1 = factory.get("a");
        let f2 = factory.get("a");
        let f3 = factory.get("a");

        assert!(Arc::ptr_eq(&f1, &f2));
        assert!(Arc::ptr_eq(&f2, &f3));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_different_keys_return_different_instances() {
        let factory = FlyweightFactory::new();
        let a = factory.get("a");
        let b = factory.get("b");

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.key(), "a");
        assert_eq!(b.key(), "b");
    }

    #[test]
    fn test_fetch_reports_creation_once() {
        let factory = FlyweightFactory::new();
        assert!(factory.is_empty());
        assert!(factory.fetch("a").created);
        assert!(!factory.fetch("a").created);
    }

    #[test]
    fn test_extrinsic_state_is_not_stored() {
        let factory = FlyweightFactory::new();
        let a = factory.get("a");
        let first = a.operation(&UnsharedState::new("one"));
        let second = a.operation(&UnsharedState::new("two"));

        assert_eq!(first, "具体享元a被调用，非享元信息是:one");
        assert_eq!(second, "具体享元a被调用，非享元信息是:two");
    }

    #[test]
    fn test_concurrent_lookups_share_one_instance() {
        let factory = Arc::new(FlyweightFactory::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let factory = Arc::clone(&factory);
                thread::spawn(move || factory.get("shared"))
            })
            .collect();

        let results: Vec<Arc<dyn Flyweight>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(factory.len(), 1);
    }
}
