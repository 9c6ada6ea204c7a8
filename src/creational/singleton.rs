//! Singleton
//!
//! A type with exactly one instance and a global access point to it.
//!
//! Advantages:
//! - One instance in memory, no duplicated resources.
//! - A single, strictly controlled access point.
//!
//! Drawbacks:
//! - No interface to program against, so it is hard to extend or to swap
//!   out in tests.
//!
//! Four variants follow, each enforcing "every access path yields the
//! canonical instance" differently:
//!
//! - [`LazySingleton`]: double-checked locking. Check, lock, re-check,
//!   construct.
//! - [`HungrySingleton`]: built at compile time, no laziness at all.
//! - [`HolderSingleton`]: lazily built on first touch of a nested holder.
//! - [`EnumSingleton`]: a one-variant enum; there is nothing to duplicate.
//!
//! None of the types has a public constructor and all fields are private, so
//! outside code cannot conjure a second instance. Deserialization is the one
//! remaining back door; [`HungrySingleton`] closes it by resolving whatever
//! was read back to the canonical instance.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};
use std::thread;

use colored::Colorize;
use crossbeam::channel;
use crossbeam::sync::WaitGroup;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// Number of threads racing for the lazy instance in the demo.
pub const RACING_THREADS: usize = 10;

// ============================================================================
// Lazy: double-checked locking
// ============================================================================

#[derive(Debug)]
pub struct LazySingleton {
    serial: usize,
}

static LAZY_INSTANCE: AtomicPtr<LazySingleton> = AtomicPtr::new(ptr::null_mut());
static LAZY_INIT_LOCK: Mutex<()> = Mutex::new(());
static LAZY_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl LazySingleton {
    fn new() -> Self {
        let serial = LAZY_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(serial, "constructing LazySingleton");
        Self { serial }
    }

    pub fn instance() -> &'static LazySingleton {
        let current = LAZY_INSTANCE.load(Ordering::Acquire);
        if !current.is_null() {
            // SAFETY: the pointer was published by `Box::into_raw` below and is never freed.
            return unsafe { &*current };
        }

        let _guard = LAZY_INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have finished construction while we waited.
        let current = LAZY_INSTANCE.load(Ordering::Acquire);
        if !current.is_null() {
            // SAFETY: as above.
            return unsafe { &*current };
        }

        let created = Box::into_raw(Box::new(LazySingleton::new()));
        LAZY_INSTANCE.store(created, Ordering::Release);
        // SAFETY: freshly leaked, lives for the rest of the process.
        unsafe { &*created }
    }

    /// Which construction produced this instance; always 1.
    pub fn serial(&self) -> usize {
        self.serial
    }

    /// How many times the constructor has run in this process.
    pub fn constructions() -> usize {
        LAZY_CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

/// Spawn `callers` threads that all ask for the lazy instance at once.
///
/// A countdown barrier holds the caller until every thread has reported.
/// Returns each thread's name with the instance it observed.
pub fn race_for_instance(callers: usize) -> Result<Vec<(String, &'static LazySingleton)>> {
    let latch = WaitGroup::new();
    let (tx, rx) = channel::unbounded();

    for i in 0..callers {
        let latch = latch.clone();
        let tx = tx.clone();
        thread::Builder::new()
            .name(format!("Thread-{}", i))
            .spawn(move || {
                let instance = LazySingleton::instance();
                let name = thread::current().name().unwrap_or("unnamed").to_string();
                debug!(caller = %name, serial = instance.serial(), "observed instance");
                let _ = tx.send((name, instance));
                drop(latch);
            })?;
    }
    drop(tx);

    latch.wait();
    Ok(rx.iter().collect())
}

// ============================================================================
// Eager: initialised before anyone asks
// ============================================================================

/// Lives in a `static`, so it exists before `main` runs. Never wasted work
/// here, but in general an eager singleton is paid for even when unused.
#[derive(Debug, Serialize)]
pub struct HungrySingleton {
    label: &'static str,
}

static HUNGRY_INSTANCE: HungrySingleton = HungrySingleton { label: "hungry" };

impl HungrySingleton {
    pub fn instance() -> &'static HungrySingleton {
        &HUNGRY_INSTANCE
    }

    pub fn label(&self) -> &str {
        self.label
    }
}

#[derive(Deserialize)]
struct HungryWire {
    label: String,
}

// Deserializing never builds a second instance: the wire data is read and
// discarded, and the canonical reference comes back.
impl<'de> Deserialize<'de> for &'static HungrySingleton {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = HungryWire::deserialize(deserializer)?;
        debug!(label = %wire.label, "resolving deserialized HungrySingleton");
        Ok(HungrySingleton::instance())
    }
}

/// Write the eager singleton to `path`, read it back, and report whether the
/// result is the very same instance.
pub fn serialization_round_trip(path: &Path) -> Result<bool> {
    let original = HungrySingleton::instance();

    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, original)?;
    writer.flush()?;

    let reader = BufReader::new(File::open(path)?);
    let restored: &'static HungrySingleton = bincode::deserialize_from(reader)?;
    Ok(ptr::eq(original, restored))
}

// ============================================================================
// Holder: lazy, initialised on first access to a nested static
// ============================================================================

#[derive(Debug)]
pub struct HolderSingleton {
    label: String,
}

static HOLDER_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl HolderSingleton {
    fn new() -> Self {
        HOLDER_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        debug!("constructing HolderSingleton");
        Self {
            label: "holder".to_string(),
        }
    }

    pub fn instance() -> &'static HolderSingleton {
        &holder::INSTANCE
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn constructions() -> usize {
        HOLDER_CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

mod holder {
    use super::HolderSingleton;
    use lazy_static::lazy_static;

    lazy_static! {
        pub(super) static ref INSTANCE: HolderSingleton = HolderSingleton::new();
    }
}

// ============================================================================
// Enum: a single variant is a single instance
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnumSingleton {
    Instance,
}

static ENUM_DATA: RwLock<Option<String>> = RwLock::new(None);

impl EnumSingleton {
    pub fn instance() -> EnumSingleton {
        EnumSingleton::Instance
    }

    /// Data is process-wide, so every copy of the variant sees the same value.
    pub fn data(&self) -> Option<String> {
        ENUM_DATA
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_data(&self, data: impl Into<String>) {
        *ENUM_DATA.write().unwrap_or_else(PoisonError::into_inner) = Some(data.into());
    }
}

// Unique per call so concurrent demo runs never share a file.
fn scratch_path() -> PathBuf {
    static SCRATCH_SEQ: AtomicUsize = AtomicUsize::new(0);
    let seq = SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("design-model-singleton-{}-{}.bin", std::process::id(), seq))
}

pub fn run() -> Result<()> {
    println!("{}", "=== Singleton ===".bold());

    println!("{}", "--- Double-checked locking under contention ---".dimmed());
    let observed = race_for_instance(RACING_THREADS)?;
    for (name, instance) in &observed {
        println!("  {}: LazySingleton@{:p}", name, *instance);
    }
    let first = LazySingleton::instance();
    let all_same = observed.iter().all(|(_, instance)| ptr::eq(*instance, first));
    println!("  all {} callers saw one instance: {}", observed.len(), all_same);
    println!("  constructions: {}", LazySingleton::constructions());

    println!("{}", "--- Eager and holder variants ---".dimmed());
    println!(
        "  HungrySingleton same instance: {}",
        ptr::eq(HungrySingleton::instance(), HungrySingleton::instance())
    );
    println!(
        "  HolderSingleton same instance: {} (constructions: {})",
        ptr::eq(HolderSingleton::instance(), HolderSingleton::instance()),
        HolderSingleton::constructions()
    );

    println!("{}", "--- Enum singleton ---".dimmed());
    let instance = EnumSingleton::instance();
    instance.set_data("shared payload");
    let bytes = bincode::serialize(&instance)?;
    let restored: EnumSingleton = bincode::deserialize(&bytes)?;
    println!("  {:?} == {:?}: {}", instance, restored, instance == restored);
    println!("  data seen through the restored value: {:?}", restored.data());

    println!("{}", "--- Deserialization resolves to the canonical instance ---".dimmed());
    let path = scratch_path();
    let same = serialization_round_trip(&path)?;
    fs::remove_file(&path)?;
    info!(path = %path.display(), same, "serialization round trip finished");
    println!("  {} read back from disk is the same instance: {}", HungrySingleton::instance().label(), same);
    Ok(())
}
