use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::CartError;
use crate::item::LineItem;

/// Persistent slot holding the live cart.
pub const CART_SLOT: &str = "cart";

/// Persistent slot holding the frozen checkout snapshot. Written once per
/// checkout, consumed by the external invoice page, never read back here.
pub const INVOICE_SLOT: &str = "invoiceCart";

/// Key-value string storage, the shape of browser localStorage.
///
/// The contract moves raw strings; JSON encoding is [`CartStore`]'s job,
/// which keeps implementations free of any serde dependency. Nothing here
/// locks or versions: two stores sharing a backend race, and the last
/// `save` wins.
pub trait Persistence {
    /// Write a string value under `key`, replacing any previous value.
    fn save(&mut self, key: &str, data: &str) -> Result<(), CartError>;

    /// Read the value stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Option<String>;

    /// Drop `key` from storage. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), CartError>;
}

/// In-memory storage for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for MemoryStore {
    fn save(&mut self, key: &str, data: &str) -> Result<(), CartError> {
        self.slots.insert(key.to_string(), data.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn remove(&mut self, key: &str) -> Result<(), CartError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// One file per key under a directory, standing in for a localStorage
/// origin. `load` treats an unreadable file the same as an absent one; only
/// writes surface errors.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CartError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| CartError::Storage {
            slot: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Persistence for FileStore {
    fn save(&mut self, key: &str, data: &str) -> Result<(), CartError> {
        fs::write(self.slot_path(key), data).map_err(|source| CartError::Storage {
            slot: key.to_string(),
            source,
        })
    }

    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn remove(&mut self, key: &str) -> Result<(), CartError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CartError::Storage {
                slot: key.to_string(),
                source,
            }),
        }
    }
}

/// Typed shim over a [`Persistence`] backend: owns the slot names and the
/// JSON encoding of the cart.
#[derive(Debug)]
pub struct CartStore<P: Persistence> {
    backend: P,
}

impl<P: Persistence> CartStore<P> {
    pub fn new(backend: P) -> Self {
        Self { backend }
    }

    /// Deserialize the live cart slot.
    ///
    /// An absent slot and malformed JSON both yield an empty cart. Corruption
    /// is never surfaced to the shopper; the next save overwrites it.
    pub fn load_cart(&self) -> Vec<LineItem> {
        self.backend
            .load(CART_SLOT)
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Serialize and overwrite the live cart slot.
    pub fn save_cart(&mut self, items: &[LineItem]) -> Result<(), CartError> {
        self.backend.save(CART_SLOT, &encode(items))
    }

    /// Freeze the checkout snapshot for the invoice page.
    pub fn write_invoice_snapshot(&mut self, items: &[LineItem]) -> Result<(), CartError> {
        self.backend.save(INVOICE_SLOT, &encode(items))
    }

    /// Access to the backend, for callers that manage extra slots.
    pub fn backend(&self) -> &P {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut P {
        &mut self.backend
    }
}

fn encode(items: &[LineItem]) -> String {
    // LineItem serialization has no fallible shapes; the fallback is for the
    // trait bound, not an expected path.
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
