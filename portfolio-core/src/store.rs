use crate::prefs::PreferenceKey;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Per-origin key-value store that survives reloads.
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read a raw stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: PreferenceKey) -> Result<Option<String>, Self::Error>;

    /// Write a raw value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn write(&self, key: PreferenceKey, value: &str) -> Result<(), Self::Error>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<BTreeMap<&'static str, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with(entries: &[(PreferenceKey, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store
                .values
                .borrow_mut()
                .insert(key.storage_key(), (*value).to_string());
        }
        store
    }

    #[must_use]
    pub fn get(&self, key: PreferenceKey) -> Option<String> {
        self.values.borrow().get(key.storage_key()).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    type Error = Infallible;

    fn read(&self, key: PreferenceKey) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn write(&self, key: PreferenceKey, value: &str) -> Result<(), Self::Error> {
        self.values
            .borrow_mut()
            .insert(key.storage_key(), value.to_string());
        Ok(())
    }
}
