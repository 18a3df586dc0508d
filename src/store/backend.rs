use std::cell::RefCell;

use gloo_storage::{Storage, errors::StorageError};

use super::PersistedState;
use crate::models::error::AppError;

/// Durable storage for the persisted slice of the store.
pub trait StoreBackend {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PersistedState>, AppError>;

    fn save(&self, state: &PersistedState) -> Result<(), AppError>;
}

/// Browser `localStorage` under a fixed key.
#[derive(Debug, Clone)]
pub struct LocalStorageBackend {
    key: &'static str,
}

impl LocalStorageBackend {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl StoreBackend for LocalStorageBackend {
    fn load(&self) -> Result<Option<PersistedState>, AppError> {
        match gloo_storage::LocalStorage::get(self.key) {
            Ok(state) => Ok(Some(state)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(AppError::StorageError(e.to_string())),
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), AppError> {
        gloo_storage::LocalStorage::set(self.key, state)
            .map_err(|e| AppError::StorageError(e.to_string()))
    }
}

/// Keeps the serialized state in memory. Used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    raw: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the backend with raw JSON, as if written by an earlier session.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Result<Option<PersistedState>, AppError> {
        self.raw
            .borrow()
            .as_deref()
            .map(serde_json::from_str::<PersistedState>)
            .transpose()
            .map_err(|e| AppError::StorageError(e.to_string()))
    }

    fn save(&self, state: &PersistedState) -> Result<(), AppError> {
        let raw = serde_json::to_string(state).map_err(|e| AppError::StorageError(e.to_string()))?;
        *self.raw.borrow_mut() = Some(raw);
        Ok(())
    }
}
