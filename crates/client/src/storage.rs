//! Durable cart storage.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use heirloom::cart::{
    Cart,
    store::{CartStore, SubscriptionKey},
};
use mockall::automock;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading or saving a cart.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("cart file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,

        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The stored cart isn't valid JSON or breaks cart rules
    #[error("cart file {path} is invalid: {source}")]
    Decode {
        /// File that failed
        path: PathBuf,

        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The cart couldn't be encoded
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Somewhere a cart survives between sessions.
#[automock]
pub trait CartStorage: Send + Sync {
    /// Load the stored cart, or an empty one if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if stored data can't be read or decoded.
    fn load(&self) -> Result<Cart, StorageError>;

    /// Replace the stored cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart can't be written.
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

/// Stores the cart as pretty-printed JSON in a file.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    /// Store the cart at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CartStorage for FileCartStorage {
    fn load(&self) -> Result<Cart, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored cart, starting empty");

                return Ok(Cart::new());
            }
            Err(error) => return Err(self.io_error(error)),
        };

        serde_json::from_str(&contents).map_err(|source| StorageError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(cart)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|error| self.io_error(error))?;
        }

        let staging = self.path.with_extension("json.tmp");

        fs::write(&staging, contents).map_err(|error| self.io_error(error))?;
        fs::rename(&staging, &self.path).map_err(|error| self.io_error(error))
    }
}

/// Load a store from `storage` and keep `storage` up to date with every change.
///
/// # Errors
///
/// Returns an error if the stored cart can't be loaded.
pub fn open_store(
    storage: Arc<dyn CartStorage>,
) -> Result<(CartStore, SubscriptionKey), StorageError> {
    let mut store = CartStore::new(storage.load()?);
    let key = persist_changes(&mut store, storage);

    Ok((store, key))
}

/// Save the cart to `storage` after every change to `store`.
///
/// Save failures are logged and never reach the store.
pub fn persist_changes(store: &mut CartStore, storage: Arc<dyn CartStorage>) -> SubscriptionKey {
    store.subscribe(move |cart| {
        if let Err(error) = storage.save(cart) {
            warn!("failed to persist cart: {error}");
        }
    })
}

#[cfg(test)]
mod tests {
    use heirloom::cart::store::CartCommand;
    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::orders::tests::{checkout_cart, product};

    use super::*;

    #[test]
    fn missing_file_loads_empty_cart() -> TestResult {
        let dir = TempDir::new()?;
        let storage = FileCartStorage::new(dir.path().join("cart.json"));

        assert!(storage.load()?.is_empty());

        Ok(())
    }

    #[test]
    fn saved_cart_reloads_identically() -> TestResult {
        let dir = TempDir::new()?;
        let storage = FileCartStorage::new(dir.path().join("nested").join("cart.json"));
        let cart = checkout_cart()?;

        storage.save(&cart)?;

        assert_eq!(storage.load()?, cart);

        Ok(())
    }

    #[test]
    fn corrupt_file_is_a_decode_error() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("cart.json");

        fs::write(&path, "{ not json")?;

        let result = FileCartStorage::new(path).load();

        assert!(
            matches!(result, Err(StorageError::Decode { .. })),
            "expected decode error, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn store_changes_are_persisted() -> TestResult {
        let dir = TempDir::new()?;
        let storage = Arc::new(FileCartStorage::new(dir.path().join("cart.json")));

        let (mut store, _key) = open_store(Arc::clone(&storage) as Arc<dyn CartStorage>)?;

        let _previous = store.apply(CartCommand::Add {
            product: product("Silk Scarf", 3_500),
            quantity: 2,
        })?;

        let reloaded = storage.load()?;

        assert_eq!(reloaded.total(), 7_000);
        assert_eq!(&reloaded, store.cart());

        Ok(())
    }

    #[test]
    fn save_failures_do_not_reach_the_store() -> TestResult {
        let mut storage = MockCartStorage::new();

        storage.expect_save().once().returning(|_| {
            Err(StorageError::Io {
                path: PathBuf::from("cart.json"),
                source: io::Error::other("disk full"),
            })
        });

        let mut store = CartStore::default();
        persist_changes(&mut store, Arc::new(storage));

        let _previous = store.apply(CartCommand::Add {
            product: product("Silk Scarf", 3_500),
            quantity: 1,
        })?;

        assert_eq!(store.total(), 3_500);

        Ok(())
    }
}
