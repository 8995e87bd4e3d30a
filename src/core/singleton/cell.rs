use log::debug;
use parking_lot::Mutex;
use std::convert::Infallible;
use std::sync::{Arc, OnceLock};

/// Process-wide holder for at most one instance of `T`
///
/// Meant to live in a `static`. The instance is built lazily by the first
/// successful `get_or_try_init` and then lives for the rest of the process.
/// Racing first calls are serialized by `init_lock`, so construction runs at
/// most once. A failed construction stores nothing and the next call retries.
pub struct Singleton<T> {
    cell: OnceLock<Arc<T>>,
    init_lock: Mutex<()>,
}

impl<T> Singleton<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init_lock: parking_lot::const_mutex(()),
        }
    }

    /// The registered instance, if one has been built
    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the instance, building it with `init` on first use
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(instance) = self.cell.get() {
            return Ok(Arc::clone(instance));
        }

        let _guard = self.init_lock.lock();
        // Another caller may have won the race while we waited
        if let Some(instance) = self.cell.get() {
            return Ok(Arc::clone(instance));
        }

        let value = init()?;
        debug!(
            "[Singleton] constructed instance of {}",
            std::any::type_name::<T>()
        );
        let instance = self.cell.get_or_init(|| Arc::new(value));
        Ok(Arc::clone(instance))
    }

    /// Infallible form of `get_or_try_init`
    pub fn get_or_init<F>(&self, init: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}
