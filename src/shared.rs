use std::sync::Arc;

use parking_lot::Mutex;

use crate::graph::PowerGrid;

/// Cloneable handle that serializes every operation on one grid behind a
/// single lock. Each closure observes and leaves the store in a consistent
/// state, so compound operations such as connect stay atomic across threads.
#[derive(Clone, Debug, Default)]
pub struct SharedGrid {
    inner: Arc<Mutex<PowerGrid>>,
}

impl SharedGrid {
    pub fn new(grid: PowerGrid) -> Self {
        Self {
            inner: Arc::new(Mutex::new(grid)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&PowerGrid) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut PowerGrid) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
