use std::sync::{PoisonError, RwLock};

use pd_core::RequestContext;

/// Holder of the one live [`RequestContext`] of this process.
///
/// Overwritten by every connect; readers always get the latest snapshot.
#[derive(Debug, Default)]
pub struct RequestContextStore {
    current: RwLock<RequestContext>,
}

impl RequestContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held context, returning the one it displaced.
    pub fn replace(&self, context: RequestContext) -> RequestContext {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, context)
    }

    pub fn current(&self) -> RequestContext {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
