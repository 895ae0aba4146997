//! Liveness token for async completions.
//!
//! A view retires its token when it is unmounted; results that arrive
//! afterwards are dropped instead of being applied to dead state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the owning view as gone. Shared by every clone.
    pub fn retire(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Run `apply` only while the view is alive
    pub fn guard<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retire_is_shared_by_clones() {
        let token = Liveness::new();
        let handle = token.clone();
        assert!(handle.is_alive());

        let mut applied = 0;
        assert!(handle.guard(|| applied += 1));

        token.retire();
        assert!(!handle.is_alive());
        assert!(!handle.guard(|| applied += 1));
        assert_eq!(applied, 1);
    }
}
