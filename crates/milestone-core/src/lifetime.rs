//! View Lifetime
//!
//! Async work started by a view checks its token before writing state, so a
//! completion that lands after the view is torn down does nothing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owned by the view; ending it (or dropping it) kills every token
#[derive(Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn token(&self) -> LivenessToken {
        LivenessToken {
            alive: Arc::clone(&self.alive),
        }
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewLifetime {
    fn drop(&mut self) {
        self.end();
    }
}

/// Handed to async tasks spawned by the view
#[derive(Debug, Clone)]
pub struct LivenessToken {
    alive: Arc<AtomicBool>,
}

impl LivenessToken {
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Run `f` only while the view is alive
    pub fn run_if_alive<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_alive() {
            Some(f())
        } else {
            log::debug!("view gone, dropping late completion");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_runs_while_alive() {
        let lifetime = ViewLifetime::new();
        let token = lifetime.token();
        assert!(token.is_alive());
        assert_eq!(token.run_if_alive(|| 5), Some(5));
    }

    #[test]
    fn test_end_kills_all_tokens() {
        let lifetime = ViewLifetime::new();
        let first = lifetime.token();
        let second = first.clone();
        lifetime.end();

        let mut ran = false;
        assert_eq!(first.run_if_alive(|| ran = true), None);
        assert!(!ran);
        assert!(!second.is_alive());
    }

    #[test]
    fn test_drop_ends_lifetime() {
        let token = {
            let lifetime = ViewLifetime::new();
            lifetime.token()
        };
        assert!(!token.is_alive());
    }
}
