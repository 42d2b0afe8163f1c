//! Authentication Signal
//!
//! Broadcasts "is authenticated" to anything that wants to watch it.

use tokio::sync::watch;

pub struct AuthSignal {
    tx: watch::Sender<bool>,
}

impl Default for AuthSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub fn get(&self) -> bool {
        *self.tx.borrow()
    }

    /// Publish a new value; returns true if it changed.
    pub fn set(&self, authenticated: bool) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == authenticated {
                return false;
            }
            *current = authenticated;
            true
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transitions_are_published() {
        let signal = AuthSignal::new();
        let mut rx = signal.subscribe();

        assert!(!signal.set(false));
        assert!(!rx.has_changed().unwrap());

        assert!(signal.set(true));
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update());
        assert!(signal.get());
    }
}
