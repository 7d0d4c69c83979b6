//! Screen lifetimes.
//!
//! Screen loads run through a [`LifetimeToken`] observing a
//! [`ScreenLifetime`]. Once the lifetime ends, late results are dropped
//! instead of being applied. The server holds one lifetime for all visits
//! and ends it on shutdown; a visit whose request is dropped simply drops
//! its load.

use std::future::Future;
use tokio::sync::watch;

/// Lifetime of the screens being served. Ends when dropped or on [`ScreenLifetime::end`].
#[derive(Debug)]
pub struct ScreenLifetime {
    ended: watch::Sender<bool>,
}

/// Cheap handle observing a [`ScreenLifetime`].
#[derive(Debug, Clone)]
pub struct LifetimeToken {
    ended: watch::Receiver<bool>,
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenLifetime {
    pub fn new() -> Self {
        let (ended, _) = watch::channel(false);
        Self { ended }
    }

    pub fn token(&self) -> LifetimeToken {
        LifetimeToken {
            ended: self.ended.subscribe(),
        }
    }

    /// End the lifetime. Pending and future loads report cancellation.
    pub fn end(&self) {
        self.ended.send_replace(true);
    }
}

impl LifetimeToken {
    pub fn is_ended(&self) -> bool {
        *self.ended.borrow() || self.ended.has_changed().is_err()
    }

    /// Resolves once the lifetime has ended.
    pub async fn ended(&mut self) {
        while !*self.ended.borrow_and_update() {
            if self.ended.changed().await.is_err() {
                return;
            }
        }
    }

    /// Run `work` for the visit. `None` means the visit ended first.
    pub async fn run<F: Future>(&self, work: F) -> Option<F::Output> {
        if self.is_ended() {
            return None;
        }

        let mut token = self.clone();
        tokio::select! {
            biased;
            _ = token.ended() => None,
            output = work => Some(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_work_completes_while_alive() {
        let lifetime = ScreenLifetime::new();
        let token = lifetime.token();

        assert_eq!(token.run(async { 7 }).await, Some(7));
        assert!(!token.is_ended());
    }

    #[tokio::test]
    async fn test_drop_discards_pending_work() {
        let lifetime = ScreenLifetime::new();
        let token = lifetime.token();

        let pending = tokio::spawn(async move {
            token
                .run(async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                })
                .await
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(lifetime);

        assert_eq!(pending.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_explicit_end_is_observed() {
        let lifetime = ScreenLifetime::new();
        let token = lifetime.token();
        lifetime.end();

        assert!(token.is_ended());
        assert_eq!(token.run(async { 1 }).await, None);
        assert!(lifetime.token().is_ended());
    }
}
