//! Single-slot, auto-dismissing user notifications.
//!
//! `show` replaces whatever is currently displayed and restarts the dismiss
//! countdown; messages never queue.  The pending dismiss task is aborted
//! before a new one is scheduled, and an epoch check guards the window where
//! an aborted task already woke up, so a stale timer can never clear a newer
//! message.  Fire-and-forget: callers never await dismissal.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use gearshare_shared::constants::NOTIFICATION_DURATION_MS;

#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

struct Inner {
    duration: Duration,
    slot: Mutex<Slot>,
}

#[derive(Default)]
struct Slot {
    text: Option<String>,
    epoch: u64,
    shown: u64,
    dismiss: Option<JoinHandle<()>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_duration(Duration::from_millis(NOTIFICATION_DURATION_MS))
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                duration,
                slot: Mutex::new(Slot::default()),
            }),
        }
    }

    /// Display a notification, replacing any active one and restarting the
    /// countdown.  Must be called from within a tokio runtime.
    pub fn show(&self, text: impl Into<String>) {
        let mut slot = lock(&self.inner.slot);
        if let Some(pending) = slot.dismiss.take() {
            pending.abort();
        }
        slot.epoch += 1;
        slot.shown += 1;
        slot.text = Some(text.into());

        let epoch = slot.epoch;
        let inner = Arc::clone(&self.inner);
        slot.dismiss = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.duration).await;
            let mut slot = lock(&inner.slot);
            if slot.epoch == epoch {
                slot.text = None;
                slot.dismiss = None;
            }
        }));
    }

    /// The active notification text, if one is on screen.
    pub fn current(&self) -> Option<String> {
        lock(&self.inner.slot).text.clone()
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.inner.slot).text.is_some()
    }

    /// Total number of notifications shown since startup.
    pub fn shown_count(&self) -> u64 {
        lock(&self.inner.slot).shown
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_show_then_auto_dismiss() {
        let notifier = Notifier::with_duration(Duration::from_millis(10));
        notifier.show("Tool added successfully!");
        assert_eq!(notifier.current().as_deref(), Some("Tool added successfully!"));

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!notifier.is_visible());
        assert_eq!(notifier.shown_count(), 1);
    }

    #[tokio::test]
    async fn test_replacement_restarts_countdown() {
        let notifier = Notifier::with_duration(Duration::from_millis(80));
        notifier.show("first");
        tokio::time::sleep(Duration::from_millis(50)).await;

        notifier.show("second");
        // Past the first message's deadline, but the countdown restarted.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(notifier.current().as_deref(), Some("second"));

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(!notifier.is_visible());
    }

    #[tokio::test]
    async fn test_last_write_wins_immediately() {
        let notifier = Notifier::with_duration(Duration::from_millis(100));
        notifier.show("first");
        notifier.show("second");
        assert_eq!(notifier.current().as_deref(), Some("second"));
        assert_eq!(notifier.shown_count(), 2);
    }
}
