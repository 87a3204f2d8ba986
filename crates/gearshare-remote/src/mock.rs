//! Fixture-backed mock backend.
//!
//! Every call sleeps for the configured latency and then succeeds, unless a
//! failure budget was armed with [`MockRemote::fail_next_calls`], in which
//! case the next N calls reject before touching any data.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tracing::debug;

use gearshare_shared::constants::{MOCK_LATENCY_MS, MOCK_LOCATION_LATENCY_MS};
use gearshare_shared::placeholder;
use gearshare_shared::{ItemId, UserRef};
use gearshare_store::{BorrowRequest, GearItem, ItemPatch, Listing, Message, NewItem};

use crate::api::RemoteApi;
use crate::error::RemoteError;
use crate::fixtures;

pub struct MockRemote {
    latency: Duration,
    location_latency: Duration,
    fail_budget: AtomicUsize,
}

impl MockRemote {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(MOCK_LATENCY_MS),
            location_latency: Duration::from_millis(MOCK_LOCATION_LATENCY_MS),
            fail_budget: AtomicUsize::new(0),
        }
    }

    /// Same mock with both latencies overridden.  Tests use `Duration::ZERO`.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            location_latency: latency,
            fail_budget: AtomicUsize::new(0),
        }
    }

    /// Arm the mock to reject the next `n` calls.
    pub fn fail_next_calls(&self, n: usize) {
        self.fail_budget.store(n, Ordering::SeqCst);
    }

    async fn round_trip(&self, latency: Duration) -> Result<(), RemoteError> {
        tokio::time::sleep(latency).await;
        let failed = self
            .fail_budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            debug!("Mock backend rejecting call (armed failure)");
            return Err(RemoteError::Rejected("simulated backend failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockRemote {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteApi for MockRemote {
    async fn fetch_available_gear(&self) -> Result<Vec<Listing>, RemoteError> {
        self.round_trip(self.latency).await?;
        Ok(fixtures::available_gear())
    }

    async fn fetch_my_gear(&self) -> Result<Vec<GearItem>, RemoteError> {
        self.round_trip(self.latency).await?;
        Ok(fixtures::my_gear())
    }

    async fn fetch_messages(&self) -> Result<Vec<Message>, RemoteError> {
        self.round_trip(self.latency).await?;
        Ok(fixtures::messages())
    }

    async fn create_item(&self, draft: NewItem) -> Result<GearItem, RemoteError> {
        self.round_trip(self.latency).await?;
        let image = match draft.image {
            Some(url) if !url.trim().is_empty() => url,
            _ => placeholder::tool_image(&draft.name),
        };
        Ok(GearItem {
            id: ItemId::new(),
            name: draft.name,
            description: draft.description,
            image,
            condition: draft.condition,
            privacy: draft.privacy,
            borrower: None,
        })
    }

    async fn update_item(&self, _id: ItemId, _patch: &ItemPatch) -> Result<(), RemoteError> {
        self.round_trip(self.latency).await
    }

    async fn delete_item(&self, _id: ItemId) -> Result<(), RemoteError> {
        self.round_trip(self.latency).await
    }

    async fn send_borrow_request(
        &self,
        _item_id: ItemId,
        _request: &BorrowRequest,
    ) -> Result<(), RemoteError> {
        self.round_trip(self.latency).await
    }

    async fn send_message(&self, _recipient: &UserRef, _text: &str) -> Result<(), RemoteError> {
        self.round_trip(self.latency).await
    }

    async fn update_location(&self, location: &str) -> Result<String, RemoteError> {
        self.round_trip(self.location_latency).await?;
        Ok(location.trim().to_string())
    }

    async fn location_suggestions(&self, query: &str) -> Result<Vec<String>, RemoteError> {
        self.round_trip(self.latency).await?;
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(fixtures::LOCATION_SUGGESTIONS
            .iter()
            .filter(|s| s.to_lowercase().contains(&needle))
            .map(|s| s.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gearshare_shared::{Condition, Privacy};

    fn mock() -> MockRemote {
        MockRemote::with_latency(Duration::ZERO)
    }

    fn draft(image: Option<&str>) -> NewItem {
        NewItem {
            name: "Tile Cutter".to_string(),
            description: "Manual tile cutter, 600mm".to_string(),
            condition: Condition::Good,
            privacy: Privacy::Public,
            image: image.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let remote = mock();
        let a = remote.create_item(draft(None)).await.unwrap();
        let b = remote.create_item(draft(None)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.borrower.is_none());
    }

    #[tokio::test]
    async fn test_create_falls_back_to_placeholder_image() {
        let remote = mock();
        let created = remote.create_item(draft(None)).await.unwrap();
        assert!(created.image.starts_with("https://placehold.co/"));

        let kept = remote
            .create_item(draft(Some("https://example.com/cutter.jpg")))
            .await
            .unwrap();
        assert_eq!(kept.image, "https://example.com/cutter.jpg");
    }

    #[tokio::test]
    async fn test_armed_failures_reject_then_recover() {
        let remote = mock();
        remote.fail_next_calls(2);
        assert!(remote.fetch_my_gear().await.is_err());
        assert!(remote.delete_item(fixtures::item_id(101)).await.is_err());
        assert!(remote.fetch_my_gear().await.is_ok());
    }

    #[tokio::test]
    async fn test_location_suggestions_filter_substring() {
        let remote = mock();
        let hits = remote.location_suggestions("naGar").await.unwrap();
        assert!(hits.contains(&"Indiranagar, Bengaluru".to_string()));
        assert!(hits.contains(&"Jayanagar, Bengaluru".to_string()));
        assert!(!hits.contains(&"Whitefield, Bengaluru".to_string()));
    }

    #[tokio::test]
    async fn test_location_suggestions_empty_query() {
        let remote = mock();
        assert!(remote.location_suggestions("  ").await.unwrap().is_empty());
    }
}
