//! Location commands: confirming a location change with the backend and
//! fetching autocomplete suggestions.

use tracing::{info, warn};

use gearshare_remote::RemoteApi;

use crate::engine::GearShare;
use crate::error::{EngineError, Result};

impl<R: RemoteApi> GearShare<R> {
    /// Change the user's location.  Applied only after the backend confirms;
    /// returns the canonical text the backend settled on.
    pub async fn update_location(&self, location: &str) -> Result<String> {
        let confirmed = match self.remote.update_location(location).await {
            Ok(text) => text,
            Err(e) => return Err(self.report_remote_failure("update location", e)),
        };

        self.state.lock().await.location = confirmed.clone();
        self.notifier.show("Location updated");
        info!(location = %confirmed, "Location updated");
        Ok(confirmed)
    }

    /// Autocomplete suggestions for the location field.  Read-only, so a
    /// failure is logged but not toasted.
    pub async fn location_suggestions(&self, query: &str) -> Result<Vec<String>> {
        self.remote.location_suggestions(query).await.map_err(|e| {
            warn!(error = %e, "Location suggestions failed");
            EngineError::Remote(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gearshare_remote::MockRemote;

    use super::*;

    async fn loaded() -> GearShare<MockRemote> {
        let gear = GearShare::new(MockRemote::with_latency(Duration::ZERO));
        gear.load_initial_data().await.unwrap();
        gear
    }

    #[tokio::test]
    async fn test_update_location_applies_after_confirm() {
        let gear = loaded().await;
        assert_eq!(gear.location().await, "Bengaluru, Karnataka");

        let confirmed = gear.update_location("Indiranagar, Bengaluru").await.unwrap();
        assert_eq!(confirmed, "Indiranagar, Bengaluru");
        assert_eq!(gear.location().await, "Indiranagar, Bengaluru");
        assert_eq!(gear.notifier().current().as_deref(), Some("Location updated"));
    }

    #[tokio::test]
    async fn test_rejected_location_update_keeps_old_value() {
        let gear = loaded().await;
        gear.remote().fail_next_calls(1);

        let err = gear.update_location("Indiranagar, Bengaluru").await.unwrap_err();
        assert!(matches!(err, EngineError::Remote(_)));
        assert_eq!(gear.location().await, "Bengaluru, Karnataka");
        assert_eq!(gear.notifier().shown_count(), 1);
    }

    #[tokio::test]
    async fn test_suggestions_pass_through() {
        let gear = loaded().await;
        let hits = gear.location_suggestions("hsr").await.unwrap();
        assert_eq!(hits, vec!["HSR Layout, Bengaluru".to_string()]);
        // Read-only path never raises a notification.
        assert_eq!(gear.notifier().shown_count(), 0);
    }
}
