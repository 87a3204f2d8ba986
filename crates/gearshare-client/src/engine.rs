//! The application controller.
//!
//! [`GearShare`] is generic over the backend so the UI shell can hand it a
//! real integration while tests drive it with
//! [`gearshare_remote::MockRemote`].  All state lives behind one async
//! mutex; commands never hold the lock across the remote round-trip, which
//! is why the per-item in-flight guard exists (see [`crate::state::AppState`]).

use tokio::sync::Mutex;
use tracing::{info, warn};

use gearshare_remote::{RemoteApi, RemoteError};
use gearshare_shared::ItemId;
use gearshare_store::search::{filter_listings, parse_radius};
use gearshare_store::{GearItem, Listing, Message, OwnerProfile};

use crate::error::{EngineError, Result};
use crate::notify::Notifier;
use crate::state::{AppState, Selection, Tab};

/// Text shown whenever a backend call rejects.  Never retried automatically.
const REMOTE_FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

pub struct GearShare<R> {
    pub(crate) state: Mutex<AppState>,
    pub(crate) remote: R,
    pub(crate) notifier: Notifier,
}

impl<R: RemoteApi> GearShare<R> {
    pub fn new(remote: R) -> Self {
        Self::with_profile(remote, OwnerProfile::default())
    }

    pub fn with_profile(remote: R, profile: OwnerProfile) -> Self {
        Self {
            state: Mutex::new(AppState::new(profile)),
            remote,
            notifier: Notifier::new(),
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Fetch all three collections and replace local state with the result.
    pub async fn load_initial_data(&self) -> Result<()> {
        let fetched = tokio::try_join!(
            self.remote.fetch_available_gear(),
            self.remote.fetch_my_gear(),
            self.remote.fetch_messages(),
        );
        let (available, my_gear, messages) = match fetched {
            Ok(collections) => collections,
            Err(e) => return Err(self.report_remote_failure("load initial data", e)),
        };

        let mut state = self.state.lock().await;
        state.inventory.load(my_gear, available);
        state.mailbox.load(messages);
        info!(
            owned = state.inventory.owned().len(),
            listings = state.inventory.available().len(),
            messages = state.mailbox.messages().len(),
            "Initial data loaded"
        );
        Ok(())
    }

    // -- Read accessors --------------------------------------------------

    pub async fn owned_items(&self) -> Vec<GearItem> {
        self.state.lock().await.inventory.owned().to_vec()
    }

    /// The full availability list, unfiltered.
    pub async fn available_listings(&self) -> Vec<Listing> {
        self.state.lock().await.inventory.available().to_vec()
    }

    /// The availability list filtered through the current search query and
    /// radius.  Pure with respect to state: identical state gives an
    /// identical ordered result.
    pub async fn visible_listings(&self) -> Vec<Listing> {
        let state = self.state.lock().await;
        let radius = parse_radius(&state.search.radius);
        filter_listings(state.inventory.available(), &state.search.query, radius)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.state.lock().await.mailbox.messages().to_vec()
    }

    pub async fn unread_count(&self) -> usize {
        self.state.lock().await.mailbox.unread()
    }

    pub async fn location(&self) -> String {
        self.state.lock().await.location.clone()
    }

    pub async fn active_tab(&self) -> Tab {
        self.state.lock().await.active_tab
    }

    pub async fn selection(&self) -> Selection {
        self.state.lock().await.selection.clone()
    }

    // -- Transient UI state ----------------------------------------------

    pub async fn set_active_tab(&self, tab: Tab) {
        self.state.lock().await.active_tab = tab;
    }

    pub async fn set_search(&self, query: &str, radius: &str) {
        let mut state = self.state.lock().await;
        state.search.query = query.to_string();
        state.search.radius = radius.to_string();
    }

    pub async fn close_modal(&self) {
        self.state.lock().await.selection.close();
    }

    // -- Internals shared by the command modules --------------------------

    /// Mark an item as having a mutation in flight; a second mutation on the
    /// same id fails fast instead of racing the first to completion.
    pub(crate) async fn begin(&self, id: ItemId) -> Result<()> {
        let mut state = self.state.lock().await;
        if !state.in_flight.insert(id) {
            return Err(EngineError::Busy(id));
        }
        Ok(())
    }

    pub(crate) async fn finish(&self, id: ItemId) {
        self.state.lock().await.in_flight.remove(&id);
    }

    /// Log a rejected backend call and raise the user-facing notification.
    /// Local state is untouched by contract.
    pub(crate) fn report_remote_failure(&self, op: &str, err: RemoteError) -> EngineError {
        warn!(operation = op, error = %err, "Remote call rejected");
        self.notifier.show(REMOTE_FAILURE_NOTICE);
        EngineError::Remote(err)
    }
}
